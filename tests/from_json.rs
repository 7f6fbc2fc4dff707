//! Parsing documents back from JSON.

use oas_builder::{AdditionalProperties, Document, HttpMethod, Operation, Schema, SpecError};
use pretty_assertions::assert_eq;

#[test]
fn test_round_trip_preserves_the_document() {
    let doc = Document::new("Test API", "1.0.0")
        .with_description("Round trip")
        .add_schema(
            "Pet",
            Schema::object()
                .with_required_property("id", Schema::int64())
                .with_property("name", Schema::string()),
        )
        .add_operation(
            "/pets/{petId}",
            HttpMethod::Get,
            Operation::new("getPet", "Get a pet", "Fetch one pet")
                .with_path_parameter("petId", "The pet to fetch", Schema::int64())
                .with_ok_response("The pet", Schema::reference("Pet")),
        );

    let json = doc.to_json_string().unwrap();
    let parsed = Document::from_json_str(&json).unwrap();
    assert_eq!(parsed, doc);
    assert_eq!(parsed.info.title, "Test API");
    assert_eq!(parsed.info.version, "1.0.0");
}

#[test]
fn test_additional_properties_boolean_inside_document() {
    let input = r#"{
        "openapi": "3.1.0",
        "info": {"title": "T", "version": "1"},
        "paths": {},
        "components": {
            "schemas": {
                "Open": {"type": "object", "additionalProperties": true},
                "Closed": {"type": "object", "additionalProperties": false}
            }
        }
    }"#;
    let doc = Document::from_json_str(input).unwrap();
    let schemas = &doc.components.as_ref().unwrap().schemas;
    assert_eq!(
        schemas["Open"].additional_properties,
        Some(AdditionalProperties::Boolean(true))
    );
    assert_eq!(
        schemas["Closed"].additional_properties,
        Some(AdditionalProperties::Boolean(false))
    );
}

#[test]
fn test_additional_properties_schema_inside_document() {
    let input = r#"{
        "openapi": "3.1.0",
        "info": {"title": "T", "version": "1"},
        "paths": {},
        "components": {
            "schemas": {
                "Bag": {"type": "object", "additionalProperties": {"type": "string"}}
            }
        }
    }"#;
    let doc = Document::from_json_str(input).unwrap();
    let bag = &doc.components.as_ref().unwrap().schemas["Bag"];
    match bag.additional_properties.as_ref().unwrap() {
        AdditionalProperties::Schema(schema) => {
            assert_eq!(schema.schema_type.as_deref(), Some("string"));
        }
        other => panic!("expected a schema, got {other:?}"),
    }
}

#[test]
fn test_additional_properties_rejects_other_json_kinds() {
    let input = r#"{
        "openapi": "3.1.0",
        "info": {"title": "T", "version": "1"},
        "paths": {},
        "components": {
            "schemas": {
                "Bad": {"type": "object", "additionalProperties": 5}
            }
        }
    }"#;
    let err = Document::from_json_str(input).unwrap_err();
    assert!(matches!(err, SpecError::Decode(_)));
}

#[test]
fn test_missing_info_is_a_decode_error() {
    let err = Document::from_json_str(r#"{"openapi": "3.1.0", "paths": {}}"#).unwrap_err();
    assert!(matches!(err, SpecError::Decode(_)));
}

#[test]
fn test_missing_paths_defaults_to_empty() {
    let doc =
        Document::from_json_str(r#"{"openapi": "3.1.0", "info": {"title": "T", "version": "1"}}"#)
            .unwrap();
    assert!(doc.paths.is_empty());
}

#[test]
fn test_from_json_slice_matches_from_json_str() {
    let doc = Document::new("Bytes", "2.0.0");
    let bytes = doc.to_json_bytes().unwrap();
    let parsed = Document::from_json_slice(&bytes).unwrap();
    assert_eq!(parsed, doc);
}
