//! End-to-end serialization of a built document.

use oas_builder::{
    Contact, Document, HttpMethod, License, Operation, Response, Schema, SecurityRequirement,
    SecurityScheme, Server, Tag,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn pet_store() -> Document {
    Document::new("Pet Store API", "1.0.0")
        .with_description("A sample pet store")
        .with_contact(Contact::new().with_email("support@example.com"))
        .with_license(License::new("MIT"))
        .add_server(Server::new("https://api.example.com/v1"))
        .add_tag(Tag::new("pets").with_description("Pet operations"))
        .add_schema(
            "Pet",
            Schema::object()
                .with_required_property("id", Schema::int64())
                .with_required_property("name", Schema::string()),
        )
        .add_security_scheme("bearerAuth", SecurityScheme::bearer())
        .add_operation(
            "/pets",
            HttpMethod::Get,
            Operation::new("listPets", "List pets", "Returns all pets")
                .with_tag("pets")
                .with_ok_response("A pet list", Schema::array(Schema::reference("Pet"))),
        )
        .add_operation(
            "/pets",
            HttpMethod::Post,
            Operation::new("createPet", "Create a pet", "Adds a pet")
                .with_tag("pets")
                .with_json_request_body("The pet to add", true, Schema::reference("Pet"))
                .with_created_response("The created pet", Schema::reference("Pet")),
        )
        .add_security_requirement(SecurityRequirement::bearer("bearerAuth"))
}

#[test]
fn test_pet_store_document_shape() {
    let doc = pet_store();
    let value: Value = serde_json::from_str(&doc.to_json_string().unwrap()).unwrap();

    assert_eq!(value["openapi"], json!("3.1.0"));
    assert_eq!(value["info"]["title"], json!("Pet Store API"));
    assert_eq!(value["info"]["license"], json!({"name": "MIT"}));
    assert_eq!(value["servers"][0]["url"], json!("https://api.example.com/v1"));
    assert_eq!(value["tags"], json!([{"name": "pets", "description": "Pet operations"}]));
    assert_eq!(value["security"], json!([{"bearerAuth": []}]));

    let get = &value["paths"]["/pets"]["get"];
    assert_eq!(get["operationId"], json!("listPets"));
    assert_eq!(
        get["responses"]["200"]["content"]["application/json"]["schema"]["items"]["$ref"],
        json!("#/components/schemas/Pet")
    );

    let post = &value["paths"]["/pets"]["post"];
    assert_eq!(post["requestBody"]["required"], json!(true));
    assert!(post["responses"]["201"].is_object());

    let scheme = &value["components"]["securitySchemes"]["bearerAuth"];
    assert_eq!(scheme["type"], json!("http"));
    assert_eq!(scheme["scheme"], json!("bearer"));
}

#[test]
fn test_fresh_document_emits_empty_paths_and_nothing_else_optional() {
    let value = serde_json::to_value(Document::new("Empty", "0.1.0")).unwrap();
    assert_eq!(
        value,
        json!({
            "openapi": "3.1.0",
            "info": {"title": "Empty", "version": "0.1.0"},
            "paths": {}
        })
    );
}

#[test]
fn test_description_only_response_has_no_content_key() {
    let value = serde_json::to_value(Response::new("No Content")).unwrap();
    assert_eq!(value, json!({"description": "No Content"}));
}

#[test]
fn test_schema_unset_fields_are_omitted() {
    let value = serde_json::to_value(Schema::string()).unwrap();
    assert_eq!(value, json!({"type": "string"}));
}

#[test]
fn test_key_order_follows_insertion_order() {
    let doc = Document::new("Ordered", "1.0.0")
        .add_schema("Zebra", Schema::object())
        .add_schema("Aardvark", Schema::object());
    let json = doc.to_json_string().unwrap();
    let zebra = json.find("\"Zebra\"").unwrap();
    let aardvark = json.find("\"Aardvark\"").unwrap();
    assert!(zebra < aardvark);
}
