//! # Schema Object
//!
//! JSON-Schema-shaped type descriptors, including the dual-shape
//! `additionalProperties` field that marshals as either a bare boolean or a
//! nested schema object.

use crate::external_docs::ExternalDocs;
use indexmap::IndexMap;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A type descriptor for request/response bodies and parameter values.
///
/// Every constraint field is optional so that "unset" stays distinguishable
/// from a zero value and is omitted from the serialized document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Reference to a reusable schema under `components`. When set, the
    /// remaining fields are conventionally left empty; references are not
    /// resolved by this crate.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Short title of the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Numeric multiple-of constraint.
    #[serde(rename = "multipleOf", skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    /// Upper numeric bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Whether `maximum` is exclusive.
    #[serde(rename = "exclusiveMaximum", skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<bool>,
    /// Lower numeric bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Whether `minimum` is exclusive.
    #[serde(rename = "exclusiveMinimum", skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<bool>,
    /// Maximum string length.
    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Minimum string length.
    #[serde(rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Regular expression constraint on string values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Maximum array length.
    #[serde(rename = "maxItems", skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    /// Minimum array length.
    #[serde(rename = "minItems", skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    /// Whether array items must be unique.
    #[serde(rename = "uniqueItems", skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
    /// Maximum number of object properties.
    #[serde(rename = "maxProperties", skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,
    /// Minimum number of object properties.
    #[serde(rename = "minProperties", skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,
    /// Property names that must be present. Entries should name keys of
    /// `properties`; well-formedness is the caller's responsibility.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Allowed literal values.
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    /// The JSON type name (`string`, `integer`, `number`, `boolean`, `array`, `object`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    /// Composition: value must match all of these schemas.
    #[serde(rename = "allOf", default, skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<Schema>,
    /// Composition: value must match exactly one of these schemas.
    #[serde(rename = "oneOf", default, skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<Schema>,
    /// Composition: value must match at least one of these schemas.
    #[serde(rename = "anyOf", default, skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<Schema>,
    /// Value must not match this schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<Schema>>,
    /// Item schema for arrays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Named property schemas for objects.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
    /// Whether (or to what schema) extra object properties are allowed.
    #[serde(rename = "additionalProperties", skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,
    /// Description of the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Format qualifier for the type (`int64`, `date-time`, `uuid`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Default value.
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    /// Whether `null` is an acceptable value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    /// Polymorphism discriminator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Discriminator>,
    /// Whether the value is only sent in responses.
    #[serde(rename = "readOnly", skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// Whether the value is only sent in requests.
    #[serde(rename = "writeOnly", skip_serializing_if = "Option::is_none")]
    pub write_only: Option<bool>,
    /// XML serialization metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml: Option<Xml>,
    /// External documentation for the schema.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,
    /// A literal example value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Whether the schema is deprecated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
}

impl Schema {
    /// Creates a `string` schema.
    pub fn string() -> Self {
        Self {
            schema_type: Some("string".to_string()),
            ..Self::default()
        }
    }

    /// Creates an `integer` schema.
    pub fn integer() -> Self {
        Self {
            schema_type: Some("integer".to_string()),
            ..Self::default()
        }
    }

    /// Creates a `number` schema.
    pub fn number() -> Self {
        Self {
            schema_type: Some("number".to_string()),
            ..Self::default()
        }
    }

    /// Creates a `boolean` schema.
    pub fn boolean() -> Self {
        Self {
            schema_type: Some("boolean".to_string()),
            ..Self::default()
        }
    }

    /// Creates an `array` schema with the given item schema.
    pub fn array(items: Schema) -> Self {
        Self {
            schema_type: Some("array".to_string()),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    /// Creates an `object` schema with an empty, ready property map.
    pub fn object() -> Self {
        Self {
            schema_type: Some("object".to_string()),
            ..Self::default()
        }
    }

    /// Creates a schema that is only a `$ref` to the named reusable
    /// component schema, e.g. `reference("Pet")` points at
    /// `#/components/schemas/Pet`. For refs outside the components
    /// registry set the `reference` field directly.
    pub fn reference(name: impl Into<String>) -> Self {
        Self {
            reference: Some(format!("#/components/schemas/{}", name.into())),
            ..Self::default()
        }
    }

    /// Creates an `int32` integer schema.
    pub fn int32() -> Self {
        Self::integer().with_format("int32")
    }

    /// Creates an `int64` integer schema.
    pub fn int64() -> Self {
        Self::integer().with_format("int64")
    }

    /// Creates a `float` number schema.
    pub fn float() -> Self {
        Self::number().with_format("float")
    }

    /// Creates a `double` number schema.
    pub fn double() -> Self {
        Self::number().with_format("double")
    }

    /// Creates an `email` string schema.
    pub fn email() -> Self {
        Self::string().with_format("email")
    }

    /// Creates a `uuid` string schema.
    pub fn uuid() -> Self {
        Self::string().with_format("uuid")
    }

    /// Creates a `date` string schema.
    pub fn date() -> Self {
        Self::string().with_format("date")
    }

    /// Creates a `date-time` string schema.
    pub fn date_time() -> Self {
        Self::string().with_format("date-time")
    }

    /// Creates a `password` string schema.
    pub fn password() -> Self {
        Self::string().with_format("password")
    }

    /// Creates the common identifier schema (int64 with a description).
    pub fn id() -> Self {
        Self::int64().with_description("Unique identifier")
    }

    /// Creates the common pagination object schema.
    pub fn pagination() -> Self {
        Self::object()
            .with_required_property("page", Self::int32().with_description("Current page number"))
            .with_required_property(
                "limit",
                Self::int32().with_description("Number of items per page"),
            )
            .with_required_property(
                "total",
                Self::int32().with_description("Total number of items"),
            )
            .with_property(
                "hasNext",
                Self::boolean().with_description("Whether there are more pages"),
            )
    }

    /// Sets the format qualifier.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a literal example value.
    pub fn with_example(mut self, example: impl Into<Value>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Sets a default value.
    pub fn with_default(mut self, default_value: impl Into<Value>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Replaces the allowed enum values.
    pub fn with_enum_values(mut self, values: Vec<Value>) -> Self {
        self.enum_values = values;
        self
    }

    /// Sets the minimum string length.
    pub fn with_min_length(mut self, min: u64) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the maximum string length.
    pub fn with_max_length(mut self, max: u64) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Sets a regular expression pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets the minimum numeric value.
    pub fn with_minimum(mut self, min: f64) -> Self {
        self.minimum = Some(min);
        self
    }

    /// Sets the maximum numeric value.
    pub fn with_maximum(mut self, max: f64) -> Self {
        self.maximum = Some(max);
        self
    }

    /// Sets whether the minimum bound is exclusive.
    pub fn with_exclusive_minimum(mut self, exclusive: bool) -> Self {
        self.exclusive_minimum = Some(exclusive);
        self
    }

    /// Sets whether the maximum bound is exclusive.
    pub fn with_exclusive_maximum(mut self, exclusive: bool) -> Self {
        self.exclusive_maximum = Some(exclusive);
        self
    }

    /// Sets the multiple-of constraint.
    pub fn with_multiple_of(mut self, multiple_of: f64) -> Self {
        self.multiple_of = Some(multiple_of);
        self
    }

    /// Sets the minimum array length.
    pub fn with_min_items(mut self, min: u64) -> Self {
        self.min_items = Some(min);
        self
    }

    /// Sets the maximum array length.
    pub fn with_max_items(mut self, max: u64) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Sets the unique items constraint.
    pub fn with_unique_items(mut self, unique: bool) -> Self {
        self.unique_items = Some(unique);
        self
    }

    /// Sets the minimum number of object properties.
    pub fn with_min_properties(mut self, min: u64) -> Self {
        self.min_properties = Some(min);
        self
    }

    /// Sets the maximum number of object properties.
    pub fn with_max_properties(mut self, max: u64) -> Self {
        self.max_properties = Some(max);
        self
    }

    /// Adds a named property schema.
    pub fn with_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Adds a named property schema and marks it required.
    pub fn with_required_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        let name = name.into();
        self.required.push(name.clone());
        self.properties.insert(name, schema);
        self
    }

    /// Appends property names to the required list.
    pub fn with_required(mut self, names: Vec<String>) -> Self {
        self.required.extend(names);
        self
    }

    /// Sets the item schema for arrays.
    pub fn with_items(mut self, items: Schema) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    /// Sets the negated schema.
    pub fn with_not(mut self, not: Schema) -> Self {
        self.not = Some(Box::new(not));
        self
    }

    /// Replaces the `allOf` composition list.
    pub fn with_all_of(mut self, schemas: Vec<Schema>) -> Self {
        self.all_of = schemas;
        self
    }

    /// Replaces the `oneOf` composition list.
    pub fn with_one_of(mut self, schemas: Vec<Schema>) -> Self {
        self.one_of = schemas;
        self
    }

    /// Replaces the `anyOf` composition list.
    pub fn with_any_of(mut self, schemas: Vec<Schema>) -> Self {
        self.any_of = schemas;
        self
    }

    /// Sets the additional-properties rule; accepts a `bool` or a `Schema`.
    pub fn with_additional_properties(
        mut self,
        additional: impl Into<AdditionalProperties>,
    ) -> Self {
        self.additional_properties = Some(additional.into());
        self
    }

    /// Sets the polymorphism discriminator.
    pub fn with_discriminator(mut self, discriminator: Discriminator) -> Self {
        self.discriminator = Some(discriminator);
        self
    }

    /// Sets the nullable flag.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    /// Sets the read-only flag.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }

    /// Sets the write-only flag.
    pub fn with_write_only(mut self, write_only: bool) -> Self {
        self.write_only = Some(write_only);
        self
    }

    /// Marks the schema as deprecated.
    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = Some(deprecated);
        self
    }

    /// Sets XML serialization metadata.
    pub fn with_xml(mut self, xml: Xml) -> Self {
        self.xml = Some(xml);
        self
    }

    /// Sets external documentation for the schema.
    pub fn with_external_docs(mut self, url: impl Into<String>, description: Option<String>) -> Self {
        self.external_docs = Some(ExternalDocs {
            description,
            url: url.into(),
        });
        self
    }
}

/// Whether extra object properties are allowed, as a boolean or a schema
/// constraining them. Exactly one shape exists at a time by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    /// Extra properties are allowed (`true`) or rejected (`false`).
    Boolean(bool),
    /// Extra properties must conform to the nested schema.
    Schema(Box<Schema>),
}

/// The serialized default when nothing was specified is `false`.
impl Default for AdditionalProperties {
    fn default() -> Self {
        AdditionalProperties::Boolean(false)
    }
}

impl From<bool> for AdditionalProperties {
    fn from(allowed: bool) -> Self {
        AdditionalProperties::Boolean(allowed)
    }
}

impl From<Schema> for AdditionalProperties {
    fn from(schema: Schema) -> Self {
        AdditionalProperties::Schema(Box::new(schema))
    }
}

impl Serialize for AdditionalProperties {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AdditionalProperties::Boolean(allowed) => serializer.serialize_bool(*allowed),
            AdditionalProperties::Schema(schema) => schema.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AdditionalProperties {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        // Boolean is tried first; its failure is the one reported when the
        // schema attempt fails too.
        let bool_err = match serde_json::from_value::<bool>(raw.clone()) {
            Ok(allowed) => return Ok(AdditionalProperties::Boolean(allowed)),
            Err(e) => e,
        };
        if let Ok(schema) = serde_json::from_value::<Schema>(raw) {
            return Ok(AdditionalProperties::Schema(Box::new(schema)));
        }
        Err(DeError::custom(bool_err))
    }
}

/// Polymorphism discriminator for `oneOf`/`anyOf`/`allOf` compositions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discriminator {
    /// Name of the property holding the discriminating value.
    #[serde(rename = "propertyName")]
    pub property_name: String,
    /// Mapping from discriminating values to schema names or references.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub mapping: IndexMap<String, String>,
}

impl Discriminator {
    /// Creates a discriminator on the given property.
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            mapping: IndexMap::new(),
        }
    }

    /// Adds a value-to-schema mapping entry.
    pub fn with_mapping(mut self, value: impl Into<String>, schema: impl Into<String>) -> Self {
        self.mapping.insert(value.into(), schema.into());
        self
    }
}

/// XML serialization metadata for a schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xml {
    /// Element or attribute name override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// XML namespace URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Namespace prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Whether the value is serialized as an attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<bool>,
    /// Whether array items are wrapped in a container element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapped: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_additional_properties_bool_encodes_as_literal() {
        let ap = AdditionalProperties::Boolean(true);
        assert_eq!(serde_json::to_value(&ap).unwrap(), json!(true));
    }

    #[test]
    fn test_additional_properties_schema_encodes_as_object() {
        let ap = AdditionalProperties::from(Schema::string());
        assert_eq!(serde_json::to_value(&ap).unwrap(), json!({"type": "string"}));
    }

    #[test]
    fn test_additional_properties_decodes_boolean_first() {
        let ap: AdditionalProperties = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(ap, AdditionalProperties::Boolean(true));
    }

    #[test]
    fn test_additional_properties_decodes_schema() {
        let ap: AdditionalProperties = serde_json::from_value(json!({"type": "string"})).unwrap();
        match ap {
            AdditionalProperties::Schema(schema) => {
                assert_eq!(schema.schema_type.as_deref(), Some("string"));
            }
            other => panic!("Expected schema shape, got {:?}", other),
        }
    }

    #[test]
    fn test_additional_properties_rejects_other_shapes() {
        let result = serde_json::from_value::<AdditionalProperties>(json!(5));
        let message = result.unwrap_err().to_string();
        // The reported failure is the boolean attempt, which ran first.
        assert!(message.contains("invalid type"), "unexpected: {}", message);
    }

    #[test]
    fn test_additional_properties_default_is_false() {
        assert_eq!(
            AdditionalProperties::default(),
            AdditionalProperties::Boolean(false)
        );
    }

    #[test]
    fn test_required_property_tracks_name() {
        let schema = Schema::object()
            .with_required_property("id", Schema::int64())
            .with_property("note", Schema::string());
        assert_eq!(schema.required, vec!["id".to_string()]);
        assert!(schema.properties.contains_key("note"));
    }

    #[test]
    fn test_format_shortcuts() {
        assert_eq!(Schema::date_time().format.as_deref(), Some("date-time"));
        assert_eq!(Schema::int32().schema_type.as_deref(), Some("integer"));
        assert_eq!(Schema::double().format.as_deref(), Some("double"));
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let value = serde_json::to_value(Schema::string()).unwrap();
        assert_eq!(value, json!({"type": "string"}));
    }
}
