//! # Parameter Object
//!
//! Path, query, header and cookie parameters for operations.

use crate::example::Example;
use crate::media_type::MediaType;
use crate::schema::Schema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// A templated segment of the URL path.
    Path,
    /// The URL query string.
    Query,
    /// A request header.
    Header,
    /// A cookie value.
    Cookie,
}

/// A single operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name as it appears in the request.
    pub name: String,
    /// Location of the parameter.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Description of the parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the parameter must be present. Path parameters are always required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Whether the parameter is deprecated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Whether an empty value is acceptable.
    #[serde(rename = "allowEmptyValue", skip_serializing_if = "Option::is_none")]
    pub allow_empty_value: Option<bool>,
    /// Serialization style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Explode modifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
    /// Whether reserved characters may pass through unescaped.
    #[serde(rename = "allowReserved", skip_serializing_if = "Option::is_none")]
    pub allow_reserved: Option<bool>,
    /// Schema describing the parameter value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    /// A literal example of the parameter value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Named examples of the parameter value.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub examples: IndexMap<String, Example>,
    /// Content map alternative to `schema` for complex parameter values.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,
}

impl Parameter {
    /// Creates a new parameter.
    pub fn new(
        name: impl Into<String>,
        location: ParameterLocation,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            description: Some(description.into()),
            required: None,
            deprecated: None,
            allow_empty_value: None,
            style: None,
            explode: None,
            allow_reserved: None,
            schema: None,
            example: None,
            examples: IndexMap::new(),
            content: IndexMap::new(),
        }
    }

    /// Creates a path parameter. Path parameters are always required.
    pub fn path(name: impl Into<String>, description: impl Into<String>, schema: Schema) -> Self {
        Self {
            required: Some(true),
            schema: Some(schema),
            ..Self::new(name, ParameterLocation::Path, description)
        }
    }

    /// Creates a query parameter.
    pub fn query(
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        schema: Schema,
    ) -> Self {
        Self {
            required: Some(required),
            schema: Some(schema),
            ..Self::new(name, ParameterLocation::Query, description)
        }
    }

    /// Creates a header parameter.
    pub fn header(
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        schema: Schema,
    ) -> Self {
        Self {
            required: Some(required),
            schema: Some(schema),
            ..Self::new(name, ParameterLocation::Header, description)
        }
    }

    /// Creates a cookie parameter.
    pub fn cookie(
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        schema: Schema,
    ) -> Self {
        Self {
            required: Some(required),
            schema: Some(schema),
            ..Self::new(name, ParameterLocation::Cookie, description)
        }
    }

    /// Sets whether the parameter is required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Marks the parameter as deprecated.
    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = Some(deprecated);
        self
    }

    /// Sets whether empty values are allowed.
    pub fn with_allow_empty_value(mut self, allow: bool) -> Self {
        self.allow_empty_value = Some(allow);
        self
    }

    /// Sets the parameter style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Sets the explode option.
    pub fn with_explode(mut self, explode: bool) -> Self {
        self.explode = Some(explode);
        self
    }

    /// Sets whether reserved characters are allowed.
    pub fn with_allow_reserved(mut self, allow: bool) -> Self {
        self.allow_reserved = Some(allow);
        self
    }

    /// Sets the schema describing the parameter value.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Sets a literal example for the parameter.
    pub fn with_example(mut self, example: impl Into<Value>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Adds a named example.
    pub fn with_named_example(mut self, name: impl Into<String>, example: Example) -> Self {
        self.examples.insert(name.into(), example);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_wire_spelling() {
        let param = Parameter::path("id", "Resource id", Schema::int64());
        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(value["in"], "path");
        assert_eq!(value["required"], true);
    }

    #[test]
    fn test_new_parameter_has_no_flags() {
        let param = Parameter::new("trace", ParameterLocation::Header, "Trace id");
        let value = serde_json::to_value(&param).unwrap();
        assert!(value.get("required").is_none());
        assert!(value.get("schema").is_none());
    }
}
