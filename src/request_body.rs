//! # Request Body Object
//!
//! The body an operation accepts, keyed by media type.

use crate::media_type::MediaType;
use crate::schema::Schema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The request body of an operation.
///
/// `content` is always serialized, even when empty; it is the one required
/// field of this object on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Reference to a reusable request body under `components`.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Description of the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Media type entries describing the body.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
    /// Whether the body must be present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl RequestBody {
    /// Creates a new request body with an empty content map.
    pub fn new(description: impl Into<String>, required: bool) -> Self {
        Self {
            reference: None,
            description: Some(description.into()),
            content: IndexMap::new(),
            required: Some(required),
        }
    }

    /// Creates a request body with `application/json` content.
    pub fn json(description: impl Into<String>, required: bool, schema: Schema) -> Self {
        Self::new(description, required).with_json_content(schema)
    }

    /// Adds content for a media type.
    pub fn with_content(mut self, media_type: impl Into<String>, content: MediaType) -> Self {
        self.content.insert(media_type.into(), content);
        self
    }

    /// Adds `application/json` content with the given schema.
    pub fn with_json_content(self, schema: Schema) -> Self {
        self.with_content("application/json", MediaType::json(schema))
    }

    /// Sets whether the request body is required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }
}
