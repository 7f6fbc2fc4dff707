//! # Response Object
//!
//! One documented response, keyed by status code in the owning map.

use crate::header::Header;
use crate::link::Link;
use crate::media_type::MediaType;
use crate::schema::Schema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single response of an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Description of the response. Required on the wire.
    pub description: String,
    /// Headers sent with the response.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, Header>,
    /// Body content keyed by media type.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,
    /// Links to related operations.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub links: IndexMap<String, Link>,
}

impl Response {
    /// Creates a new response with the required description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            headers: IndexMap::new(),
            content: IndexMap::new(),
            links: IndexMap::new(),
        }
    }

    /// Creates a response with `application/json` content.
    pub fn json(description: impl Into<String>, schema: Schema) -> Self {
        Self::new(description).with_json_content(schema)
    }

    /// Adds a header to the response.
    pub fn with_header(mut self, name: impl Into<String>, header: Header) -> Self {
        self.headers.insert(name.into(), header);
        self
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

    /// Adds a link to the response.
    pub fn with_link(mut self, name: impl Into<String>, link: Link) -> Self {
        self.links.insert(name.into(), link);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_only_response_omits_content() {
        let response = Response::new("No Content");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["description"], "No Content");
        assert!(value.get("content").is_none());
        assert!(value.get("headers").is_none());
        assert!(value.get("links").is_none());
    }
}
