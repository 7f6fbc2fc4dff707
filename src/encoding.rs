//! # Encoding Object
//!
//! Per-property serialization rules for multipart and form request bodies.

use crate::header::Header;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Encoding definition applied to a single request body property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Encoding {
    /// Content-Type for the property.
    #[serde(rename = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Additional headers carried with the property (e.g. Content-Disposition).
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, Header>,
    /// Serialization style for the property value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Explode modifier for array/object values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
    /// Whether reserved characters may pass through unescaped.
    #[serde(rename = "allowReserved", skip_serializing_if = "Option::is_none")]
    pub allow_reserved: Option<bool>,
}

impl Encoding {
    /// Creates an empty encoding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Adds a header to the encoding.
    pub fn with_header(mut self, name: impl Into<String>, header: Header) -> Self {
        self.headers.insert(name.into(), header);
        self
    }

    /// Sets the style.
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
}
