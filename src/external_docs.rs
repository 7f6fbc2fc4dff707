//! # External Documentation Object
//!
//! Pointer to additional documentation hosted outside the description itself.

use serde::{Deserialize, Serialize};

/// A reference to external documentation for an API, tag, operation or schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalDocs {
    /// Short description of the target documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The URL for the target documentation.
    pub url: String,
}

impl ExternalDocs {
    /// Creates external documentation pointing at the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            description: None,
            url: url.into(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
