//! # Example Object
//!
//! Sample values attached to media types, parameters and headers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named example value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Example {
    /// Short summary of the example.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Longer description of the example.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Embedded literal example value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// URI pointing to the example value, for payloads JSON cannot carry.
    #[serde(rename = "externalValue", skip_serializing_if = "Option::is_none")]
    pub external_value: Option<String>,
}

impl Example {
    /// Creates an empty example.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the summary of the example.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the description of the example.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the value of the example.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the external value reference.
    pub fn with_external_value(mut self, url: impl Into<String>) -> Self {
        self.external_value = Some(url.into());
        self
    }
}
