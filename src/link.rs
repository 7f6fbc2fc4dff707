//! # Link Object
//!
//! Design-time relationships from a response to other operations.

use crate::server::Server;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A link from a response to another operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// A relative or absolute URI reference to the target operation.
    #[serde(rename = "operationRef", skip_serializing_if = "Option::is_none")]
    pub operation_ref: Option<String>,
    /// The `operationId` of an existing operation in this document.
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Parameters to pass to the target operation, as constants or runtime expressions.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, Value>,
    /// Body to use when calling the target operation.
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
    /// Description of the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Server to use for the target operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Server>,
}

impl Link {
    /// Creates an empty link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation reference.
    pub fn with_operation_ref(mut self, reference: impl Into<String>) -> Self {
        self.operation_ref = Some(reference.into());
        self
    }

    /// Sets the operation ID.
    pub fn with_operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = Some(operation_id.into());
        self
    }

    /// Adds a parameter to the link.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Sets the request body for the link.
    pub fn with_request_body(mut self, body: impl Into<Value>) -> Self {
        self.request_body = Some(body.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the server for the link.
    pub fn with_server(mut self, server: Server) -> Self {
        self.server = Some(server);
        self
    }
}
