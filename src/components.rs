//! # Components Object
//!
//! The registry of reusable, named objects referenced elsewhere via `$ref`
//! strings. References are not resolved by this crate.

use crate::callback::Callback;
use crate::example::Example;
use crate::header::Header;
use crate::link::Link;
use crate::parameter::Parameter;
use crate::request_body::RequestBody;
use crate::response::Response;
use crate::schema::Schema;
use crate::security::SecurityScheme;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reusable object registries, one map per reusable kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Reusable schemas.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<String, Schema>,
    /// Reusable responses.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, Response>,
    /// Reusable parameters.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, Parameter>,
    /// Reusable examples.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub examples: IndexMap<String, Example>,
    /// Reusable request bodies.
    #[serde(rename = "requestBodies", default, skip_serializing_if = "IndexMap::is_empty")]
    pub request_bodies: IndexMap<String, RequestBody>,
    /// Reusable headers.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, Header>,
    /// Reusable security schemes.
    #[serde(rename = "securitySchemes", default, skip_serializing_if = "IndexMap::is_empty")]
    pub security_schemes: IndexMap<String, SecurityScheme>,
    /// Reusable links.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub links: IndexMap<String, Link>,
    /// Reusable callbacks.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub callbacks: IndexMap<String, Callback>,
}

impl Components {
    /// Creates an empty registry with all nine maps ready.
    pub fn new() -> Self {
        Self::default()
    }
}
