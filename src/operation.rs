//! # Operation Object
//!
//! The documentation for one HTTP method on one path, with convenience
//! builders for common parameter and response shapes.

use crate::callback::Callback;
use crate::external_docs::ExternalDocs;
use crate::media_type::MediaType;
use crate::parameter::Parameter;
use crate::request_body::RequestBody;
use crate::response::Response;
use crate::schema::Schema;
use crate::security::SecurityRequirement;
use crate::server::Server;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One method handler's documentation.
///
/// `responses` is always serialized, even when empty; it is required on the
/// wire for every operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Tags grouping this operation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Short summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// External documentation for the operation.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,
    /// Unique identifier of the operation within the document.
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Parameters accepted by the operation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Request body accepted by the operation.
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Responses keyed by status code (or `default`).
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
    /// Callback definitions keyed by name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub callbacks: IndexMap<String, Callback>,
    /// Whether the operation is deprecated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Security requirements overriding the document-level list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityRequirement>,
    /// Servers overriding the document-level list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
}

impl Operation {
    /// Creates a new operation with identifier, summary and description set
    /// and a ready (empty) responses map.
    pub fn new(
        operation_id: impl Into<String>,
        summary: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            summary: Some(summary.into()),
            description: Some(description.into()),
            operation_id: Some(operation_id.into()),
            ..Self::default()
        }
    }

    /// Adds a single tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Appends several tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// Marks the operation as deprecated.
    pub fn with_deprecated(mut self) -> Self {
        self.deprecated = Some(true);
        self
    }

    /// Adds a parameter.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Adds a required path parameter.
    pub fn with_path_parameter(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        schema: Schema,
    ) -> Self {
        self.with_parameter(Parameter::path(name, description, schema))
    }

    /// Adds a query parameter.
    pub fn with_query_parameter(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        schema: Schema,
    ) -> Self {
        self.with_parameter(Parameter::query(name, description, required, schema))
    }

    /// Adds a header parameter.
    pub fn with_header_parameter(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        schema: Schema,
    ) -> Self {
        self.with_parameter(Parameter::header(name, description, required, schema))
    }

    /// Sets the request body.
    pub fn with_request_body(
        mut self,
        description: impl Into<String>,
        required: bool,
        content: IndexMap<String, MediaType>,
    ) -> Self {
        self.request_body = Some(RequestBody {
            description: Some(description.into()),
            required: Some(required),
            content,
            ..RequestBody::default()
        });
        self
    }

    /// Sets an `application/json` request body with the given schema.
    pub fn with_json_request_body(
        mut self,
        description: impl Into<String>,
        required: bool,
        schema: Schema,
    ) -> Self {
        self.request_body = Some(RequestBody::json(description, required, schema));
        self
    }

    /// Adds a response under the given status code.
    pub fn with_response(mut self, code: impl Into<String>, response: Response) -> Self {
        self.responses.insert(code.into(), response);
        self
    }

    /// Adds a JSON response under the given status code.
    pub fn with_json_response(
        self,
        code: impl Into<String>,
        description: impl Into<String>,
        schema: Schema,
    ) -> Self {
        self.with_response(code, Response::json(description, schema))
    }

    /// Adds a 200 OK JSON response.
    pub fn with_ok_response(self, description: impl Into<String>, schema: Schema) -> Self {
        self.with_json_response("200", description, schema)
    }

    /// Adds a 201 Created JSON response.
    pub fn with_created_response(self, description: impl Into<String>, schema: Schema) -> Self {
        self.with_json_response("201", description, schema)
    }

    /// Adds a 204 No Content response.
    pub fn with_no_content_response(self) -> Self {
        self.with_response("204", Response::new("No Content"))
    }

    /// Adds a 400 Bad Request response.
    pub fn with_bad_request_response(self, description: impl Into<String>) -> Self {
        self.with_response("400", Response::new(description))
    }

    /// Adds a 401 Unauthorized response.
    pub fn with_unauthorized_response(self, description: impl Into<String>) -> Self {
        self.with_response("401", Response::new(description))
    }

    /// Adds a 403 Forbidden response.
    pub fn with_forbidden_response(self, description: impl Into<String>) -> Self {
        self.with_response("403", Response::new(description))
    }

    /// Adds a 404 Not Found response.
    pub fn with_not_found_response(self, description: impl Into<String>) -> Self {
        self.with_response("404", Response::new(description))
    }

    /// Adds a 500 Internal Server Error response.
    pub fn with_internal_server_error_response(self, description: impl Into<String>) -> Self {
        self.with_response("500", Response::new(description))
    }

    /// Adds a callback definition.
    pub fn with_callback(mut self, name: impl Into<String>, callback: Callback) -> Self {
        self.callbacks.insert(name.into(), callback);
        self
    }

    /// Sets external documentation for the operation.
    pub fn with_external_docs(mut self, url: impl Into<String>, description: Option<String>) -> Self {
        self.external_docs = Some(ExternalDocs {
            description,
            url: url.into(),
        });
        self
    }

    /// Adds a security requirement scoped to this operation.
    pub fn with_security(mut self, requirement: SecurityRequirement) -> Self {
        self.security.push(requirement);
        self
    }

    /// Adds a server override scoped to this operation.
    pub fn with_server(mut self, server: Server) -> Self {
        self.servers.push(server);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_operation_has_ready_responses_map() {
        let op = Operation::new("getUser", "Get User", "Get user by ID");
        assert!(op.responses.is_empty());
        // Required on the wire even when empty.
        let value = serde_json::to_value(&op).unwrap();
        assert_eq!(value["responses"], serde_json::json!({}));
    }

    #[test]
    fn test_status_shortcuts_fill_the_map() {
        let op = Operation::new("createPet", "Create", "Create a pet")
            .with_created_response("Created", Schema::reference("Pet"))
            .with_bad_request_response("Invalid input")
            .with_no_content_response();
        assert_eq!(
            op.responses.keys().collect::<Vec<_>>(),
            vec!["201", "400", "204"]
        );
        assert!(op.responses["400"].content.is_empty());
    }

    #[test]
    fn test_json_request_body() {
        let op = Operation::new("createPet", "Create", "Create a pet")
            .with_json_request_body("Pet to add", true, Schema::object());
        let body = op.request_body.unwrap();
        assert_eq!(body.required, Some(true));
        assert!(body.content.contains_key("application/json"));
    }
}
