//! # Document Object
//!
//! The root aggregate of one API description, plus the JSON serializer
//! entry points.
//!
//! All builders here consume `self` and return the modified value. The
//! original mixed style (pointer-mutating root, copy-and-return nested
//! values) is deliberately unified into consuming builders so a dropped
//! chain result is a compile-time `unused_must_use`-style smell rather
//! than a silent no-op.

use crate::callback::Callback;
use crate::components::Components;
use crate::example::Example;
use crate::external_docs::ExternalDocs;
use crate::header::Header;
use crate::info::{Contact, Info, License};
use crate::link::Link;
use crate::operation::Operation;
use crate::parameter::Parameter;
use crate::path_item::{HttpMethod, PathItem};
use crate::request_body::RequestBody;
use crate::response::Response;
use crate::schema::Schema;
use crate::security::{SecurityRequirement, SecurityScheme};
use crate::server::Server;
use crate::tag::Tag;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The OpenAPI version new documents are tagged with.
pub const DEFAULT_OPENAPI_VERSION: &str = "3.1.0";

/// The root OpenAPI document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The OpenAPI specification version this document targets.
    pub openapi: String,
    /// Metadata about the API.
    pub info: Info,
    /// Servers hosting the API.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    /// Path items keyed by URL path. Always serialized, even when empty.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Reusable component registries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    /// Document-level security requirements.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityRequirement>,
    /// Tag metadata.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    /// External documentation for the whole API.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,
}

impl Document {
    /// Creates a new document with the required title and version, tagged
    /// with [`DEFAULT_OPENAPI_VERSION`]. Paths and tags start empty, never
    /// absent, so `add_…` calls always have a ready container.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            openapi: DEFAULT_OPENAPI_VERSION.to_string(),
            info: Info::new(title, version),
            servers: Vec::new(),
            paths: IndexMap::new(),
            components: None,
            security: Vec::new(),
            tags: Vec::new(),
            external_docs: None,
        }
    }

    /// Overrides the OpenAPI version literal the document is tagged with.
    pub fn with_openapi_version(mut self, version: impl Into<String>) -> Self {
        self.openapi = version.into();
        self
    }

    /// Sets the API description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.info.description = Some(description.into());
        self
    }

    /// Sets the Terms of Service URL.
    pub fn with_terms_of_service(mut self, terms: impl Into<String>) -> Self {
        self.info.terms_of_service = Some(terms.into());
        self
    }

    /// Sets contact metadata.
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.info.contact = Some(contact);
        self
    }

    /// Sets license metadata.
    pub fn with_license(mut self, license: License) -> Self {
        self.info.license = Some(license);
        self
    }

    /// Sets external documentation for the whole API.
    pub fn with_external_docs(mut self, url: impl Into<String>, description: Option<String>) -> Self {
        self.external_docs = Some(ExternalDocs {
            description,
            url: url.into(),
        });
        self
    }

    /// Adds a server.
    pub fn add_server(mut self, server: Server) -> Self {
        self.servers.push(server);
        self
    }

    /// Adds a tag.
    pub fn add_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Adds an empty path item under the given path.
    pub fn add_path(mut self, path: impl Into<String>) -> Self {
        self.paths.insert(path.into(), PathItem::new());
        self
    }

    /// Sets a complete path item, replacing any existing one.
    pub fn set_path(mut self, path: impl Into<String>, path_item: PathItem) -> Self {
        self.paths.insert(path.into(), path_item);
        self
    }

    /// Returns the path item for the given path, if present.
    pub fn path(&self, path: &str) -> Option<&PathItem> {
        self.paths.get(path)
    }

    /// Places an operation in the method slot of the given path, lazily
    /// creating the path item. Sibling method slots are never touched.
    pub fn add_operation(
        mut self,
        path: impl Into<String>,
        method: HttpMethod,
        operation: Operation,
    ) -> Self {
        self.paths
            .entry(path.into())
            .or_default()
            .set_operation(method, operation);
        self
    }

    /// Returns the components registry, creating it on first use.
    pub fn components_mut(&mut self) -> &mut Components {
        self.components.get_or_insert_with(Components::new)
    }

    /// Adds a reusable schema to components.
    pub fn add_schema(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.components_mut().schemas.insert(name.into(), schema);
        self
    }

    /// Adds a reusable response to components.
    pub fn add_response(mut self, name: impl Into<String>, response: Response) -> Self {
        self.components_mut().responses.insert(name.into(), response);
        self
    }

    /// Adds a reusable parameter to components.
    pub fn add_parameter(mut self, name: impl Into<String>, parameter: Parameter) -> Self {
        self.components_mut().parameters.insert(name.into(), parameter);
        self
    }

    /// Adds a reusable example to components.
    pub fn add_example(mut self, name: impl Into<String>, example: Example) -> Self {
        self.components_mut().examples.insert(name.into(), example);
        self
    }

    /// Adds a reusable request body to components.
    pub fn add_request_body(mut self, name: impl Into<String>, request_body: RequestBody) -> Self {
        self.components_mut()
            .request_bodies
            .insert(name.into(), request_body);
        self
    }

    /// Adds a reusable header to components.
    pub fn add_header(mut self, name: impl Into<String>, header: Header) -> Self {
        self.components_mut().headers.insert(name.into(), header);
        self
    }

    /// Adds a security scheme to components.
    pub fn add_security_scheme(mut self, name: impl Into<String>, scheme: SecurityScheme) -> Self {
        self.components_mut()
            .security_schemes
            .insert(name.into(), scheme);
        self
    }

    /// Adds a reusable link to components.
    pub fn add_link(mut self, name: impl Into<String>, link: Link) -> Self {
        self.components_mut().links.insert(name.into(), link);
        self
    }

    /// Adds a reusable callback to components.
    pub fn add_callback(mut self, name: impl Into<String>, callback: Callback) -> Self {
        self.components_mut().callbacks.insert(name.into(), callback);
        self
    }

    /// Adds a document-level security requirement.
    pub fn add_security_requirement(mut self, requirement: SecurityRequirement) -> Self {
        self.security.push(requirement);
        self
    }
}

mod serialize {
    //! Serializer entry points: one bulk pass each way, all-or-nothing.

    use super::Document;
    use crate::error::{SpecError, SpecResult};

    impl Document {
        /// Marshals the document to pretty-printed JSON.
        pub fn to_json_string(&self) -> SpecResult<String> {
            serde_json::to_string_pretty(self).map_err(SpecError::Encode)
        }

        /// Marshals the document to pretty-printed JSON bytes.
        pub fn to_json_bytes(&self) -> SpecResult<Vec<u8>> {
            serde_json::to_vec_pretty(self).map_err(SpecError::Encode)
        }

        /// Unmarshals a document from a JSON string.
        pub fn from_json_str(input: &str) -> SpecResult<Self> {
            serde_json::from_str(input).map_err(SpecError::Decode)
        }

        /// Unmarshals a document from JSON bytes.
        pub fn from_json_slice(input: &[u8]) -> SpecResult<Self> {
            serde_json::from_slice(input).map_err(SpecError::Decode)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_defaults() {
        let doc = Document::new("Test API", "1.0.0");
        assert_eq!(doc.openapi, DEFAULT_OPENAPI_VERSION);
        assert_eq!(doc.info.title, "Test API");
        assert_eq!(doc.info.version, "1.0.0");
        assert!(doc.paths.is_empty());
        assert!(doc.tags.is_empty());
        assert!(doc.components.is_none());
    }

    #[test]
    fn test_empty_paths_always_serialized() {
        let doc = Document::new("Test API", "1.0.0");
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["paths"], serde_json::json!({}));
        assert!(value.get("tags").is_none());
        assert!(value.get("servers").is_none());
    }

    #[test]
    fn test_add_operation_places_only_the_named_slot() {
        let doc = Document::new("Test API", "1.0.0").add_operation(
            "/x",
            HttpMethod::Get,
            Operation::new("getX", "Get X", "Fetch X"),
        );
        let item = doc.path("/x").unwrap();
        assert!(item.get.is_some());
        assert!(item.post.is_none());
        assert!(item.put.is_none());

        let doc = doc.add_operation(
            "/x",
            HttpMethod::Post,
            Operation::new("makeX", "Make X", "Create X"),
        );
        let item = doc.path("/x").unwrap();
        assert_eq!(item.get.as_ref().unwrap().operation_id.as_deref(), Some("getX"));
        assert_eq!(item.post.as_ref().unwrap().operation_id.as_deref(), Some("makeX"));
    }

    #[test]
    fn test_components_created_on_first_use() {
        let doc = Document::new("Test API", "1.0.0")
            .add_schema("Pet", Schema::object())
            .add_security_scheme("api_key", SecurityScheme::api_key_in_header("api_key"));
        let components = doc.components.as_ref().unwrap();
        assert!(components.schemas.contains_key("Pet"));
        assert!(components.security_schemes.contains_key("api_key"));
    }

    #[test]
    fn test_with_openapi_version_override() {
        let doc = Document::new("Test API", "1.0.0").with_openapi_version("3.0.3");
        assert_eq!(doc.openapi, "3.0.3");
    }
}
