#![deny(missing_docs)]
//! # oas-builder
//!
//! Plain data structures mirroring the OpenAPI 3.x object graph, with
//! fluent consuming builders and a JSON serializer on the root
//! [`Document`].
//!
//! ```rust
//! use oas_builder::{Document, HttpMethod, Operation, Schema};
//!
//! let doc = Document::new("Pet Store API", "1.0.0")
//!     .with_description("A sample pet store")
//!     .add_schema("Pet", Schema::object().with_property("name", Schema::string()))
//!     .add_operation(
//!         "/pets",
//!         HttpMethod::Get,
//!         Operation::new("listPets", "List pets", "Returns all pets")
//!             .with_ok_response("A pet list", Schema::array(Schema::reference("Pet"))),
//!     );
//!
//! let json = doc.to_json_string().unwrap();
//! assert!(json.contains("\"openapi\": \"3.1.0\""));
//! assert!(json.contains("\"/pets\""));
//! ```

/// Callback Object.
pub mod callback;
/// Components Object.
pub mod components;
/// Document Object and JSON serializer entry points.
pub mod document;
/// Encoding Object.
pub mod encoding;
/// Error type shared by the serializer and method parsing.
pub mod error;
/// Example Object.
pub mod example;
/// External Documentation Object.
pub mod external_docs;
/// Header Object.
pub mod header;
/// Info, Contact, and License Objects.
pub mod info;
/// Link Object.
pub mod link;
/// Media Type Object.
pub mod media_type;
/// Operation Object.
pub mod operation;
/// Parameter Object.
pub mod parameter;
/// Path Item Object and HTTP method slots.
pub mod path_item;
/// Request Body Object.
pub mod request_body;
/// Response Object.
pub mod response;
/// Schema Object, including polymorphic `additionalProperties`.
pub mod schema;
/// Security schemes, OAuth flows, and security requirements.
pub mod security;
/// Server and Server Variable Objects.
pub mod server;
/// Tag Object.
pub mod tag;

pub use callback::Callback;
pub use components::Components;
pub use document::{Document, DEFAULT_OPENAPI_VERSION};
pub use encoding::Encoding;
pub use error::{SpecError, SpecResult};
pub use example::Example;
pub use external_docs::ExternalDocs;
pub use header::Header;
pub use info::{Contact, Info, License};
pub use link::Link;
pub use media_type::MediaType;
pub use operation::Operation;
pub use parameter::{Parameter, ParameterLocation};
pub use path_item::{HttpMethod, PathItem};
pub use request_body::RequestBody;
pub use response::Response;
pub use schema::{AdditionalProperties, Discriminator, Schema, Xml};
pub use security::{OAuthFlow, OAuthFlows, SecurityRequirement, SecurityScheme};
pub use server::{Server, ServerVariable};
pub use tag::Tag;
