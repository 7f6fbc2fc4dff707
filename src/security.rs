//! # Security Objects
//!
//! Security scheme definitions, OAuth flow descriptions and the named
//! requirements that reference them from documents and operations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A security scheme definition held under `components.securitySchemes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityScheme {
    /// The scheme type (`apiKey`, `http`, `oauth2`, `openIdConnect`).
    #[serde(rename = "type")]
    pub scheme_type: String,
    /// Description of the scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parameter name for `apiKey` schemes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Location of the API key (`header`, `query` or `cookie`).
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// HTTP authorization scheme for `http` schemes (`basic`, `bearer`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// Hint at the bearer token format (e.g. `JWT`).
    #[serde(rename = "bearerFormat", skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,
    /// Flow definitions for `oauth2` schemes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flows: Option<OAuthFlows>,
    /// Discovery URL for `openIdConnect` schemes.
    #[serde(rename = "openIdConnectUrl", skip_serializing_if = "Option::is_none")]
    pub open_id_connect_url: Option<String>,
}

impl SecurityScheme {
    /// Creates a new security scheme of the given type.
    pub fn new(scheme_type: impl Into<String>) -> Self {
        Self {
            scheme_type: scheme_type.into(),
            description: None,
            name: None,
            location: None,
            scheme: None,
            bearer_format: None,
            flows: None,
            open_id_connect_url: None,
        }
    }

    /// Creates an `apiKey` scheme with the key name and location.
    pub fn api_key(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            location: Some(location.into()),
            ..Self::new("apiKey")
        }
    }

    /// Creates an `apiKey` scheme carried in a header.
    pub fn api_key_in_header(name: impl Into<String>) -> Self {
        Self::api_key(name, "header")
    }

    /// Creates an `apiKey` scheme carried in the query string.
    pub fn api_key_in_query(name: impl Into<String>) -> Self {
        Self::api_key(name, "query")
    }

    /// Creates an `apiKey` scheme carried in a cookie.
    pub fn api_key_in_cookie(name: impl Into<String>) -> Self {
        Self::api_key(name, "cookie")
    }

    /// Creates an `http` scheme with the given authorization scheme.
    pub fn http(scheme: impl Into<String>) -> Self {
        Self {
            scheme: Some(scheme.into()),
            ..Self::new("http")
        }
    }

    /// Creates an `http` bearer-token scheme.
    pub fn bearer() -> Self {
        Self::http("bearer")
    }

    /// Creates an `oauth2` scheme; attach flows with [`SecurityScheme::with_flows`].
    pub fn oauth2() -> Self {
        Self::new("oauth2")
    }

    /// Creates an `openIdConnect` scheme with its discovery URL.
    pub fn openid_connect(url: impl Into<String>) -> Self {
        Self {
            open_id_connect_url: Some(url.into()),
            ..Self::new("openIdConnect")
        }
    }

    /// Sets the description of the security scheme.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the name of the API key parameter.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the location of the API key.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the HTTP authorization scheme.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Sets the bearer format hint.
    pub fn with_bearer_format(mut self, format: impl Into<String>) -> Self {
        self.bearer_format = Some(format.into());
        self
    }

    /// Sets the OAuth flows.
    pub fn with_flows(mut self, flows: OAuthFlows) -> Self {
        self.flows = Some(flows);
        self
    }

    /// Sets the OpenID Connect discovery URL.
    pub fn with_open_id_connect_url(mut self, url: impl Into<String>) -> Self {
        self.open_id_connect_url = Some(url.into());
        self
    }
}

/// The set of OAuth flows a scheme supports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthFlows {
    /// Implicit flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit: Option<OAuthFlow>,
    /// Resource-owner password flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<OAuthFlow>,
    /// Client credentials flow.
    #[serde(rename = "clientCredentials", skip_serializing_if = "Option::is_none")]
    pub client_credentials: Option<OAuthFlow>,
    /// Authorization code flow.
    #[serde(rename = "authorizationCode", skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<OAuthFlow>,
}

impl OAuthFlows {
    /// Creates an empty flow set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the implicit flow.
    pub fn with_implicit(mut self, flow: OAuthFlow) -> Self {
        self.implicit = Some(flow);
        self
    }

    /// Sets the password flow.
    pub fn with_password(mut self, flow: OAuthFlow) -> Self {
        self.password = Some(flow);
        self
    }

    /// Sets the client credentials flow.
    pub fn with_client_credentials(mut self, flow: OAuthFlow) -> Self {
        self.client_credentials = Some(flow);
        self
    }

    /// Sets the authorization code flow.
    pub fn with_authorization_code(mut self, flow: OAuthFlow) -> Self {
        self.authorization_code = Some(flow);
        self
    }
}

/// Configuration of a single OAuth flow.
///
/// `scopes` is always serialized, even when empty; it is the one required
/// field of this object on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthFlow {
    /// Authorization endpoint URL.
    #[serde(rename = "authorizationUrl", skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    /// Token endpoint URL.
    #[serde(rename = "tokenUrl", skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    /// Refresh endpoint URL.
    #[serde(rename = "refreshUrl", skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,
    /// Available scopes mapped to their descriptions.
    #[serde(default)]
    pub scopes: IndexMap<String, String>,
}

impl OAuthFlow {
    /// Creates an empty flow with a ready scopes map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the authorization URL.
    pub fn with_authorization_url(mut self, url: impl Into<String>) -> Self {
        self.authorization_url = Some(url.into());
        self
    }

    /// Sets the token URL.
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    /// Sets the refresh URL.
    pub fn with_refresh_url(mut self, url: impl Into<String>) -> Self {
        self.refresh_url = Some(url.into());
        self
    }

    /// Adds a scope with its description.
    pub fn with_scope(mut self, scope: impl Into<String>, description: impl Into<String>) -> Self {
        self.scopes.insert(scope.into(), description.into());
        self
    }
}

/// A named reference to a security scheme plus the scopes it demands.
///
/// Serialized as a plain JSON object mapping the scheme name to its scope
/// list, matching the OpenAPI wire shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityRequirement(pub IndexMap<String, Vec<String>>);

impl SecurityRequirement {
    /// Creates a requirement on the named scheme with the given scopes.
    pub fn new(scheme_name: impl Into<String>, scopes: Vec<String>) -> Self {
        let mut map = IndexMap::new();
        map.insert(scheme_name.into(), scopes);
        Self(map)
    }

    /// Creates a requirement for bearer auth (no scopes).
    pub fn bearer(scheme_name: impl Into<String>) -> Self {
        Self::new(scheme_name, Vec::new())
    }

    /// Creates a requirement for API key auth (no scopes).
    pub fn api_key(scheme_name: impl Into<String>) -> Self {
        Self::new(scheme_name, Vec::new())
    }

    /// Creates a requirement for OAuth with the given scopes.
    pub fn oauth(scheme_name: impl Into<String>, scopes: Vec<String>) -> Self {
        Self::new(scheme_name, scopes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_key_shortcut() {
        let scheme = SecurityScheme::api_key_in_header("X-Api-Key");
        let value = serde_json::to_value(&scheme).unwrap();
        assert_eq!(value, json!({"type": "apiKey", "name": "X-Api-Key", "in": "header"}));
    }

    #[test]
    fn test_requirement_wire_shape() {
        let requirement =
            SecurityRequirement::oauth("petstore_auth", vec!["read:pets".to_string()]);
        let value = serde_json::to_value(&requirement).unwrap();
        assert_eq!(value, json!({"petstore_auth": ["read:pets"]}));
    }

    #[test]
    fn test_empty_scopes_are_serialized() {
        let flow = OAuthFlow::new().with_token_url("https://auth.example.com/token");
        let value = serde_json::to_value(&flow).unwrap();
        assert_eq!(value["scopes"], json!({}));
    }
}
