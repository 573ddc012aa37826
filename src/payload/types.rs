//! Payload types

use crate::auth::TokenType;
use crate::types::{JsonObject, JsonValue, StringMap};
use serde::{Deserialize, Serialize};

/// Raw request input for one resource method
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// Values for `:name` placeholders in the endpoint path
    #[serde(default)]
    pub path: StringMap,
    /// Query parameters
    #[serde(default)]
    pub params: JsonObject,
    /// JSON request body
    #[serde(default)]
    pub data: Option<JsonValue>,
    /// Extra request headers
    #[serde(default)]
    pub headers: StringMap,
}

impl Payload {
    /// Create an empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a path parameter
    #[must_use]
    pub fn path(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.path.insert(key.into(), value.into());
        self
    }

    /// Set a query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set the JSON body
    #[must_use]
    pub fn data(mut self, data: JsonValue) -> Self {
        self.data = Some(data);
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Per-call options layered on top of the payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Headers that override both config and payload headers
    pub headers: StringMap,
    /// Call on behalf of a user with this token
    pub user_access_token: Option<String>,
    /// Use this tenant token instead of asking the provider
    pub tenant_access_token: Option<String>,
    /// Token kind to request from the provider
    pub token_type: Option<TokenType>,
}

impl RequestOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Call with an explicit user access token
    #[must_use]
    pub fn with_user_access_token(mut self, token: impl Into<String>) -> Self {
        self.user_access_token = Some(token.into());
        self
    }

    /// Call with an explicit tenant access token
    #[must_use]
    pub fn with_tenant_access_token(mut self, token: impl Into<String>) -> Self {
        self.tenant_access_token = Some(token.into());
        self
    }

    /// Ask the provider for a specific token kind
    #[must_use]
    pub fn token_type(mut self, kind: TokenType) -> Self {
        self.token_type = Some(kind);
        self
    }
}

/// Normalized request ready for templating and sending
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormattedPayload {
    /// Merged headers
    pub headers: StringMap,
    /// Query parameters, stringified and sorted by key
    pub params: Vec<(String, String)>,
    /// JSON body
    pub data: Option<JsonValue>,
    /// Path parameters
    pub path: StringMap,
    /// Explicit token chosen from the options
    pub token: Option<String>,
    /// Token kind to request when there is no explicit token
    pub token_type: Option<TokenType>,
}

impl FormattedPayload {
    /// Copy with one query parameter replaced (or removed when `value` is `None`)
    #[must_use]
    pub fn with_param(&self, key: &str, value: Option<&str>) -> Self {
        let mut next = self.clone();
        next.params.retain(|(k, _)| k != key);
        if let Some(value) = value {
            next.params.push((key.to_string(), value.to_string()));
            next.params.sort_by(|a, b| a.0.cmp(&b.0));
        }
        next
    }

    /// First value of a query parameter
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
