//! Token provider types

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of access token a call is made with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Tenant access token (app acting inside one tenant)
    #[default]
    Tenant,
    /// App access token
    App,
    /// User access token (app acting on behalf of a user)
    User,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Tenant => "tenant",
            TokenType::App => "app",
            TokenType::User => "user",
        };
        f.write_str(name)
    }
}

/// Source of access tokens
///
/// Implementations own the whole token lifecycle (login, caching, refresh).
/// Returning `Ok(None)` sends the request without an `Authorization` header.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Get a token of the requested kind
    async fn token(&self, kind: TokenType) -> Result<Option<String>>;
}

/// Provider that hands out the same pre-issued token for every kind
#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    /// Create a provider for a fixed token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticToken")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self, _kind: TokenType) -> Result<Option<String>> {
        Ok(Some(self.token.clone()))
    }
}

/// Provider for unauthenticated calls
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

#[async_trait]
impl TokenProvider for NoToken {
    async fn token(&self, _kind: TokenType) -> Result<Option<String>> {
        Ok(None)
    }
}
