//! Authenticator implementation
//!
//! Picks the token for a request and applies it as a bearer credential.

use super::types::{NoToken, TokenProvider, TokenType};
use crate::error::Result;
use reqwest::RequestBuilder;
use std::sync::Arc;
use tracing::debug;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Clone)]
pub struct Authenticator {
    provider: Arc<dyn TokenProvider>,
    default_type: TokenType,
}

impl Authenticator {
    /// Create a new authenticator backed by the given provider
    pub fn new(provider: Arc<dyn TokenProvider>, default_type: TokenType) -> Self {
        Self {
            provider,
            default_type,
        }
    }

    /// Authenticator that never adds credentials
    pub fn anonymous() -> Self {
        Self::new(Arc::new(NoToken), TokenType::default())
    }

    /// Token kind used when a request does not pick one
    pub fn default_type(&self) -> TokenType {
        self.default_type
    }

    /// Resolve the token for one request
    ///
    /// An explicit token wins; otherwise the provider is asked for `kind`
    /// (or the default kind).
    pub async fn resolve(
        &self,
        explicit: Option<&str>,
        kind: Option<TokenType>,
    ) -> Result<Option<String>> {
        if let Some(token) = explicit {
            return Ok(Some(token.to_string()));
        }
        let kind = kind.unwrap_or(self.default_type);
        let token = self.provider.token(kind).await?;
        if token.is_none() {
            debug!("No {} token available, sending request unauthenticated", kind);
        }
        Ok(token)
    }

    /// Apply authentication to a request builder
    pub async fn apply(
        &self,
        req: RequestBuilder,
        explicit: Option<&str>,
        kind: Option<TokenType>,
    ) -> Result<RequestBuilder> {
        match self.resolve(explicit, kind).await? {
            Some(token) => Ok(req.bearer_auth(token)),
            None => Ok(req),
        }
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("default_type", &self.default_type)
            .finish_non_exhaustive()
    }
}
