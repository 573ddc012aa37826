//! Top-level client
//!
//! [`LarkClient`] owns the transport and configuration and hands out
//! borrowed resource-group handles:
//!
//! ```rust,ignore
//! let client = LarkClient::new(ClientConfig::from_env()?)?;
//! let mut periods = client.okr().list_periods_iter::<JsonValue>(Payload::new(), &RequestOptions::new());
//! while let Some(page) = periods.next_page().await {
//!     println!("{:?}", page?.items);
//! }
//! ```

use crate::api::{ApiContext, Endpoint, Im, Minutes, Moments, Ocr, Okr, Passport, Payroll};
use crate::auth::{Authenticator, NoToken, StaticToken, TokenProvider};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{ApiResponse, HttpClient, HttpClientConfig};
use crate::pagination::{PageShape, PageStream};
use crate::payload::{Payload, RequestOptions};
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Client for the open platform REST API
#[derive(Debug, Clone)]
pub struct LarkClient {
    config: ClientConfig,
    http: HttpClient,
}

impl LarkClient {
    /// Create a client using the config's access token (if any)
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Create a client builder
    pub fn builder() -> LarkClientBuilder {
        LarkClientBuilder::default()
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Shared transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    fn context(&self) -> ApiContext<'_> {
        ApiContext::new(&self.http, &self.config)
    }

    /// Messages and chats
    pub fn im(&self) -> Im<'_> {
        Im::new(self.context())
    }

    /// OKR periods, objectives, reviews and progress records
    pub fn okr(&self) -> Okr<'_> {
        Okr::new(self.context())
    }

    /// Payroll
    pub fn payroll(&self) -> Payroll<'_> {
        Payroll::new(self.context())
    }

    /// Login sessions
    pub fn passport(&self) -> Passport<'_> {
        Passport::new(self.context())
    }

    /// Text recognition
    pub fn ocr(&self) -> Ocr<'_> {
        Ocr::new(self.context())
    }

    /// Meeting minutes
    pub fn minutes(&self) -> Minutes<'_> {
        Minutes::new(self.context())
    }

    /// Company feed
    pub fn moments(&self) -> Moments<'_> {
        Moments::new(self.context())
    }

    /// One-shot call on any endpoint
    pub async fn request(
        &self,
        endpoint: &Endpoint,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        self.context().call(endpoint, payload, options).await
    }

    /// Page stream over any cursor-paginated endpoint
    pub fn paginate<T>(
        &self,
        endpoint: &Endpoint,
        payload: Payload,
        options: &RequestOptions,
        shape: PageShape,
    ) -> PageStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.context().paginate(endpoint, payload, options, shape)
    }
}

type ProviderFactory = Box<dyn FnOnce(&ClientConfig) -> Arc<dyn TokenProvider> + Send>;

enum ProviderSource {
    Ready(Arc<dyn TokenProvider>),
    FromConfig(ProviderFactory),
}

/// Builder for [`LarkClient`]
#[derive(Default)]
pub struct LarkClientBuilder {
    config: Option<ClientConfig>,
    provider: Option<ProviderSource>,
}

impl LarkClientBuilder {
    /// Use this configuration (defaults to [`ClientConfig::default`])
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Supply tokens from an external provider
    pub fn token_provider(mut self, provider: impl TokenProvider + 'static) -> Self {
        self.provider = Some(ProviderSource::Ready(Arc::new(provider)));
        self
    }

    /// Supply tokens from a shared provider
    pub fn shared_token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.provider = Some(ProviderSource::Ready(provider));
        self
    }

    /// Build the provider from the validated config at [`build`](Self::build) time
    ///
    /// This is how `app_id` and `app_secret` reach a provider that exchanges
    /// them for tenant or app tokens.
    ///
    /// ```rust,ignore
    /// let client = LarkClient::builder()
    ///     .config(ClientConfig::from_env()?)
    ///     .token_provider_with(|config| {
    ///         TenantTokenCache::new(config.app_id.clone(), config.app_secret.clone())
    ///     })
    ///     .build()?;
    /// ```
    pub fn token_provider_with<F, P>(mut self, make: F) -> Self
    where
        F: FnOnce(&ClientConfig) -> P + Send + 'static,
        P: TokenProvider + 'static,
    {
        self.provider = Some(ProviderSource::FromConfig(Box::new(move |config| {
            Arc::new(make(config)) as Arc<dyn TokenProvider>
        })));
        self
    }

    /// Validate the config and build the client
    pub fn build(self) -> Result<LarkClient> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let provider: Arc<dyn TokenProvider> = match (self.provider, &config.access_token) {
            (Some(ProviderSource::Ready(provider)), _) => provider,
            (Some(ProviderSource::FromConfig(make)), _) => make(&config),
            (None, Some(token)) => Arc::new(StaticToken::new(token.clone())),
            (None, None) => Arc::new(NoToken),
        };

        debug!(
            "Building client for {} (default token type: {})",
            config.base_url, config.token_type
        );

        let authenticator = Authenticator::new(provider, config.token_type);
        let http = HttpClient::with_auth(HttpClientConfig::from(&config), authenticator)?;

        Ok(LarkClient { config, http })
    }
}

impl std::fmt::Debug for LarkClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LarkClientBuilder")
            .field("config", &self.config)
            .field("has_provider", &self.provider.is_some())
            .finish()
    }
}
