//! Client configuration
//!
//! `ClientConfig` carries everything the shared transport and resource
//! groups need: the open platform domain, app credentials handed to the
//! token provider, timeouts and default headers. It can be built in code,
//! loaded from YAML, or read from `LARK_*` environment variables.

use crate::auth::TokenType;
use crate::error::{Error, Result};
use crate::types::StringMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Base URL of the mainland (Feishu) open platform
pub const FEISHU_DOMAIN: &str = "https://open.feishu.cn";

/// Base URL of the international (Lark) open platform
pub const LARK_DOMAIN: &str = "https://open.larksuite.com";

// ============================================================================
// Domain
// ============================================================================

/// Which open platform deployment to talk to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Domain {
    #[default]
    Feishu,
    Lark,
    /// Self-hosted or proxied deployment
    Custom(String),
}

impl Domain {
    /// Base URL for this domain
    pub fn url(&self) -> &str {
        match self {
            Domain::Feishu => FEISHU_DOMAIN,
            Domain::Lark => LARK_DOMAIN,
            Domain::Custom(url) => url,
        }
    }
}

// ============================================================================
// Client Config
// ============================================================================

/// Configuration for [`crate::LarkClient`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for all requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// App ID, read by providers set with
    /// [`LarkClientBuilder::token_provider_with`](crate::LarkClientBuilder::token_provider_with)
    #[serde(default)]
    pub app_id: Option<String>,

    /// App secret, read the same way as `app_id`. The client never sends it.
    #[serde(default)]
    pub app_secret: Option<String>,

    /// Pre-issued access token used by the default token provider
    #[serde(default)]
    pub access_token: Option<String>,

    /// Token kind requested from the provider when a call does not say otherwise
    #[serde(default)]
    pub token_type: TokenType,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Headers sent with every request
    #[serde(default)]
    pub default_headers: StringMap,
}

fn default_base_url() -> String {
    FEISHU_DOMAIN.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("lark-client/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_id: None,
            app_secret: None,
            access_token: None,
            token_type: TokenType::default(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            default_headers: StringMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Read `LARK_BASE_URL`, `LARK_APP_ID`, `LARK_APP_SECRET`,
    /// `LARK_ACCESS_TOKEN` and `LARK_TIMEOUT_SECS` on top of the defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup("LARK_BASE_URL") {
            config.base_url = url;
        }
        config.app_id = lookup("LARK_APP_ID");
        config.app_secret = lookup("LARK_APP_SECRET");
        config.access_token = lookup("LARK_ACCESS_TOKEN");
        if let Some(secs) = lookup("LARK_TIMEOUT_SECS") {
            config.timeout_secs = secs.parse().map_err(|_| {
                Error::config(format!("LARK_TIMEOUT_SECS is not a number: {secs}"))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Check the fields that cannot be defaulted
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        url::Url::parse(&self.base_url)?;
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the deployment domain
    pub fn domain(mut self, domain: Domain) -> Self {
        self.config.base_url = domain.url().to_string();
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set app credentials
    pub fn app_credentials(mut self, app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        self.config.app_id = Some(app_id.into());
        self.config.app_secret = Some(app_secret.into());
        self
    }

    /// Set a pre-issued access token
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = Some(token.into());
        self
    }

    /// Set the default token kind
    pub fn token_type(mut self, token_type: TokenType) -> Self {
        self.config.token_type = token_type;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_secs = timeout.as_secs().max(1);
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
