//! Shared request pipeline for resource groups

use super::types::Endpoint;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{ApiResponse, HttpClient, RequestConfig};
use crate::pagination::{failed_stream, PageShape, PageStream, Paginator};
use crate::payload::{format_payload, FormattedPayload, Payload, RequestOptions};
use crate::template::render_path;
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// Borrowed view of the client's transport and configuration
///
/// Every resource group holds one of these. The token provider lives
/// inside the transport's authenticator.
#[derive(Debug, Clone, Copy)]
pub struct ApiContext<'a> {
    http: &'a HttpClient,
    config: &'a ClientConfig,
}

impl<'a> ApiContext<'a> {
    /// Create a context over a transport and config
    pub fn new(http: &'a HttpClient, config: &'a ClientConfig) -> Self {
        Self { http, config }
    }

    /// Transport used for every call
    pub fn http(&self) -> &'a HttpClient {
        self.http
    }

    /// Client configuration
    pub fn config(&self) -> &'a ClientConfig {
        self.config
    }

    /// Single request returning the envelope as-is
    ///
    /// List endpoints come back with `has_more` and `page_token` intact for
    /// callers that page by hand. Failures are logged and returned.
    pub async fn call(
        &self,
        endpoint: &Endpoint,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        let result = self.send(endpoint, payload, options).await;
        if let Err(ref e) = result {
            error!("{} failed: {}", endpoint, e);
        }
        result
    }

    async fn send(
        &self,
        endpoint: &Endpoint,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse<JsonValue>> {
        let (formatted, url) = self.prepare(endpoint, payload, options)?;
        debug!("Calling {} {}", endpoint.method, url);
        self.http
            .send_api(endpoint.method, &url, request_config(&formatted))
            .await
    }

    /// Lazy page stream over a cursor-paginated endpoint
    ///
    /// The payload is normalized once; each page re-sends it with the
    /// cursor in `shape.token_param`. A payload that cannot be prepared
    /// yields a stream holding only the failure marker.
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
        let (formatted, url) = match self.prepare(endpoint, payload, options) {
            Ok(prepared) => prepared,
            Err(e) => {
                error!("{} failed: {}", endpoint, e);
                return failed_stream(e);
            }
        };

        let http = self.http.clone();
        let method = endpoint.method;
        let token_param = shape.token_param.clone();

        let fetch = move |token: Option<String>| {
            let http = http.clone();
            let url = url.clone();
            let page = formatted.with_param(&token_param, token.as_deref());
            async move {
                http.send_api::<JsonValue>(method, &url, request_config(&page))
                    .await
                    .map(|resp| resp.data.unwrap_or(JsonValue::Null))
            }
        };

        Paginator::new(shape, fetch).into_stream()
    }

    fn prepare(
        &self,
        endpoint: &Endpoint,
        payload: Payload,
        options: &RequestOptions,
    ) -> Result<(FormattedPayload, String)> {
        let formatted = format_payload(payload, options, &self.config.default_headers)?;
        let url = render_path(&endpoint.path, &formatted.path)?;
        Ok((formatted, url))
    }
}

/// Map a formatted payload onto transport request settings
fn request_config(formatted: &FormattedPayload) -> RequestConfig {
    RequestConfig {
        query: formatted.params.clone(),
        headers: formatted.headers.clone(),
        body: formatted.data.clone(),
        timeout: None,
        token: formatted.token.clone(),
        token_type: formatted.token_type,
    }
}
