//! Tests for the HTTP client module

use super::*;
use crate::auth::{Authenticator, StaticToken, TokenType};
use crate::error::Error;
use crate::types::Method;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.user_agent.starts_with("lark-client/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://open.feishu.cn")
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://open.feishu.cn".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_http_client_config_from_client_config() {
    let client_config = crate::config::ClientConfig::builder()
        .base_url("http://localhost:1234")
        .timeout(Duration::from_secs(7))
        .header("X-A", "1")
        .build();

    let config = HttpClientConfig::from(&client_config);
    assert_eq!(config.base_url.as_deref(), Some("http://localhost:1234"));
    assert_eq!(config.timeout, Duration::from_secs(7));
    assert_eq!(config.default_headers.get("X-A"), Some(&"1".to_string()));
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("page_size", "10")
        .query("okr_ids", "1")
        .query("okr_ids", "2")
        .header("X-Request-Id", "abc123")
        .json(serde_json::json!({"key": "value"}))
        .timeout(Duration::from_secs(10))
        .token("u-1")
        .token_type(TokenType::User);

    assert_eq!(config.query.len(), 3);
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert!(config.body.is_some());
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    assert_eq!(config.token.as_deref(), Some("u-1"));
    assert_eq!(config.token_type, Some(TokenType::User));
}

#[tokio::test]
async fn test_http_client_request_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/open-apis/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 42
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data: serde_json::Value = client
        .request_json(Method::GET, "/open-apis/data", RequestConfig::new())
        .await
        .unwrap();

    assert_eq!(data["value"], 42);
}

#[tokio::test]
async fn test_http_client_post() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/open-apis/items"))
        .and(body_json(serde_json::json!({"name": "test"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 0,
            "data": {"id": "123"}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .request(
            Method::POST,
            "/open-apis/items",
            RequestConfig::new().json(serde_json::json!({"name": "test"})),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_repeated_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/open-apis/okr/v1/okrs/batch_get"))
        .and(query_param("okr_ids", "1"))
        .and(query_param("okr_ids", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 0
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .request(
            Method::GET,
            "/open-apis/okr/v1/okrs/batch_get",
            RequestConfig::new().query("okr_ids", "1").query("okr_ids", "2"),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_default_and_request_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/open-apis/secure"))
        .and(header("X-Default", "d"))
        .and(header("X-Request-Id", "req-456"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("X-Default", "d")
        .build();

    let client = HttpClient::with_config(config).unwrap();
    let response = client
        .request(
            Method::GET,
            "/open-apis/secure",
            RequestConfig::new().header("X-Request-Id", "req-456"),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_bearer_from_provider() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/open-apis/me"))
        .and(header("Authorization", "Bearer t-tenant"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().base_url(mock_server.uri()).build();
    let auth = Authenticator::new(Arc::new(StaticToken::new("t-tenant")), TokenType::Tenant);
    let client = HttpClient::with_auth(config, auth).unwrap();

    let response = client
        .request(Method::GET, "/open-apis/me", RequestConfig::new())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_explicit_token_overrides_provider() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/open-apis/me"))
        .and(header("Authorization", "Bearer u-user"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().base_url(mock_server.uri()).build();
    let auth = Authenticator::new(Arc::new(StaticToken::new("t-tenant")), TokenType::Tenant);
    let client = HttpClient::with_auth(config, auth).unwrap();

    let response = client
        .request(Method::GET, "/open-apis/me", RequestConfig::new().token("u-user"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_404_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/open-apis/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.request(Method::GET, "/open-apis/missing", RequestConfig::new()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_http_client_error_status_with_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/open-apis/forbidden"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": 99991663,
            "msg": "Invalid access token for authorization"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .request(Method::GET, "/open-apis/forbidden", RequestConfig::new())
        .await
        .unwrap_err();

    assert_eq!(err.api_code(), Some(99991663));
}

#[tokio::test]
async fn test_http_client_no_retry_on_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/open-apis/flaky"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .request(Method::GET, "/open-apis/flaky", RequestConfig::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_http_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/open-apis/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .request(
            Method::GET,
            "/open-apis/slow",
            RequestConfig::new().timeout(Duration::from_millis(50)),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[tokio::test]
async fn test_send_api_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/open-apis/minutes/v1/minutes/obcn1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 0,
            "msg": "success",
            "data": {"minute": {"token": "obcn1"}}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let resp: ApiResponse<serde_json::Value> = client
        .send_api(
            Method::GET,
            "/open-apis/minutes/v1/minutes/obcn1",
            RequestConfig::new(),
        )
        .await
        .unwrap();

    assert!(resp.is_success());
    assert_eq!(resp.data.unwrap()["minute"]["token"], "obcn1");
}

#[tokio::test]
async fn test_send_api_nonzero_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/open-apis/err"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 230002,
            "msg": "Bot/User can NOT be out of the chat."
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result: crate::error::Result<ApiResponse<serde_json::Value>> = client
        .send_api(Method::GET, "/open-apis/err", RequestConfig::new())
        .await;

    assert!(matches!(result, Err(Error::Api { code: 230002, .. })));
}

#[tokio::test]
async fn test_request_json_invalid_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/open-apis/html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result: crate::error::Result<serde_json::Value> = client
        .request_json(Method::GET, "/open-apis/html", RequestConfig::new())
        .await;

    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[tokio::test]
async fn test_http_client_full_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/open-apis/test"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    // Client without base URL
    let client = HttpClient::new().unwrap();

    let response = client
        .request(
            Method::GET,
            &format!("{}/open-apis/test", mock_server.uri()),
            RequestConfig::new(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new().unwrap();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("config"));
}
