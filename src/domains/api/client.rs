//! Connection manager for the cell tower API.
//!
//! [`ApiClient`] owns at most one `reqwest::Client`. The handle is built on
//! first use under a mutex, so concurrent first calls construct it exactly
//! once, and it is dropped again by [`ApiClient::close`]. A request issued
//! after `close` simply builds a fresh handle.
//!
//! Requests are single-shot: no retry, no backoff. Whoever drives the tool
//! call owns any retry policy.

use reqwest::{
    Method, Url,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use super::endpoint::Endpoint;
use super::error::{ApiError, ApiResult};
use crate::core::config::ApiConfig;

/// A live HTTP handle bound to the parsed base URL.
#[derive(Debug, Clone)]
struct Handle {
    http: reqwest::Client,
    base_url: Url,
}

/// Lazily connected client for the upstream cell tower service.
#[derive(Debug)]
pub struct ApiClient {
    config: ApiConfig,
    handle: Mutex<Option<Handle>>,
}

impl ApiClient {
    /// Create a client. No connection is made until the first request.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            handle: Mutex::new(None),
        }
    }

    /// Whether a handle is currently cached.
    pub async fn is_connected(&self) -> bool {
        self.handle.lock().await.is_some()
    }

    /// Release the cached handle. Calling this more than once is a no-op.
    pub async fn close(&self) {
        if self.handle.lock().await.take().is_some() {
            info!("HTTP client closed");
        }
    }

    /// Get the cached handle, building it on first use.
    async fn handle(&self) -> ApiResult<Handle> {
        let mut slot = self.handle.lock().await;

        if let Some(handle) = slot.as_ref() {
            return Ok(handle.clone());
        }

        let handle = Self::build_handle(&self.config).inspect_err(|e| {
            error!("{}", e);
        })?;
        info!("HTTP client initialized with base URL: {}", handle.base_url);

        *slot = Some(handle.clone());
        Ok(handle)
    }

    fn build_handle(config: &ApiConfig) -> ApiResult<Handle> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::setup(format!("invalid base URL '{}': {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::setup(format!(
                "base URL cannot carry a path: {}",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::setup(format!("invalid header name '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::setup(format!("invalid value for header '{}': {}", name, e)))?;
            headers.insert(name, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::setup(e.to_string()))?;

        Ok(Handle { http, base_url })
    }

    /// Issue one request and decode the JSON body.
    ///
    /// Returns `Ok(None)` when the upstream answered 2xx with an empty body.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &Endpoint,
        body: Option<&Value>,
    ) -> ApiResult<Option<Value>> {
        let handle = self.handle().await?;
        let url = endpoint.resolve(&handle.base_url)?;

        info!("{} {}", method, endpoint);

        let mut request = handle.http.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!("{} {} failed: {}", method, endpoint, e);
            if e.is_timeout() {
                ApiError::connection(format!(
                    "request timed out after {}s",
                    self.config.timeout_secs
                ))
            } else {
                ApiError::connection(e.to_string())
            }
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!("{} {} failed reading body: {}", method, endpoint, e);
            ApiError::connection(e.to_string())
        })?;

        if !status.is_success() {
            error!(
                "{} {} failed with status {}: {}",
                method,
                endpoint,
                status.as_u16(),
                text
            );
            return Err(ApiError::status(status.as_u16(), text));
        }

        debug!("{} {} -> {} ({} bytes)", method, endpoint, status, text.len());

        if text.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| ApiError::invalid_response(e.to_string()))
    }

    /// GET the endpoint. An empty body decodes as `null`.
    pub async fn get(&self, endpoint: &Endpoint) -> ApiResult<Value> {
        Ok(self
            .request(Method::GET, endpoint, None)
            .await?
            .unwrap_or(Value::Null))
    }

    /// POST a JSON body.
    pub async fn post(&self, endpoint: &Endpoint, body: &Value) -> ApiResult<Value> {
        Ok(self
            .request(Method::POST, endpoint, Some(body))
            .await?
            .unwrap_or(Value::Null))
    }

    /// PATCH a JSON body.
    pub async fn patch(&self, endpoint: &Endpoint, body: &Value) -> ApiResult<Value> {
        Ok(self
            .request(Method::PATCH, endpoint, Some(body))
            .await?
            .unwrap_or(Value::Null))
    }

    /// DELETE the endpoint. Any response body is discarded.
    pub async fn delete(&self, endpoint: &Endpoint) -> ApiResult<()> {
        self.request(Method::DELETE, endpoint, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(ApiConfig::new(format!("{}/api/cell-towers", server.uri())))
    }

    #[tokio::test]
    async fn test_no_connection_until_first_request() {
        let client = ApiClient::new(ApiConfig::default());
        assert!(!client.is_connected().await);
    }

    #[tokio::test]
    async fn test_malformed_base_url_is_setup_error_and_not_cached() {
        let client = ApiClient::new(ApiConfig::new("not a url"));

        let err = client.get(&Endpoint::root()).await.unwrap_err();
        assert!(matches!(err, ApiError::ConnectionSetup(_)));
        assert!(!client.is_connected().await);

        // Still failing the same way, nothing half-built was kept.
        let err = client.get(&Endpoint::root()).await.unwrap_err();
        assert!(matches!(err, ApiError::ConnectionSetup(_)));
    }

    #[tokio::test]
    async fn test_invalid_header_is_setup_error() {
        let mut config = ApiConfig::new("http://localhost:8080/api/cell-towers");
        config
            .headers
            .insert("X-Api-Key".to_string(), "bad\nvalue".to_string());
        let client = ApiClient::new(config);

        let err = client.get(&Endpoint::root()).await.unwrap_err();
        assert!(matches!(err, ApiError::ConnectionSetup(_)));
        assert!(!client.is_connected().await);
    }

    #[tokio::test]
    async fn test_close_twice_is_noop() {
        let client = ApiClient::new(ApiConfig::default());
        client.close().await;
        client.close().await;
        assert!(!client.is_connected().await);
    }

    #[tokio::test]
    async fn test_request_after_close_recreates_handle() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cell-towers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.get(&Endpoint::root()).await.unwrap();
        assert!(client.is_connected().await);

        client.close().await;
        client.close().await;
        assert!(!client.is_connected().await);

        client.get(&Endpoint::root()).await.unwrap();
        assert!(client.is_connected().await);
    }

    #[tokio::test]
    async fn test_static_headers_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cell-towers/1"))
            .and(header("content-type", "application/json"))
            .and(header("x-api-key", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = ApiConfig::new(format!("{}/api/cell-towers", server.uri()));
        config
            .headers
            .insert("X-Api-Key".to_string(), "secret".to_string());
        let client = ApiClient::new(config);

        let value = client.get(&Endpoint::path([1])).await.unwrap();
        assert_eq!(value["id"], 1);
    }

    #[tokio::test]
    async fn test_non_success_status_carries_code_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cell-towers/99"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Tower 99 not found"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get(&Endpoint::path([99])).await.unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "Tower 99 not found");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_refused_connection_is_connection_error() {
        let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:1/api/cell-towers"));
        let err = client.get(&Endpoint::root()).await.unwrap_err();
        assert!(matches!(err, ApiError::Connection(_)));
    }

    #[tokio::test]
    async fn test_empty_body_decodes_as_null() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cell-towers"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert_eq!(client.get(&Endpoint::root()).await.unwrap(), Value::Null);
    }

    #[tokio::test]
    async fn test_undecodable_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cell-towers"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get(&Endpoint::root()).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_concurrent_first_use_shares_one_handle() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cell-towers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
            .expect(8)
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(!client.is_connected().await);

        let root = Endpoint::root();
        let results = futures::future::join_all((0..8).map(|_| client.get(&root))).await;

        assert!(results.iter().all(Result::is_ok));
        assert!(client.is_connected().await);

        // One close empties the slot: there was exactly one handle in it.
        client.close().await;
        assert!(!client.is_connected().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_use_across_tasks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cell-towers/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
            .expect(6)
            .mount(&server)
            .await;

        let client = std::sync::Arc::new(client_for(&server));
        let tasks: Vec<_> = (0..6)
            .map(|_| {
                let client = client.clone();
                tokio::spawn(async move { client.get(&Endpoint::path([1])).await })
            })
            .collect();

        for task in futures::future::join_all(tasks).await {
            assert_eq!(task.unwrap().unwrap()["id"], 1);
        }
        assert!(client.is_connected().await);
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out_as_connection_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cell-towers"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(std::time::Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let mut config = ApiConfig::new(format!("{}/api/cell-towers", server.uri()));
        config.timeout_secs = 1;
        let client = ApiClient::new(config);

        let err = client.get(&Endpoint::root()).await.unwrap_err();
        match err {
            ApiError::Connection(msg) => assert_eq!(msg, "request timed out after 1s"),
            other => panic!("expected connection error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_ignores_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/cell-towers/5"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.delete(&Endpoint::path([5])).await.unwrap();
    }
}
