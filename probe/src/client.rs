//! HTTP client wrapper
//!
//! One `reqwest::Client` per run, a fixed base URL and an optional bearer
//! token picked up after login.

use crate::error::{ProbeError, ProbeResult};
use crate::shape::preview;
use careergpt_probe_common::config::ProbeConfig;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

const USER_AGENT: &str = concat!("careergpt-probe/", env!("CARGO_PKG_VERSION"));

/// Longest body excerpt kept in an `UnexpectedStatus` error
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Response captured by [`ApiClient`]
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Raw body text
    pub body: String,
    /// Time from send to body fully read
    pub elapsed: Duration,
}

impl ApiResponse {
    /// Parse the body as JSON
    pub fn json(&self) -> ProbeResult<Value> {
        serde_json::from_str(&self.body).map_err(|err| {
            ProbeError::Decode(format!("{err}: {}", preview(&self.body, 200)))
        })
    }

    /// JSON body of a 200 response; 404 maps to `NotFound(resource)`
    pub fn expect_ok(&self, resource: &str) -> ProbeResult<Value> {
        match self.status {
            StatusCode::OK => self.json(),
            StatusCode::NOT_FOUND => Err(ProbeError::NotFound(resource.to_string())),
            _ => Err(self.unexpected()),
        }
    }

    /// JSON body of any 2xx response
    pub fn expect_success(&self) -> ProbeResult<Value> {
        if self.status.is_success() {
            self.json()
        } else {
            Err(self.unexpected())
        }
    }

    /// `UnexpectedStatus` error for this response
    pub fn unexpected(&self) -> ProbeError {
        ProbeError::UnexpectedStatus {
            status: self.status.as_u16(),
            body: preview(&self.body, MAX_ERROR_BODY_CHARS),
        }
    }

    /// Elapsed time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Thin wrapper over `reqwest::Client` bound to the backend base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    bearer: Option<String>,
}

impl ApiClient {
    /// Build a client with the configured timeout
    pub fn new(config: &ProbeConfig) -> ProbeResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            bearer: None,
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send `Authorization: Bearer <token>` on every later request
    pub fn set_bearer(&mut self, token: impl Into<String>) {
        self.bearer = Some(token.into());
    }

    /// Whether a session token is attached
    pub fn has_bearer(&self) -> bool {
        self.bearer.is_some()
    }

    /// GET `path`
    pub async fn get(&self, path: &str) -> ProbeResult<ApiResponse> {
        self.send("GET", path, self.http.get(self.url(path)), None)
            .await
    }

    /// GET `path` with an explicit token instead of the session token
    pub async fn get_with_token(&self, path: &str, token: &str) -> ProbeResult<ApiResponse> {
        self.send("GET", path, self.http.get(self.url(path)), Some(token))
            .await
    }

    /// POST a JSON body to `path`
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> ProbeResult<ApiResponse> {
        let builder = self.http.post(self.url(path)).json(body);
        self.send("POST", path, builder, None).await
    }

    /// PUT a JSON body to `path`
    pub async fn put_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> ProbeResult<ApiResponse> {
        let builder = self.http.put(self.url(path)).json(body);
        self.send("PUT", path, builder, None).await
    }

    /// DELETE `path`
    pub async fn delete(&self, path: &str) -> ProbeResult<ApiResponse> {
        self.send("DELETE", path, self.http.delete(self.url(path)), None)
            .await
    }

    /// POST a multipart form with a single file part
    pub async fn upload(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> ProbeResult<ApiResponse> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = Form::new().part(field.to_string(), part);
        let builder = self.http.post(self.url(path)).multipart(form);
        self.send("POST", path, builder, None).await
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        builder: RequestBuilder,
        token: Option<&str>,
    ) -> ProbeResult<ApiResponse> {
        let builder = match token.or(self.bearer.as_deref()) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let start = Instant::now();
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        let elapsed = start.elapsed();

        debug!(
            method,
            path,
            status = status.as_u16(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Backend request completed"
        );

        Ok(ApiResponse {
            status,
            body,
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(base_url: &str) -> ApiClient {
        let config = ProbeConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            ..ProbeConfig::default()
        };
        ApiClient::new(&config).unwrap()
    }

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            elapsed: Duration::from_millis(10),
        }
    }

    #[test]
    fn url_joins_without_double_slash() {
        let client = client_for("http://localhost:3000/api/");
        assert_eq!(client.base_url(), "http://localhost:3000/api");
        assert_eq!(client.url("/health"), "http://localhost:3000/api/health");
        assert_eq!(client.url("models"), "http://localhost:3000/api/models");
    }

    #[test]
    fn expect_ok_maps_statuses() {
        assert_eq!(response(200, r#"{"ok":true}"#).expect_ok("x").unwrap()["ok"], true);
        assert!(matches!(
            response(404, "").expect_ok("Resume"),
            Err(ProbeError::NotFound(name)) if name == "Resume"
        ));
        assert!(matches!(
            response(500, "boom").expect_ok("x"),
            Err(ProbeError::UnexpectedStatus { status: 500, .. })
        ));
        assert!(matches!(
            response(201, "{}").expect_ok("x"),
            Err(ProbeError::UnexpectedStatus { status: 201, .. })
        ));
    }

    #[test]
    fn expect_success_accepts_created() {
        assert!(response(201, "{}").expect_success().is_ok());
        assert!(response(409, "{}").expect_success().is_err());
    }

    #[test]
    fn invalid_json_is_decode_error() {
        assert!(matches!(
            response(200, "<html>").json(),
            Err(ProbeError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn bearer_token_is_sent_after_set() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/profile"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"profile": {}})))
            .mount(&mock)
            .await;

        let mut client = client_for(&format!("{}/api", mock.uri()));
        assert!(!client.has_bearer());
        client.set_bearer("tok-1");

        let response = client.get("/profile").await.unwrap();
        assert_eq!(response.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn explicit_token_overrides_session_token() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/analytics"))
            .and(header("authorization", "Bearer admin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"analytics": {}})))
            .mount(&mock)
            .await;

        let mut client = client_for(&mock.uri());
        client.set_bearer("user");
        let response = client
            .get_with_token("/admin/analytics", "admin")
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn connection_failure_is_http_error() {
        let client = client_for("http://127.0.0.1:9");
        let error = client.get("/health").await.unwrap_err();
        assert!(matches!(error, ProbeError::Http(_) | ProbeError::Timeout(_)));
    }
}
