//! Test Fixtures Module
//!
//! Shared helpers for gateway integration tests:
//! - Configuration fixtures pointing at a stub provider
//! - Multipart request builder
//! - Response decoding helpers

// Allow dead code in test fixtures - not every test file uses every helper
#![allow(dead_code)]

use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use tower::util::ServiceExt;

use transcribe_gateway::{ServerConfig, routes, state::AppState};

pub const TEST_DEEPGRAM_KEY: &str = "test_deepgram_key";
pub const TEST_SESSION_SECRET: &str = "integration-test-session-secret";

/// Minimal configuration talking to `deepgram_base_url`
pub fn test_config(deepgram_base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        tls: None,
        deepgram_api_key: Some(TEST_DEEPGRAM_KEY.to_string()),
        deepgram_base_url: deepgram_base_url.to_string(),
        default_model: "nova-3".to_string(),
        upstream_timeout_seconds: 5,
        session_secret: Some(TEST_SESSION_SECRET.to_string()),
        session_ttl_seconds: 3600,
        metadata_path: PathBuf::from("/nonexistent/deepgram.toml"),
        cors_allowed_origins: None,
        rate_limit_requests_per_second: 60,
        rate_limit_burst_size: 10,
        max_upload_bytes: 1024 * 1024,
    }
}

/// Full application router over the given configuration
pub fn app(config: ServerConfig) -> (Router, std::sync::Arc<AppState>) {
    let state = AppState::new(config).expect("test provider config is valid");
    (routes::build_router(state.clone()), state)
}

/// Multipart form body builder
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartForm {
    pub fn new() -> Self {
        Self {
            boundary: "----gateway-test-boundary-7MA4YWxkTrZu0gW".to_string(),
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Build a `POST` request, optionally carrying a bearer token
    pub fn into_request(mut self, uri: &str, token: Option<&str>) -> Request<Body> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());

        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", self.boundary),
            );
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(self.body)).unwrap()
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Decode a response into its status and JSON body
pub async fn json_response(response: Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Obtain a session token through the public route
pub async fn session_token(app: &Router) -> String {
    let response = app.clone().oneshot(get("/api/session")).await.unwrap();
    let (status, json) = json_response(response).await;
    assert_eq!(status, StatusCode::OK);
    json["token"].as_str().unwrap().to_string()
}

/// Assert the `{error: {type, code, message}}` shape and return the message
pub fn assert_error(json: &serde_json::Value, error_type: &str, code: &str) -> String {
    assert_eq!(json["error"]["type"], error_type, "body: {json}");
    assert_eq!(json["error"]["code"], code, "body: {json}");
    json["error"]["message"].as_str().unwrap().to_string()
}
