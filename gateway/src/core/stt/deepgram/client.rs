//! Deepgram pre-recorded client implementation.
//!
//! One HTTP request per call: no retries and no buffering. The `reqwest`
//! client is built once and reused for connection pooling.

use async_trait::async_trait;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, info, warn};

use super::config::DeepgramSTTConfig;
use super::messages::{DeepgramErrorResponse, ListenResponse, UrlSource};
use crate::core::stt::base::{STTError, TranscriptionProvider};
use crate::core::transcription::{AudioSource, NormalizedRequest};

/// Content type sent for uploads whose type the client did not declare
const DEFAULT_AUDIO_CONTENT_TYPE: &str = "application/octet-stream";

/// Deepgram pre-recorded transcription client
pub struct DeepgramSTT {
    config: DeepgramSTTConfig,
    http_client: Client,
}

impl DeepgramSTT {
    /// Create a new client
    ///
    /// # Errors
    /// Returns `STTError::ConfigurationError` when the configuration is invalid
    /// or the HTTP client cannot be built.
    pub fn new(config: DeepgramSTTConfig) -> Result<Self, STTError> {
        config.validate().map_err(STTError::ConfigurationError)?;

        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| {
                STTError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &DeepgramSTTConfig {
        &self.config
    }

    fn map_send_error(e: reqwest::Error) -> STTError {
        if e.is_timeout() {
            STTError::NetworkError(format!("Request to Deepgram timed out: {e}"))
        } else if e.is_connect() {
            STTError::NetworkError(format!("Failed to connect to Deepgram: {e}"))
        } else {
            STTError::NetworkError(format!("Request failed: {e}"))
        }
    }

    fn map_status_error(status: reqwest::StatusCode, body: &str) -> STTError {
        let detail = match serde_json::from_str::<DeepgramErrorResponse>(body) {
            Ok(parsed) => parsed.describe(),
            Err(_) => body.chars().take(512).collect(),
        };
        let message = format!("Deepgram API error ({status}): {detail}");

        if matches!(status.as_u16(), 401 | 403) {
            warn!("Deepgram rejected the configured API key");
            STTError::AuthenticationFailed(message)
        } else {
            STTError::ProviderError {
                status: status.as_u16(),
                message,
            }
        }
    }
}

#[async_trait]
impl TranscriptionProvider for DeepgramSTT {
    fn name(&self) -> &'static str {
        "deepgram"
    }

    async fn transcribe(&self, request: &NormalizedRequest) -> Result<ListenResponse, STTError> {
        let builder = self
            .http_client
            .post(self.config.listen_url())
            .query(&self.config.query_params(&request.model))
            .header(AUTHORIZATION, format!("Token {}", self.config.api_key));

        let builder = match &request.source {
            AudioSource::Url(url) => {
                info!(model = %request.model, "Sending URL transcription request to Deepgram");
                builder.json(&UrlSource { url: url.clone() })
            }
            AudioSource::File { data, content_type } => {
                info!(
                    model = %request.model,
                    bytes = data.len(),
                    "Sending file transcription request to Deepgram"
                );
                builder
                    .header(
                        CONTENT_TYPE,
                        content_type
                            .as_deref()
                            .unwrap_or(DEFAULT_AUDIO_CONTENT_TYPE),
                    )
                    .body(data.clone())
            }
        };

        let response = builder.send().await.map_err(Self::map_send_error)?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| STTError::NetworkError(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(Self::map_status_error(status, &response_text));
        }

        debug!(bytes = response_text.len(), "Deepgram response received");

        serde_json::from_str::<ListenResponse>(&response_text)
            .map_err(|e| STTError::InvalidResponse(format!("Failed to parse Deepgram response: {e}")))
    }
}
