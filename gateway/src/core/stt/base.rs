use async_trait::async_trait;
use thiserror::Error;

use super::deepgram::ListenResponse;
use crate::core::transcription::NormalizedRequest;

/// Errors raised while talking to an upstream STT provider
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum STTError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Transport-level failure: connect, TLS, timeout, or body read
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Provider rejected our credentials (401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Any other non-2xx response
    #[error("Provider error ({status}): {message}")]
    ProviderError { status: u16, message: String },

    /// 2xx response whose body could not be decoded
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Upstream pre-recorded transcription provider
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    /// Short provider identifier used in logs
    fn name(&self) -> &'static str;

    /// Transcribe the normalized request and return the raw provider payload
    async fn transcribe(&self, request: &NormalizedRequest) -> Result<ListenResponse, STTError>;
}
