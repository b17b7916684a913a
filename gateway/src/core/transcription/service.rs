//! Validate, dispatch and format a transcription in one place

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use super::{
    NormalizedRequest, TranscriptionError, TranscriptionRequest, TranscriptionResult,
    format_response,
};
use crate::core::stt::{ListenResponse, STTError, TranscriptionProvider};

/// Single-attempt transcription pipeline over a provider
#[derive(Clone)]
pub struct TranscriptionService {
    provider: Arc<dyn TranscriptionProvider>,
    default_model: String,
    timeout: Duration,
}

impl TranscriptionService {
    pub fn new(
        provider: Arc<dyn TranscriptionProvider>,
        default_model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            provider,
            default_model: default_model.into(),
            timeout,
        }
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validate an inbound request against this service's default model
    pub fn validate(
        &self,
        request: TranscriptionRequest,
    ) -> Result<NormalizedRequest, TranscriptionError> {
        request.validate(&self.default_model)
    }

    /// Issue exactly one upstream call, bounded by the configured timeout
    ///
    /// Dropping the returned future cancels the in-flight upstream request.
    pub async fn dispatch(
        &self,
        request: &NormalizedRequest,
    ) -> Result<ListenResponse, TranscriptionError> {
        match tokio::time::timeout(self.timeout, self.provider.transcribe(request)).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(e)) => {
                if let STTError::AuthenticationFailed(detail) = &e {
                    error!(
                        provider = self.provider.name(),
                        detail = %detail,
                        "Upstream rejected provider credentials, check the configured API key"
                    );
                }
                Err(TranscriptionError::Upstream(e))
            }
            Err(_) => {
                warn!(
                    provider = self.provider.name(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Upstream transcription timed out"
                );
                Err(TranscriptionError::Timeout(self.timeout))
            }
        }
    }

    /// Validate, dispatch and format
    pub async fn transcribe(
        &self,
        request: TranscriptionRequest,
    ) -> Result<TranscriptionResult, TranscriptionError> {
        let normalized = self.validate(request)?;
        let response = self.dispatch(&normalized).await?;
        let result = format_response(&response, &normalized.model)?;

        info!(
            provider = self.provider.name(),
            model = %normalized.model,
            transcript_chars = result.transcript.len(),
            words = result.words.as_ref().map_or(0, Vec::len),
            "Transcription completed"
        );

        Ok(result)
    }
}
