use std::time::Duration;

use thiserror::Error;

use crate::core::stt::STTError;

/// Failures raised while validating, dispatching, or formatting a transcription
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TranscriptionError {
    /// The request is unusable; the message is safe to show the client
    #[error("{0}")]
    InvalidInput(String),

    /// The provider answered but the canonical transcript path was absent
    #[error("No transcription results returned")]
    NoResults,

    #[error("Upstream provider failed: {0}")]
    Upstream(#[from] STTError),

    #[error("Upstream provider did not respond within {0:?}")]
    Timeout(Duration),
}
