//! Client-facing error taxonomy
//!
//! Every failure that reaches an HTTP response is classified into one of a
//! closed set of `{type, code}` pairs and rendered as
//! `{"error": {"type", "code", "message"}}` with the matching status.
//! Upstream failure detail is logged here and never copied into the body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use super::auth_error::AuthError;
use crate::core::metadata::MetadataError;
use crate::core::transcription::TranscriptionError;

/// Result type for HTTP handlers
pub type AppResult<T> = Result<T, AppError>;

const TRANSCRIPTION_FAILED_MESSAGE: &str = "Transcription failed. Please try again.";
const NO_RESULTS_MESSAGE: &str = "No transcription results returned from provider";
const MISSING_TOKEN_MESSAGE: &str = "Authorization header with a Bearer session token is required";
const INVALID_TOKEN_MESSAGE: &str = "Session token is invalid or expired";

/// Closed set of error codes surfaced to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidInput,
    MissingToken,
    InvalidToken,
    NoResults,
    TranscriptionFailed,
    InternalServerError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::MissingToken => "MISSING_TOKEN",
            ErrorCode::InvalidToken => "INVALID_TOKEN",
            ErrorCode::NoResults => "NO_RESULTS",
            ErrorCode::TranscriptionFailed => "TRANSCRIPTION_FAILED",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// The `type` half of the `{type, code}` pair
    pub fn error_type(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "ValidationError",
            ErrorCode::MissingToken | ErrorCode::InvalidToken => "AuthenticationError",
            ErrorCode::NoResults | ErrorCode::TranscriptionFailed => "TranscriptionError",
            ErrorCode::InternalServerError => "InternalServerError",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorCode::MissingToken | ErrorCode::InvalidToken => StatusCode::UNAUTHORIZED,
            ErrorCode::NoResults
            | ErrorCode::TranscriptionFailed
            | ErrorCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire form of a single error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    #[serde(rename = "type")]
    pub error_type: String,
    pub code: String,
    pub message: String,
}

/// Top-level error body: `{"error": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorRecord,
}

/// Application error returned by handlers
#[derive(Debug, Error)]
pub enum AppError {
    /// Request failed validation; the message is written by us and safe to return
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("No transcription results returned")]
    NoResults,

    /// Upstream or local processing failure; the detail is for logs only
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    /// Internal failure; the message is client-safe
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::InvalidInput,
            AppError::Auth(AuthError::MissingToken) => ErrorCode::MissingToken,
            AppError::Auth(AuthError::InvalidToken(_) | AuthError::Expired { .. }) => {
                ErrorCode::InvalidToken
            }
            AppError::Auth(AuthError::SigningFailed(_)) => ErrorCode::InternalServerError,
            AppError::NoResults => ErrorCode::NoResults,
            AppError::TranscriptionFailed(_) => ErrorCode::TranscriptionFailed,
            AppError::Internal(_) => ErrorCode::InternalServerError,
        }
    }

    /// Message placed in the response body
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(message) => message.clone(),
            AppError::Auth(AuthError::MissingToken) => MISSING_TOKEN_MESSAGE.to_string(),
            AppError::Auth(AuthError::InvalidToken(_) | AuthError::Expired { .. }) => {
                INVALID_TOKEN_MESSAGE.to_string()
            }
            AppError::Auth(AuthError::SigningFailed(_)) => {
                "Failed to create session".to_string()
            }
            AppError::NoResults => NO_RESULTS_MESSAGE.to_string(),
            AppError::TranscriptionFailed(_) => TRANSCRIPTION_FAILED_MESSAGE.to_string(),
            AppError::Internal(message) => message.clone(),
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        let code = self.code();
        ErrorBody {
            error: ErrorRecord {
                error_type: code.error_type().to_string(),
                code: code.as_str().to_string(),
                message: self.client_message(),
            },
        }
    }
}

impl From<TranscriptionError> for AppError {
    fn from(err: TranscriptionError) -> Self {
        match err {
            TranscriptionError::InvalidInput(message) => AppError::Validation(message),
            TranscriptionError::NoResults => AppError::NoResults,
            other => AppError::TranscriptionFailed(other.to_string()),
        }
    }
}

impl From<MetadataError> for AppError {
    fn from(err: MetadataError) -> Self {
        AppError::Internal(err.client_message())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        match &self {
            AppError::TranscriptionFailed(detail) => {
                error!(code = %code, detail = %detail, "Transcription request failed");
            }
            AppError::Auth(AuthError::SigningFailed(detail)) => {
                error!(code = %code, detail = %detail, "Session signing failed");
            }
            AppError::Internal(message) => {
                error!(code = %code, message = %message, "Internal server error");
            }
            _ => {
                warn!(code = %code, error = %self, "Request rejected");
            }
        }

        (code.status(), Json(self.to_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stt::STTError;

    #[test]
    fn test_taxonomy_pairs() {
        let cases = [
            (ErrorCode::InvalidInput, "ValidationError", "INVALID_INPUT", 400),
            (ErrorCode::MissingToken, "AuthenticationError", "MISSING_TOKEN", 401),
            (ErrorCode::InvalidToken, "AuthenticationError", "INVALID_TOKEN", 401),
            (ErrorCode::NoResults, "TranscriptionError", "NO_RESULTS", 500),
            (
                ErrorCode::TranscriptionFailed,
                "TranscriptionError",
                "TRANSCRIPTION_FAILED",
                500,
            ),
            (
                ErrorCode::InternalServerError,
                "InternalServerError",
                "INTERNAL_SERVER_ERROR",
                500,
            ),
        ];

        for (code, error_type, name, status) in cases {
            assert_eq!(code.error_type(), error_type);
            assert_eq!(code.as_str(), name);
            assert_eq!(code.status().as_u16(), status);
        }
    }

    #[test]
    fn test_expired_and_malformed_share_code() {
        let expired = AppError::from(AuthError::Expired { expired_at: 1 });
        let malformed = AppError::from(AuthError::InvalidToken("bad".to_string()));
        assert_eq!(expired.code(), ErrorCode::InvalidToken);
        assert_eq!(malformed.code(), ErrorCode::InvalidToken);
        assert_eq!(expired.client_message(), malformed.client_message());
    }

    #[test]
    fn test_upstream_detail_is_not_leaked() {
        let err = AppError::from(TranscriptionError::Upstream(STTError::ProviderError {
            status: 502,
            message: "secret upstream stack trace".to_string(),
        }));

        assert_eq!(err.code(), ErrorCode::TranscriptionFailed);
        let body = err.to_body();
        assert_eq!(body.error.message, TRANSCRIPTION_FAILED_MESSAGE);
        assert!(!body.error.message.contains("secret"));
    }

    #[test]
    fn test_transcription_error_mapping() {
        assert_eq!(
            AppError::from(TranscriptionError::InvalidInput("nope".to_string())).code(),
            ErrorCode::InvalidInput
        );
        assert_eq!(
            AppError::from(TranscriptionError::NoResults).code(),
            ErrorCode::NoResults
        );
        assert_eq!(
            AppError::from(TranscriptionError::Timeout(std::time::Duration::from_secs(1))).code(),
            ErrorCode::TranscriptionFailed
        );
    }

    #[test]
    fn test_body_serialization_shape() {
        let body = AppError::Validation("Either 'file' or 'url' must be provided".to_string())
            .to_body();
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["error"]["type"], "ValidationError");
        assert_eq!(json["error"]["code"], "INVALID_INPUT");
        assert_eq!(
            json["error"]["message"],
            "Either 'file' or 'url' must be provided"
        );
    }

    #[tokio::test]
    async fn test_into_response_status_and_body() {
        let response = AppError::NoResults.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error.code, "NO_RESULTS");
        assert_eq!(body.error.error_type, "TranscriptionError");
    }
}
