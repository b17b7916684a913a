use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::app_error::AppError;

/// Result type for session token operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Failures raised while issuing or verifying session tokens
///
/// `InvalidToken` and `Expired` are kept apart for logging, but both surface to
/// the client as `AuthenticationError/INVALID_TOKEN`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No bearer credential was presented
    #[error("Missing bearer token")]
    MissingToken,

    /// Signature mismatch or structurally malformed token
    #[error("Invalid session token: {0}")]
    InvalidToken(String),

    /// Signature verified but the token is past its expiry
    #[error("Session token expired at {expired_at}")]
    Expired { expired_at: u64 },

    /// The token could not be signed
    #[error("Failed to sign session token: {0}")]
    SigningFailed(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_expired_renders_as_401() {
        let response = AuthError::Expired { expired_at: 10 }.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_signing_failure_renders_as_500() {
        let response = AuthError::SigningFailed("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
