use crate::auth::SessionClaims;
use crate::errors::auth_error::AuthError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Extract the bearer token from the `Authorization` header
///
/// A missing header, a non-UTF-8 header, a scheme other than `Bearer`
/// (matched case-insensitively) or an empty credential all count as no
/// bearer credential presented.
pub fn extract_token(request: &Request) -> Result<String, AuthError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?;

    let value = header.to_str().map_err(|_| AuthError::MissingToken)?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MissingToken)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        tracing::debug!(scheme = %scheme, "Unsupported authorization scheme");
        return Err(AuthError::MissingToken);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token.to_string())
}

/// Session authentication middleware for protected routes
///
/// Verifies the bearer token with the session token service and inserts the
/// verified `SessionClaims` into request extensions. Any failure short-circuits
/// with a 401 before the handler runs.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_token(&request).inspect_err(|_| {
        tracing::debug!(path = %request.uri().path(), "Request without bearer token");
    })?;

    let claims = state.sessions.verify(&token).inspect_err(|e| {
        tracing::info!(path = %request.uri().path(), error = %e, "Session token rejected");
    })?;

    tracing::debug!(
        expires_at = claims.expires_at(),
        "Session token verified"
    );

    request.extensions_mut().insert::<SessionClaims>(claims);
    Ok(next.run(request).await)
}
