use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::errors::AppResult;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
}

/// Issue a new session token
///
/// Public route; the only failure is a signing error, which surfaces as 500.
pub async fn create_session(State(state): State<Arc<AppState>>) -> AppResult<Json<SessionResponse>> {
    let token = state.sessions.issue()?;
    debug!(ttl_secs = state.sessions.ttl().as_secs(), "Issued session token");
    Ok(Json(SessionResponse { token }))
}
