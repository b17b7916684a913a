use axum::{Router, routing::get};

use crate::handlers::{api, metadata, session};
use crate::state::AppState;
use std::sync::Arc;

/// Routes reachable without a session token
pub fn create_public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(api::health_check))
        .route("/api/session", get(session::create_session))
        .route("/api/metadata", get(metadata::get_metadata))
}
