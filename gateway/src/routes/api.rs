use axum::{Router, extract::DefaultBodyLimit, routing::post};

use crate::handlers::transcribe;
use crate::state::AppState;
use std::sync::Arc;

/// Create the API router with protected routes
///
/// Authentication middleware is applied by the caller once state is available.
pub fn create_api_router(max_upload_bytes: usize) -> Router<Arc<AppState>> {
    Router::new()
        .route("/stt/transcribe", post(transcribe::transcribe_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
