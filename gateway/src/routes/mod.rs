//! Router assembly
//!
//! - `public`: health, session issuance and metadata (no auth)
//! - `api`: transcription, wrapped in the session auth middleware
//! - `layers`: CORS and security headers applied at the server edge

pub mod api;
pub mod layers;
pub mod public;

use axum::{Router, middleware};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::middleware::{auth_middleware, request_id_middleware};
use crate::state::AppState;

/// Build the application router with auth, tracing and request ids applied
///
/// Rate limiting, CORS and security headers are added by the binary.
pub fn build_router(state: Arc<AppState>) -> Router {
    let protected_routes = api::create_api_router(state.config.max_upload_bytes).route_layer(
        middleware::from_fn_with_state(state.clone(), auth_middleware),
    );

    public::create_public_router()
        .merge(protected_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}
