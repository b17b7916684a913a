use axum::{Json, extract::State};
use std::sync::Arc;

use crate::core::metadata::load_meta_section;
use crate::errors::AppResult;
use crate::state::AppState;

/// Return the `[meta]` table of the configured metadata file
pub async fn get_metadata(State(state): State<Arc<AppState>>) -> AppResult<Json<serde_json::Value>> {
    let meta = load_meta_section(&state.config.metadata_path).await?;
    Ok(Json(meta))
}
