//! Transcription endpoint
//!
//! Accepts `multipart/form-data` with either a binary `file` field or a `url`
//! text field, plus an optional `model`. Runs behind the session auth
//! middleware, so the handler only executes for verified sessions.

use axum::{
    Extension, Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, info};

use crate::auth::{SessionClaims, unix_now};
use crate::core::transcription::{TranscriptionRequest, TranscriptionResult, UploadedFile};
use crate::errors::{AppError, AppResult};
use crate::state::AppState;

const FILE_FIELD: &str = "file";
const URL_FIELD: &str = "url";
const MODEL_FIELD: &str = "model";

/// Transcribe an uploaded file or remote URL
pub async fn transcribe_handler(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<SessionClaims>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<TranscriptionResult>> {
    let multipart = multipart.map_err(|rejection| {
        AppError::Validation(format!(
            "Request must be multipart/form-data with a 'file' or 'url' field: {rejection}"
        ))
    })?;

    let request = read_transcription_form(multipart).await?;

    info!(
        has_file = request.file.is_some(),
        has_url = request.url.is_some(),
        model = request.model.as_deref().unwrap_or("default"),
        session_remaining_secs = claims.remaining_at(unix_now()),
        "Transcription requested"
    );

    let result = state.transcriber.transcribe(request).await?;
    Ok(Json(result))
}

/// Collect the known form fields, ignoring anything else
///
/// Repeated fields keep the last value.
pub async fn read_transcription_form(mut multipart: Multipart) -> AppResult<TranscriptionRequest> {
    let mut request = TranscriptionRequest::default();

    while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            FILE_FIELD => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data: Bytes = field.bytes().await.map_err(invalid_form)?;
                debug!(
                    file_name = file_name.as_deref().unwrap_or("unknown"),
                    content_type = content_type.as_deref().unwrap_or("unknown"),
                    bytes = data.len(),
                    "Received audio upload"
                );
                request.file = Some(UploadedFile { data, content_type });
            }
            URL_FIELD => {
                request.url = Some(field.text().await.map_err(invalid_form)?);
            }
            MODEL_FIELD => {
                request.model = Some(field.text().await.map_err(invalid_form)?);
            }
            other => {
                debug!(field = %other, "Ignoring unknown form field");
            }
        }
    }

    Ok(request)
}

fn invalid_form(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Failed to read multipart form: {}", e.body_text()))
}
