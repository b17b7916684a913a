//! Mapping of the raw provider payload into the outbound contract

use serde::{Deserialize, Serialize};

use super::TranscriptionError;
use crate::core::stt::ListenResponse;

/// Normalized transcription returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub transcript: String,

    /// Word timings, present only when the provider returned any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<WordTiming>>,

    /// Audio duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    pub metadata: ResultMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTiming {
    pub text: String,
    pub start: f64,
    pub end: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<u32>,
}

/// Request metadata; absent upstream values serialize as `null`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMetadata {
    pub model_uuid: Option<String>,
    pub request_id: Option<String>,
    pub model_name: String,
}

/// Build a `TranscriptionResult` from a provider response
///
/// The first alternative of the first channel is the canonical transcript.
/// Metadata gaps are never an error.
///
/// # Errors
/// Returns `TranscriptionError::NoResults` when the channel/alternative path
/// is absent. An alternative without a transcript yields an empty one.
pub fn format_response(
    response: &ListenResponse,
    model: &str,
) -> Result<TranscriptionResult, TranscriptionError> {
    let alternative = response
        .first_alternative()
        .ok_or(TranscriptionError::NoResults)?;
    let transcript = alternative.transcript.clone().unwrap_or_default();

    let words = (!alternative.words.is_empty()).then(|| {
        alternative
            .words
            .iter()
            .map(|w| WordTiming {
                text: w.word.clone(),
                start: w.start,
                end: w.end,
                speaker: w.speaker,
            })
            .collect()
    });

    let upstream_meta = response.metadata.as_ref();

    Ok(TranscriptionResult {
        transcript,
        words,
        duration: upstream_meta.and_then(|m| m.duration),
        metadata: ResultMetadata {
            model_uuid: upstream_meta.and_then(|m| m.resolved_model_uuid()),
            request_id: upstream_meta.and_then(|m| m.request_id.clone()),
            model_name: model.to_string(),
        },
    })
}
