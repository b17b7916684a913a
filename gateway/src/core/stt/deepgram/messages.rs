//! Message types for the Deepgram pre-recorded API.
//!
//! Every field the gateway reads is optional or defaulted: Deepgram omits
//! words, duration and parts of the metadata depending on model and features,
//! and a missing field must never fail deserialization.
//!
//! API Reference: https://developers.deepgram.com/reference/speech-to-text-api/listen

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Request Types
// =============================================================================

/// JSON body for URL-sourced transcription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlSource {
    pub url: String,
}

// =============================================================================
// Response Types
// =============================================================================

/// Top-level `/v1/listen` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListenResponse {
    #[serde(default)]
    pub metadata: Option<ListenMetadata>,

    #[serde(default)]
    pub results: Option<ListenResults>,
}

impl ListenResponse {
    /// First alternative of the first channel, the canonical transcript
    pub fn first_alternative(&self) -> Option<&Alternative> {
        self.results
            .as_ref()?
            .channels
            .first()?
            .alternatives
            .first()
    }
}

/// Request metadata reported by Deepgram
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListenMetadata {
    #[serde(default)]
    pub request_id: Option<String>,

    #[serde(default)]
    pub model_uuid: Option<String>,

    /// UUIDs of the models that served the request
    #[serde(default, deserialize_with = "null_as_default")]
    pub models: Vec<String>,

    /// Audio duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,

    #[serde(default)]
    pub channels: Option<u32>,

    #[serde(default)]
    pub created: Option<String>,

    #[serde(default)]
    pub sha256: Option<String>,
}

impl ListenMetadata {
    /// Explicit `model_uuid`, falling back to the first served model
    pub fn resolved_model_uuid(&self) -> Option<String> {
        self.model_uuid
            .clone()
            .or_else(|| self.models.first().cloned())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListenResults {
    #[serde(default, deserialize_with = "null_as_default")]
    pub channels: Vec<Channel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    #[serde(default, deserialize_with = "null_as_default")]
    pub alternatives: Vec<Alternative>,

    #[serde(default)]
    pub detected_language: Option<String>,
}

/// One transcription hypothesis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    #[serde(default)]
    pub transcript: Option<String>,

    #[serde(default)]
    pub confidence: Option<f64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub words: Vec<Word>,
}

/// A word with timing information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,

    /// Start time in seconds
    pub start: f64,

    /// End time in seconds
    pub end: f64,

    #[serde(default)]
    pub confidence: Option<f64>,

    /// Speaker index, present when diarization is enabled
    #[serde(default)]
    pub speaker: Option<u32>,

    /// Word with smart-format punctuation/casing applied
    #[serde(default)]
    pub punctuated_word: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Deepgram error body
///
/// Older endpoints use `err_code`/`err_msg`, newer ones `category`/`message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepgramErrorResponse {
    #[serde(default)]
    pub err_code: Option<String>,

    #[serde(default)]
    pub err_msg: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub request_id: Option<String>,
}

impl DeepgramErrorResponse {
    /// Best available human-readable description
    pub fn describe(&self) -> String {
        let code = self
            .err_code
            .as_deref()
            .or(self.category.as_deref())
            .unwrap_or("UNKNOWN");
        let message = self
            .err_msg
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("no message");
        match &self.request_id {
            Some(id) => format!("{code}: {message} (request_id={id})"),
            None => format!("{code}: {message}"),
        }
    }
}
