//! Inbound transcription requests and their validation

use bytes::Bytes;
use tracing::debug;

use super::TranscriptionError;
use crate::utils::validate_media_url;

/// Model used when the client does not pick one
pub const DEFAULT_MODEL: &str = "nova-3";

const MISSING_SOURCE_MESSAGE: &str = "Either 'file' or 'url' must be provided";

/// An uploaded audio file as received from the multipart form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedFile {
    pub data: Bytes,
    pub content_type: Option<String>,
}

/// Transcription request as submitted by the client, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptionRequest {
    pub file: Option<UploadedFile>,
    pub url: Option<String>,
    pub model: Option<String>,
}

/// Where the provider should read audio from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    /// Remote media the provider fetches itself
    Url(String),
    /// Raw audio bytes forwarded in the request body
    File {
        data: Bytes,
        content_type: Option<String>,
    },
}

/// A validated request with exactly one source and a resolved model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest {
    pub source: AudioSource,
    pub model: String,
}

impl TranscriptionRequest {
    /// Validate the request into a `NormalizedRequest`
    ///
    /// A blank URL and a zero-byte file count as absent. When both sources
    /// are present the URL is used and the file is dropped. A blank or
    /// missing model falls back to `default_model`.
    ///
    /// # Errors
    /// Returns `TranscriptionError::InvalidInput` when no usable source is
    /// present or the URL is not an absolute http(s) URL.
    pub fn validate(self, default_model: &str) -> Result<NormalizedRequest, TranscriptionError> {
        let model = self
            .model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(default_model)
            .to_string();

        let url = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty());

        let source = if let Some(url) = url {
            if self.file.as_ref().is_some_and(|f| !f.data.is_empty()) {
                debug!("Both file and url supplied, using url");
            }
            validate_media_url(url)
                .map_err(|e| TranscriptionError::InvalidInput(format!("Invalid 'url': {e}")))?;
            AudioSource::Url(url.to_string())
        } else {
            match self.file {
                Some(file) if !file.data.is_empty() => AudioSource::File {
                    data: file.data,
                    content_type: file.content_type.filter(|ct| !ct.trim().is_empty()),
                },
                _ => {
                    return Err(TranscriptionError::InvalidInput(
                        MISSING_SOURCE_MESSAGE.to_string(),
                    ));
                }
            }
        };

        Ok(NormalizedRequest { source, model })
    }
}
