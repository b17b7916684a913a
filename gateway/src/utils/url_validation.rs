//! Validation of client-supplied media URLs
//!
//! The gateway never fetches the URL itself; it is forwarded to the provider,
//! which downloads the media. Validation only rejects values the provider
//! could never fetch, so clients get `INVALID_INPUT` instead of an opaque
//! upstream failure:
//! - must parse as an absolute URL
//! - scheme must be `http` or `https`
//! - must have a host

use thiserror::Error;
use tracing::debug;
use url::Url;

/// Errors that can occur during URL validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),

    #[error("URL scheme must be http or https, got: {0}")]
    UnsupportedScheme(String),

    #[error("URL must have a host")]
    MissingHost,
}

/// Validates a remote media URL and returns it parsed
///
/// # Example
/// ```rust,ignore
/// use transcribe_gateway::utils::url_validation::validate_media_url;
///
/// assert!(validate_media_url("https://static.deepgram.com/examples/interview.wav").is_ok());
/// assert!(validate_media_url("ftp://example.com/audio.wav").is_err());
/// assert!(validate_media_url("not a url").is_err());
/// ```
pub fn validate_media_url(url: &str) -> Result<Url, UrlValidationError> {
    let parsed = Url::parse(url)?;

    let scheme = parsed.scheme();
    if scheme != "https" && scheme != "http" {
        debug!(scheme = %scheme, "Rejected media URL scheme");
        return Err(UrlValidationError::UnsupportedScheme(scheme.to_string()));
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err(UrlValidationError::MissingHost),
    }
}
