//! Configuration validation
//!
//! Runs once at startup after all sources are merged. Any error aborts the
//! process before the listener is bound.

use std::error::Error;

use url::Url;

use super::TlsConfig;

/// The provider credential is mandatory
pub(super) fn validate_deepgram_api_key(key: &Option<String>) -> Result<(), Box<dyn Error>> {
    match key {
        Some(key) if !key.trim().is_empty() => Ok(()),
        _ => Err("DEEPGRAM_API_KEY is required (set it in the environment, .env, or providers.deepgram_api_key)".into()),
    }
}

pub(super) fn validate_base_url(base_url: &str) -> Result<(), Box<dyn Error>> {
    let parsed = Url::parse(base_url)
        .map_err(|e| format!("Invalid DEEPGRAM_BASE_URL '{base_url}': {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "DEEPGRAM_BASE_URL must use http or https, got: {}",
            parsed.scheme()
        )
        .into());
    }
    Ok(())
}

/// Durations and limits that must be strictly positive
pub(super) fn validate_positive(name: &str, value: u64) -> Result<(), Box<dyn Error>> {
    if value == 0 {
        return Err(format!("{name} must be greater than zero").into());
    }
    Ok(())
}

/// An explicitly configured secret must not be trivially short
pub(super) fn validate_session_secret(secret: &Option<String>) -> Result<(), Box<dyn Error>> {
    match secret {
        Some(secret) if secret.len() < MIN_SESSION_SECRET_LEN => Err(format!(
            "SESSION_SECRET must be at least {MIN_SESSION_SECRET_LEN} bytes long"
        )
        .into()),
        _ => Ok(()),
    }
}

pub(super) const MIN_SESSION_SECRET_LEN: usize = 16;

pub(super) fn validate_model(model: &str) -> Result<(), Box<dyn Error>> {
    if model.trim().is_empty() {
        return Err("DEFAULT_MODEL must not be empty".into());
    }
    Ok(())
}

/// Certificate and key files must exist when TLS is enabled
pub(super) fn validate_tls(tls: &Option<TlsConfig>) -> Result<(), Box<dyn Error>> {
    if let Some(tls) = tls {
        if !tls.cert_path.exists() {
            return Err(format!(
                "TLS certificate file not found: {}",
                tls.cert_path.display()
            )
            .into());
        }
        if !tls.key_path.exists() {
            return Err(format!("TLS key file not found: {}", tls.key_path.display()).into());
        }
    }
    Ok(())
}
