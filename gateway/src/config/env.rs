//! Environment variable loading
//!
//! `.env` values are already in the process environment by the time this runs
//! (`dotenvy` is invoked in `main`), so real environment variables win over
//! `.env` entries.

use std::error::Error;
use std::path::PathBuf;

use super::utils::{env_var, parse_bool, parse_env};
use super::{
    DEFAULT_HOST, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PORT, DEFAULT_RATE_LIMIT_BURST_SIZE,
    DEFAULT_RATE_LIMIT_RPS, DEFAULT_UPSTREAM_TIMEOUT_SECS, ServerConfig, TlsConfig,
};
use crate::auth::DEFAULT_SESSION_TTL_SECS;
use crate::core::metadata::DEFAULT_METADATA_PATH;
use crate::core::stt::DEEPGRAM_API_URL;
use crate::core::transcription::DEFAULT_MODEL;

/// Build a configuration from environment variables and defaults, unvalidated
pub(super) fn load_from_env() -> Result<ServerConfig, Box<dyn Error>> {
    Ok(ServerConfig {
        host: env_var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: parse_env("PORT", DEFAULT_PORT)?,
        tls: load_tls_from_env()?,
        deepgram_api_key: env_var("DEEPGRAM_API_KEY"),
        deepgram_base_url: env_var("DEEPGRAM_BASE_URL")
            .unwrap_or_else(|| DEEPGRAM_API_URL.to_string()),
        default_model: env_var("DEFAULT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        session_secret: env_var("SESSION_SECRET"),
        session_ttl_seconds: parse_env("SESSION_TTL_SECONDS", DEFAULT_SESSION_TTL_SECS)?,
        upstream_timeout_seconds: parse_env(
            "UPSTREAM_TIMEOUT_SECONDS",
            DEFAULT_UPSTREAM_TIMEOUT_SECS,
        )?,
        metadata_path: env_var("METADATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_METADATA_PATH)),
        max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        cors_allowed_origins: env_var("CORS_ALLOWED_ORIGINS"),
        rate_limit_requests_per_second: parse_env(
            "RATE_LIMIT_REQUESTS_PER_SECOND",
            DEFAULT_RATE_LIMIT_RPS,
        )?,
        rate_limit_burst_size: parse_env("RATE_LIMIT_BURST_SIZE", DEFAULT_RATE_LIMIT_BURST_SIZE)?,
    })
}

fn load_tls_from_env() -> Result<Option<TlsConfig>, Box<dyn Error>> {
    let enabled = match env_var("TLS_ENABLED") {
        Some(raw) => parse_bool("TLS_ENABLED", &raw)?,
        None => false,
    };
    if !enabled {
        return Ok(None);
    }

    let cert_path = env_var("TLS_CERT_PATH")
        .ok_or("TLS_ENABLED is true but TLS_CERT_PATH is not set")?;
    let key_path =
        env_var("TLS_KEY_PATH").ok_or("TLS_ENABLED is true but TLS_KEY_PATH is not set")?;

    Ok(Some(TlsConfig {
        cert_path: PathBuf::from(cert_path),
        key_path: PathBuf::from(key_path),
    }))
}
