//! Configuration module for the transcription gateway
//!
//! This module handles server configuration from various sources: .env files, YAML files,
//! and environment variables. Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//! - `utils`: Utility functions for configuration parsing
//!
//! # Example
//! ```rust,no_run
//! use transcribe_gateway::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable overrides
//! let config_path = PathBuf::from("config.yaml");
//! let config = ServerConfig::from_file(&config_path)?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::time::Duration;

mod env;
mod merge;
mod utils;
mod validation;
mod yaml;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;
pub const DEFAULT_RATE_LIMIT_RPS: u32 = 60;
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 10;

/// TLS configuration for HTTPS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsConfig {
    /// Path to the TLS certificate file (PEM format)
    pub cert_path: PathBuf,
    /// Path to the TLS private key file (PEM format)
    pub key_path: PathBuf,
}

/// Server configuration
///
/// Contains all configuration needed to run the gateway:
/// - Server settings (host, port, TLS)
/// - Deepgram credentials, endpoint, default model and timeout
/// - Session token signing secret and lifetime
/// - Metadata file location
/// - Security settings (CORS, rate limiting, upload size)
#[derive(Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // TLS configuration (optional)
    pub tls: Option<TlsConfig>,

    // Upstream provider
    /// Deepgram API key; required, startup fails without it
    pub deepgram_api_key: Option<String>,
    pub deepgram_base_url: String,
    /// Model used when a request does not name one
    pub default_model: String,
    pub upstream_timeout_seconds: u64,

    // Sessions
    /// HMAC signing secret; when `None` a random secret is generated at startup
    /// and every token is invalidated by a restart
    pub session_secret: Option<String>,
    pub session_ttl_seconds: u64,

    /// TOML file whose `[meta]` table is served by the metadata route
    pub metadata_path: PathBuf,

    // Security configuration
    /// CORS allowed origins (comma-separated list or "*" for all)
    /// Default: None (CORS disabled, same-origin only)
    pub cors_allowed_origins: Option<String>,
    /// Maximum requests per second per IP address
    /// Default: 60
    pub rate_limit_requests_per_second: u32,
    /// Maximum burst size for rate limiting
    /// Default: 10
    pub rate_limit_burst_size: u32,
    /// Maximum accepted request body size for uploads
    pub max_upload_bytes: usize,
}

/// Implement Drop to zeroize secret fields when ServerConfig is dropped.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        if let Some(ref mut key) = self.deepgram_api_key {
            key.zeroize();
        }
        if let Some(ref mut secret) = self.session_secret {
            secret.zeroize();
        }
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("tls", &self.tls)
            .field("deepgram_api_key", &redact(&self.deepgram_api_key))
            .field("deepgram_base_url", &self.deepgram_base_url)
            .field("default_model", &self.default_model)
            .field("upstream_timeout_seconds", &self.upstream_timeout_seconds)
            .field("session_secret", &redact(&self.session_secret))
            .field("session_ttl_seconds", &self.session_ttl_seconds)
            .field("metadata_path", &self.metadata_path)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field(
                "rate_limit_requests_per_second",
                &self.rate_limit_requests_per_second,
            )
            .field("rate_limit_burst_size", &self.rate_limit_burst_size)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// `.env` is loaded into the environment by `main` before this is called.
    ///
    /// # Errors
    /// Returns an error if a variable has an invalid format or validation fails,
    /// including when `DEEPGRAM_API_KEY` is missing.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = merge::merge_config(None)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file with environment variable base
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// # Errors
    /// Returns an error if:
    /// - The YAML file cannot be read or is malformed
    /// - Environment variables have invalid formats
    /// - Configuration validation fails
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let yaml_config = yaml::YamlConfig::from_file(path)?;
        let config = merge::merge_config(Some(yaml_config))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the merged configuration
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        validation::validate_deepgram_api_key(&self.deepgram_api_key)?;
        validation::validate_base_url(&self.deepgram_base_url)?;
        validation::validate_model(&self.default_model)?;
        validation::validate_positive("SESSION_TTL_SECONDS", self.session_ttl_seconds)?;
        validation::validate_positive("UPSTREAM_TIMEOUT_SECONDS", self.upstream_timeout_seconds)?;
        validation::validate_positive("MAX_UPLOAD_BYTES", self.max_upload_bytes as u64)?;
        validation::validate_positive(
            "RATE_LIMIT_REQUESTS_PER_SECOND",
            u64::from(self.rate_limit_requests_per_second),
        )?;
        validation::validate_positive(
            "RATE_LIMIT_BURST_SIZE",
            u64::from(self.rate_limit_burst_size),
        )?;
        validation::validate_session_secret(&self.session_secret)?;
        validation::validate_tls(&self.tls)?;
        Ok(())
    }

    /// Get the server address as a string
    ///
    /// Returns the address in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if TLS is enabled
    pub fn is_tls_enabled(&self) -> bool {
        self.tls.is_some()
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_seconds)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }
}
