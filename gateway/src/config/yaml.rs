use serde::Deserialize;
use std::path::PathBuf;

/// Complete YAML configuration structure
///
/// Every field is optional so a file can override only what it needs;
/// anything left out keeps its environment or default value.
///
/// # Example YAML structure
/// ```yaml
/// server:
///   host: "0.0.0.0"
///   port: 8081
///   tls:
///     enabled: true
///     cert_path: "/etc/tls/cert.pem"
///     key_path: "/etc/tls/key.pem"
///
/// providers:
///   deepgram_api_key: "your-deepgram-key"
///   deepgram_base_url: "https://api.deepgram.com"
///   default_model: "nova-3"
///   upstream_timeout_seconds: 60
///
/// session:
///   secret: "long-random-string"
///   ttl_seconds: 3600
///
/// metadata:
///   path: "deepgram.toml"
///
/// security:
///   cors_allowed_origins: "http://localhost:8080"
///   rate_limit_requests_per_second: 60
///   rate_limit_burst_size: 10
///   max_upload_bytes: 104857600
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: Option<ServerYaml>,
    pub providers: Option<ProvidersYaml>,
    pub session: Option<SessionYaml>,
    pub metadata: Option<MetadataYaml>,
    pub security: Option<SecurityYaml>,
}

/// Server configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ServerYaml {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub tls: Option<TlsYaml>,
}

/// TLS configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TlsYaml {
    pub enabled: Option<bool>,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
}

/// Upstream provider settings from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ProvidersYaml {
    pub deepgram_api_key: Option<String>,
    pub deepgram_base_url: Option<String>,
    pub default_model: Option<String>,
    pub upstream_timeout_seconds: Option<u64>,
}

/// Session token settings from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SessionYaml {
    /// Signing secret; a random one is generated at startup when absent
    pub secret: Option<String>,
    pub ttl_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct MetadataYaml {
    pub path: Option<String>,
}

/// Security settings from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SecurityYaml {
    pub cors_allowed_origins: Option<String>,
    pub rate_limit_requests_per_second: Option<u32>,
    pub rate_limit_burst_size: Option<u32>,
    pub max_upload_bytes: Option<usize>,
}

impl YamlConfig {
    /// Load YAML configuration from a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the YAML is malformed.
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;

        let config: YamlConfig = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse YAML config: {e}"))?;

        Ok(config)
    }
}
