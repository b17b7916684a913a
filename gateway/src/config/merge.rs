//! Merging YAML overrides onto the environment-derived configuration

use std::error::Error;
use std::path::PathBuf;

use super::yaml::{TlsYaml, YamlConfig};
use super::{ServerConfig, TlsConfig, env};

/// Load the environment base and apply YAML values on top
///
/// Priority: YAML > environment variables > `.env` > defaults.
pub(super) fn merge_config(yaml: Option<YamlConfig>) -> Result<ServerConfig, Box<dyn Error>> {
    let mut config = env::load_from_env()?;

    let Some(yaml) = yaml else {
        return Ok(config);
    };

    if let Some(server) = yaml.server {
        if let Some(host) = server.host {
            config.host = host;
        }
        if let Some(port) = server.port {
            config.port = port;
        }
        if let Some(tls) = server.tls {
            config.tls = merge_tls(config.tls.take(), tls)?;
        }
    }

    if let Some(providers) = yaml.providers {
        if let Some(key) = providers.deepgram_api_key {
            config.deepgram_api_key = Some(key);
        }
        if let Some(url) = providers.deepgram_base_url {
            config.deepgram_base_url = url;
        }
        if let Some(model) = providers.default_model {
            config.default_model = model;
        }
        if let Some(timeout) = providers.upstream_timeout_seconds {
            config.upstream_timeout_seconds = timeout;
        }
    }

    if let Some(session) = yaml.session {
        if let Some(secret) = session.secret {
            config.session_secret = Some(secret);
        }
        if let Some(ttl) = session.ttl_seconds {
            config.session_ttl_seconds = ttl;
        }
    }

    if let Some(path) = yaml.metadata.and_then(|m| m.path) {
        config.metadata_path = PathBuf::from(path);
    }

    if let Some(security) = yaml.security {
        if let Some(origins) = security.cors_allowed_origins {
            config.cors_allowed_origins = Some(origins);
        }
        if let Some(rps) = security.rate_limit_requests_per_second {
            config.rate_limit_requests_per_second = rps;
        }
        if let Some(burst) = security.rate_limit_burst_size {
            config.rate_limit_burst_size = burst;
        }
        if let Some(max) = security.max_upload_bytes {
            config.max_upload_bytes = max;
        }
    }

    Ok(config)
}

/// `enabled: false` turns TLS off; otherwise YAML paths override the base paths
fn merge_tls(base: Option<TlsConfig>, yaml: TlsYaml) -> Result<Option<TlsConfig>, Box<dyn Error>> {
    if yaml.enabled == Some(false) {
        return Ok(None);
    }

    let cert_path = yaml
        .cert_path
        .map(PathBuf::from)
        .or_else(|| base.as_ref().map(|t| t.cert_path.clone()));
    let key_path = yaml
        .key_path
        .map(PathBuf::from)
        .or_else(|| base.as_ref().map(|t| t.key_path.clone()));

    match (cert_path, key_path) {
        (Some(cert_path), Some(key_path)) => Ok(Some(TlsConfig {
            cert_path,
            key_path,
        })),
        (None, None) if yaml.enabled.is_none() => Ok(base),
        _ => Err("TLS requires both server.tls.cert_path and server.tls.key_path".into()),
    }
}
