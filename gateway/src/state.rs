//! Shared application state handed to every handler

use std::sync::Arc;

use tracing::{info, warn};

use crate::auth::{SessionTokenService, SigningSecret};
use crate::config::ServerConfig;
use crate::core::stt::{DeepgramSTT, DeepgramSTTConfig, STTError, TranscriptionProvider};
use crate::core::transcription::TranscriptionService;

/// Read-only state shared behind an `Arc`
///
/// Nothing here changes after startup, so no locking is needed.
pub struct AppState {
    pub config: ServerConfig,
    pub sessions: SessionTokenService,
    pub transcriber: TranscriptionService,
}

impl AppState {
    /// Build state with the Deepgram provider described by `config`
    ///
    /// # Errors
    /// Returns `STTError::ConfigurationError` when the provider cannot be built,
    /// for example because the API key is missing.
    pub fn new(config: ServerConfig) -> Result<Arc<Self>, STTError> {
        let mut stt_config = DeepgramSTTConfig::new(
            config.deepgram_api_key.clone().unwrap_or_default(),
        );
        stt_config.base_url = config.deepgram_base_url.clone();
        stt_config.request_timeout = config.upstream_timeout();

        let provider = DeepgramSTT::new(stt_config)?;
        info!(
            provider = provider.name(),
            base_url = %config.deepgram_base_url,
            default_model = %config.default_model,
            "Transcription provider initialized"
        );

        Ok(Self::with_provider(config, Arc::new(provider)))
    }

    /// Build state around an arbitrary provider
    pub fn with_provider(config: ServerConfig, provider: Arc<dyn TranscriptionProvider>) -> Arc<Self> {
        let secret = match &config.session_secret {
            Some(secret) => SigningSecret::new(secret.as_bytes()),
            None => {
                warn!("SESSION_SECRET not set, generated a random signing secret; sessions will not survive a restart");
                SigningSecret::generate()
            }
        };

        let sessions = SessionTokenService::new(&secret, config.session_ttl());
        let transcriber = TranscriptionService::new(
            provider,
            config.default_model.clone(),
            config.upstream_timeout(),
        );

        Arc::new(Self {
            config,
            sessions,
            transcriber,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::core::stt::ListenResponse;
    use crate::core::transcription::NormalizedRequest;
    use async_trait::async_trait;
    use std::path::PathBuf;

    pub(crate) fn test_config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            tls: None,
            deepgram_api_key: Some("test-key".to_string()),
            deepgram_base_url: "http://127.0.0.1:9".to_string(),
            default_model: "nova-3".to_string(),
            upstream_timeout_seconds: 5,
            session_secret: Some("unit-test-session-secret".to_string()),
            session_ttl_seconds: 3600,
            metadata_path: PathBuf::from("/nonexistent/deepgram.toml"),
            cors_allowed_origins: None,
            rate_limit_requests_per_second: 60,
            rate_limit_burst_size: 10,
            max_upload_bytes: 1024 * 1024,
        }
    }

    /// Provider that answers every request with the same payload
    pub(crate) struct StaticProvider(pub ListenResponse);

    #[async_trait]
    impl TranscriptionProvider for StaticProvider {
        fn name(&self) -> &'static str {
            "static"
        }

        async fn transcribe(
            &self,
            _request: &NormalizedRequest,
        ) -> Result<ListenResponse, STTError> {
            Ok(self.0.clone())
        }
    }

    pub(crate) fn state_with(config: ServerConfig, response: ListenResponse) -> Arc<AppState> {
        AppState::with_provider(config, Arc::new(StaticProvider(response)))
    }

    pub(crate) fn test_state() -> Arc<AppState> {
        state_with(test_config(), ListenResponse::default())
    }
}
