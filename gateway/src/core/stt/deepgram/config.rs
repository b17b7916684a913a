//! Configuration for the Deepgram pre-recorded client.

use std::time::Duration;

use url::Url;

/// Production Deepgram API base URL
pub const DEEPGRAM_API_URL: &str = "https://api.deepgram.com";

/// Default bound on a single upstream call
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Default TCP/TLS connect timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Deepgram client configuration
#[derive(Clone)]
pub struct DeepgramSTTConfig {
    /// Deepgram API key, sent as `Authorization: Token <key>`
    pub api_key: String,
    /// API base URL without the `/v1/listen` path
    pub base_url: String,
    /// Request `smart_format=true` (punctuation, numerals, paragraphs)
    pub smart_format: bool,
    /// Overall per-request timeout
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for DeepgramSTTConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Drop for DeepgramSTTConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.api_key.zeroize();
    }
}

impl std::fmt::Debug for DeepgramSTTConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepgramSTTConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("smart_format", &self.smart_format)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl DeepgramSTTConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEEPGRAM_API_URL.to_string(),
            smart_format: true,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns a message when the API key is blank, the base URL is not an
    /// absolute http(s) URL, or a timeout is zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("Deepgram API key is required".to_string());
        }

        let parsed = Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid Deepgram base URL '{}': {e}", self.base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(format!(
                "Deepgram base URL must use http or https, got: {}",
                parsed.scheme()
            ));
        }

        if self.request_timeout.is_zero() {
            return Err("Deepgram request timeout must be greater than zero".to_string());
        }
        if self.connect_timeout.is_zero() {
            return Err("Deepgram connect timeout must be greater than zero".to_string());
        }

        Ok(())
    }

    /// Full URL of the pre-recorded listen endpoint
    pub fn listen_url(&self) -> String {
        format!("{}/v1/listen", self.base_url.trim_end_matches('/'))
    }

    /// Query parameters for a request with the given model
    pub fn query_params(&self, model: &str) -> Vec<(&'static str, String)> {
        vec![
            ("model", model.to_string()),
            ("smart_format", self.smart_format.to_string()),
        ]
    }
}
