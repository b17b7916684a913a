use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use tokio::net::TcpListener;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

use anyhow::anyhow;

use transcribe_gateway::{
    ServerConfig,
    routes::{self, layers},
    state::AppState,
};

/// Session-authenticated transcription gateway
#[derive(Parser, Debug)]
#[command(name = "transcribe-gateway")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Must run before any TLS connection is attempted
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow!("Failed to install default crypto provider"))?;

    let cli = Cli::parse();

    // Load configuration from file or environment
    let config = if let Some(config_path) = cli.config {
        info!(path = %config_path.display(), "Loading configuration");
        ServerConfig::from_file(&config_path).map_err(|e| anyhow!(e.to_string()))?
    } else {
        ServerConfig::from_env().map_err(|e| anyhow!(e.to_string()))?
    };

    let address = config.address();
    let tls_config = config.tls.clone();
    let rate_limit_rps = config.rate_limit_requests_per_second;
    let rate_limit_burst = config.rate_limit_burst_size;
    let cors_origins = config.cors_allowed_origins.clone();

    let app_state = AppState::new(config)
        .map_err(|e| anyhow!("Failed to initialize transcription provider: {e}"))?;

    // Disabled when rate >= 100000 for load testing
    let governor_layer = if rate_limit_rps < 100_000 {
        let governor_config = GovernorConfigBuilder::default()
            .per_second(u64::from(rate_limit_rps))
            .burst_size(rate_limit_burst)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| anyhow!("Failed to build rate limiter config"))?;
        Some(GovernorLayer::new(governor_config))
    } else {
        warn!("Rate limiting disabled (rate >= 100000/s)");
        None
    };

    let app = routes::build_router(app_state)
        .layer(layers::cors_layer(cors_origins.as_deref()))
        .layer(tower::util::option_layer(governor_layer))
        .layer(layers::security_headers());

    let socket_addr: SocketAddr = address
        .parse()
        .map_err(|e| anyhow!("Invalid server address '{}': {}", address, e))?;

    if let Some(tls) = tls_config {
        let rustls_config = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
            .await
            .map_err(|e| {
                anyhow!(
                    "Failed to load TLS certificates from {} and {}: {}",
                    tls.cert_path.display(),
                    tls.key_path.display(),
                    e
                )
            })?;

        info!("Server listening on https://{} (TLS enabled)", socket_addr);

        axum_server::bind_rustls(socket_addr, rustls_config)
            .serve(app.into_make_service_with_connect_info::<SocketAddr>())
            .await
            .map_err(|e| anyhow!("TLS server error: {}", e))?;
    } else {
        info!("Server listening on http://{}", socket_addr);

        let listener = TcpListener::bind(&socket_addr).await?;
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await?;
    }

    Ok(())
}
