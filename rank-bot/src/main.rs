//! Valorank Web Server - Discord interactions endpoint.
//!
//! This binary provides a small web server that:
//! - Verifies Ed25519 signatures on interaction callbacks
//! - Answers pings and the `/rank` slash command
//! - Re-registers the command schema on PATCH

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use valorank::util::build_http_client;
use valorank::{router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("web_server_starting");

    // Load configuration; secrets are validated per request
    let config = Config::from_env();
    info!(
        port = config.port,
        discord_token_set = config.discord_token.is_some(),
        application_id_set = config.application_id.is_some(),
        public_key_set = config.public_key.is_some(),
        discord_api_base = %config.discord_api_base,
        rank_api_url = %config.rank_api_url,
        "config_loaded"
    );

    let http = build_http_client().context("Failed to build HTTP client")?;
    let port = config.port;
    let app = router(AppState::new(config, http));

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "web_server_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("web_server_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("web_server_shutting_down");
}
