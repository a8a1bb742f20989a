//! promptcraft server binary
//!
//! Serves the prompt processing API, health check and collaboration relay.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use promptcraft::api::create_router;
use promptcraft::bootstrap::build_state;
use promptcraft::config::ServerConfig;
use promptcraft::version::{PKG_NAME, VERSION};

#[derive(Parser)]
#[command(name = "promptcraft-server")]
#[command(about = "Prompt enhancement and architecture diagram service", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, env = "PROMPTCRAFT_CONFIG", default_value = "config/promptcraft.toml")]
    config: PathBuf,

    /// Interface to bind, overrides the config file
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Port to listen on, overrides the config file
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap reads env-backed arguments
    let dotenv_result = dotenvy::dotenv();

    // Initialize tracing/logging
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(rust_log))
        .init();

    if let Err(e) = dotenv_result {
        if !e.not_found() {
            tracing::warn!("Failed to load .env file: {}", e);
        }
    }

    let cli = Cli::parse();

    tracing::info!("Loading server configuration from {}", cli.config.display());
    let config = ServerConfig::load_from(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?
        .with_listen_overrides(cli.host, cli.port);
    config.validate()?;

    tracing::info!("Gemini model: {}", config.gemini.model);
    tracing::info!("Diagram policy: {:?}", config.diagram.policy);

    let app = create_router(build_state(&config));

    let addr = config.listen_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    tracing::info!("Starting {} {} on http://{}", PKG_NAME, VERSION, addr);

    // Run server with graceful shutdown
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Signal for graceful shutdown (Ctrl-C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install CTRL-C signal handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL-C signal, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down");
        }
    }
}
