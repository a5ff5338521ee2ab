// Main entry point for the Halo Gate API server

use std::sync::Arc;

use anthropic_client::AnthropicClient;
use anyhow::{Context, Result};
use server_core::kernel::ModelGateway;
use server_core::server::build_app;
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Halo Gate API - Anti-Scam Security Toolkit");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Model gateway backed by the Anthropic API (credential read once here)
    let gateway: Arc<dyn ModelGateway> = Arc::new(AnthropicClient::new(config.anthropic_api_key));

    // Build application
    let app = build_app(gateway, &config.allowed_origin)?;

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
