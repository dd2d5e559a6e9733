//! API Key Service - Main Application Entry Point
//!
//! REST API server for issuing and managing API keys. Provides endpoints for
//! creating, listing, rotating, revoking, and verifying keys, plus an
//! embedded HTML dashboard on every non-API path.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create the in-memory key store and seed demo keys if empty
//! 3. Build the HTTP router with routes and middleware
//! 4. Start the server on the configured port
//!
//! All key state is process-local; restarting the server discards it.

use api_key_service::{app, config::Config, store};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(environment = %config.environment, "Configuration loaded");

    // Create the key store and seed demo records on first boot
    let store = store::new_shared();
    {
        let mut keys = store.write();
        keys.seed_demo_keys();
        tracing::info!("Key store ready with {} keys", keys.len());
    }

    // Build HTTP router
    let app = app(store);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
