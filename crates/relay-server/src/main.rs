//! stock-relay server binary
//!
//! # Usage
//!
//! ```bash
//! export TWELVE_DATA_KEY="..."
//! export OPENAI_API_KEY="sk-..."
//!
//! cargo run --bin stock-relay -- --port 8000 --language zh
//! ```

use anyhow::Context;
use clap::Parser;
use relay_server::{AppState, Args, RelayConfig, app};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();
    relay_utils::init_tracing();

    let config = RelayConfig::from_args(Args::parse())?;
    let state = AppState::from_config(&config)?;

    info!(
        addr = %config.listen_addr,
        language = %config.language,
        model = %config.model,
        "stock-relay listening"
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("stock-relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
