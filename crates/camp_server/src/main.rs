//! `camp-server` entry point.

use anyhow::Context;
use camp_server::{router, AppState, ServerConfig};
use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    config.init_logging().map_err(anyhow::Error::msg)?;

    let location = config.database_location()?;
    let conn = location
        .open()
        .with_context(|| format!("failed to open database `{location}`"))?;
    let state = AppState::new(conn)?;

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(
        "event=server_start module=server status=ok bind={} database={} version={}",
        config.bind,
        location,
        camp_core::core_version()
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server loop failed")?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("event=server_signal module=server status=error error={err}");
    }
}
