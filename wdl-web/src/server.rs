//! Process lifecycle: open the pool, serve until Ctrl-C, close the pool.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use storage::{MessageRepository, SqlitePoolManager};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::DashboardConfig;
use crate::logger::init_tracing;
use crate::routes::build_router;
use crate::state::AppState;

/// Opens the store and builds the router state. The returned pool manager must be closed by the caller.
pub async fn build_state(config: &DashboardConfig) -> Result<(AppState, SqlitePoolManager)> {
    let pool_manager =
        SqlitePoolManager::connect(&config.database_url, config.db_max_connections).await?;
    let repo = MessageRepository::with_pool(pool_manager.clone())
        .await?
        .with_bucket_offset(config.bucket_offset()?);

    let state = AppState::new(Arc::new(repo), config.allowed_names.clone());
    Ok((state, pool_manager))
}

/// Main entry: validate config, init logging, open the store, then serve HTTP until Ctrl-C.
pub async fn run_server(config: DashboardConfig) -> Result<()> {
    config.validate()?;
    init_tracing(Some(Path::new(&config.log_file)))?;

    let addr = config.socket_addr()?;
    info!(
        database_url = %config.database_url,
        max_connections = config.db_max_connections,
        allowed_names = config.allowed_names.len(),
        utc_offset = %config.store_utc_offset,
        "Initializing dashboard"
    );

    let (state, pool_manager) = build_state(&config).await?;
    let router = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, "Dashboard listening");

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    pool_manager.close().await;
    served.context("HTTP server failed")?;

    info!("Dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
        return;
    }
    info!("Shutdown signal received");
}
