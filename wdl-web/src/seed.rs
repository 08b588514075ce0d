//! Load messages from a JSON file into the store.
//!
//! The file holds a JSON array of messages in the `/messages` shape without `id`.

use std::path::Path;

use anyhow::{Context, Result};
use storage::{MessageRepository, NewMessage, SqlitePoolManager};
use tracing::info;

use crate::config::DashboardConfig;

pub fn read_seed_file(path: &Path) -> Result<Vec<NewMessage>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let messages: Vec<NewMessage> = serde_json::from_str(&raw)
        .with_context(|| format!("Seed file {} is not a JSON array of messages", path.display()))?;
    Ok(messages)
}

/// Inserts every message from `path` in one transaction. Returns the number inserted.
pub async fn seed_from_file(config: &DashboardConfig, path: &Path) -> Result<u64> {
    let messages = read_seed_file(path)?;
    info!(count = messages.len(), file = %path.display(), "Seeding messages");

    let pool_manager =
        SqlitePoolManager::connect(&config.database_url, config.db_max_connections).await?;
    let repo = MessageRepository::with_pool(pool_manager.clone()).await?;
    let inserted = repo.save_batch(&messages).await;
    pool_manager.close().await;

    Ok(inserted?)
}
