//! SQLite connection pool wrapper for the storage crate.

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions};
use sqlx::{ConnectOptions, Connection};
use tracing::{info, warn};

use crate::error::{Result, StorageError};

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Owns the SQLite pool; creates the database file if missing.
///
/// Built once at process start and closed explicitly at shutdown. Clones share the same pool.
///
/// An in-memory database lives only while some connection to it is open, so for
/// `sqlite::memory:` an extra connection outside the pool is held until [`close`](Self::close).
/// Pool connections can then be reaped or dropped without losing the schema.
#[derive(Clone)]
pub struct SqlitePoolManager {
    pool: SqlitePool,
    keepalive: Arc<Mutex<Option<SqliteConnection>>>,
}

impl SqlitePoolManager {
    /// Creates a pool for the given sqlx URL (`sqlite://file.db`, `sqlite::memory:`).
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        if max_connections == 0 {
            return Err(StorageError::InvalidConfig(
                "max_connections must be at least 1".to_string(),
            ));
        }

        info!(database_url, max_connections, "Initializing SQLite pool");

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(StorageError::Connection)?
            .create_if_missing(true);

        let keepalive = if is_in_memory_url(database_url) {
            let conn = options.connect().await.map_err(StorageError::Connection)?;
            info!("Holding keep-alive connection for in-memory database");
            Some(conn)
        } else {
            None
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(StorageError::Connection)?;

        Ok(Self {
            pool,
            keepalive: Arc::new(Mutex::new(keepalive)),
        })
    }

    /// Returns the underlying pool for running queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Waits for checked-out connections to return, then closes the pool.
    ///
    /// Also releases the in-memory keep-alive connection, which discards that database.
    pub async fn close(&self) {
        self.pool.close().await;

        let keepalive = self.keepalive.lock().ok().and_then(|mut guard| guard.take());
        if let Some(conn) = keepalive {
            if let Err(e) = conn.close().await {
                warn!(error = %e, "Failed to close keep-alive connection");
            }
        }

        info!("SQLite pool closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

/// True for sqlx URLs naming an in-memory database (`sqlite::memory:`, `?mode=memory`).
pub(crate) fn is_in_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
