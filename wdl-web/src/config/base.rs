//! Dashboard config loaded from env.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use chrono::FixedOffset;
use storage::{AllowList, DEFAULT_MAX_CONNECTIONS};

/// Names charted in the monthly breakdown when MONTHLY_ALLOWED_NAMES is unset.
pub const DEFAULT_ALLOWED_NAMES: &[&str] = &[
    "theycallmeq",
    "jbuwu",
    "snozledozle",
    "thefyreprophecy",
    "joppertje",
    "lykozen",
    "coeus._",
    "coeus7680",
];

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// DATABASE_URL (sqlx SQLite URL)
    pub database_url: String,
    /// DB_MAX_CONNECTIONS
    pub db_max_connections: u32,
    /// BIND_ADDR
    pub bind_addr: String,
    /// LOG_FILE
    pub log_file: String,
    /// MONTHLY_ALLOWED_NAMES, comma-separated
    pub allowed_names: AllowList,
    /// STORE_UTC_OFFSET, `±HH:MM`; month buckets are computed in this zone
    pub store_utc_offset: String,
}

impl DashboardConfig {
    /// Load from environment variables. Call validate() before use.
    pub fn load() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://wdl.db".to_string());
        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/wdl-dashboard.log".to_string());
        let allowed_names = env::var("MONTHLY_ALLOWED_NAMES")
            .map(|list| AllowList::parse(&list))
            .unwrap_or_else(|_| DEFAULT_ALLOWED_NAMES.iter().copied().collect());
        let store_utc_offset =
            env::var("STORE_UTC_OFFSET").unwrap_or_else(|_| "+00:00".to_string());

        Ok(Self {
            database_url,
            db_max_connections,
            bind_addr,
            log_file,
            allowed_names,
            store_utc_offset,
        })
    }

    /// Applies CLI overrides on top of the env values.
    pub fn with_overrides(mut self, bind: Option<String>, database_url: Option<String>) -> Self {
        if let Some(bind) = bind {
            self.bind_addr = bind;
        }
        if let Some(url) = database_url {
            self.database_url = url;
        }
        self
    }

    /// Fail fast on values that would only break later at startup.
    pub fn validate(&self) -> Result<()> {
        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        self.socket_addr()?;
        self.bucket_offset()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a valid socket address: {}", self.bind_addr))
    }

    pub fn bucket_offset(&self) -> Result<FixedOffset> {
        self.store_utc_offset.trim().parse().map_err(|e| {
            anyhow::anyhow!(
                "STORE_UTC_OFFSET must look like +HH:MM, got {}: {}",
                self.store_utc_offset,
                e
            )
        })
    }
}
