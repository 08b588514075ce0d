//! Message repository: ingestion and aggregation queries over `discord_messages`.
//!
//! Uses SqlitePoolManager and the row models. Callers use save/save_batch to ingest and the
//! [`MessageAnalytics`] methods to read aggregates.

use async_trait::async_trait;
use chrono::{FixedOffset, Offset, Utc};
use sqlx::SqliteConnection;
use tracing::info;

use crate::error::Result;
use crate::models::{AllowList, MessageRecord, NewMessage, UserMonthRow, UserTotalRow};
use crate::repository::MessageAnalytics;
use crate::sqlite_pool::{SqlitePoolManager, DEFAULT_MAX_CONNECTIONS};

/// Stored timestamp layout (UTC). Lexicographic order matches chronological order.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const CREATE_INDEXES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS idx_discord_messages_name ON discord_messages(name)",
    "CREATE INDEX IF NOT EXISTS idx_discord_messages_user_id ON discord_messages(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_discord_messages_timestamp ON discord_messages(timestamp)",
];

#[derive(Clone)]
pub struct MessageRepository {
    pool_manager: SqlitePoolManager,
    /// Reference zone for month buckets.
    bucket_offset: FixedOffset,
}

impl MessageRepository {
    /// Connects with default pool settings and creates the schema.
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool_manager = SqlitePoolManager::connect(database_url, DEFAULT_MAX_CONNECTIONS).await?;
        Self::with_pool(pool_manager).await
    }

    /// Wraps an existing pool and creates the schema. Month buckets default to UTC.
    pub async fn with_pool(pool_manager: SqlitePoolManager) -> Result<Self> {
        let repo = Self {
            pool_manager,
            bucket_offset: Utc.fix(),
        };
        repo.init().await?;
        Ok(repo)
    }

    /// Buckets months in the given fixed zone instead of UTC.
    pub fn with_bucket_offset(mut self, offset: FixedOffset) -> Self {
        self.bucket_offset = offset;
        self
    }

    pub fn pool_manager(&self) -> &SqlitePoolManager {
        &self.pool_manager
    }

    async fn init(&self) -> Result<()> {
        info!("Creating discord_messages table if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS discord_messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                message_id INTEGER NOT NULL,
                channel_id INTEGER NOT NULL,
                user_id INTEGER NOT NULL,
                name TEXT NOT NULL,
                content TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                premium_type TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        for statement in CREATE_INDEXES {
            sqlx::query(statement).execute(pool).await?;
        }

        info!("discord_messages table ready");
        Ok(())
    }

    /// Inserts one message and returns its assigned id.
    pub async fn save(&self, message: &NewMessage) -> Result<i64> {
        let mut conn = self.pool_manager.pool().acquire().await?;
        let id = insert_message(&mut conn, message).await?;

        info!(id, message_id = message.message_id, name = %message.name, "Saved message");
        Ok(id)
    }

    /// Inserts all messages in one transaction; either every row lands or none does.
    pub async fn save_batch(&self, messages: &[NewMessage]) -> Result<u64> {
        let mut tx = self.pool_manager.pool().begin().await?;
        for message in messages {
            insert_message(&mut tx, message).await?;
        }
        tx.commit().await?;

        info!(count = messages.len(), "Saved message batch");
        Ok(messages.len() as u64)
    }

    /// SQLite date modifier shifting UTC timestamps into the bucket zone, e.g. `+120 minutes`.
    pub(crate) fn bucket_modifier(&self) -> String {
        format!("{:+} minutes", self.bucket_offset.local_minus_utc() / 60)
    }
}

async fn insert_message(conn: &mut SqliteConnection, message: &NewMessage) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO discord_messages (message_id, channel_id, user_id, name, content, timestamp, premium_type)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(message.message_id)
    .bind(message.channel_id)
    .bind(message.user_id)
    .bind(&message.name)
    .bind(&message.content)
    .bind(message.timestamp.format(TIMESTAMP_FORMAT).to_string())
    .bind(&message.premium_type)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

#[async_trait]
impl MessageAnalytics for MessageRepository {
    async fn totals_by_user(&self) -> Result<Vec<UserTotalRow>> {
        let pool = self.pool_manager.pool();

        let rows = sqlx::query_as::<_, UserTotalRow>(
            r#"
            SELECT name, user_id, COUNT(message_id) AS total_messages
            FROM discord_messages
            GROUP BY name, user_id
            ORDER BY name, user_id
            "#,
        )
        .fetch_all(pool)
        .await?;

        info!(rows = rows.len(), "Computed totals by user");
        Ok(rows)
    }

    async fn list_all(&self) -> Result<Vec<MessageRecord>> {
        let pool = self.pool_manager.pool();

        let messages = sqlx::query_as::<_, MessageRecord>(
            r#"
            SELECT id, message_id, channel_id, user_id, name, content, timestamp, premium_type
            FROM discord_messages
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        info!(rows = messages.len(), "Retrieved all messages");
        Ok(messages)
    }

    async fn monthly_by_user(&self, allowed: &AllowList) -> Result<Vec<UserMonthRow>> {
        if allowed.is_empty() {
            info!("Allow-list is empty, skipping monthly query");
            return Ok(Vec::new());
        }

        let pool = self.pool_manager.pool();
        let placeholders = vec!["?"; allowed.len()].join(", ");
        let sql = format!(
            r#"
            SELECT user_id, name, COUNT(message_id) AS total_messages,
                   strftime('%Y-%m', timestamp, ?) AS month
            FROM discord_messages
            WHERE name COLLATE NOCASE IN ({placeholders})
            GROUP BY user_id, name, month
            ORDER BY month, user_id, name
            "#
        );

        let mut query = sqlx::query_as::<_, UserMonthRow>(&sql).bind(self.bucket_modifier());
        for name in allowed.iter() {
            query = query.bind(name);
        }

        let rows = query.fetch_all(pool).await?;

        info!(
            rows = rows.len(),
            allowed = allowed.len(),
            offset = %self.bucket_offset,
            "Computed monthly totals by user"
        );
        Ok(rows)
    }
}
