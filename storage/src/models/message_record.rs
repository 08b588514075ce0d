//! Message record model for persistence.
//!
//! Maps to the `discord_messages` table. Records are written once at ingestion and only read afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored chat message, as returned by `GET /messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub id: i64,
    pub message_id: i64,
    pub channel_id: i64,
    pub user_id: i64,
    pub name: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub premium_type: String,
}

/// A message waiting to be ingested; the store assigns `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub message_id: i64,
    pub channel_id: i64,
    pub user_id: i64,
    pub name: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default = "default_premium_type")]
    pub premium_type: String,
}

fn default_premium_type() -> String {
    "None".to_string()
}

impl NewMessage {
    /// Creates a message with no premium tier.
    pub fn new(
        message_id: i64,
        channel_id: i64,
        user_id: i64,
        name: impl Into<String>,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            message_id,
            channel_id,
            user_id,
            name: name.into(),
            content: content.into(),
            timestamp,
            premium_type: default_premium_type(),
        }
    }

    pub fn with_premium_type(mut self, premium_type: impl Into<String>) -> Self {
        self.premium_type = premium_type.into();
        self
    }
}
