//! Derived rows produced by the aggregation queries. Recomputed per request, never persisted.

use serde::{Deserialize, Serialize};

/// Message count for one `(name, user_id)` group.
///
/// A user who changed display name shows up once per name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserTotalRow {
    pub name: String,
    pub user_id: i64,
    pub total_messages: i64,
}

/// Message count for one user in one calendar month (`YYYY-MM`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserMonthRow {
    pub user_id: i64,
    pub name: String,
    pub total_messages: i64,
    pub month: String,
}

impl UserMonthRow {
    pub fn new(
        user_id: i64,
        name: impl Into<String>,
        month: impl Into<String>,
        total_messages: i64,
    ) -> Self {
        Self {
            user_id,
            name: name.into(),
            total_messages,
            month: month.into(),
        }
    }
}
