//! Test doubles for [`storage::MessageAnalytics`].
//!
//! - `FailingAnalytics` fails every query, for the 500 path.
//! - `CountingAnalytics` returns fixed rows and counts calls, to check that every request queries again.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use storage::{
    AllowList, MessageAnalytics, MessageRecord, Result, StorageError, UserMonthRow, UserTotalRow,
};

#[derive(Debug, Default, Clone)]
pub struct FailingAnalytics;

fn failure() -> StorageError {
    StorageError::Query(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl MessageAnalytics for FailingAnalytics {
    async fn totals_by_user(&self) -> Result<Vec<UserTotalRow>> {
        Err(failure())
    }

    async fn list_all(&self) -> Result<Vec<MessageRecord>> {
        Err(failure())
    }

    async fn monthly_by_user(&self, _allowed: &AllowList) -> Result<Vec<UserMonthRow>> {
        Err(failure())
    }
}

#[derive(Debug, Default, Clone)]
pub struct CountingAnalytics {
    pub monthly_rows: Vec<UserMonthRow>,
    calls: Arc<AtomicUsize>,
}

impl CountingAnalytics {
    pub fn new(monthly_rows: Vec<UserMonthRow>) -> Self {
        Self {
            monthly_rows,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageAnalytics for CountingAnalytics {
    async fn totals_by_user(&self) -> Result<Vec<UserTotalRow>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn list_all(&self) -> Result<Vec<MessageRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn monthly_by_user(&self, allowed: &AllowList) -> Result<Vec<UserMonthRow>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .monthly_rows
            .iter()
            .filter(|row| allowed.contains(&row.name))
            .cloned()
            .collect())
    }
}
