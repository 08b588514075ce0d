use async_trait::async_trait;

use crate::error::Result;
use crate::models::{AllowList, MessageRecord, UserMonthRow, UserTotalRow};

/// Read-only aggregation queries over stored messages.
///
/// Every call runs a fresh query; nothing is cached between calls.
#[async_trait]
pub trait MessageAnalytics: Send + Sync {
    /// Message count per `(name, user_id)` group.
    async fn totals_by_user(&self) -> Result<Vec<UserTotalRow>>;

    /// Every stored message, unfiltered and unpaginated.
    async fn list_all(&self) -> Result<Vec<MessageRecord>>;

    /// Message count per user and calendar month, restricted to `allowed` names,
    /// ordered by month ascending.
    async fn monthly_by_user(&self, allowed: &AllowList) -> Result<Vec<UserMonthRow>>;
}
