//! Shared state for API handlers.

use std::sync::Arc;

use storage::{AllowList, MessageAnalytics};

/// Cloned into every handler. Holds no mutable data; each request runs its own queries.
#[derive(Clone)]
pub struct AppState {
    /// Aggregation queries (the SQLite repository in production)
    pub analytics: Arc<dyn MessageAnalytics>,
    /// Names included in the monthly breakdown
    pub allowed_names: Arc<AllowList>,
}

impl AppState {
    pub fn new(analytics: Arc<dyn MessageAnalytics>, allowed_names: AllowList) -> Self {
        Self {
            analytics,
            allowed_names: Arc::new(allowed_names),
        }
    }
}
