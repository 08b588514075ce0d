//! API routes
//!
//! Read-only aggregation endpoints, chart payloads, the dashboard page and a health check.

pub mod dashboard;
pub mod messages;
pub mod ops;
pub mod stats;

use axum::http::Uri;
use axum::Router;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the complete router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(ops::routes())
        .merge(dashboard::routes())
        .merge(messages::routes())
        .merge(stats::routes())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(uri.path())
}
