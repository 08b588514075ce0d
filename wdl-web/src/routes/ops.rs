//! Health check. No store access.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
