//! Raw message listing.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use storage::MessageRecord;

use crate::error::Result;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/messages", get(list_messages))
}

/// GET /messages - every stored message, unpaginated
async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<MessageRecord>>> {
    let messages = state.analytics.list_all().await?;
    Ok(Json(messages))
}
