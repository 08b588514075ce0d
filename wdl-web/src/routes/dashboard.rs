//! Dashboard page. Static HTML that fetches the JSON endpoints and renders them with Chart.js.

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// GET /
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
