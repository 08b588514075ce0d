//! Aggregate statistics routes
//!
//! - Totals per user (rows and bar chart)
//! - Messages per user per month (rows, pivoted series and stacked chart)

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use charts::{pivot, totals_chart, ChartData, SeriesSet, TotalsChart};
use storage::{UserMonthRow, UserTotalRow};

use crate::error::Result;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/totals-by-user", get(get_totals_by_user))
        .route("/totals-by-user/chart", get(get_totals_chart))
        .route("/messages-per-month", get(get_messages_per_month))
        .route("/messages-per-month/series", get(get_monthly_series))
        .route("/messages-per-month/chart", get(get_monthly_chart))
}

// ============================================================================
// Totals
// ============================================================================

/// GET /totals-by-user
async fn get_totals_by_user(State(state): State<AppState>) -> Result<Json<Vec<UserTotalRow>>> {
    let rows = state.analytics.totals_by_user().await?;
    Ok(Json(rows))
}

/// GET /totals-by-user/chart - labels/values plus the Chart.js payload
async fn get_totals_chart(State(state): State<AppState>) -> Result<Json<TotalsChartResponse>> {
    let rows = state.analytics.totals_by_user().await?;
    let totals = totals_chart(&rows);
    let chart = totals.to_bar_chart();
    Ok(Json(TotalsChartResponse { totals, chart }))
}

#[derive(Debug, serde::Serialize)]
pub struct TotalsChartResponse {
    #[serde(flatten)]
    pub totals: TotalsChart,
    pub chart: ChartData,
}

// ============================================================================
// Monthly
// ============================================================================

/// GET /messages-per-month - long-format rows, ordered by month
async fn get_messages_per_month(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserMonthRow>>> {
    let rows = state.analytics.monthly_by_user(&state.allowed_names).await?;
    Ok(Json(rows))
}

/// GET /messages-per-month/series - rows pivoted into month-aligned series
async fn get_monthly_series(State(state): State<AppState>) -> Result<Json<SeriesSet>> {
    let rows = state.analytics.monthly_by_user(&state.allowed_names).await?;
    Ok(Json(pivot(&rows)))
}

/// GET /messages-per-month/chart - stacked bar payload
async fn get_monthly_chart(State(state): State<AppState>) -> Result<Json<ChartData>> {
    let rows = state.analytics.monthly_by_user(&state.allowed_names).await?;
    Ok(Json(pivot(&rows).to_stacked_chart()))
}
