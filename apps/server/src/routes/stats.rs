//! Dashboard report endpoints. All read-only aggregations over live data;
//! nothing here is cached or precomputed.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use mesa_core::{CategorySales, RevenuePoint, TodayStats};

use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(today_stats))
        .route("/revenue", get(revenue_series))
        .route("/categories", get(category_sales))
}

/// The dashboard header: today's totals, deltas and the low-stock list.
async fn today_stats(State(state): State<AppState>) -> Result<Json<TodayStats>, ApiError> {
    let stats = state.db.reports().today_stats().await?;
    Ok(Json(stats))
}

/// Seven daily income/expense buckets, oldest first.
async fn revenue_series(State(state): State<AppState>) -> Result<Json<Vec<RevenuePoint>>, ApiError> {
    let series = state.db.reports().revenue_series().await?;
    Ok(Json(series))
}

/// Kiosk sales totals per category, zero-sellers included.
async fn category_sales(State(state): State<AppState>) -> Result<Json<Vec<CategorySales>>, ApiError> {
    let sales = state.db.reports().category_sales().await?;
    Ok(Json(sales))
}
