//! # Order Endpoints
//!
//! Orders enter the system through exactly one door:
//!
//! ```text
//! POST /api/orders/kiosk ──► place_kiosk_order (one transaction)
//!                              ├── order + items
//!                              ├── income ledger entry
//!                              └── mock DIAN invoice
//! ```
//!
//! There is no generic `POST /api/orders`. After that, the admin panel
//! reads summaries, reads single orders in full, and moves the kitchen
//! status; it never edits an order's contents.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};

use mesa_core::{KioskCheckout, Order, OrderDetail, OrderSummary, StatusUpdate};

use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders))
        .route("/kiosk", post(place_kiosk_order))
        .route("/:id", get(get_order))
        .route("/:id/status", patch(update_order_status))
}

async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<OrderSummary>>, ApiError> {
    let orders = state.db.orders().list().await?;
    Ok(Json(orders))
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderDetail>, ApiError> {
    let order = state
        .db
        .orders()
        .get(&id)
        .await?
        .ok_or(ApiError::NotFound("Order"))?;
    Ok(Json(order))
}

async fn place_kiosk_order(
    State(state): State<AppState>,
    ValidatedJson(checkout): ValidatedJson<KioskCheckout>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order = state.db.place_kiosk_order(&checkout).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(update): ValidatedJson<StatusUpdate>,
) -> Result<Json<Order>, ApiError> {
    let order = state
        .db
        .orders()
        .update_status(&id, update.status)
        .await?
        .ok_or(ApiError::NotFound("Order"))?;
    Ok(Json(order))
}
