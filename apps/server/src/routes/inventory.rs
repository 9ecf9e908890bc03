//! Inventory endpoints.
//!
//! No POST here: rows are born with their product. The only write is the
//! absolute quantity overwrite used after a stock count.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use mesa_core::{Inventory, InventoryDetail, QuantityUpdate};

use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventory))
        .route("/:id", get(get_inventory).patch(update_quantity))
}

async fn list_inventory(
    State(state): State<AppState>,
) -> Result<Json<Vec<InventoryDetail>>, ApiError> {
    let inventory = state.db.inventory().list().await?;
    Ok(Json(inventory))
}

async fn get_inventory(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InventoryDetail>, ApiError> {
    let item = state
        .db
        .inventory()
        .get(&id)
        .await?
        .ok_or(ApiError::NotFound("Inventory item"))?;
    Ok(Json(item))
}

async fn update_quantity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(update): ValidatedJson<QuantityUpdate>,
) -> Result<Json<Inventory>, ApiError> {
    let item = state
        .db
        .inventory()
        .set_quantity(&id, update.quantity)
        .await?
        .ok_or(ApiError::NotFound("Inventory item"))?;
    Ok(Json(item))
}
