//! Financial ledger endpoints.
//!
//! POST records manual entries (expenses, other income). Sales entries
//! are written by kiosk checkout, never through here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use mesa_core::{NewTransaction, Transaction};

use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_transactions).post(create_transaction))
        .route("/:id", get(get_transaction))
}

async fn list_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let transactions = state.db.transactions().list().await?;
    Ok(Json(transactions))
}

async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, ApiError> {
    let transaction = state
        .db
        .transactions()
        .get(&id)
        .await?
        .ok_or(ApiError::NotFound("Transaction"))?;
    Ok(Json(transaction))
}

async fn create_transaction(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewTransaction>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let transaction = state.db.transactions().create(&new).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}
