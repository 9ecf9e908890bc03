//! Customer endpoints. No delete; the admin panel never removes customers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use mesa_core::{Customer, CustomerPatch, NewCustomer};

use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/:id", get(get_customer).patch(update_customer))
}

async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = state.db.customers().list().await?;
    Ok(Json(customers))
}

async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state
        .db
        .customers()
        .get(&id)
        .await?
        .ok_or(ApiError::NotFound("Customer"))?;
    Ok(Json(customer))
}

async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewCustomer>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let customer = state.db.customers().create(&new).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<CustomerPatch>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state
        .db
        .customers()
        .update(&id, &patch)
        .await?
        .ok_or(ApiError::NotFound("Customer"))?;
    Ok(Json(customer))
}
