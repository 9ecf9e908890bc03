//! Product endpoints.
//!
//! Reads return [`ProductDetail`] (product + category + inventory); writes
//! return the bare [`Product`]. Creating a product also creates its
//! zero-quantity inventory row; deleting removes both.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use mesa_core::{NewProduct, Product, ProductDetail, ProductPatch};

use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductDetail>>, ApiError> {
    let products = state.db.products().list().await?;
    Ok(Json(products))
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductDetail>, ApiError> {
    let product = state
        .db
        .products()
        .get(&id)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;
    Ok(Json(product))
}

async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewProduct>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = state.db.products().create(&new).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<ProductPatch>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .db
        .products()
        .update(&id, &patch)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;
    Ok(Json(product))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.db.products().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
