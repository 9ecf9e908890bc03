//! Category endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use mesa_core::{Category, CategoryPatch, NewCategory};

use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category)
                .patch(update_category)
                .delete(delete_category),
        )
}

async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.db.categories().list().await?;
    Ok(Json(categories))
}

async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>, ApiError> {
    let category = state
        .db
        .categories()
        .get(&id)
        .await?
        .ok_or(ApiError::NotFound("Category"))?;
    Ok(Json(category))
}

async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewCategory>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let category = state.db.categories().create(&new).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<CategoryPatch>,
) -> Result<Json<Category>, ApiError> {
    let category = state
        .db
        .categories()
        .update(&id, &patch)
        .await?
        .ok_or(ApiError::NotFound("Category"))?;
    Ok(Json(category))
}

async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.db.categories().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
