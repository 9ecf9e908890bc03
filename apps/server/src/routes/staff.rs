//! Staff endpoints. No delete; departures are a PATCH to `active: false`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use mesa_core::{NewStaff, Staff, StaffPatch};

use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_staff).post(create_staff))
        .route("/:id", get(get_staff).patch(update_staff))
}

async fn list_staff(State(state): State<AppState>) -> Result<Json<Vec<Staff>>, ApiError> {
    let staff = state.db.staff().list().await?;
    Ok(Json(staff))
}

async fn get_staff(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Staff>, ApiError> {
    let member = state
        .db
        .staff()
        .get(&id)
        .await?
        .ok_or(ApiError::NotFound("Staff member"))?;
    Ok(Json(member))
}

async fn create_staff(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewStaff>,
) -> Result<(StatusCode, Json<Staff>), ApiError> {
    let member = state.db.staff().create(&new).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

async fn update_staff(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<StaffPatch>,
) -> Result<Json<Staff>, ApiError> {
    let member = state
        .db
        .staff()
        .update(&id, &patch)
        .await?
        .ok_or(ApiError::NotFound("Staff member"))?;
    Ok(Json(member))
}
