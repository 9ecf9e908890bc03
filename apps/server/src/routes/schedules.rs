//! Schedule endpoints.
//!
//! Reads return [`ScheduleDetail`] so the roster screen can show names
//! without a second request.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use mesa_core::{NewSchedule, Schedule, ScheduleDetail, SchedulePatch};

use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schedules).post(create_schedule))
        .route(
            "/:id",
            get(get_schedule)
                .patch(update_schedule)
                .delete(delete_schedule),
        )
}

async fn list_schedules(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScheduleDetail>>, ApiError> {
    let schedules = state.db.schedules().list().await?;
    Ok(Json(schedules))
}

async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ScheduleDetail>, ApiError> {
    let schedule = state
        .db
        .schedules()
        .get(&id)
        .await?
        .ok_or(ApiError::NotFound("Schedule"))?;
    Ok(Json(schedule))
}

async fn create_schedule(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewSchedule>,
) -> Result<(StatusCode, Json<Schedule>), ApiError> {
    let schedule = state.db.schedules().create(&new).await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<SchedulePatch>,
) -> Result<Json<Schedule>, ApiError> {
    let schedule = state
        .db
        .schedules()
        .update(&id, &patch)
        .await?
        .ok_or(ApiError::NotFound("Schedule"))?;
    Ok(Json(schedule))
}

async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.db.schedules().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
