//! Attendance endpoints. Records are append-only from the API's point of
//! view: create and read, no edits.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use mesa_core::{Attendance, AttendanceDetail, NewAttendance};

use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_attendance).post(create_attendance))
        .route("/:id", get(get_attendance))
}

async fn list_attendance(
    State(state): State<AppState>,
) -> Result<Json<Vec<AttendanceDetail>>, ApiError> {
    let records = state.db.attendance().list().await?;
    Ok(Json(records))
}

async fn get_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Attendance>, ApiError> {
    let record = state
        .db
        .attendance()
        .get(&id)
        .await?
        .ok_or(ApiError::NotFound("Attendance record"))?;
    Ok(Json(record))
}

async fn create_attendance(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewAttendance>,
) -> Result<(StatusCode, Json<Attendance>), ApiError> {
    let record = state.db.attendance().create(&new).await?;
    Ok((StatusCode::CREATED, Json(record)))
}
