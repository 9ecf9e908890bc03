//! # API Error Handling
//!
//! Every handler returns `Result<_, ApiError>`; the [`IntoResponse`] impl
//! is the single place HTTP status codes and error bodies are decided.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Error → Response                                 │
//! │                                                                         │
//! │  Malformed / invalid body ──► 400 {"error": "Invalid data",            │
//! │   (serde or validator)              "details": ["field: message", …]}  │
//! │                                                                         │
//! │  Unknown id ──────────────► 404 {"error": "<Entity> not found"}        │
//! │                                                                         │
//! │  DbError ─────────────────► 500 {"error": "Database operation failed"} │
//! │   (full detail to tracing::error!, never to the client)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use validator::ValidationErrors;

use mesa_db::DbError;

/// Errors a handler can surface to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A request body failed field validation.
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    /// A request body could not be deserialized at all.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// The addressed entity does not exist. Carries the entity noun used
    /// in the response message ("Category", "Order", ...).
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The storage layer failed.
    #[error(transparent)]
    Db(#[from] DbError),
}

/// JSON error body. `details` is only present on validation failures.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Invalid data".to_string(),
                    details: Some(validation_details(&errors)),
                },
            ),
            ApiError::MalformedBody(detail) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Invalid data".to_string(),
                    details: Some(vec![detail]),
                },
            ),
            ApiError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: format!("{entity} not found"),
                    details: None,
                },
            ),
            ApiError::Db(err) => {
                tracing::error!(error = %err, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Database operation failed".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Flattens validator output into sorted `"field: message"` strings.
fn validation_details(errors: &ValidationErrors) -> Vec<String> {
    let mut details: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            let field = field.clone();
            errors.iter().map(move |error| {
                format!(
                    "{}: {}",
                    field,
                    error.message.as_ref().unwrap_or(&"Invalid value".into())
                )
            })
        })
        .collect();

    // Field order out of the validator is a HashMap's; pin it down.
    details.sort();
    details
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mesa_core::types::{NewSchedule, NewStaff};
    use validator::Validate;

    #[test]
    fn test_details_are_sorted_field_message_pairs() {
        let staff = NewStaff {
            name: String::new(),
            email: None,
            phone: None,
            position: String::new(),
            active: None,
        };
        let errors = staff.validate().unwrap_err();

        let details = validation_details(&errors);
        assert_eq!(details.len(), 2);
        assert!(details[0].starts_with("name: "));
        assert!(details[1].starts_with("position: "));
    }

    #[test]
    fn test_custom_validator_message_survives_flattening() {
        let schedule = NewSchedule {
            staff_id: "s1".to_string(),
            day_of_week: 1,
            start_time: "8am".to_string(),
            end_time: "16:00".to_string(),
            active: None,
        };
        let errors = schedule.validate().unwrap_err();

        let details = validation_details(&errors);
        assert_eq!(details.len(), 1);
        assert!(details[0].ends_with("must be a time in HH:MM format"));
    }
}
