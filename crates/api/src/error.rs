use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use music_library_core::error::CoreError;
use music_library_core::track::TrackValidationError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `music_library_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<TrackValidationError> for AppError {
    fn from(err: TrackValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    json!({
                        "error": format!("{entity} with id {id} not found"),
                        "code": "NOT_FOUND",
                    }),
                ),
                CoreError::Validation(err) => (StatusCode::BAD_REQUEST, validation_body(err)),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },

            // --- Storage errors: cause is logged, never exposed ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal_error()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "BAD_REQUEST" }),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Build the 400 body for a rejected track payload.
///
/// Missing fields are listed under `missingFields`, wrongly-typed ones under
/// `invalidFields`, so clients can tell the two apart.
fn validation_body(err: &TrackValidationError) -> serde_json::Value {
    match err {
        TrackValidationError::MissingFields(fields) => json!({
            "error": "Missing required fields",
            "code": "VALIDATION_ERROR",
            "missingFields": fields,
        }),
        TrackValidationError::InvalidTypes(_) => json!({
            "error": err.to_string(),
            "code": "VALIDATION_ERROR",
            "invalidFields": err.field_names(),
        }),
        TrackValidationError::NotAnObject => json!({
            "error": err.to_string(),
            "code": "VALIDATION_ERROR",
        }),
    }
}

fn internal_error() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": INTERNAL_MESSAGE, "code": "INTERNAL_ERROR" }),
    )
}
