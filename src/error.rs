//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::classifier::ClassifierError;

pub type AppResult<T> = Result<T, AppError>;

/// Request-level errors.
///
/// Startup failures (missing dataset, corrupt model artifact) never
/// reach this type; they abort the process before serving begins.
/// An unknown player name is not an error either — it is answered
/// with a well-formed sentinel response and status 200.
#[derive(Debug)]
pub enum AppError {
    // Malformed numeric input that survived deserialization
    InvalidFeatureVector(String),

    // Generic errors
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::InvalidFeatureVector(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<ClassifierError> for AppError {
    fn from(err: ClassifierError) -> Self {
        match err {
            ClassifierError::InvalidFeatureVector(msg) => AppError::InvalidFeatureVector(msg),
            other => AppError::InternalError(other.to_string()),
        }
    }
}
