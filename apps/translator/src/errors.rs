use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl AppError {
    /// Status, machine-readable code and the message safe to show a user.
    pub fn describe(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "LLM_ERROR",
                "The translation service failed to respond. Please try again.".to_string(),
            ),
            AppError::Template(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal server error occurred".to_string(),
            ),
        }
    }

    /// Logs server-side failures. Validation errors are the caller's problem.
    pub fn log(&self) {
        match self {
            AppError::Validation(msg) => tracing::debug!("Rejected request: {msg}"),
            AppError::Llm(msg) => tracing::error!("LLM error: {msg}"),
            AppError::Template(e) => tracing::error!("Template error: {e:?}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let (status, code, message) = self.describe();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
