use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::form::ValidationError;
use crate::recommend::client::RequestFailed;

/// How long views keep a transient inline error on screen.
pub const ERROR_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resume extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Recommendation service error: {0}")]
    RequestFailed(#[from] RequestFailed),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Extraction(e) => {
                tracing::warn!("Extraction error: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_ERROR",
                    e.to_string(),
                )
            }
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()),
            AppError::RequestFailed(e) => {
                tracing::error!("Recommendation service error: {e}");
                (StatusCode::BAD_GATEWAY, "REQUEST_FAILED", e.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        // Extraction and remote failures are shown inline and fade; validation
        // failures block until the user fixes the form.
        if matches!(self, AppError::Extraction(_) | AppError::RequestFailed(_)) {
            error["dismiss_after_secs"] = json!(ERROR_DISMISS_AFTER.as_secs());
        }
        let body = Json(json!({ "error": error }));

        (status, body).into_response()
    }
}
