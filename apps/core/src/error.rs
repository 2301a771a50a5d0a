use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Service-wide error type for everything outside the classification core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or missing configuration (e.g., a malformed rate limit).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request body could not be read as `{"data": [...]}`.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),

    /// The caller exceeded the configured request ceiling.
    #[error("Rate limit exceeded")]
    RateLimited(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label used as the `error` field of the JSON envelope.
    fn label(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Configuration error",
            AppError::Validation(_) => "Validation error",
            AppError::Internal(_) => "Internal server error",
            AppError::RateLimited(_) => "Rate limit exceeded",
        }
    }

    fn details(&self) -> &str {
        match self {
            AppError::Config(s)
            | AppError::Validation(s)
            | AppError::Internal(s)
            | AppError::RateLimited(s) => s,
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::Validation(err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = json!({
            "is_success": false,
            "error": self.label(),
            "details": self.details(),
        });
        (self.status_code(), Json(body)).into_response()
    }
}
