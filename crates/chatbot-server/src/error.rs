//! API error types with JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use chatbot_intent::ChatError;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error (500).
    #[error("Internal server error")]
    Internal { detail: Option<String> },

    /// Index rebuild failed (500).
    #[error("Failed to initialize chatbot")]
    InitializationFailed { detail: Option<String> },
}

impl ApiError {
    /// Internal error, keeping `detail` only when `expose` is set.
    pub fn internal(detail: impl ToString, expose: bool) -> Self {
        Self::Internal {
            detail: expose.then(|| detail.to_string()),
        }
    }

    /// Initialization failure, keeping the cause only when `expose` is set.
    pub fn initialization_failed(cause: &ChatError, expose: bool) -> Self {
        Self::InitializationFailed {
            detail: expose.then(|| cause.to_string()),
        }
    }

    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Internal { .. } => "INTERNAL_ERROR",
            Self::InitializationFailed { .. } => "INITIALIZATION_FAILED",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } | Self::InitializationFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn detail(&self) -> Option<&str> {
        match self {
            Self::BadRequest(_) => None,
            Self::Internal { detail } | Self::InitializationFailed { detail } => detail.as_deref(),
        }
    }
}

/// JSON error response body: `{ "success": false, "message": ..., "error"?: ... }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always false.
    pub success: bool,
    /// Human-readable error message.
    pub message: String,
    /// Error details, only in development.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.code(), detail = ?self.detail(), "{}", self);
        }

        let body = ErrorResponse {
            success: false,
            message: self.to_string(),
            error: self.detail().map(str::to_string),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
