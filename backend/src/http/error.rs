//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::inference::BackendError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Inference backend failure
    Backend(BackendError),
}

impl AppError {
    /// Status code this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Backend(BackendError::Upstream { .. }) => StatusCode::BAD_GATEWAY,
            AppError::Backend(BackendError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Backend(BackendError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Backend(BackendError::Transport(_))
            | AppError::Backend(BackendError::Configuration(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            AppError::Backend(BackendError::Upstream { status, body }) => {
                ApiError::new("UPSTREAM_ERROR", "Inference endpoint returned an error")
                    .with_details(format!("status {}: {}", status, body))
            }
            AppError::Backend(e @ BackendError::Timeout(_)) => {
                ApiError::new("UPSTREAM_TIMEOUT", e.to_string())
            }
            AppError::Backend(e @ BackendError::Unavailable(_)) => {
                ApiError::new("BACKEND_UNAVAILABLE", e.to_string())
            }
            AppError::Backend(e) => ApiError::new("INTERNAL_ERROR", e.to_string()),
        };

        (status, Json(error)).into_response()
    }
}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        AppError::Backend(err)
    }
}
