//! API errors and their HTTP status mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chatterbox_core::ValidationError;
use serde::{Deserialize, Serialize};
use storage::StorageError;
use thiserror::Error;

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No message with this id; also used for ids that are not integers.
    #[error("Message not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Body missing, not JSON, or of the wrong shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(id) => ApiError::NotFound(id.to_string()),
            StorageError::Validation(e) => ApiError::Validation(e),
            StorageError::Database(e) => ApiError::Internal(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error = if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Server error occurred");
            "Internal server error".to_string()
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Client error occurred");
            self.to_string()
        };

        let body = Json(ErrorResponse {
            error,
            code: status.as_u16(),
        });
        (status, body).into_response()
    }
}
