// crates/server/src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use octolens_github::{CompareError, GithubError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Structured JSON error response for API errors
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Upstream fetch failed: {0}")]
    Fetch(GithubError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<GithubError> for ApiError {
    fn from(err: GithubError) -> Self {
        match err {
            GithubError::NotFound { handle } => ApiError::UserNotFound(handle),
            other => ApiError::Fetch(other),
        }
    }
}

impl From<CompareError> for ApiError {
    fn from(err: CompareError) -> Self {
        match err {
            CompareError::Validation(v) => ApiError::Validation(v),
            CompareError::Github(g) => g.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::UserNotFound(handle) => {
                tracing::warn!(handle = %handle, "User not found upstream");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::with_details("User not found", format!("Handle: {}", handle)),
                )
            }
            ApiError::Fetch(err) => {
                // Generic surfacing: upstream/network detail stays in the logs.
                tracing::error!(error = %err, "Upstream fetch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse::new("Failed to fetch user data"),
                )
            }
            ApiError::Validation(err) => {
                tracing::warn!(error = %err, "Comparison validation failed");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Invalid comparison request", err.to_string()),
                )
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(message = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg.clone()))
            }
            ApiError::NoteNotFound(key) => {
                tracing::debug!(key = %key, "Note not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::with_details("Note not found", format!("Key: {}", key)),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(message = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
