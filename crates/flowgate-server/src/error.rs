//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It
//! implements `axum::response::IntoResponse` to produce structured JSON
//! error responses with appropriate HTTP status codes. Store failures map to
//! a 5xx response scoped to the single request; a failing request never
//! takes the process down.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use flowgate_store::StoreError;
use serde::Serialize;

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API errors with HTTP status code mapping.
///
/// Each variant maps to a specific HTTP status code and produces a
/// structured JSON error response body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid request (400): decode failures, missing parameters.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The store could not be reached (502).
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiErrorDetail {
                    code: "BAD_REQUEST".to_string(),
                    message: msg.clone(),
                },
            ),
            ApiError::StoreUnavailable(msg) => (
                StatusCode::BAD_GATEWAY,
                ApiErrorDetail {
                    code: "STORE_UNAVAILABLE".to_string(),
                    message: msg.clone(),
                },
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: msg.clone(),
                },
            ),
        };

        let body = serde_json::json!({
            "success": false,
            "error": detail,
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::Transport(_) => ApiError::StoreUnavailable(err.to_string()),
            StoreError::Rejected { .. }
            | StoreError::Serialization(_)
            | StoreError::MalformedResponse { .. } => ApiError::Internal(err.to_string()),
        }
    }
}
