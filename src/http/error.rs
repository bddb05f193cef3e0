//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::engine::EngineError;
use crate::models::{InvalidOffset, InvalidPosition, UnsupportedBody};

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
///
/// Validation failures are the caller's fault and map to 400; anything the
/// engine refuses (or an internal fault) maps to 500. A day without events
/// is never an error and never lands here.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or out-of-range request parameter.
    BadRequest(String),
    /// Requested body is not served.
    UnsupportedBody(String),
    /// The astronomical engine could not answer.
    Engine(EngineError),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_PARAMETER", msg),
            ),
            AppError::UnsupportedBody(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("UNSUPPORTED_BODY", msg),
            ),
            AppError::Engine(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("ENGINE_FAILURE", e.to_string()),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<EngineError> for AppError {
    fn from(e: EngineError) -> Self {
        AppError::Engine(e)
    }
}

impl From<UnsupportedBody> for AppError {
    fn from(e: UnsupportedBody) -> Self {
        AppError::UnsupportedBody(e.to_string())
    }
}

impl From<InvalidPosition> for AppError {
    fn from(e: InvalidPosition) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl From<InvalidOffset> for AppError {
    fn from(e: InvalidOffset) -> Self {
        AppError::BadRequest(e.to_string())
    }
}
