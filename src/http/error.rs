use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::{NoticeError, RepoError, StatusError};

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
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    /// Well-formed request that fails validation.
    Unprocessable(String),
    /// Weather service problem, answered with the given status.
    Upstream(StatusCode, String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            AppError::Unprocessable(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("VALIDATION_ERROR", msg),
            ),
            AppError::Upstream(status, msg) => (status, ApiError::new("WEATHER_UNAVAILABLE", msg)),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        error!("Repository error: {}", err);
        AppError::Internal("A database error occurred".to_string())
    }
}

impl From<StatusError> for AppError {
    fn from(err: StatusError) -> Self {
        match err {
            StatusError::UnknownStatus(_) | StatusError::NoFlights => AppError::Unprocessable(err.to_string()),
            StatusError::Repo(e) => e.into(),
        }
    }
}

impl From<NoticeError> for AppError {
    fn from(err: NoticeError) -> Self {
        match err {
            NoticeError::EmptyMessage | NoticeError::MessageTooLong { .. } => {
                AppError::Unprocessable(err.to_string())
            }
            NoticeError::NotFound(_) => AppError::NotFound(err.to_string()),
            NoticeError::Repo(e) => e.into(),
        }
    }
}
