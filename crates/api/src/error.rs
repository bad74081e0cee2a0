use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use services::{ProgressServiceError, SessionServiceError, TopicServiceError};
use storage::repository::StorageError;

/// Boundary error: every service failure is folded into a client error (400)
/// or a server error (500) with an `{"error": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "request rejected");
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": msg })),
                )
                    .into_response()
            }
        }
    }
}

impl From<TopicServiceError> for ApiError {
    fn from(err: TopicServiceError) -> Self {
        match err {
            TopicServiceError::Topic(e) => ApiError::BadRequest(e.to_string()),
            TopicServiceError::Storage(e) => ApiError::Internal(e.to_string()),
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<SessionServiceError> for ApiError {
    fn from(err: SessionServiceError) -> Self {
        match err {
            SessionServiceError::Session(_)
            | SessionServiceError::MalformedTopicId
            | SessionServiceError::TopicNotFound => ApiError::BadRequest(err.to_string()),
            SessionServiceError::Storage(e) => ApiError::Internal(e.to_string()),
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<ProgressServiceError> for ApiError {
    fn from(err: ProgressServiceError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
