use crate::domain::errors::HolidayError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to retrieve data from external API.";

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    /// Non-success status returned by an upstream provider, passed through as-is
    Upstream { status: u16, message: String },
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Upstream { status, message } => {
                write!(f, "Upstream error {}: {}", status, message)
            }
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Upstream { status, message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status.as_u16(), message);
        }

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<HolidayError> for ApiError {
    fn from(err: HolidayError) -> Self {
        match err {
            HolidayError::UpstreamStatus(status) => ApiError::Upstream {
                status,
                message: UPSTREAM_FAILURE_MESSAGE.to_string(),
            },
            HolidayError::Transport(msg) => ApiError::Internal(format!(
                "An error occurred while calling the external API: {}",
                msg
            )),
            err @ HolidayError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
