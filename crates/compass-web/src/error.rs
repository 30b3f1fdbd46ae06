//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use compass_core::CompassError;
use serde_json::json;

/// An API error serialized as `{"error": message}` with its status code.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "Request failed");
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<CompassError> for ApiError {
    fn from(err: CompassError) -> Self {
        match err {
            // Caller-triggerable failures are client errors.
            CompassError::ValidationError(_) | CompassError::DegenerateMargin { .. } => {
                Self::bad_request(err.to_string())
            }
            CompassError::Computation(_) => Self::internal(err.to_string()),
        }
    }
}
