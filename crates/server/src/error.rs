//! Error types and HTTP error mapping

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use costing_facade::CostingError;
use serde::Serialize;
use thiserror::Error;

/// Startup failures.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A costing failure on its way to becoming an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub CostingError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            CostingError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CostingError::ServiceNotFound(_) => StatusCode::NOT_FOUND,
            CostingError::DatasetUnavailable
            | CostingError::InsufficientData { .. }
            | CostingError::InvalidParameter { .. }
            | CostingError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CostingError> for ApiError {
    fn from(err: CostingError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(CostingError::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "request failed");
        } else {
            tracing::warn!(status = %status, error = %self.0, "request rejected");
        }

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}
