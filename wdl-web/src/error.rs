//! API error types
//!
//! Maps aggregation failures to structured JSON error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The store failed to run a query; no partial rows are returned.
    #[error(transparent)]
    Query(#[from] StorageError),

    #[error("not found: {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Query(_) => "QUERY_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
        }
    }

    pub fn not_found(path: &str) -> Self {
        Self::NotFound(format!("no route for {}", path))
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.code(),
            message: self.to_string(),
        };

        tracing::warn!(
            error_code = body.error,
            error_message = %body.message,
            status = %status,
            "API error"
        );

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
