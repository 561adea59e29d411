//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use inventory_domain::error::InventoryError;

/// Every failure a handler can produce, rendered as a plain-text body.
#[derive(Debug)]
pub enum ApiError {
    /// An application-level failure.
    Domain(InventoryError),
    /// The request body was not a JSON document of the expected shape.
    InvalidJson,
    /// The `{id}` path segment was not an integer.
    InvalidId,
    /// The path matched but the verb is not served there.
    MethodNotAllowed,
    /// No route matched the path.
    RouteNotFound,
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        Self::Domain(err)
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Domain(InventoryError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(InventoryError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(InventoryError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::InvalidJson => (StatusCode::BAD_REQUEST, "Invalid JSON".to_string()),
            Self::InvalidId => (StatusCode::BAD_REQUEST, "Invalid Item ID".to_string()),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            Self::RouteNotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.status_and_message().into_response()
    }
}
