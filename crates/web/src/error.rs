use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::dto::movement::PayloadError;
use storage::error::StorageError;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    /// Request body is not parseable JSON.
    InvalidInput,
    /// A required field is absent or empty.
    MissingField,
    /// Quantity is not a number or is not strictly positive.
    InvalidQuantity,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::InvalidInput => write!(f, "Invalid input"),
            Self::MissingField => write!(f, "Missing required field"),
            Self::InvalidQuantity => write!(f, "Invalid quantity"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status_code, message) = match &self {
            Self::Storage(StorageError::NotFound) => {
                (StatusCode::NOT_FOUND, "movement not found".to_string())
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            Self::InvalidInput => (StatusCode::BAD_REQUEST, "invalid data".to_string()),
            Self::MissingField => (
                StatusCode::BAD_REQUEST,
                "missing required fields".to_string(),
            ),
            Self::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "quantity must be a positive number".to_string(),
            ),
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<PayloadError> for WebError {
    fn from(error: PayloadError) -> Self {
        match error {
            PayloadError::MissingField => Self::MissingField,
            PayloadError::InvalidQuantity => Self::InvalidQuantity,
        }
    }
}
