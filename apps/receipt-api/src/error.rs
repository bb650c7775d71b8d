//! Error types for the Receipt API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use receipt_core::CoreError;
use serde::Serialize;

/// Receipt API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("The receipt is invalid.")]
    InvalidReceipt(String),

    #[error("No receipt found for that ID.")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidReceipt(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::ReceiptNotFound(id) => ApiError::NotFound(id),
            CoreError::Validation(e) => ApiError::InvalidReceipt(e.to_string()),
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::InvalidReceipt(detail) => Some(detail.clone()),
            ApiError::NotFound(_) => None,
        };
        let body = ErrorBody {
            error: self.to_string(),
            detail,
        };
        (status, Json(body)).into_response()
    }
}
