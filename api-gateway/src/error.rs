//! Error handling for the API gateway

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error information
    pub error: ErrorInfo,
    /// Request ID for tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Detailed error information
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Error code (string identifier for the error type)
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// API errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Common(#[from] common::error::Error),
}

impl ApiError {
    /// Status code and error code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        use common::error::Error;

        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Common(e) => match e {
                // Client errors (4xx)
                Error::InvalidAccountNumber(_) => (StatusCode::BAD_REQUEST, "invalid_account_number"),
                Error::InvalidAccountName(_) => (StatusCode::BAD_REQUEST, "invalid_account_name"),
                Error::InvalidInitialBalance(_) => (StatusCode::BAD_REQUEST, "invalid_initial_balance"),
                Error::InvalidDepositAmount(_) => (StatusCode::BAD_REQUEST, "invalid_deposit_amount"),
                Error::AccountNotFound(_) => (StatusCode::NOT_FOUND, "account_not_found"),
                Error::DuplicateAccount(_) => (StatusCode::CONFLICT, "duplicate_account"),
                Error::DecimalError(_) => (StatusCode::UNPROCESSABLE_ENTITY, "decimal_error"),

                // Server errors (5xx)
                Error::ConfigurationError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error"),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Generate a request ID for tracking errors
        let request_id = Uuid::new_v4().to_string();

        tracing::error!("API Error [{}]: {:?}", request_id, &self);

        let (status, code) = self.status_and_code();
        let error_response = ErrorResponse {
            error: ErrorInfo {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id: Some(request_id),
        };

        (status, Json(error_response)).into_response()
    }
}
