//! Standardized API response formats

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A standardized API response wrapper for single resource responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// The response data
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Create a new API response
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize + Debug,
{
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
