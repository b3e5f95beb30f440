//! API handlers
//!
//! Each handler extracts state and parameters with axum extractors, calls the
//! bank controller and maps the result to a standardized response.

pub mod account;
pub mod response;

pub use response::ApiResponse;
