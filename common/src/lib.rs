//! Common types and utilities for the bank ledger
//!
//! This library contains the shared types used by the account repository and
//! the HTTP gateway: the error taxonomy, the decimal amount type and the
//! account model.

pub mod error;
pub mod model;
pub mod decimal;

/// Re-export important types
pub use error::{Error, Result, ErrorExt};
pub use decimal::*;

// Re-export utoipa for use in model ToSchema derives
#[cfg(feature = "utoipa")]
pub use utoipa;
