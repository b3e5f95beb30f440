//! Decimal type utilities for precise monetary calculations

use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

use crate::error::{Error, Result};

/// Monetary amount with high precision
pub type Amount = Decimal;

/// Add two amounts, failing instead of panicking on overflow
pub fn checked_add(lhs: Amount, rhs: Amount) -> Result<Amount> {
    lhs.checked_add(rhs)
        .ok_or_else(|| Error::DecimalError(format!("Overflow adding {} to {}", rhs, lhs)))
}
