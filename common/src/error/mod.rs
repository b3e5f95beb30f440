//! Error types for the bank ledger
//!
//! Every validation failure of the account repository has its own variant so
//! callers can match on the kind of failure instead of parsing messages.

use std::fmt::Display;
use thiserror::Error;

/// Ledger error type
#[derive(Debug, Error)]
pub enum Error {
    /// Account number is not strictly positive
    #[error("Invalid account number: {0}")]
    InvalidAccountNumber(String),

    /// Account name is empty or whitespace-only
    #[error("Invalid account name: {0}")]
    InvalidAccountName(String),

    /// Opening balance is negative
    #[error("Invalid initial balance: {0}")]
    InvalidInitialBalance(String),

    /// Deposit amount is negative
    #[error("Invalid deposit amount: {0}")]
    InvalidDepositAmount(String),

    /// Error when an account cannot be found
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// An account with the same number is already stored
    #[error("Duplicate account: {0}")]
    DuplicateAccount(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Decimal arithmetic error such as overflow
    #[error("Decimal error: {0}")]
    DecimalError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::InvalidAccountNumber(msg) => Error::InvalidAccountNumber(format!("{}: {}", context, msg)),
                Error::InvalidAccountName(msg) => Error::InvalidAccountName(format!("{}: {}", context, msg)),
                Error::InvalidInitialBalance(msg) => Error::InvalidInitialBalance(format!("{}: {}", context, msg)),
                Error::InvalidDepositAmount(msg) => Error::InvalidDepositAmount(format!("{}: {}", context, msg)),
                Error::AccountNotFound(msg) => Error::AccountNotFound(format!("{}: {}", context, msg)),
                Error::DuplicateAccount(msg) => Error::DuplicateAccount(format!("{}: {}", context, msg)),
                Error::ConfigurationError(msg) => Error::ConfigurationError(format!("{}: {}", context, msg)),
                Error::DecimalError(msg) => Error::DecimalError(format!("{}: {}", context, msg)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_keeps_variant() {
        let result: Result<()> = Err(Error::AccountNotFound("123".to_string()));
        let err = result.with_context(|| "Deposit failed").unwrap_err();

        match err {
            Error::AccountNotFound(msg) => assert_eq!(msg, "Deposit failed: 123"),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_with_context_leaves_ok_untouched() {
        let result: Result<u32> = Ok(7);
        assert_eq!(result.with_context(|| "unused").unwrap(), 7);
    }

    #[test]
    fn test_display_includes_kind() {
        let err = Error::InvalidDepositAmount("-50".to_string());
        assert_eq!(err.to_string(), "Invalid deposit amount: -50");

        let err = Error::DecimalError("Overflow adding 1 to 2".to_string());
        assert_eq!(err.to_string(), "Decimal error: Overflow adding 1 to 2");
    }
}
