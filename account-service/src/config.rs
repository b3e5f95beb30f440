//! Configuration for the account service

use std::env;

/// Default number of account slots reserved up front
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;

/// Configuration for the account service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountServiceConfig {
    /// Log every creation and deposit at info level
    pub transaction_logging: bool,
    /// Number of accounts the store reserves room for
    pub initial_capacity: usize,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            transaction_logging: env::var("TRANSACTION_LOGGING")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            initial_capacity: env::var("ACCOUNT_CAPACITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_INITIAL_CAPACITY),
        }
    }
}

impl AccountServiceConfig {
    /// Create a new configuration using environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create a new configuration with custom values
    pub fn new(transaction_logging: bool, initial_capacity: usize) -> Self {
        Self {
            transaction_logging,
            initial_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_given_values() {
        let config = AccountServiceConfig::new(true, 10);
        assert!(config.transaction_logging);
        assert_eq!(config.initial_capacity, 10);
    }
}
