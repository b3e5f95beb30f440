//! Bank controller
//!
//! Thin layer between the HTTP handlers and the account repository. It screens
//! out obviously invalid input and otherwise forwards to the repository, which
//! stays the authoritative validator.

use std::sync::Arc;

use account_service::validation;
use account_service::AccountRepository;
use common::decimal::Amount;
use common::error::{ErrorExt, Result};
use common::model::account::Account;
use tracing::debug;

/// Request/response pass-through over an account repository
#[derive(Clone)]
pub struct BankController {
    repo: Arc<dyn AccountRepository>,
}

impl BankController {
    /// Create a controller over the given repository
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }

    /// Create a new account
    ///
    /// Returns `Ok(None)` without calling the repository when the number or
    /// name is invalid.
    pub fn create_new_account(&self, account: Account) -> Result<Option<Account>> {
        if validation::validate_account_number(account.account_number).is_err()
            || validation::validate_account_name(&account.name).is_err()
        {
            debug!("Ignoring invalid account details for {}", account.account_number);
            return Ok(None);
        }

        let account_number = account.account_number;
        self.repo
            .create_account(account)
            .with_context(|| format!("Failed to create account {}", account_number))
            .map(Some)
    }

    /// Get account details; `None` when the number is invalid or unknown
    pub fn get_account_details(&self, account_number: i64) -> Option<Account> {
        if validation::validate_account_number(account_number).is_err() {
            debug!("Ignoring lookup of invalid account number {}", account_number);
            return None;
        }

        self.repo.get_bank_account(account_number)
    }

    /// Deposit funds, returning the new balance
    pub fn deposit(&self, account_number: i64, amount: Amount) -> Result<Amount> {
        self.repo
            .deposit(account_number, amount)
            .with_context(|| format!("Failed to deposit {} to account {}", amount, account_number))
    }
}
