//! Repository for account data

use std::collections::HashMap;

use common::decimal::{self, Amount};
use common::error::{Error, Result};
use common::model::account::Account;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::AccountServiceConfig;
use crate::validation;

/// Account repository trait defining the interface for account data storage
pub trait AccountRepository: Send + Sync {
    /// Validate and store a new account, returning the stored value
    fn create_account(&self, account: Account) -> Result<Account>;

    /// Get an account by number; absence is not an error
    fn get_bank_account(&self, account_number: i64) -> Option<Account>;

    /// Add a non-negative amount to an existing account, returning the new balance
    fn deposit(&self, account_number: i64, amount: Amount) -> Result<Amount>;
}

/// In-memory repository for account data
///
/// One lock guards the whole collection, so creations, deposits and lookups
/// are serialized against each other.
pub struct InMemoryAccountRepository {
    /// Accounts by number
    accounts: Mutex<HashMap<i64, Account>>,
    /// Log mutations at info instead of debug
    transaction_logging: bool,
}

impl InMemoryAccountRepository {
    /// Create a new in-memory account repository
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            transaction_logging: false,
        }
    }

    /// Create a new in-memory account repository with configuration
    pub fn with_config(config: &AccountServiceConfig) -> Self {
        debug!(
            "Creating account repository with capacity {}, transaction logging: {}",
            config.initial_capacity, config.transaction_logging
        );

        Self {
            accounts: Mutex::new(HashMap::with_capacity(config.initial_capacity)),
            transaction_logging: config.transaction_logging,
        }
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.accounts.lock().len()
    }

    /// Whether no account has been stored yet
    pub fn is_empty(&self) -> bool {
        self.accounts.lock().is_empty()
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn create_account(&self, account: Account) -> Result<Account> {
        if let Err(e) = validation::validate_new_account(&account) {
            warn!("Rejected account {}: {}", account.account_number, e);
            return Err(e);
        }

        let mut accounts = self.accounts.lock();
        if accounts.contains_key(&account.account_number) {
            warn!("Account {} already exists", account.account_number);
            return Err(Error::DuplicateAccount(format!(
                "Account {} already exists",
                account.account_number
            )));
        }

        accounts.insert(account.account_number, account.clone());
        if self.transaction_logging {
            info!("Created account {} with balance {}", account.account_number, account.balance);
        } else {
            debug!("Created account {} with balance {}", account.account_number, account.balance);
        }

        Ok(account)
    }

    fn get_bank_account(&self, account_number: i64) -> Option<Account> {
        self.accounts.lock().get(&account_number).cloned()
    }

    fn deposit(&self, account_number: i64, amount: Amount) -> Result<Amount> {
        validation::validate_account_number(account_number)?;
        validation::validate_deposit_amount(amount)?;

        let mut accounts = self.accounts.lock();
        let account = accounts.get_mut(&account_number).ok_or_else(|| {
            warn!("Deposit to unknown account {}", account_number);
            Error::AccountNotFound(format!("Account not found: {}", account_number))
        })?;

        account.balance = decimal::checked_add(account.balance, amount)?;
        let balance = account.balance;
        drop(accounts);

        if self.transaction_logging {
            info!("Deposited {} to account {}, new balance {}", amount, account_number, balance);
        } else {
            debug!("Deposited {} to account {}, new balance {}", amount, account_number, balance);
        }

        Ok(balance)
    }
}
