//! Account models and related types

use serde::{Deserialize, Serialize};

use crate::decimal::Amount;
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Kind of bank account
///
/// Only checking accounts exist today. New variants belong here once they
/// carry behavior of their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// Everyday checking account
    #[default]
    Checking,
}

/// Account model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Account {
    /// Account number, the primary key of the ledger
    pub account_number: i64,
    /// Account holder or description
    pub name: String,
    /// Current funds
    pub balance: Amount,
    /// Account kind
    #[serde(default)]
    pub kind: AccountKind,
}

impl Account {
    /// Create a new checking account
    pub fn checking(account_number: i64, name: impl Into<String>, balance: Amount) -> Self {
        Self {
            account_number,
            name: name.into(),
            balance,
            kind: AccountKind::Checking,
        }
    }
}
