//! Validation rules for accounts and deposits
//!
//! The repository runs these before touching its collection, and the
//! controller reuses them to screen requests early. Checks are ordered: the
//! first failing rule decides the error.

use common::decimal::Amount;
use common::error::{Error, Result};
use common::model::account::Account;

/// Account numbers must be strictly positive
pub fn validate_account_number(account_number: i64) -> Result<()> {
    if account_number <= 0 {
        return Err(Error::InvalidAccountNumber(format!(
            "{} is not a positive account number",
            account_number
        )));
    }
    Ok(())
}

/// Names must contain at least one non-whitespace character
pub fn validate_account_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidAccountName(
            "account name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Accounts may open with zero or a positive balance
pub fn validate_initial_balance(balance: Amount) -> Result<()> {
    if balance < Amount::ZERO {
        return Err(Error::InvalidInitialBalance(format!(
            "opening balance {} is negative",
            balance
        )));
    }
    Ok(())
}

/// Deposits must be zero or positive
pub fn validate_deposit_amount(amount: Amount) -> Result<()> {
    if amount < Amount::ZERO {
        return Err(Error::InvalidDepositAmount(format!(
            "deposit amount {} is negative",
            amount
        )));
    }
    Ok(())
}

/// Full check applied to an account before it is stored
pub fn validate_new_account(account: &Account) -> Result<()> {
    validate_account_number(account.account_number)?;
    validate_account_name(&account.name)?;
    validate_initial_balance(account.balance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::decimal::dec;

    #[test]
    fn test_account_number() {
        assert!(validate_account_number(1).is_ok());
        assert!(validate_account_number(i64::MAX).is_ok());

        for number in [0, -1, -123, i64::MIN] {
            assert!(matches!(
                validate_account_number(number),
                Err(Error::InvalidAccountNumber(_))
            ));
        }
    }

    #[test]
    fn test_account_name() {
        assert!(validate_account_name("My Account").is_ok());
        assert!(validate_account_name(" x ").is_ok());

        for name in ["", " ", "\t\n"] {
            assert!(matches!(
                validate_account_name(name),
                Err(Error::InvalidAccountName(_))
            ));
        }
    }

    #[test]
    fn test_amounts() {
        assert!(validate_deposit_amount(dec!(0)).is_ok());
        assert!(validate_deposit_amount(dec!(25)).is_ok());
        assert!(matches!(
            validate_deposit_amount(dec!(-50)),
            Err(Error::InvalidDepositAmount(_))
        ));

        assert!(validate_initial_balance(dec!(0)).is_ok());
        assert!(matches!(
            validate_initial_balance(dec!(-0.01)),
            Err(Error::InvalidInitialBalance(_))
        ));
    }

    #[test]
    fn test_new_account_checks_number_before_name() {
        let account = Account::checking(-123, "", dec!(-1));
        assert!(matches!(
            validate_new_account(&account),
            Err(Error::InvalidAccountNumber(_))
        ));

        let account = Account::checking(123, "", dec!(-1));
        assert!(matches!(
            validate_new_account(&account),
            Err(Error::InvalidAccountName(_))
        ));

        let account = Account::checking(123, "Test", dec!(-1));
        assert!(matches!(
            validate_new_account(&account),
            Err(Error::InvalidInitialBalance(_))
        ));
    }
}
