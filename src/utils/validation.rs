//! Validation utilities

use crate::traits::*;
use crate::types::*;
use bigdecimal::BigDecimal;

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> BankResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(BankError::InvalidAmount(amount.clone()))
    } else {
        Ok(())
    }
}

/// Validate that an account number is valid
pub fn validate_account_number(account_number: &str) -> BankResult<()> {
    if account_number.trim().is_empty() {
        return Err(BankError::Validation(
            "Account number cannot be empty".to_string(),
        ));
    }

    if account_number.len() > 50 {
        return Err(BankError::Validation(
            "Account number cannot exceed 50 characters".to_string(),
        ));
    }

    // Check for valid characters (alphanumeric, dashes, underscores)
    if !account_number
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(BankError::Validation(
            "Account number can only contain alphanumeric characters, dashes, and underscores"
                .to_string(),
        ));
    }

    Ok(())
}

/// Validate that an owner name is valid
pub fn validate_owner_name(name: &str) -> BankResult<()> {
    if name.trim().is_empty() {
        return Err(BankError::Validation(
            "Owner name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(BankError::Validation(
            "Owner name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate the parameters attached to an account policy
pub fn validate_policy(policy: &AccountPolicy) -> BankResult<()> {
    match policy {
        AccountPolicy::Standard => Ok(()),
        AccountPolicy::Savings { interest_rate } => {
            if *interest_rate < BigDecimal::from(0) {
                return Err(BankError::Validation(format!(
                    "Interest rate cannot be negative, got {}",
                    interest_rate
                )));
            }
            Ok(())
        }
        AccountPolicy::Overdraft { overdraft_limit } => {
            if *overdraft_limit < BigDecimal::from(0) {
                return Err(BankError::Validation(format!(
                    "Overdraft limit cannot be negative, got {}",
                    overdraft_limit
                )));
            }
            Ok(())
        }
    }
}

/// Enhanced account validator with detailed checks
pub struct EnhancedAccountValidator;

impl AccountValidator for EnhancedAccountValidator {
    fn validate_account(&self, account: &Account) -> BankResult<()> {
        validate_account_number(&account.account_number)?;
        validate_owner_name(&account.owner_name)?;
        validate_policy(&account.policy)?;

        // The balance may only dip below zero within an overdraft allowance
        let floor = match &account.policy {
            AccountPolicy::Overdraft { overdraft_limit } => -overdraft_limit.clone(),
            _ => BigDecimal::from(0),
        };
        if *account.balance() < floor {
            return Err(BankError::Validation(format!(
                "Balance {} is below the allowed floor {} for account '{}'",
                account.balance(),
                floor,
                account.account_number
            )));
        }

        Ok(())
    }

    fn validate_account_closure(&self, account: &Account) -> BankResult<()> {
        if *account.balance() != BigDecimal::from(0) {
            return Err(BankError::Validation(format!(
                "Account '{}' must have a zero balance before closure, balance is {}",
                account.account_number,
                account.balance()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_validate_positive_amount() {
        assert!(validate_positive_amount(&dec("0.01")).is_ok());
        assert!(validate_positive_amount(&BigDecimal::from(0)).is_err());
        assert!(validate_positive_amount(&dec("-5")).is_err());
    }

    #[test]
    fn test_validate_account_number() {
        assert!(validate_account_number("SA-001_x").is_ok());
        assert!(validate_account_number("").is_err());
        assert!(validate_account_number("has spaces").is_err());
        assert!(validate_account_number(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_policy() {
        assert!(validate_policy(&AccountPolicy::Standard).is_ok());
        assert!(validate_policy(&AccountPolicy::Savings {
            interest_rate: dec("-0.01")
        })
        .is_err());
        assert!(validate_policy(&AccountPolicy::Overdraft {
            overdraft_limit: dec("-100")
        })
        .is_err());
    }

    #[test]
    fn test_enhanced_validator_balance_floor() {
        let validator = EnhancedAccountValidator;

        // Within the overdraft allowance is fine
        let mut overdrawn = Account::new(
            "OVD001".to_string(),
            "Bob".to_string(),
            AccountPolicy::Overdraft {
                overdraft_limit: dec("100.00"),
            },
            dec("50.00"),
        );
        overdrawn.withdraw(&dec("120.00")).unwrap();
        assert!(validator.validate_account(&overdrawn).is_ok());

        // A standard account must never sit below zero
        let negative_standard = Account::new(
            "ACC001".to_string(),
            "Alice".to_string(),
            AccountPolicy::Standard,
            dec("-5.00"),
        );
        assert!(validator.validate_account(&negative_standard).is_err());
    }

    #[test]
    fn test_enhanced_validator_closure() {
        let validator = EnhancedAccountValidator;

        let settled = Account::new(
            "ACC001".to_string(),
            "Alice".to_string(),
            AccountPolicy::Standard,
            BigDecimal::from(0),
        );
        assert!(validator.validate_account_closure(&settled).is_ok());

        let outstanding = Account::new(
            "ACC002".to_string(),
            "Alice".to_string(),
            AccountPolicy::Standard,
            dec("10.00"),
        );
        assert!(validator.validate_account_closure(&outstanding).is_err());
    }
}
