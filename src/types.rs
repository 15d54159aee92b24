//! Core types and data structures for the banking system

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Withdrawal and interest policy attached to an account
///
/// A single account value carries a policy tag instead of being subclassed;
/// deposit behavior is identical across policies, withdrawal and interest
/// behavior dispatch on the tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AccountPolicy {
    /// Plain account: withdrawals may not exceed the current balance
    Standard,
    /// Savings account: accrues interest at a fractional rate (0.02 = 2%)
    Savings { interest_rate: BigDecimal },
    /// Overdraft account: withdrawals may drive the balance negative,
    /// but never below `-overdraft_limit`
    Overdraft { overdraft_limit: BigDecimal },
}

impl AccountPolicy {
    /// Returns the policy discriminant, used for listing and filtering
    pub fn kind(&self) -> PolicyKind {
        match self {
            AccountPolicy::Standard => PolicyKind::Standard,
            AccountPolicy::Savings { .. } => PolicyKind::Savings,
            AccountPolicy::Overdraft { .. } => PolicyKind::Overdraft,
        }
    }
}

/// Policy discriminant without the attached parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    Standard,
    Savings,
    Overdraft,
}

/// A single monetary holding identified by an opaque account number
///
/// The balance is deliberately private: it changes only through the
/// validated `deposit` / `withdraw` / `accrue_interest` operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque identifier, immutable after creation
    pub account_number: String,
    /// Display name of the account owner
    pub owner_name: String,
    /// Withdrawal/interest policy for this account
    pub policy: AccountPolicy,
    balance: BigDecimal,
    /// Additional metadata
    pub metadata: HashMap<String, String>,
    /// When the account was opened
    pub created_at: NaiveDateTime,
    /// When the account was last updated
    pub updated_at: NaiveDateTime,
}

impl Account {
    /// Create a new account with an opening balance (zero or positive)
    pub fn new(
        account_number: String,
        owner_name: String,
        policy: AccountPolicy,
        opening_balance: BigDecimal,
    ) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            account_number,
            owner_name,
            policy,
            balance: opening_balance,
            metadata: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Current balance, pure read
    pub fn balance(&self) -> &BigDecimal {
        &self.balance
    }

    /// Increase the balance by `amount` and return the new balance
    ///
    /// Fails with [`BankError::InvalidAmount`] when `amount <= 0`; the
    /// balance is left untouched on any failure.
    pub fn deposit(&mut self, amount: &BigDecimal) -> BankResult<BigDecimal> {
        if *amount <= BigDecimal::from(0) {
            return Err(BankError::InvalidAmount(amount.clone()));
        }

        self.balance += amount;
        self.updated_at = chrono::Utc::now().naive_utc();
        Ok(self.balance.clone())
    }

    /// Decrease the balance by `amount` and return the new balance
    ///
    /// Fails with [`BankError::InvalidAmount`] when `amount <= 0`. Under the
    /// standard and savings policies the withdrawal fails with
    /// [`BankError::InsufficientFunds`] when `amount > balance`. Under the
    /// overdraft policy it fails with [`BankError::OverdraftLimitExceeded`]
    /// when `amount > balance + overdraft_limit`; withdrawing exactly
    /// `balance + overdraft_limit` succeeds and leaves the balance at
    /// `-overdraft_limit`.
    pub fn withdraw(&mut self, amount: &BigDecimal) -> BankResult<BigDecimal> {
        if *amount <= BigDecimal::from(0) {
            return Err(BankError::InvalidAmount(amount.clone()));
        }

        match &self.policy {
            AccountPolicy::Overdraft { overdraft_limit } => {
                if *amount > &self.balance + overdraft_limit {
                    return Err(BankError::OverdraftLimitExceeded {
                        account_number: self.account_number.clone(),
                        balance: self.balance.clone(),
                        overdraft_limit: overdraft_limit.clone(),
                        requested: amount.clone(),
                    });
                }
            }
            AccountPolicy::Standard | AccountPolicy::Savings { .. } => {
                if *amount > self.balance {
                    return Err(BankError::InsufficientFunds {
                        account_number: self.account_number.clone(),
                        balance: self.balance.clone(),
                        requested: amount.clone(),
                    });
                }
            }
        }

        self.balance -= amount;
        self.updated_at = chrono::Utc::now().naive_utc();
        Ok(self.balance.clone())
    }

    /// Compute `balance * interest_rate` and credit it through the ordinary
    /// deposit path, returning the interest credited
    ///
    /// Only savings accounts accrue interest; other policies fail with
    /// [`BankError::InterestNotSupported`]. A failed deposit is propagated to
    /// the caller rather than swallowed, so a zero balance yields
    /// [`BankError::InvalidAmount`] (the computed interest is zero) and the
    /// balance is unchanged.
    pub fn accrue_interest(&mut self) -> BankResult<BigDecimal> {
        let interest_rate = match &self.policy {
            AccountPolicy::Savings { interest_rate } => interest_rate.clone(),
            AccountPolicy::Standard | AccountPolicy::Overdraft { .. } => {
                return Err(BankError::InterestNotSupported(
                    self.account_number.clone(),
                ));
            }
        };

        let interest = &self.balance * &interest_rate;
        self.deposit(&interest)?;
        Ok(interest)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account [{}] Owner: {}, Balance: {}",
            self.account_number, self.owner_name, self.balance
        )
    }
}

/// The kind of mutating operation applied to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    Deposit,
    Withdrawal,
    InterestAccrual,
}

/// Record of one attempted account operation, handed to observers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationEvent {
    /// Unique identifier for this operation attempt
    pub id: Uuid,
    /// Account the operation was applied to
    pub account_number: String,
    /// What was attempted
    pub kind: OperationKind,
    /// Amount involved (for interest accrual, the computed interest)
    pub amount: BigDecimal,
    /// Balance after the operation (unchanged balance on failure)
    pub balance: BigDecimal,
    /// When the operation was attempted
    pub at: NaiveDateTime,
}

impl OperationEvent {
    pub(crate) fn new(
        account_number: String,
        kind: OperationKind,
        amount: BigDecimal,
        balance: BigDecimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_number,
            kind,
            amount,
            balance,
            at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Errors that can occur in the banking system
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("Amount must be positive, got {0}")]
    InvalidAmount(BigDecimal),
    #[error(
        "Insufficient funds in {account_number}: balance {balance}, attempted to withdraw {requested}"
    )]
    InsufficientFunds {
        account_number: String,
        balance: BigDecimal,
        requested: BigDecimal,
    },
    #[error(
        "Withdrawal of {requested} exceeds overdraft limit for {account_number}: balance {balance}, limit {overdraft_limit}"
    )]
    OverdraftLimitExceeded {
        account_number: String,
        balance: BigDecimal,
        overdraft_limit: BigDecimal,
        requested: BigDecimal,
    },
    #[error("Account {0} does not accrue interest")]
    InterestNotSupported(String),
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for banking operations
pub type BankResult<T> = Result<T, BankError>;
