//! Traits for storage abstraction, validation, and operation observers

use async_trait::async_trait;

use crate::types::*;

/// Storage abstraction for accounts
///
/// This trait allows the banking core to work with any storage backend
/// (PostgreSQL, MySQL, SQLite, in-memory, etc.) by implementing these methods.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Save a newly opened account to storage
    async fn save_account(&mut self, account: &Account) -> BankResult<()>;

    /// Get an account by account number
    async fn get_account(&self, account_number: &str) -> BankResult<Option<Account>>;

    /// List all accounts, optionally filtered by policy kind
    async fn list_accounts(&self, kind: Option<PolicyKind>) -> BankResult<Vec<Account>>;

    /// Update an existing account
    async fn update_account(&mut self, account: &Account) -> BankResult<()>;

    /// Delete an account
    async fn delete_account(&mut self, account_number: &str) -> BankResult<()>;
}

/// Trait for implementing custom account validation rules
pub trait AccountValidator: Send + Sync {
    /// Validate an account before saving
    fn validate_account(&self, account: &Account) -> BankResult<()>;

    /// Validate account closure (e.g., check for a non-zero balance)
    fn validate_account_closure(&self, account: &Account) -> BankResult<()>;
}

/// Default account validator with basic rules
pub struct DefaultAccountValidator;

impl AccountValidator for DefaultAccountValidator {
    fn validate_account(&self, account: &Account) -> BankResult<()> {
        if account.account_number.trim().is_empty() {
            return Err(BankError::Validation(
                "Account number cannot be empty".to_string(),
            ));
        }

        if account.owner_name.trim().is_empty() {
            return Err(BankError::Validation(
                "Owner name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_account_closure(&self, _account: &Account) -> BankResult<()> {
        // Basic implementation - in a real system you'd require a settled balance
        Ok(())
    }
}

/// Observer invoked after each attempted account operation
///
/// This is the presentation boundary of the core: the status line emitted
/// after a deposit, withdrawal, or interest accrual is a logging concern and
/// carries no machine-parseable contract.
pub trait AccountObserver: Send + Sync {
    /// Called after an operation was applied successfully
    fn on_success(&self, event: &OperationEvent);

    /// Called after an operation was rejected; the balance in the event is
    /// the unchanged balance
    fn on_failure(&self, event: &OperationEvent, error: &BankError);
}

/// Observer that emits one structured log line per operation
pub struct TracingObserver;

impl AccountObserver for TracingObserver {
    fn on_success(&self, event: &OperationEvent) {
        tracing::info!(
            operation_id = %event.id,
            account = %event.account_number,
            kind = ?event.kind,
            amount = %event.amount,
            balance = %event.balance,
            "account operation applied"
        );
    }

    fn on_failure(&self, event: &OperationEvent, error: &BankError) {
        tracing::warn!(
            operation_id = %event.id,
            account = %event.account_number,
            kind = ?event.kind,
            amount = %event.amount,
            balance = %event.balance,
            error = %error,
            "account operation rejected"
        );
    }
}

/// Observer that discards all events
pub struct NullObserver;

impl AccountObserver for NullObserver {
    fn on_success(&self, _event: &OperationEvent) {}

    fn on_failure(&self, _event: &OperationEvent, _error: &BankError) {}
}
