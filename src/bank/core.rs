//! Main bank orchestrator that coordinates accounts, storage, and observers

use bigdecimal::BigDecimal;

use crate::bank::AccountManager;
use crate::traits::*;
use crate::types::*;

/// Main bank system that orchestrates all account operations
///
/// Every mutating operation is applied to the account value, persisted, and
/// then reported to the configured [`AccountObserver`], whether it succeeded
/// or failed.
pub struct Bank<S: AccountStore> {
    account_manager: AccountManager<S>,
    observer: Box<dyn AccountObserver>,
}

impl<S: AccountStore> Bank<S> {
    /// Create a new bank with the given storage backend
    ///
    /// Uses the default validator and emits one log line per operation.
    pub fn new(storage: S) -> Self {
        Self::with_parts(
            storage,
            Box::new(DefaultAccountValidator),
            Box::new(TracingObserver),
        )
    }

    /// Create a new bank with a custom validator and observer
    pub fn with_parts(
        storage: S,
        validator: Box<dyn AccountValidator>,
        observer: Box<dyn AccountObserver>,
    ) -> Self {
        Self {
            account_manager: AccountManager::with_validator(storage, validator),
            observer,
        }
    }

    // Account lifecycle
    /// Open a new account
    pub async fn open_account(
        &mut self,
        account_number: String,
        owner_name: String,
        policy: AccountPolicy,
        opening_balance: BigDecimal,
    ) -> BankResult<Account> {
        self.account_manager
            .open_account(account_number, owner_name, policy, opening_balance)
            .await
    }

    /// Get an account by account number
    pub async fn get_account(&self, account_number: &str) -> BankResult<Option<Account>> {
        self.account_manager.get_account(account_number).await
    }

    /// List all accounts
    pub async fn list_accounts(&self) -> BankResult<Vec<Account>> {
        self.account_manager.list_accounts().await
    }

    /// List accounts by policy kind
    pub async fn list_accounts_by_policy(&self, kind: PolicyKind) -> BankResult<Vec<Account>> {
        self.account_manager.list_accounts_by_policy(kind).await
    }

    /// Close an account
    pub async fn close_account(&mut self, account_number: &str) -> BankResult<()> {
        self.account_manager.close_account(account_number).await
    }

    /// Get the current balance of an account
    pub async fn balance(&self, account_number: &str) -> BankResult<BigDecimal> {
        self.account_manager.get_balance(account_number).await
    }

    // Account operations
    /// Deposit into an account and return the new balance
    pub async fn deposit(
        &mut self,
        account_number: &str,
        amount: BigDecimal,
    ) -> BankResult<BigDecimal> {
        let mut account = self
            .account_manager
            .get_account_required(account_number)
            .await?;

        match account.deposit(&amount) {
            Ok(new_balance) => {
                self.account_manager.storage.update_account(&account).await?;
                let event = OperationEvent::new(
                    account.account_number.clone(),
                    OperationKind::Deposit,
                    amount,
                    new_balance.clone(),
                );
                self.observer.on_success(&event);
                Ok(new_balance)
            }
            Err(err) => {
                let event = OperationEvent::new(
                    account.account_number.clone(),
                    OperationKind::Deposit,
                    amount,
                    account.balance().clone(),
                );
                self.observer.on_failure(&event, &err);
                Err(err)
            }
        }
    }

    /// Withdraw from an account and return the new balance
    ///
    /// Applies the account's own policy: overdraft accounts may go negative
    /// within their limit, all others are bounded by the current balance.
    pub async fn withdraw(
        &mut self,
        account_number: &str,
        amount: BigDecimal,
    ) -> BankResult<BigDecimal> {
        let mut account = self
            .account_manager
            .get_account_required(account_number)
            .await?;

        match account.withdraw(&amount) {
            Ok(new_balance) => {
                self.account_manager.storage.update_account(&account).await?;
                let event = OperationEvent::new(
                    account.account_number.clone(),
                    OperationKind::Withdrawal,
                    amount,
                    new_balance.clone(),
                );
                self.observer.on_success(&event);
                Ok(new_balance)
            }
            Err(err) => {
                let event = OperationEvent::new(
                    account.account_number.clone(),
                    OperationKind::Withdrawal,
                    amount,
                    account.balance().clone(),
                );
                self.observer.on_failure(&event, &err);
                Err(err)
            }
        }
    }

    /// Accrue interest on a savings account and return the interest credited
    pub async fn accrue_interest(&mut self, account_number: &str) -> BankResult<BigDecimal> {
        let mut account = self
            .account_manager
            .get_account_required(account_number)
            .await?;

        match account.accrue_interest() {
            Ok(interest) => {
                self.account_manager.storage.update_account(&account).await?;
                let event = OperationEvent::new(
                    account.account_number.clone(),
                    OperationKind::InterestAccrual,
                    interest.clone(),
                    account.balance().clone(),
                );
                self.observer.on_success(&event);
                Ok(interest)
            }
            Err(err) => {
                let event = OperationEvent::new(
                    account.account_number.clone(),
                    OperationKind::InterestAccrual,
                    BigDecimal::from(0),
                    account.balance().clone(),
                );
                self.observer.on_failure(&event, &err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::memory_storage::MemoryStore;
    use std::str::FromStr;
    use std::sync::{Arc, Mutex};

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    /// Test observer that records one line per event
    #[derive(Clone, Default)]
    struct RecordingObserver {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl AccountObserver for RecordingObserver {
        fn on_success(&self, event: &OperationEvent) {
            self.lines.lock().unwrap().push(format!(
                "ok {:?} {} {} -> {}",
                event.kind, event.account_number, event.amount, event.balance
            ));
        }

        fn on_failure(&self, event: &OperationEvent, error: &BankError) {
            self.lines.lock().unwrap().push(format!(
                "err {:?} {}: {}",
                event.kind, event.account_number, error
            ));
        }
    }

    #[tokio::test]
    async fn test_bank_basic_operations() {
        let storage = MemoryStore::new();
        let mut bank = Bank::new(storage);

        bank.open_account(
            "ACC001".to_string(),
            "Alice".to_string(),
            AccountPolicy::Standard,
            dec("1000.00"),
        )
        .await
        .unwrap();

        let balance = bank.deposit("ACC001", dec("200.00")).await.unwrap();
        assert_eq!(balance, dec("1200.00"));

        let balance = bank.withdraw("ACC001", dec("300.00")).await.unwrap();
        assert_eq!(balance, dec("900.00"));

        // The mutation must be visible through a fresh read
        assert_eq!(bank.balance("ACC001").await.unwrap(), dec("900.00"));
    }

    #[tokio::test]
    async fn test_bank_reports_to_observer() {
        let observer = RecordingObserver::default();
        let lines = observer.lines.clone();
        let mut bank = Bank::with_parts(
            MemoryStore::new(),
            Box::new(DefaultAccountValidator),
            Box::new(observer),
        );

        bank.open_account(
            "ACC002".to_string(),
            "Alice".to_string(),
            AccountPolicy::Standard,
            dec("100.00"),
        )
        .await
        .unwrap();

        bank.deposit("ACC002", dec("50.00")).await.unwrap();
        bank.withdraw("ACC002", dec("500.00")).await.unwrap_err();

        let recorded = lines.lock().unwrap();
        assert_eq!(recorded.len(), 2);
        assert!(recorded[0].starts_with("ok Deposit"));
        assert!(recorded[1].starts_with("err Withdrawal"));
    }

    #[tokio::test]
    async fn test_unknown_account_is_reported() {
        let mut bank = Bank::new(MemoryStore::new());
        let err = bank.deposit("NOPE", dec("10.00")).await.unwrap_err();
        assert!(matches!(err, BankError::AccountNotFound(_)));
    }

    #[tokio::test]
    async fn test_failed_operation_leaves_stored_balance_unchanged() {
        let mut bank = Bank::new(MemoryStore::new());

        bank.open_account(
            "OVD001".to_string(),
            "Bob".to_string(),
            AccountPolicy::Overdraft {
                overdraft_limit: dec("100.00"),
            },
            dec("100.00"),
        )
        .await
        .unwrap();

        bank.withdraw("OVD001", dec("250.00")).await.unwrap_err();
        assert_eq!(bank.balance("OVD001").await.unwrap(), dec("100.00"));
    }
}
