//! Account management functionality

use bigdecimal::BigDecimal;

use crate::traits::*;
use crate::types::*;

/// Account manager for opening, looking up, and closing accounts
pub struct AccountManager<S: AccountStore> {
    pub(crate) storage: S,
    validator: Box<dyn AccountValidator>,
}

impl<S: AccountStore> AccountManager<S> {
    /// Create a new account manager
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            validator: Box::new(DefaultAccountValidator),
        }
    }

    /// Create a new account manager with custom validator
    pub fn with_validator(storage: S, validator: Box<dyn AccountValidator>) -> Self {
        Self { storage, validator }
    }

    /// Open a new account with an opening balance
    pub async fn open_account(
        &mut self,
        account_number: String,
        owner_name: String,
        policy: AccountPolicy,
        opening_balance: BigDecimal,
    ) -> BankResult<Account> {
        if opening_balance < BigDecimal::from(0) {
            return Err(BankError::Validation(format!(
                "Opening balance cannot be negative, got {}",
                opening_balance
            )));
        }

        let account = Account::new(account_number, owner_name, policy, opening_balance);

        // Validate the account
        self.validator.validate_account(&account)?;

        // Check if account already exists
        if let Some(_existing) = self.storage.get_account(&account.account_number).await? {
            return Err(BankError::Validation(format!(
                "Account with number '{}' already exists",
                account.account_number
            )));
        }

        // Save the account
        self.storage.save_account(&account).await?;

        Ok(account)
    }

    /// Get an account by account number
    pub async fn get_account(&self, account_number: &str) -> BankResult<Option<Account>> {
        self.storage.get_account(account_number).await
    }

    /// Get an account by account number, returning an error if not found
    pub async fn get_account_required(&self, account_number: &str) -> BankResult<Account> {
        self.storage
            .get_account(account_number)
            .await?
            .ok_or_else(|| BankError::AccountNotFound(account_number.to_string()))
    }

    /// List all accounts
    pub async fn list_accounts(&self) -> BankResult<Vec<Account>> {
        self.storage.list_accounts(None).await
    }

    /// List accounts by policy kind
    pub async fn list_accounts_by_policy(&self, kind: PolicyKind) -> BankResult<Vec<Account>> {
        self.storage.list_accounts(Some(kind)).await
    }

    /// Update an account
    pub async fn update_account(&mut self, account: &Account) -> BankResult<()> {
        // Validate the account
        self.validator.validate_account(account)?;

        // Ensure the account exists
        if self
            .storage
            .get_account(&account.account_number)
            .await?
            .is_none()
        {
            return Err(BankError::AccountNotFound(account.account_number.clone()));
        }

        self.storage.update_account(account).await
    }

    /// Close an account
    pub async fn close_account(&mut self, account_number: &str) -> BankResult<()> {
        let account = self.get_account_required(account_number).await?;

        // Validate closure
        self.validator.validate_account_closure(&account)?;

        self.storage.delete_account(account_number).await
    }

    /// Get the current balance of an account
    pub async fn get_balance(&self, account_number: &str) -> BankResult<BigDecimal> {
        let account = self.get_account_required(account_number).await?;
        Ok(account.balance().clone())
    }
}
