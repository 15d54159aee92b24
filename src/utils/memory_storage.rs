//! In-memory storage implementation for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// In-memory storage implementation for testing and development
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl MemoryStore {
    /// Create a new memory store instance
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.accounts.write().unwrap().clear();
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn save_account(&mut self, account: &Account) -> BankResult<()> {
        self.accounts
            .write()
            .unwrap()
            .insert(account.account_number.clone(), account.clone());
        Ok(())
    }

    async fn get_account(&self, account_number: &str) -> BankResult<Option<Account>> {
        Ok(self.accounts.read().unwrap().get(account_number).cloned())
    }

    async fn list_accounts(&self, kind: Option<PolicyKind>) -> BankResult<Vec<Account>> {
        let accounts = self.accounts.read().unwrap();
        let filtered: Vec<Account> = accounts
            .values()
            .filter(|account| kind.is_none_or(|k| account.policy.kind() == k))
            .cloned()
            .collect();
        Ok(filtered)
    }

    async fn update_account(&mut self, account: &Account) -> BankResult<()> {
        if self
            .accounts
            .read()
            .unwrap()
            .contains_key(&account.account_number)
        {
            self.accounts
                .write()
                .unwrap()
                .insert(account.account_number.clone(), account.clone());
            Ok(())
        } else {
            Err(BankError::AccountNotFound(account.account_number.clone()))
        }
    }

    async fn delete_account(&mut self, account_number: &str) -> BankResult<()> {
        if self
            .accounts
            .write()
            .unwrap()
            .remove(account_number)
            .is_some()
        {
            Ok(())
        } else {
            Err(BankError::AccountNotFound(account_number.to_string()))
        }
    }
}
