use crate::domain::account::Account;
use crate::domain::ports::AccountStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The primary in-memory account store.
///
/// Uses `Arc<RwLock<HashMap<String, Account>>>` to allow shared concurrent
/// access. Reads return the current value; writes persist the given value.
/// No durability is provided.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty account store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn get(&self, account_number: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(account_number).cloned())
    }

    async fn update(&self, account: Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.account_number.clone(), account);
        Ok(())
    }
}

/// Stand-in for the legacy backup account data store.
///
/// Same contract and same in-memory representation as the primary store, but
/// a distinct type with its own dataset, selected via `StoreKind::Backup`.
#[derive(Default, Clone)]
pub struct BackupAccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl BackupAccountStore {
    /// Creates a new, empty backup store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for BackupAccountStore {
    async fn get(&self, account_number: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(account_number).cloned())
    }

    async fn update(&self, account: Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.account_number.clone(), account);
        Ok(())
    }
}
