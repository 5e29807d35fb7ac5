use super::account::Account;
use crate::error::Result;
use async_trait::async_trait;

/// Storage port for debtor accounts.
///
/// The contract is deliberately thin: a read returns the current value and a
/// write persists the given value. No locking or versioning is assumed, so
/// concurrent payments against the same account race at this layer.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn get(&self, account_number: &str) -> Result<Option<Account>>;
    async fn update(&self, account: Account) -> Result<()>;
}

pub type AccountStoreBox = Box<dyn AccountStore>;
