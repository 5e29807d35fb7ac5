use clap::ValueEnum;

use crate::domain::ports::AccountStoreBox;
use crate::infrastructure::in_memory::{BackupAccountStore, InMemoryAccountStore};

/// Which account data store backs the service, chosen once at startup and
/// injected into `PaymentService` rather than read from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    Primary,
    Backup,
}

impl StoreKind {
    /// Builds a boxed account store of this kind.
    pub fn build(self) -> AccountStoreBox {
        match self {
            StoreKind::Primary => Box::new(InMemoryAccountStore::new()),
            StoreKind::Backup => Box::new(BackupAccountStore::new()),
        }
    }
}
