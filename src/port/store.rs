use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Account, MoneyboxError};

/// AccountStore is the persistence boundary: a key-value lookup/update
/// interface keyed by account id.
///
/// The store hands out fresh entity instances on every lookup; this core
/// performs no locking, so concurrent invocations against the same account id
/// are the host's problem, not ours.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Load the account with the given id.
    ///
    /// Fails with [`StoreError::AccountNotFound`] when no such account exists;
    /// absence must surface as an error, never as a silent no-op.
    ///
    /// [`StoreError::AccountNotFound`]: crate::domain::StoreError::AccountNotFound
    async fn get_account_by_id(&self, account_id: Uuid) -> Result<Account, MoneyboxError>;

    /// Replace the persisted representation keyed by `account.id`.
    ///
    /// Idempotent upsert semantics - there is no distinct create vs. update.
    async fn update(&self, account: &Account) -> Result<(), MoneyboxError>;
}
