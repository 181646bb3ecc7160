use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Account, MoneyboxError, StoreError};
use crate::port::AccountStore;

struct StoreData {
    accounts: HashMap<Uuid, Account>,
    update_count: u64,
}

/// In-memory account store.
///
/// Backs the test suites and any host that wants the domain rules without a
/// real database. `update_count` tracks how many times a mutated account was
/// persisted, which lets callers verify that failed invocations wrote nothing.
pub struct InMemoryAccountStore {
    data: Arc<RwLock<StoreData>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(StoreData {
                accounts: HashMap::new(),
                update_count: 0,
            })),
        }
    }

    /// Seed an account without counting it as an update.
    pub async fn insert(&self, account: Account) {
        let mut data = self.data.write().await;
        data.accounts.insert(account.id, account);
    }

    /// Number of `update` calls that reached the store.
    pub async fn update_count(&self) -> u64 {
        self.data.read().await.update_count
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn get_account_by_id(&self, account_id: Uuid) -> Result<Account, MoneyboxError> {
        let data = self.data.read().await;
        data.accounts
            .get(&account_id)
            .cloned()
            .ok_or(MoneyboxError::Store(StoreError::AccountNotFound(account_id)))
    }

    async fn update(&self, account: &Account) -> Result<(), MoneyboxError> {
        let mut data = self.data.write().await;
        data.accounts.insert(account.id, account.clone());
        data.update_count += 1;
        Ok(())
    }
}
