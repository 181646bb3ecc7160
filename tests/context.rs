/// Shared test utilities and helpers
use std::sync::Arc;

use moneybox::adapter::{InMemoryAccountStore, RecordingNotifier};
use moneybox::domain::{Account, User};
use moneybox::port::AccountStore;
use moneybox::service::{TransferMoney, WithdrawMoney};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Test context wiring the use cases to an in-memory store and a recording
/// notifier.
pub struct TestContext {
    pub store: Arc<InMemoryAccountStore>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryAccountStore::new()),
            notifier: Arc::new(RecordingNotifier::new()),
        }
    }

    pub fn withdraw_money(&self) -> WithdrawMoney {
        WithdrawMoney::new(self.store.clone(), self.notifier.clone())
    }

    pub fn transfer_money(&self) -> TransferMoney {
        TransferMoney::new(self.store.clone(), self.notifier.clone())
    }

    /// Seed the store with a fresh account owned by a fresh user.
    pub async fn seed_account(
        &self,
        balance: Decimal,
        withdrawn: Decimal,
        paid_in: Decimal,
    ) -> Account {
        let account = account(balance, withdrawn, paid_in);
        self.store.insert(account.clone()).await;
        account
    }

    /// Fetch the persisted state of an account straight from the store.
    pub async fn stored(&self, account_id: Uuid) -> Account {
        self.store
            .get_account_by_id(account_id)
            .await
            .expect("account should be in the store")
    }

    pub async fn assert_stored_balance(&self, account_id: Uuid, expected: Decimal) {
        let account = self.stored(account_id).await;
        assert_eq!(account.balance, expected, "Stored balance mismatch");
    }

    pub async fn assert_no_notifications(&self) {
        assert!(
            self.notifier.funds_low_calls().await.is_empty(),
            "No low-funds notification should have fired"
        );
        assert!(
            self.notifier.approaching_limit_calls().await.is_empty(),
            "No approaching-limit notification should have fired"
        );
    }
}

/// Build an account with a fresh owner; the owner's email is derived from the
/// user id so tests can assert which account a notification targeted.
pub fn account(balance: Decimal, withdrawn: Decimal, paid_in: Decimal) -> Account {
    let user_id = Uuid::new_v4();
    let user = User::new(user_id, "Test User", format!("{user_id}@moneybox.test"));
    Account::new(Uuid::new_v4(), user, balance, withdrawn, paid_in)
}
