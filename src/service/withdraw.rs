use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::domain::MoneyboxError;
use crate::port::{AccountStore, Notifier};

/// Withdraws money from a single account.
///
/// Sequencing per invocation: fetch, mutate, notify, persist. A failed
/// mutation propagates immediately and guarantees that neither the notifier
/// nor the store is touched.
pub struct WithdrawMoney {
    store: Arc<dyn AccountStore>,
    notifier: Arc<dyn Notifier>,
}

impl WithdrawMoney {
    pub fn new(store: Arc<dyn AccountStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    pub async fn execute(&self, account_id: Uuid, amount: Decimal) -> Result<(), MoneyboxError> {
        let mut account = self.store.get_account_by_id(account_id).await?;

        account.withdraw(amount)?;
        debug!(%account_id, %amount, balance = %account.balance, "withdrawal applied");

        if account.has_low_funds() {
            self.notifier.notify_funds_low(&account.user.email).await;
        }

        self.store.update(&account).await
    }
}
