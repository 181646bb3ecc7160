use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::domain::MoneyboxError;
use crate::port::{AccountStore, Notifier};

/// Moves money from one account to another.
///
/// The source withdrawal and destination deposit are each a hard gate: if
/// either fails, the error propagates at once and no account is persisted and
/// no notification fires. In particular a failed deposit leaves the source
/// mutated in memory but never written back, so no partial state reaches the
/// store.
///
/// The two updates that follow a fully successful transfer are independent
/// calls with no transaction around them; a store failure between them leaves
/// a half-applied transfer. That is an accepted limitation of this core, not
/// something it papers over.
pub struct TransferMoney {
    store: Arc<dyn AccountStore>,
    notifier: Arc<dyn Notifier>,
}

impl TransferMoney {
    pub fn new(store: Arc<dyn AccountStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    pub async fn execute(
        &self,
        from_account_id: Uuid,
        to_account_id: Uuid,
        amount: Decimal,
    ) -> Result<(), MoneyboxError> {
        let mut source = self.store.get_account_by_id(from_account_id).await?;
        let mut destination = self.store.get_account_by_id(to_account_id).await?;

        source.withdraw(amount)?;
        destination.deposit(amount)?;
        debug!(
            %from_account_id,
            %to_account_id,
            %amount,
            source_balance = %source.balance,
            destination_balance = %destination.balance,
            "transfer applied"
        );

        if source.has_low_funds() {
            self.notifier.notify_funds_low(&source.user.email).await;
        }

        if destination.is_approaching_pay_in_limit() {
            self.notifier
                .notify_approaching_pay_in_limit(&destination.user.email)
                .await;
        }

        self.store.update(&source).await?;
        self.store.update(&destination).await
    }
}
