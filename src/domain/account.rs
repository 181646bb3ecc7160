use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{AccountError, User};

/// A ledger account holding the owner's spendable balance plus two running
/// counters: the cumulative amount withdrawn and the cumulative amount paid in
/// since the account was opened.
///
/// Pay-ins are capped at [`Account::PAY_IN_LIMIT`] for the lifetime of the
/// account. The balance may never go negative as the result of a withdrawal.
///
/// The account is constructed fully-formed by whatever loads it from storage
/// and mutated in place; both mutators either fully apply or fully reject,
/// leaving the account untouched on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub user: User,
    pub balance: Decimal,
    pub withdrawn: Decimal,
    pub paid_in: Decimal,
}

impl Account {
    /// Ceiling on cumulative pay-ins per account.
    pub const PAY_IN_LIMIT: Decimal = dec!(4000);

    /// Below this balance the account is considered low on funds; the same
    /// figure is the headroom under which pay-ins count as approaching the
    /// limit.
    pub const LOW_FUNDS_THRESHOLD: Decimal = dec!(500);

    pub fn new(id: Uuid, user: User, balance: Decimal, withdrawn: Decimal, paid_in: Decimal) -> Self {
        Self {
            id,
            user,
            balance,
            withdrawn,
            paid_in,
        }
    }

    /// Debit `amount` from the balance.
    ///
    /// Fails with [`AccountError::InsufficientFunds`] if the balance would go
    /// negative, leaving the account unchanged.
    ///
    /// The `withdrawn` counter runs negative: every withdrawal subtracts the
    /// amount, statement-style, and no floor is enforced on it.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let updated_balance = self.balance - amount;
        if updated_balance < Decimal::ZERO {
            return Err(AccountError::InsufficientFunds {
                amount,
                balance: self.balance,
            });
        }

        self.balance = updated_balance;
        self.withdrawn -= amount;
        Ok(())
    }

    /// Credit `amount` to the balance.
    ///
    /// Fails with [`AccountError::PayInLimitExceeded`] if the cumulative
    /// paid-in total would exceed [`Account::PAY_IN_LIMIT`], leaving the
    /// account unchanged.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let updated_paid_in = self.paid_in + amount;
        if updated_paid_in > Self::PAY_IN_LIMIT {
            return Err(AccountError::PayInLimitExceeded {
                amount,
                paid_in: self.paid_in,
                limit: Self::PAY_IN_LIMIT,
            });
        }

        self.balance += amount;
        self.paid_in = updated_paid_in;
        Ok(())
    }

    /// True when the balance has dropped below the low-funds threshold.
    pub fn has_low_funds(&self) -> bool {
        self.balance < Self::LOW_FUNDS_THRESHOLD
    }

    /// True when less than the threshold amount of pay-in headroom remains.
    pub fn is_approaching_pay_in_limit(&self) -> bool {
        Self::PAY_IN_LIMIT - self.paid_in < Self::LOW_FUNDS_THRESHOLD
    }
}
