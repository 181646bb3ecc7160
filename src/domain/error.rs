use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Failures raised by the account mutators themselves.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AccountError {
    #[error("insufficient funds: attempted to withdraw {amount} with balance {balance}")]
    InsufficientFunds { amount: Decimal, balance: Decimal },
    #[error("pay-in limit of {limit} reached: {paid_in} already paid in, attempted to deposit {amount}")]
    PayInLimitExceeded {
        amount: Decimal,
        paid_in: Decimal,
        limit: Decimal,
    },
}

/// Failures raised by the account store collaborator.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreError {
    #[error("no account found for id {0}")]
    AccountNotFound(Uuid),
}

/// Everything a use case can surface to its caller.
///
/// Domain errors propagate unchanged; nothing is caught, retried or wrapped
/// inside the core. Callers decide presentation.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MoneyboxError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
