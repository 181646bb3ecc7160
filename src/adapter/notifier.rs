use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::port::Notifier;

/// Notifier that emits tracing events instead of sending anything.
///
/// The default adapter for hosts that have not wired a real transport yet.
pub struct LoggingNotifier;

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn notify_funds_low(&self, email: &str) {
        warn!(email, "account balance dropped below the low-funds threshold");
    }

    async fn notify_approaching_pay_in_limit(&self, email: &str) {
        info!(email, "account is approaching its pay-in limit");
    }
}

/// Notifier that records every call so tests can assert exactly which
/// notifications fired, and how often.
pub struct RecordingNotifier {
    funds_low: RwLock<Vec<String>>,
    approaching_limit: RwLock<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            funds_low: RwLock::new(Vec::new()),
            approaching_limit: RwLock::new(Vec::new()),
        }
    }

    /// Emails notified of low funds, in call order.
    pub async fn funds_low_calls(&self) -> Vec<String> {
        self.funds_low.read().await.clone()
    }

    /// Emails notified of approaching the pay-in limit, in call order.
    pub async fn approaching_limit_calls(&self) -> Vec<String> {
        self.approaching_limit.read().await.clone()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_funds_low(&self, email: &str) {
        self.funds_low.write().await.push(email.to_string());
    }

    async fn notify_approaching_pay_in_limit(&self, email: &str) {
        self.approaching_limit.write().await.push(email.to_string());
    }
}
