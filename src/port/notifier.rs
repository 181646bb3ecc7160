use async_trait::async_trait;

/// Notifier is the outbound notification boundary.
///
/// Both callbacks are informational and fire-and-forget: delivery, retry or
/// drop is the transport's responsibility and is never observed by the core.
/// Notifications carry only the owner's email.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// The account's balance has dropped below the low-funds threshold.
    async fn notify_funds_low(&self, email: &str);

    /// The account has less than the threshold amount of pay-in headroom left.
    async fn notify_approaching_pay_in_limit(&self, email: &str);
}
