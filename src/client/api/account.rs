//! Account-scoped API trait

use async_trait::async_trait;

use crate::client::models::{BillingPaymentsBody, BillingSubscriptionsBody, NetworkBody};
use crate::error::Result;

/// Operations that always address the caller's own account
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// List billing payments
    async fn billing_payments(&self) -> Result<BillingPaymentsBody>;

    /// List billing subscriptions
    async fn billing_subscriptions(&self) -> Result<BillingSubscriptionsBody>;

    /// Fetch health status of every point of presence
    async fn network(&self) -> Result<NetworkBody>;
}
