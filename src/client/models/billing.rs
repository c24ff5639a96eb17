//! Billing models

use serde::Deserialize;

use super::null_as_default;

/// Body of `/billing/payments`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillingPaymentsBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub payments: Vec<Payment>,
}

/// A single billing payment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Payment {
    /// Payment primary key
    #[serde(rename = "PK", default, deserialize_with = "null_as_default")]
    pub pk: String,

    /// Amount charged, in USD
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,

    /// Amount charged in the payment's own currency
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency_amount: f64,

    /// ISO currency code as sent by the API (usually lower-case)
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub transaction: Transaction,
}

/// Payment processor transaction state
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Transaction {
    #[serde(rename = "tx_status", default, deserialize_with = "null_as_default")]
    pub status: i64,

    #[serde(rename = "tx_refunded", default, deserialize_with = "null_as_default")]
    pub refunded: i64,
}

/// Body of `/billing/subscriptions`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillingSubscriptionsBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub subscriptions: Vec<Subscription>,
}

/// An active or past subscription
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Subscription {
    /// Subscription primary key
    #[serde(rename = "PK", default, deserialize_with = "null_as_default")]
    pub pk: String,

    /// Unix timestamp of the next bill
    #[serde(default, deserialize_with = "null_as_default")]
    pub next_bill: i64,
}
