//! Billing payments and subscriptions

use super::ScrapePass;
use super::guard::{FetchScope, log_fetch_error, skip_if_empty};
use crate::metrics::MetricSink;
use crate::metrics::catalog::{
    BILLING_REFUNDED, BILLING_STATUS, BILLING_SUBSCRIPTION_AMOUNT_TOTAL,
    BILLING_SUBSCRIPTION_NEXTBILL_TIMESTAMP,
};

const PAYMENTS_LOG_PREFIX: &str = "billingPayments";
const SUBSCRIPTIONS_LOG_PREFIX: &str = "billingSubscriptions";

/// Currency label for the `amount` field
const BASE_CURRENCY: &str = "USD";

/// Emit payment and subscription metrics for the account.
///
/// Payments and subscriptions are fetched and guarded independently, in
/// both personal and business mode.
pub async fn collect(pass: &ScrapePass<'_>, sink: &mut MetricSink) {
    collect_payments(pass, sink).await;
    collect_subscriptions(pass, sink).await;
}

async fn collect_payments(pass: &ScrapePass<'_>, sink: &mut MetricSink) {
    let payments = match pass.client().billing_payments().await {
        Ok(payments) => payments,
        Err(e) => {
            log_fetch_error(PAYMENTS_LOG_PREFIX, FetchScope::Account, &e);
            return;
        }
    };

    if skip_if_empty(PAYMENTS_LOG_PREFIX, &payments) {
        return;
    }

    for payment in &payments.payments {
        let id = payment.pk.as_str();
        sink.push(&BILLING_STATUS, payment.transaction.status as f64, [id]);
        sink.push(&BILLING_REFUNDED, payment.transaction.refunded as f64, [id]);
        sink.push(
            &BILLING_SUBSCRIPTION_AMOUNT_TOTAL,
            payment.amount,
            [id, BASE_CURRENCY],
        );
        sink.push(
            &BILLING_SUBSCRIPTION_AMOUNT_TOTAL,
            payment.currency_amount,
            [id.to_string(), payment.currency.to_uppercase()],
        );
    }
}

async fn collect_subscriptions(pass: &ScrapePass<'_>, sink: &mut MetricSink) {
    let subscriptions = match pass.client().billing_subscriptions().await {
        Ok(subscriptions) => subscriptions,
        Err(e) => {
            log_fetch_error(SUBSCRIPTIONS_LOG_PREFIX, FetchScope::Account, &e);
            return;
        }
    };

    if skip_if_empty(SUBSCRIPTIONS_LOG_PREFIX, &subscriptions) {
        return;
    }

    for subscription in &subscriptions.subscriptions {
        sink.push(
            &BILLING_SUBSCRIPTION_NEXTBILL_TIMESTAMP,
            subscription.next_bill as f64,
            [subscription.pk.as_str()],
        );
    }
}
