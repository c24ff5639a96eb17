//! DNS query counts by verdict from the analytics API

use async_trait::async_trait;

use super::ScrapePass;
use super::scoped::{ScopedDomain, collect_scoped};
use crate::client::ControlDApi;
use crate::client::models::{Organization, QueryStatsBody};
use crate::error::Result;
use crate::metrics::MetricSink;
use crate::metrics::catalog::STATS_LAST_QUERIES_COUNT;

const LOG_PREFIX: &str = "stats";

/// Analytics region used for personal accounts
pub const PERSONAL_STATS_ENDPOINT: &str = "america";

/// Human-readable label for a verdict code.
pub fn verdict_label(code: &str) -> &'static str {
    match code {
        "0" => "blocked",
        "1" => "bypassed",
        "3" => "redirected",
        _ => "unknown",
    }
}

struct QueryStats;

#[async_trait]
impl ScopedDomain for QueryStats {
    type Payload = QueryStatsBody;

    fn name(&self) -> &'static str {
        LOG_PREFIX
    }

    async fn fetch_personal(&self, client: &dyn ControlDApi) -> Result<QueryStatsBody> {
        client
            .dns_queries_report(PERSONAL_STATS_ENDPOINT, None)
            .await
    }

    async fn fetch_main(
        &self,
        client: &dyn ControlDApi,
        org: &Organization,
    ) -> Result<QueryStatsBody> {
        client.dns_queries_report(&org.stats_endpoint, None).await
    }

    // Sub-organizations report through the parent's analytics region.
    async fn fetch_sub(
        &self,
        client: &dyn ControlDApi,
        org: &Organization,
        sub_org_id: &str,
    ) -> Result<QueryStatsBody> {
        client
            .dns_queries_report(&org.stats_endpoint, Some(sub_org_id))
            .await
    }

    fn emit(&self, payload: &QueryStatsBody, org_id: &str, sink: &mut MetricSink) {
        let Some(bucket) = payload.queries.first() else {
            return;
        };

        for (code, count) in &bucket.count {
            sink.push(
                &STATS_LAST_QUERIES_COUNT,
                *count as f64,
                [verdict_label(code), org_id],
            );
        }
    }
}

/// Emit `stats_last_queries_count` per verdict from the first bucket of the report.
pub async fn collect(pass: &ScrapePass<'_>, sink: &mut MetricSink) {
    collect_scoped(&QueryStats, pass, sink).await;
}
