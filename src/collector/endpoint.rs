//! Endpoint (device) client counts

use async_trait::async_trait;

use super::ScrapePass;
use super::scoped::{ScopedDomain, collect_scoped};
use crate::client::ControlDApi;
use crate::client::models::{DevicesBody, Organization};
use crate::error::Result;
use crate::metrics::MetricSink;
use crate::metrics::catalog::ENDPOINT_CLIENTS_TOTAL;

const LOG_PREFIX: &str = "endpoint";

struct Endpoints;

#[async_trait]
impl ScopedDomain for Endpoints {
    type Payload = DevicesBody;

    fn name(&self) -> &'static str {
        LOG_PREFIX
    }

    async fn fetch_personal(&self, client: &dyn ControlDApi) -> Result<DevicesBody> {
        client.devices(None).await
    }

    async fn fetch_sub(
        &self,
        client: &dyn ControlDApi,
        _org: &Organization,
        sub_org_id: &str,
    ) -> Result<DevicesBody> {
        client.devices(Some(sub_org_id)).await
    }

    fn emit(&self, payload: &DevicesBody, org_id: &str, sink: &mut MetricSink) {
        for device in &payload.devices {
            sink.push(
                &ENDPOINT_CLIENTS_TOTAL,
                device.client_count as f64,
                [device.name.as_str(), org_id],
            );
        }
    }
}

/// Emit `endpoint_clients_total` for every device in scope.
pub async fn collect(pass: &ScrapePass<'_>, sink: &mut MetricSink) {
    collect_scoped(&Endpoints, pass, sink).await;
}
