//! Service category sizes

use async_trait::async_trait;

use super::ScrapePass;
use super::scoped::{ScopedDomain, collect_scoped};
use crate::client::ControlDApi;
use crate::client::models::{Organization, ServiceCategoriesBody};
use crate::error::Result;
use crate::metrics::MetricSink;
use crate::metrics::catalog::SERVICE_CATEGORIES_TOTAL;

const LOG_PREFIX: &str = "service";

struct ServiceCategories;

#[async_trait]
impl ScopedDomain for ServiceCategories {
    type Payload = ServiceCategoriesBody;

    fn name(&self) -> &'static str {
        LOG_PREFIX
    }

    async fn fetch_personal(&self, client: &dyn ControlDApi) -> Result<ServiceCategoriesBody> {
        client.service_categories(None).await
    }

    async fn fetch_sub(
        &self,
        client: &dyn ControlDApi,
        _org: &Organization,
        sub_org_id: &str,
    ) -> Result<ServiceCategoriesBody> {
        client.service_categories(Some(sub_org_id)).await
    }

    fn emit(&self, payload: &ServiceCategoriesBody, org_id: &str, sink: &mut MetricSink) {
        for category in &payload.categories {
            // name carries the category PK, e.g. "audio".
            sink.push(
                &SERVICE_CATEGORIES_TOTAL,
                category.count as f64,
                [category.pk.as_str(), org_id],
            );
        }
    }
}

/// Emit `service_categories_total` for every category in scope.
pub async fn collect(pass: &ScrapePass<'_>, sink: &mut MetricSink) {
    collect_scoped(&ServiceCategories, pass, sink).await;
}
