//! Personal / main-organization / sub-organization fan-out
//!
//! Endpoint, profile, service and stats all walk the same shape: one fetch
//! for a personal account, or one for the main organization followed by one
//! per sub-organization for a business account. [`collect_scoped`] owns that
//! walk; each domain plugs in its fetches and emission through
//! [`ScopedDomain`].

use async_trait::async_trait;

use super::guard::{
    FetchScope, HasEmptyCollection, LOG_SKIP_ORG_SCRAPING, OrgLookup, log_fetch_error,
    log_lookup_miss, skip_if_empty,
};
use super::{Mode, PLACEHOLDER_ORG_ID, ScrapePass};
use crate::client::ControlDApi;
use crate::client::models::Organization;
use crate::error::Result;
use crate::metrics::MetricSink;

/// Per-domain strategy for an organization-scoped collector.
#[async_trait]
pub trait ScopedDomain: Send + Sync {
    type Payload: HasEmptyCollection + std::fmt::Debug + Send;

    /// Log prefix for this domain
    fn name(&self) -> &'static str;

    /// Fetch for a personal account.
    async fn fetch_personal(&self, client: &dyn ControlDApi) -> Result<Self::Payload>;

    /// Fetch for the main organization of a business account.
    async fn fetch_main(
        &self,
        client: &dyn ControlDApi,
        _org: &Organization,
    ) -> Result<Self::Payload> {
        self.fetch_personal(client).await
    }

    /// Fetch for one sub-organization.
    async fn fetch_sub(
        &self,
        client: &dyn ControlDApi,
        org: &Organization,
        sub_org_id: &str,
    ) -> Result<Self::Payload>;

    /// Turn a non-empty payload into samples labelled with `org_id`.
    fn emit(&self, payload: &Self::Payload, org_id: &str, sink: &mut MetricSink);
}

/// Run one organization-scoped domain for the pass.
pub async fn collect_scoped<D: ScopedDomain>(
    domain: &D,
    pass: &ScrapePass<'_>,
    sink: &mut MetricSink,
) {
    let prefix = domain.name();

    if pass.mode() == Mode::Personal {
        match domain.fetch_personal(pass.client()).await {
            Ok(payload) => emit_unless_empty(domain, &payload, PLACEHOLDER_ORG_ID, sink),
            Err(e) => {
                log_fetch_error(prefix, FetchScope::Personal, &e);
                return;
            }
        }
        log::debug!("{}: {}", prefix, LOG_SKIP_ORG_SCRAPING);
        return;
    }

    let org = match pass.cache().main_organization().await {
        Ok(org) => org,
        Err(e) => {
            log_lookup_miss(prefix, OrgLookup::Main, &e);
            return;
        }
    };

    match domain.fetch_main(pass.client(), &org).await {
        Ok(payload) => emit_unless_empty(domain, &payload, &org.pk, sink),
        Err(e) => {
            log_fetch_error(prefix, FetchScope::MainOrganization, &e);
            return;
        }
    }

    let subs = match pass.cache().sub_organizations().await {
        Ok(subs) => subs,
        Err(e) => {
            log_lookup_miss(prefix, OrgLookup::Sub, &e);
            return;
        }
    };

    for sub_org_id in subs.ids() {
        match domain.fetch_sub(pass.client(), &org, &sub_org_id).await {
            Ok(payload) => emit_unless_empty(domain, &payload, &sub_org_id, sink),
            Err(e) => log_fetch_error(prefix, FetchScope::SubOrganization(&sub_org_id), &e),
        }
    }
}

fn emit_unless_empty<D: ScopedDomain>(
    domain: &D,
    payload: &D::Payload,
    org_id: &str,
    sink: &mut MetricSink,
) {
    if skip_if_empty(domain.name(), payload) {
        return;
    }
    domain.emit(payload, org_id, sink);
}
