//! Filtering profile rule and filter counts

use async_trait::async_trait;

use super::ScrapePass;
use super::scoped::{ScopedDomain, collect_scoped};
use crate::client::ControlDApi;
use crate::client::models::{Organization, ProfilesBody};
use crate::error::Result;
use crate::metrics::MetricSink;
use crate::metrics::catalog::{
    PROFILE_CONTENT_FILTERS_TOTAL, PROFILE_ENABLED_OPTION_TOTAL, PROFILE_GROUPS_TOTAL,
    PROFILE_IP_FILTERS_TOTAL, PROFILE_PRESET_FILTERS_TOTAL, PROFILE_RULES_TOTAL,
    PROFILE_SERVICES_TOTAL,
};

const LOG_PREFIX: &str = "profile";

struct Profiles;

#[async_trait]
impl ScopedDomain for Profiles {
    type Payload = ProfilesBody;

    fn name(&self) -> &'static str {
        LOG_PREFIX
    }

    async fn fetch_personal(&self, client: &dyn ControlDApi) -> Result<ProfilesBody> {
        client.profiles(None).await
    }

    async fn fetch_sub(
        &self,
        client: &dyn ControlDApi,
        _org: &Organization,
        sub_org_id: &str,
    ) -> Result<ProfilesBody> {
        client.profiles(Some(sub_org_id)).await
    }

    fn emit(&self, payload: &ProfilesBody, org_id: &str, sink: &mut MetricSink) {
        for profile in &payload.profiles {
            let summary = &profile.profile;
            let labels = [profile.name.as_str(), org_id];

            sink.push(&PROFILE_PRESET_FILTERS_TOTAL, summary.flt.count as f64, labels);
            sink.push(&PROFILE_CONTENT_FILTERS_TOTAL, summary.cflt.count as f64, labels);
            // ip_filters is reported from cflt, not ipflt.
            sink.push(&PROFILE_IP_FILTERS_TOTAL, summary.cflt.count as f64, labels);
            sink.push(&PROFILE_RULES_TOTAL, summary.rule.count as f64, labels);
            sink.push(&PROFILE_SERVICES_TOTAL, summary.svc.count as f64, labels);
            sink.push(&PROFILE_GROUPS_TOTAL, summary.grp.count as f64, labels);
            sink.push(&PROFILE_ENABLED_OPTION_TOTAL, summary.opt.count as f64, labels);
        }
    }
}

/// Emit the seven per-profile counts for every profile in scope.
pub async fn collect(pass: &ScrapePass<'_>, sink: &mut MetricSink) {
    collect_scoped(&Profiles, pass, sink).await;
}
