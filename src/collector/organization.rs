//! Main and sub-organization size metrics (business accounts only)

use super::guard::{LOG_SKIP_ORG_SCRAPING, OrgLookup, log_lookup_miss};
use super::{Mode, ScrapePass};
use crate::metrics::MetricSink;
use crate::metrics::catalog::{
    ORGANIZATION_MEMBERS_TOTAL, ORGANIZATION_PROFILES_TOTAL, ORGANIZATION_ROUTERS_TOTAL,
    ORGANIZATION_SUB_ORGS_TOTAL, ORGANIZATION_USERS_TOTAL, SUB_ORGANIZATION_MEMBERS_TOTAL,
    SUB_ORGANIZATION_PROFILES_TOTAL, SUB_ORGANIZATION_ROUTERS_TOTAL,
    SUB_ORGANIZATION_USERS_TOTAL,
};

const LOG_PREFIX: &str = "organization";
const SUB_LOG_PREFIX: &str = "sub-organization";

/// Emit five counts for the main organization and four per sub-organization.
///
/// Both lookups go through the pass cache, so the org-scoped collectors that
/// run afterwards reuse them.
pub async fn collect(pass: &ScrapePass<'_>, sink: &mut MetricSink) {
    if pass.mode() == Mode::Personal {
        log::debug!("{}: {}", LOG_PREFIX, LOG_SKIP_ORG_SCRAPING);
        return;
    }

    let org = match pass.cache().main_organization().await {
        Ok(org) => org,
        Err(e) => {
            log_lookup_miss(LOG_PREFIX, OrgLookup::Main, &e);
            return;
        }
    };

    let labels = [org.name.as_str(), org.pk.as_str()];
    sink.push(&ORGANIZATION_MEMBERS_TOTAL, org.members.count as f64, labels);
    sink.push(&ORGANIZATION_PROFILES_TOTAL, org.profiles.count as f64, labels);
    sink.push(&ORGANIZATION_USERS_TOTAL, org.users.count as f64, labels);
    sink.push(&ORGANIZATION_ROUTERS_TOTAL, org.routers.count as f64, labels);
    sink.push(
        &ORGANIZATION_SUB_ORGS_TOTAL,
        org.sub_organizations.count as f64,
        labels,
    );

    let subs = match pass.cache().sub_organizations().await {
        Ok(subs) => subs,
        Err(e) => {
            log_lookup_miss(SUB_LOG_PREFIX, OrgLookup::Sub, &e);
            return;
        }
    };

    for sub in &subs.sub_organizations {
        let labels = [sub.name.as_str(), sub.pk.as_str()];
        sink.push(&SUB_ORGANIZATION_MEMBERS_TOTAL, sub.members.count as f64, labels);
        sink.push(&SUB_ORGANIZATION_PROFILES_TOTAL, sub.profiles.count as f64, labels);
        sink.push(&SUB_ORGANIZATION_USERS_TOTAL, sub.users.count as f64, labels);
        sink.push(&SUB_ORGANIZATION_ROUTERS_TOTAL, sub.routers.count as f64, labels);
    }
}
