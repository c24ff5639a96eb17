//! Empty-payload detection and the shared log-and-skip policy

use crate::client::models::{
    BillingPaymentsBody, BillingSubscriptionsBody, DevicesBody, NetworkBody, ProfilesBody,
    QueryStatsBody, ServiceCategoriesBody,
};
use crate::error::Error;

pub(crate) const WARN_SKIP_EMPTY_DATA: &str = "Skipping empty data: ";
pub(crate) const ERR_FETCHING_METRICS: &str = "Error fetching metrics: ";
pub(crate) const ERR_FETCHING_PERSONAL_METRICS: &str =
    "Error fetching metrics for personal instance: ";
pub(crate) const ERR_FETCHING_MAIN_ORG_METRICS: &str =
    "Error fetching metrics for main organization: ";
pub(crate) const ERR_FETCHING_SUB_ORG_METRICS: &str = "Error fetching metrics for sub organization ID: ";
pub(crate) const LOG_SKIP_ORG_SCRAPING: &str =
    "Running in personal mode. Skipping the scraping metrics of the organizations.";
pub(crate) const LOG_NOT_FOUND_MAIN_ORG: &str =
    "Not found main organization. Skipping the scraping metrics of the main organization.";
pub(crate) const LOG_NOT_FOUND_SUB_ORGS: &str =
    "Not found sub organizations. Skipping the scraping metrics of the sub organizations.";

/// Payloads whose primary collection may come back empty.
pub trait HasEmptyCollection {
    fn is_empty_collection(&self) -> bool;
}

impl HasEmptyCollection for BillingPaymentsBody {
    fn is_empty_collection(&self) -> bool {
        self.payments.is_empty()
    }
}

impl HasEmptyCollection for BillingSubscriptionsBody {
    fn is_empty_collection(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl HasEmptyCollection for DevicesBody {
    fn is_empty_collection(&self) -> bool {
        self.devices.is_empty()
    }
}

impl HasEmptyCollection for NetworkBody {
    fn is_empty_collection(&self) -> bool {
        self.network.is_empty()
    }
}

impl HasEmptyCollection for ProfilesBody {
    fn is_empty_collection(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl HasEmptyCollection for ServiceCategoriesBody {
    fn is_empty_collection(&self) -> bool {
        self.categories.is_empty()
    }
}

impl HasEmptyCollection for QueryStatsBody {
    fn is_empty_collection(&self) -> bool {
        self.queries.is_empty()
    }
}

/// Warn and return true when `payload` has nothing to emit.
pub fn skip_if_empty<T>(prefix: &str, payload: &T) -> bool
where
    T: HasEmptyCollection + std::fmt::Debug,
{
    if payload.is_empty_collection() {
        log::warn!("{}: {}{:?}", prefix, WARN_SKIP_EMPTY_DATA, payload);
        return true;
    }
    false
}

/// Which scope a failed fetch was addressing
#[derive(Debug, Clone, Copy)]
pub enum FetchScope<'a> {
    Account,
    Personal,
    MainOrganization,
    SubOrganization(&'a str),
}

/// Which cached organization lookup failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgLookup {
    Main,
    Sub,
}

/// Log a failed organization lookup at info, with the cause at debug.
///
/// A personal API key in business mode fails these lookups on every scrape.
pub fn log_lookup_miss(prefix: &str, lookup: OrgLookup, err: &Error) {
    let (message, what) = match lookup {
        OrgLookup::Main => (LOG_NOT_FOUND_MAIN_ORG, "main organization"),
        OrgLookup::Sub => (LOG_NOT_FOUND_SUB_ORGS, "sub organization"),
    };
    log::info!("{}: {}", prefix, message);
    log::debug!("{}: {} lookup failed: {}", prefix, what, err);
}

/// Log a fetch failure at error severity with the domain prefix.
pub fn log_fetch_error(prefix: &str, scope: FetchScope<'_>, err: &Error) {
    match scope {
        FetchScope::Account => log::error!("{}: {}{}", prefix, ERR_FETCHING_METRICS, err),
        FetchScope::Personal => {
            log::error!("{}: {}{}", prefix, ERR_FETCHING_PERSONAL_METRICS, err)
        }
        FetchScope::MainOrganization => {
            log::error!("{}: {}{}", prefix, ERR_FETCHING_MAIN_ORG_METRICS, err)
        }
        FetchScope::SubOrganization(id) => {
            log::error!("{}: {}{}: {}", prefix, ERR_FETCHING_SUB_ORG_METRICS, id, err)
        }
    }
}
