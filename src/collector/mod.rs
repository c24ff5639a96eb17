//! Scrape orchestration and domain collectors
//!
//! A [`ScrapePass`] is built for every scrape request. It binds the shared
//! API client to a fresh [`OrganizationCache`] and runs each domain collector
//! in a fixed order. Collectors never fail the pass: fetch errors are logged
//! and the affected domain or sub-organization simply contributes nothing.

use std::fmt;

use crate::cache::OrganizationCache;
use crate::client::ControlDApi;
use crate::metrics::MetricSink;

pub mod billing;
pub mod endpoint;
pub mod guard;
pub mod network;
pub mod organization;
pub mod profile;
pub mod scoped;
pub mod service;
pub mod stats;

/// `orgId` label value for personal accounts
pub const PLACEHOLDER_ORG_ID: &str = "000000000";

/// Account flavor the exporter scrapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Single account without organizations
    Personal,
    /// Main organization plus sub-organizations
    Business,
}

impl Mode {
    pub fn from_business_flag(business: bool) -> Self {
        if business {
            Mode::Business
        } else {
            Mode::Personal
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Personal => write!(f, "personal"),
            Mode::Business => write!(f, "business"),
        }
    }
}

/// One collection pass.
///
/// Owns the organization cache for its lifetime; nothing is shared with other
/// passes except the API client.
pub struct ScrapePass<'a> {
    client: &'a dyn ControlDApi,
    cache: OrganizationCache<'a>,
    mode: Mode,
}

impl<'a> ScrapePass<'a> {
    pub fn new(client: &'a dyn ControlDApi, mode: Mode) -> Self {
        Self {
            client,
            cache: OrganizationCache::new(client),
            mode,
        }
    }

    pub fn client(&self) -> &'a dyn ControlDApi {
        self.client
    }

    pub fn cache(&self) -> &OrganizationCache<'a> {
        &self.cache
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Run every domain collector and push their samples into `sink`.
    pub async fn collect(&self, sink: &mut MetricSink) {
        log::debug!("Starting {} scrape pass", self.mode);

        organization::collect(self, sink).await;
        billing::collect(self, sink).await;
        endpoint::collect(self, sink).await;
        network::collect(self, sink).await;
        profile::collect(self, sink).await;
        service::collect(self, sink).await;
        stats::collect(self, sink).await;

        log::debug!("Scrape pass finished with {} samples", sink.len());
    }
}
