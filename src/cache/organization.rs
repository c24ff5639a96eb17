//! Memoized organization lookups for one scrape pass

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::client::ControlDApi;
use crate::client::models::{Organization, SubOrganizationsBody};
use crate::error::Result;

/// Write-once slots for the main organization and sub-organization lookups.
///
/// Each slot has its own lock, held across the upstream fetch so concurrent
/// callers of the same accessor share one request. A failed fetch leaves the
/// slot empty and the next caller tries again.
pub struct OrganizationCache<'a> {
    client: &'a dyn ControlDApi,
    main: Mutex<Option<Arc<Organization>>>,
    subs: Mutex<Option<Arc<SubOrganizationsBody>>>,
}

impl<'a> OrganizationCache<'a> {
    /// Create an empty cache bound to `client`.
    pub fn new(client: &'a dyn ControlDApi) -> Self {
        Self {
            client,
            main: Mutex::new(None),
            subs: Mutex::new(None),
        }
    }

    /// Get the main organization, fetching it on first use.
    pub async fn main_organization(&self) -> Result<Arc<Organization>> {
        let mut slot = self.main.lock().await;
        if let Some(ref org) = *slot {
            return Ok(Arc::clone(org));
        }

        let org = Arc::new(self.client.main_organization().await?);
        log::debug!("Cached main organization {}", org.pk);
        *slot = Some(Arc::clone(&org));
        Ok(org)
    }

    /// Get the sub-organizations, fetching them on first use.
    pub async fn sub_organizations(&self) -> Result<Arc<SubOrganizationsBody>> {
        let mut slot = self.subs.lock().await;
        if let Some(ref subs) = *slot {
            return Ok(Arc::clone(subs));
        }

        let subs = Arc::new(self.client.sub_organizations().await?);
        log::debug!(
            "Cached {} sub organizations",
            subs.sub_organizations.len()
        );
        *slot = Some(Arc::clone(&subs));
        Ok(subs)
    }
}
