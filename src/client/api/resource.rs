//! Organization-scopable resource API trait

use async_trait::async_trait;

use crate::client::models::{DevicesBody, ProfilesBody, QueryStatsBody, ServiceCategoriesBody};
use crate::error::Result;

/// Resource listings that can target a specific organization.
///
/// `org_id = None` addresses the caller's own scope (the personal account, or
/// the main organization of a business account). `Some(id)` forces the
/// request onto that sub-organization.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    // ========================================================================
    // Main API
    // ========================================================================

    /// List endpoints (devices)
    async fn devices(&self, org_id: Option<&str>) -> Result<DevicesBody>;

    /// List filtering profiles
    async fn profiles(&self, org_id: Option<&str>) -> Result<ProfilesBody>;

    /// List service categories
    async fn service_categories(&self, org_id: Option<&str>) -> Result<ServiceCategoriesBody>;

    // ========================================================================
    // Analytics API
    // ========================================================================

    /// Fetch the per-minute DNS query time series, bucketed by verdict.
    ///
    /// `stats_endpoint` selects the analytics region (e.g. `america`).
    async fn dns_queries_report(
        &self,
        stats_endpoint: &str,
        org_id: Option<&str>,
    ) -> Result<QueryStatsBody>;
}
