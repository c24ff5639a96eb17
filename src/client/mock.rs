//! Mock Control D API client for testing
//!
//! Provides an in-memory implementation of the API traits for unit testing
//! collectors without making real API calls.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{AccountApi, OrganizationApi, ResourceApi};
use super::models::{
    BillingPaymentsBody, BillingSubscriptionsBody, DevicesBody, NetworkBody, Organization,
    ProfilesBody, QueryStatsBody, ServiceCategoriesBody, SubOrganizationsBody,
};
use crate::error::{ApiError, Result};

/// Scope key for requests without an org override
const ACCOUNT_SCOPE: &str = "";

/// Mock API client for testing.
///
/// Configure responses via builder methods, then pass `&mock` wherever a
/// `&dyn ControlDApi` is expected. Scoped resources are keyed by sub-org id;
/// use [`MockControlDClient::with_devices`] and friends with `None` for the
/// account's own scope. Unconfigured scopes return an empty payload.
///
/// # Example
/// ```ignore
/// let mock = MockControlDClient::new()
///     .with_main_organization(OrganizationBuilder::new("org-1").build())
///     .with_devices(None, devices(&[("Router", 3)]))
///     .failing("devices", Some("sub-2"));
/// ```
#[derive(Default)]
pub struct MockControlDClient {
    /// Main organization; `None` behaves like a personal account
    main_organization: Option<Organization>,
    /// Sub-organizations; `None` makes the lookup fail
    sub_organizations: Option<SubOrganizationsBody>,
    payments: BillingPaymentsBody,
    subscriptions: BillingSubscriptionsBody,
    network: NetworkBody,
    devices: HashMap<String, DevicesBody>,
    profiles: HashMap<String, ProfilesBody>,
    service_categories: HashMap<String, ServiceCategoriesBody>,
    query_stats: HashMap<String, QueryStatsBody>,
    /// (method, scope) pairs that fail
    failures: HashSet<(String, String)>,
    /// Track number of calls for verification
    call_count: Mutex<CallCounts>,
    /// Captured requests for test assertions
    captured_requests: Mutex<Vec<CapturedRequest>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub main_organization: usize,
    pub sub_organizations: usize,
    pub billing_payments: usize,
    pub billing_subscriptions: usize,
    pub network: usize,
    pub devices: usize,
    pub profiles: usize,
    pub service_categories: usize,
    pub dns_queries_report: usize,
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "devices", "profiles")
    pub method: String,
    /// Sub-organization override if provided
    pub org_id: Option<String>,
    /// Analytics region for report requests
    pub stats_endpoint: Option<String>,
}

fn scope_key(org_id: Option<&str>) -> String {
    org_id.unwrap_or(ACCOUNT_SCOPE).to_string()
}

impl MockControlDClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the main organization (turns the account into a business account).
    pub fn with_main_organization(mut self, org: Organization) -> Self {
        self.main_organization = Some(org);
        self
    }

    /// Configure the sub-organization list.
    pub fn with_sub_organizations(mut self, subs: SubOrganizationsBody) -> Self {
        self.sub_organizations = Some(subs);
        self
    }

    pub fn with_payments(mut self, payments: BillingPaymentsBody) -> Self {
        self.payments = payments;
        self
    }

    pub fn with_subscriptions(mut self, subscriptions: BillingSubscriptionsBody) -> Self {
        self.subscriptions = subscriptions;
        self
    }

    pub fn with_network(mut self, network: NetworkBody) -> Self {
        self.network = network;
        self
    }

    pub fn with_devices(mut self, org_id: Option<&str>, devices: DevicesBody) -> Self {
        self.devices.insert(scope_key(org_id), devices);
        self
    }

    pub fn with_profiles(mut self, org_id: Option<&str>, profiles: ProfilesBody) -> Self {
        self.profiles.insert(scope_key(org_id), profiles);
        self
    }

    pub fn with_service_categories(
        mut self,
        org_id: Option<&str>,
        categories: ServiceCategoriesBody,
    ) -> Self {
        self.service_categories.insert(scope_key(org_id), categories);
        self
    }

    pub fn with_query_stats(mut self, org_id: Option<&str>, stats: QueryStatsBody) -> Self {
        self.query_stats.insert(scope_key(org_id), stats);
        self
    }

    /// Make `method` fail for the given scope on every call.
    ///
    /// Account-scoped methods (`billing_payments`, `network`, ...) and the
    /// organization lookups use `None`.
    pub fn failing(mut self, method: &str, org_id: Option<&str>) -> Self {
        self.failures
            .insert((method.to_string(), scope_key(org_id)));
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Record the request and return the scripted failure, if any.
    async fn record(
        &self,
        method: &str,
        org_id: Option<&str>,
        stats_endpoint: Option<&str>,
    ) -> Result<()> {
        self.captured_requests.lock().await.push(CapturedRequest {
            method: method.to_string(),
            org_id: org_id.map(|s| s.to_string()),
            stats_endpoint: stats_endpoint.map(|s| s.to_string()),
        });

        if self
            .failures
            .contains(&(method.to_string(), scope_key(org_id)))
        {
            return Err(ApiError::ServerError(format!("mock failure: {}", method)).into());
        }
        Ok(())
    }
}

// ============================================================================
// OrganizationApi Implementation
// ============================================================================

#[async_trait]
impl OrganizationApi for MockControlDClient {
    async fn main_organization(&self) -> Result<Organization> {
        self.call_count.lock().await.main_organization += 1;
        self.record("main_organization", None, None).await?;

        self.main_organization.clone().ok_or_else(|| {
            ApiError::Unsuccessful("/organizations/organization".to_string()).into()
        })
    }

    async fn sub_organizations(&self) -> Result<SubOrganizationsBody> {
        self.call_count.lock().await.sub_organizations += 1;
        self.record("sub_organizations", None, None).await?;

        self.sub_organizations.clone().ok_or_else(|| {
            ApiError::Unsuccessful("/organizations/sub_organizations".to_string()).into()
        })
    }
}

// ============================================================================
// AccountApi Implementation
// ============================================================================

#[async_trait]
impl AccountApi for MockControlDClient {
    async fn billing_payments(&self) -> Result<BillingPaymentsBody> {
        self.call_count.lock().await.billing_payments += 1;
        self.record("billing_payments", None, None).await?;
        Ok(self.payments.clone())
    }

    async fn billing_subscriptions(&self) -> Result<BillingSubscriptionsBody> {
        self.call_count.lock().await.billing_subscriptions += 1;
        self.record("billing_subscriptions", None, None).await?;
        Ok(self.subscriptions.clone())
    }

    async fn network(&self) -> Result<NetworkBody> {
        self.call_count.lock().await.network += 1;
        self.record("network", None, None).await?;
        Ok(self.network.clone())
    }
}

// ============================================================================
// ResourceApi Implementation
// ============================================================================

#[async_trait]
impl ResourceApi for MockControlDClient {
    async fn devices(&self, org_id: Option<&str>) -> Result<DevicesBody> {
        self.call_count.lock().await.devices += 1;
        self.record("devices", org_id, None).await?;
        Ok(self
            .devices
            .get(&scope_key(org_id))
            .cloned()
            .unwrap_or_default())
    }

    async fn profiles(&self, org_id: Option<&str>) -> Result<ProfilesBody> {
        self.call_count.lock().await.profiles += 1;
        self.record("profiles", org_id, None).await?;
        Ok(self
            .profiles
            .get(&scope_key(org_id))
            .cloned()
            .unwrap_or_default())
    }

    async fn service_categories(&self, org_id: Option<&str>) -> Result<ServiceCategoriesBody> {
        self.call_count.lock().await.service_categories += 1;
        self.record("service_categories", org_id, None).await?;
        Ok(self
            .service_categories
            .get(&scope_key(org_id))
            .cloned()
            .unwrap_or_default())
    }

    async fn dns_queries_report(
        &self,
        stats_endpoint: &str,
        org_id: Option<&str>,
    ) -> Result<QueryStatsBody> {
        self.call_count.lock().await.dns_queries_report += 1;
        self.record("dns_queries_report", org_id, Some(stats_endpoint))
            .await?;
        Ok(self
            .query_stats
            .get(&scope_key(org_id))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{OrganizationBuilder, devices};

    #[tokio::test]
    async fn test_mock_returns_scoped_devices() {
        let mock = MockControlDClient::new()
            .with_devices(None, devices(&[("Home", 2)]))
            .with_devices(Some("sub-1"), devices(&[("Office", 7)]));

        let own = mock.devices(None).await.unwrap();
        let sub = mock.devices(Some("sub-1")).await.unwrap();
        let unknown = mock.devices(Some("sub-9")).await.unwrap();

        assert_eq!(own.devices[0].name, "Home");
        assert_eq!(sub.devices[0].client_count, 7);
        assert!(unknown.devices.is_empty());
        assert_eq!(mock.call_counts().await.devices, 3);
    }

    #[tokio::test]
    async fn test_mock_failure_is_scoped() {
        let mock = MockControlDClient::new().failing("profiles", Some("sub-2"));

        assert!(mock.profiles(Some("sub-1")).await.is_ok());
        assert!(mock.profiles(Some("sub-2")).await.is_err());
        assert!(mock.profiles(None).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_without_organization_fails_lookup() {
        let mock = MockControlDClient::new();
        assert!(mock.main_organization().await.is_err());

        let mock = mock.with_main_organization(OrganizationBuilder::new("org-1").build());
        assert_eq!(mock.main_organization().await.unwrap().pk, "org-1");
    }

    #[tokio::test]
    async fn test_mock_captures_requests() {
        let mock = MockControlDClient::new();
        let _ = mock.dns_queries_report("europe", Some("sub-1")).await;

        let requests = mock.captured_requests().await;
        assert_eq!(
            requests,
            vec![CapturedRequest {
                method: "dns_queries_report".to_string(),
                org_id: Some("sub-1".to_string()),
                stats_endpoint: Some("europe".to_string()),
            }]
        );
    }
}
