//! Control D API client implementation

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode, header};
use serde::de::DeserializeOwned;

use super::api::{AccountApi, OrganizationApi, ResourceApi};
use super::models::{
    BillingPaymentsBody, BillingSubscriptionsBody, DevicesBody, Envelope, NetworkBody,
    Organization, OrganizationBody, ProfilesBody, QueryStatsBody, ServiceCategoriesBody,
    SubOrganizationsBody,
};
use crate::error::{ApiError, Result};

/// Control D API base URL
pub const API_BASE_URL: &str = "https://api.controld.com";

/// Analytics hosts live at `https://<stats_endpoint>.<suffix>`
const ANALYTICS_HOST_SUFFIX: &str = "analytics.controld.com";

/// Header that forces a request onto a specific (sub-)organization
pub const ORG_ID_HEADER: &str = "X-Force-Org-Id";

pub const ORGANIZATION_ENDPOINT: &str = "/organizations/organization";
pub const SUB_ORGANIZATIONS_ENDPOINT: &str = "/organizations/sub_organizations";
pub const BILLING_PAYMENTS_ENDPOINT: &str = "/billing/payments";
pub const BILLING_SUBSCRIPTIONS_ENDPOINT: &str = "/billing/subscriptions";
pub const DEVICES_ENDPOINT: &str = "/devices";
pub const NETWORK_ENDPOINT: &str = "/network";
pub const PROFILES_ENDPOINT: &str = "/profiles";
pub const SERVICE_CATEGORIES_ENDPOINT: &str = "/services/categories";
pub const DNS_QUERIES_REPORT_ENDPOINT: &str = "/reports/dns-queries/all-by-verdict/time-series";

/// Width of the query statistics window ending now
const REPORT_WINDOW_SECS: i64 = 60;

/// Control D API client
pub struct ControlDClient {
    http: HttpClient,
    base_url: String,
    analytics_url: Option<String>,
    api_key: String,
}

impl ControlDClient {
    /// Create a new client authenticating with `api_key`.
    ///
    /// `timeout` bounds each request end to end. No request is ever retried.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: API_BASE_URL.to_string(),
            analytics_url: None,
            api_key: api_key.into(),
        })
    }

    /// Override the main API base URL (development and tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Send every analytics request to `url` regardless of region.
    pub fn with_analytics_url(mut self, url: Option<String>) -> Self {
        self.analytics_url = url.map(|u| u.trim_end_matches('/').to_string());
        self
    }

    /// Base URL of the analytics API for a stats region
    fn analytics_base(&self, stats_endpoint: &str) -> String {
        match &self.analytics_url {
            Some(url) => url.clone(),
            None => format!("https://{}.{}", stats_endpoint, ANALYTICS_HOST_SUFFIX),
        }
    }

    /// Fetch `path` from the main API and unwrap its envelope
    async fn get<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        org_id: Option<&str>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        self.send(&url, path, &[], org_id).await
    }

    /// Perform a GET request and decode the `{ success, body }` envelope.
    ///
    /// `endpoint` is the path used in error messages.
    async fn send<T: DeserializeOwned + Default>(
        &self,
        url: &str,
        endpoint: &str,
        query: &[(&str, String)],
        org_id: Option<&str>,
    ) -> Result<T> {
        debug!("Sending request to URI: {}, org: {:?}", url, org_id);

        let mut request = self
            .http
            .get(url)
            .query(query)
            .header(header::ACCEPT, "application/json")
            .bearer_auth(&self.api_key);
        if let Some(org_id) = org_id {
            request = request.header(ORG_ID_HEADER, org_id);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        match status {
            status if status.is_success() => {
                let text = response.text().await.map_err(ApiError::from)?;
                debug!("Raw JSON response: {}", text);

                let envelope: Envelope<T> = serde_json::from_str(&text).map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                if !envelope.success {
                    return Err(ApiError::Unsuccessful(endpoint.to_string()).into());
                }
                Ok(envelope.body)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(endpoint.to_string()).into()),
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get(header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code {} for {}", status, endpoint);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

/// Query string selecting the last minute of per-minute buckets
fn report_window_query() -> Vec<(&'static str, String)> {
    let start = Utc::now().timestamp() - REPORT_WINDOW_SECS;
    vec![
        ("startTs", start.to_string()),
        ("granularity", "minute".to_string()),
        ("tz", "UTC".to_string()),
    ]
}

#[async_trait]
impl OrganizationApi for ControlDClient {
    async fn main_organization(&self) -> Result<Organization> {
        let body: OrganizationBody = self.get(ORGANIZATION_ENDPOINT, None).await?;
        Ok(body.organization)
    }

    async fn sub_organizations(&self) -> Result<SubOrganizationsBody> {
        self.get(SUB_ORGANIZATIONS_ENDPOINT, None).await
    }
}

#[async_trait]
impl AccountApi for ControlDClient {
    async fn billing_payments(&self) -> Result<BillingPaymentsBody> {
        self.get(BILLING_PAYMENTS_ENDPOINT, None).await
    }

    async fn billing_subscriptions(&self) -> Result<BillingSubscriptionsBody> {
        self.get(BILLING_SUBSCRIPTIONS_ENDPOINT, None).await
    }

    async fn network(&self) -> Result<NetworkBody> {
        self.get(NETWORK_ENDPOINT, None).await
    }
}

#[async_trait]
impl ResourceApi for ControlDClient {
    async fn devices(&self, org_id: Option<&str>) -> Result<DevicesBody> {
        self.get(DEVICES_ENDPOINT, org_id).await
    }

    async fn profiles(&self, org_id: Option<&str>) -> Result<ProfilesBody> {
        self.get(PROFILES_ENDPOINT, org_id).await
    }

    async fn service_categories(&self, org_id: Option<&str>) -> Result<ServiceCategoriesBody> {
        self.get(SERVICE_CATEGORIES_ENDPOINT, org_id).await
    }

    async fn dns_queries_report(
        &self,
        stats_endpoint: &str,
        org_id: Option<&str>,
    ) -> Result<QueryStatsBody> {
        let url = format!(
            "{}{}",
            self.analytics_base(stats_endpoint),
            DNS_QUERIES_REPORT_ENDPOINT
        );
        self.send(&url, DNS_QUERIES_REPORT_ENDPOINT, &report_window_query(), org_id)
            .await
    }
}
