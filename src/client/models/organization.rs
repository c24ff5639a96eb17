//! Organization models

use serde::Deserialize;

use super::null_as_default;

/// `{ "count": N }` counter object used throughout the organization payloads
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Count {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}

/// Body of `/organizations/organization`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizationBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub organization: Organization,
}

/// Main organization of a business account
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Organization {
    /// Organization primary key
    #[serde(rename = "PK", default, deserialize_with = "null_as_default")]
    pub pk: String,

    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Analytics region used to address the query statistics API
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats_endpoint: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Count,

    #[serde(default, deserialize_with = "null_as_default")]
    pub profiles: Count,

    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Count,

    #[serde(default, deserialize_with = "null_as_default")]
    pub routers: Count,

    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_organizations: Count,
}

/// Body of `/organizations/sub_organizations`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubOrganizationsBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_organizations: Vec<SubOrganization>,
}

/// Child organization addressable through the `X-Force-Org-Id` header
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubOrganization {
    /// Sub-organization primary key
    #[serde(rename = "PK", default, deserialize_with = "null_as_default")]
    pub pk: String,

    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Count,

    #[serde(default, deserialize_with = "null_as_default")]
    pub profiles: Count,

    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Count,

    #[serde(default, deserialize_with = "null_as_default")]
    pub routers: Count,
}

impl SubOrganizationsBody {
    /// Sub-organization primary keys in API order.
    pub fn ids(&self) -> Vec<String> {
        self.sub_organizations.iter().map(|s| s.pk.clone()).collect()
    }
}
