//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use std::collections::BTreeMap;

use super::models::{
    BillingPaymentsBody, BillingSubscriptionsBody, Count, Device, DevicesBody, NetworkBody,
    NetworkNode, NodeStatus, Organization, Payment, Profile, ProfileSummary, ProfilesBody,
    QueryBucket, QueryStatsBody, ServiceCategoriesBody, ServiceCategory, SubOrganization,
    SubOrganizationsBody, Subscription, Transaction,
};

// ============================================================================
// OrganizationBuilder
// ============================================================================

/// Builder for creating test Organization instances.
///
/// # Example
/// ```ignore
/// let org = OrganizationBuilder::new("org-123")
///     .name("Test Org")
///     .users(10)
///     .stats_endpoint("europe")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct OrganizationBuilder {
    pk: String,
    name: String,
    stats_endpoint: String,
    members: u64,
    profiles: u64,
    users: u64,
    routers: u64,
    sub_organizations: u64,
}

impl OrganizationBuilder {
    /// Create a new builder with the given primary key.
    pub fn new(pk: impl Into<String>) -> Self {
        let pk = pk.into();
        Self {
            name: format!("Organization {}", &pk),
            pk,
            stats_endpoint: "america".to_string(),
            members: 0,
            profiles: 0,
            users: 0,
            routers: 0,
            sub_organizations: 0,
        }
    }

    /// Set the organization name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the analytics region.
    pub fn stats_endpoint(mut self, region: impl Into<String>) -> Self {
        self.stats_endpoint = region.into();
        self
    }

    pub fn members(mut self, count: u64) -> Self {
        self.members = count;
        self
    }

    pub fn profiles(mut self, count: u64) -> Self {
        self.profiles = count;
        self
    }

    pub fn users(mut self, count: u64) -> Self {
        self.users = count;
        self
    }

    pub fn routers(mut self, count: u64) -> Self {
        self.routers = count;
        self
    }

    pub fn sub_organizations(mut self, count: u64) -> Self {
        self.sub_organizations = count;
        self
    }

    /// Build the Organization.
    pub fn build(self) -> Organization {
        Organization {
            pk: self.pk,
            name: self.name,
            stats_endpoint: self.stats_endpoint,
            members: Count {
                count: self.members,
            },
            profiles: Count {
                count: self.profiles,
            },
            users: Count { count: self.users },
            routers: Count {
                count: self.routers,
            },
            sub_organizations: Count {
                count: self.sub_organizations,
            },
        }
    }
}

// ============================================================================
// ProfileBuilder
// ============================================================================

/// Builder for creating test Profile instances.
///
/// # Example
/// ```ignore
/// let profile = ProfileBuilder::new("Kids")
///     .filters(4)
///     .content_filters(2)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    name: String,
    summary: ProfileSummary,
}

impl ProfileBuilder {
    /// Create a new builder with the given profile name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: ProfileSummary::default(),
        }
    }

    pub fn filters(mut self, count: u64) -> Self {
        self.summary.flt = Count { count };
        self
    }

    pub fn content_filters(mut self, count: u64) -> Self {
        self.summary.cflt = Count { count };
        self
    }

    pub fn ip_filters(mut self, count: u64) -> Self {
        self.summary.ipflt = Count { count };
        self
    }

    pub fn rules(mut self, count: u64) -> Self {
        self.summary.rule = Count { count };
        self
    }

    pub fn services(mut self, count: u64) -> Self {
        self.summary.svc = Count { count };
        self
    }

    pub fn groups(mut self, count: u64) -> Self {
        self.summary.grp = Count { count };
        self
    }

    pub fn options(mut self, count: u64) -> Self {
        self.summary.opt = Count { count };
        self
    }

    /// Build the Profile.
    pub fn build(self) -> Profile {
        Profile {
            name: self.name,
            profile: self.summary,
        }
    }
}

// ============================================================================
// Payload helpers
// ============================================================================

/// Devices payload from `(name, client_count)` pairs.
pub fn devices(entries: &[(&str, u64)]) -> DevicesBody {
    DevicesBody {
        devices: entries
            .iter()
            .map(|(name, clients)| Device {
                name: name.to_string(),
                client_count: *clients,
            })
            .collect(),
    }
}

/// Profiles payload from built profiles.
pub fn profiles(profiles: Vec<Profile>) -> ProfilesBody {
    ProfilesBody { profiles }
}

/// Service categories payload from `(pk, count)` pairs.
pub fn categories(entries: &[(&str, u64)]) -> ServiceCategoriesBody {
    ServiceCategoriesBody {
        categories: entries
            .iter()
            .map(|(pk, count)| ServiceCategory {
                pk: pk.to_string(),
                count: *count,
            })
            .collect(),
    }
}

/// Sub-organization with the given primary key and counts of one.
pub fn sub_organization(pk: &str) -> SubOrganization {
    SubOrganization {
        pk: pk.to_string(),
        name: format!("Sub {}", pk),
        members: Count { count: 1 },
        profiles: Count { count: 1 },
        users: Count { count: 1 },
        routers: Count { count: 1 },
    }
}

/// Sub-organization list in the given order.
pub fn sub_organizations(pks: &[&str]) -> SubOrganizationsBody {
    SubOrganizationsBody {
        sub_organizations: pks.iter().map(|pk| sub_organization(pk)).collect(),
    }
}

/// Query statistics with one bucket per entry; each bucket maps verdict code to count.
pub fn query_stats(buckets: &[&[(&str, u64)]]) -> QueryStatsBody {
    QueryStatsBody {
        queries: buckets
            .iter()
            .map(|counts| QueryBucket {
                count: counts
                    .iter()
                    .map(|(code, n)| (code.to_string(), *n))
                    .collect::<BTreeMap<_, _>>(),
            })
            .collect(),
    }
}

/// Payment with the given id, USD amount, local currency and local amount.
pub fn payment(pk: &str, amount: f64, currency: &str, currency_amount: f64) -> Payment {
    Payment {
        pk: pk.to_string(),
        amount,
        currency_amount,
        currency: currency.to_string(),
        transaction: Transaction {
            status: 1,
            refunded: 0,
        },
    }
}

pub fn payments(payments: Vec<Payment>) -> BillingPaymentsBody {
    BillingPaymentsBody { payments }
}

pub fn subscriptions(entries: &[(&str, i64)]) -> BillingSubscriptionsBody {
    BillingSubscriptionsBody {
        subscriptions: entries
            .iter()
            .map(|(pk, next_bill)| Subscription {
                pk: pk.to_string(),
                next_bill: *next_bill,
            })
            .collect(),
    }
}

/// Network node with the given IATA code and (api, dns, proxy) status codes.
pub fn network_node(iata: &str, api: i64, dns: i64, pxy: i64) -> NetworkNode {
    NetworkNode {
        iata_code: iata.to_string(),
        city_name: format!("City {}", iata),
        country_name: "Canada".to_string(),
        status: NodeStatus { api, dns, pxy },
    }
}

pub fn network(nodes: Vec<NetworkNode>) -> NetworkBody {
    NetworkBody { network: nodes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_builder_defaults() {
        let org = OrganizationBuilder::new("org-1").build();

        assert_eq!(org.pk, "org-1");
        assert_eq!(org.name, "Organization org-1");
        assert_eq!(org.stats_endpoint, "america");
        assert_eq!(org.members.count, 0);
    }

    #[test]
    fn test_profile_builder_sets_counts() {
        let profile = ProfileBuilder::new("Kids")
            .filters(4)
            .content_filters(2)
            .options(9)
            .build();

        assert_eq!(profile.name, "Kids");
        assert_eq!(profile.profile.flt.count, 4);
        assert_eq!(profile.profile.cflt.count, 2);
        assert_eq!(profile.profile.opt.count, 9);
    }

    #[test]
    fn test_query_stats_buckets_keep_order() {
        let stats = query_stats(&[&[("0", 5)], &[("1", 1)]]);

        assert_eq!(stats.queries.len(), 2);
        assert_eq!(stats.queries[0].count.get("0"), Some(&5));
        assert_eq!(stats.queries[1].count.get("1"), Some(&1));
    }
}
