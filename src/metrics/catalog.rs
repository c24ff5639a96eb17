//! Static metric descriptors
//!
//! Every metric the exporter can emit is described here once. Collectors
//! refer to these statics directly; the exposition layer uses the name, help
//! text, label names and kind to build the registry for each scrape.

/// Prometheus value type of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Gauge,
    Counter,
}

/// Name, help text, ordered label names and kind of a metric.
#[derive(Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub name: &'static str,
    pub help: &'static str,
    pub labels: &'static [&'static str],
    pub kind: MetricKind,
}

impl Descriptor {
    const fn gauge(
        name: &'static str,
        help: &'static str,
        labels: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            help,
            labels,
            kind: MetricKind::Gauge,
        }
    }

    const fn counter(
        name: &'static str,
        help: &'static str,
        labels: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            help,
            labels,
            kind: MetricKind::Counter,
        }
    }
}

const ID: &[&str] = &["id"];
const ID_CURRENCY: &[&str] = &["id", "currency"];
const NAME_ORG: &[&str] = &["name", "orgId"];
const NETWORK_NODE: &[&str] = &["city_name", "iata_code", "country_name", "service_name"];
const TYPE_ORG: &[&str] = &["type", "orgId"];

// ============================================================================
// Billing
// ============================================================================

pub static BILLING_STATUS: Descriptor = Descriptor::gauge(
    "controld_billing_status",
    "Transaction status of billing payments.",
    ID,
);

pub static BILLING_REFUNDED: Descriptor = Descriptor::gauge(
    "controld_billing_refunded",
    "Refund status of billing payments.",
    ID,
);

pub static BILLING_SUBSCRIPTION_AMOUNT_TOTAL: Descriptor = Descriptor::gauge(
    "controld_billing_subscription_amount_total",
    "Amount of a billing subscription in the specified currency.",
    ID_CURRENCY,
);

pub static BILLING_SUBSCRIPTION_NEXTBILL_TIMESTAMP: Descriptor = Descriptor::gauge(
    "controld_billing_subscription_nextbill_timestamp",
    "Timestamp of the next billing date for a subscription.",
    ID,
);

// ============================================================================
// Endpoint, network, service, stats
// ============================================================================

pub static ENDPOINT_CLIENTS_TOTAL: Descriptor = Descriptor::gauge(
    "controld_endpoint_clients_total",
    "Number of clients connected to a device.",
    NAME_ORG,
);

pub static NETWORK_HEALTH_CODE: Descriptor = Descriptor::gauge(
    "controld_network_health_code",
    "Health status of the network by city and service.",
    NETWORK_NODE,
);

pub static SERVICE_CATEGORIES_TOTAL: Descriptor = Descriptor::gauge(
    "controld_service_categories_total",
    "Number of services in each category.",
    NAME_ORG,
);

pub static STATS_LAST_QUERIES_COUNT: Descriptor = Descriptor::counter(
    "controld_stats_last_queries_count",
    "Count of DNS queries by type (redirect, success, blocked).",
    TYPE_ORG,
);

// ============================================================================
// Profile
// ============================================================================

pub static PROFILE_PRESET_FILTERS_TOTAL: Descriptor = Descriptor::gauge(
    "controld_profile_preset_filters_total",
    "Number of preset filters applied to the profile.",
    NAME_ORG,
);

pub static PROFILE_CONTENT_FILTERS_TOTAL: Descriptor = Descriptor::gauge(
    "controld_profile_content_filters_total",
    "Number of content filters applied to the profile.",
    NAME_ORG,
);

pub static PROFILE_IP_FILTERS_TOTAL: Descriptor = Descriptor::gauge(
    "controld_profile_ip_filters_total",
    "Number of IP filters applied to the profile.",
    NAME_ORG,
);

pub static PROFILE_RULES_TOTAL: Descriptor = Descriptor::gauge(
    "controld_profile_rules_total",
    "Number of rules applied to the profile.",
    NAME_ORG,
);

pub static PROFILE_SERVICES_TOTAL: Descriptor = Descriptor::gauge(
    "controld_profile_services_total",
    "Number of service filters applied to the profile.",
    NAME_ORG,
);

pub static PROFILE_GROUPS_TOTAL: Descriptor = Descriptor::gauge(
    "controld_profile_groups_total",
    "Number of group filters applied to the profile.",
    NAME_ORG,
);

pub static PROFILE_ENABLED_OPTION_TOTAL: Descriptor = Descriptor::gauge(
    "controld_profile_enabled_option_total",
    "Number of enabled options in the profile.",
    NAME_ORG,
);

// ============================================================================
// Organization
// ============================================================================

pub static ORGANIZATION_MEMBERS_TOTAL: Descriptor = Descriptor::gauge(
    "controld_organization_members_total",
    "Number of members in an organization.",
    NAME_ORG,
);

pub static ORGANIZATION_PROFILES_TOTAL: Descriptor = Descriptor::gauge(
    "controld_organization_profiles_total",
    "Number of profiles in an organization.",
    NAME_ORG,
);

pub static ORGANIZATION_USERS_TOTAL: Descriptor = Descriptor::gauge(
    "controld_organization_users_total",
    "Number of users in an organization.",
    NAME_ORG,
);

pub static ORGANIZATION_ROUTERS_TOTAL: Descriptor = Descriptor::gauge(
    "controld_organization_routers_total",
    "Number of routers in an organization.",
    NAME_ORG,
);

pub static ORGANIZATION_SUB_ORGS_TOTAL: Descriptor = Descriptor::gauge(
    "controld_organization_sub_orgs_total",
    "Number of sub-organizations in an organization.",
    NAME_ORG,
);

pub static SUB_ORGANIZATION_MEMBERS_TOTAL: Descriptor = Descriptor::gauge(
    "controld_sub_organization_members_total",
    "Number of members in a sub-organization.",
    NAME_ORG,
);

pub static SUB_ORGANIZATION_PROFILES_TOTAL: Descriptor = Descriptor::gauge(
    "controld_sub_organization_profiles_total",
    "Number of profiles in a sub-organization.",
    NAME_ORG,
);

pub static SUB_ORGANIZATION_USERS_TOTAL: Descriptor = Descriptor::gauge(
    "controld_sub_organization_users_total",
    "Number of users in a sub-organization.",
    NAME_ORG,
);

pub static SUB_ORGANIZATION_ROUTERS_TOTAL: Descriptor = Descriptor::gauge(
    "controld_sub_organization_routers_total",
    "Number of routers in a sub-organization.",
    NAME_ORG,
);

/// Every descriptor, in exposition order.
pub static CATALOG: [&Descriptor; 24] = [
    &BILLING_STATUS,
    &BILLING_REFUNDED,
    &BILLING_SUBSCRIPTION_AMOUNT_TOTAL,
    &BILLING_SUBSCRIPTION_NEXTBILL_TIMESTAMP,
    &ENDPOINT_CLIENTS_TOTAL,
    &NETWORK_HEALTH_CODE,
    &PROFILE_CONTENT_FILTERS_TOTAL,
    &PROFILE_ENABLED_OPTION_TOTAL,
    &PROFILE_GROUPS_TOTAL,
    &PROFILE_IP_FILTERS_TOTAL,
    &PROFILE_PRESET_FILTERS_TOTAL,
    &PROFILE_RULES_TOTAL,
    &PROFILE_SERVICES_TOTAL,
    &SERVICE_CATEGORIES_TOTAL,
    &STATS_LAST_QUERIES_COUNT,
    &ORGANIZATION_MEMBERS_TOTAL,
    &ORGANIZATION_PROFILES_TOTAL,
    &ORGANIZATION_USERS_TOTAL,
    &ORGANIZATION_ROUTERS_TOTAL,
    &ORGANIZATION_SUB_ORGS_TOTAL,
    &SUB_ORGANIZATION_MEMBERS_TOTAL,
    &SUB_ORGANIZATION_PROFILES_TOTAL,
    &SUB_ORGANIZATION_USERS_TOTAL,
    &SUB_ORGANIZATION_ROUTERS_TOTAL,
];
