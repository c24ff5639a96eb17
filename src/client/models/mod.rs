//! Control D API data models
//!
//! Every Control D endpoint wraps its payload in the same `{ success, body }`
//! envelope. Models are organized by resource type; only the fields the
//! exporter reads are decoded. The API sends `null` for unset values, which
//! every field reads as its default.

use serde::{Deserialize, Deserializer};

mod billing;
mod device;
mod network;
mod organization;
mod profile;
mod report;
mod service;

pub use billing::{BillingPaymentsBody, BillingSubscriptionsBody};
pub use device::DevicesBody;
pub use network::NetworkBody;
pub use organization::{Count, Organization, OrganizationBody, SubOrganizationsBody};
pub use profile::ProfilesBody;
pub use report::QueryStatsBody;
pub use service::ServiceCategoriesBody;

#[cfg(test)]
pub use billing::{Payment, Subscription, Transaction};
#[cfg(test)]
pub use device::Device;
#[cfg(test)]
pub use network::{NetworkNode, NodeStatus};
#[cfg(test)]
pub use organization::SubOrganization;
#[cfg(test)]
pub use profile::{Profile, ProfileSummary};
#[cfg(test)]
pub use report::QueryBucket;
#[cfg(test)]
pub use service::ServiceCategory;

/// Response envelope shared by every Control D endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Envelope<T> {
    /// Whether the API considers the request successful
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,

    /// Endpoint-specific payload
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: T,
}

/// Decode `null` as `T::default()`; combine with `#[serde(default)]` for
/// missing keys.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
