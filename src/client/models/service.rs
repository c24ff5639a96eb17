//! Service catalog models

use serde::Deserialize;

use super::null_as_default;

/// Body of `/services/categories`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceCategoriesBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<ServiceCategory>,
}

/// A category of blockable services
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceCategory {
    /// Category primary key (e.g. `audio`, `gaming`)
    #[serde(rename = "PK", default, deserialize_with = "null_as_default")]
    pub pk: String,

    /// Number of services in the category
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}
