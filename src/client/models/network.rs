//! Network (points of presence) models

use serde::Deserialize;

use super::null_as_default;

/// Body of `/network`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub network: Vec<NetworkNode>,
}

/// One Control D point of presence
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub iata_code: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub city_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub country_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: NodeStatus,
}

/// Health codes per service channel
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct NodeStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub api: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub dns: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub pxy: i64,
}
