//! Endpoint (device) models

use serde::Deserialize;

use super::null_as_default;

/// Body of `/devices`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevicesBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub devices: Vec<Device>,
}

/// A resolver endpoint registered on the account
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Device {
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Number of distinct clients seen behind this endpoint
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_count: u64,
}
