//! Profile models

use serde::Deserialize;

use super::{Count, null_as_default};

/// Body of `/profiles`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilesBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub profiles: Vec<Profile>,
}

/// A filtering profile
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Rule counts by category
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile: ProfileSummary,
}

/// Per-category rule counts of a profile
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileSummary {
    /// Preset filters
    #[serde(default, deserialize_with = "null_as_default")]
    pub flt: Count,

    /// Content (custom) filters
    #[serde(default, deserialize_with = "null_as_default")]
    pub cflt: Count,

    /// IP filters; decoded but not exported, the IP filter gauge reads `cflt`
    #[allow(dead_code)]
    #[serde(default, deserialize_with = "null_as_default")]
    pub ipflt: Count,

    /// Custom rules
    #[serde(default, deserialize_with = "null_as_default")]
    pub rule: Count,

    /// Service rules
    #[serde(default, deserialize_with = "null_as_default")]
    pub svc: Count,

    /// Rule folders
    #[serde(default, deserialize_with = "null_as_default")]
    pub grp: Count,

    /// Enabled options
    #[serde(default, deserialize_with = "null_as_default")]
    pub opt: Count,
}
