//! Analytics report models

use std::collections::BTreeMap;

use serde::Deserialize;

use super::null_as_default;

/// Body of `/reports/dns-queries/all-by-verdict/time-series`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryStatsBody {
    /// Time buckets, oldest first
    #[serde(default, deserialize_with = "null_as_default")]
    pub queries: Vec<QueryBucket>,
}

/// Query counts for one time bucket, keyed by numeric verdict code
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryBucket {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: BTreeMap<String, u64>,
}
