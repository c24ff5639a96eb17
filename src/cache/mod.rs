//! Per-scrape caching of organization lookups
//!
//! Every org-scoped collector needs the main organization and the list of
//! sub-organizations. The cache in this module makes sure each of those is
//! fetched at most once per successful scrape pass.

pub mod organization;

pub use organization::OrganizationCache;
