//! API trait definitions split by responsibility
//!
//! This module organizes the Control D API surface into focused sub-traits:
//! - [`OrganizationApi`] - Main organization and sub-organization lookups
//! - [`AccountApi`] - Account-scoped billing and network status
//! - [`ResourceApi`] - Resources that can be scoped to a sub-organization
//!
//! The [`ControlDApi`](super::ControlDApi) super-trait combines all three.

mod account;
mod organization;
mod resource;

pub use account::AccountApi;
pub use organization::OrganizationApi;
pub use resource::ResourceApi;
