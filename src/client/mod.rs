//! Control D API client

pub mod api;
pub mod controld;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{AccountApi, OrganizationApi, ResourceApi};
pub use controld::ControlDClient;
#[cfg(test)]
pub use mock::MockControlDClient;

/// Control D API client trait
///
/// Combines every sub-trait so collectors can hold a single
/// `&dyn ControlDApi`. Implemented automatically for any type implementing
/// all three.
pub trait ControlDApi: OrganizationApi + AccountApi + ResourceApi {}

impl<T> ControlDApi for T where T: OrganizationApi + AccountApi + ResourceApi {}
