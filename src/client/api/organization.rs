//! Organization lookup trait

use async_trait::async_trait;

use crate::client::models::{Organization, SubOrganizationsBody};
use crate::error::Result;

/// Organization lookups for business accounts
///
/// Both calls fail (`success: false`) for personal accounts, which have no
/// organization.
#[async_trait]
pub trait OrganizationApi: Send + Sync {
    /// Fetch the main organization of the account
    async fn main_organization(&self) -> Result<Organization>;

    /// Fetch every sub-organization of the main organization, in API order
    async fn sub_organizations(&self) -> Result<SubOrganizationsBody>;
}
