//! The seam between the intent dispatcher and the resource fetcher.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::UserResource;

/// Trait for user-data lookups rendered as a single spoken sentence.
///
/// The webhook dispatcher only sees this trait; the GitHub client
/// implements it.
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Fetch `resource` for `username` and render it as one sentence.
    async fn lookup(&self, username: &str, resource: UserResource) -> Result<String>;
}
