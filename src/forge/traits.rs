//! Traits related to remote git forges
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    error::Result,
    forge::types::{PullRequest, TagRecord},
};

/// Read and write surface consumed from a forge platform: pull request
/// lookups, tag enumeration, and tag reference creation.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge {
    /// Fetch a single pull request by number.
    async fn get_pull_request(&self, number: u64) -> Result<PullRequest>;

    /// List the pull requests associated with a commit.
    async fn associated_pull_requests(
        &self,
        sha: &str,
    ) -> Result<Vec<PullRequest>>;

    /// List every tag in the repository. All pages are drained before
    /// returning so callers see the complete set.
    async fn list_tags(&self) -> Result<Vec<TagRecord>>;

    /// Create the reference `refs/tags/{tag_name}` pointing at `sha`.
    /// Fails with a tag conflict if the reference already exists.
    async fn create_tag(&self, tag_name: &str, sha: &str) -> Result<()>;
}
