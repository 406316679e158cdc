//! Code-review platform access
//!
//! Provides the merge request lookup the changelog needs, behind a trait so
//! the pipeline can be exercised without a live GitLab instance.

mod gitlab;

pub use gitlab::{GitLabService, encode_project_id};

use crate::error::Result;
use crate::types::MergeRequest;
use async_trait::async_trait;

/// Source of merge request metadata
///
/// One call corresponds to exactly one request against the platform; callers
/// are responsible for splitting large iid lists into pages.
#[async_trait]
pub trait MergeRequestSource: Send + Sync {
    /// Fetch the merge requests with the given iids.
    ///
    /// Records missing on the platform are simply absent from the result.
    async fn list_merge_requests(
        &self,
        iids: &[u64],
        per_page: usize,
    ) -> Result<Vec<MergeRequest>>;
}
