//! Version-control history queries
//!
//! The changelog only needs two things from history: the latest release tag
//! and the MR iids referenced since a given ref. [`HistoryProvider`] captures
//! exactly that, so the pipeline can run against a fake in tests and against
//! the `git` CLI ([`GitCli`]) in production.

mod git;
mod trailer;

pub use git::GitCli;
pub use trailer::{compile_tag_matcher, extract_merge_request_ids, parse_decorated_tags};

use crate::error::Result;
use regex::Regex;

/// History capability used by the changelog pipeline
pub trait HistoryProvider: Send + Sync {
    /// Find the most recent tag on the mainline whose name fully matches
    /// `matcher`. `Ok(None)` means no such tag exists.
    fn resolve_latest_tag(&self, matcher: &Regex) -> Result<Option<String>>;

    /// List MR iids referenced by first-parent commits after `start`
    /// (all of history when `None`), newest first.
    ///
    /// Repeated references are returned repeatedly.
    fn list_referenced_ids(&self, start: Option<&str>) -> Result<Vec<u64>>;
}
