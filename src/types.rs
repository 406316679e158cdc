//! Core types for mr-changelog

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A merge request as returned by the GitLab list endpoint
///
/// Only the fields the changelog needs are kept; everything else in the
/// API payload is ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MergeRequest {
    /// Project-local MR number (the `!N` in trailers)
    pub iid: u64,
    /// MR title
    pub title: String,
}

/// Mapping from MR iid to title
pub type TitleMap = HashMap<u64, String>;

/// Fold fetched records into a [`TitleMap`].
///
/// Later records for the same iid overwrite earlier ones.
pub fn collect_titles<I>(records: I) -> TitleMap
where
    I: IntoIterator<Item = MergeRequest>,
{
    let mut titles = TitleMap::new();
    for mr in records {
        titles.insert(mr.iid, mr.title);
    }
    titles
}
