//! Changelog planning - pure functions for deciding what to fetch and print
//!
//! No I/O happens here: the scanned iids and configuration go in, a
//! [`ChangelogPlan`] comes out.

use std::collections::BTreeSet;

/// What the changelog will fetch and print
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogPlan {
    /// Git ref the scan started from (`None` = whole history)
    pub starting_point: Option<String>,
    /// iids in output order: reverse-chronological, duplicates kept
    pub display_order: Vec<u64>,
    /// iids in request order: ascending, duplicates kept
    pub fetch_order: Vec<u64>,
    /// `fetch_order` split into pages, one request each
    pub batches: Vec<Vec<u64>>,
}

impl ChangelogPlan {
    /// Number of requests the plan will issue
    pub fn request_count(&self) -> usize {
        self.batches.len()
    }

    /// Whether there is anything to print
    pub fn is_empty(&self) -> bool {
        self.display_order.is_empty()
    }
}

/// Drop excluded iids, preserving order and duplicates.
pub fn filter_excluded(ids: &[u64], excluded: &BTreeSet<u64>) -> Vec<u64> {
    ids.iter()
        .copied()
        .filter(|id| !excluded.contains(id))
        .collect()
}

/// Split `ids` into consecutive pages of at most `per_page` items.
///
/// A `per_page` of zero is treated as one.
pub fn into_batches(ids: &[u64], per_page: usize) -> Vec<Vec<u64>> {
    ids.chunks(per_page.max(1)).map(<[u64]>::to_vec).collect()
}

/// Build the plan for a scanned commit range.
///
/// `referenced` is the scan result in log order (newest first).
pub fn create_changelog_plan(
    starting_point: Option<String>,
    referenced: &[u64],
    excluded: &BTreeSet<u64>,
    per_page: usize,
) -> ChangelogPlan {
    let display_order = filter_excluded(referenced, excluded);

    let mut fetch_order = display_order.clone();
    fetch_order.sort_unstable();

    let batches = into_batches(&fetch_order, per_page);

    ChangelogPlan {
        starting_point,
        display_order,
        fetch_order,
        batches,
    }
}
