//! Title fetching - effectful, one request per planned batch

use crate::changelog::plan::ChangelogPlan;
use crate::error::Result;
use crate::platform::MergeRequestSource;
use crate::types::{TitleMap, collect_titles};
use tracing::{debug, info};

/// Fetch titles for every batch in `plan`, strictly one request at a time.
///
/// The first failing request aborts the whole fetch.
pub async fn fetch_titles(
    plan: &ChangelogPlan,
    source: &dyn MergeRequestSource,
    per_page: usize,
) -> Result<TitleMap> {
    let mut records = Vec::with_capacity(plan.fetch_order.len());

    for (index, batch) in plan.batches.iter().enumerate() {
        debug!(page = index + 1, size = batch.len(), "fetching MR page");
        records.extend(source.list_merge_requests(batch, per_page).await?);
    }

    let titles = collect_titles(records);
    info!(
        requested = plan.fetch_order.len(),
        found = titles.len(),
        requests = plan.request_count(),
        "Found merge requests"
    );
    Ok(titles)
}
