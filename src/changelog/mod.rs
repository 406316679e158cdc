//! Changelog generation
//!
//! Three-phase pattern:
//! 1. Gather - resolve the starting point and scan history (effectful, local)
//! 2. Plan - filter, order and batch the iids (pure, testable)
//! 3. Fetch - one request per batch, then render (effectful, remote)

mod fetch;
mod plan;
mod render;
mod writer;

pub use fetch::fetch_titles;
pub use plan::{ChangelogPlan, create_changelog_plan, filter_excluded, into_batches};
pub use render::{
    ChangelogEntry, RELEASE_DATE_FORMAT, build_entries, release_header, render_changelog,
};
pub use writer::{prepend_to_file, write_changelog};

use crate::config::Config;
use crate::error::Result;
use crate::history::{HistoryProvider, compile_tag_matcher};
use crate::platform::MergeRequestSource;
use crate::types::TitleMap;
use tracing::{debug, info, warn};

/// Result of a changelog run, ready to render
#[derive(Debug, Clone)]
pub struct Changelog {
    /// What was scanned and fetched
    pub plan: ChangelogPlan,
    /// Titles returned by the platform
    pub titles: TitleMap,
}

impl Changelog {
    /// Entries in output order
    pub fn entries(&self) -> Vec<ChangelogEntry> {
        build_entries(&self.plan.display_order, &self.titles)
    }

    /// Render as text, optionally under a release header
    pub fn render(&self, header: Option<&str>) -> String {
        render_changelog(&self.entries(), header)
    }
}

/// Decide where the history scan starts.
///
/// A configured starting point wins. Otherwise the latest tag matching the
/// configured matcher is used. When none exists a warning is logged and
/// `None` is returned, meaning the whole history is scanned.
pub fn resolve_starting_point(
    config: &Config,
    history: &dyn HistoryProvider,
) -> Result<Option<String>> {
    if let Some(ref start) = config.starting_point {
        debug!(starting_point = %start, "using configured starting point");
        return Ok(Some(start.clone()));
    }

    let matcher = compile_tag_matcher(&config.starting_point_matcher)?;
    let tag = history.resolve_latest_tag(&matcher)?;

    match tag {
        Some(ref tag) => info!(starting_point = %tag, "resolved starting point from tags"),
        None => warn!(
            matcher = %config.starting_point_matcher,
            "couldn't determine a starting point; set STARTING_POINT to limit the range"
        ),
    }
    Ok(tag)
}

/// Run the gather, plan and fetch phases.
pub async fn generate_changelog(
    config: &Config,
    history: &dyn HistoryProvider,
    source: &dyn MergeRequestSource,
) -> Result<Changelog> {
    let starting_point = resolve_starting_point(config, history)?;

    let referenced = history.list_referenced_ids(starting_point.as_deref())?;
    info!(count = referenced.len(), "Found merge request commits");

    let plan = create_changelog_plan(
        starting_point,
        &referenced,
        &config.excluded_ids,
        config.per_page,
    );
    debug!(
        excluded = referenced.len() - plan.display_order.len(),
        requests = plan.request_count(),
        "planned changelog"
    );
    if plan.is_empty() {
        info!(
            starting_point = ?plan.starting_point,
            "no merge requests referenced in range; nothing to fetch"
        );
    }

    let titles = fetch_titles(&plan, source, config.per_page).await?;

    Ok(Changelog { plan, titles })
}
