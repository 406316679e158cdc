//! Generate command - print or prepend the draft changelog

use crate::cli::context::CommandContext;
use anstream::eprintln;
use chrono::Local;
use mr_changelog::changelog::{generate_changelog, release_header, write_changelog};
use mr_changelog::config::Config;
use mr_changelog::error::Result;
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// Flag overrides for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Repository to scan
    pub path: Option<PathBuf>,
    /// Explicit starting ref
    pub starting_point: Option<String>,
    /// Release tag pattern
    pub starting_point_matcher: Option<String>,
    /// Extra iids to leave out (added to `EXCLUDE_MR_IDS`)
    pub exclude: Vec<u64>,
    /// Project id or path
    pub project_id: Option<String>,
    /// GitLab base URL
    pub gitlab_url: Option<String>,
    /// API version segment
    pub api_version: Option<String>,
    /// iids per request
    pub per_page: Option<usize>,
    /// Release name for the header
    pub release: Option<String>,
    /// File to prepend to
    pub changelog_file: Option<PathBuf>,
}

impl GenerateOptions {
    /// Layer flag values over the environment-derived configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref path) = self.path {
            config.repo_path.clone_from(path);
        }
        if self.starting_point.is_some() {
            config.starting_point.clone_from(&self.starting_point);
        }
        if let Some(ref matcher) = self.starting_point_matcher {
            config.starting_point_matcher.clone_from(matcher);
        }
        config.excluded_ids.extend(self.exclude.iter().copied());
        if let Some(ref project_id) = self.project_id {
            config.project_id.clone_from(project_id);
        }
        if let Some(ref url) = self.gitlab_url {
            config.gitlab_url.clone_from(url);
        }
        if let Some(ref version) = self.api_version {
            config.api_version.clone_from(version);
        }
        if let Some(per_page) = self.per_page {
            config.per_page = per_page;
        }
        if self.release.is_some() {
            config.release.clone_from(&self.release);
        }
        if self.changelog_file.is_some() {
            config.changelog_file.clone_from(&self.changelog_file);
        }
    }
}

/// Run the generate command
pub async fn run_generate(options: &GenerateOptions) -> Result<()> {
    let ctx = CommandContext::new(options)?;
    let config = &ctx.config;

    let changelog = generate_changelog(config, &ctx.history, &ctx.source).await?;

    let header = config
        .release
        .as_deref()
        .map(|release| release_header(release, Local::now().date_naive()));
    let text = changelog.render(header.as_deref());

    write_changelog(&text, config.changelog_file.as_deref())?;

    if let Some(ref file) = config.changelog_file {
        eprintln!(
            "{} {} entries written to {}",
            "✓".green(),
            changelog.plan.display_order.len(),
            file.display().bold()
        );
    }

    Ok(())
}
