//! Run configuration
//!
//! Everything the pipeline needs is gathered once into a [`Config`] at
//! process start and passed down to each stage by reference.

use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// Environment variable holding the GitLab access token
pub const PRIVATE_TOKEN_ENV: &str = "GITLAB_PRIVATE_TOKEN";
/// Environment variable overriding the starting point
pub const STARTING_POINT_ENV: &str = "STARTING_POINT";
/// Environment variable overriding the tag matcher
pub const STARTING_POINT_MATCHER_ENV: &str = "STARTING_POINT_MATCHER";
/// Environment variable listing MR iids to leave out
pub const EXCLUDE_MR_IDS_ENV: &str = "EXCLUDE_MR_IDS";
/// Environment variable overriding the project
pub const PROJECT_ID_ENV: &str = "PROJECT_ID";
/// Environment variable overriding the GitLab base URL
pub const GITLAB_URL_ENV: &str = "GITLAB_URL";

/// Project queried when `PROJECT_ID` is not set
pub const DEFAULT_PROJECT_ID: &str = "gitlab-org/gitlab-runner";
/// GitLab instance queried when `GITLAB_URL` is not set
pub const DEFAULT_GITLAB_URL: &str = "https://gitlab.com";
/// API version segment of the endpoint path
pub const DEFAULT_API_VERSION: &str = "v3";
/// Number of iids sent per request
pub const DEFAULT_PER_PAGE: usize = 15;
/// Release tags look like `v1.2.3`
pub const DEFAULT_STARTING_POINT_MATCHER: &str = r"v[0-9]+\.[0-9]+\.[0-9]+";

/// Configuration for a single changelog run
#[derive(Clone)]
pub struct Config {
    /// GitLab access token, sent as `private_token`
    pub private_token: String,
    /// Explicit git ref to start from; resolved from tags when `None`
    pub starting_point: Option<String>,
    /// Regex a tag name must fully match to count as a release
    pub starting_point_matcher: String,
    /// MR iids dropped before fetching and printing
    pub excluded_ids: BTreeSet<u64>,
    /// Numeric project id or `group/project` path
    pub project_id: String,
    /// GitLab base URL, scheme included
    pub gitlab_url: String,
    /// API version path segment (`v3`, `v4`)
    pub api_version: String,
    /// iids per request
    pub per_page: usize,
    /// Release name for the optional `## <release> (<date>)` header
    pub release: Option<String>,
    /// Prepend to this file instead of printing to stdout
    pub changelog_file: Option<PathBuf>,
    /// Repository to read history from
    pub repo_path: PathBuf,
}

impl Config {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset. Fails with
    /// [`Error::MissingToken`] when no token is available.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let private_token = get(PRIVATE_TOKEN_ENV).ok_or(Error::MissingToken)?;

        let excluded_ids = match get(EXCLUDE_MR_IDS_ENV) {
            Some(raw) => parse_excluded_ids(&raw)?,
            None => BTreeSet::new(),
        };

        Ok(Self {
            private_token,
            starting_point: get(STARTING_POINT_ENV),
            starting_point_matcher: get(STARTING_POINT_MATCHER_ENV)
                .unwrap_or_else(|| DEFAULT_STARTING_POINT_MATCHER.to_string()),
            excluded_ids,
            project_id: get(PROJECT_ID_ENV).unwrap_or_else(|| DEFAULT_PROJECT_ID.to_string()),
            gitlab_url: get(GITLAB_URL_ENV).unwrap_or_else(|| DEFAULT_GITLAB_URL.to_string()),
            api_version: DEFAULT_API_VERSION.to_string(),
            per_page: DEFAULT_PER_PAGE,
            release: None,
            changelog_file: None,
            repo_path: PathBuf::from("."),
        })
    }

    /// Check values that can be overridden after construction.
    pub fn validate(&self) -> Result<()> {
        if self.private_token.trim().is_empty() {
            return Err(Error::MissingToken);
        }
        if self.per_page == 0 {
            return Err(Error::Config("per-page must be at least 1".to_string()));
        }
        if self.project_id.trim().is_empty() {
            return Err(Error::Config("project id must not be empty".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("private_token", &"<redacted>")
            .field("starting_point", &self.starting_point)
            .field("starting_point_matcher", &self.starting_point_matcher)
            .field("excluded_ids", &self.excluded_ids)
            .field("project_id", &self.project_id)
            .field("gitlab_url", &self.gitlab_url)
            .field("api_version", &self.api_version)
            .field("per_page", &self.per_page)
            .field("release", &self.release)
            .field("changelog_file", &self.changelog_file)
            .field("repo_path", &self.repo_path)
            .finish()
    }
}

/// Parse a comma-separated list of MR iids, e.g. `"12, 40,41"`.
///
/// Blank items are skipped; anything else that is not an integer is an error.
pub fn parse_excluded_ids(raw: &str) -> Result<BTreeSet<u64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<u64>().map_err(|e| {
                Error::Config(format!("invalid merge request id {item:?} in {EXCLUDE_MR_IDS_ENV}: {e}"))
            })
        })
        .collect()
}
