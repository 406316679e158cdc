//! `git` CLI backed history provider

use super::HistoryProvider;
use super::trailer::{extract_merge_request_ids, parse_decorated_tags};
use crate::error::{Error, Result};
use regex::Regex;
use std::path::PathBuf;
use std::process::{Command, Output};
use tracing::debug;

/// History provider that shells out to `git`
pub struct GitCli {
    repo_path: PathBuf,
}

impl GitCli {
    /// Run git commands inside `repo_path`
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }

    fn output(&self, args: &[&str]) -> Result<Output> {
        debug!(?args, repo = %self.repo_path.display(), "running git");
        Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| Error::Git(format!("failed to run git {}: {e}", args.join(" "))))
    }

    fn stdout(&self, args: &[&str]) -> Result<String> {
        let output = self.output(args)?;
        if !output.status.success() {
            return Err(Error::Git(format!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Tags decorating first-parent commits, newest first.
    fn mainline_tags(&self) -> Result<Vec<String>> {
        let out = self.stdout(&[
            "log",
            "--first-parent",
            "--simplify-by-decoration",
            "--decorate=full",
            "--pretty=format:%D",
            "HEAD",
        ])?;
        Ok(parse_decorated_tags(&out))
    }

    /// Closest tag reachable from HEAD, if any.
    fn describe_tag(&self) -> Result<Option<String>> {
        let output = self.output(&["describe", "--tags", "--abbrev=0", "HEAD"])?;
        if !output.status.success() {
            // No tags reachable
            return Ok(None);
        }
        let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!tag.is_empty()).then_some(tag))
    }
}

impl HistoryProvider for GitCli {
    fn resolve_latest_tag(&self, matcher: &Regex) -> Result<Option<String>> {
        if let Some(tag) = self
            .mainline_tags()?
            .into_iter()
            .find(|tag| matcher.is_match(tag))
        {
            debug!(%tag, "found tag on first-parent history");
            return Ok(Some(tag));
        }

        let described = self.describe_tag()?.filter(|tag| matcher.is_match(tag));
        if let Some(ref tag) = described {
            debug!(%tag, "found closest ancestor tag");
        }
        Ok(described)
    }

    fn list_referenced_ids(&self, start: Option<&str>) -> Result<Vec<u64>> {
        let range = start.map_or_else(|| "HEAD".to_string(), |s| format!("{s}..HEAD"));
        let log = self.stdout(&["log", "--first-parent", "--format=%B", &range])?;

        let ids = extract_merge_request_ids(&log);
        debug!(%range, count = ids.len(), "scanned commit range");
        Ok(ids)
    }
}
