//! Text parsing for git output - pure functions, no I/O.

use crate::error::Result;
use regex::Regex;
use std::sync::LazyLock;

/// GitLab merge commits end with `See merge request !123`, or with the fully
/// qualified `See merge request group/project!123` on newer instances. Only
/// lines that start with the trailer count.
static MERGE_REQUEST_TRAILER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*See merge request (?:[\w.\-/]+)?!(\d+)").expect("trailer pattern is valid")
});

/// Extract every MR iid referenced in `text`, in order of appearance.
///
/// Nothing is deduplicated: a commit range that mentions `!7` twice yields
/// `7` twice. Digit runs too large for `u64` are skipped.
pub fn extract_merge_request_ids(text: &str) -> Vec<u64> {
    MERGE_REQUEST_TRAILER
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Compile a tag matcher so that it must match the whole tag name.
pub fn compile_tag_matcher(pattern: &str) -> Result<Regex> {
    Ok(Regex::new(&format!("^(?:{pattern})$"))?)
}

/// Pull tag names out of `git log --pretty=format:%D` output.
///
/// Each line is a comma-separated decoration list such as
/// `HEAD -> main, tag: refs/tags/v1.2.0, origin/main`. Tags are returned in
/// line order, which for `git log` is newest first.
pub fn parse_decorated_tags(decorations: &str) -> Vec<String> {
    decorations
        .lines()
        .flat_map(|line| line.split(','))
        .filter_map(|item| item.trim().strip_prefix("tag: "))
        .map(|name| name.strip_prefix("refs/tags/").unwrap_or(name).to_string())
        .collect()
}
