//! Changelog text formatting

use crate::types::TitleMap;
use chrono::NaiveDate;
use std::fmt;

/// Date format used in release headers
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// One changelog bullet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    /// MR iid
    pub iid: u64,
    /// MR title; `None` when the API returned no record for the iid
    pub title: Option<String>,
}

impl fmt::Display for ChangelogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} !{}",
            self.title.as_deref().unwrap_or_default(),
            self.iid
        )
    }
}

/// Pair each iid in `display_order` with its title.
pub fn build_entries(display_order: &[u64], titles: &TitleMap) -> Vec<ChangelogEntry> {
    display_order
        .iter()
        .map(|&iid| ChangelogEntry {
            iid,
            title: titles.get(&iid).cloned(),
        })
        .collect()
}

/// `## <release> (<YYYY-MM-DD>)`
pub fn release_header(release: &str, date: NaiveDate) -> String {
    format!("## {release} ({})", date.format(RELEASE_DATE_FORMAT))
}

/// Render the full changelog text.
///
/// The output opens with the header line when one is given, then a blank
/// line, then one bullet per entry.
pub fn render_changelog(entries: &[ChangelogEntry], header: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(header) = header {
        out.push_str(header);
        out.push('\n');
    }
    out.push('\n');
    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}
