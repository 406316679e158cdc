//! Output targets for rendered changelogs

use crate::error::{Error, Result};
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Write `content` to stdout, or prepend it to `file` when one is given.
pub fn write_changelog(content: &str, file: Option<&Path>) -> Result<()> {
    match file {
        Some(path) => prepend_to_file(path, content),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Place `content` in front of the existing contents of `path`.
///
/// A missing file is created. Existing content is kept below a blank line.
/// The result is assembled in a temporary file next to `path` and persisted
/// over it, so a failed write leaves the changelog untouched.
pub fn prepend_to_file(path: &Path, content: &str) -> Result<()> {
    let existing = match fs::read_to_string(path) {
        Ok(existing) => existing,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(file = %path.display(), "changelog file doesn't exist; creating");
            String::new()
        }
        Err(e) => {
            return Err(Error::Io(io::Error::new(
                e.kind(),
                format!("couldn't read {}: {e}", path.display()),
            )));
        }
    };

    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    debug!(temp = %temp_file.path().display(), "writing changelog to temporary file");
    temp_file.write_all(join_entries(content, &existing).as_bytes())?;
    temp_file.flush()?;

    debug!(file = %path.display(), "replacing changelog file");
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// New entries followed by the old ones, a blank line between them.
fn join_entries(content: &str, existing: &str) -> String {
    if existing.is_empty() || content.ends_with("\n\n") {
        return format!("{content}{existing}");
    }
    let separator = if content.ends_with('\n') { "\n" } else { "\n\n" };
    format!("{content}{separator}{existing}")
}
