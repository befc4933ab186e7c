//! Note file selection

use crate::error::{Result, SiftError};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Regex for dated note filenames: YYYY-MM-DD.md
fn note_filename_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}\.md$").unwrap())
}

/// Whether `name` looks like a dated note
pub fn is_note_filename(name: &str) -> bool {
    note_filename_regex().is_match(name)
}

/// List the dated note files directly inside `dir`.
///
/// Subdirectories are not entered. Names come back in the order the
/// directory yields them, which is not guaranteed to be chronological.
pub fn select_notes(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|source| SiftError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let Ok(entry) = entry else {
            continue;
        };
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if is_note_filename(&name) {
            names.push(name);
        }
    }

    Ok(names)
}
