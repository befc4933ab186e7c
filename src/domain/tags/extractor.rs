//! Hashtag block extraction
//!
//! A line carrying at least one hashtag starts a block. Two kinds exist:
//!
//! - A *heading block* starts on a markdown heading (`#` to `####` followed by
//!   a space) that contains a hashtag. It runs up to the next such heading or
//!   the end of the document, keeping blank lines.
//! - A *regular block* starts on any other hashtag line and runs up to the
//!   first blank line.
//!
//! Lines consumed by a block are never scanned again as block starts.

use crate::domain::fragment::{Fragment, FragmentMap};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Regex for matching hashtags: `#` followed by ASCII letters, digits or underscores
fn hashtag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"#[a-zA-Z0-9_]+").unwrap())
}

const HEADING_PREFIXES: [&str; 4] = ["# ", "## ", "### ", "#### "];

/// Distinct hashtags on a line, in order of first appearance
pub fn hashtags_in_line(line: &str) -> Vec<&str> {
    let mut tags: Vec<&str> = Vec::new();
    for m in hashtag_regex().find_iter(line) {
        if !tags.contains(&m.as_str()) {
            tags.push(m.as_str());
        }
    }
    tags
}

fn is_heading_block_start(line: &str) -> bool {
    let trimmed = line.trim();
    hashtag_regex().is_match(trimmed)
        && HEADING_PREFIXES
            .iter()
            .any(|prefix| trimmed.starts_with(prefix))
}

/// Extract hashtag blocks from `text`, stamping each fragment with `date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use markdownsift::domain::tags::extract;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// let map = extract("Call Bob #work\nabout the budget\n\nunrelated", date);
/// assert_eq!(map["#work"][0].content, "Call Bob #work\nabout the budget");
/// ```
pub fn extract(text: &str, date: NaiveDate) -> FragmentMap {
    let mut result = FragmentMap::new();

    let lines: Vec<&str> = text.split('\n').collect();
    let heading_starts: Vec<bool> = lines.iter().map(|l| is_heading_block_start(l)).collect();

    let mut i = 0;
    while i < lines.len() {
        let tags = hashtags_in_line(lines[i]);
        if tags.is_empty() {
            i += 1;
            continue;
        }

        let mut end = i + 1;
        if heading_starts[i] {
            while end < lines.len() && !heading_starts[end] {
                end += 1;
            }
        } else {
            while end < lines.len() && !lines[end].trim().is_empty() {
                end += 1;
            }
        }

        let fragment = Fragment::new(lines[i..end].join("\n"), date);
        for tag in tags {
            result
                .entry(tag.to_string())
                .or_default()
                .push(fragment.clone());
        }

        i = end;
    }

    result
}
