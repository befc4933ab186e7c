//! Extracted fragments and the per-tag mapping they are grouped into

use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Date format used for fragment labels and filename parsing
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A block of text pulled out of a note, stamped with the note's date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub content: String,
    pub date: NaiveDate,
}

impl Fragment {
    pub fn new(content: String, date: NaiveDate) -> Self {
        Fragment { content, date }
    }

    /// Date rendered as `YYYY-MM-DD`
    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Hashtag (including the leading `#`) to fragments, in insertion order per tag.
///
/// Keys iterate in sorted order so rendered output is deterministic.
pub type FragmentMap = BTreeMap<String, Vec<Fragment>>;

/// Append every fragment list of `other` onto the matching list in `target`.
pub fn merge_into(target: &mut FragmentMap, other: FragmentMap) {
    for (tag, fragments) in other {
        target.entry(tag).or_default().extend(fragments);
    }
}

/// Total number of fragments across all tags
pub fn fragment_count(map: &FragmentMap) -> usize {
    map.values().map(Vec::len).sum()
}
