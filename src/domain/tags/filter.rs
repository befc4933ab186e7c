//! Restricting a fragment mapping to a chosen set of tags

use crate::domain::fragment::FragmentMap;
use std::collections::BTreeSet;
use std::fmt;

/// Set of hashtags to keep. An empty set keeps everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    tags: BTreeSet<String>,
}

impl TagFilter {
    /// Filter that keeps every tag
    pub fn all() -> Self {
        TagFilter::default()
    }

    /// Build a filter from tag names, with or without the leading `#`.
    ///
    /// Blank names are ignored.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = tags
            .into_iter()
            .filter_map(|tag| normalize_tag(tag.as_ref()))
            .collect();
        TagFilter { tags }
    }

    /// Parse a comma separated list such as `work,ai`
    ///
    /// # Examples
    ///
    /// ```
    /// use markdownsift::domain::tags::TagFilter;
    ///
    /// let filter = TagFilter::parse("work, ai");
    /// assert!(filter.contains("#work"));
    /// assert!(filter.contains("#ai"));
    /// assert!(!filter.contains("#home"));
    /// ```
    pub fn parse(list: &str) -> Self {
        Self::from_tags(list.split(','))
    }

    /// Whether this filter keeps every tag
    pub fn is_all(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.is_all() || self.tags.contains(tag)
    }

    /// Keep only the entries whose key is selected
    pub fn apply(&self, map: FragmentMap) -> FragmentMap {
        if self.is_all() {
            return map;
        }

        map.into_iter()
            .filter(|(tag, _)| self.tags.contains(tag))
            .collect()
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            return write!(f, "all tags");
        }
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        write!(f, "{}", tags.join(", "))
    }
}

fn normalize_tag(raw: &str) -> Option<String> {
    let name = raw.trim().trim_start_matches('#');
    if name.is_empty() {
        None
    } else {
        Some(format!("#{}", name))
    }
}
