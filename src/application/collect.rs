//! Snippet collection use case
//!
//! Reads every dated note in a directory and merges the hashtag blocks found
//! in each one into a single mapping.

use crate::domain::fragment::merge_into;
use crate::domain::tags::extract;
use crate::domain::{Document, FragmentMap};
use crate::error::Result;
use crate::infrastructure::select_notes;
use std::path::Path;

/// Merge the blocks of each document, in the order given
pub fn aggregate<I>(documents: I) -> FragmentMap
where
    I: IntoIterator<Item = Document>,
{
    let mut snippets = FragmentMap::new();
    for document in documents {
        let blocks = extract(&document.content, document.date);
        tracing::debug!(
            "{}: {} tag(s) found",
            document.name,
            blocks.len()
        );
        merge_into(&mut snippets, blocks);
    }
    snippets
}

/// Snippets gathered from a directory, with the number of notes they came from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub snippets: FragmentMap,
    pub documents: usize,
}

/// Collect snippets from every dated note in `dir`.
///
/// # Errors
///
/// Fails only when `dir` cannot be listed. Notes that cannot be opened are
/// skipped with a warning and not counted.
pub fn collect_snippets(dir: &Path) -> Result<Collection> {
    let names = select_notes(dir)?;
    tracing::info!("Found {} note(s) in {}", names.len(), dir.display());

    let mut documents = 0;
    let loaded = names
        .into_iter()
        .filter_map(|name| match Document::load(dir, &name) {
            Ok(document) => Some(document),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", dir.join(&name).display(), e);
                None
            }
        })
        .inspect(|_| documents += 1);

    let snippets = aggregate(loaded);
    Ok(Collection {
        snippets,
        documents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiftError;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn doc(name: &str, content: &str, day: u32) -> Document {
        Document::new(
            name.to_string(),
            content.to_string(),
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
        )
    }

    #[test]
    fn test_aggregate_preserves_document_order() {
        let snippets = aggregate(vec![
            doc("2025-01-16.md", "Later #work", 16),
            doc("2025-01-15.md", "Earlier #work\n\nHome #personal", 15),
        ]);

        let work: Vec<(&str, u32)> = snippets["#work"]
            .iter()
            .map(|f| (f.content.as_str(), chrono::Datelike::day(&f.date)))
            .collect();
        assert_eq!(work, vec![("Later #work", 16), ("Earlier #work", 15)]);
        assert_eq!(snippets["#personal"].len(), 1);
    }

    #[test]
    fn test_aggregate_keeps_duplicates_across_documents() {
        let snippets = aggregate(vec![
            doc("2025-01-15.md", "Same #note", 15),
            doc("2025-01-16.md", "Same #note", 16),
        ]);
        assert_eq!(snippets["#note"].len(), 2);
    }

    #[test]
    fn test_aggregate_nothing() {
        assert!(aggregate(Vec::new()).is_empty());
    }

    #[test]
    fn test_collect_from_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2025-01-15.md"), "Met Ann #work\nnotes").unwrap();
        fs::write(temp.path().join("readme.md"), "Ignored #work").unwrap();

        let collection = collect_snippets(temp.path()).unwrap();
        assert_eq!(collection.documents, 1);
        let snippets = collection.snippets;
        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets["#work"][0].content, "Met Ann #work\nnotes");
        assert_eq!(
            snippets["#work"][0].date,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_collect_missing_directory_is_fatal() {
        let temp = TempDir::new().unwrap();
        let err = collect_snippets(&temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, SiftError::DirectoryAccess { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_skips_unreadable_notes() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2025-01-15.md"), "Fine #ok").unwrap();
        symlink(
            temp.path().join("does-not-exist"),
            temp.path().join("2025-01-16.md"),
        )
        .unwrap();

        let collection = collect_snippets(temp.path()).unwrap();
        assert_eq!(collection.documents, 1);
        assert_eq!(collection.snippets.keys().collect::<Vec<_>>(), vec!["#ok"]);
    }
}
