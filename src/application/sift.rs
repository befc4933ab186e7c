//! Full sift pipeline: collect, filter, write

use super::collect::collect_snippets;
use super::write_snippets::write_snippets;
use crate::domain::fragment::fragment_count;
use crate::error::{Result, SiftError};
use crate::infrastructure::{ConsoleWriter, FileWriter, OutputTarget, Settings, TagWriter};

/// What a run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SiftSummary {
    pub documents: usize,
    pub tags: usize,
    pub fragments: usize,
}

/// Service running one sift over a notes directory
pub struct SiftService {
    settings: Settings,
}

impl SiftService {
    pub fn new(settings: Settings) -> Self {
        SiftService { settings }
    }

    /// Execute with the writer chosen by the configured output target
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source directory cannot be listed
    /// - The output directory or an output file cannot be created or written
    pub fn execute(&self) -> Result<SiftSummary> {
        match &self.settings.output {
            OutputTarget::Stdout => self.execute_with(&mut ConsoleWriter::stdout()),
            OutputTarget::File(dir) => {
                let mut writer =
                    FileWriter::new(dir).map_err(|source| SiftError::Output {
                        path: dir.clone(),
                        source,
                    })?;
                self.execute_with(&mut writer)
            }
        }
    }

    /// Execute, rendering into `writer`
    pub fn execute_with(&self, writer: &mut dyn TagWriter) -> Result<SiftSummary> {
        let collection = collect_snippets(&self.settings.source)?;
        let selected = self.settings.tags.apply(collection.snippets);
        tracing::info!(
            "Writing {} tag(s) selected by {}",
            selected.len(),
            self.settings.tags
        );

        write_snippets(&selected, writer)?;

        Ok(SiftSummary {
            documents: collection.documents,
            tags: selected.len(),
            fragments: fragment_count(&selected),
        })
    }
}
