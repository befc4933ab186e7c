//! Source documents and filename dates

use super::fragment::DATE_FORMAT;
use chrono::{Local, NaiveDate};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// One note file: its name, raw text and the date taken from its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub content: String,
    pub date: NaiveDate,
}

impl Document {
    pub fn new(name: String, content: String, date: NaiveDate) -> Self {
        Document {
            name,
            content,
            date,
        }
    }

    /// Load `name` from `dir`.
    ///
    /// Failing to open the file is returned to the caller. A failure while
    /// reading an opened file yields a document with empty content.
    pub fn load(dir: &Path, name: &str) -> io::Result<Self> {
        let path = dir.join(name);
        let mut file = File::open(&path)?;

        let mut bytes = Vec::new();
        let content = match file.read_to_end(&mut bytes) {
            Ok(_) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                String::new()
            }
        };

        Ok(Document::new(name.to_string(), content, document_date(name)))
    }
}

/// Parse `YYYY-MM-DD.md` into a date, falling back to today
pub fn document_date(filename: &str) -> NaiveDate {
    parse_filename_date(filename).unwrap_or_else(|| {
        let today = Local::now().date_naive();
        tracing::debug!("No date in filename {}, using {}", filename, today);
        today
    })
}

fn parse_filename_date(filename: &str) -> Option<NaiveDate> {
    let stem = filename.strip_suffix(".md")?;
    NaiveDate::parse_from_str(stem, DATE_FORMAT).ok()
}
