//! Rendering collected snippets through a tag writer

use crate::domain::{Fragment, FragmentMap};
use crate::error::{Result, SiftError};
use crate::infrastructure::TagWriter;
use std::io::{self, Write};

/// Header line that opens each tag section
pub fn section_header(tag: &str) -> String {
    format!("# Content tagged by {}\n", tag)
}

fn write_section(writer: &mut dyn TagWriter, tag: &str, fragments: &[Fragment]) -> io::Result<()> {
    writer.write_all(section_header(tag).as_bytes())?;
    for fragment in fragments {
        write!(writer, "{}:\n{}\n\n", fragment.date_label(), fragment.content)?;
    }
    Ok(())
}

fn output_error(writer: &dyn TagWriter, source: io::Error) -> SiftError {
    SiftError::Output {
        path: writer.destination(),
        source,
    }
}

/// Write one section per tag, in sorted tag order.
///
/// Each section is opened with `create` and always closed again once
/// opened. The first failure aborts the whole run.
pub fn write_snippets(snippets: &FragmentMap, writer: &mut dyn TagWriter) -> Result<()> {
    for (tag, fragments) in snippets {
        writer.create(tag).map_err(|e| output_error(&*writer, e))?;

        let written = write_section(writer, tag, fragments).map_err(|e| output_error(&*writer, e));
        let closed = writer.close().map_err(|e| output_error(&*writer, e));

        written.and(closed)?;
    }
    Ok(())
}
