//! Error types for markdownsift

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for markdownsift
#[derive(Debug, Error)]
pub enum SiftError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot read directory {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write output {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl SiftError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SiftError::Config(_) | SiftError::TomlDeserialize(_) => 2,
            SiftError::DirectoryAccess { .. } => 3,
            SiftError::Output { .. } => 4,
        }
    }

    /// Whether the command line usage should be shown alongside this error
    pub fn is_usage_error(&self) -> bool {
        matches!(self, SiftError::Config(_) | SiftError::TomlDeserialize(_))
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SiftError::Config(msg) => {
                if msg.contains("output must be") {
                    format!(
                        "{}\n\n\
                        Valid outputs: stdout, file\n\
                        Example: markdownsift --path notes --output file --output-dir topics",
                        msg
                    )
                } else if msg.contains("output-dir") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Pass --output-dir <DIR> on the command line\n\
                        • Set output_dir in the configuration file",
                        msg
                    )
                } else if msg.contains("path") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Pass --path <DIR> pointing at your notes directory\n\
                        • Set path in the configuration file (--config or MARKDOWNSIFT_CONFIG)",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            SiftError::DirectoryAccess { path, source } => {
                format!(
                    "Cannot read directory {}: {}\n\n\
                    Suggestions:\n\
                    • Check that the directory exists\n\
                    • Check that you have permission to list it",
                    path.display(),
                    source
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SiftError
pub type Result<T> = std::result::Result<T, SiftError>;
