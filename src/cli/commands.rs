//! CLI command definitions

use crate::infrastructure::RawSettings;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "markdownsift")]
#[command(about = "Collect hashtag-tagged snippets from dated markdown notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Source directory containing YYYY-MM-DD.md notes
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Comma separated tags to collect, without '#' (default: all tags)
    #[arg(long, value_name = "TAGS", value_delimiter = ',')]
    pub tags: Option<Vec<String>>,

    /// Output destination (stdout, file)
    #[arg(long, value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Output directory for file output
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML file with default values for the options above
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Option values given on the command line
    pub fn raw_settings(&self) -> RawSettings {
        RawSettings {
            path: self.path.clone(),
            tags: self.tags.clone(),
            output: self.output.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}
