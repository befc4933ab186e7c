//! Infrastructure layer - External I/O and configuration

pub mod config;
pub mod selector;
pub mod writer;

pub use config::{ConfigFile, OutputTarget, RawSettings, Settings};
pub use selector::select_notes;
pub use writer::{ConsoleWriter, FileWriter, TagWriter};
