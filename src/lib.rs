//! markdownsift - Hashtag snippet collector
//!
//! Scans a directory of dated markdown notes (`YYYY-MM-DD.md`), pulls out the
//! blocks introduced by hashtag lines and groups them by tag, either on
//! standard output or in one file per tag.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SiftError;
