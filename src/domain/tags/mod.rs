//! Tag system

pub mod extractor;
pub mod filter;

// Re-export main types
pub use extractor::{extract, hashtags_in_line};
pub use filter::TagFilter;
