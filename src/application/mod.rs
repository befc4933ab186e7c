//! Application layer - Use cases and orchestration

pub mod collect;
pub mod sift;
pub mod write_snippets;

pub use collect::{aggregate, collect_snippets, Collection};
pub use sift::{SiftService, SiftSummary};
pub use write_snippets::write_snippets;
