//! Domain layer - Fragments, documents and the tag extraction rules

pub mod document;
pub mod fragment;
pub mod tags;

pub use document::{document_date, Document};
pub use fragment::{Fragment, FragmentMap};
