//! Dataset parsing and hierarchy building for Tesela treemaps.
//!
//! Turns a JSON dataset document into flat [`Record`]s and groups those
//! into the three-level [`Hierarchy`] the layout engine consumes.

pub mod document;
pub mod error;
pub mod hierarchy;
pub mod record;

pub use document::{records_from_json, CategoryGroup, Dataset, LeafEntry};
pub use error::DataError;
pub use hierarchy::{CategoryNode, Hierarchy, LeafNode};
pub use record::Record;
