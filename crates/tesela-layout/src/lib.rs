//! Squarified treemap layout engine and label wrapping for Tesela.
//!
//! Pure geometry: no widget or platform types, so the whole layout
//! pipeline is testable (and benchmarkable) natively.

pub mod squarify;
pub mod wrap;

pub use squarify::{layout_hierarchy, squarify, PositionedLeaf};
pub use wrap::{wrap_label, CHAR_WIDTH};
