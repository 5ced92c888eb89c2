//! Treemap, legend, and tooltip widgets for Tesela.
//!
//! Widgets paint into a [`tesela_core::Canvas`] and never touch a
//! platform surface, so every visual contract here is asserted against
//! a `RecordingCanvas` in native tests.

pub mod legend;
pub mod tooltip;
pub mod treemap;

pub use legend::Legend;
pub use tooltip::Tooltip;
pub use treemap::{Tile, TileHovered, TileLeft, Treemap};
