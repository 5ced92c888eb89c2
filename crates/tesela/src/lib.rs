//! Tesela: a squarified-treemap chart for the browser.
//!
//! The chart is split into a pure core and a thin platform layer. Data
//! decoding, hierarchy construction, tiling, label wrapping, and the
//! hover state machine all run natively and are tested natively; the
//! [`browser`] module (WASM only) translates DOM events into chart
//! events and replays draw-command frames onto Canvas2D contexts.
//!
//! ```
//! use tesela::{ChartState, Event};
//! use tesela_data::Record;
//!
//! let records = vec![
//!     Record::new("Wii Sports", "Wii", 82.53),
//!     Record::new("Super Mario Bros.", "NES", 40.24),
//! ];
//! let mut chart = ChartState::new(records, 800.0).unwrap();
//! chart.handle_event(&Event::Resize { width: 400.0, height: 240.0 });
//! let frame = chart.render();
//! assert!(!frame.chart.is_empty());
//! ```

pub mod browser;
pub mod chart;

pub use chart::{ChartState, Frame, ASPECT_RATIO, TILE_PADDING};

pub use tesela_core::{Color, DrawCommand, Event, LeafId, Point, Rect, Size};
pub use tesela_data::{records_from_json, DataError, Hierarchy, Record};
pub use tesela_widgets::{Legend, Tile, Tooltip, Treemap};
