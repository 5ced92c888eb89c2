//! Core types and traits for the Tesela treemap toolkit.
//!
//! This crate is platform-independent: it defines geometry, color, the
//! chart event vocabulary, the `Widget`/`Canvas` traits, and the
//! `DrawCommand` list that platform adapters replay. Nothing here
//! touches the DOM, so everything is testable natively.

pub mod canvas;
pub mod color;
pub mod constraints;
pub mod draw;
pub mod event;
pub mod geometry;
pub mod scale;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, StrokeStyle};
pub use event::{Event, LeafId};
pub use geometry::{Point, Rect, Size};
pub use scale::{OrdinalScale, CATEGORY10};
pub use widget::{Canvas, FontWeight, LayoutResult, TextStyle, Widget};
