//! The `Widget` and `Canvas` traits plus text styling.

use crate::color::Color;
use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Font weight for text rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    /// Normal weight
    #[default]
    Normal,
    /// Bold weight
    Bold,
}

/// Style applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
}

impl TextStyle {
    /// Create a text style with the given size, black and normal weight.
    #[must_use]
    pub const fn new(size: f32) -> Self {
        Self {
            size,
            color: Color::BLACK,
            weight: FontWeight::Normal,
        }
    }

    /// Set the color.
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the weight.
    #[must_use]
    pub const fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutResult {
    /// The size the widget settled on
    pub size: Size,
}

impl LayoutResult {
    /// Create a layout result.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self { size }
    }
}

/// Drawing surface widgets paint into.
///
/// Implementations record or replay primitives; widgets never touch a
/// platform surface directly.
pub trait Canvas {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Draw a run of text with its baseline anchored at `position`.
    fn fill_text(&mut self, text: &str, position: Point, style: &TextStyle);
}

/// A paintable, event-aware element of the chart.
pub trait Widget {
    /// Compute the preferred size within the given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Assign final bounds and compute internal geometry.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Paint into the canvas using the bounds from the last layout.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an event, optionally emitting a typed message for the owner.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let _ = event;
        None
    }

    /// Bounds assigned by the last layout.
    fn bounds(&self) -> Rect;

    /// Optional identifier for test harnesses.
    fn test_id(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_style_builders() {
        let style = TextStyle::new(14.0)
            .with_color(Color::WHITE)
            .with_weight(FontWeight::Bold);
        assert_eq!(style.size, 14.0);
        assert_eq!(style.color, Color::WHITE);
        assert_eq!(style.weight, FontWeight::Bold);
    }

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.size, 12.0);
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.weight, FontWeight::Normal);
    }

    #[test]
    fn test_layout_result() {
        let r = LayoutResult::new(Size::new(100.0, 60.0));
        assert_eq!(r.size.width, 100.0);
    }
}
