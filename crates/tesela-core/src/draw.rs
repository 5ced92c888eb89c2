//! Platform-independent draw commands.
//!
//! Rendering is a pure function from chart state to a list of
//! `DrawCommand`s; platform adapters replay the list onto a concrete
//! surface (Canvas2D in the browser, a buffer in tests).

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::widget::TextStyle;
use serde::{Deserialize, Serialize};

/// Stroke styling for outlined shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl StrokeStyle {
    /// Create a stroke style.
    #[must_use]
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Fill and stroke styling for rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color, if any
    pub fill: Option<Color>,
    /// Stroke, if any
    pub stroke: Option<StrokeStyle>,
}

impl BoxStyle {
    /// Solid fill with no stroke.
    #[must_use]
    pub const fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Stroke only, no fill.
    #[must_use]
    pub const fn stroked(color: Color, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(StrokeStyle::new(color, width)),
        }
    }

    /// Add a stroke to this style.
    #[must_use]
    pub const fn with_stroke(mut self, color: Color, width: f32) -> Self {
        self.stroke = Some(StrokeStyle::new(color, width));
        self
    }
}

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// A rectangle with fill and/or stroke.
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill and stroke styling
        style: BoxStyle,
    },
    /// A run of text with its baseline anchored at `position`.
    Text {
        /// The text content
        content: String,
        /// Baseline anchor position
        position: Point,
        /// Text styling
        style: TextStyle,
    },
}

impl DrawCommand {
    /// A solid filled rectangle.
    #[must_use]
    pub const fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            style: BoxStyle::filled(color),
        }
    }

    /// A stroked rectangle outline.
    #[must_use]
    pub const fn stroked_rect(bounds: Rect, color: Color, width: f32) -> Self {
        Self::Rect {
            bounds,
            style: BoxStyle::stroked(color, width),
        }
    }

    /// A text run.
    #[must_use]
    pub fn text(content: impl Into<String>, position: Point, style: TextStyle) -> Self {
        Self::Text {
            content: content.into(),
            position,
            style,
        }
    }

    /// The bounds of a rect command, or `None` for text.
    #[must_use]
    pub const fn rect_bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect { bounds, .. } => Some(*bounds),
            Self::Text { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_rect() {
        let cmd = DrawCommand::filled_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        match cmd {
            DrawCommand::Rect { style, .. } => {
                assert_eq!(style.fill, Some(Color::WHITE));
                assert!(style.stroke.is_none());
            }
            DrawCommand::Text { .. } => panic!("expected rect"),
        }
    }

    #[test]
    fn test_box_style_with_stroke() {
        let style = BoxStyle::filled(Color::WHITE).with_stroke(Color::BLACK, 1.0);
        assert_eq!(style.fill, Some(Color::WHITE));
        assert_eq!(style.stroke, Some(StrokeStyle::new(Color::BLACK, 1.0)));
    }

    #[test]
    fn test_rect_bounds() {
        let bounds = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            DrawCommand::filled_rect(bounds, Color::BLACK).rect_bounds(),
            Some(bounds)
        );
        assert_eq!(
            DrawCommand::text("hi", Point::ORIGIN, TextStyle::default()).rect_bounds(),
            None
        );
    }

    #[test]
    fn test_serde_tagging() {
        let cmd = DrawCommand::text("GB", Point::new(4.0, 14.0), TextStyle::new(12.0));
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"op\":\"text\""));
        let back: DrawCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
