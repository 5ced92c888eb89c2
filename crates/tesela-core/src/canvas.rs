//! A `Canvas` implementation that records draw commands.

use crate::color::Color;
use crate::draw::DrawCommand;
use crate::geometry::{Point, Rect};
use crate::widget::{Canvas, TextStyle};

/// Records every primitive as a `DrawCommand` for later replay.
///
/// This is both the test double for widget painting and the bridge
/// between pure rendering and platform adapters.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create an empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, leaving the canvas empty.
    #[must_use]
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Discard all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::filled_rect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::stroked_rect(rect, color, width));
    }

    fn fill_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands
            .push(DrawCommand::text(text, position, *style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_paint_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        canvas.fill_text("label", Point::new(4.0, 14.0), &TextStyle::default());

        assert_eq!(canvas.command_count(), 2);
        assert!(matches!(canvas.commands()[0], DrawCommand::Rect { .. }));
        assert!(matches!(canvas.commands()[1], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_take_commands_empties() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::default(), Color::BLACK);
        let taken = canvas.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut canvas = RecordingCanvas::new();
        canvas.stroke_rect(Rect::default(), Color::BLACK, 1.0);
        canvas.clear();
        assert!(canvas.is_empty());
    }
}
