//! The category legend widget.

use serde::{Deserialize, Serialize};
use tesela_core::{
    Canvas, Color, Constraints, LayoutResult, OrdinalScale, Point, Rect, Size, TextStyle, Widget,
};

/// Horizontal distance between the starts of adjacent legend items.
pub const ITEM_STRIDE: f32 = 100.0;
/// Side length of the color swatch.
pub const SWATCH_SIZE: f32 = 20.0;
/// Label offset from the item origin.
pub const LABEL_OFFSET: Point = Point::new(25.0, 15.0);
/// Vertical offset of the item row within the legend band.
pub const ROW_OFFSET: f32 = 20.0;
/// Height of the legend band.
pub const BAND_HEIGHT: f32 = 100.0;

/// One fixed-size color swatch plus label per category, in the order
/// colors were assigned.
///
/// Items are laid left to right on a single row with uniform spacing.
/// There is no wrapping or overflow handling: categories beyond the
/// available width render off-canvas. Known limitation, kept as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    entries: Vec<(String, Color)>,
    text_size: f32,
    text_color: Color,
    test_id_value: Option<String>,
    #[serde(skip)]
    bounds: Rect,
}

impl Legend {
    /// Create a legend from explicit entries.
    #[must_use]
    pub fn new(entries: Vec<(String, Color)>) -> Self {
        Self {
            entries,
            text_size: 14.0,
            text_color: Color::BLACK,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Create a legend mirroring a color scale's assignments.
    #[must_use]
    pub fn from_scale(scale: &OrdinalScale) -> Self {
        Self::new(scale.entries().to_vec())
    }

    /// Set the label text size.
    #[must_use]
    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size.max(8.0);
        self
    }

    /// Set the label text color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// The `(category, color)` entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[(String, Color)] {
        &self.entries
    }
}

impl Widget for Legend {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(
            self.entries.len() as f32 * ITEM_STRIDE,
            BAND_HEIGHT,
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult::new(bounds.size())
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let style = TextStyle::new(self.text_size).with_color(self.text_color);
        for (i, (category, color)) in self.entries.iter().enumerate() {
            let item = Point::new(
                ITEM_STRIDE.mul_add(i as f32, self.bounds.x),
                self.bounds.y + ROW_OFFSET,
            );
            canvas.fill_rect(Rect::new(item.x, item.y, SWATCH_SIZE, SWATCH_SIZE), *color);
            canvas.fill_text(category, item + LABEL_OFFSET, &style);
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tesela_core::{DrawCommand, RecordingCanvas};

    fn sample() -> Legend {
        Legend::from_scale(&OrdinalScale::category10().assign(["Y", "X"]))
    }

    #[test]
    fn test_from_scale_preserves_order() {
        let legend = sample();
        let names: Vec<&str> = legend.entries().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Y", "X"]);
    }

    #[test]
    fn test_entries_have_distinct_colors() {
        let legend = sample();
        assert_ne!(legend.entries()[0].1, legend.entries()[1].1);
    }

    #[test]
    fn test_paint_one_swatch_and_label_per_entry() {
        let mut legend = sample();
        legend.layout(Rect::new(0.0, 0.0, 400.0, BAND_HEIGHT));
        let mut canvas = RecordingCanvas::new();
        legend.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 4);

        // Items stride uniformly along a single row.
        let swatches: Vec<Rect> = canvas
            .commands()
            .iter()
            .filter_map(DrawCommand::rect_bounds)
            .collect();
        assert_eq!(swatches[0], Rect::new(0.0, ROW_OFFSET, SWATCH_SIZE, SWATCH_SIZE));
        assert_eq!(
            swatches[1],
            Rect::new(ITEM_STRIDE, ROW_OFFSET, SWATCH_SIZE, SWATCH_SIZE)
        );
    }

    #[test]
    fn test_labels_sit_beside_swatches() {
        let mut legend = sample();
        legend.layout(Rect::new(0.0, 0.0, 400.0, BAND_HEIGHT));
        let mut canvas = RecordingCanvas::new();
        legend.paint(&mut canvas);

        for cmd in canvas.commands() {
            if let DrawCommand::Text { position, style, .. } = cmd {
                assert_eq!(position.y, ROW_OFFSET + LABEL_OFFSET.y);
                assert_eq!(style.size, 14.0);
                assert_eq!(style.color, Color::BLACK);
                assert!((position.x - LABEL_OFFSET.x) % ITEM_STRIDE == 0.0);
            }
        }
    }

    #[test]
    fn test_measure_grows_with_entries() {
        let legend = sample();
        let size = legend.measure(Constraints::loose(Size::new(1000.0, 1000.0)));
        assert_eq!(size, Size::new(2.0 * ITEM_STRIDE, BAND_HEIGHT));
    }
}
