//! The floating hover tooltip widget.

use serde::{Deserialize, Serialize};
use std::any::Any;
use tesela_core::{
    Canvas, Color, Constraints, Event, LayoutResult, Point, Rect, Size, TextStyle, Widget,
};

/// Offset of the panel from the pointer, on both axes.
pub const POINTER_OFFSET: f32 = 10.0;

/// Floating panel showing the hovered tile's name, category, and value.
///
/// Visibility and position are the only mutable UI state outside the
/// chart geometry: the owning chart shows the tooltip from tile hover
/// messages, moves it as the pointer moves, and hides it on leave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tooltip {
    lines: Vec<String>,
    value: Option<f64>,
    visible: bool,
    position: Point,
    background: Color,
    text_color: Color,
    border_color: Color,
    border_width: f32,
    padding: f32,
    text_size: f32,
    test_id_value: Option<String>,
    #[serde(skip)]
    bounds: Rect,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            value: None,
            visible: false,
            position: Point::ORIGIN,
            background: Color::new(0.15, 0.15, 0.15, 0.95),
            text_color: Color::WHITE,
            border_color: Color::new(0.3, 0.3, 0.3, 1.0),
            border_width: 1.0,
            padding: 8.0,
            text_size: 12.0,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }
}

impl Tooltip {
    /// Create a hidden tooltip.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set background color.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set text color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set border color.
    #[must_use]
    pub const fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Set border width.
    #[must_use]
    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width.max(0.0);
        self
    }

    /// Set padding.
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Set text size.
    #[must_use]
    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size.max(8.0);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Populate the panel for a tile and show it.
    pub fn show(&mut self, name: &str, category: &str, value: f64) {
        self.lines = vec![
            name.to_string(),
            format!("Platform: {category}"),
            format!("Sales: {value} million"),
        ];
        self.value = Some(value);
        self.visible = true;
    }

    /// Move the panel to track the pointer.
    pub fn move_to(&mut self, pointer: Point) {
        self.position = pointer;
    }

    /// Hide the panel and drop its value.
    pub fn hide(&mut self) {
        self.visible = false;
        self.value = None;
        self.lines.clear();
    }

    /// Whether the panel is visible.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// The hovered value, exposed while visible for test harnesses.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    /// The panel's text lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The pointer position the panel is anchored to.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    // Approximate: chars * text_size * 0.6.
    fn calculate_size(&self) -> Size {
        let longest = self
            .lines
            .iter()
            .map(String::len)
            .max()
            .unwrap_or(0) as f32;
        let content_width = longest * self.text_size * 0.6;
        let content_height = self.lines.len() as f32 * self.text_size * 1.2;
        Size::new(
            self.padding.mul_add(2.0, content_width),
            self.padding.mul_add(2.0, content_height),
        )
    }
}

impl Widget for Tooltip {
    fn measure(&self, constraints: Constraints) -> Size {
        if !self.visible || self.lines.is_empty() {
            return Size::ZERO;
        }
        constraints.constrain(self.calculate_size())
    }

    fn layout(&mut self, _bounds: Rect) -> LayoutResult {
        if !self.visible || self.lines.is_empty() {
            self.bounds = Rect::default();
            return LayoutResult::new(Size::ZERO);
        }

        let size = self.calculate_size();
        let origin = self.position.offset(POINTER_OFFSET, POINTER_OFFSET);
        self.bounds = Rect::new(origin.x, origin.y, size.width, size.height);
        LayoutResult::new(size)
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if !self.visible || self.lines.is_empty() {
            return;
        }

        canvas.fill_rect(self.bounds, self.background);
        if self.border_width > 0.0 {
            canvas.stroke_rect(self.bounds, self.border_color, self.border_width);
        }

        let style = TextStyle::new(self.text_size).with_color(self.text_color);
        for (i, line) in self.lines.iter().enumerate() {
            canvas.fill_text(
                line,
                Point::new(
                    self.bounds.x + self.padding,
                    (self.text_size * 1.2).mul_add(
                        i as f32,
                        self.bounds.y + self.padding + self.text_size,
                    ),
                ),
                &style,
            );
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::PointerMove { position } => self.move_to(*position),
            Event::PointerLeave => self.hide(),
            Event::PointerEnter { .. } | Event::Resize { .. } => {}
        }
        None
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
