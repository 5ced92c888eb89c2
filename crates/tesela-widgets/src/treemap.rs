//! The treemap tile widget.

use serde::{Deserialize, Serialize};
use std::any::Any;
use tesela_core::{
    Canvas, Color, Constraints, Event, LayoutResult, LeafId, OrdinalScale, Point, Rect, Size,
    TextStyle, Widget,
};
use tesela_data::Hierarchy;
use tesela_layout::{layout_hierarchy, wrap_label, CHAR_WIDTH};

/// Maximum label font size in pixels.
pub const MAX_FONT_SIZE: f32 = 12.0;
/// Label line height in pixels.
pub const LINE_HEIGHT: f32 = 12.0;
/// Horizontal label inset from the tile's left edge.
pub const LABEL_INSET_X: f32 = 4.0;
/// Baseline of the first label line below the tile's top edge.
pub const LABEL_BASELINE_Y: f32 = 14.0;

/// One laid-out tile, cached between layout passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Stable leaf identity
    pub id: LeafId,
    /// Record name
    pub name: String,
    /// Record category
    pub category: String,
    /// Record value
    pub value: f64,
    /// Placed rectangle
    pub rect: Rect,
    /// Fill color from the category scale
    pub fill: Color,
    /// Label font size, shrunk for narrow tiles
    pub font_size: f32,
    /// Wrapped label lines
    pub lines: Vec<String>,
}

/// Message emitted when the pointer settles on a tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TileHovered {
    /// The tile's leaf
    pub id: LeafId,
    /// Record name
    pub name: String,
    /// Record category
    pub category: String,
    /// Record value
    pub value: f64,
    /// Top-left of the hovered tile, an anchor when the pointer
    /// position is unknown
    pub anchor: Point,
}

/// Message emitted when no tile is hovered anymore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLeft;

/// Draws one rectangle plus wrapped label per hierarchy leaf and maps
/// pointer events to hover messages.
///
/// The widget owns the hierarchy and color scale for the dataset's
/// lifetime; `layout` rebuilds only the tile geometry, so a resize
/// keeps leaf identities and colors untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treemap {
    hierarchy: Hierarchy,
    scale: OrdinalScale,
    padding: f32,
    preferred_size: Size,
    test_id_value: Option<String>,
    #[serde(skip)]
    tiles: Vec<Tile>,
    #[serde(skip)]
    hovered: Option<LeafId>,
    #[serde(skip)]
    bounds: Rect,
}

impl Treemap {
    /// Create a treemap over a hierarchy and its color scale.
    #[must_use]
    pub fn new(hierarchy: Hierarchy, scale: OrdinalScale) -> Self {
        Self {
            hierarchy,
            scale,
            padding: 2.0,
            preferred_size: Size::new(800.0, 480.0),
            test_id_value: None,
            tiles: Vec::new(),
            hovered: None,
            bounds: Rect::default(),
        }
    }

    /// Set the inter-tile padding.
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Set the preferred size reported by `measure`.
    #[must_use]
    pub const fn preferred_size(mut self, size: Size) -> Self {
        self.preferred_size = size;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// The hierarchy backing the tiles.
    #[must_use]
    pub const fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// The category color scale.
    #[must_use]
    pub const fn scale(&self) -> &OrdinalScale {
        &self.scale
    }

    /// Tiles from the last layout pass, in leaf id order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The currently hovered leaf, if any.
    #[must_use]
    pub const fn hovered(&self) -> Option<LeafId> {
        self.hovered
    }

    /// The tile containing the given point, if any.
    #[must_use]
    pub fn hit_test(&self, point: &Point) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.rect.contains_point(point))
    }

    /// Look up a tile by leaf id.
    #[must_use]
    pub fn tile(&self, id: LeafId) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    fn hover_message(tile: &Tile) -> Box<dyn Any + Send> {
        Box::new(TileHovered {
            id: tile.id,
            name: tile.name.clone(),
            category: tile.category.clone(),
            value: tile.value,
            anchor: tile.rect.origin(),
        })
    }
}

impl Widget for Treemap {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.preferred_size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.tiles = layout_hierarchy(&self.hierarchy, bounds, self.padding)
            .into_iter()
            .map(|leaf| {
                let fill = self.scale.get(&leaf.record.category).unwrap_or(Color::BLACK);
                let font_size = MAX_FONT_SIZE.min(leaf.rect.width / 5.0);
                let lines = wrap_label(&leaf.record.name, leaf.rect.width, CHAR_WIDTH);
                Tile {
                    id: leaf.id,
                    name: leaf.record.name,
                    category: leaf.record.category,
                    value: leaf.record.value,
                    rect: leaf.rect,
                    fill,
                    font_size,
                    lines,
                }
            })
            .collect();
        LayoutResult::new(bounds.size())
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        for tile in &self.tiles {
            canvas.fill_rect(tile.rect, tile.fill);

            let label_color = if tile.fill.is_light() {
                Color::BLACK
            } else {
                Color::WHITE
            };
            let style = TextStyle::new(tile.font_size).with_color(label_color);
            for (i, line) in tile.lines.iter().enumerate() {
                canvas.fill_text(
                    line,
                    Point::new(
                        tile.rect.x + LABEL_INSET_X,
                        LINE_HEIGHT.mul_add(i as f32, tile.rect.y + LABEL_BASELINE_Y),
                    ),
                    &style,
                );
            }
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::PointerEnter { leaf } => {
                self.hovered = Some(*leaf);
                self.tile(*leaf).map(Self::hover_message)
            }
            Event::PointerMove { position } => match self.hit_test(position) {
                Some(tile) if self.hovered != Some(tile.id) => {
                    let id = tile.id;
                    let message = Self::hover_message(tile);
                    self.hovered = Some(id);
                    Some(message)
                }
                Some(_) => None,
                None => {
                    if self.hovered.take().is_some() {
                        Some(Box::new(TileLeft))
                    } else {
                        None
                    }
                }
            },
            Event::PointerLeave => {
                if self.hovered.take().is_some() {
                    Some(Box::new(TileLeft))
                } else {
                    None
                }
            }
            Event::Resize { .. } => None,
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
