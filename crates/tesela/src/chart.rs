//! Explicit chart state and the pure render entry point.

use serde::{Deserialize, Serialize};
use tesela_core::{
    Constraints, DrawCommand, Event, LeafId, OrdinalScale, Rect, RecordingCanvas, Size, Widget,
};
use tesela_data::{DataError, Hierarchy, Record};
use tesela_widgets::{legend, Legend, Tile, TileHovered, TileLeft, Tooltip, Treemap};

/// Chart height as a multiple of its width.
pub const ASPECT_RATIO: f32 = 0.6;
/// Padding between sibling tiles in pixels.
pub const TILE_PADDING: f32 = 2.0;

/// One rendered frame: draw commands for the chart surface and for the
/// legend surface, ready for a platform adapter to replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Tiles, labels, and tooltip
    pub chart: Vec<DrawCommand>,
    /// Legend swatches and labels
    pub legend: Vec<DrawCommand>,
}

/// All chart state in one explicit value.
///
/// The hierarchy and color scale are built once from the records and
/// never recomputed; resizes re-run only the layout engine on the same
/// hierarchy. Events are dispatched synchronously and each handler
/// runs to completion, so there is never a concurrent writer.
#[derive(Debug, Clone)]
pub struct ChartState {
    treemap: Treemap,
    legend: Legend,
    tooltip: Tooltip,
    chart_rect: Rect,
}

impl ChartState {
    /// Build the chart from records at an initial container width.
    ///
    /// Fails fast on an empty or malformed record list; a dataset that
    /// cannot be charted never reaches the layout engine.
    pub fn new(records: Vec<Record>, width: f32) -> Result<Self, DataError> {
        let hierarchy = Hierarchy::build(records)?;
        let scale = OrdinalScale::category10().assign(hierarchy.category_names());
        let legend = Legend::from_scale(&scale);
        let treemap = Treemap::new(hierarchy, scale).padding(TILE_PADDING);

        let mut state = Self {
            treemap,
            legend,
            tooltip: Tooltip::new(),
            chart_rect: Rect::default(),
        };
        state.resize(width);
        Ok(state)
    }

    /// Recompute the chart rectangle for a new container width and
    /// re-run the layout engine in place.
    ///
    /// Height is derived as a fixed aspect multiple of width. The
    /// hierarchy, leaf ids, and colors are untouched; the legend does
    /// not reflow (its width is independent of the chart's).
    pub fn resize(&mut self, width: f32) {
        let width = width.max(0.0);
        self.chart_rect = Rect::new(0.0, 0.0, width, width * ASPECT_RATIO);
        self.treemap.layout(self.chart_rect);

        let legend_size = self
            .legend
            .measure(Constraints::loose(Size::new(f32::INFINITY, legend::BAND_HEIGHT)));
        self.legend.layout(Rect::from_size(legend_size));
        self.sync_tooltip();
    }

    /// Dispatch one event synchronously.
    ///
    /// `Resize` is handled from its width alone; the carried height is
    /// ignored and the chart height is re-derived at `ASPECT_RATIO`.
    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Resize { width, .. } = event {
            self.resize(*width);
            return;
        }

        match self.treemap.event(event) {
            Some(message) => {
                if let Some(hovered) = message.downcast_ref::<TileHovered>() {
                    self.tooltip
                        .show(&hovered.name, &hovered.category, hovered.value);
                    self.tooltip
                        .move_to(event.position().unwrap_or(hovered.anchor));
                } else if message.downcast_ref::<TileLeft>().is_some() {
                    self.tooltip.hide();
                }
            }
            // No hover change: the tooltip still tracks moves and leaves.
            None => {
                let _ = self.tooltip.event(event);
            }
        }
        self.sync_tooltip();
    }

    /// Render the current state into draw-command lists.
    ///
    /// Pure over the state: identical state yields an identical frame.
    #[must_use]
    pub fn render(&self) -> Frame {
        let mut chart = RecordingCanvas::new();
        self.treemap.paint(&mut chart);
        self.tooltip.paint(&mut chart);

        let mut legend = RecordingCanvas::new();
        self.legend.paint(&mut legend);

        Frame {
            chart: chart.take_commands(),
            legend: legend.take_commands(),
        }
    }

    /// The chart rectangle from the last resize.
    #[must_use]
    pub const fn chart_rect(&self) -> Rect {
        self.chart_rect
    }

    /// Tiles from the last layout pass.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        self.treemap.tiles()
    }

    /// The currently hovered leaf, if any.
    #[must_use]
    pub const fn hovered(&self) -> Option<LeafId> {
        self.treemap.hovered()
    }

    /// The hovered value while the tooltip is visible.
    #[must_use]
    pub const fn hovered_value(&self) -> Option<f64> {
        self.tooltip.value()
    }

    /// The tooltip widget.
    #[must_use]
    pub const fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// The legend widget.
    #[must_use]
    pub const fn legend(&self) -> &Legend {
        &self.legend
    }

    /// The hierarchy backing the chart.
    #[must_use]
    pub const fn hierarchy(&self) -> &Hierarchy {
        self.treemap.hierarchy()
    }

    fn sync_tooltip(&mut self) {
        let _ = self.tooltip.layout(self.chart_rect);
    }
}
