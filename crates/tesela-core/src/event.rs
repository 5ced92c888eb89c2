//! Chart events dispatched synchronously to widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Stable identity of a hierarchy leaf for the dataset's lifetime.
///
/// Assigned once when the hierarchy is built and unchanged by layout
/// passes, so hover state survives a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeafId(pub u32);

impl LeafId {
    /// Create a leaf id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// The fixed set of events the chart reacts to.
///
/// Each event is handled synchronously to completion; there is no queue
/// depth and no reentrancy on the single UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The viewport changed size.
    Resize {
        /// New container content width in pixels
        width: f32,
        /// New container content height in pixels. Advisory: the chart
        /// derives its height from the width at a fixed aspect ratio,
        /// so an inconsistent pair resolves in favor of the width.
        height: f32,
    },
    /// The pointer entered a specific leaf tile.
    PointerEnter {
        /// The tile's leaf
        leaf: LeafId,
    },
    /// The pointer moved within the chart.
    PointerMove {
        /// Pointer position relative to the chart origin
        position: Point,
    },
    /// The pointer left the chart.
    PointerLeave,
}

impl Event {
    /// Whether this is a pointer event.
    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::PointerEnter { .. } | Self::PointerMove { .. } | Self::PointerLeave
        )
    }

    /// The pointer position, if this event carries one.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::PointerMove { position } => Some(*position),
            _ => None,
        }
    }
}
