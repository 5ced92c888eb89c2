//! Layout constraints passed down the widget tree.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Min/max size bounds a widget must lay out within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum size
    pub min: Size,
    /// Maximum size
    pub max: Size,
}

impl Constraints {
    /// Create constraints with explicit min and max.
    #[must_use]
    pub const fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Constraints that force exactly the given size.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Constraints from zero up to the given size.
    #[must_use]
    pub const fn loose(max: Size) -> Self {
        Self {
            min: Size::ZERO,
            max,
        }
    }

    /// Clamp a size into these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min.width, self.max.width),
            size.height.clamp(self.min.height, self.max.height),
        )
    }

    /// Whether min and max coincide.
    #[must_use]
    pub fn is_tight(&self) -> bool {
        self.min == self.max
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::loose(Size::new(f32::INFINITY, f32::INFINITY))
    }
}
