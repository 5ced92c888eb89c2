//! Ordinal category-to-color scale.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// The d3 `schemeCategory10` palette.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Maps category names to palette colors by first-seen order.
///
/// Built once per dataset and never recomputed; entries keep insertion
/// order so the legend renders categories in the order colors were
/// assigned. The palette cycles when there are more categories than
/// colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdinalScale {
    palette: Vec<Color>,
    entries: Vec<(String, Color)>,
}

impl OrdinalScale {
    /// Create an empty scale over the `CATEGORY10` palette.
    #[must_use]
    pub fn category10() -> Self {
        Self::with_palette(
            CATEGORY10
                .iter()
                .map(|hex| Color::from_hex(hex).unwrap_or(Color::BLACK))
                .collect(),
        )
    }

    /// Create an empty scale over a custom palette.
    ///
    /// An empty palette falls back to black for every category.
    #[must_use]
    pub fn with_palette(palette: Vec<Color>) -> Self {
        Self {
            palette,
            entries: Vec::new(),
        }
    }

    /// Assign colors to categories in the given order.
    ///
    /// Already-assigned categories keep their color; new ones take the
    /// next palette slot modulo the palette length.
    #[must_use]
    pub fn assign<'a, I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        for category in categories {
            if self.get(category).is_none() {
                let color = if self.palette.is_empty() {
                    Color::BLACK
                } else {
                    self.palette[self.entries.len() % self.palette.len()]
                };
                self.entries.push((category.to_string(), color));
            }
        }
        self
    }

    /// Look up the color assigned to a category.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, color)| *color)
    }

    /// All `(category, color)` pairs in assignment order.
    #[must_use]
    pub fn entries(&self) -> &[(String, Color)] {
        &self.entries
    }

    /// Number of assigned categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no categories have been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_follows_first_seen_order() {
        let scale = OrdinalScale::category10().assign(["Wii", "NES", "GB"]);
        assert_eq!(scale.get("Wii"), Color::from_hex(CATEGORY10[0]).ok());
        assert_eq!(scale.get("NES"), Color::from_hex(CATEGORY10[1]).ok());
        assert_eq!(scale.get("GB"), Color::from_hex(CATEGORY10[2]).ok());
    }

    #[test]
    fn test_repeated_category_keeps_color() {
        let scale = OrdinalScale::category10().assign(["X", "Y", "X", "X"]);
        assert_eq!(scale.len(), 2);
        assert_eq!(scale.get("X"), Color::from_hex(CATEGORY10[0]).ok());
    }

    #[test]
    fn test_same_sequence_same_mapping() {
        let a = OrdinalScale::category10().assign(["X", "Y", "Z"]);
        let b = OrdinalScale::category10().assign(["X", "Y", "Z"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_palette_wraps_modulo_length() {
        let names: Vec<String> = (0..11).map(|i| format!("c{i}")).collect();
        let scale = OrdinalScale::category10().assign(names.iter().map(String::as_str));
        assert_eq!(scale.get("c10"), scale.get("c0"));
        assert_ne!(scale.get("c9"), scale.get("c0"));
    }

    #[test]
    fn test_entries_preserve_order() {
        let scale = OrdinalScale::category10().assign(["B", "A"]);
        let names: Vec<&str> = scale.entries().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_empty_palette_falls_back_to_black() {
        let scale = OrdinalScale::with_palette(vec![]).assign(["X"]);
        assert_eq!(scale.get("X"), Some(Color::BLACK));
    }

    #[test]
    fn test_unknown_category_is_none() {
        let scale = OrdinalScale::category10().assign(["X"]);
        assert_eq!(scale.get("Y"), None);
    }
}
