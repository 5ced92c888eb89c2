//! The flat input datum.

use serde::{Deserialize, Serialize};

/// One leaf datum: a named, categorized, non-negative quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Display name
    pub name: String,
    /// Category the record belongs to
    pub category: String,
    /// Non-negative magnitude; drives the tile's area
    pub value: f64,
}

impl Record {
    /// Create a record.
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            value,
        }
    }
}
