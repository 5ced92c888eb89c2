//! The JSON dataset document shape.
//!
//! The canonical feed is the d3-style nested document: a root with one
//! child group per category, each holding the leaf entries. A flat
//! array of records is accepted as an equivalent structure; the only
//! contract the chart relies on is that the document resolves into a
//! record list.

use crate::error::DataError;
use crate::record::Record;
use serde::Deserialize;

/// Nested dataset document root.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    /// Dataset title
    pub name: String,
    /// One group per category
    #[serde(default)]
    pub children: Vec<CategoryGroup>,
}

/// A category group in the nested document.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryGroup {
    /// Group name, used as the category when entries omit theirs
    pub name: String,
    /// Leaf entries
    #[serde(default)]
    pub children: Vec<LeafEntry>,
}

/// A leaf entry in the nested document.
#[derive(Debug, Clone, Deserialize)]
pub struct LeafEntry {
    /// Display name
    pub name: String,
    /// Category; falls back to the enclosing group's name when absent
    #[serde(default)]
    pub category: Option<String>,
    /// Magnitude
    pub value: f64,
}

impl Dataset {
    /// Flatten the nested document into records in document order.
    #[must_use]
    pub fn flatten(&self) -> Vec<Record> {
        self.children
            .iter()
            .flat_map(|group| {
                group.children.iter().map(|entry| {
                    let category = entry.category.as_deref().unwrap_or(&group.name);
                    Record::new(entry.name.clone(), category, entry.value)
                })
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Nested(Dataset),
    Flat(Vec<Record>),
}

/// Parse a dataset document (nested or flat) into records.
pub fn records_from_json(json: &str) -> Result<Vec<Record>, DataError> {
    let document: Document = serde_json::from_str(json)?;
    Ok(match document {
        Document::Nested(dataset) => dataset.flatten(),
        Document::Flat(records) => records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NESTED: &str = r#"{
        "name": "Video Game Sales",
        "children": [
            {
                "name": "Wii",
                "children": [
                    {"name": "Wii Sports", "category": "Wii", "value": 82.53},
                    {"name": "Mario Kart Wii", "category": "Wii", "value": 35.52}
                ]
            },
            {
                "name": "NES",
                "children": [
                    {"name": "Super Mario Bros", "value": 40.24}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_nested_document_flattens_in_order() {
        let records = records_from_json(NESTED).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], Record::new("Wii Sports", "Wii", 82.53));
        // Category falls back to the group name.
        assert_eq!(records[2], Record::new("Super Mario Bros", "NES", 40.24));
    }

    #[test]
    fn test_flat_document() {
        let records =
            records_from_json(r#"[{"name":"A","category":"X","value":10.0}]"#).unwrap();
        assert_eq!(records, vec![Record::new("A", "X", 10.0)]);
    }

    #[test]
    fn test_empty_children_defaults() {
        let records = records_from_json(r#"{"name":"Empty"}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            records_from_json("not json"),
            Err(DataError::Json(_))
        ));
        assert!(matches!(
            records_from_json(r#"{"children": 3}"#),
            Err(DataError::Json(_))
        ));
    }
}
