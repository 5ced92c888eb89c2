//! Grouping flat records into the three-level chart hierarchy.

use crate::error::DataError;
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tesela_core::LeafId;

/// A leaf of the hierarchy, wrapping one input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    /// Stable identity across layout passes
    pub id: LeafId,
    /// The underlying record; its value is the leaf's aggregate
    pub record: Record,
}

/// One category and its leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    /// Category name
    pub category: String,
    /// Aggregate value, the sum of the leaves' values
    pub value: f64,
    /// Leaves in descending value order (stable ties)
    pub leaves: Vec<LeafNode>,
}

/// The rooted chart hierarchy: root, categories, leaves.
///
/// The tree is exactly three levels deep by construction. Categories
/// are ordered descending by aggregate value and leaves descending by
/// value within each category, both with stable ties, so traversal
/// order is deterministic for a given record sequence. Built once per
/// dataset load; layout passes read it without mutating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hierarchy {
    value: f64,
    categories: Vec<CategoryNode>,
}

impl Hierarchy {
    /// Group records by category and aggregate their values.
    ///
    /// Fails on an empty record list or any record with a negative,
    /// non-finite, or category-less value.
    pub fn build(records: Vec<Record>) -> Result<Self, DataError> {
        if records.is_empty() {
            return Err(DataError::EmptyDataset);
        }

        let mut categories: Vec<CategoryNode> = Vec::new();
        for record in records {
            if !record.value.is_finite() {
                return Err(DataError::NonFiniteValue { name: record.name });
            }
            if record.value < 0.0 {
                return Err(DataError::NegativeValue {
                    name: record.name,
                    value: record.value,
                });
            }
            if record.category.is_empty() {
                return Err(DataError::MissingCategory { name: record.name });
            }

            let leaf = LeafNode {
                id: LeafId::new(0),
                record,
            };
            match categories
                .iter_mut()
                .find(|node| node.category == leaf.record.category)
            {
                Some(node) => {
                    node.value += leaf.record.value;
                    node.leaves.push(leaf);
                }
                None => categories.push(CategoryNode {
                    category: leaf.record.category.clone(),
                    value: leaf.record.value,
                    leaves: vec![leaf],
                }),
            }
        }

        for node in &mut categories {
            node.leaves
                .sort_by(|a, b| descending(a.record.value, b.record.value));
        }
        categories.sort_by(|a, b| descending(a.value, b.value));

        // Ids follow the final traversal order, so they are stable for
        // the dataset's lifetime.
        let mut next = 0u32;
        for node in &mut categories {
            for leaf in &mut node.leaves {
                leaf.id = LeafId::new(next);
                next += 1;
            }
        }

        let value = categories.iter().map(|node| node.value).sum();
        Ok(Self { value, categories })
    }

    /// Root aggregate value, the sum of all record values.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Categories in descending aggregate order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryNode] {
        &self.categories
    }

    /// Category names in traversal order, the order colors are assigned.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|node| node.category.as_str())
    }

    /// All leaves in traversal (id) order.
    pub fn leaves(&self) -> impl Iterator<Item = &LeafNode> {
        self.categories.iter().flat_map(|node| node.leaves.iter())
    }

    /// Total number of leaves.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.categories.iter().map(|node| node.leaves.len()).sum()
    }

    /// Look up a leaf by id.
    #[must_use]
    pub fn leaf(&self, id: LeafId) -> Option<&LeafNode> {
        self.leaves().find(|leaf| leaf.id == id)
    }
}

// Descending order with stable ties; NaN cannot reach here because
// build rejects non-finite values.
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("A", "X", 10.0),
            Record::new("B", "X", 30.0),
            Record::new("C", "Y", 60.0),
        ]
    }

    #[test]
    fn test_root_aggregate_is_total() {
        let h = Hierarchy::build(sample()).unwrap();
        assert_eq!(h.value(), 100.0);
    }

    #[test]
    fn test_category_aggregates_sum_leaves() {
        let h = Hierarchy::build(sample()).unwrap();
        for node in h.categories() {
            let total: f64 = node.leaves.iter().map(|l| l.record.value).sum();
            assert_eq!(node.value, total);
        }
    }

    #[test]
    fn test_categories_sorted_descending() {
        let h = Hierarchy::build(sample()).unwrap();
        let names: Vec<&str> = h.category_names().collect();
        assert_eq!(names, vec!["Y", "X"]);
    }

    #[test]
    fn test_leaves_sorted_descending_within_category() {
        let h = Hierarchy::build(sample()).unwrap();
        let x = &h.categories()[1];
        assert_eq!(x.leaves[0].record.name, "B");
        assert_eq!(x.leaves[1].record.name, "A");
    }

    #[test]
    fn test_ties_keep_original_order() {
        let h = Hierarchy::build(vec![
            Record::new("first", "X", 5.0),
            Record::new("second", "X", 5.0),
        ])
        .unwrap();
        let leaves: Vec<&str> = h.leaves().map(|l| l.record.name.as_str()).collect();
        assert_eq!(leaves, vec!["first", "second"]);
    }

    #[test]
    fn test_ids_follow_traversal_order() {
        let h = Hierarchy::build(sample()).unwrap();
        let ids: Vec<u32> = h.leaves().map(|l| l.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(h.leaf(LeafId::new(0)).unwrap().record.name, "C");
    }

    #[test]
    fn test_empty_dataset_fails() {
        assert!(matches!(
            Hierarchy::build(vec![]),
            Err(DataError::EmptyDataset)
        ));
    }

    #[test]
    fn test_negative_value_fails() {
        assert!(matches!(
            Hierarchy::build(vec![Record::new("A", "X", -1.0)]),
            Err(DataError::NegativeValue { .. })
        ));
    }

    #[test]
    fn test_non_finite_value_fails() {
        assert!(matches!(
            Hierarchy::build(vec![Record::new("A", "X", f64::NAN)]),
            Err(DataError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn test_missing_category_fails() {
        assert!(matches!(
            Hierarchy::build(vec![Record::new("A", "", 1.0)]),
            Err(DataError::MissingCategory { .. })
        ));
    }

    #[test]
    fn test_zero_values_allowed() {
        let h = Hierarchy::build(vec![Record::new("A", "X", 0.0)]).unwrap();
        assert_eq!(h.value(), 0.0);
        assert_eq!(h.leaf_count(), 1);
    }
}
