//! Squarified treemap tiling.
//!
//! Rows of consecutive children are grown greedily as long as the
//! row's worst aspect ratio does not worsen, then laid as a strip
//! spanning the rectangle's shorter side (Bruls, Huizing, van Wijk).
//! Geometry is computed in `f64` and emitted as `f32`, and every step
//! is a pure function of its inputs, so two passes over the same
//! hierarchy and rectangle are bit-identical.

use serde::{Deserialize, Serialize};
use tesela_core::{LeafId, Rect};
use tesela_data::{Hierarchy, Record};

/// One leaf placed in pixel space, relative to the chart origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedLeaf {
    /// Stable leaf identity from the hierarchy
    pub id: LeafId,
    /// The underlying record
    pub record: Record,
    /// Placed rectangle, already inset by the layout padding
    pub rect: Rect,
}

/// Lay out every leaf of the hierarchy inside `target`.
///
/// The engine runs the squarify pass twice: once over the categories
/// within the full rectangle, then over each category's leaves within
/// its strip. Afterwards each leaf rectangle is inset by `padding` per
/// side, clamped to zero. Output order matches the hierarchy's
/// traversal (id) order.
///
/// Degenerate input (zero total value, zero-size rectangle) yields a
/// well-formed all-zero-area result rather than an error.
#[must_use]
pub fn layout_hierarchy(hierarchy: &Hierarchy, target: Rect, padding: f32) -> Vec<PositionedLeaf> {
    let category_values: Vec<f64> = hierarchy.categories().iter().map(|c| c.value).collect();
    let category_rects = squarify(&category_values, target);

    let mut leaves = Vec::with_capacity(hierarchy.leaf_count());
    for (node, strip) in hierarchy.categories().iter().zip(category_rects) {
        let leaf_values: Vec<f64> = node.leaves.iter().map(|l| l.record.value).collect();
        for (leaf, rect) in node.leaves.iter().zip(squarify(&leaf_values, strip)) {
            leaves.push(PositionedLeaf {
                id: leaf.id,
                record: leaf.record.clone(),
                rect: rect.inset(padding),
            });
        }
    }
    leaves
}

/// Tile `values` into `rect`, one sub-rectangle per value, areas
/// proportional to the values.
///
/// Values are expected in descending order (the hierarchy guarantees
/// this); the row heuristic only considers consecutive runs.
#[must_use]
pub fn squarify(values: &[f64], rect: Rect) -> Vec<Rect> {
    let total: f64 = values.iter().sum();
    let mut x = f64::from(rect.x);
    let mut y = f64::from(rect.y);
    let mut w = f64::from(rect.width);
    let mut h = f64::from(rect.height);

    if total <= 0.0 || w <= 0.0 || h <= 0.0 {
        return values
            .iter()
            .map(|_| Rect::new(rect.x, rect.y, 0.0, 0.0))
            .collect();
    }

    let scale = (w * h) / total;
    let areas: Vec<f64> = values.iter().map(|v| v.max(0.0) * scale).collect();

    let mut result = Vec::with_capacity(areas.len());
    let mut start = 0;
    while start < areas.len() {
        let short = w.min(h);

        // Grow the row while the worst aspect ratio does not worsen.
        let mut end = start + 1;
        let mut row_sum = areas[start];
        let mut worst = worst_aspect_ratio(&areas[start..end], row_sum, short);
        while end < areas.len() {
            let candidate_sum = row_sum + areas[end];
            let candidate = worst_aspect_ratio(&areas[start..=end], candidate_sum, short);
            if candidate > worst {
                break;
            }
            worst = candidate;
            row_sum = candidate_sum;
            end += 1;
        }

        // The strip spans the shorter side; its thickness consumes the
        // longer dimension.
        let thickness = if short > 0.0 { row_sum / short } else { 0.0 };
        let mut offset = 0.0;
        for &area in &areas[start..end] {
            let length = if thickness > 0.0 { area / thickness } else { 0.0 };
            let placed = if w >= h {
                Rect::new(
                    x as f32,
                    (y + offset) as f32,
                    thickness as f32,
                    length as f32,
                )
            } else {
                Rect::new(
                    (x + offset) as f32,
                    y as f32,
                    length as f32,
                    thickness as f32,
                )
            };
            result.push(placed);
            offset += length;
        }

        if w >= h {
            x += thickness;
            w = (w - thickness).max(0.0);
        } else {
            y += thickness;
            h = (h - thickness).max(0.0);
        }
        start = end;
    }

    result
}

// Worst aspect ratio of a row with total `sum` laid along a side of
// length `side`: max(side^2 * max / sum^2, sum^2 / (side^2 * min)).
fn worst_aspect_ratio(row: &[f64], sum: f64, side: f64) -> f64 {
    if sum <= 0.0 || side <= 0.0 {
        return f64::MAX;
    }
    let side_sq = side * side;
    let sum_sq = sum * sum;
    let max_area = row.iter().copied().fold(0.0, f64::max);
    let min_area = row.iter().copied().fold(f64::INFINITY, f64::min);
    ((side_sq * max_area) / sum_sq).max(sum_sq / (side_sq * min_area))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tesela_data::Record;

    fn sample_hierarchy() -> Hierarchy {
        Hierarchy::build(vec![
            Record::new("A", "X", 10.0),
            Record::new("B", "X", 30.0),
            Record::new("C", "Y", 60.0),
        ])
        .expect("valid records")
    }

    #[test]
    fn test_single_value_fills_rect() {
        let rects = squarify(&[42.0], Rect::new(0.0, 0.0, 100.0, 60.0));
        assert_eq!(rects, vec![Rect::new(0.0, 0.0, 100.0, 60.0)]);
    }

    #[test]
    fn test_areas_proportional() {
        let rects = squarify(&[60.0, 30.0, 10.0], Rect::new(0.0, 0.0, 100.0, 60.0));
        let total: f32 = rects.iter().map(Rect::area).sum();
        assert!((total - 6000.0).abs() < 1e-2);
        assert!((rects[0].area() - 3600.0).abs() < 1e-2);
        assert!((rects[1].area() - 1800.0).abs() < 1e-2);
        assert!((rects[2].area() - 600.0).abs() < 1e-2);
    }

    #[test]
    fn test_no_overlap() {
        let rects = squarify(
            &[50.0, 25.0, 12.0, 8.0, 5.0],
            Rect::new(0.0, 0.0, 120.0, 80.0),
        );
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_strip_spans_shorter_side() {
        // Landscape rectangle: the first strip is a full-height column.
        let rects = squarify(&[60.0, 40.0], Rect::new(0.0, 0.0, 100.0, 60.0));
        assert_eq!(rects[0].height, 60.0);
        assert_eq!(rects[0].x, 0.0);
        assert_eq!(rects[1].x, rects[0].width);
    }

    #[test]
    fn test_zero_total_is_well_formed() {
        let rects = squarify(&[0.0, 0.0], Rect::new(5.0, 5.0, 100.0, 60.0));
        assert_eq!(rects.len(), 2);
        for r in &rects {
            assert_eq!(r.area(), 0.0);
        }
    }

    #[test]
    fn test_zero_size_rect_is_well_formed() {
        let rects = squarify(&[10.0, 20.0], Rect::new(0.0, 0.0, 0.0, 60.0));
        assert_eq!(rects.len(), 2);
        assert!(rects.iter().all(|r| r.area() == 0.0));
    }

    #[test]
    fn test_zero_value_among_positive() {
        let rects = squarify(&[10.0, 0.0], Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(rects.len(), 2);
        assert!((rects[0].area() - 100.0).abs() < 1e-3);
        assert_eq!(rects[1].area(), 0.0);
    }

    #[test]
    fn test_determinism_bit_identical() {
        let values = [37.5, 21.25, 13.0, 9.75, 4.5, 1.0];
        let rect = Rect::new(0.0, 0.0, 317.0, 190.2);
        assert_eq!(squarify(&values, rect), squarify(&values, rect));
    }

    #[test]
    fn test_layout_hierarchy_scenario() {
        let leaves = layout_hierarchy(&sample_hierarchy(), Rect::new(0.0, 0.0, 100.0, 60.0), 0.0);
        assert_eq!(leaves.len(), 3);

        // Traversal order: C (Y, 60), B (X, 30), A (X, 10).
        assert_eq!(leaves[0].record.name, "C");
        assert!((leaves[0].rect.area() - 3600.0).abs() < 1.0);
        assert!((leaves[1].rect.area() - 1800.0).abs() < 1.0);
        assert!((leaves[2].rect.area() - 600.0).abs() < 1.0);

        for (i, a) in leaves.iter().enumerate() {
            for b in &leaves[i + 1..] {
                assert!(!a.rect.intersects(&b.rect));
            }
        }
    }

    #[test]
    fn test_layout_hierarchy_padding_insets_leaves() {
        let target = Rect::new(0.0, 0.0, 100.0, 60.0);
        let padded = layout_hierarchy(&sample_hierarchy(), target, 2.0);
        let bare = layout_hierarchy(&sample_hierarchy(), target, 0.0);
        for (p, b) in padded.iter().zip(&bare) {
            assert_eq!(p.rect, b.rect.inset(2.0));
        }
    }

    #[test]
    fn test_resize_preserves_proportions() {
        let h = sample_hierarchy();
        let small = layout_hierarchy(&h, Rect::new(0.0, 0.0, 100.0, 60.0), 0.0);
        let large = layout_hierarchy(&h, Rect::new(0.0, 0.0, 200.0, 120.0), 0.0);
        for (s, l) in small.iter().zip(&large) {
            assert_eq!(s.id, l.id);
            let share_small = s.rect.area() / 6000.0;
            let share_large = l.rect.area() / 24000.0;
            assert!((share_small - share_large).abs() < 1e-3);
        }
    }
}
