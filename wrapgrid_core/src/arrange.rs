// Copyright 2026 the Wrapgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrangement: spacing distribution, stretch sizing, and per-item
//! rectangles.

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};

use crate::{Axis, ItemRange};

/// How leftover cross-axis space within a line is distributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpacingMode {
    /// No spacing; leftover space collects at the line's end.
    None,
    /// Equal spacing between items and at both edges.
    #[default]
    Uniform,
    /// Spacing between items only; items touch the line's edges.
    BetweenItemsOnly,
    /// Spacing at the line's edges only; items touch each other.
    StartAndEndOnly,
}

/// Resolved spacing for one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    /// Space between adjacent items.
    pub inner: f64,
    /// Space before the first and after the last item.
    pub outer: f64,
}

impl Spacing {
    /// No spacing at all.
    pub const ZERO: Self = Self {
        inner: 0.0,
        outer: 0.0,
    };
}

/// Distributes a line's leftover cross-axis space according to `mode`.
///
/// The leftover space is `final_cross` minus the space taken by one full
/// line, never negative.
#[must_use]
pub fn compute_spacing(
    mode: SpacingMode,
    items_per_line: usize,
    cell_cross: f64,
    final_cross: f64,
) -> Spacing {
    let per_line = items_per_line.max(1) as f64;
    let used = (cell_cross * per_line).min(final_cross);
    let unused = final_cross - used;

    match mode {
        SpacingMode::Uniform => {
            let spacing = unused / (per_line + 1.0);
            Spacing {
                inner: spacing,
                outer: spacing,
            }
        }
        SpacingMode::BetweenItemsOnly => Spacing {
            inner: unused / (per_line - 1.0).max(1.0),
            outer: 0.0,
        },
        SpacingMode::StartAndEndOnly => Spacing {
            inner: 0.0,
            outer: unused / 2.0,
        },
        SpacingMode::None => Spacing::ZERO,
    }
}

/// The per-item arrange size when items stretch to fill their line.
///
/// The cross extent grows to an even share of the final cross space, capped
/// by `max_cross` (from the item style lookup); the major extent is
/// unchanged.
#[must_use]
pub fn stretch_cell_size(
    axis: Axis,
    cell: Size,
    final_size: Size,
    items_per_line: usize,
    max_cross: f64,
) -> Size {
    let share = axis.cross(final_size) / items_per_line.max(1) as f64;
    axis.size(axis.major(cell), share.min(max_cross))
}

/// Positions every realized index on the grid.
///
/// Items are placed at `(line * cell_major, outer + column * (cell_cross +
/// inner))` in resolved coordinates and translated back by the scroll
/// offset. When `grouped`, the parent panel already scrolled the group, so
/// only the cross-axis offset component applies.
///
/// A zero cross-axis arrange size means a cached group container that is not
/// currently visible: every item collapses to a zero rectangle at the origin
/// so stale geometry is never displayed.
#[must_use]
pub fn arrange_items(
    range: ItemRange,
    axis: Axis,
    cell: Size,
    items_per_line: usize,
    spacing: Spacing,
    final_size: Size,
    offset: Point,
    grouped: bool,
) -> HashMap<usize, Rect> {
    let mut rects = HashMap::with_capacity(range.len());

    if axis.cross(final_size) == 0.0 {
        for index in range {
            rects.insert(index, Rect::ZERO);
        }
        return rects;
    }

    let per_line = items_per_line.max(1);
    let cell_major = axis.major(cell);
    let cell_cross = axis.cross(cell);
    let offset_major = if grouped { 0.0 } else { axis.major_pos(offset) };
    let offset_cross = axis.cross_pos(offset);

    for index in range {
        let column = index % per_line;
        let line = index / per_line;
        let cross = spacing.outer + column as f64 * (cell_cross + spacing.inner);
        let major = line as f64 * cell_major;
        rects.insert(
            index,
            axis.rect(
                major - offset_major,
                cross - offset_cross,
                cell_major,
                cell_cross,
            ),
        );
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::{Spacing, SpacingMode, arrange_items, compute_spacing, stretch_cell_size};
    use crate::{Axis, ItemRange};
    use kurbo::{Point, Rect, Size};

    #[test]
    fn uniform_spacing_shares_space_with_the_edges() {
        // Three 100px items in 400px leave 100px over four gaps.
        let spacing = compute_spacing(SpacingMode::Uniform, 3, 100.0, 400.0);
        assert_eq!(spacing.inner, 25.0);
        assert_eq!(spacing.outer, 25.0);
    }

    #[test]
    fn between_items_only_leaves_the_edges_flush() {
        let spacing = compute_spacing(SpacingMode::BetweenItemsOnly, 3, 100.0, 400.0);
        assert_eq!(spacing.inner, 50.0);
        assert_eq!(spacing.outer, 0.0);

        // A single item per line must not divide by zero.
        let spacing = compute_spacing(SpacingMode::BetweenItemsOnly, 1, 100.0, 150.0);
        assert_eq!(spacing.inner, 50.0);
    }

    #[test]
    fn start_and_end_only_splits_space_across_the_edges() {
        let spacing = compute_spacing(SpacingMode::StartAndEndOnly, 3, 100.0, 400.0);
        assert_eq!(spacing.inner, 0.0);
        assert_eq!(spacing.outer, 50.0);
    }

    #[test]
    fn no_spacing_mode_distributes_nothing() {
        assert_eq!(compute_spacing(SpacingMode::None, 3, 100.0, 400.0), Spacing::ZERO);
    }

    #[test]
    fn overfull_lines_produce_no_negative_spacing() {
        let spacing = compute_spacing(SpacingMode::Uniform, 4, 60.0, 200.0);
        assert_eq!(spacing.inner, 0.0);
        assert_eq!(spacing.outer, 0.0);
    }

    #[test]
    fn stretch_splits_the_line_evenly_up_to_the_style_cap() {
        let cell = Size::new(50.0, 50.0);
        let stretched = stretch_cell_size(Axis::Vertical, cell, Size::new(240.0, 600.0), 4, f64::INFINITY);
        assert_eq!(stretched, Size::new(60.0, 50.0));

        let capped = stretch_cell_size(Axis::Vertical, cell, Size::new(240.0, 600.0), 4, 55.0);
        assert_eq!(capped, Size::new(55.0, 50.0));
    }

    #[test]
    fn arrangement_tiles_the_grid_without_collisions() {
        let cell = Size::new(50.0, 50.0);
        let range = ItemRange::new(0, 12);
        let rects = arrange_items(
            range,
            Axis::Vertical,
            cell,
            4,
            Spacing::ZERO,
            Size::new(200.0, 200.0),
            Point::ZERO,
            false,
        );
        assert_eq!(rects.len(), 12);
        for index in range {
            let rect = rects[&index];
            let line = index / 4;
            let column = index % 4;
            assert_eq!(rect.origin(), Point::new(column as f64 * 50.0, line as f64 * 50.0));
            assert_eq!(rect.size(), cell);
        }
        // No two rectangles share an origin.
        for a in range {
            for b in range {
                if a != b {
                    assert_ne!(rects[&a].origin(), rects[&b].origin(), "items {a} and {b} collide");
                }
            }
        }
    }

    #[test]
    fn arrangement_subtracts_the_scroll_offset() {
        let rects = arrange_items(
            ItemRange::new(8, 12),
            Axis::Vertical,
            Size::new(50.0, 50.0),
            4,
            Spacing::ZERO,
            Size::new(200.0, 200.0),
            Point::new(10.0, 100.0),
            false,
        );
        // Item 8 sits at line 2, column 0: (0 - 10, 100 - 100).
        assert_eq!(rects[&8].origin(), Point::new(-10.0, 0.0));
        assert_eq!(rects[&9].origin(), Point::new(40.0, 0.0));
    }

    #[test]
    fn grouped_arrangement_ignores_the_major_offset() {
        let rects = arrange_items(
            ItemRange::new(0, 4),
            Axis::Vertical,
            Size::new(50.0, 50.0),
            4,
            Spacing::ZERO,
            Size::new(200.0, 200.0),
            Point::new(10.0, 100.0),
            true,
        );
        // The parent already scrolled the group; only x applies.
        assert_eq!(rects[&0].origin(), Point::new(-10.0, 0.0));
    }

    #[test]
    fn spacing_offsets_every_column() {
        let rects = arrange_items(
            ItemRange::new(0, 3),
            Axis::Vertical,
            Size::new(100.0, 100.0),
            3,
            Spacing { inner: 25.0, outer: 25.0 },
            Size::new(400.0, 400.0),
            Point::ZERO,
            false,
        );
        assert_eq!(rects[&0].origin(), Point::new(25.0, 0.0));
        assert_eq!(rects[&1].origin(), Point::new(150.0, 0.0));
        assert_eq!(rects[&2].origin(), Point::new(275.0, 0.0));
    }

    #[test]
    fn horizontal_major_swaps_the_axes() {
        let rects = arrange_items(
            ItemRange::new(0, 8),
            Axis::Horizontal,
            Size::new(50.0, 50.0),
            4,
            Spacing::ZERO,
            Size::new(200.0, 200.0),
            Point::ZERO,
            false,
        );
        // Item 5 sits at line 1, column 1: major (x) 50, cross (y) 50.
        assert_eq!(rects[&5].origin(), Point::new(50.0, 50.0));
    }

    #[test]
    fn zero_cross_arrange_size_collapses_every_item() {
        let rects = arrange_items(
            ItemRange::new(0, 4),
            Axis::Vertical,
            Size::new(50.0, 50.0),
            4,
            Spacing::ZERO,
            Size::new(0.0, 200.0),
            Point::new(0.0, 100.0),
            false,
        );
        for rect in rects.values() {
            assert_eq!(*rect, Rect::ZERO);
        }
    }

    #[test]
    fn empty_range_produces_no_rectangles() {
        let rects = arrange_items(
            ItemRange::EMPTY,
            Axis::Vertical,
            Size::new(50.0, 50.0),
            4,
            Spacing::ZERO,
            Size::new(200.0, 200.0),
            Point::ZERO,
            false,
        );
        assert!(rects.is_empty());
    }
}
