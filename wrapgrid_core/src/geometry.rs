// Copyright 2026 the Wrapgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid geometry: items per line, line count, and the scrollable extent.

use kurbo::Size;

use crate::{Axis, SpacingMode};

/// The per-pass shape of the grid, derived from the cell size and the
/// available space.
///
/// All fields are recomputed on every layout pass; callers must not patch a
/// stale geometry after a resize or collection change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    /// Number of items laid out in one major-axis line. Always at least 1.
    pub items_per_line: usize,
    /// Number of lines needed for the whole collection.
    pub line_count: usize,
    /// Total scrollable content size.
    pub extent: Size,
}

impl GridGeometry {
    /// Geometry of an empty collection.
    pub const EMPTY: Self = Self {
        items_per_line: 1,
        line_count: 0,
        extent: Size::ZERO,
    };
}

/// Number of items that fit in one line of `available_cross` space.
///
/// Unbounded cross space lays the whole collection out in a single line. A
/// non-positive cell extent is treated as `1.0` so the division cannot blow
/// up; the resulting geometry is degenerate but well-formed.
#[must_use]
pub fn items_per_line(cell_cross: f64, available_cross: f64, item_count: usize) -> usize {
    if available_cross.is_infinite() {
        return item_count.max(1);
    }
    let cell_cross = if cell_cross > 0.0 { cell_cross } else { 1.0 };
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The quotient is floored and clamped to at least one item per line"
    )]
    let per_line = ((available_cross / cell_cross).floor() as i64).max(1);
    #[allow(clippy::cast_sign_loss, reason = "Clamped to at least one on the line above")]
    let per_line = per_line as usize;
    per_line
}

/// Derives the grid shape from the resolved cell size and available space.
///
/// - `available` is the space offered for this pass. When the grid is nested
///   in a grouping container, `group_cross_margin` is the cross-axis space the
///   container reserves; it is subtracted (floored at zero) before computing
///   items per line and the cross extent.
/// - The cross extent is the full available cross space when `spacing`
///   distributes leftover space, otherwise the tight width of one full line.
#[must_use]
pub fn compute_geometry(
    axis: Axis,
    cell: Size,
    available: Size,
    item_count: usize,
    spacing: SpacingMode,
    group_cross_margin: Option<f64>,
) -> GridGeometry {
    if item_count == 0 {
        return GridGeometry::EMPTY;
    }

    let mut available_cross = axis.cross(available);
    if let Some(margin) = group_cross_margin
        && available_cross.is_finite()
    {
        available_cross = (available_cross - margin).max(0.0);
    }

    let per_line = items_per_line(axis.cross(cell), available_cross, item_count);
    let line_count = item_count.div_ceil(per_line);

    let extent_cross = if spacing != SpacingMode::None && available_cross.is_finite() {
        available_cross
    } else {
        axis.cross(cell) * per_line as f64
    };
    let extent_major = axis.major(cell) * line_count as f64;

    GridGeometry {
        items_per_line: per_line,
        line_count,
        extent: axis.size(extent_major, extent_cross),
    }
}
