// Copyright 2026 the Wrapgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range selection: mapping scroll state and cache policy to the realized
//! index range.
//!
//! This is the heart of the engine. Given the current [`GridGeometry`], the
//! scroll snapshot, and the configured cache policy, [`select_range`] decides
//! exactly which item indices must be materialized for this pass. Hosts
//! realize every index in the returned range and release every index outside
//! it.
//!
//! Positions are converted to line indices, clamped, and only then multiplied
//! back into item indices, so out-of-range positions can never produce
//! negative or overflowing indices.

use core::ops::Range;

use kurbo::{Point, Rect, Size};

use crate::{Axis, GridGeometry};

/// The contiguous, half-open index range `[start, end)` that must be realized.
///
/// An empty range is represented as `start == end`; [`ItemRange::EMPTY`] is
/// the canonical `[0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRange {
    /// First realized index.
    pub start: usize,
    /// One past the last realized index.
    pub end: usize,
}

impl ItemRange {
    /// The canonical empty range.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Creates a range from half-open bounds.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "ItemRange bounds out of order: [{start}, {end})");
        Self { start, end }
    }

    /// Number of indices in the range.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if no index is realized.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if `index` falls inside the range.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// First realized index, if any.
    #[must_use]
    pub const fn first(&self) -> Option<usize> {
        if self.is_empty() { None } else { Some(self.start) }
    }

    /// Last realized index, if any.
    #[must_use]
    pub const fn last(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }

    /// Iterates the realized indices in order.
    #[must_use]
    pub const fn iter(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Builds a range from inclusive bounds, clamping into `[0, item_count)`.
    ///
    /// Inclusive bounds are the natural output of the selection math below;
    /// a start past the end (possible when the offset points beyond the
    /// extent) collapses to [`ItemRange::EMPTY`].
    fn from_inclusive(start: i64, end: i64, item_count: usize) -> Self {
        let start = start.max(0);
        let end = end.min(item_count as i64 - 1);
        if start > end {
            return Self::EMPTY;
        }
        #[allow(
            clippy::cast_sign_loss,
            reason = "Both bounds are non-negative after the clamps above"
        )]
        let bounds = (start as usize, end as usize + 1);
        Self::new(bounds.0, bounds.1)
    }
}

impl IntoIterator for ItemRange {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// How far the realized window extends beyond the strict viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheLength {
    /// Cache budget before the viewport, in [`CacheUnit`]s.
    pub before: f64,
    /// Cache budget after the viewport, in [`CacheUnit`]s.
    pub after: f64,
}

impl CacheLength {
    /// No cache window beyond the viewport.
    pub const ZERO: Self = Self {
        before: 0.0,
        after: 0.0,
    };

    /// Creates a cache length with the given budgets.
    #[must_use]
    pub const fn new(before: f64, after: f64) -> Self {
        Self { before, after }
    }
}

/// The unit a [`CacheLength`] is expressed in. Units are never mixed within
/// one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheUnit {
    /// Pixel distance along the major axis.
    Pixel,
    /// A raw item count.
    Item,
    /// Multiples of the currently visible page of items.
    Page,
}

/// How raw scroll offsets are interpreted when the grid is nested in a
/// grouping container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollUnit {
    /// Offsets are pixel positions.
    #[default]
    Pixel,
    /// Offsets are line indices.
    Item,
}

/// Snapshot of the scroll state read from the scroll collaborator at the
/// start of a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollView {
    /// Current scroll offset.
    pub offset: Point,
    /// Size of the visible viewport.
    pub viewport: Size,
}

/// Constraints supplied by a parent grouping container when this grid is
/// nested inside a larger virtualized hierarchy.
///
/// The parent already scrolled the group, so the grid's own major-axis
/// offset is ignored in favor of the sub-viewport's location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupingContext {
    /// The portion of this grid's extent the parent considers visible.
    pub sub_viewport: Rect,
    /// Pixel size of the group header preceding the grid.
    pub header_size: Size,
    /// Cross-axis space the grouping container reserves around the grid.
    pub cross_margin: f64,
    /// Whether hierarchical virtualization is enabled for the parent. When
    /// `false`, the whole collection is realized.
    pub virtualizing: bool,
}

/// Selects the index range that must be realized for this pass.
///
/// With `virtualizing` disabled the full range is returned and everything
/// else is skipped. Otherwise the viewport window (expanded by the cache
/// policy) is converted to line indices and multiplied back into item
/// indices. When `grouping` is present, the window comes from the parent's
/// sub-viewport instead of this grid's own major-axis offset.
#[must_use]
pub fn select_range(
    item_count: usize,
    geometry: &GridGeometry,
    axis: Axis,
    cell: Size,
    view: ScrollView,
    cache_unit: CacheUnit,
    cache: CacheLength,
    scroll_unit: ScrollUnit,
    virtualizing: bool,
    grouping: Option<&GroupingContext>,
) -> ItemRange {
    if item_count == 0 {
        return ItemRange::EMPTY;
    }
    if !virtualizing {
        return ItemRange::new(0, item_count);
    }
    if axis.major(cell) <= 0.0 {
        // Every line collapses to offset zero; realize everything rather
        // than guessing which zero-extent lines intersect the viewport.
        return ItemRange::new(0, item_count);
    }
    match grouping {
        Some(context) => select_grouped(
            item_count,
            geometry,
            axis,
            cell,
            view,
            cache_unit,
            cache,
            scroll_unit,
            context,
        ),
        None => select_windowed(item_count, geometry, axis, cell, view, cache_unit, cache),
    }
}

/// Clamps a major-axis position to the line containing it: `[0, line_count]`.
fn line_at(position: f64, cell_major: f64, line_count: usize) -> usize {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The floored line index is clamped into the line range immediately"
    )]
    let line = (position / cell_major).floor() as i64;
    #[allow(clippy::cast_sign_loss, reason = "Clamped to zero on the line below")]
    let line = line.clamp(0, line_count as i64) as usize;
    line
}

/// The line containing the last pixel strictly before `position`.
///
/// Unlike [`line_at`], an exact line boundary belongs to the *preceding*
/// line, so a viewport ending exactly where a line begins does not pull that
/// line in.
fn line_before(position: f64, cell_major: f64, floor_line: usize, line_count: usize) -> usize {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The line index is clamped into the line range immediately"
    )]
    let line = (position / cell_major).ceil() as i64 - 1;
    #[allow(
        clippy::cast_sign_loss,
        reason = "Clamped to a non-negative floor on the line below"
    )]
    let line = line.clamp(floor_line as i64, line_count as i64) as usize;
    line
}

fn select_windowed(
    item_count: usize,
    geometry: &GridGeometry,
    axis: Axis,
    cell: Size,
    view: ScrollView,
    cache_unit: CacheUnit,
    cache: CacheLength,
) -> ItemRange {
    let cell_major = axis.major(cell);
    let extent_major = axis.major(geometry.extent);
    let per_line = geometry.items_per_line.max(1) as i64;

    let mut window_start = axis.major_pos(view.offset);
    let mut window_end = window_start + axis.major(view.viewport);

    if cache_unit == CacheUnit::Pixel {
        window_start = (window_start - cache.before).max(0.0);
        window_end = (window_end + cache.after).min(extent_major);
    }

    let start_line = line_at(window_start, cell_major, geometry.line_count);
    let end_line = line_before(window_end, cell_major, start_line, geometry.line_count);

    let mut start = start_line as i64 * per_line;
    let mut end = (end_line as i64 * per_line + per_line - 1).min(item_count as i64 - 1);

    match cache_unit {
        CacheUnit::Page => {
            // The page size is the realized count *before* expansion.
            let items_per_page = end - start + 1;
            start -= whole(cache.before) * items_per_page;
            end += whole(cache.after) * items_per_page;
        }
        CacheUnit::Item => {
            start -= whole(cache.before);
            end += whole(cache.after);
        }
        CacheUnit::Pixel => {}
    }

    ItemRange::from_inclusive(start, end, item_count)
}

fn select_grouped(
    item_count: usize,
    geometry: &GridGeometry,
    axis: Axis,
    cell: Size,
    view: ScrollView,
    cache_unit: CacheUnit,
    cache: CacheLength,
    scroll_unit: ScrollUnit,
    context: &GroupingContext,
) -> ItemRange {
    if !context.virtualizing {
        return ItemRange::new(0, item_count);
    }

    let cell_major = axis.major(cell);
    let extent_major = axis.major(geometry.extent);
    let per_line = geometry.items_per_line.max(1) as i64;
    let sub_viewport_pos = axis.major_pos(context.sub_viewport.origin());

    let (offset_line, offset_px) = match scroll_unit {
        ScrollUnit::Item => {
            // The first scrollable line is the group header; offsets below
            // one are still the top of the grid.
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Line-unit offsets are small integers by contract"
            )]
            let line = if sub_viewport_pos >= 1.0 {
                (sub_viewport_pos as i64 - 1).max(0)
            } else {
                0
            };
            (line, line as f64 * cell_major)
        }
        ScrollUnit::Pixel => {
            let px = (sub_viewport_pos - axis.major(context.header_size))
                .max(0.0)
                .min(extent_major);
            (line_at(px, cell_major, geometry.line_count) as i64, px)
        }
    };

    // The visible window cannot exceed what remains of this grid's extent.
    let viewport = axis
        .major(view.viewport)
        .min((extent_major - offset_px).max(0.0));

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Line counts are bounded by the clamped viewport window"
    )]
    let lines_in_viewport = (((offset_px + viewport) / cell_major).ceil()
        - (offset_px / cell_major).floor()) as i64;

    let mut start = offset_line * per_line;
    let mut end = ((offset_line + lines_in_viewport) * per_line - 1).min(item_count as i64 - 1);

    match cache_unit {
        CacheUnit::Pixel => {
            // The header offset is subtracted when converting the offset to
            // a line, but not when bounding the cache-after budget; headers
            // only occupy space at the top.
            let before_px = cache.before.min(offset_px);
            let after_px = cache.after.min(extent_major - viewport - offset_px);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Pixel budgets were clamped to the extent just above"
            )]
            let lines_before = (before_px / cell_major) as i64;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Pixel budgets were clamped to the extent just above"
            )]
            let lines_after = (((offset_px + viewport + after_px) / cell_major).ceil()
                - ((offset_px + viewport) / cell_major).ceil()) as i64;
            start -= lines_before * per_line;
            end += lines_after * per_line;
        }
        CacheUnit::Item => {
            start -= whole(cache.before);
            end += whole(cache.after);
        }
        // Page-unit caching is not applied in the grouped path.
        CacheUnit::Page => {}
    }

    ItemRange::from_inclusive(start, end, item_count)
}

/// Truncates a non-negative cache budget to a whole count.
fn whole(value: f64) -> i64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Cache budgets are validated finite; truncation is the intended conversion"
    )]
    let count = value.max(0.0) as i64;
    count
}
