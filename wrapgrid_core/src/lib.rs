// Copyright 2026 the Wrapgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrapgrid core: pure layout math for a virtualized wrap grid.
//!
//! This crate computes which items of a large, uniformly-sized collection
//! must be materialized for the current viewport, how large the scrollable
//! content is, and where each realized item goes. It never materializes
//! anything itself and knows nothing about widgets or renderers; hosts feed
//! it sizes and offsets and act on the returned ranges and rectangles.
//!
//! The pipeline runs strictly downstream on every layout pass:
//!
//! 1. [`compute_geometry`] derives items per line, line count, and the
//!    scrollable extent from the cell size and available space.
//! 2. [`select_range`] maps the scroll window plus a [`CacheLength`] policy
//!    to the [`ItemRange`] that must be realized.
//! 3. [`arrange_items`] (with [`compute_spacing`] and, for stretched items,
//!    [`stretch_cell_size`]) turns realized indices into rectangles.
//!
//! All computations are parameterized by an [`Axis`] transform, so the same
//! code serves vertically and horizontally scrolling grids.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use wrapgrid_core::{
//!     Axis, CacheLength, CacheUnit, ScrollUnit, ScrollView, SpacingMode,
//!     compute_geometry, select_range,
//! };
//!
//! // 100 items of 50x50 in a 200x200 viewport: a 4-wide grid, 25 lines.
//! let axis = Axis::Vertical;
//! let cell = Size::new(50.0, 50.0);
//! let available = Size::new(200.0, 200.0);
//! let geometry = compute_geometry(axis, cell, available, 100, SpacingMode::None, None);
//! assert_eq!(geometry.items_per_line, 4);
//! assert_eq!(geometry.extent, Size::new(200.0, 1250.0));
//!
//! // The four lines covering the viewport are realized, nothing else.
//! let view = ScrollView {
//!     offset: Point::ZERO,
//!     viewport: Size::new(200.0, 200.0),
//! };
//! let range = select_range(
//!     100,
//!     &geometry,
//!     axis,
//!     cell,
//!     view,
//!     CacheUnit::Pixel,
//!     CacheLength::ZERO,
//!     ScrollUnit::Pixel,
//!     true,
//!     None,
//! );
//! assert_eq!((range.first(), range.last()), (Some(0), Some(15)));
//! ```

mod arrange;
mod axis;
mod geometry;
mod range;

pub use arrange::{Spacing, SpacingMode, arrange_items, compute_spacing, stretch_cell_size};
pub use axis::Axis;
pub use geometry::{GridGeometry, compute_geometry, items_per_line};
pub use range::{
    CacheLength, CacheUnit, GroupingContext, ItemRange, ScrollUnit, ScrollView, select_range,
};
