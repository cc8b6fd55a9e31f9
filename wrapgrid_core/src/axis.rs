// Copyright 2026 the Wrapgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axis transform: mapping `(major, cross)` tuples onto concrete `(x, y)`.
//!
//! Every geometric computation in this crate works in resolved coordinates:
//! the *major* axis is the scroll direction (the axis along which lines
//! stack), the *cross* axis is the direction items are laid out within one
//! line. [`Axis`] projects concrete [`Size`]/[`Point`] values into that
//! space and packs resolved values back into concrete ones, so the rest of
//! the engine never branches on orientation.

use kurbo::{Point, Rect, Size};

/// The major (scroll) axis of a wrap grid.
///
/// [`Axis::Vertical`] stacks lines top-to-bottom and lays items out
/// left-to-right within a line; [`Axis::Horizontal`] is the transpose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Axis {
    /// Lines stack vertically; the cross axis is horizontal.
    #[default]
    Vertical,
    /// Lines stack horizontally; the cross axis is vertical.
    Horizontal,
}

impl Axis {
    /// The extent of `size` along the major axis.
    #[must_use]
    pub const fn major(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }

    /// The extent of `size` along the cross axis.
    #[must_use]
    pub const fn cross(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.width,
            Self::Horizontal => size.height,
        }
    }

    /// The major-axis component of `point`.
    #[must_use]
    pub const fn major_pos(self, point: Point) -> f64 {
        match self {
            Self::Vertical => point.y,
            Self::Horizontal => point.x,
        }
    }

    /// The cross-axis component of `point`.
    #[must_use]
    pub const fn cross_pos(self, point: Point) -> f64 {
        match self {
            Self::Vertical => point.x,
            Self::Horizontal => point.y,
        }
    }

    /// Packs resolved extents back into a concrete [`Size`].
    #[must_use]
    pub const fn size(self, major: f64, cross: f64) -> Size {
        match self {
            Self::Vertical => Size::new(cross, major),
            Self::Horizontal => Size::new(major, cross),
        }
    }

    /// Packs resolved coordinates back into a concrete [`Point`].
    #[must_use]
    pub const fn point(self, major: f64, cross: f64) -> Point {
        match self {
            Self::Vertical => Point::new(cross, major),
            Self::Horizontal => Point::new(major, cross),
        }
    }

    /// Builds a concrete [`Rect`] from a resolved origin and resolved extents.
    #[must_use]
    pub fn rect(self, major: f64, cross: f64, major_extent: f64, cross_extent: f64) -> Rect {
        Rect::from_origin_size(
            self.point(major, cross),
            self.size(major_extent, cross_extent),
        )
    }

    /// Returns `point` with its major-axis component replaced by `major`.
    #[must_use]
    pub const fn with_major_pos(self, point: Point, major: f64) -> Point {
        match self {
            Self::Vertical => Point::new(point.x, major),
            Self::Horizontal => Point::new(major, point.y),
        }
    }
}
