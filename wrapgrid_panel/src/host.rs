// Copyright 2026 the Wrapgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator capabilities the panel is driven against.
//!
//! The engine owns no items and no scroll state. A [`ContainerHost`] owns
//! the lifecycle of realized items, a [`ScrollInfo`] owns the mutable
//! offset/viewport/extent, and an [`ItemStyleLookup`] answers optional
//! per-item style constraints. All three are injected per call, which keeps
//! the panel a pure, independently testable function of its inputs.

use kurbo::{Point, Size};

use wrapgrid_core::Axis;

/// Owns the lifecycle of realized items.
///
/// Hosts must guarantee a live handle for every index in the current
/// [`ItemRange`](wrapgrid_core::ItemRange) and only those. The panel itself
/// only realizes outside that flow in one place: measuring a transient item
/// during size resolution.
///
/// `realize` and `measure` are fallible by `Option` so a failed measurement
/// can degrade gracefully instead of unwinding through a layout pass.
pub trait ContainerHost {
    /// Handle to one realized item.
    type Handle;

    /// Materializes the item at `index`.
    fn realize(&mut self, index: usize) -> Option<Self::Handle>;

    /// Releases (or recycles) a previously realized item.
    fn release(&mut self, handle: Self::Handle);

    /// Measures a realized item under `constraint`, returning its natural
    /// size.
    fn measure(&mut self, handle: &Self::Handle, constraint: Size) -> Option<Size>;
}

/// Owns the mutable scroll state the panel reads and writes.
///
/// The panel writes the extent after computing geometry and the offset on
/// navigation requests; it only ever reads the viewport.
pub trait ScrollInfo {
    /// Current scroll offset.
    fn offset(&self) -> Point;

    /// Sets the scroll offset. Implementations typically trigger a
    /// re-arrange.
    fn set_offset(&mut self, offset: Point);

    /// Size of the visible viewport.
    fn viewport(&self) -> Size;

    /// Total scrollable content size.
    fn extent(&self) -> Size;

    /// Sets the total scrollable content size.
    fn set_extent(&mut self, extent: Size);
}

/// Optional per-item style constraints consulted when stretching items.
pub trait ItemStyleLookup {
    /// The maximum cross-axis extent an item may stretch to.
    fn max_cross_extent(&self, axis: Axis) -> f64 {
        let _ = axis;
        f64::INFINITY
    }
}

/// The unconstrained style lookup.
impl ItemStyleLookup for () {}

/// A plain in-memory [`ScrollInfo`], suitable for tests and hosts without
/// framework scroll state of their own.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    /// Current scroll offset.
    pub offset: Point,
    /// Size of the visible viewport.
    pub viewport: Size,
    /// Total scrollable content size.
    pub extent: Size,
}

impl ScrollState {
    /// Creates scroll state at the origin with the given viewport.
    #[must_use]
    pub const fn new(viewport: Size) -> Self {
        Self {
            offset: Point::ZERO,
            viewport,
            extent: Size::ZERO,
        }
    }
}

impl ScrollInfo for ScrollState {
    fn offset(&self) -> Point {
        self.offset
    }

    fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn extent(&self) -> Size {
        self.extent
    }

    fn set_extent(&mut self, extent: Size) {
        self.extent = extent;
    }
}
