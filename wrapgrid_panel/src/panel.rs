// Copyright 2026 the Wrapgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The panel controller: size resolution, the per-pass pipeline, and scroll
//! navigation.

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};

use wrapgrid_core::{
    Axis, GridGeometry, GroupingContext, ItemRange, ScrollView, arrange_items, compute_geometry,
    compute_spacing, select_range, stretch_cell_size,
};

use crate::{ConfigError, ContainerHost, GridConfig, ItemStyleLookup, ScrollInfo};

/// A scroll increment requested by navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollIncrement {
    /// One line of items.
    Line,
    /// One mouse-wheel notch ([`GridConfig::wheel_delta_items`] lines,
    /// capped at a viewport).
    Wheel,
    /// One viewport.
    Page,
}

/// The direction of a scroll increment along its physical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Towards smaller offsets (up/left).
    Backward,
    /// Towards larger offsets (down/right).
    Forward,
}

/// A virtualized wrap-grid panel.
///
/// The panel holds the configuration plus the outputs of the most recent
/// layout pass (cell size, geometry, realized range). Every pass recomputes
/// all three from scratch; nothing here is incremental state, so resizes and
/// collection changes are handled by simply measuring again.
///
/// A pass is driven as:
///
/// 1. [`WrapGrid::measure`] — resolves the cell size, computes geometry,
///    publishes the extent to the [`ScrollInfo`], and selects the realized
///    range. The host then realizes/releases items to match the range.
/// 2. [`WrapGrid::arrange`] — positions every realized item.
///
/// Navigation ([`WrapGrid::scroll_amount`], [`WrapGrid::bring_index_into_view`])
/// reads the same pass outputs and never mutates them.
#[derive(Debug, Clone)]
pub struct WrapGrid {
    config: GridConfig,
    cell_size: Size,
    geometry: GridGeometry,
    range: ItemRange,
}

impl WrapGrid {
    /// Creates a panel, validating the configuration.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            cell_size: Size::ZERO,
            geometry: GridGeometry::EMPTY,
            range: ItemRange::EMPTY,
        })
    }

    /// The panel's configuration.
    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The cell size resolved by the most recent pass.
    #[must_use]
    pub const fn cell_size(&self) -> Size {
        self.cell_size
    }

    /// The geometry computed by the most recent pass.
    #[must_use]
    pub const fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// The range selected by the most recent pass.
    #[must_use]
    pub const fn realized_range(&self) -> ItemRange {
        self.range
    }

    /// Runs the measure half of a layout pass.
    ///
    /// `first_realized` is the natural size of the first currently realized
    /// item, if the host has one; it feeds size resolution when no explicit
    /// item size is configured. `grouping` is the parent's context when this
    /// grid is nested in a grouping container.
    ///
    /// Returns the range the host must realize. The extent is published to
    /// `scroll` before the range is selected.
    pub fn measure<H, S>(
        &mut self,
        available: Size,
        item_count: usize,
        first_realized: Option<Size>,
        host: &mut H,
        scroll: &mut S,
        grouping: Option<&GroupingContext>,
    ) -> ItemRange
    where
        H: ContainerHost,
        S: ScrollInfo,
    {
        let axis = self.config.orientation;

        // A virtualizing group constrains the cross space to the parent's
        // sub-viewport; the margin it reserves is handled by geometry.
        let available = match grouping {
            Some(context) if context.virtualizing => axis.size(
                axis.major(available),
                axis.cross(context.sub_viewport.size()),
            ),
            _ => available,
        };

        self.cell_size =
            resolve_cell_size(self.config.item_size, first_realized, item_count, host);
        self.geometry = compute_geometry(
            axis,
            self.cell_size,
            available,
            item_count,
            self.config.spacing_mode,
            grouping.map(|context| context.cross_margin),
        );
        scroll.set_extent(self.geometry.extent);

        let view = ScrollView {
            offset: scroll.offset(),
            viewport: scroll.viewport(),
        };
        self.range = select_range(
            item_count,
            &self.geometry,
            axis,
            self.cell_size,
            view,
            self.config.cache_unit,
            self.config.cache_length,
            self.config.scroll_unit,
            self.config.is_virtualizing,
            grouping,
        );
        self.range
    }

    /// Runs the arrange half of a layout pass, positioning every realized
    /// item within `final_size`.
    ///
    /// `grouped` tells the panel its major-axis offset is owned by a parent
    /// grouping panel and must not be applied again.
    #[must_use]
    pub fn arrange<S, L>(
        &self,
        final_size: Size,
        scroll: &S,
        styles: &L,
        grouped: bool,
    ) -> HashMap<usize, Rect>
    where
        S: ScrollInfo,
        L: ItemStyleLookup,
    {
        let axis = self.config.orientation;
        let cell = if self.config.stretch_items {
            stretch_cell_size(
                axis,
                self.cell_size,
                final_size,
                self.geometry.items_per_line,
                styles.max_cross_extent(axis),
            )
        } else {
            self.cell_size
        };
        let spacing = compute_spacing(
            self.config.spacing_mode,
            self.geometry.items_per_line,
            axis.cross(cell),
            axis.cross(final_size),
        );
        arrange_items(
            self.range,
            axis,
            cell,
            self.geometry.items_per_line,
            spacing,
            final_size,
            scroll.offset(),
            grouped,
        )
    }

    /// Scrolls so that the line containing `index` is at the start of the
    /// viewport.
    pub fn bring_index_into_view<S: ScrollInfo>(&self, index: usize, scroll: &mut S) {
        let axis = self.config.orientation;
        let line = index / self.geometry.items_per_line.max(1);
        let target = line as f64 * axis.major(self.cell_size);
        scroll.set_offset(axis.with_major_pos(scroll.offset(), target));
    }

    /// The signed offset delta for one navigation step along `motion`, the
    /// physical axis being scrolled.
    ///
    /// This is a pure query; pair it with [`WrapGrid::scroll_by`] to apply
    /// it.
    #[must_use]
    pub fn scroll_amount<S: ScrollInfo>(
        &self,
        scroll: &S,
        motion: Axis,
        increment: ScrollIncrement,
        direction: ScrollDirection,
    ) -> f64 {
        let cell_extent = motion.major(self.cell_size);
        let viewport_extent = motion.major(scroll.viewport());
        let magnitude = match increment {
            ScrollIncrement::Line => cell_extent,
            ScrollIncrement::Wheel => {
                (cell_extent * self.config.wheel_delta_items as f64).min(viewport_extent)
            }
            ScrollIncrement::Page => viewport_extent,
        };
        match direction {
            ScrollDirection::Backward => -magnitude,
            ScrollDirection::Forward => magnitude,
        }
    }

    /// Moves the offset by `delta` along `motion`, clamped so the viewport
    /// stays within the extent.
    pub fn scroll_by<S: ScrollInfo>(&self, scroll: &mut S, motion: Axis, delta: f64) {
        let max = (motion.major(scroll.extent()) - motion.major(scroll.viewport())).max(0.0);
        let position = (motion.major_pos(scroll.offset()) + delta).clamp(0.0, max);
        scroll.set_offset(motion.with_major_pos(scroll.offset(), position));
    }

    /// Clamps the current offset so the viewport stays within the extent on
    /// both axes.
    pub fn clamp_offset<S: ScrollInfo>(&self, scroll: &mut S) {
        let extent = scroll.extent();
        let viewport = scroll.viewport();
        let offset = scroll.offset();
        let clamped = Point::new(
            offset.x.clamp(0.0, (extent.width - viewport.width).max(0.0)),
            offset.y.clamp(0.0, (extent.height - viewport.height).max(0.0)),
        );
        if clamped != offset {
            scroll.set_offset(clamped);
        }
    }
}

/// Resolves the uniform cell size for this pass.
///
/// An explicit configured size always wins and is the only path guaranteed
/// stable across scroll. Otherwise the first realized item's natural size is
/// used. If nothing is realized yet but the collection is non-empty, item 0
/// is realized transiently, measured without constraints, and released
/// again. Measurement failure degrades to zero; the next pass retries.
#[must_use]
pub fn resolve_cell_size<H: ContainerHost>(
    explicit: Option<Size>,
    first_realized: Option<Size>,
    item_count: usize,
    host: &mut H,
) -> Size {
    if let Some(size) = explicit {
        return size;
    }
    if let Some(size) = first_realized {
        return size;
    }
    if item_count == 0 {
        return Size::ZERO;
    }
    measure_transient(host).unwrap_or(Size::ZERO)
}

fn measure_transient<H: ContainerHost>(host: &mut H) -> Option<Size> {
    let handle = host.realize(0)?;
    let measured = host.measure(&handle, Size::new(f64::INFINITY, f64::INFINITY));
    host.release(handle);
    measured
}
