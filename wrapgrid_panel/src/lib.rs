// Copyright 2026 the Wrapgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrapgrid panel: the controller around [`wrapgrid_core`]'s layout math.
//!
//! A [`WrapGrid`] sequences the per-pass pipeline — size resolution, grid
//! geometry, range selection, arrangement — against three injected
//! collaborators: a [`ContainerHost`] owning item lifecycles, a
//! [`ScrollInfo`] owning the offset/viewport/extent, and an optional
//! [`ItemStyleLookup`] for stretch constraints. It also answers scroll
//! navigation queries (line/wheel/page increments, bring-index-into-view).
//!
//! The panel carries no incremental invalidation state: every pass
//! recomputes everything from the current inputs, so resizes and collection
//! changes are handled by simply measuring again.
//!
//! ```rust
//! use kurbo::Size;
//! use wrapgrid_panel::{
//!     CacheLength, CacheUnit, ContainerHost, GridConfig, ScrollState, SpacingMode, WrapGrid,
//! };
//!
//! // A host whose items are all 50x50.
//! struct Host;
//! impl ContainerHost for Host {
//!     type Handle = ();
//!     fn realize(&mut self, _index: usize) -> Option<()> {
//!         Some(())
//!     }
//!     fn release(&mut self, _handle: ()) {}
//!     fn measure(&mut self, _handle: &(), _constraint: Size) -> Option<Size> {
//!         Some(Size::new(50.0, 50.0))
//!     }
//! }
//!
//! let mut grid = WrapGrid::new(GridConfig {
//!     spacing_mode: SpacingMode::None,
//!     cache_length: CacheLength::ZERO,
//!     cache_unit: CacheUnit::Pixel,
//!     ..GridConfig::default()
//! })
//! .unwrap();
//!
//! let mut scroll = ScrollState::new(Size::new(200.0, 200.0));
//! let range = grid.measure(Size::new(200.0, 200.0), 100, None, &mut Host, &mut scroll, None);
//!
//! // 16 of the 100 items are realized; the rest stay virtual.
//! assert_eq!(range.len(), 16);
//! assert_eq!(scroll.extent, Size::new(200.0, 1250.0));
//!
//! let rects = grid.arrange(Size::new(200.0, 200.0), &scroll, &(), false);
//! assert_eq!(rects.len(), 16);
//! ```

mod config;
mod host;
mod panel;

pub use config::{ConfigError, GridConfig};
pub use host::{ContainerHost, ItemStyleLookup, ScrollInfo, ScrollState};
pub use panel::{ScrollDirection, ScrollIncrement, WrapGrid, resolve_cell_size};

// The core vocabulary, re-exported so hosts depend on one crate.
pub use wrapgrid_core::{
    Axis, CacheLength, CacheUnit, GridGeometry, GroupingContext, ItemRange, ScrollUnit,
    ScrollView, Spacing, SpacingMode,
};
