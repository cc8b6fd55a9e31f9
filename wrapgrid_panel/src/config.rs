// Copyright 2026 the Wrapgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel configuration.
//!
//! Configuration is a plain immutable struct, re-read once per layout pass.
//! It is validated when the panel is constructed: misconfiguration is a
//! programmer error and fails loudly rather than silently defaulting into
//! an ambiguous layout.

use core::fmt;

use kurbo::Size;

use wrapgrid_core::{Axis, CacheLength, CacheUnit, ScrollUnit, SpacingMode};

/// Configuration for a [`WrapGrid`](crate::WrapGrid).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Explicit uniform item size. `None` means the size is inferred from
    /// the first realized item each pass.
    pub item_size: Option<Size>,
    /// The major (scroll) axis.
    pub orientation: Axis,
    /// How leftover cross-axis space within a line is distributed.
    pub spacing_mode: SpacingMode,
    /// Whether items stretch to fill their line, up to the style lookup's
    /// cross-axis cap.
    pub stretch_items: bool,
    /// Cache window beyond the strict viewport.
    pub cache_length: CacheLength,
    /// The unit `cache_length` is expressed in.
    pub cache_unit: CacheUnit,
    /// Kill-switch: with virtualization off, every item is realized.
    pub is_virtualizing: bool,
    /// How raw offsets map to lines when nested under a grouping container.
    pub scroll_unit: ScrollUnit,
    /// Items scrolled per mouse-wheel notch.
    pub wheel_delta_items: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            item_size: None,
            orientation: Axis::Vertical,
            spacing_mode: SpacingMode::Uniform,
            stretch_items: false,
            cache_length: CacheLength::new(1.0, 1.0),
            cache_unit: CacheUnit::Page,
            is_virtualizing: true,
            scroll_unit: ScrollUnit::Pixel,
            wheel_delta_items: 3,
        }
    }
}

impl GridConfig {
    /// Checks the configuration for programmer errors.
    ///
    /// Degenerate *runtime* inputs (zero items, zero sizes) are the
    /// engine's to clamp; this only rejects values that can never be
    /// meaningful.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(size) = self.item_size
            && !(size.width.is_finite()
                && size.height.is_finite()
                && size.width >= 0.0
                && size.height >= 0.0)
        {
            return Err(ConfigError::InvalidItemSize(size));
        }
        let cache = self.cache_length;
        if !(cache.before.is_finite()
            && cache.after.is_finite()
            && cache.before >= 0.0
            && cache.after >= 0.0)
        {
            return Err(ConfigError::InvalidCacheLength(cache));
        }
        if self.wheel_delta_items == 0 {
            return Err(ConfigError::ZeroWheelDelta);
        }
        Ok(())
    }
}

/// A configuration value that can never produce a meaningful layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The explicit item size is negative or non-finite.
    InvalidItemSize(Size),
    /// A cache budget is negative or non-finite.
    InvalidCacheLength(CacheLength),
    /// Zero items per wheel notch would make wheel scrolling a no-op.
    ZeroWheelDelta,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidItemSize(size) => {
                write!(f, "explicit item size must be finite and non-negative, got {size:?}")
            }
            Self::InvalidCacheLength(cache) => {
                write!(f, "cache lengths must be finite and non-negative, got {cache:?}")
            }
            Self::ZeroWheelDelta => write!(f, "wheel delta must be at least one item"),
        }
    }
}

impl core::error::Error for ConfigError {}
