// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setup-time configuration.

use kurbo::{Insets, Vec2};
use understory_scroll_window::Axis;

/// Host configuration supplied when a [`RecyclingList`](crate::RecyclingList) is built.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecyclerConfig {
    /// Scroll axis.
    pub axis: Axis,
    /// Extent of one item along the scroll axis, excluding spacing.
    pub base_extent: f64,
    /// Item instances created up front.
    pub prewarm_items: usize,
    /// Filler instances created up front.
    pub prewarm_fillers: usize,
}

impl RecyclerConfig {
    /// Creates a configuration with nothing prewarmed.
    #[must_use]
    pub const fn new(axis: Axis, base_extent: f64) -> Self {
        Self {
            axis,
            base_extent,
            prewarm_items: 0,
            prewarm_fillers: 0,
        }
    }

    /// Sets how many item instances to create during setup.
    #[must_use]
    pub const fn with_prewarm_items(mut self, count: usize) -> Self {
        self.prewarm_items = count;
        self
    }

    /// Sets how many filler instances to create during setup.
    #[must_use]
    pub const fn with_prewarm_fillers(mut self, count: usize) -> Self {
        self.prewarm_fillers = count;
        self
    }
}

/// Layout parameters read from the host's layout component.
///
/// Only the component of `spacing` along the scroll axis and the padding on
/// the scroll axis' two ends affect window math. `columns` is read by grids
/// only.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutDescriptor {
    /// Gap between consecutive elements (horizontal, vertical).
    pub spacing: Vec2,
    /// Padding around the content.
    pub padding: Insets,
    /// Cells per line for grid layouts.
    pub columns: Option<usize>,
}

impl Default for LayoutDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutDescriptor {
    /// A descriptor with no spacing, no padding, and no column count.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            spacing: Vec2::ZERO,
            padding: Insets::ZERO,
            columns: None,
        }
    }

    /// Sets the spacing between elements.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: Vec2) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the content padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the grid column count.
    #[must_use]
    pub const fn with_columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }
}
