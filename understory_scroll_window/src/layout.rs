// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed layout metrics shared by every window computation.

use core::num::NonZeroUsize;

use kurbo::Insets;

use crate::{Axis, metrics};

/// Layout metrics for a recycled list or grid.
///
/// These are captured once from the host layout (spacing, padding, column
/// count) and then held fixed. A host that re-lays-out its container with
/// different spacing or columns must build new metrics.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutMetrics {
    /// Scroll axis.
    pub axis: Axis,
    /// Extent of one element (or one grid line) along the scroll axis, without spacing.
    pub base_extent: f64,
    /// Spacing between consecutive elements along the scroll axis.
    pub spacing: f64,
    /// Padding of the content container.
    pub padding: Insets,
    /// Cells per line. `1` for a linear list; the column count of a vertical grid.
    pub constraint_count: NonZeroUsize,
}

impl LayoutMetrics {
    /// Creates metrics with no spacing, no padding, and one cell per line.
    #[must_use]
    pub const fn new(axis: Axis, base_extent: f64) -> Self {
        Self {
            axis,
            base_extent,
            spacing: 0.0,
            padding: Insets::ZERO,
            constraint_count: NonZeroUsize::MIN,
        }
    }

    /// Sets the spacing between consecutive elements along the scroll axis.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the container padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the number of cells per line.
    #[must_use]
    pub const fn with_constraint_count(mut self, constraint_count: NonZeroUsize) -> Self {
        self.constraint_count = constraint_count;
        self
    }

    /// Extent of one element including spacing.
    #[must_use]
    pub fn element_extent(&self) -> f64 {
        metrics::element_extent(self.base_extent, self.spacing)
    }

    /// Returns `true` if [`element_extent`](Self::element_extent) is finite and positive.
    ///
    /// Window computations on invalid metrics degrade to an empty visible range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let extent = self.element_extent();
        extent.is_finite() && extent > 0.0
    }

    /// Sum of leading and trailing padding along the scroll axis.
    #[must_use]
    pub fn main_padding_total(&self) -> f64 {
        let (leading, trailing) = self.axis.main_padding(self.padding);
        leading + trailing
    }
}
