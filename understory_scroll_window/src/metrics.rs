// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure scroll metrics: viewport extent, normalized position, element and content extents.
//!
//! All values live in the host's 1D scroll coordinate space (typically logical
//! pixels). Inputs are expected to be finite; NaNs and negative extents are
//! clamped to zero rather than propagated.

use kurbo::Size;

use crate::{Axis, LayoutMetrics};

/// Extent of the viewport along `axis`, clamped to be non-negative.
#[must_use]
pub fn viewport_extent(axis: Axis, viewport: Size) -> f64 {
    non_negative(axis.main(viewport))
}

/// Extent of one element including the spacing that follows it.
#[must_use]
pub fn element_extent(base_extent: f64, spacing: f64) -> f64 {
    base_extent + spacing
}

/// Total content extent for `line_count` lines, including padding along the scroll axis.
///
/// For a linear list `line_count` is the item count; for a grid it is
/// `ceil(item_count / constraint_count)`.
#[must_use]
pub fn content_extent(metrics: &LayoutMetrics, line_count: usize) -> f64 {
    let lines = metrics.element_extent() * line_count as f64;
    non_negative(lines) + non_negative(metrics.main_padding_total())
}

/// Normalized scroll position in `[0, 1]` for a pixel offset.
///
/// `0` is the leading edge (top or left) and `1` is scrolled fully to the end.
/// When the content fits inside the viewport there is nowhere to scroll and the
/// result is `0`.
#[must_use]
pub fn normalized_position(offset: f64, content_extent: f64, viewport_extent: f64) -> f64 {
    let scrollable = content_extent - viewport_extent;
    if scrollable.is_nan() || scrollable <= 0.0 {
        return 0.0;
    }
    clamp_unit(offset / scrollable)
}

/// Clamps a normalized position into `[0, 1]`, mapping NaN to `0`.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Number of elements of `element_extent` needed to cover `viewport_extent`, rounded up.
///
/// Returns `0` for degenerate inputs (non-positive or non-finite element extent,
/// non-positive viewport).
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "Float-to-int casts saturate; the count is positive here"
)]
pub fn elements_to_cover(viewport_extent: f64, element_extent: f64) -> usize {
    if !element_extent.is_finite() || element_extent <= 0.0 {
        return 0;
    }
    if viewport_extent.is_nan() || viewport_extent <= 0.0 {
        return 0;
    }
    (viewport_extent / element_extent).ceil() as usize
}

/// Floors `value` into `0..=max`. NaN and negative values map to `0`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "The floored value is non-negative and below `max`"
)]
pub fn floor_index(value: f64, max: usize) -> usize {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    let floored = value.floor();
    if floored >= max as f64 {
        max
    } else {
        floored as usize
    }
}

fn non_negative(value: f64) -> f64 {
    if value > 0.0 { value } else { 0.0 }
}
