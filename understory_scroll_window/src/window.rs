// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window computations for linear lists and fixed-column grids.

use core::ops::Range;

use crate::{LayoutMetrics, metrics};

/// Per-update input to a window computation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowInput {
    /// Number of records in the data set.
    pub item_count: usize,
    /// Extent of the viewport along the scroll axis.
    pub viewport_extent: f64,
    /// Scroll position in `[0, 1]`; `0` is the leading edge. Out-of-range values are clamped.
    pub normalized_scroll: f64,
}

impl WindowInput {
    /// Creates a new input.
    #[must_use]
    pub const fn new(item_count: usize, viewport_extent: f64, normalized_scroll: f64) -> Self {
        Self {
            item_count,
            viewport_extent,
            normalized_scroll,
        }
    }
}

/// Result of a window computation.
///
/// The active window covers data indices `first_index..first_index + required_count`,
/// which always lies inside `0..item_count`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowPlan {
    /// Number of records the plan was computed for.
    pub item_count: usize,
    /// Data index bound to the first active instance. Also the number of records
    /// culled above the window.
    pub first_index: usize,
    /// Number of instances that must be active.
    pub required_count: usize,
    /// Largest value `first_index` can take for this item count and viewport.
    pub max_first_index: usize,
    /// Extent of the leading spacer along the scroll axis.
    pub leading_extent: f64,
    /// Cells per line this plan was computed with (`1` for linear lists).
    pub constraint_count: usize,
    /// Number of lines (items for a list, rows or columns for a grid).
    pub line_count: usize,
    /// Total extent of the content along the scroll axis, including padding.
    pub content_extent: f64,
}

impl WindowPlan {
    fn empty(
        item_count: usize,
        constraint_count: usize,
        line_count: usize,
        content_extent: f64,
    ) -> Self {
        Self {
            item_count,
            first_index: 0,
            required_count: 0,
            max_first_index: 0,
            leading_extent: 0.0,
            constraint_count,
            line_count,
            content_extent,
        }
    }

    /// One past the last bound data index.
    #[must_use]
    pub const fn end_index(&self) -> usize {
        self.first_index + self.required_count
    }

    /// The data indices the active window binds, in display order.
    #[must_use]
    pub const fn indices(&self) -> Range<usize> {
        self.first_index..self.end_index()
    }

    /// Returns `true` if no instances are required.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.required_count == 0
    }

    /// Number of whole lines culled above the window.
    #[must_use]
    pub const fn leading_lines(&self) -> usize {
        if self.constraint_count == 0 {
            return self.first_index;
        }
        self.first_index / self.constraint_count
    }
}

/// Computes the window for a single-axis list.
///
/// With `visible = ceil(viewport / element)`:
/// - `required_count = min(visible + 1, item_count)`; the extra instance covers
///   a partially scrolled leading element.
/// - `first_index = floor(scroll * (item_count - visible))`, clamped into
///   `0..=item_count - (visible + 1)`.
/// - `leading_extent = first_index * element`.
#[must_use]
pub fn linear_window(metrics: &LayoutMetrics, input: &WindowInput) -> WindowPlan {
    let item_count = input.item_count;
    let content_extent = metrics::content_extent(metrics, item_count);
    if item_count == 0 || !metrics.is_valid() {
        return WindowPlan::empty(item_count, 1, item_count, content_extent);
    }

    let element = metrics.element_extent();
    let visible = metrics::elements_to_cover(input.viewport_extent, element);
    let slack = visible.saturating_add(1);

    let max_first_index = item_count.saturating_sub(slack);
    let scroll = metrics::clamp_unit(input.normalized_scroll);
    let span = item_count as f64 - visible as f64;
    let first_index = metrics::floor_index(scroll * span, max_first_index);

    WindowPlan {
        item_count,
        first_index,
        required_count: slack.min(item_count),
        max_first_index,
        leading_extent: first_index as f64 * element,
        constraint_count: 1,
        line_count: item_count,
        content_extent,
    }
}

/// Computes the window for a grid with `metrics.constraint_count` cells per line.
///
/// With `visible_lines = ceil(viewport / element) + 1` and
/// `elements_visible = visible_lines * constraint_count`:
/// - `required_count = min(elements_visible, item_count)`.
/// - `first_index` (cells culled above) is
///   `floor(scroll * (lines * constraint_count - elements_visible))`, clamped
///   into `0..=item_count - elements_visible`, then snapped down to a whole
///   line unless it sits exactly at that maximum. Partial lines only ever
///   appear at the very end of the content.
/// - `leading_extent` covers the whole lines above the window.
#[must_use]
pub fn grid_window(metrics: &LayoutMetrics, input: &WindowInput) -> WindowPlan {
    let item_count = input.item_count;
    let columns = metrics.constraint_count.get();
    let line_count = item_count.div_ceil(columns);
    let content_extent = metrics::content_extent(metrics, line_count);
    if item_count == 0 || !metrics.is_valid() {
        return WindowPlan::empty(item_count, columns, line_count, content_extent);
    }

    let element = metrics.element_extent();
    let visible_lines =
        metrics::elements_to_cover(input.viewport_extent, element).saturating_add(1);
    let elements_visible = visible_lines.saturating_mul(columns);

    let max_first_index = item_count.saturating_sub(elements_visible);
    let scroll = metrics::clamp_unit(input.normalized_scroll);
    let span = line_count.saturating_mul(columns) as f64 - elements_visible as f64;
    let mut first_index = metrics::floor_index(scroll * span, max_first_index);
    if first_index != max_first_index {
        first_index -= first_index % columns;
    }

    WindowPlan {
        item_count,
        first_index,
        required_count: elements_visible.min(item_count),
        max_first_index,
        leading_extent: (first_index / columns) as f64 * element,
        constraint_count: columns,
        line_count,
        content_extent,
    }
}

/// Selects a window computation at runtime.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowCalculator {
    /// [`linear_window`]: one element per line; `constraint_count` is ignored.
    #[default]
    Linear,
    /// [`grid_window`]: `constraint_count` cells per line.
    Grid,
}

impl WindowCalculator {
    /// Runs the selected computation.
    #[must_use]
    pub fn compute(self, metrics: &LayoutMetrics, input: &WindowInput) -> WindowPlan {
        match self {
            Self::Linear => linear_window(metrics, input),
            Self::Grid => grid_window(metrics, input),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroUsize;

    use super::*;
    use crate::Axis;

    fn grid_metrics(columns: usize, base: f64) -> LayoutMetrics {
        LayoutMetrics::new(Axis::Vertical, base)
            .with_constraint_count(NonZeroUsize::new(columns).unwrap())
    }

    const SCROLLS: [f64; 9] = [0.0, 0.05, 0.1, 0.25, 0.33, 0.5, 0.77, 0.99, 1.0];
    const VIEWPORTS: [f64; 7] = [0.0, 5.0, 10.0, 33.0, 55.0, 100.0, 1000.0];

    #[test]
    fn grid_scenario_at_top() {
        let plan = grid_window(&grid_metrics(5, 10.0), &WindowInput::new(100, 55.0, 0.0));
        // ceil(55 / 10) + 1 = 7 rows of 5 cells.
        assert_eq!(plan.required_count, 35);
        assert_eq!(plan.first_index, 0);
        assert_eq!(plan.line_count, 20);
        assert_eq!(plan.content_extent, 200.0);
        assert_eq!(plan.leading_extent, 0.0);
    }

    #[test]
    fn grid_scenario_at_bottom() {
        let plan = grid_window(&grid_metrics(5, 10.0), &WindowInput::new(100, 55.0, 1.0));
        assert_eq!(plan.first_index, 65);
        assert_eq!(plan.first_index % 5, 0);
        assert_eq!(plan.end_index(), 100);
        assert_eq!(plan.leading_lines(), 13);
        assert_eq!(plan.leading_extent, 130.0);
    }

    #[test]
    fn grid_maximum_may_leave_a_partial_line() {
        // 23 cells, 4 columns: max culled = 23 - 12 = 11, not a multiple of 4.
        let metrics = grid_metrics(4, 10.0);
        let plan = grid_window(&metrics, &WindowInput::new(23, 20.0, 1.0));
        assert_eq!(plan.required_count, 12);
        assert_eq!(plan.max_first_index, 11);
        assert_eq!(plan.first_index, 11);
        assert_eq!(plan.end_index(), 23);

        // Just short of the end snaps to a whole line.
        let plan = grid_window(&metrics, &WindowInput::new(23, 20.0, 0.9));
        assert_eq!(plan.first_index % 4, 0, "first_index={}", plan.first_index);
    }

    #[test]
    fn linear_window_tracks_scroll() {
        let metrics = LayoutMetrics::new(Axis::Vertical, 10.0);
        let top = linear_window(&metrics, &WindowInput::new(100, 50.0, 0.0));
        assert_eq!(top.first_index, 0);
        assert_eq!(top.required_count, 6);
        assert_eq!(top.max_first_index, 94);

        let mid = linear_window(&metrics, &WindowInput::new(100, 50.0, 0.5));
        // floor(0.5 * (100 - 5)) = 47.
        assert_eq!(mid.first_index, 47);
        assert_eq!(mid.leading_extent, 470.0);

        let bottom = linear_window(&metrics, &WindowInput::new(100, 50.0, 1.0));
        assert_eq!(bottom.first_index, 94);
        assert_eq!(bottom.end_index(), 100);
    }

    #[test]
    fn linear_spacing_is_part_of_the_element() {
        let metrics = LayoutMetrics::new(Axis::Horizontal, 8.0).with_spacing(2.0);
        let plan = linear_window(&metrics, &WindowInput::new(40, 25.0, 0.0));
        // ceil(25 / 10) + 1.
        assert_eq!(plan.required_count, 4);
        assert_eq!(plan.content_extent, 400.0);
    }

    #[test]
    fn small_data_sets_require_every_item() {
        let metrics = LayoutMetrics::new(Axis::Vertical, 10.0);
        let plan = linear_window(&metrics, &WindowInput::new(3, 100.0, 0.7));
        assert_eq!(plan.first_index, 0);
        assert_eq!(plan.required_count, 3);

        let plan = grid_window(&grid_metrics(3, 10.0), &WindowInput::new(7, 100.0, 0.7));
        assert_eq!(plan.first_index, 0);
        assert_eq!(plan.required_count, 7);
        assert_eq!(plan.line_count, 3);
    }

    #[test]
    fn empty_and_degenerate_inputs_yield_empty_plans() {
        let metrics = LayoutMetrics::new(Axis::Vertical, 10.0);
        for calc in [WindowCalculator::Linear, WindowCalculator::Grid] {
            let plan = calc.compute(&metrics, &WindowInput::new(0, 100.0, 0.5));
            assert!(plan.is_empty());
            assert_eq!(plan.indices(), 0..0);

            let broken = LayoutMetrics::new(Axis::Vertical, 0.0);
            let plan = calc.compute(&broken, &WindowInput::new(50, 100.0, 0.5));
            assert!(plan.is_empty(), "{calc:?} must not bind with zero extent");

            let plan = calc.compute(&metrics, &WindowInput::new(50, 100.0, f64::NAN));
            assert_eq!(plan.first_index, 0);
        }
    }

    #[test]
    fn linear_plans_stay_in_bounds() {
        let metrics = LayoutMetrics::new(Axis::Vertical, 10.0);
        for n in 0..80 {
            for viewport in VIEWPORTS {
                let visible = metrics::elements_to_cover(viewport, 10.0);
                for scroll in SCROLLS {
                    let plan = linear_window(&metrics, &WindowInput::new(n, viewport, scroll));
                    assert!(
                        plan.end_index() <= n,
                        "n={n} viewport={viewport} scroll={scroll}: {plan:?}"
                    );
                    assert_eq!(plan.required_count, (visible + 1).min(n));
                    assert!(plan.first_index <= plan.max_first_index);
                }
            }
        }
    }

    #[test]
    fn grid_plans_stay_in_bounds_and_snap() {
        for columns in 1..7 {
            let metrics = grid_metrics(columns, 10.0);
            for n in 0..60 {
                for viewport in VIEWPORTS {
                    let lines = metrics::elements_to_cover(viewport, 10.0) + 1;
                    for scroll in SCROLLS {
                        let plan = grid_window(&metrics, &WindowInput::new(n, viewport, scroll));
                        let ctx =
                            format!("columns={columns} n={n} viewport={viewport} scroll={scroll}");
                        assert!(plan.end_index() <= n, "{ctx}: {plan:?}");
                        assert!(plan.required_count <= n, "{ctx}");
                        if n > 0 {
                            assert_eq!(plan.required_count, (lines * columns).min(n), "{ctx}");
                        }
                        if plan.first_index < plan.max_first_index {
                            assert_eq!(plan.first_index % columns, 0, "{ctx}: {plan:?}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn first_index_is_monotonic_in_scroll() {
        let metrics = grid_metrics(3, 12.0);
        let mut last = 0;
        for step in 0..=100_u32 {
            let scroll = f64::from(step) / 100.0;
            let plan = grid_window(&metrics, &WindowInput::new(500, 90.0, scroll));
            assert!(plan.first_index >= last, "step={step}");
            last = plan.first_index;
        }
        assert_eq!(last, 500 - 9 * 3);
    }
}
