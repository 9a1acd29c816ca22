// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scroll_window --heading-base-level=0

//! Understory Scroll Window: window arithmetic for recycled lists and grids.
//!
//! A recycling list keeps a small, fixed number of view instances alive and
//! rebinds them to different data indices as the viewport moves. This crate
//! answers the arithmetic half of that problem, with no knowledge of views,
//! pools, or any UI framework:
//!
//! - [`Axis`]: which direction content scrolls in.
//! - [`LayoutMetrics`]: per-element extent, inter-element spacing, padding, and
//!   the number of cells per line (columns of a vertical grid). These are read
//!   once from the host layout and then held fixed.
//! - [`metrics`]: small pure helpers for viewport extent, normalized scroll
//!   position, element extent, and content extent.
//! - [`linear_window`] and [`grid_window`]: given a [`WindowInput`] (item count,
//!   viewport extent, normalized scroll position), compute a [`WindowPlan`]
//!   describing the first bound index, how many instances must be active, and
//!   how much leading space stands in for everything scrolled past.
//! - [`WindowCalculator`]: selects one of the two at runtime.
//!
//! Every plan satisfies `first_index + required_count <= item_count`, so a host
//! can read `required_count` consecutive records starting at `first_index`
//! without bounds checks failing.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_scroll_window::{Axis, LayoutMetrics, WindowInput, linear_window};
//!
//! // Rows are 18 units tall with 2 units of spacing.
//! let metrics = LayoutMetrics::new(Axis::Vertical, 18.0).with_spacing(2.0);
//!
//! // 1000 rows in a 100 unit viewport, scrolled halfway.
//! let plan = linear_window(&metrics, &WindowInput::new(1000, 100.0, 0.5));
//!
//! assert_eq!(plan.required_count, 6);
//! assert_eq!(plan.first_index, 497);
//! assert!(plan.end_index() <= 1000);
//! // The host places `leading_extent` worth of spacer before the first row.
//! assert_eq!(plan.leading_extent, 497.0 * 20.0);
//! ```
//!
//! ## Grids
//!
//! ```rust
//! use core::num::NonZeroUsize;
//! use understory_scroll_window::{Axis, LayoutMetrics, WindowInput, grid_window};
//!
//! let metrics = LayoutMetrics::new(Axis::Vertical, 10.0)
//!     .with_constraint_count(NonZeroUsize::new(5).unwrap());
//!
//! let plan = grid_window(&metrics, &WindowInput::new(100, 55.0, 0.0));
//! // Six visible rows plus one row of slack, five cells each.
//! assert_eq!(plan.required_count, 35);
//! assert_eq!(plan.first_index, 0);
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`Axis`], [`LayoutMetrics`],
//!   [`WindowInput`], and [`WindowPlan`].

mod axis;
mod layout;
pub mod metrics;
mod window;

pub use axis::Axis;
pub use layout::LayoutMetrics;
pub use window::{WindowCalculator, WindowInput, WindowPlan, grid_window, linear_window};
