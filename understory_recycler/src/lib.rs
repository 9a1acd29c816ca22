// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_recycler --heading-base-level=0

//! Understory Recycler: pooled view instances for long scrolling lists and grids.
//!
//! A list of ten thousand rows only ever shows a dozen. This crate keeps that
//! dozen alive and rebinds them as the viewport moves, instead of creating a
//! view per record. It builds on [`understory_scroll_window`] for the window
//! arithmetic and adds the instance lifecycle around it:
//!
//! - [`ItemPool`]: an arena of host instances. [`acquire`](ItemPool::acquire)
//!   leases one (growing the pool when it is empty) and
//!   [`release`](ItemPool::release) returns it. Released handles go stale.
//! - [`ActiveWindow`]: the leased items, where item `i` always shows data
//!   index `first_index + i`. Scrolling moves items from one end to the other
//!   and rebinds only those that moved.
//! - [`LinearSpacer`] and [`GridSpacer`]: fillers that take up the space of
//!   everything scrolled past. Lists use one variable-size filler; grids use one
//!   fixed-size cell per culled record so columns stay aligned.
//! - [`ContentOrder`]: the content container's child order. Fillers come
//!   first, then items in window order. Hosts mirror it into their scene.
//! - [`RecyclingList`]: the controller. It is parameterized by a
//!   [`LayoutStrategy`], either [`LinearStrategy`] or [`GridStrategy`].
//!
//! Host views implement [`Poolable`] plus [`VisualItem`] (for items) or
//! [`Filler`] (for spacer fillers). Data is read through [`DataSource`], which
//! slices and vectors already implement.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use understory_recycler::{
//!     Axis, Filler, GridStrategy, LayoutDescriptor, Poolable, RecyclerConfig, RecyclingList,
//!     VisualItem,
//! };
//!
//! #[derive(Default)]
//! struct Tile {
//!     index: Option<usize>,
//! }
//! impl Poolable for Tile {
//!     fn set_active(&mut self, _active: bool) {}
//! }
//! impl VisualItem<u32> for Tile {
//!     fn bind(&mut self, index: usize, _record: &u32) {
//!         self.index = Some(index);
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Cell;
//! impl Poolable for Cell {
//!     fn set_active(&mut self, _active: bool) {}
//! }
//! impl Filler for Cell {
//!     fn set_ignore_layout(&mut self, _ignore: bool) {}
//!     fn set_main_extent(&mut self, _axis: Axis, _extent: f64) {}
//! }
//!
//! let photos: Vec<u32> = (0..100).collect();
//! let mut grid = RecyclingList::new(
//!     RecyclerConfig::new(Axis::Vertical, 10.0),
//!     GridStrategy::new(Cell::default),
//!     Tile::default,
//! );
//! grid.setup(Some(&LayoutDescriptor::new().with_columns(5).with_spacing(Vec2::ZERO)))
//!     .unwrap();
//!
//! grid.update(&photos, 55.0, 1.0);
//! // Seven rows of five tiles; thirteen rows of filler cells above them.
//! assert_eq!(grid.active_items().len(), 35);
//! assert_eq!(grid.first_index(), Some(65));
//! assert_eq!(grid.children().filler_count(), 65);
//!
//! let last = *grid.active_items().last().unwrap();
//! assert_eq!(grid.item(last).unwrap().index, Some(99));
//! ```
//!
//! ## Diagnostics
//!
//! Non-fatal conditions, such as setting up without a layout descriptor, are
//! reported as [`Diagnostic`]s to the [`DiagnosticSink`] passed to
//! [`RecyclingList::with_diagnostics`]. Closures are sinks.
//!
//! ## Features
//!
//! - `tracing`: emits setup, update, and pool events on the
//!   `understory_recycler` target, and provides `TracingSink`, which forwards
//!   diagnostics as warnings.
//! - `serde`: derives `Serialize`/`Deserialize` for [`RecyclerConfig`],
//!   [`LayoutDescriptor`], and the re-exported window types.

extern crate alloc;

#[macro_use]
mod macros;

mod active;
mod config;
mod data;
mod diagnostics;
mod error;
mod instance;
mod list;
mod order;
mod pool;
mod spacer;
mod strategy;
mod types;

pub use active::ActiveWindow;
pub use config::{LayoutDescriptor, RecyclerConfig};
pub use data::DataSource;
#[cfg(feature = "tracing")]
pub use diagnostics::TracingSink;
pub use diagnostics::{Diagnostic, DiagnosticSink, NullSink};
pub use error::SetupError;
pub use instance::{Filler, Poolable, VisualItem};
pub use list::RecyclingList;
pub use order::ContentOrder;
pub use pool::{ItemPool, PoolStats};
pub use spacer::{GridSpacer, LinearSpacer};
pub use strategy::{GridStrategy, LayoutStrategy, LinearStrategy, ShiftMode};
pub use types::{Changes, Child, InstanceId, ScrollDirection};

pub use understory_scroll_window::{Axis, LayoutMetrics, WindowCalculator, WindowInput, WindowPlan};
