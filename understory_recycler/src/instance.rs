// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contracts for host-provided instances.

use understory_scroll_window::Axis;

/// An instance that can live in an [`ItemPool`](crate::ItemPool).
pub trait Poolable {
    /// Shows or hides the instance as it leaves or enters the idle set.
    fn set_active(&mut self, active: bool);

    /// Applies the pool's configured extent. Called once, right after creation.
    fn configure_pooled_extent(&mut self, axis: Axis, extent: f64) {
        let _ = (axis, extent);
    }
}

/// A recyclable view bound to one record of type `R` at a time.
pub trait VisualItem<R: ?Sized>: Poolable {
    /// Binds the instance to the record at `index`. The instance renders itself.
    fn bind(&mut self, index: usize, record: &R);
}

/// A data-less placeholder occupying layout space before the active window.
pub trait Filler: Poolable {
    /// Excludes the filler from layout (or re-includes it).
    fn set_ignore_layout(&mut self, ignore: bool);

    /// Sets the filler's extent along `axis`.
    fn set_main_extent(&mut self, axis: Axis, extent: f64);
}
