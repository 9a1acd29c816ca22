// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leading spacers standing in for content scrolled past the active window.

use alloc::vec::Vec;

use understory_scroll_window::Axis;

use crate::{ContentOrder, Filler, InstanceId, ItemPool, PoolStats};

#[derive(Copy, Clone, Debug, PartialEq)]
enum LinearExtent {
    Ignored,
    Sized(f64),
}

/// A single variable-size filler at sibling index 0.
///
/// A non-positive target removes the filler from layout. Otherwise it is sized
/// to `target - spacing`, since the layout adds one spacing gap after it.
#[derive(Debug)]
pub struct LinearSpacer<F> {
    pool: ItemPool<F>,
    filler: Option<InstanceId>,
    applied: Option<LinearExtent>,
}

impl<F: Filler> LinearSpacer<F> {
    /// Creates a detached spacer whose filler is built by `factory`.
    pub fn new(factory: impl FnMut() -> F + 'static) -> Self {
        Self {
            pool: ItemPool::new(factory),
            filler: None,
            applied: None,
        }
    }

    /// Leases the filler and inserts it at the front of `order`. No-op if attached.
    pub fn attach(&mut self, order: &mut ContentOrder) {
        if self.filler.is_some() {
            return;
        }
        let id = self.pool.acquire();
        order.push_filler_front(id);
        self.filler = Some(id);
        self.applied = None;
    }

    /// Resizes the filler to cover `target` along `axis`.
    ///
    /// Returns `true` if the filler's size or layout participation changed.
    /// Does nothing while detached.
    pub fn sync(&mut self, target: f64, spacing: f64, axis: Axis) -> bool {
        let Some(id) = self.filler else {
            return false;
        };
        let wanted = if target.is_nan() || target <= 0.0 {
            LinearExtent::Ignored
        } else {
            LinearExtent::Sized((target - spacing).max(0.0))
        };
        if self.applied == Some(wanted) {
            return false;
        }
        let Some(filler) = self.pool.get_mut(id) else {
            return false;
        };
        match wanted {
            LinearExtent::Ignored => {
                filler.set_ignore_layout(true);
                filler.set_main_extent(axis, 0.0);
            }
            LinearExtent::Sized(extent) => {
                filler.set_ignore_layout(false);
                filler.set_main_extent(axis, extent);
            }
        }
        self.applied = Some(wanted);
        true
    }

    /// Releases the filler and removes it from `order`.
    pub fn detach(&mut self, order: &mut ContentOrder) {
        if let Some(id) = self.filler.take() {
            order.remove_filler(id);
            self.pool.release(id);
        }
        self.applied = None;
    }

    /// Creates idle fillers until the pool holds `count`.
    pub fn prewarm(&mut self, count: usize) {
        self.pool.prewarm(count);
    }

    /// Drops every filler instance. Call [`detach`](Self::detach) first to clean up `order`.
    pub fn dispose(&mut self) {
        self.filler = None;
        self.applied = None;
        self.pool.dispose();
    }

    /// Handle of the attached filler.
    #[must_use]
    pub fn handle(&self) -> Option<InstanceId> {
        self.filler
    }

    /// Extent currently applied to the filler; `None` while it is out of layout.
    #[must_use]
    pub fn extent(&self) -> Option<f64> {
        match self.applied {
            Some(LinearExtent::Sized(extent)) => Some(extent),
            _ => None,
        }
    }

    /// The filler behind `id`.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&F> {
        self.pool.get(id)
    }

    /// Mutable access to the filler behind `id`.
    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut F> {
        self.pool.get_mut(id)
    }

    /// Counters of the filler pool.
    #[must_use]
    pub fn pool_stats(&self) -> PoolStats {
        self.pool.stats()
    }
}

/// A run of fixed-size filler cells, one per data record culled above a grid.
///
/// Cells keep column alignment where a single variable-size filler could not.
/// Growth leases cells and puts each at sibling index 0; shrinking releases
/// from the most recently added end.
#[derive(Debug)]
pub struct GridSpacer<F> {
    pool: ItemPool<F>,
    cells: Vec<InstanceId>,
}

impl<F: Filler> GridSpacer<F> {
    /// Creates an empty spacer whose cells are built by `factory`.
    pub fn new(factory: impl FnMut() -> F + 'static) -> Self {
        Self {
            pool: ItemPool::new(factory),
            cells: Vec::new(),
        }
    }

    /// Sets the extent new cells are created with.
    pub fn set_cell_extent(&mut self, axis: Axis, extent: f64) {
        self.pool.set_pooled_extent(axis, extent);
    }

    /// Creates idle cells until the pool holds `count`.
    pub fn prewarm(&mut self, count: usize) {
        self.pool.prewarm(count);
    }

    /// Grows or shrinks to exactly `count` cells. Returns `true` if the count changed.
    pub fn sync(&mut self, count: usize, order: &mut ContentOrder) -> bool {
        if count == self.cells.len() {
            return false;
        }
        rtrace!(from = self.cells.len(), to = count, "resizing grid spacer");
        while self.cells.len() < count {
            let id = self.pool.acquire();
            if let Some(cell) = self.pool.get_mut(id) {
                cell.set_ignore_layout(false);
            }
            order.push_filler_front(id);
            self.cells.push(id);
        }
        while self.cells.len() > count {
            let Some(id) = self.cells.pop() else {
                break;
            };
            // The newest cell is the first sibling, so this is constant time.
            order.remove_filler(id);
            self.pool.release(id);
        }
        true
    }

    /// Releases every cell and removes them from `order`.
    pub fn clear(&mut self, order: &mut ContentOrder) {
        self.sync(0, order);
    }

    /// Drops every cell instance. Call [`clear`](Self::clear) first to clean up `order`.
    pub fn dispose(&mut self) {
        self.cells.clear();
        self.pool.dispose();
    }

    /// Number of cells currently in layout.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cells are in layout.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Handles of the cells in layout, oldest first.
    #[must_use]
    pub fn handles(&self) -> &[InstanceId] {
        &self.cells
    }

    /// The cell behind `id`.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&F> {
        self.pool.get(id)
    }

    /// Mutable access to the cell behind `id`.
    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut F> {
        self.pool.get_mut(id)
    }

    /// Counters of the cell pool.
    #[must_use]
    pub fn pool_stats(&self) -> PoolStats {
        self.pool.stats()
    }
}
