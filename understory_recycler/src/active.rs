// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered run of leased items bound to consecutive data indices.

use smallvec::SmallVec;
use understory_scroll_window::WindowPlan;

use crate::{
    Changes, ContentOrder, DataSource, Diagnostic, DiagnosticSink, InstanceId, ItemPool, Poolable,
    ScrollDirection, ShiftMode, VisualItem,
};

/// The active window: item `i` always shows data index `first_index + i`.
///
/// Items appear in [`ContentOrder`] in the same order as in the window.
#[derive(Clone, Debug, Default)]
pub struct ActiveWindow {
    items: SmallVec<[InstanceId; 32]>,
    first_index: usize,
}

impl ActiveWindow {
    /// Creates an empty window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Leased items in display order.
    #[must_use]
    pub fn items(&self) -> &[InstanceId] {
        &self.items
    }

    /// Data index bound to the first item.
    #[must_use]
    pub const fn first_index(&self) -> usize {
        self.first_index
    }

    /// Number of active items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no items are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `(data index, item)` pairs in display order.
    pub fn bindings(&self) -> impl Iterator<Item = (usize, InstanceId)> + '_ {
        let first = self.first_index;
        self.items.iter().enumerate().map(move |(i, id)| (first + i, *id))
    }

    /// Brings the window in line with `plan`.
    ///
    /// A length change repopulates from the pool. Otherwise a moved first index
    /// recycles items from one end to the other according to `mode`.
    /// `force_rebind` rebinds whatever did not get freshly bound.
    pub fn sync<I, D>(
        &mut self,
        plan: &WindowPlan,
        mode: ShiftMode,
        force_rebind: bool,
        pool: &mut ItemPool<I>,
        order: &mut ContentOrder,
        data: &D,
        sink: &mut dyn DiagnosticSink,
    ) -> Changes
    where
        I: VisualItem<D::Record>,
        D: DataSource + ?Sized,
    {
        if self.items.len() != plan.required_count {
            self.populate(plan, pool, order, data, sink);
            return Changes::REPOPULATED;
        }

        let mut changes = Changes::empty();
        if !self.items.is_empty() && plan.first_index != self.first_index {
            let rebound = match mode {
                ShiftMode::PerItem => {
                    self.shift_per_item(plan.first_index, pool, order, data, sink);
                    false
                }
                ShiftMode::SingleStep => {
                    self.shift_single_step(plan.first_index, pool, order, data, sink)
                }
            };
            changes |= Changes::SHIFTED;
            if rebound {
                changes |= Changes::REBOUND;
            }
        }
        if force_rebind && !changes.contains(Changes::REBOUND) && !self.items.is_empty() {
            self.rebind_all(pool, data, sink);
            changes |= Changes::REBOUND;
        }
        changes
    }

    /// Releases every item to `pool` and removes it from `order`.
    pub fn release_all<I: Poolable>(&mut self, pool: &mut ItemPool<I>, order: &mut ContentOrder) {
        for id in self.items.drain(..) {
            pool.release(id);
        }
        order.clear_items();
    }

    fn populate<I, D>(
        &mut self,
        plan: &WindowPlan,
        pool: &mut ItemPool<I>,
        order: &mut ContentOrder,
        data: &D,
        sink: &mut dyn DiagnosticSink,
    ) where
        I: VisualItem<D::Record>,
        D: DataSource + ?Sized,
    {
        rdebug!(
            from = self.items.len(),
            to = plan.required_count,
            first = plan.first_index,
            "repopulating active window"
        );
        self.release_all(pool, order);
        self.first_index = plan.first_index;
        for index in plan.indices() {
            let id = pool.acquire();
            order.push_item(id);
            bind(pool, id, index, data, sink);
            self.items.push(id);
        }
    }

    /// Moves up to one full rotation of items, one index at a time.
    fn shift_per_item<I, D>(
        &mut self,
        first: usize,
        pool: &mut ItemPool<I>,
        order: &mut ContentOrder,
        data: &D,
        sink: &mut dyn DiagnosticSink,
    ) where
        I: VisualItem<D::Record>,
        D: DataSource + ?Sized,
    {
        let (direction, delta) = travel(self.first_index, first);
        let len = self.items.len();
        let moves = delta.min(len);
        rtrace!(?direction, delta, moves, "shifting grid window");
        self.first_index = first;
        for i in 0..moves {
            let id = self.rotate(direction, order);
            let index = match direction {
                ScrollDirection::Forward => first + len - moves + i,
                ScrollDirection::Backward => first + moves - 1 - i,
            };
            bind(pool, id, index, data, sink);
        }
    }

    /// Moves one item, then rebinds everything if the jump was longer.
    ///
    /// Returns `true` if the whole window was rebound.
    fn shift_single_step<I, D>(
        &mut self,
        first: usize,
        pool: &mut ItemPool<I>,
        order: &mut ContentOrder,
        data: &D,
        sink: &mut dyn DiagnosticSink,
    ) -> bool
    where
        I: VisualItem<D::Record>,
        D: DataSource + ?Sized,
    {
        let (direction, delta) = travel(self.first_index, first);
        rtrace!(?direction, delta, "shifting list window");
        self.first_index = first;
        let id = self.rotate(direction, order);
        if delta > 1 {
            self.rebind_all(pool, data, sink);
            return true;
        }
        let index = match direction {
            ScrollDirection::Forward => first + self.items.len() - 1,
            ScrollDirection::Backward => first,
        };
        bind(pool, id, index, data, sink);
        false
    }

    /// Moves the item at one end of the window to the other, in both the window
    /// and `order`. Returns the moved item.
    fn rotate(&mut self, direction: ScrollDirection, order: &mut ContentOrder) -> InstanceId {
        order.rotate_items(direction);
        match direction {
            ScrollDirection::Forward => {
                self.items.rotate_left(1);
                self.items[self.items.len() - 1]
            }
            ScrollDirection::Backward => {
                self.items.rotate_right(1);
                self.items[0]
            }
        }
    }

    fn rebind_all<I, D>(&self, pool: &mut ItemPool<I>, data: &D, sink: &mut dyn DiagnosticSink)
    where
        I: VisualItem<D::Record>,
        D: DataSource + ?Sized,
    {
        rtrace!(first = self.first_index, len = self.items.len(), "rebinding active window");
        for (index, id) in self.bindings() {
            bind(pool, id, index, data, sink);
        }
    }
}

fn travel(from: usize, to: usize) -> (ScrollDirection, usize) {
    if to >= from {
        (ScrollDirection::Forward, to - from)
    } else {
        (ScrollDirection::Backward, from - to)
    }
}

fn bind<I, D>(
    pool: &mut ItemPool<I>,
    id: InstanceId,
    index: usize,
    data: &D,
    sink: &mut dyn DiagnosticSink,
) where
    I: VisualItem<D::Record>,
    D: DataSource + ?Sized,
{
    match (data.get(index), pool.get_mut(id)) {
        (Some(record), Some(item)) => item.bind(index, record),
        (None, _) => sink.report(&Diagnostic::UnboundIndex {
            index,
            item_count: data.len(),
        }),
        (Some(_), None) => {}
    }
}
