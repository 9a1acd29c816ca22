// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sibling order of the content container.

use alloc::collections::VecDeque;

use crate::{Child, InstanceId, ScrollDirection};

/// Ordered children of the scroll content container.
///
/// Position in this list is the sibling index: it decides layout and draw
/// order. Fillers always form a prefix, followed by items in the order the
/// active window binds them. Hosts mirror this order into their own scene
/// after each update.
///
/// Both segments are double-ended, so everything an update does (a filler
/// added at the front or dropped from it, an item moved from one end of the
/// window to the other) is constant time regardless of how many fillers there
/// are.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentOrder {
    fillers: VecDeque<InstanceId>,
    items: VecDeque<InstanceId>,
}

impl ContentOrder {
    /// Creates an empty child list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fillers: VecDeque::new(),
            items: VecDeque::new(),
        }
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fillers.len() + self.items.len()
    }

    /// Returns `true` if the container has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fillers.is_empty() && self.items.is_empty()
    }

    /// Children in sibling order.
    pub fn iter(&self) -> impl Iterator<Item = Child> + '_ {
        self.fillers
            .iter()
            .map(|id| Child::Filler(*id))
            .chain(self.items.iter().map(|id| Child::Item(*id)))
    }

    /// The child at sibling `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Child> {
        match index.checked_sub(self.fillers.len()) {
            None => self.fillers.get(index).map(|id| Child::Filler(*id)),
            Some(i) => self.items.get(i).map(|id| Child::Item(*id)),
        }
    }

    /// Sibling index of `child`, if present. Linear in the size of its segment.
    #[must_use]
    pub fn position(&self, child: Child) -> Option<usize> {
        match child {
            Child::Filler(id) => self.fillers.iter().position(|f| *f == id),
            Child::Item(id) => self
                .items
                .iter()
                .position(|i| *i == id)
                .map(|i| i + self.fillers.len()),
        }
    }

    /// Returns `true` if `child` is present.
    #[must_use]
    pub fn contains(&self, child: Child) -> bool {
        self.position(child).is_some()
    }

    /// Number of fillers.
    #[must_use]
    pub fn filler_count(&self) -> usize {
        self.fillers.len()
    }

    /// Number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Puts a filler at sibling index 0.
    pub fn push_filler_front(&mut self, id: InstanceId) {
        self.fillers.push_front(id);
    }

    /// Removes a filler. Constant time when it is the first sibling.
    pub fn remove_filler(&mut self, id: InstanceId) -> bool {
        if self.fillers.front() == Some(&id) {
            self.fillers.pop_front();
            return true;
        }
        match self.fillers.iter().position(|f| *f == id) {
            Some(at) => self.fillers.remove(at).is_some(),
            None => false,
        }
    }

    /// Appends an item after the last item.
    pub fn push_item(&mut self, id: InstanceId) {
        self.items.push_back(id);
    }

    /// Removes an item, returning the sibling index it had.
    pub fn remove_item(&mut self, id: InstanceId) -> Option<usize> {
        let at = self.items.iter().position(|i| *i == id)?;
        self.items.remove(at);
        Some(at + self.fillers.len())
    }

    /// Reinserts an item at position `index` among the items, clamped to the end.
    ///
    /// Returns `false` if `id` is not present.
    pub fn set_item_index(&mut self, id: InstanceId, index: usize) -> bool {
        let Some(at) = self.items.iter().position(|i| *i == id) else {
            return false;
        };
        self.items.remove(at);
        let index = index.min(self.items.len());
        self.items.insert(index, id);
        true
    }

    /// Moves the item at one end of the item run to the other end.
    ///
    /// `Forward` moves the first item after the last one; `Backward` moves the
    /// last item before the first one. Returns the moved item.
    pub fn rotate_items(&mut self, direction: ScrollDirection) -> Option<InstanceId> {
        match direction {
            ScrollDirection::Forward => {
                let id = self.items.pop_front()?;
                self.items.push_back(id);
                Some(id)
            }
            ScrollDirection::Backward => {
                let id = self.items.pop_back()?;
                self.items.push_front(id);
                Some(id)
            }
        }
    }

    /// Removes every item, keeping the fillers.
    pub fn clear_items(&mut self) {
        self.items.clear();
    }

    /// Removes every child.
    pub fn clear(&mut self) {
        self.fillers.clear();
        self.items.clear();
    }

    /// Item handles in sibling order.
    pub fn items(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.items.iter().copied()
    }

    /// Filler handles in sibling order.
    pub fn fillers(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.fillers.iter().copied()
    }
}
