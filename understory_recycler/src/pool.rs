// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A growable recycling pool that owns every instance it hands out.

use alloc::boxed::Box;
use alloc::vec::Vec;

use understory_scroll_window::Axis;

use crate::{InstanceId, Poolable};

/// Lifetime counters for an [`ItemPool`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Instances constructed by the factory.
    pub created: usize,
    /// Successful [`ItemPool::acquire`] calls.
    pub acquired: usize,
    /// Successful [`ItemPool::release`] calls.
    pub released: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum SlotState {
    Idle,
    Active,
}

#[derive(Debug)]
struct Slot<T> {
    instance: T,
    generation: u32,
    state: SlotState,
}

/// A recycling pool of `T` instances.
///
/// The pool is an arena: it owns every instance it has created, and each slot
/// is either idle or leased out. [`acquire`](Self::acquire) and
/// [`release`](Self::release) are the only operations that move a slot between
/// the two states, so an instance can never be idle and leased at once.
/// Callers reach leased instances through the returned [`InstanceId`].
///
/// When no idle instance is left, `acquire` grows the pool through the factory
/// instead of failing.
///
/// ```rust
/// use understory_recycler::{ItemPool, Poolable};
///
/// #[derive(Default)]
/// struct Row {
///     visible: bool,
/// }
///
/// impl Poolable for Row {
///     fn set_active(&mut self, active: bool) {
///         self.visible = active;
///     }
/// }
///
/// let mut pool = ItemPool::new(Row::default);
/// pool.prewarm(2);
///
/// let a = pool.acquire();
/// assert!(pool.get(a).unwrap().visible);
/// assert!(pool.release(a));
/// // The released handle is stale; the instance went back to the idle set.
/// assert!(pool.get(a).is_none());
/// assert_eq!(pool.idle_len(), 2);
/// ```
pub struct ItemPool<T> {
    slots: Vec<Slot<T>>,
    /// Idle slots, most recently released last.
    idle: Vec<u32>,
    factory: Box<dyn FnMut() -> T>,
    pooled_extent: Option<(Axis, f64)>,
    /// First generation handed to newly created slots; raised by `dispose`.
    generation_floor: u32,
    stats: PoolStats,
}

impl<T> core::fmt::Debug for ItemPool<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ItemPool")
            .field("slots", &self.slots.len())
            .field("idle", &self.idle.len())
            .field("pooled_extent", &self.pooled_extent)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<T: Poolable> ItemPool<T> {
    /// Creates an empty pool that builds instances with `factory`.
    pub fn new(factory: impl FnMut() -> T + 'static) -> Self {
        Self {
            slots: Vec::new(),
            idle: Vec::new(),
            factory: Box::new(factory),
            pooled_extent: None,
            generation_floor: 0,
            stats: PoolStats::default(),
        }
    }

    /// Sets the extent applied to instances created from now on.
    pub fn set_pooled_extent(&mut self, axis: Axis, extent: f64) {
        self.pooled_extent = Some((axis, extent));
    }

    /// Creates idle instances until the pool holds at least `count` in total.
    pub fn prewarm(&mut self, count: usize) {
        while self.slots.len() < count {
            let slot = self.create();
            self.idle.push(slot);
        }
    }

    /// Leases an instance, creating one if none is idle.
    pub fn acquire(&mut self) -> InstanceId {
        let slot = match self.idle.pop() {
            Some(slot) => slot,
            None => {
                rtrace!(slots = self.slots.len(), "pool exhausted, growing");
                self.create()
            }
        };
        let entry = &mut self.slots[slot as usize];
        entry.state = SlotState::Active;
        entry.instance.set_active(true);
        self.stats.acquired += 1;
        InstanceId::new(slot, entry.generation)
    }

    /// Returns a leased instance to the idle set.
    ///
    /// Returns `false` if `id` is stale (already released, or from before a
    /// [`dispose`](Self::dispose)); nothing changes in that case.
    pub fn release(&mut self, id: InstanceId) -> bool {
        let Some(entry) = self.slots.get_mut(id.slot()) else {
            return false;
        };
        if entry.generation != id.generation() || entry.state != SlotState::Active {
            return false;
        }
        entry.instance.set_active(false);
        entry.state = SlotState::Idle;
        entry.generation = entry.generation.wrapping_add(1);
        self.idle.push(id.0);
        self.stats.released += 1;
        true
    }

    /// Drops every instance, idle or leased. Outstanding handles become stale.
    pub fn dispose(&mut self) {
        if let Some(max) = self.slots.iter().map(|s| s.generation).max() {
            self.generation_floor = self.generation_floor.max(max.wrapping_add(1));
        }
        rdebug!(slots = self.slots.len(), "pool disposed");
        self.slots.clear();
        self.idle.clear();
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "InstanceId uses 32-bit slots; pools never approach that size."
    )]
    fn create(&mut self) -> u32 {
        let mut instance = (self.factory)();
        if let Some((axis, extent)) = self.pooled_extent {
            instance.configure_pooled_extent(axis, extent);
        }
        instance.set_active(false);
        self.slots.push(Slot {
            instance,
            generation: self.generation_floor,
            state: SlotState::Idle,
        });
        self.stats.created += 1;
        (self.slots.len() - 1) as u32
    }
}

impl<T> ItemPool<T> {
    /// Returns `true` if `id` refers to a live lease.
    #[must_use]
    pub fn is_active(&self, id: InstanceId) -> bool {
        self.slots
            .get(id.slot())
            .is_some_and(|s| s.generation == id.generation() && s.state == SlotState::Active)
    }

    /// Shared access to a leased instance.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&T> {
        if !self.is_active(id) {
            return None;
        }
        self.slots.get(id.slot()).map(|s| &s.instance)
    }

    /// Mutable access to a leased instance.
    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut T> {
        if !self.is_active(id) {
            return None;
        }
        self.slots.get_mut(id.slot()).map(|s| &mut s.instance)
    }

    /// Total number of instances owned by the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the pool owns no instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of idle instances.
    #[must_use]
    pub fn idle_len(&self) -> usize {
        self.idle.len()
    }

    /// Number of leased instances.
    #[must_use]
    pub fn active_len(&self) -> usize {
        self.slots.len() - self.idle.len()
    }

    /// Lifetime counters.
    #[must_use]
    pub const fn stats(&self) -> PoolStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use understory_scroll_window::Axis;

    use super::ItemPool;
    use crate::Poolable;

    #[derive(Debug, Default)]
    struct Gadget {
        active: bool,
        extent: Option<f64>,
    }

    impl Poolable for Gadget {
        fn set_active(&mut self, active: bool) {
            self.active = active;
        }

        fn configure_pooled_extent(&mut self, _axis: Axis, extent: f64) {
            self.extent = Some(extent);
        }
    }

    #[test]
    fn prewarm_then_acquire_reuses_idle_instances() {
        let built = Rc::new(Cell::new(0));
        let counter = built.clone();
        let mut pool = ItemPool::new(move || {
            counter.set(counter.get() + 1);
            Gadget::default()
        });
        pool.prewarm(3);
        assert_eq!(built.get(), 3);
        assert_eq!(pool.idle_len(), 3);

        let a = pool.acquire();
        let b = pool.acquire();
        assert_ne!(a.slot(), b.slot());
        assert_eq!(built.get(), 3, "acquire must not build while idle instances remain");
        assert_eq!(pool.active_len(), 2);
        assert!(pool.get(a).unwrap().active);
    }

    #[test]
    fn exhaustion_grows_the_pool() {
        let mut pool = ItemPool::new(Gadget::default);
        pool.prewarm(1);
        let _a = pool.acquire();
        let _b = pool.acquire();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.stats().created, 2);
        assert_eq!(pool.idle_len(), 0);
    }

    #[test]
    fn release_deactivates_and_stales_the_handle() {
        let mut pool = ItemPool::new(Gadget::default);
        let a = pool.acquire();
        assert!(pool.release(a));
        assert!(!pool.is_active(a));
        assert!(pool.get(a).is_none());
        // A second release of the same lease is rejected.
        assert!(!pool.release(a));
        assert_eq!(pool.stats().released, 1);

        let again = pool.acquire();
        assert_eq!(again.slot(), a.slot(), "idle slot is reused");
        assert_ne!(again.generation(), a.generation());
        assert!(pool.get_mut(again).unwrap().active);
    }

    #[test]
    fn pooled_extent_is_applied_on_creation() {
        let mut pool = ItemPool::new(Gadget::default);
        pool.set_pooled_extent(Axis::Vertical, 32.0);
        let a = pool.acquire();
        assert_eq!(pool.get(a).unwrap().extent, Some(32.0));
    }

    #[test]
    fn dispose_drops_everything_and_invalidates_handles() {
        let mut pool = ItemPool::new(Gadget::default);
        pool.prewarm(4);
        let a = pool.acquire();
        pool.dispose();
        assert!(pool.is_empty());
        assert!(pool.get(a).is_none());
        assert!(!pool.release(a));

        // New leases after dispose never alias old handles.
        let b = pool.acquire();
        assert!(b.generation() > a.generation());
        assert!(pool.get(a).is_none());
        assert!(pool.get(b).is_some());
    }
}
