// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public handle types, child entries, and per-update change flags.

/// Handle to an instance leased from an [`ItemPool`](crate::ItemPool) (generational).
///
/// The slot is the instance's stable identity for its whole life in the pool.
/// The generation changes every time the instance is released, so a handle
/// kept past its release no longer resolves.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct InstanceId(pub(crate) u32, pub(crate) u32);

impl InstanceId {
    pub(crate) const fn new(slot: u32, generation: u32) -> Self {
        Self(slot, generation)
    }

    /// Stable slot of the underlying instance.
    ///
    /// Hosts that mirror instances into their own scene can key on this.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.0 as usize
    }

    /// Generation of the lease this handle refers to.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.1
    }
}

/// An entry in the content container's child order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Child {
    /// A visual item bound to a data record.
    Item(InstanceId),
    /// A spacer filler standing in for content scrolled past.
    Filler(InstanceId),
}

/// Direction of a change in the first bound index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// The first bound index increased (content moved toward its end).
    Forward,
    /// The first bound index decreased.
    Backward,
}

bitflags::bitflags! {
    /// What an update pass changed.
    ///
    /// An empty set means the pass left every instance, binding, and spacer untouched.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// Every active item was released and the window was rebuilt from the pool.
        const REPOPULATED    = 0b0000_0001;
        /// Items were recycled from one end of the window to the other.
        const SHIFTED        = 0b0000_0010;
        /// Every active item was rebound to its data index without pool traffic.
        const REBOUND        = 0b0000_0100;
        /// The leading spacer changed size or filler count.
        const SPACER_RESIZED = 0b0000_1000;
    }
}

impl Changes {
    /// Returns `true` if items were acquired from or released to the item pool.
    ///
    /// Filler traffic is not counted here; it shows up as
    /// [`SPACER_RESIZED`](Self::SPACER_RESIZED).
    #[must_use]
    pub const fn touched_pool(self) -> bool {
        self.contains(Self::REPOPULATED)
    }
}
