// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only access to the host's data set.

use alloc::vec::Vec;

/// An indexed, read-only sequence of records.
///
/// The recycler only ever reads through this trait; the host owns the data.
pub trait DataSource {
    /// Record type handed to [`VisualItem::bind`](crate::VisualItem::bind).
    type Record: ?Sized;

    /// Number of records.
    fn len(&self) -> usize;

    /// Returns `true` if there are no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The record at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<&Self::Record>;
}

impl<T> DataSource for [T] {
    type Record = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> DataSource for Vec<T> {
    type Record = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T, const N: usize> DataSource for [T; N] {
    type Record = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}
