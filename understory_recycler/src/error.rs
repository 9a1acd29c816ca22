// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Reasons [`RecyclingList::setup`](crate::RecyclingList::setup) can refuse a configuration.
///
/// A failed setup leaves the list untouched; it can be retried with a corrected
/// descriptor.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum SetupError {
    /// Base extent plus spacing is not a finite, positive length.
    #[error("element extent must be finite and positive (base {base_extent} + spacing {spacing})")]
    InvalidElementExtent {
        /// Configured base extent.
        base_extent: f64,
        /// Spacing along the scroll axis taken from the descriptor.
        spacing: f64,
    },
    /// The layout descriptor asked for a grid with zero columns.
    #[error("grid layout descriptor has zero columns")]
    ZeroColumns,
}
