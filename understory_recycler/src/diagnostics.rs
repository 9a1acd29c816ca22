// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-fatal conditions reported while setting up or updating a list.
//!
//! A [`RecyclingList`](crate::RecyclingList) never logs on its own. It hands
//! each [`Diagnostic`] to the [`DiagnosticSink`] it was built with, which is
//! [`NullSink`] unless the host installs another one. Any `FnMut(&Diagnostic)`
//! closure is a sink.

use core::fmt;

/// A recoverable condition the host may want to surface.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Diagnostic {
    /// Setup ran without a layout descriptor; spacing and padding default to zero.
    MissingLayoutDescriptor {
        /// Name of the layout strategy that wanted one.
        layout: &'static str,
    },
    /// A grid descriptor had no column count; one column is used.
    MissingColumnCount,
    /// An update arrived before a successful setup and was ignored.
    UpdateBeforeSetup,
    /// The data source returned nothing for an index inside its reported length.
    UnboundIndex {
        /// Requested index.
        index: usize,
        /// Length the data source reported.
        item_count: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLayoutDescriptor { layout } => write!(
                f,
                "{layout} layout has no layout descriptor; using zero spacing and padding"
            ),
            Self::MissingColumnCount => {
                f.write_str("grid layout descriptor has no column count; using 1 column")
            }
            Self::UpdateBeforeSetup => f.write_str("update called before setup; ignored"),
            Self::UnboundIndex { index, item_count } => write!(
                f,
                "data source returned no record for index {index} of {item_count}"
            ),
        }
    }
}

/// Receiver for [`Diagnostic`]s.
pub trait DiagnosticSink {
    /// Handles one diagnostic.
    fn report(&mut self, diagnostic: &Diagnostic);
}

impl<F: FnMut(&Diagnostic)> DiagnosticSink for F {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self(diagnostic);
    }
}

/// Discards every diagnostic.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: &Diagnostic) {}
}

/// Forwards diagnostics to `tracing` as warnings on the `understory_recycler` target.
#[cfg(feature = "tracing")]
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        tracing::warn!(target: "understory_recycler", "{diagnostic}");
    }
}
