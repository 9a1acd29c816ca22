// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll axis selection.

use kurbo::{Insets, Size, Vec2};

/// The direction content scrolls in.
///
/// The *main* axis is the scroll axis; the *cross* axis runs perpendicular to
/// it. In a vertical grid, lines are rows and cells within a line are columns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Content scrolls top to bottom.
    #[default]
    Vertical,
    /// Content scrolls left to right.
    Horizontal,
}

impl Axis {
    /// Returns the component of `size` along the scroll axis.
    #[must_use]
    pub const fn main(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }

    /// Returns the component of `size` across the scroll axis.
    #[must_use]
    pub const fn cross(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.width,
            Self::Horizontal => size.height,
        }
    }

    /// Returns the component of a 2D spacing vector along the scroll axis.
    #[must_use]
    pub const fn main_of(self, v: Vec2) -> f64 {
        match self {
            Self::Vertical => v.y,
            Self::Horizontal => v.x,
        }
    }

    /// Returns the `(leading, trailing)` padding along the scroll axis.
    #[must_use]
    pub const fn main_padding(self, insets: Insets) -> (f64, f64) {
        match self {
            Self::Vertical => (insets.y0, insets.y1),
            Self::Horizontal => (insets.x0, insets.x1),
        }
    }

    /// Builds a [`Size`] with `main` along this axis and `cross` across it.
    #[must_use]
    pub const fn pack_size(self, main: f64, cross: f64) -> Size {
        match self {
            Self::Vertical => Size::new(cross, main),
            Self::Horizontal => Size::new(main, cross),
        }
    }
}
