// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Value types carried by layout nodes.

use core::fmt;

use serde::Serialize;

use crate::color::ColorRgba8;

/// A length along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Length {
    /// Absolute length in abstract units.
    Units(f64),
    /// Percentage of the parent's extent on the same axis.
    Percent(f64),
    /// Sized by content or by the parent's flow.
    #[default]
    Auto,
}

impl Length {
    /// Whole parent extent.
    pub const FULL: Self = Self::Percent(100.0);

    /// Returns `true` for [`Length::Auto`].
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Units(v) => write!(f, "{v}"),
            Self::Percent(p) => write!(f, "{p}%"),
            Self::Auto => f.write_str("auto"),
        }
    }
}

/// Per-edge spacing in abstract units.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
pub struct Insets {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

impl Insets {
    /// No spacing.
    pub const ZERO: Self = Self::all(0.0);

    /// Same spacing on every edge.
    pub const fn all(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// `x` on left/right, `y` on top/bottom.
    pub const fn symmetric(x: f64, y: f64) -> Self {
        Self {
            top: y,
            right: x,
            bottom: y,
            left: x,
        }
    }

    /// Replaces the left edge.
    #[must_use]
    pub const fn with_left(self, left: f64) -> Self {
        Self { left, ..self }
    }

    /// Replaces the top edge.
    #[must_use]
    pub const fn with_top(self, top: f64) -> Self {
        Self { top, ..self }
    }

    /// Returns `true` when every edge is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Corner treatment of a node.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rounding {
    /// Square corners.
    #[default]
    Square,
    /// Same radius on every corner.
    Uniform(f64),
    /// Individual radii.
    #[serde(rename_all = "camelCase")]
    Corners {
        /// Top-left radius.
        top_left: f64,
        /// Top-right radius.
        top_right: f64,
        /// Bottom-right radius.
        bottom_right: f64,
        /// Bottom-left radius.
        bottom_left: f64,
    },
    /// Fully rounded ends (capsule).
    Pill,
}

impl Rounding {
    /// Returns `true` for [`Rounding::Square`].
    pub const fn is_square(&self) -> bool {
        matches!(self, Self::Square)
    }
}

/// Main-axis direction children are laid out in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Flow {
    /// Left to right.
    #[default]
    Row,
    /// Top to bottom.
    Column,
    /// Bottom to top; the first child sits at the bottom.
    ColumnReverse,
}

/// Distribution of children along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Align {
    /// Packed at the start.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Packed at the end.
    End,
    /// First and last child at the edges, the rest spread evenly.
    SpaceBetween,
}

/// How a node is placed relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Position {
    /// Participates in the parent's flow.
    #[default]
    Flow,
    /// Removed from flow and pinned to the parent's top-left corner plus offsets.
    Absolute {
        /// Offset from the parent's top edge.
        top: Length,
        /// Offset from the parent's left edge.
        left: Length,
    },
}

impl Position {
    /// Returns `true` for [`Position::Flow`].
    pub const fn is_flow(&self) -> bool {
        matches!(self, Self::Flow)
    }
}

/// Drop shadow around a node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Shadow {
    /// Blur radius in abstract units.
    pub blur: f64,
    /// Shadow color.
    pub color: ColorRgba8,
}

/// Outline drawn along a node's border.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stroke {
    /// Stroke width in abstract units.
    pub width: f64,
    /// Stroke color.
    pub color: ColorRgba8,
}
