// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::handle::{AxisPlacement, HandleSpec};

/// The fixed reference point of a resize gesture.
///
/// Each coordinate is the element edge opposite the dragged handle. A `None`
/// coordinate means the handle is centered on that axis, so only the other
/// axis resizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    /// Horizontal anchor, if the handle resizes horizontally.
    pub x: Option<f64>,
    /// Vertical anchor, if the handle resizes vertically.
    pub y: Option<f64>,
}

impl Anchor {
    /// Computes the anchor for dragging `spec` on an element occupying `element`.
    ///
    /// A handle fixed to the near edge (`left` / `top`) anchors on the far edge
    /// and vice versa.
    #[must_use]
    pub fn for_handle(spec: &HandleSpec, element: Rect) -> Self {
        Self {
            x: opposite_edge(spec.x, element.x0, element.x1),
            y: opposite_edge(spec.y, element.y0, element.y1),
        }
    }

    /// Returns `true` when the gesture changes the element width.
    #[must_use]
    pub fn resizes_x(&self) -> bool {
        self.x.is_some()
    }

    /// Returns `true` when the gesture changes the element height.
    #[must_use]
    pub fn resizes_y(&self) -> bool {
        self.y.is_some()
    }
}

fn opposite_edge(placement: AxisPlacement, near: f64, far: f64) -> Option<f64> {
    match placement {
        AxisPlacement::Near(_) => Some(far),
        AxisPlacement::Middle => None,
        AxisPlacement::Far(_) => Some(near),
    }
}

/// Region of the plane around an [`Anchor`], in screen orientation (y down).
///
/// ```text
///   2 | 1
///  ---A---
///   3 | 4
/// ```
///
/// Points exactly on an axis belong to the quadrant on its left / upper side.
/// An axis the anchor does not constrain always counts as the positive side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Right of the anchor, at or above it.
    One = 1,
    /// At or left of the anchor, at or above it.
    Two = 2,
    /// At or left of the anchor, below it.
    Three = 3,
    /// Right of and below the anchor.
    Four = 4,
}

impl Quadrant {
    /// Classifies `pointer` relative to `anchor`.
    #[must_use]
    pub fn classify(anchor: Anchor, pointer: Point) -> Self {
        let right = anchor.x.is_none_or(|x| pointer.x - x > 0.0);
        let below = anchor.y.is_none_or(|y| pointer.y - y > 0.0);
        match (right, below) {
            (true, false) => Self::One,
            (false, false) => Self::Two,
            (false, true) => Self::Three,
            (true, true) => Self::Four,
        }
    }

    /// Quadrant number, `1..=4`.
    #[must_use]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Number of quadrants travelled from `reference` to `self`, going
    /// 1 → 2 → 3 → 4 → 1. Always in `0..4`.
    #[must_use]
    pub fn steps_from(self, reference: Self) -> u8 {
        (self.number() + 4 - reference.number()) % 4
    }

    /// Returns `true` for the upper half (quadrants 1 and 2).
    #[must_use]
    pub fn is_upper(self) -> bool {
        matches!(self, Self::One | Self::Two)
    }
}
