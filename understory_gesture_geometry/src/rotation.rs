// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::quadrant::Quadrant;

/// Transient per-gesture flip flags.
///
/// A flag is set while the pointer sits on the mirrored side of the anchor
/// along that axis, relative to where the gesture started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flip {
    /// Flipped about the horizontal axis (`rotateX`).
    pub x: bool,
    /// Flipped about the vertical axis (`rotateY`).
    pub y: bool,
}

impl Flip {
    /// No flip.
    pub const NONE: Self = Self { x: false, y: false };

    /// Flip implied by moving from `reference` to `now`.
    ///
    /// One step from an odd reference quadrant crosses the vertical axis and
    /// flips `y`; from an even one it crosses the horizontal axis and flips
    /// `x`. Three steps is one step backwards. Two steps flips both.
    #[must_use]
    pub fn between(reference: Quadrant, now: Quadrant) -> Self {
        let odd = reference.number() % 2 == 1;
        match now.steps_from(reference) {
            1 => Self { x: !odd, y: odd },
            2 => Self { x: true, y: true },
            3 => Self { x: odd, y: !odd },
            _ => Self::NONE,
        }
    }

    /// Returns `true` if either axis is flipped.
    #[must_use]
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Cumulative flip rotation of a reversible element.
///
/// `x_deg` / `y_deg` persist across gestures and are always `0` or `180`;
/// `flip` holds the uncommitted flags of the active gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    /// Flags of the gesture in progress.
    pub flip: Flip,
    /// Committed `rotateX` in degrees.
    pub x_deg: f64,
    /// Committed `rotateY` in degrees.
    pub y_deg: f64,
}

impl Rotation {
    /// Creates a rotation with committed degrees and no active flip.
    #[must_use]
    pub fn new(x_deg: f64, y_deg: f64) -> Self {
        Self {
            flip: Flip::NONE,
            x_deg,
            y_deg,
        }
    }

    /// Degrees to display right now: committed plus the active flip.
    ///
    /// Not reduced modulo 360 so CSS transitions keep turning the same way.
    #[must_use]
    pub fn display_degrees(&self) -> (f64, f64) {
        (
            self.x_deg + half_turn(self.flip.x),
            self.y_deg + half_turn(self.flip.y),
        )
    }

    /// Folds the active flip into the committed degrees and clears it.
    pub fn commit(&mut self) {
        self.x_deg = (self.x_deg + half_turn(self.flip.x)) % 360.0;
        self.y_deg = (self.y_deg + half_turn(self.flip.y)) % 360.0;
        self.flip = Flip::NONE;
    }

    /// Drops the active flip without committing it.
    pub fn discard(&mut self) {
        self.flip = Flip::NONE;
    }
}

fn half_turn(flag: bool) -> f64 {
    if flag { 180.0 } else { 0.0 }
}
