// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan-resize geometry for one handle gesture.
//!
//! ## Usage
//!
//! 1) On gesture start, call [`ResizeGeometry::begin`] with the handle, a
//!    [`LayoutSnapshot`] and the pointer position.
//! 2) On every move, call [`ResizeGeometry::step`] with the current pointer.
//!    The returned [`ResizeFrame`] carries the new size, the translation to
//!    apply relative to the committed offset, and the active flip.
//!
//! ```
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_gesture_geometry::{Handle, LayoutSnapshot, ResizeGeometry, ResizeMode};
//!
//! let snapshot = LayoutSnapshot::unbounded(Rect::new(0.0, 0.0, 200.0, 200.0));
//! let resize = ResizeGeometry::begin(
//!     Handle::BottomRight.spec(),
//!     snapshot,
//!     ResizeMode::Free,
//!     Point::new(200.0, 200.0),
//! );
//! let frame = resize.step(Point::new(250.0, 250.0));
//! assert_eq!(frame.size, Size::new(250.0, 250.0));
//! assert_eq!(frame.delta, Vec2::ZERO);
//! ```

use kurbo::{Point, Rect, Size, Vec2};

use crate::handle::{AxisPlacement, HandleSpec};
use crate::modes::ResizeMode;
use crate::quadrant::{Anchor, Quadrant};
use crate::rotation::Flip;
use crate::snapshot::LayoutSnapshot;

/// Geometry of one in-flight handle gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeGeometry {
    spec: HandleSpec,
    snapshot: LayoutSnapshot,
    anchor: Anchor,
    ratio: Option<f64>,
    reference: Quadrant,
}

/// Result of one move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeFrame {
    /// Pointer after container clamping.
    pub pointer: Point,
    /// Quadrant of the pointer relative to the anchor.
    pub quadrant: Quadrant,
    /// New element size.
    pub size: Size,
    /// Translation relative to the committed offset.
    pub delta: Vec2,
    /// Flip relative to the quadrant the gesture started in.
    pub flip: Flip,
}

impl ResizeFrame {
    /// Committed style offset after applying this frame.
    #[must_use]
    pub fn position(&self, offset: Point) -> Point {
        offset + self.delta
    }

    /// New element bounds given its bounds at gesture start.
    #[must_use]
    pub fn bounds(&self, element: Rect) -> Rect {
        Rect::from_origin_size(element.origin() + self.delta, self.size)
    }
}

impl ResizeGeometry {
    /// Starts a gesture on `spec`.
    ///
    /// The aspect ratio is only captured in [`ResizeMode::AspectLocked`] and
    /// only when the element has a non-zero area; otherwise the gesture runs
    /// unlocked.
    #[must_use]
    pub fn begin(
        spec: &HandleSpec,
        snapshot: LayoutSnapshot,
        mode: ResizeMode,
        pointer: Point,
    ) -> Self {
        let element = snapshot.element;
        let anchor = Anchor::for_handle(spec, element);
        let ratio = (mode.is_locked() && element.width() > 0.0 && element.height() > 0.0)
            .then(|| element.height() / element.width());
        Self {
            spec: *spec,
            snapshot,
            anchor,
            ratio,
            reference: Quadrant::classify(anchor, pointer),
        }
    }

    /// Anchor of this gesture.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Quadrant the gesture started in.
    #[must_use]
    pub fn reference_quadrant(&self) -> Quadrant {
        self.reference
    }

    /// Captured `height / width`, if the gesture is aspect-locked.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        self.ratio
    }

    /// Layout captured at gesture start.
    #[must_use]
    pub fn snapshot(&self) -> &LayoutSnapshot {
        &self.snapshot
    }

    /// Computes size, translation and flip for a pointer position.
    #[must_use]
    pub fn step(&self, pointer: Point) -> ResizeFrame {
        let pointer = self.snapshot.clamp_point(pointer);
        let quadrant = Quadrant::classify(self.anchor, pointer);
        let size = self.size(pointer, quadrant);
        let delta = self.delta(pointer, quadrant, size);
        ResizeFrame {
            pointer,
            quadrant,
            size,
            delta,
            flip: Flip::between(self.reference, quadrant),
        }
    }

    fn size(&self, pointer: Point, quadrant: Quadrant) -> Size {
        let element = self.snapshot.element;
        let mut width = self
            .anchor
            .x
            .map_or(element.width(), |x| (x - pointer.x).abs());
        let mut height = match self.ratio {
            Some(ratio) => {
                let mut height = width * ratio;
                if let (Some(container), Some(y)) = (self.snapshot.container, self.anchor.y) {
                    let edge = if quadrant.is_upper() {
                        container.y0
                    } else {
                        container.y1
                    };
                    let max_height = (y - edge).abs();
                    if height > max_height {
                        height = max_height;
                        width = height / ratio;
                    }
                }
                height
            }
            None => self
                .anchor
                .y
                .map_or(element.height(), |y| (y - pointer.y).abs()),
        };
        if !self.anchor.resizes_x() {
            width = element.width();
        }
        if !self.anchor.resizes_y() {
            height = element.height();
        }
        Size::new(width, height)
    }

    fn delta(&self, pointer: Point, quadrant: Quadrant, size: Size) -> Vec2 {
        // Unconstrained axes never land on the negative side, so the
        // anchor coordinate is only read where it exists.
        let dx = || self.anchor.x.map_or(0.0, |x| pointer.x - x);
        let dy = || self.anchor.y.map_or(0.0, |y| pointer.y - y);
        let locked = self.ratio.is_some();
        let mut delta = match quadrant {
            Quadrant::One if locked => Vec2::new(0.0, -size.height),
            Quadrant::One => Vec2::new(0.0, dy()),
            Quadrant::Two if locked => Vec2::new(-size.width, -size.height),
            Quadrant::Two => Vec2::new(dx(), dy()),
            Quadrant::Three if locked => Vec2::new(-size.width, 0.0),
            Quadrant::Three => Vec2::new(dx(), 0.0),
            Quadrant::Four => Vec2::ZERO,
        };
        // Near-edge handles move the near edge: the offset is measured from
        // the far edge, which stays put.
        let element = self.snapshot.element;
        if matches!(self.spec.x, AxisPlacement::Near(_)) {
            delta.x = element.width() - delta.x.abs();
        }
        if matches!(self.spec.y, AxisPlacement::Near(_)) {
            delta.y = element.height() - delta.y.abs();
        }
        delta
    }
}
