// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::snapshot::LayoutSnapshot;

/// Geometry of one pinch-to-zoom resize gesture.
///
/// The element scales uniformly about its center. When a container is
/// present the scale is capped so the element fits, and the box is nudged
/// back inside if keeping the center fixed would overflow an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchGeometry {
    snapshot: LayoutSnapshot,
    center: Point,
}

/// Result of one pinch move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchFrame {
    /// Scale factor actually applied after capping.
    pub scale: f64,
    /// New element size.
    pub size: Size,
    /// Translation relative to the committed offset.
    pub delta: Vec2,
}

impl PinchFrame {
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

impl PinchGeometry {
    /// Starts a pinch gesture anchored on the element center.
    #[must_use]
    pub fn begin(snapshot: LayoutSnapshot) -> Self {
        Self {
            center: snapshot.element.center(),
            snapshot,
        }
    }

    /// The fixed center of this gesture.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Layout captured at gesture start.
    #[must_use]
    pub fn snapshot(&self) -> &LayoutSnapshot {
        &self.snapshot
    }

    /// Computes the frame for a cumulative gesture `scale`.
    ///
    /// Non-finite scales are treated as `1.0`; negative ones as `0.0`.
    #[must_use]
    pub fn step(&self, scale: f64) -> PinchFrame {
        let element = self.snapshot.element;
        let mut scale = if scale.is_finite() {
            scale.max(0.0)
        } else {
            1.0
        };
        if let Some(container) = self.snapshot.container {
            if element.width() > 0.0 {
                scale = scale.min(container.width() / element.width());
            }
            if element.height() > 0.0 {
                scale = scale.min(container.height() / element.height());
            }
        }
        let size = Size::new(element.width() * scale, element.height() * scale);
        let mut origin = self.center - size.to_vec2() * 0.5;
        if let Some(container) = self.snapshot.container {
            origin.x = origin.x.min(container.x1 - size.width).max(container.x0);
            origin.y = origin.y.min(container.y1 - size.height).max(container.y0);
        }
        PinchFrame {
            scale,
            size,
            delta: origin - element.origin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_about_center() {
        let element = Rect::new(100.0, 100.0, 200.0, 150.0);
        let g = PinchGeometry::begin(LayoutSnapshot::unbounded(element));
        let f = g.step(2.0);
        assert_eq!(f.size, Size::new(200.0, 100.0));
        assert_eq!(f.bounds(element), Rect::new(50.0, 75.0, 250.0, 175.0));
        assert_eq!(f.bounds(element).center(), g.center());
    }

    #[test]
    fn shrinking_keeps_center() {
        let element = Rect::new(0.0, 0.0, 100.0, 100.0);
        let g = PinchGeometry::begin(LayoutSnapshot::unbounded(element));
        let f = g.step(0.5);
        assert_eq!(f.bounds(element), Rect::new(25.0, 25.0, 75.0, 75.0));
        assert_eq!(f.position(Point::new(10.0, 10.0)), Point::new(35.0, 35.0));
    }

    #[test]
    fn capped_and_nudged_into_container() {
        let container = Rect::new(0.0, 0.0, 300.0, 200.0);
        let element = Rect::new(0.0, 0.0, 100.0, 50.0);
        let g = PinchGeometry::begin(LayoutSnapshot::unbounded(element).with_container(container));
        let f = g.step(10.0);
        assert_eq!(f.scale, 3.0);
        assert_eq!(f.size, Size::new(300.0, 150.0));
        let bounds = f.bounds(element);
        assert_eq!(bounds, Rect::new(0.0, 0.0, 300.0, 150.0));
    }

    #[test]
    fn bogus_scales_are_sanitized() {
        let element = Rect::new(0.0, 0.0, 100.0, 100.0);
        let g = PinchGeometry::begin(LayoutSnapshot::unbounded(element));
        assert_eq!(g.step(f64::NAN).size, Size::new(100.0, 100.0));
        assert_eq!(g.step(-3.0).size, Size::ZERO);
    }
}
