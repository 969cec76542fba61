// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

/// Limits for the committed offset of an element dragged inside a container.
///
/// Offsets are container-relative: `0` is the container's near edge and
/// `max_right` / `max_bottom` put the element flush with the far edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragBounds {
    /// Largest `left` offset that keeps the element inside.
    pub max_right: f64,
    /// Largest `top` offset that keeps the element inside.
    pub max_bottom: f64,
}

impl DragBounds {
    /// Computes limits from element and container boxes captured at drag start.
    ///
    /// The limits are negative when the element is larger than the container.
    #[must_use]
    pub fn new(element: Rect, container: Rect) -> Self {
        Self {
            max_right: container.width() - element.width(),
            max_bottom: container.height() - element.height(),
        }
    }

    /// Clamps `start + delta`, per axis, against the limit the motion heads
    /// toward only.
    ///
    /// An element that started out of range can therefore still be dragged back.
    #[must_use]
    pub fn clamp(&self, start: Point, delta: Vec2) -> Point {
        let target = start + delta;
        Point::new(
            clamp_toward(target.x, delta.x, self.max_right),
            clamp_toward(target.y, delta.y, self.max_bottom),
        )
    }
}

fn clamp_toward(value: f64, delta: f64, max: f64) -> f64 {
    if delta < 0.0 {
        value.max(0.0)
    } else {
        value.min(max)
    }
}

/// Target offset for a drag that started at `start` and has moved by `delta`.
#[must_use]
pub fn drag_target(start: Point, delta: Vec2, bounds: Option<&DragBounds>) -> Point {
    match bounds {
        Some(bounds) => bounds.clamp(start, delta),
        None => start + delta,
    }
}
