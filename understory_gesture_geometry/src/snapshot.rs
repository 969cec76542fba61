// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Layout captured once when a gesture starts.
///
/// All per-move geometry is computed against this snapshot and never against
/// live layout, so style changes applied during the gesture cannot feed back
/// into it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSnapshot {
    /// Element bounding box in the pointer's coordinate space.
    pub element: Rect,
    /// Bounding container in the same space. `None` means unbounded.
    pub container: Option<Rect>,
    /// Committed `left` / `top` style offset of the element.
    pub offset: Point,
}

impl LayoutSnapshot {
    /// Snapshot of an unbounded element whose style offset matches its origin.
    #[must_use]
    pub fn unbounded(element: Rect) -> Self {
        Self {
            element,
            container: None,
            offset: element.origin(),
        }
    }

    /// Returns a copy bounded by `container`.
    #[must_use]
    pub fn with_container(mut self, container: Rect) -> Self {
        self.container = Some(container);
        self
    }

    /// Returns a copy with a different committed style offset.
    #[must_use]
    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    /// Clamps `point` into the container, if there is one.
    #[must_use]
    pub fn clamp_point(&self, point: Point) -> Point {
        match self.container {
            Some(c) => Point::new(
                point.x.max(c.x0).min(c.x1),
                point.y.max(c.y0).min(c.y1),
            ),
            None => point,
        }
    }
}
