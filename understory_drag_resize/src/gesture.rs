// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete gesture input.
//!
//! A gesture recognizer (touch library, pointer state machine, test script)
//! reports each pan or pinch as a start / move / end sequence. Events are
//! assumed to arrive in chronological order per pointer session.

use kurbo::{Point, Vec2};
use understory_gesture_geometry::Handle;

/// Kind of a resize gesture, as broadcast to conflicting handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// One-pointer pan on a resize handle.
    Pan,
    /// Two-finger pinch on the element.
    Pinch,
}

/// What a pan gesture was recognized on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanTarget {
    /// The element itself: drags it.
    Body,
    /// One of the element's resize handles.
    Handle(Handle),
}

/// One recognized gesture event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Single tap; focuses the element.
    Tap,
    /// Pan recognized.
    PanStart {
        /// Element or handle the pan started on.
        target: PanTarget,
        /// Pointer position.
        pointer: Point,
    },
    /// Pan moved.
    PanMove {
        /// Element or handle the pan started on.
        target: PanTarget,
        /// Pointer position.
        pointer: Point,
        /// Cumulative movement since `PanStart`.
        delta: Vec2,
    },
    /// Pan released.
    PanEnd {
        /// Element or handle the pan started on.
        target: PanTarget,
    },
    /// Pinch recognized.
    PinchStart,
    /// Pinch moved.
    PinchMove {
        /// Cumulative scale relative to `PinchStart`.
        scale: f64,
    },
    /// Pinch released.
    PinchEnd,
}

impl Gesture {
    /// Returns `true` for events that need a fresh layout snapshot.
    #[must_use]
    pub fn needs_layout(&self) -> bool {
        matches!(self, Self::PanStart { .. } | Self::PinchStart)
    }
}

/// A gesture addressed to an element.
#[derive(Clone, Debug, PartialEq)]
pub struct InputEvent<K> {
    /// Element the gesture was recognized on.
    pub element: K,
    /// The gesture.
    pub gesture: Gesture,
}

impl<K> InputEvent<K> {
    /// Creates an event.
    pub fn new(element: K, gesture: Gesture) -> Self {
        Self { element, gesture }
    }
}
