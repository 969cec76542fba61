// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state: move an element by panning its body.
//!
//! ## Usage
//!
//! 1) Start a drag by calling [`DraggableState::pan_start`] with a
//!    [`LayoutSnapshot`] of the element.
//! 2) On each move, call [`DraggableState::pan_move`] with the cumulative
//!    pan delta and apply the returned translation.
//! 3) End with [`DraggableState::pan_end`]; if the element moved, the
//!    reaction carries a [`DragComplete`] for the host to commit.
//! 4) If a resize starts on the same element, call [`DraggableState::cancel`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Rect, Vec2};
//! use understory_drag_resize::drag::DraggableState;
//! use understory_drag_resize::{Completion, DragComplete};
//! use understory_gesture_geometry::LayoutSnapshot;
//!
//! let mut drag = DraggableState::default();
//! let snapshot = LayoutSnapshot::unbounded(Rect::new(10.0, 20.0, 60.0, 70.0));
//!
//! drag.pan_start(&snapshot);
//! assert!(drag.is_dragging());
//!
//! drag.pan_move(Vec2::new(5.0, 5.0));
//! let done = drag.pan_end();
//! assert_eq!(
//!     done.completion,
//!     Some(Completion::Drag(DragComplete { left: 15.0, top: 25.0 }))
//! );
//! ```

use kurbo::{Point, Vec2};
use understory_gesture_geometry::{DragBounds, LayoutSnapshot, drag_target};

use crate::style::{Completion, Cursor, DragComplete, Reaction, StylePatch, StyleTarget};

/// Configuration of the drag behavior of one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DraggableConfig {
    /// Whether pans on the body drag the element.
    pub enabled: bool,
}

impl Default for DraggableConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ActiveDrag {
    start: Point,
    bounds: Option<DragBounds>,
    target: Option<Point>,
}

/// Tracks one element's drag gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DraggableState {
    config: DraggableConfig,
    active: Option<ActiveDrag>,
}

impl DraggableState {
    /// Creates idle drag state.
    #[must_use]
    pub fn new(config: DraggableConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> DraggableConfig {
        self.config
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Enables or disables dragging. Disabling mid-drag cancels it.
    pub fn set_enabled(&mut self, enabled: bool) -> Reaction {
        if self.config.enabled == enabled {
            return Reaction::new();
        }
        self.config.enabled = enabled;
        if enabled {
            Reaction::new()
        } else {
            self.cancel()
        }
    }

    /// Starts a drag from the snapshot's committed offset.
    ///
    /// Limits are only computed when the snapshot has a container. Ignored
    /// (empty reaction) while disabled.
    pub fn pan_start(&mut self, snapshot: &LayoutSnapshot) -> Reaction {
        if !self.config.enabled {
            return Reaction::new();
        }
        self.active = Some(ActiveDrag {
            start: snapshot.offset,
            bounds: snapshot
                .container
                .map(|container| DragBounds::new(snapshot.element, container)),
            target: None,
        });
        Reaction::new().with(StyleTarget::Element, StylePatch::Cursor(Cursor::Grabbing))
    }

    /// Moves the element by the cumulative pan `delta`.
    pub fn pan_move(&mut self, delta: Vec2) -> Reaction {
        let Some(active) = self.active.as_mut() else {
            return Reaction::new();
        };
        let target = drag_target(active.start, delta, active.bounds.as_ref());
        active.target = Some(target);
        Reaction::new().with(
            StyleTarget::Element,
            StylePatch::Translate(target - active.start),
        )
    }

    /// Ends the drag. Only a drag that actually moved completes.
    pub fn pan_end(&mut self) -> Reaction {
        let Some(active) = self.active.take() else {
            return Reaction::new();
        };
        let mut reaction = reset();
        reaction.completion = active.target.map(|target| {
            Completion::Drag(DragComplete {
                left: target.x,
                top: target.y,
            })
        });
        reaction
    }

    /// Abandons an active drag without completing it.
    pub fn cancel(&mut self) -> Reaction {
        if self.active.take().is_none() {
            return Reaction::new();
        }
        reset()
    }
}

fn reset() -> Reaction {
    Reaction::new()
        .with(StyleTarget::Element, StylePatch::Translate(Vec2::ZERO))
        .with(StyleTarget::Element, StylePatch::Cursor(Cursor::Grab))
}
