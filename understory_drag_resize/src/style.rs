// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style patches and completion events produced by the state machines.
//!
//! The engine never touches a scene directly. Every visual change is an
//! explicit [`StylePatch`] addressed to a [`StyleTarget`]; hosts apply them
//! through whatever scoped style mutation their toolkit offers. DOM-backed
//! hosts can use the [`Display`](core::fmt::Display) impl, which renders CSS
//! declarations.

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Rect, Vec2};
use smallvec::SmallVec;
use understory_gesture_geometry::{Handle, ResizeCursor};

/// Which part of an interactive element a patch applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleTarget {
    /// The element itself.
    Element,
    /// The element's first child, which carries the flip rotation of
    /// reversible elements.
    Content,
    /// The container holding all eight handles.
    Handles,
    /// A single resize handle.
    Handle(Handle),
}

/// Pointer cursor for the element body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Draggable, idle.
    Grab,
    /// Draggable, dragging.
    Grabbing,
    /// Resize handle cursor.
    Resize(ResizeCursor),
}

impl Cursor {
    /// CSS `cursor` keyword.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::Resize(cursor) => cursor.as_css(),
        }
    }
}

/// One enumerated style mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StylePatch {
    /// Set the width in pixels.
    Width(f64),
    /// Set the height in pixels.
    Height(f64),
    /// Set a transient translation relative to the committed offset.
    Translate(Vec2),
    /// Set the flip rotation in degrees.
    ContentRotation {
        /// `rotateX` degrees.
        x_deg: f64,
        /// `rotateY` degrees.
        y_deg: f64,
    },
    /// Set the pointer cursor.
    Cursor(Cursor),
    /// Show or hide.
    Visible(bool),
    /// Position and style a handle box in element-local coordinates.
    HandleLayout {
        /// Handle box.
        rect: Rect,
        /// Cursor shown over the handle.
        cursor: ResizeCursor,
    },
}

impl fmt::Display for StylePatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Width(w) => write!(f, "width: {w}px"),
            Self::Height(h) => write!(f, "height: {h}px"),
            Self::Translate(v) => write!(f, "transform: translate({}px, {}px)", v.x, v.y),
            Self::ContentRotation { x_deg, y_deg } => {
                write!(f, "transform: rotateX({x_deg}deg) rotateY({y_deg}deg)")
            }
            Self::Cursor(cursor) => write!(f, "cursor: {}", cursor.as_css()),
            Self::Visible(visible) => {
                let value = if visible { "visible" } else { "hidden" };
                write!(f, "visibility: {value}")
            }
            Self::HandleLayout { rect, cursor } => write!(
                f,
                "left: {}px; top: {}px; width: {}px; height: {}px; cursor: {}",
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height(),
                cursor.as_css()
            ),
        }
    }
}

/// A patch and its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleChange {
    /// Part of the element to patch.
    pub target: StyleTarget,
    /// The patch.
    pub patch: StylePatch,
}

/// Final offset of a completed drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragComplete {
    /// New `left` offset.
    pub left: f64,
    /// New `top` offset.
    pub top: f64,
}

/// Final geometry of a completed resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeComplete {
    /// New `left` offset.
    pub left: f64,
    /// New `top` offset.
    pub top: f64,
    /// New width.
    pub width: f64,
    /// New height.
    pub height: f64,
    /// Committed `rotateX` degrees (`0` or `180`).
    pub rotate_x: f64,
    /// Committed `rotateY` degrees (`0` or `180`).
    pub rotate_y: f64,
}

/// Completion event for the host to commit.
///
/// During a gesture only transient styles change; the host is expected to
/// commit the final `left` / `top` (and size) when it receives one of these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Completion {
    /// A drag finished.
    Drag(DragComplete),
    /// A pan or pinch resize finished.
    Resize(ResizeComplete),
}

/// Everything a state machine wants done in response to one input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reaction {
    /// Style changes, in application order.
    pub changes: SmallVec<[StyleChange; 4]>,
    /// Completion event, if the input finished a gesture.
    pub completion: Option<Completion>,
}

impl Reaction {
    /// An empty reaction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a style change.
    pub fn push(&mut self, target: StyleTarget, patch: StylePatch) {
        self.changes.push(StyleChange { target, patch });
    }

    /// Builder form of [`Reaction::push`].
    #[must_use]
    pub fn with(mut self, target: StyleTarget, patch: StylePatch) -> Self {
        self.push(target, patch);
        self
    }

    /// Appends all of `other`; a completion in `other` replaces ours.
    pub fn append(&mut self, other: Self) {
        self.changes.extend(other.changes);
        if other.completion.is_some() {
            self.completion = other.completion;
        }
    }

    /// Returns `true` if there is nothing to apply.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.completion.is_none()
    }

    /// Sends this reaction to `sink` on behalf of `element`.
    pub fn emit<K>(self, element: &K, sink: &mut impl OutputSink<K>) {
        for change in self.changes {
            sink.style(element, change);
        }
        if let Some(completion) = self.completion {
            sink.completed(element, completion);
        }
    }
}

/// Receiver for engine output.
pub trait OutputSink<K> {
    /// Apply a style change to `element`.
    fn style(&mut self, element: &K, change: StyleChange);

    /// Deliver a completion event for `element`.
    fn completed(&mut self, element: &K, completion: Completion);
}

/// Owned output record, for hosts that prefer to collect and apply later.
#[derive(Clone, Debug, PartialEq)]
pub enum Output<K> {
    /// A style change.
    Style {
        /// Target element.
        element: K,
        /// The change.
        change: StyleChange,
    },
    /// A completion event.
    Completed {
        /// Target element.
        element: K,
        /// The event.
        completion: Completion,
    },
}

impl<K: Clone> OutputSink<K> for Vec<Output<K>> {
    fn style(&mut self, element: &K, change: StyleChange) {
        self.push(Output::Style {
            element: element.clone(),
            change,
        });
    }

    fn completed(&mut self, element: &K, completion: Completion) {
        self.push(Output::Completed {
            element: element.clone(),
            completion,
        });
    }
}
