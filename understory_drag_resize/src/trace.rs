// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability hooks for gesture dispatch.
//!
//! [`InteractionHub::process_with_trace`](crate::InteractionHub::process_with_trace)
//! reports every transition it makes to an [`InteractionTrace`]. All methods
//! default to no-ops, so implementors only override what they care about.
//! `()` is the silent trace used by [`InteractionHub::process`](crate::InteractionHub::process).
//!
//! With the `tracing` feature, `TracingTrace` forwards transitions to the
//! `tracing` crate.

use crate::gesture::{Gesture, GestureKind, PanTarget};
use crate::style::Completion;

/// Why an input was dropped without effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The element is not attached to the hub.
    UnknownElement,
    /// The layout source had no snapshot for the element.
    NoLayout,
    /// Resize input on an element that is not focused.
    NotFocused,
    /// The handler for this gesture is disabled or not configured.
    Disabled,
    /// Pinch input on a device that does not bind pinch.
    PinchUnsupported,
    /// Move or end with no matching start.
    NotActive,
}

/// A callback sink for gesture transitions.
pub trait InteractionTrace<K> {
    /// Focus moved from `previous` to `current`.
    fn focus_changed(&mut self, previous: Option<&K>, current: &K) {
        let _ = (previous, current);
    }

    /// A drag started on `element`.
    fn drag_started(&mut self, element: &K) {
        let _ = element;
    }

    /// A resize gesture of `kind` started on `element`.
    fn resize_started(&mut self, element: &K, kind: GestureKind, target: Option<PanTarget>) {
        let _ = (element, kind, target);
    }

    /// An in-flight gesture on `element` was canceled by a conflicting one.
    fn canceled(&mut self, element: &K, by: GestureKind) {
        let _ = (element, by);
    }

    /// A gesture on `element` completed.
    fn completed(&mut self, element: &K, completion: &Completion) {
        let _ = (element, completion);
    }

    /// `gesture` on `element` was dropped.
    fn ignored(&mut self, element: &K, gesture: &Gesture, reason: IgnoreReason) {
        let _ = (element, gesture, reason);
    }
}

impl<K> InteractionTrace<K> for () {}

/// Forwards transitions to `tracing` events.
///
/// Transitions are logged at `debug`, dropped input at `trace`.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingTrace;

#[cfg(feature = "tracing")]
impl<K: core::fmt::Debug> InteractionTrace<K> for TracingTrace {
    fn focus_changed(&mut self, previous: Option<&K>, current: &K) {
        tracing::debug!(?previous, ?current, "focus changed");
    }

    fn drag_started(&mut self, element: &K) {
        tracing::debug!(?element, "drag started");
    }

    fn resize_started(&mut self, element: &K, kind: GestureKind, target: Option<PanTarget>) {
        tracing::debug!(?element, ?kind, ?target, "resize started");
    }

    fn canceled(&mut self, element: &K, by: GestureKind) {
        tracing::debug!(?element, ?by, "gesture canceled");
    }

    fn completed(&mut self, element: &K, completion: &Completion) {
        tracing::debug!(?element, ?completion, "gesture completed");
    }

    fn ignored(&mut self, element: &K, gesture: &Gesture, reason: IgnoreReason) {
        tracing::trace!(?element, ?gesture, ?reason, "input ignored");
    }
}
