// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element registry, input queue and gesture routing.
//!
//! ## Usage
//!
//! 1) Create an [`InteractionHub`] for the session's [`DeviceClass`].
//! 2) [`attach`](InteractionHub::attach) each interactive element with its
//!    [`ElementConfig`] and apply the emitted handle layout.
//! 3) [`push`](InteractionHub::push) recognized gestures as they arrive, then
//!    [`process`](InteractionHub::process) the queue with a [`LayoutSource`]
//!    for snapshots and an [`OutputSink`] for style changes and completions.
//! 4) [`detach`](InteractionHub::detach) elements when their view goes away.
//!
//! Routing rules:
//! - A tap or a body pan focuses the element.
//! - Handle pans and pinches only start on the focused element.
//! - Starting a resize cancels any drag of the same element, and pan and
//!   pinch resizes of the same element preempt each other.

use alloc::collections::VecDeque;
use core::hash::{BuildHasher, Hash};

use hashbrown::HashMap;
use kurbo::Size;
use understory_gesture_geometry::LayoutSnapshot;

use crate::coordination::{ConflictSignal, Coordinator, DeviceClass};
use crate::element::{ElementConfig, ElementInteraction};
use crate::gesture::{Gesture, GestureKind, InputEvent, PanTarget};
use crate::resize::ResizableState;
use crate::style::{Cursor, OutputSink, Reaction, StylePatch, StyleTarget};
use crate::trace::{IgnoreReason, InteractionTrace};

/// Host-provided layout measurements.
pub trait LayoutSource<K> {
    /// Measures `element` now. `None` if it has no layout.
    fn snapshot(&self, element: &K) -> Option<LayoutSnapshot>;
}

impl<K, F> LayoutSource<K> for F
where
    F: Fn(&K) -> Option<LayoutSnapshot>,
{
    fn snapshot(&self, element: &K) -> Option<LayoutSnapshot> {
        self(element)
    }
}

impl<K, S> LayoutSource<K> for HashMap<K, LayoutSnapshot, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn snapshot(&self, element: &K) -> Option<LayoutSnapshot> {
        self.get(element).copied()
    }
}

/// Owner of all interactive elements of one session.
#[derive(Clone, Debug)]
pub struct InteractionHub<K> {
    elements: HashMap<K, ElementInteraction>,
    queue: VecDeque<InputEvent<K>>,
    coordinator: Coordinator<K>,
}

impl<K: Clone + Eq + Hash> InteractionHub<K> {
    /// Creates an empty hub.
    #[must_use]
    pub fn new(device: DeviceClass) -> Self {
        Self {
            elements: HashMap::new(),
            queue: VecDeque::new(),
            coordinator: Coordinator::new(device),
        }
    }

    /// Shared coordination state.
    #[must_use]
    pub fn coordinator(&self) -> &Coordinator<K> {
        &self.coordinator
    }

    /// The focused element, if any.
    #[must_use]
    pub fn focused(&self) -> Option<&K> {
        self.coordinator.focus.focused()
    }

    /// Number of attached elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no element is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// State of an attached element.
    #[must_use]
    pub fn element(&self, key: &K) -> Option<&ElementInteraction> {
        self.elements.get(key)
    }

    /// Mutable state of an attached element.
    ///
    /// Reactions returned by its setters are not routed; emit them yourself.
    pub fn element_mut(&mut self, key: &K) -> Option<&mut ElementInteraction> {
        self.elements.get_mut(key)
    }

    /// Attaches an element of `size`, replacing any previous state for `key`.
    ///
    /// Emits the handle layout and initial visibility for resizable
    /// elements and the idle cursor for draggable ones.
    pub fn attach(
        &mut self,
        key: K,
        config: ElementConfig,
        size: Size,
        sink: &mut impl OutputSink<K>,
    ) {
        let _ = self.detach(&key);
        let element = ElementInteraction::new(config, self.coordinator.conflicts.subscribe());
        let mut reaction = Reaction::new();
        if let Some(resize) = &element.resize {
            reaction.append(resize.handle_layouts(size));
        }
        if element.drag.is_some() {
            reaction.push(StyleTarget::Element, StylePatch::Cursor(Cursor::Grab));
        }
        reaction.emit(&key, sink);
        self.elements.insert(key, element);
    }

    /// Detaches an element, dropping any gesture in flight. Clears focus if
    /// it was focused.
    pub fn detach(&mut self, key: &K) -> Option<ElementInteraction> {
        let element = self.elements.remove(key)?;
        if self.coordinator.focus.is_focused(key) {
            self.coordinator.focus.clear();
        }
        Some(element)
    }

    /// Moves focus to `key`, updating handle visibility on both elements.
    pub fn focus(&mut self, key: K, sink: &mut impl OutputSink<K>) {
        self.focus_with_trace(key, sink, &mut ());
    }

    /// Clears focus, hiding the previously focused element's handles.
    pub fn clear_focus(&mut self, sink: &mut impl OutputSink<K>) {
        let Some(previous) = self.coordinator.focus.focused().cloned() else {
            return;
        };
        self.coordinator.focus.clear();
        self.set_element_focus(&previous, false, sink);
    }

    /// Queues an input event.
    pub fn push(&mut self, event: InputEvent<K>) {
        self.queue.push_back(event);
    }

    /// Number of queued events.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Dispatches all queued events in arrival order.
    pub fn process(&mut self, layout: &impl LayoutSource<K>, sink: &mut impl OutputSink<K>) {
        self.process_with_trace(layout, sink, &mut ());
    }

    /// Like [`InteractionHub::process`], reporting transitions to `trace`.
    pub fn process_with_trace(
        &mut self,
        layout: &impl LayoutSource<K>,
        sink: &mut impl OutputSink<K>,
        trace: &mut impl InteractionTrace<K>,
    ) {
        while let Some(event) = self.queue.pop_front() {
            self.dispatch_with_trace(event, layout, sink, trace);
        }
    }

    /// Handles one event immediately, bypassing the queue.
    pub fn dispatch(
        &mut self,
        event: InputEvent<K>,
        layout: &impl LayoutSource<K>,
        sink: &mut impl OutputSink<K>,
    ) {
        self.dispatch_with_trace(event, layout, sink, &mut ());
    }

    /// Like [`InteractionHub::dispatch`], reporting transitions to `trace`.
    pub fn dispatch_with_trace(
        &mut self,
        event: InputEvent<K>,
        layout: &impl LayoutSource<K>,
        sink: &mut impl OutputSink<K>,
        trace: &mut impl InteractionTrace<K>,
    ) {
        let InputEvent { element: key, gesture } = event;
        if !self.elements.contains_key(&key) {
            trace.ignored(&key, &gesture, IgnoreReason::UnknownElement);
            return;
        }
        if matches!(
            gesture,
            Gesture::Tap
                | Gesture::PanStart {
                    target: PanTarget::Body,
                    ..
                }
        ) {
            self.focus_with_trace(key.clone(), sink, trace);
        }
        let snapshot = if gesture.needs_layout() {
            match layout.snapshot(&key) {
                Some(snapshot) => Some(snapshot),
                None => {
                    trace.ignored(&key, &gesture, IgnoreReason::NoLayout);
                    return;
                }
            }
        } else {
            None
        };

        let outcome = match (gesture, snapshot) {
            (Gesture::Tap, _) => return,
            (
                Gesture::PanStart {
                    target: PanTarget::Body,
                    ..
                },
                Some(snapshot),
            ) => self.start_drag(&key, &snapshot, trace),
            (
                Gesture::PanStart {
                    target: PanTarget::Handle(handle),
                    pointer,
                },
                Some(snapshot),
            ) => {
                let started = self
                    .resize_mut(&key)
                    .is_some_and(|r| r.pan_start(handle, snapshot, pointer));
                if started {
                    trace.resize_started(&key, GestureKind::Pan, Some(PanTarget::Handle(handle)));
                    self.publish_conflict(&key, GestureKind::Pan, sink, trace);
                    Ok(Reaction::new())
                } else {
                    Err(self.rejection(&key))
                }
            }
            (Gesture::PinchStart, Some(_)) if !self.coordinator.device.supports_pinch() => {
                Err(IgnoreReason::PinchUnsupported)
            }
            (Gesture::PinchStart, Some(snapshot)) => {
                let started = self
                    .resize_mut(&key)
                    .is_some_and(|r| r.pinch_start(snapshot));
                if started {
                    trace.resize_started(&key, GestureKind::Pinch, None);
                    self.publish_conflict(&key, GestureKind::Pinch, sink, trace);
                    Ok(Reaction::new())
                } else {
                    Err(self.rejection(&key))
                }
            }
            (Gesture::PanStart { .. } | Gesture::PinchStart, None) => return,
            (gesture, _) => self.continue_gesture(&key, gesture),
        };

        match outcome {
            Ok(reaction) => {
                if let Some(completion) = &reaction.completion {
                    trace.completed(&key, completion);
                }
                reaction.emit(&key, sink);
            }
            Err(reason) => trace.ignored(&key, &gesture, reason),
        }
    }

    fn resize_mut(&mut self, key: &K) -> Option<&mut ResizableState> {
        self.elements.get_mut(key).and_then(|e| e.resize.as_mut())
    }

    /// Why a resize start on `key` was refused.
    fn rejection(&self, key: &K) -> IgnoreReason {
        if self.coordinator.focus.is_focused(key) {
            IgnoreReason::Disabled
        } else {
            IgnoreReason::NotFocused
        }
    }

    fn start_drag(
        &mut self,
        key: &K,
        snapshot: &LayoutSnapshot,
        trace: &mut impl InteractionTrace<K>,
    ) -> Result<Reaction, IgnoreReason> {
        let drag = self
            .elements
            .get_mut(key)
            .and_then(|e| e.drag.as_mut())
            .filter(|d| d.config().enabled)
            .ok_or(IgnoreReason::Disabled)?;
        let reaction = drag.pan_start(snapshot);
        trace.drag_started(key);
        Ok(reaction)
    }

    /// Move and end events for gestures already in flight.
    fn continue_gesture(&mut self, key: &K, gesture: Gesture) -> Result<Reaction, IgnoreReason> {
        let element = self
            .elements
            .get_mut(key)
            .ok_or(IgnoreReason::UnknownElement)?;
        let reaction = match gesture {
            Gesture::PanMove {
                target: PanTarget::Body,
                delta,
                ..
            } => element.drag.as_mut().map(|d| d.pan_move(delta)),
            Gesture::PanEnd {
                target: PanTarget::Body,
            } => element.drag.as_mut().map(|d| d.pan_end()),
            Gesture::PanMove {
                target: PanTarget::Handle(handle),
                pointer,
                ..
            } => element.resize.as_mut().map(|r| r.pan_move(handle, pointer)),
            Gesture::PanEnd {
                target: PanTarget::Handle(handle),
            } => element.resize.as_mut().map(|r| r.pan_end(handle)),
            Gesture::PinchMove { scale } => element.resize.as_mut().map(|r| r.pinch_move(scale)),
            Gesture::PinchEnd => element.resize.as_mut().map(ResizableState::pinch_end),
            Gesture::Tap | Gesture::PanStart { .. } | Gesture::PinchStart => None,
        };
        reaction
            .filter(|r| !r.is_empty())
            .ok_or(IgnoreReason::NotActive)
    }

    fn publish_conflict(
        &mut self,
        source: &K,
        kind: GestureKind,
        sink: &mut impl OutputSink<K>,
        trace: &mut impl InteractionTrace<K>,
    ) {
        self.coordinator.conflicts.publish(ConflictSignal {
            source: source.clone(),
            kind,
        });
        let conflicts = &self.coordinator.conflicts;
        for (key, element) in &mut self.elements {
            for signal in conflicts.poll(&mut element.conflicts) {
                if signal.source != *key {
                    continue;
                }
                let mut reaction = element.drag.as_mut().map(|d| d.cancel()).unwrap_or_default();
                if let Some(resize) = element.resize.as_mut() {
                    reaction.append(match signal.kind {
                        GestureKind::Pan => resize.cancel_pinch(),
                        GestureKind::Pinch => resize.cancel_pan(),
                    });
                }
                if !reaction.is_empty() {
                    trace.canceled(key, signal.kind);
                    reaction.emit(key, sink);
                }
            }
        }
    }

    fn focus_with_trace(
        &mut self,
        key: K,
        sink: &mut impl OutputSink<K>,
        trace: &mut impl InteractionTrace<K>,
    ) {
        let previous = self.coordinator.focus.focused().cloned();
        if !self.coordinator.focus.set_focus(key.clone()) {
            return;
        }
        trace.focus_changed(previous.as_ref(), &key);
        if let Some(previous) = previous {
            self.set_element_focus(&previous, false, sink);
        }
        self.set_element_focus(&key, true, sink);
    }

    fn set_element_focus(&mut self, key: &K, focused: bool, sink: &mut impl OutputSink<K>) {
        if let Some(resize) = self.resize_mut(key) {
            resize.set_focused(focused).emit(key, sink);
        }
    }
}
