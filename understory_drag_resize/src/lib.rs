// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag_resize --heading-base-level=0

//! Understory Drag Resize: gesture-driven drag and resize for UI elements.
//!
//! This crate turns recognized gestures (tap, pan, pinch) into explicit style
//! patches and completion events for draggable and resizable elements. It
//! builds on the geometry in `understory_gesture_geometry` and adds the state
//! that spans events:
//!
//! - [`drag`]: move an element by panning its body, clamped to a container.
//! - [`resize`]: eight resize handles, optional aspect lock, pinch-to-zoom,
//!   and flip rotation for reversible elements.
//! - [`coordination`]: the focused element, the resize-start conflict
//!   channel and the device class.
//! - [`InteractionHub`]: owns every attached element, queues input and routes
//!   it according to focus and conflict rules.
//! - [`trace`]: optional hooks that explain what the hub did with each input.
//!
//! The crate does not render anything or read layout on its own. Hosts:
//! - Report gestures as [`InputEvent`]s.
//! - Provide [`LayoutSnapshot`](understory_gesture_geometry::LayoutSnapshot)s
//!   through a [`LayoutSource`] when a gesture starts.
//! - Apply [`StyleChange`]s and commit [`Completion`]s from an [`OutputSink`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_drag_resize::{
//!     Completion, DeviceClass, ElementConfig, Gesture, InputEvent, InteractionHub, Output,
//!     PanTarget,
//! };
//! use understory_gesture_geometry::{Handle, LayoutSnapshot};
//!
//! let mut hub = InteractionHub::new(DeviceClass::Desktop);
//! let mut out: Vec<Output<&str>> = Vec::new();
//! hub.attach("card", ElementConfig::draggable_and_resizable(), Size::new(200.0, 200.0), &mut out);
//!
//! let layout = |_: &&str| Some(LayoutSnapshot::unbounded(Rect::new(0.0, 0.0, 200.0, 200.0)));
//! let handle = PanTarget::Handle(Handle::BottomRight);
//! hub.push(InputEvent::new("card", Gesture::Tap));
//! hub.push(InputEvent::new("card", Gesture::PanStart { target: handle, pointer: Point::new(200.0, 200.0) }));
//! hub.push(InputEvent::new(
//!     "card",
//!     Gesture::PanMove { target: handle, pointer: Point::new(250.0, 250.0), delta: (50.0, 50.0).into() },
//! ));
//! hub.push(InputEvent::new("card", Gesture::PanEnd { target: handle }));
//!
//! out.clear();
//! hub.process(&layout, &mut out);
//! let done = out.iter().find_map(|o| match o {
//!     Output::Completed { completion: Completion::Resize(r), .. } => Some(*r),
//!     _ => None,
//! });
//! assert_eq!(done.map(|r| (r.width, r.height)), Some((250.0, 250.0)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo's `std` feature.
//! - `libm`: `no_std` math through Kurbo's `libm` feature.
//! - `tracing`: enables `trace::TracingTrace`, which logs transitions with
//!   the `tracing` crate.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod coordination;
pub mod drag;
mod element;
pub mod gesture;
mod hub;
pub mod resize;
pub mod style;
pub mod trace;

pub use coordination::{
    ConflictChannel, ConflictCursor, ConflictSignal, Coordinator, DeviceClass, FocusStore,
};
pub use drag::{DraggableConfig, DraggableState};
pub use element::{ElementConfig, ElementInteraction};
pub use gesture::{Gesture, GestureKind, InputEvent, PanTarget};
pub use hub::{InteractionHub, LayoutSource};
pub use resize::{HandleResizer, ResizableConfig, ResizableState};
pub use style::{
    Completion, Cursor, DragComplete, Output, OutputSink, Reaction, ResizeComplete, StyleChange,
    StylePatch, StyleTarget,
};
pub use trace::{IgnoreReason, InteractionTrace};
