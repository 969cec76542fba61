// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture_geometry --heading-base-level=0

//! Understory Gesture Geometry: headless drag and resize math.
//!
//! This crate computes what a dragged or resized element should look like
//! after each pointer event. It focuses on:
//! - The eight resize handles around an element's border ([`Handle`]).
//! - The fixed anchor of a resize gesture and the [`Quadrant`] of the pointer
//!   around it.
//! - New size and translation per move, optionally aspect-locked and clamped
//!   to a container ([`ResizeGeometry`]).
//! - Mirror flips for reversible elements resized past their own anchor
//!   ([`Flip`], [`Rotation`]).
//! - Direction-aware drag clamping ([`DragBounds`]) and pinch-to-zoom
//!   scaling about the element center ([`PinchGeometry`]).
//!
//! It does **not** own any element, event stream or renderer. Callers are
//! expected to:
//! - Capture a [`LayoutSnapshot`] when a gesture starts.
//! - Feed pointer positions (or pinch scales) into the geometry on each move.
//! - Apply the resulting size and translation to their own scene.
//!
//! State machines that drive this geometry from gesture events live in
//! `understory_drag_resize`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_gesture_geometry::{Flip, Handle, LayoutSnapshot, ResizeGeometry, ResizeMode};
//!
//! // A 200x200 element at (100, 100), dragged by its top-left handle.
//! let element = Rect::new(100.0, 100.0, 300.0, 300.0);
//! let resize = ResizeGeometry::begin(
//!     Handle::TopLeft.spec(),
//!     LayoutSnapshot::unbounded(element),
//!     ResizeMode::Free,
//!     Point::new(100.0, 100.0),
//! );
//!
//! // The bottom-right corner stays put.
//! let frame = resize.step(Point::new(50.0, 50.0));
//! assert_eq!(frame.size, Size::new(250.0, 250.0));
//! assert_eq!(frame.bounds(element), Rect::new(50.0, 50.0, 300.0, 300.0));
//!
//! // Past the anchor, the element mirrors on both axes.
//! let frame = resize.step(Point::new(350.0, 350.0));
//! assert_eq!(frame.flip, Flip { x: true, y: true });
//! ```
//!
//! ## Design notes
//!
//! - Coordinates are pixels with y growing downwards.
//! - Snapshots are taken once per gesture; nothing is re-measured mid-gesture.
//! - Handles with a midpoint placement resize a single axis; the other axis
//!   keeps the snapshot dimension.
//!
//! This crate is `no_std`.

#![no_std]

mod drag;
pub mod handle;
mod modes;
mod pinch;
mod quadrant;
pub mod resize;
mod rotation;
mod snapshot;

pub use drag::{DragBounds, drag_target};
pub use handle::{
    AxisPlacement, HANDLE_SIZE, HANDLE_SPECS, Handle, HandleSpec, PlacementParseError,
    ResizeCursor,
};
pub use modes::ResizeMode;
pub use pinch::{PinchFrame, PinchGeometry};
pub use quadrant::{Anchor, Quadrant};
pub use resize::{ResizeFrame, ResizeGeometry};
pub use rotation::{Flip, Rotation};
pub use snapshot::LayoutSnapshot;
