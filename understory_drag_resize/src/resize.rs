// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize state: eight handle gestures, pinch-to-zoom and flip rotation.
//!
//! ## Usage
//!
//! 1) On attach, apply [`ResizableState::handle_layouts`] to place the eight
//!    handle boxes.
//! 2) Track focus with [`ResizableState::set_focused`]; handles only accept
//!    gestures while the element is focused.
//! 3) Drive handle pans through [`ResizableState::pan_start`],
//!    [`ResizableState::pan_move`] and [`ResizableState::pan_end`], and
//!    pinches through the `pinch_*` counterparts.
//! 4) Commit the [`ResizeComplete`] carried by the final reaction.
//!
//! Each handle tracks its own gesture, including the transient [`Flip`] of
//! that gesture. The committed [`Rotation`] is shared by all handles of the
//! element and persists across gestures; a handle only folds its own flip
//! into it when its gesture ends.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_drag_resize::resize::{ResizableConfig, ResizableState};
//! use understory_drag_resize::{Completion, ResizeComplete};
//! use understory_gesture_geometry::{Handle, LayoutSnapshot};
//!
//! let mut resize = ResizableState::new(ResizableConfig::default());
//! resize.set_focused(true);
//!
//! let snapshot = LayoutSnapshot::unbounded(Rect::new(0.0, 0.0, 200.0, 200.0));
//! assert!(resize.pan_start(Handle::BottomRight, snapshot, Point::new(200.0, 200.0)));
//! resize.pan_move(Handle::BottomRight, Point::new(250.0, 250.0));
//! let done = resize.pan_end(Handle::BottomRight);
//! assert_eq!(
//!     done.completion,
//!     Some(Completion::Resize(ResizeComplete {
//!         left: 0.0,
//!         top: 0.0,
//!         width: 250.0,
//!         height: 250.0,
//!         rotate_x: 0.0,
//!         rotate_y: 0.0,
//!     }))
//! );
//! ```

use kurbo::{Point, Size, Vec2};
use understory_gesture_geometry::{
    Flip, HANDLE_SPECS, Handle, HandleSpec, LayoutSnapshot, PinchFrame, PinchGeometry,
    ResizeFrame, ResizeGeometry, ResizeMode, Rotation,
};

use crate::style::{Completion, Reaction, ResizeComplete, StylePatch, StyleTarget};

/// Configuration of the resize behavior of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizableConfig {
    /// Whether handle and pinch gestures resize the element.
    pub enabled: bool,
    /// Free or aspect-locked resizing.
    pub mode: ResizeMode,
    /// Whether resizing past the anchor flips the element's content.
    pub reversible: bool,
    /// Placement and cursor of each handle, indexed by [`Handle::index`].
    pub handles: [HandleSpec; 8],
}

impl Default for ResizableConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: ResizeMode::Free,
            reversible: false,
            handles: HANDLE_SPECS,
        }
    }
}

impl ResizableConfig {
    /// Replaces the placement of one handle.
    ///
    /// Placements usually come from host styles through
    /// [`AxisPlacement::parse_near`](understory_gesture_geometry::AxisPlacement::parse_near)
    /// and [`AxisPlacement::parse_far`](understory_gesture_geometry::AxisPlacement::parse_far).
    #[must_use]
    pub fn with_handle(mut self, handle: Handle, spec: HandleSpec) -> Self {
        self.handles[handle.index()] = spec;
        self
    }

    /// Placement and cursor of `handle`.
    #[must_use]
    pub fn handle_spec(&self, handle: Handle) -> &HandleSpec {
        &self.handles[handle.index()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ActiveResize {
    geometry: ResizeGeometry,
    frame: Option<ResizeFrame>,
    flip: Flip,
}

/// Gesture state of a single resize handle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandleResizer {
    active: Option<ActiveResize>,
}

impl HandleResizer {
    /// Returns `true` while this handle is being dragged.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.active.is_some()
    }

    /// Geometry of the gesture in progress.
    #[must_use]
    pub fn geometry(&self) -> Option<&ResizeGeometry> {
        self.active.as_ref().map(|a| &a.geometry)
    }

    /// The most recent frame of the gesture in progress.
    #[must_use]
    pub fn last_frame(&self) -> Option<&ResizeFrame> {
        self.active.as_ref().and_then(|a| a.frame.as_ref())
    }

    /// Uncommitted flip of the gesture in progress.
    ///
    /// Always [`Flip::NONE`] unless the element is reversible and this handle
    /// has moved past its anchor.
    #[must_use]
    pub fn flip(&self) -> Flip {
        self.active.map_or(Flip::NONE, |a| a.flip)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ActivePinch {
    geometry: PinchGeometry,
    frame: Option<PinchFrame>,
}

/// Resize state of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizableState {
    config: ResizableConfig,
    focused: bool,
    handles: [HandleResizer; 8],
    rotation: Rotation,
    pinch: Option<ActivePinch>,
}

impl Default for ResizableState {
    fn default() -> Self {
        Self::new(ResizableConfig::default())
    }
}

impl ResizableState {
    /// Creates unfocused, idle resize state.
    #[must_use]
    pub fn new(config: ResizableConfig) -> Self {
        Self {
            config,
            focused: false,
            handles: [HandleResizer::default(); 8],
            rotation: Rotation::default(),
            pinch: None,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> ResizableConfig {
        self.config
    }

    /// Committed flip rotation. Flips of gestures in progress live on their
    /// handles, see [`HandleResizer::flip`].
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Sets the committed rotation, e.g. when restoring a saved element.
    ///
    /// Returns the content patch when the element is reversible.
    pub fn set_rotation(&mut self, x_deg: f64, y_deg: f64) -> Reaction {
        self.rotation = Rotation::new(x_deg, y_deg);
        let mut reaction = Reaction::new();
        self.push_rotation(&mut reaction, self.moving_flip());
        reaction
    }

    /// Returns `true` if the element is focused.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Gesture state of `handle`.
    #[must_use]
    pub fn handle(&self, handle: Handle) -> &HandleResizer {
        &self.handles[handle.index()]
    }

    /// Returns `true` while any handle or pinch gesture is active.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.is_pinching() || self.handles.iter().any(HandleResizer::is_resizing)
    }

    /// Returns `true` while a pinch gesture is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Returns `true` if `handle` currently accepts gestures.
    ///
    /// Requires resizing to be enabled and the element to be focused. With
    /// aspect lock on, only the four corner handles are usable.
    #[must_use]
    pub fn handle_enabled(&self, handle: Handle) -> bool {
        self.config.enabled && self.focused && !(self.config.mode.is_locked() && handle.is_edge())
    }

    /// Returns `true` if a pinch may start now.
    #[must_use]
    pub fn pinch_enabled(&self) -> bool {
        self.config.enabled && self.focused
    }

    /// Layout of all handle boxes for an element of `size`, plus their
    /// initial visibility.
    #[must_use]
    pub fn handle_layouts(&self, size: Size) -> Reaction {
        let mut reaction = Reaction::new();
        for handle in Handle::ALL {
            let spec = self.config.handle_spec(handle);
            reaction.push(
                StyleTarget::Handle(handle),
                StylePatch::HandleLayout {
                    rect: spec.layout(size),
                    cursor: spec.cursor,
                },
            );
        }
        self.push_edge_visibility(&mut reaction);
        reaction.push(StyleTarget::Handles, StylePatch::Visible(self.focused));
        reaction
    }

    /// Updates focus; handles are shown only while focused.
    ///
    /// Losing focus cancels gestures in flight.
    pub fn set_focused(&mut self, focused: bool) -> Reaction {
        if self.focused == focused {
            return Reaction::new();
        }
        self.focused = focused;
        let mut reaction = Reaction::new();
        if !focused {
            reaction.append(self.cancel());
        }
        reaction.push(StyleTarget::Handles, StylePatch::Visible(focused));
        reaction
    }

    /// Enables or disables resizing. Disabling cancels gestures in flight.
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

    /// Switches between free and aspect-locked resizing.
    ///
    /// Edge handles are hidden while locked; locking cancels their gestures.
    pub fn set_mode(&mut self, mode: ResizeMode) -> Reaction {
        if self.config.mode == mode {
            return Reaction::new();
        }
        self.config.mode = mode;
        let mut reaction = Reaction::new();
        if mode.is_locked() {
            for handle in Handle::ALL.into_iter().filter(|h| h.is_edge()) {
                reaction.append(self.cancel_handle(handle));
            }
        }
        self.push_edge_visibility(&mut reaction);
        reaction
    }

    /// Turns content flipping on or off.
    ///
    /// Turning it on shows the committed rotation right away; turning it off
    /// resets the content to `0deg`. Gestures in flight keep running but only
    /// flip while reversible.
    pub fn set_reversible(&mut self, reversible: bool) -> Reaction {
        if self.config.reversible == reversible {
            return Reaction::new();
        }
        self.config.reversible = reversible;
        if reversible {
            let mut reaction = Reaction::new();
            self.push_rotation(&mut reaction, self.moving_flip());
            reaction
        } else {
            for resizer in &mut self.handles {
                if let Some(active) = resizer.active.as_mut() {
                    active.flip = Flip::NONE;
                }
            }
            Reaction::new().with(
                StyleTarget::Content,
                StylePatch::ContentRotation {
                    x_deg: 0.0,
                    y_deg: 0.0,
                },
            )
        }
    }

    /// Starts a resize on `handle`. Returns `false` if the handle is not
    /// enabled.
    pub fn pan_start(&mut self, handle: Handle, snapshot: LayoutSnapshot, pointer: Point) -> bool {
        if !self.handle_enabled(handle) {
            return false;
        }
        let geometry = ResizeGeometry::begin(
            self.config.handle_spec(handle),
            snapshot,
            self.config.mode,
            pointer,
        );
        self.handles[handle.index()].active = Some(ActiveResize {
            geometry,
            frame: None,
            flip: Flip::NONE,
        });
        true
    }

    /// Resizes toward `pointer`.
    pub fn pan_move(&mut self, handle: Handle, pointer: Point) -> Reaction {
        let Some(active) = self.handles[handle.index()].active.as_mut() else {
            return Reaction::new();
        };
        let frame = active.geometry.step(pointer);
        active.frame = Some(frame);
        active.flip = if self.config.reversible {
            frame.flip
        } else {
            Flip::NONE
        };
        let flip = active.flip;

        let mut reaction = size_patches(frame.size, frame.delta);
        self.push_rotation(&mut reaction, flip);
        reaction
    }

    /// Ends the resize on `handle`, committing its flip and emitting the
    /// completion. A gesture that never moved emits nothing.
    pub fn pan_end(&mut self, handle: Handle) -> Reaction {
        let Some(active) = self.handles[handle.index()].active.take() else {
            return Reaction::new();
        };
        let Some(frame) = active.frame else {
            return Reaction::new();
        };
        self.rotation.flip = active.flip;
        self.rotation.commit();
        let offset = frame.position(active.geometry.snapshot().offset);
        self.complete(offset, frame.size)
    }

    /// Abandons every handle gesture in flight, reverting transient styles.
    pub fn cancel_pan(&mut self) -> Reaction {
        let mut reaction = Reaction::new();
        for handle in Handle::ALL {
            reaction.append(self.cancel_handle(handle));
        }
        reaction
    }

    fn cancel_handle(&mut self, handle: Handle) -> Reaction {
        let Some(active) = self.handles[handle.index()].active.take() else {
            return Reaction::new();
        };
        if active.frame.is_none() {
            return Reaction::new();
        }
        let mut reaction = size_patches(active.geometry.snapshot().element.size(), Vec2::ZERO);
        self.push_rotation(&mut reaction, self.moving_flip());
        reaction
    }

    /// Flip of the first handle gesture still showing one.
    fn moving_flip(&self) -> Flip {
        self.handles
            .iter()
            .map(HandleResizer::flip)
            .find(|flip| flip.any())
            .unwrap_or(Flip::NONE)
    }

    /// Starts a pinch resize. Returns `false` unless focused and enabled.
    pub fn pinch_start(&mut self, snapshot: LayoutSnapshot) -> bool {
        if !self.pinch_enabled() {
            return false;
        }
        self.pinch = Some(ActivePinch {
            geometry: PinchGeometry::begin(snapshot),
            frame: None,
        });
        true
    }

    /// Scales the element about its center. The flip rotation is untouched.
    pub fn pinch_move(&mut self, scale: f64) -> Reaction {
        let Some(pinch) = self.pinch.as_mut() else {
            return Reaction::new();
        };
        let frame = pinch.geometry.step(scale);
        pinch.frame = Some(frame);
        size_patches(frame.size, frame.delta)
    }

    /// Ends the pinch, emitting the completion if it moved.
    pub fn pinch_end(&mut self) -> Reaction {
        let Some(ActivePinch {
            geometry,
            frame: Some(frame),
        }) = self.pinch.take()
        else {
            return Reaction::new();
        };
        let offset = frame.position(geometry.snapshot().offset);
        self.complete(offset, frame.size)
    }

    /// Abandons a pinch in flight, reverting transient styles.
    pub fn cancel_pinch(&mut self) -> Reaction {
        match self.pinch.take() {
            Some(ActivePinch {
                geometry,
                frame: Some(_),
            }) => size_patches(geometry.snapshot().element.size(), Vec2::ZERO),
            _ => Reaction::new(),
        }
    }

    /// Abandons all gestures in flight.
    pub fn cancel(&mut self) -> Reaction {
        let mut reaction = self.cancel_pan();
        reaction.append(self.cancel_pinch());
        reaction
    }

    fn complete(&self, offset: Point, size: Size) -> Reaction {
        let mut reaction =
            Reaction::new().with(StyleTarget::Element, StylePatch::Translate(Vec2::ZERO));
        reaction.completion = Some(Completion::Resize(ResizeComplete {
            left: offset.x,
            top: offset.y,
            width: size.width,
            height: size.height,
            rotate_x: self.rotation.x_deg,
            rotate_y: self.rotation.y_deg,
        }));
        reaction
    }

    fn push_rotation(&self, reaction: &mut Reaction, flip: Flip) {
        if self.config.reversible {
            let (x_deg, y_deg) = Rotation { flip, ..self.rotation }.display_degrees();
            reaction.push(
                StyleTarget::Content,
                StylePatch::ContentRotation { x_deg, y_deg },
            );
        }
    }

    fn push_edge_visibility(&self, reaction: &mut Reaction) {
        let visible = !self.config.mode.is_locked();
        for handle in Handle::ALL.into_iter().filter(|h| h.is_edge()) {
            reaction.push(StyleTarget::Handle(handle), StylePatch::Visible(visible));
        }
    }
}

fn size_patches(size: Size, delta: Vec2) -> Reaction {
    Reaction::new()
        .with(StyleTarget::Element, StylePatch::Width(size.width))
        .with(StyleTarget::Element, StylePatch::Height(size.height))
        .with(StyleTarget::Element, StylePatch::Translate(delta))
}
