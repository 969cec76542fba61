// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element interaction state.

use crate::coordination::ConflictCursor;
use crate::drag::{DraggableConfig, DraggableState};
use crate::resize::{ResizableConfig, ResizableState};

/// Which behaviors an element has. `None` leaves a behavior unbound.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementConfig {
    /// Drag behavior.
    pub draggable: Option<DraggableConfig>,
    /// Resize behavior.
    pub resizable: Option<ResizableConfig>,
}

impl ElementConfig {
    /// Draggable only, with default settings.
    #[must_use]
    pub fn draggable() -> Self {
        Self {
            draggable: Some(DraggableConfig::default()),
            resizable: None,
        }
    }

    /// Resizable only, with default settings.
    #[must_use]
    pub fn resizable() -> Self {
        Self {
            draggable: None,
            resizable: Some(ResizableConfig::default()),
        }
    }

    /// Both draggable and resizable, with default settings.
    #[must_use]
    pub fn draggable_and_resizable() -> Self {
        Self {
            draggable: Some(DraggableConfig::default()),
            resizable: Some(ResizableConfig::default()),
        }
    }

    /// Returns a copy with the given resize configuration.
    #[must_use]
    pub fn with_resizable(mut self, config: ResizableConfig) -> Self {
        self.resizable = Some(config);
        self
    }

    /// Returns a copy with the given drag configuration.
    #[must_use]
    pub fn with_draggable(mut self, config: DraggableConfig) -> Self {
        self.draggable = Some(config);
        self
    }
}

/// Drag and resize state of one attached element.
#[derive(Clone, Debug)]
pub struct ElementInteraction {
    pub(crate) drag: Option<DraggableState>,
    pub(crate) resize: Option<ResizableState>,
    pub(crate) conflicts: ConflictCursor,
}

impl ElementInteraction {
    pub(crate) fn new(config: ElementConfig, conflicts: ConflictCursor) -> Self {
        Self {
            drag: config.draggable.map(DraggableState::new),
            resize: config.resizable.map(ResizableState::new),
            conflicts,
        }
    }

    /// Drag state, if the element is draggable.
    #[must_use]
    pub fn drag(&self) -> Option<&DraggableState> {
        self.drag.as_ref()
    }

    /// Mutable drag state, e.g. to toggle [`DraggableState::set_enabled`].
    pub fn drag_mut(&mut self) -> Option<&mut DraggableState> {
        self.drag.as_mut()
    }

    /// Resize state, if the element is resizable.
    #[must_use]
    pub fn resize(&self) -> Option<&ResizableState> {
        self.resize.as_ref()
    }

    /// Mutable resize state, e.g. to toggle aspect lock.
    pub fn resize_mut(&mut self) -> Option<&mut ResizableState> {
        self.resize.as_mut()
    }

    /// Returns `true` while any gesture on this element is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.drag.is_some_and(|d| d.is_dragging())
            || self.resize.as_ref().is_some_and(ResizableState::is_resizing)
    }
}
