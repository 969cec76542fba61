// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How a resize gesture relates width to height.
///
/// This mode is consulted by [`crate::ResizeGeometry::begin`] when the
/// gesture starts; changing it mid-gesture has no effect on that gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ResizeMode {
    /// Width and height follow the pointer independently.
    #[default]
    Free,
    /// Height is derived from width using the `height / width` ratio of the
    /// element captured at gesture start.
    ///
    /// Edge handles are not meaningful in this mode; hosts usually hide them.
    AspectLocked,
}

impl ResizeMode {
    /// Returns the mode for a boolean aspect-lock flag.
    #[must_use]
    pub fn from_aspect_lock(locked: bool) -> Self {
        if locked { Self::AspectLocked } else { Self::Free }
    }

    /// Returns `true` for [`ResizeMode::AspectLocked`].
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, Self::AspectLocked)
    }
}
