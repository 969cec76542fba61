// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared coordination state for all interactive elements in one UI session.
//!
//! - [`FocusStore`]: the single "currently focused element" value. Only tap
//!   and gesture-start handling writes it; everything else reads.
//! - [`ConflictChannel`]: broadcast of resize-gesture starts, so the drag
//!   handler of the same element can stand down.
//! - [`DeviceClass`]: whether pinch gestures are bound at all.
//!
//! ## Minimal example
//!
//! ```
//! use understory_drag_resize::coordination::{ConflictChannel, ConflictSignal, FocusStore};
//! use understory_drag_resize::gesture::GestureKind;
//!
//! let mut focus = FocusStore::new();
//! assert!(focus.set_focus("card"));
//! assert!(!focus.set_focus("card")); // unchanged, nothing to notify
//!
//! let mut conflicts = ConflictChannel::new();
//! let mut cursor = conflicts.subscribe();
//! conflicts.publish(ConflictSignal { source: "card", kind: GestureKind::Pan });
//! let seen: Vec<_> = conflicts.poll(&mut cursor).collect();
//! assert_eq!(seen.len(), 1);
//! assert_eq!(conflicts.poll(&mut cursor).count(), 0);
//! ```

use alloc::collections::VecDeque;

use understory_gesture_geometry::{HANDLE_SPECS, HandleSpec};

use crate::gesture::GestureKind;

/// The last focused element, with replace-on-change semantics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusStore<K> {
    focused: Option<K>,
    revision: u64,
}

impl<K> Default for FocusStore<K> {
    fn default() -> Self {
        Self {
            focused: None,
            revision: 0,
        }
    }
}

impl<K: PartialEq> FocusStore<K> {
    /// Creates a store with nothing focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused element, if any.
    #[must_use]
    pub fn focused(&self) -> Option<&K> {
        self.focused.as_ref()
    }

    /// Returns `true` if `key` is focused.
    #[must_use]
    pub fn is_focused(&self, key: &K) -> bool {
        self.focused.as_ref() == Some(key)
    }

    /// Focuses `key`. Returns `false` (and changes nothing) if it already was.
    pub fn set_focus(&mut self, key: K) -> bool {
        if self.is_focused(&key) {
            return false;
        }
        self.focused = Some(key);
        self.bump_revision();
        true
    }

    /// Clears focus. Returns `false` if nothing was focused.
    pub fn clear(&mut self) -> bool {
        if self.focused.take().is_none() {
            return false;
        }
        self.bump_revision();
        true
    }

    /// Counter bumped on every actual change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// A resize gesture started on `source`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConflictSignal<K> {
    /// Element whose resize gesture started.
    pub source: K,
    /// Kind of the resize gesture.
    pub kind: GestureKind,
}

/// Read position of one [`ConflictChannel`] subscriber.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConflictCursor {
    next: u64,
}

/// Single-threaded broadcast of [`ConflictSignal`]s.
///
/// Subscribers poll with their own [`ConflictCursor`] and see every signal
/// published since their previous poll. Only the most recent
/// [`ConflictChannel::CAPACITY`] signals are retained; a subscriber that
/// falls further behind silently skips the oldest ones.
#[derive(Clone, Debug)]
pub struct ConflictChannel<K> {
    signals: VecDeque<ConflictSignal<K>>,
    // Sequence number of `signals[0]`.
    first: u64,
}

impl<K> Default for ConflictChannel<K> {
    fn default() -> Self {
        Self {
            signals: VecDeque::new(),
            first: 0,
        }
    }
}

impl<K> ConflictChannel<K> {
    /// Number of signals retained for lagging subscribers.
    pub const CAPACITY: usize = 32;

    /// Creates an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number the next published signal will get.
    fn end(&self) -> u64 {
        self.first + self.signals.len() as u64
    }

    /// Returns a cursor that only sees signals published from now on.
    #[must_use]
    pub fn subscribe(&self) -> ConflictCursor {
        ConflictCursor { next: self.end() }
    }

    /// Broadcasts a signal.
    pub fn publish(&mut self, signal: ConflictSignal<K>) {
        if self.signals.len() == Self::CAPACITY {
            self.signals.pop_front();
            self.first += 1;
        }
        self.signals.push_back(signal);
    }

    /// Signals published since `cursor` last polled; advances the cursor.
    pub fn poll<'a>(
        &'a self,
        cursor: &mut ConflictCursor,
    ) -> impl Iterator<Item = &'a ConflictSignal<K>> + use<'a, K> {
        let from = cursor.next.max(self.first);
        let skip = usize::try_from(from - self.first).unwrap_or(usize::MAX);
        cursor.next = self.end();
        self.signals.iter().skip(skip)
    }
}

/// Whether the current device is touch-first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Pointer-first; pinch gestures are not bound.
    #[default]
    Desktop,
    /// Touch-first; pinch-to-zoom resizing is bound.
    Mobile,
}

impl DeviceClass {
    /// Returns `true` if pinch gestures should be bound.
    #[must_use]
    pub fn supports_pinch(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Session-wide coordination state.
#[derive(Clone, Debug)]
pub struct Coordinator<K> {
    /// The focused element.
    pub focus: FocusStore<K>,
    /// Resize-start broadcast.
    pub conflicts: ConflictChannel<K>,
    /// Device class, fixed for the session.
    pub device: DeviceClass,
}

impl<K: PartialEq> Coordinator<K> {
    /// Creates coordination state for `device`.
    #[must_use]
    pub fn new(device: DeviceClass) -> Self {
        Self {
            focus: FocusStore::new(),
            conflicts: ConflictChannel::new(),
            device,
        }
    }

    /// Default descriptors of the eight resize handles.
    ///
    /// Elements may override them through [`ResizableConfig::handles`](crate::ResizableConfig::handles).
    #[must_use]
    pub fn handle_specs(&self) -> &'static [HandleSpec; 8] {
        &HANDLE_SPECS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn focus_replaces_only_on_change() {
        let mut focus = FocusStore::new();
        assert_eq!(focus.focused(), None);
        assert!(focus.set_focus(1));
        assert!(focus.set_focus(2));
        assert!(!focus.set_focus(2));
        assert_eq!(focus.revision(), 2);
        assert!(focus.is_focused(&2));
        assert!(focus.clear());
        assert!(!focus.clear());
        assert_eq!(focus.revision(), 3);
    }

    #[test]
    fn subscribers_see_only_new_signals() {
        let mut ch = ConflictChannel::new();
        ch.publish(ConflictSignal {
            source: 1,
            kind: GestureKind::Pan,
        });
        let mut late = ch.subscribe();
        assert_eq!(ch.poll(&mut late).count(), 0);

        ch.publish(ConflictSignal {
            source: 2,
            kind: GestureKind::Pinch,
        });
        let seen: Vec<_> = ch.poll(&mut late).copied().collect();
        assert_eq!(
            seen,
            [ConflictSignal {
                source: 2,
                kind: GestureKind::Pinch
            }]
        );
    }

    #[test]
    fn independent_cursors() {
        let mut ch = ConflictChannel::new();
        let mut a = ch.subscribe();
        let mut b = ch.subscribe();
        ch.publish(ConflictSignal {
            source: 'x',
            kind: GestureKind::Pan,
        });
        assert_eq!(ch.poll(&mut a).count(), 1);
        ch.publish(ConflictSignal {
            source: 'y',
            kind: GestureKind::Pan,
        });
        assert_eq!(ch.poll(&mut a).count(), 1);
        assert_eq!(ch.poll(&mut b).count(), 2);
    }

    #[test]
    fn lagging_cursor_skips_evicted_signals() {
        let mut ch = ConflictChannel::new();
        let mut cursor = ch.subscribe();
        for i in 0..(ConflictChannel::<u32>::CAPACITY as u32 + 5) {
            ch.publish(ConflictSignal {
                source: i,
                kind: GestureKind::Pan,
            });
        }
        let seen: Vec<u32> = ch.poll(&mut cursor).map(|s| s.source).collect();
        assert_eq!(seen.len(), ConflictChannel::<u32>::CAPACITY);
        assert_eq!(seen[0], 5);
    }

    #[test]
    fn only_mobile_binds_pinch() {
        assert!(!DeviceClass::default().supports_pinch());
        assert!(DeviceClass::Mobile.supports_pinch());
        let c: Coordinator<u8> = Coordinator::new(DeviceClass::Mobile);
        assert_eq!(c.handle_specs().len(), 8);
    }
}
