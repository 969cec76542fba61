// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize handle descriptors.
//!
//! Eight handles sit on the border of a resizable element: four corners and
//! four edge midpoints. Each handle is described per axis by an
//! [`AxisPlacement`], which is all the geometry needs to find the anchor of a
//! resize gesture.

use core::fmt;

use kurbo::{Rect, Size};

/// Side length of a handle box, in pixels.
pub const HANDLE_SIZE: f64 = 10.0;

/// Where a handle sits along one axis of its element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisPlacement {
    /// Fixed offset from the near edge (`left` / `top`).
    Near(f64),
    /// Centered on the axis (`calc(50% - 5px)`). Handles with this placement
    /// do not resize along the axis.
    Middle,
    /// Fixed offset from the far edge (`right` / `bottom`).
    Far(f64),
}

impl AxisPlacement {
    /// Parses a `left` / `top` style value.
    ///
    /// Accepts plain numbers, pixel lengths (`"4px"`) and the midpoint form
    /// `calc(50% - <n>px)`.
    pub fn parse_near(value: &str) -> Result<Self, PlacementParseError> {
        Ok(match parse_placement(value)? {
            Parsed::Length(n) => Self::Near(n),
            Parsed::Midpoint => Self::Middle,
        })
    }

    /// Parses a `right` / `bottom` style value.
    pub fn parse_far(value: &str) -> Result<Self, PlacementParseError> {
        Ok(match parse_placement(value)? {
            Parsed::Length(n) => Self::Far(n),
            Parsed::Midpoint => Self::Middle,
        })
    }

    /// Returns `true` when the handle resizes along this axis.
    #[must_use]
    pub fn resizes(self) -> bool {
        !matches!(self, Self::Middle)
    }

    /// Start coordinate of a handle box along an axis of length `extent`.
    fn start(self, extent: f64) -> f64 {
        match self {
            Self::Near(offset) => offset,
            Self::Middle => extent * 0.5 - HANDLE_SIZE * 0.5,
            Self::Far(offset) => extent - offset - HANDLE_SIZE,
        }
    }
}

enum Parsed {
    Length(f64),
    Midpoint,
}

fn parse_placement(value: &str) -> Result<Parsed, PlacementParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PlacementParseError::Empty);
    }
    if let Some(inner) = trimmed.strip_prefix("calc(") {
        let midpoint = inner
            .strip_suffix(')')
            .and_then(|inner| inner.trim().strip_prefix("50%"))
            .and_then(|rest| rest.trim_start().strip_prefix('-'))
            .and_then(|len| parse_length(len.trim()));
        return match midpoint {
            Some(_) => Ok(Parsed::Midpoint),
            None => Err(PlacementParseError::UnsupportedCalc),
        };
    }
    parse_length(trimmed)
        .map(Parsed::Length)
        .ok_or(PlacementParseError::InvalidLength)
}

fn parse_length(value: &str) -> Option<f64> {
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Error returned when a handle placement string cannot be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementParseError {
    /// The value was empty or whitespace.
    Empty,
    /// The value was not a finite number or pixel length.
    InvalidLength,
    /// A `calc()` expression other than `calc(50% - <n>px)`.
    UnsupportedCalc,
}

impl fmt::Display for PlacementParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty handle placement"),
            Self::InvalidLength => f.write_str("handle placement is not a pixel length"),
            Self::UnsupportedCalc => {
                f.write_str("only `calc(50% - <n>px)` is supported for handle placement")
            }
        }
    }
}

impl core::error::Error for PlacementParseError {}

/// CSS resize cursor shown over a handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeCursor {
    /// `nw-resize`
    NorthWest,
    /// `n-resize`
    North,
    /// `ne-resize`
    NorthEast,
    /// `e-resize`
    East,
    /// `se-resize`
    SouthEast,
    /// `s-resize`
    South,
    /// `sw-resize`
    SouthWest,
    /// `w-resize`
    West,
}

impl ResizeCursor {
    /// CSS `cursor` keyword for this cursor.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::NorthWest => "nw-resize",
            Self::North => "n-resize",
            Self::NorthEast => "ne-resize",
            Self::East => "e-resize",
            Self::SouthEast => "se-resize",
            Self::South => "s-resize",
            Self::SouthWest => "sw-resize",
            Self::West => "w-resize",
        }
    }
}

/// Placement and cursor of one resize handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleSpec {
    /// Horizontal placement (`left` / `right`).
    pub x: AxisPlacement,
    /// Vertical placement (`top` / `bottom`).
    pub y: AxisPlacement,
    /// Cursor hint.
    pub cursor: ResizeCursor,
}

impl HandleSpec {
    /// Returns `true` if exactly one axis is a midpoint, i.e. this is an edge handle.
    #[must_use]
    pub fn is_edge(&self) -> bool {
        self.x.resizes() != self.y.resizes()
    }

    /// Handle box in element-local coordinates for an element of `size`.
    #[must_use]
    pub fn layout(&self, size: Size) -> Rect {
        Rect::from_origin_size(
            (self.x.start(size.width), self.y.start(size.height)),
            (HANDLE_SIZE, HANDLE_SIZE),
        )
    }
}

/// The eight resize handles, in clockwise order starting at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Handle {
    /// Top-left corner.
    TopLeft,
    /// Top edge.
    Top,
    /// Top-right corner.
    TopRight,
    /// Right edge.
    Right,
    /// Bottom-right corner.
    BottomRight,
    /// Bottom edge.
    Bottom,
    /// Bottom-left corner.
    BottomLeft,
    /// Left edge.
    Left,
}

/// Descriptors for [`Handle::ALL`], index-aligned.
pub const HANDLE_SPECS: [HandleSpec; 8] = [
    HandleSpec {
        x: AxisPlacement::Near(0.0),
        y: AxisPlacement::Near(0.0),
        cursor: ResizeCursor::NorthWest,
    },
    HandleSpec {
        x: AxisPlacement::Middle,
        y: AxisPlacement::Near(0.0),
        cursor: ResizeCursor::North,
    },
    HandleSpec {
        x: AxisPlacement::Far(0.0),
        y: AxisPlacement::Near(0.0),
        cursor: ResizeCursor::NorthEast,
    },
    HandleSpec {
        x: AxisPlacement::Far(0.0),
        y: AxisPlacement::Middle,
        cursor: ResizeCursor::East,
    },
    HandleSpec {
        x: AxisPlacement::Far(0.0),
        y: AxisPlacement::Far(0.0),
        cursor: ResizeCursor::SouthEast,
    },
    HandleSpec {
        x: AxisPlacement::Middle,
        y: AxisPlacement::Far(0.0),
        cursor: ResizeCursor::South,
    },
    HandleSpec {
        x: AxisPlacement::Near(0.0),
        y: AxisPlacement::Far(0.0),
        cursor: ResizeCursor::SouthWest,
    },
    HandleSpec {
        x: AxisPlacement::Near(0.0),
        y: AxisPlacement::Middle,
        cursor: ResizeCursor::West,
    },
];

impl Handle {
    /// All handles, in the same order as [`HANDLE_SPECS`].
    pub const ALL: [Self; 8] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
    ];

    /// Position of this handle in [`Handle::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Static descriptor for this handle.
    #[must_use]
    pub fn spec(self) -> &'static HandleSpec {
        &HANDLE_SPECS[self.index()]
    }

    /// Returns `true` for the four edge (single-direction) handles.
    #[must_use]
    pub fn is_edge(self) -> bool {
        self.index() % 2 == 1
    }
}
