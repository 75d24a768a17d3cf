//! Drag and resize geometry
//!
//! Both gestures are evaluated against the rectangle captured when the
//! gesture started, never incrementally from the previous frame.

use std::fmt;
use std::str::FromStr;

use crate::error::DesktopError;
use super::{Rect, Vec2, MIN_HEIGHT, MIN_WIDTH};

/// Set of window edges a resize handle moves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResizeDirection {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl ResizeDirection {
    pub const N: Self = Self::edges(true, false, false, false);
    pub const S: Self = Self::edges(false, true, false, false);
    pub const E: Self = Self::edges(false, false, true, false);
    pub const W: Self = Self::edges(false, false, false, true);
    pub const NE: Self = Self::edges(true, false, true, false);
    pub const NW: Self = Self::edges(true, false, false, true);
    pub const SE: Self = Self::edges(false, true, true, false);
    pub const SW: Self = Self::edges(false, true, false, true);

    const fn edges(north: bool, south: bool, east: bool, west: bool) -> Self {
        Self { north, south, east, west }
    }

    /// Check if no edge is selected
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.north || self.south || self.east || self.west)
    }
}

impl FromStr for ResizeDirection {
    type Err = DesktopError;

    /// Parse a handle tag such as `"n"`, `"se"` or `"nw"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut direction = ResizeDirection::default();
        for c in s.chars() {
            let edge = match c.to_ascii_lowercase() {
                'n' => &mut direction.north,
                's' => &mut direction.south,
                'e' => &mut direction.east,
                'w' => &mut direction.west,
                _ => return Err(DesktopError::InvalidResizeDirection(s.to_string())),
            };
            *edge = true;
        }

        if direction.is_empty() {
            return Err(DesktopError::InvalidResizeDirection(s.to_string()));
        }
        Ok(direction)
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (on, tag) in [
            (self.north, "n"),
            (self.south, "s"),
            (self.east, "e"),
            (self.west, "w"),
        ] {
            if on {
                f.write_str(tag)?;
            }
        }
        Ok(())
    }
}

/// Calculate the rectangle after dragging by `delta`.
///
/// Not clamped to the screen: windows may leave the visible area.
#[inline]
pub fn drag_rect(start: Rect, delta: Vec2) -> Rect {
    start.translate(delta)
}

/// Calculate the rectangle after resizing `start` by `delta` on the given edges.
///
/// East and south edges always follow the pointer down to the floor.
/// West and north edges move only while the size stays strictly above the
/// floor; past it the size sits on the floor and the moving edge stays where
/// the floor was reached, so the opposite edge never drifts.
pub fn resize_rect(start: Rect, direction: ResizeDirection, delta: Vec2) -> Rect {
    let mut rect = start;

    if direction.east {
        rect.width = (start.width + delta.x).max(MIN_WIDTH);
    }
    if direction.west {
        let width = (start.width - delta.x).max(MIN_WIDTH);
        if width > MIN_WIDTH {
            rect.width = width;
            rect.left = start.left + delta.x;
        } else {
            rect.width = MIN_WIDTH;
            rect.left = start.right() - MIN_WIDTH;
        }
    }

    if direction.south {
        rect.height = (start.height + delta.y).max(MIN_HEIGHT);
    }
    if direction.north {
        let height = (start.height - delta.y).max(MIN_HEIGHT);
        if height > MIN_HEIGHT {
            rect.height = height;
            rect.top = start.top + delta.y;
        } else {
            rect.height = MIN_HEIGHT;
            rect.top = start.bottom() - MIN_HEIGHT;
        }
    }

    rect
}
