//! Axis-aligned rectangle in CSS layout terms

use serde::{Deserialize, Serialize};
use super::Vec2;

/// Axis-aligned rectangle positioned by its top-left corner
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle (CSS order: top, left, width, height)
    #[inline]
    pub const fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self { top, left, width, height }
    }

    /// Get the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Get the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Translate rectangle by offset
    #[inline]
    pub fn translate(&self, offset: Vec2) -> Rect {
        Rect::new(self.top + offset.y, self.left + offset.x, self.width, self.height)
    }
}
