//! 2D size type for window dimensions

use serde::{Deserialize, Serialize};

/// Minimum width a window can be resized to
pub const MIN_WIDTH: f32 = 200.0;

/// Minimum height a window can be resized to
pub const MIN_HEIGHT: f32 = 150.0;

/// 2D size for width and height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
