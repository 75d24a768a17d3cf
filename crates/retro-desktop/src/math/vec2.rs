//! 2D vector type for pointer positions and deltas

use serde::{Deserialize, Serialize};

/// 2D vector for pointer positions and offsets (CSS pixels)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_pointer_delta() {
        let start = Vec2::new(460.0, 360.0);
        let now = Vec2::new(560.0, 310.0);

        let delta = now - start;
        assert!((delta.x - 100.0).abs() < 0.001);
        assert!((delta.y - (-50.0)).abs() < 0.001);
    }
}
