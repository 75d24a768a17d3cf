//! Core geometry types for the desktop
//!
//! These types provide the 2D math used for window placement and for the
//! drag and resize gestures. Nothing in here holds state.

mod vec2;
mod rect;
mod size;
mod resize;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::{Size, MIN_HEIGHT, MIN_WIDTH};
pub use resize::{drag_rect, resize_rect, ResizeDirection};
