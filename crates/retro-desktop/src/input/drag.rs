//! In-flight gesture state

use crate::math::{drag_rect, resize_rect, Rect, ResizeDirection, Vec2};
use crate::window::WindowId;

/// The single drag or resize gesture currently driven by the pointer
#[derive(Clone, Debug, PartialEq)]
pub enum Interaction {
    /// Moving a window by its title bar
    Drag {
        /// Window being moved
        window_id: WindowId,
        /// Pointer position at gesture start
        start_pointer: Vec2,
        /// Window geometry at gesture start
        start_rect: Rect,
    },
    /// Resizing a window from an edge or corner handle
    Resize {
        /// Window being resized
        window_id: WindowId,
        /// Edges the handle moves
        direction: ResizeDirection,
        /// Pointer position at gesture start
        start_pointer: Vec2,
        /// Window geometry at gesture start
        start_rect: Rect,
    },
}

impl Interaction {
    /// Check if this is a move gesture
    #[inline]
    pub fn is_drag(&self) -> bool {
        matches!(self, Interaction::Drag { .. })
    }

    /// Check if this is a resize gesture
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, Interaction::Resize { .. })
    }

    /// Window the gesture applies to
    pub fn window_id(&self) -> &WindowId {
        match self {
            Interaction::Drag { window_id, .. } | Interaction::Resize { window_id, .. } => window_id,
        }
    }

    /// Geometry the window should have with the pointer at `pointer`
    pub fn rect_at(&self, pointer: Vec2) -> Rect {
        match self {
            Interaction::Drag { start_pointer, start_rect, .. } => {
                drag_rect(*start_rect, pointer - *start_pointer)
            }
            Interaction::Resize { direction, start_pointer, start_rect, .. } => {
                resize_rect(*start_rect, *direction, pointer - *start_pointer)
            }
        }
    }
}
