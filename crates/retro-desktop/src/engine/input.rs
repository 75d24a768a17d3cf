//! Pointer gestures and document event routing

use crate::error::Result;
use crate::input::InputResult;
use crate::math::{ResizeDirection, Vec2};
use super::DesktopEngine;

impl DesktopEngine {
    /// Start move drag from a title bar mouse-down
    pub fn start_move_drag(&mut self, id: &str, x: f32, y: f32) -> Result<()> {
        self.windows.begin_drag(id, Vec2::new(x, y))?;
        self.start_menu_open = false;
        Ok(())
    }

    /// Start resize drag from a handle mouse-down
    ///
    /// `direction` names the moving edges, e.g. `"n"` or `"se"`.
    pub fn start_resize_drag(&mut self, id: &str, direction: &str, x: f32, y: f32) -> Result<()> {
        let direction: ResizeDirection = direction.parse()?;
        self.windows.begin_resize(id, Vec2::new(x, y), direction)?;
        self.start_menu_open = false;
        Ok(())
    }

    /// Handle a document pointer move
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        self.input.pointer_move(&mut self.windows, Vec2::new(x, y))
    }

    /// Handle a document pointer release
    pub fn handle_pointer_up(&mut self) -> InputResult {
        self.input.pointer_up(&mut self.windows)
    }
}
