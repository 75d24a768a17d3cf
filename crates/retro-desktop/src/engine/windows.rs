//! Window operations and taskbar/title bar policies

use crate::error::Result;
use super::DesktopEngine;

impl DesktopEngine {
    /// Open a window (desktop icon, start menu, taskbar restore)
    pub fn open_window(&mut self, id: &str) -> Result<()> {
        self.windows.open(id)
    }

    /// Close a window
    pub fn close_window(&mut self, id: &str) -> Result<()> {
        self.windows.close(id)
    }

    /// Minimize a window
    pub fn minimize_window(&mut self, id: &str) -> Result<()> {
        self.windows.minimize(id)
    }

    /// Toggle maximize for a window
    pub fn toggle_maximize(&mut self, id: &str) -> Result<()> {
        self.windows.toggle_maximize(id)
    }

    /// Focus a window and raise it
    pub fn focus_window(&mut self, id: &str) -> Result<()> {
        self.windows.bring_to_front(id)
    }

    /// Resize a window to fit its embedded content
    pub fn resize_content(&mut self, id: &str, width: f32, height: f32) -> Result<bool> {
        self.windows.resize_content(id, width, height)
    }

    /// Taskbar button click
    ///
    /// Restores a hidden window, minimizes the focused one and raises any
    /// other.
    pub fn taskbar_click(&mut self, id: &str) -> Result<()> {
        let hidden = match self.windows.get(id) {
            Some(record) => !record.is_visible(),
            None => true,
        };

        if hidden {
            self.windows.open(id)
        } else if self.windows.is_active(id) {
            self.windows.minimize(id)
        } else {
            self.windows.bring_to_front(id)
        }
    }

    /// Mouse-down anywhere on a window
    pub fn window_mouse_down(&mut self, id: &str) -> Result<()> {
        self.windows.bring_to_front(id)
    }

    /// Double-click on a title bar
    pub fn title_bar_double_click(&mut self, id: &str) -> Result<()> {
        self.windows.toggle_maximize(id)
    }
}
