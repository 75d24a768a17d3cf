//! Lifecycle notifications for collaborators outside the core

use super::WindowId;

/// Receives window lifecycle notifications
///
/// Used for side effects the window manager does not own, such as the
/// recently-used programs list and the open/close/minimize sounds.
pub trait WindowObserver {
    /// A window was opened (or re-opened from the taskbar)
    fn on_open(&mut self, _id: &WindowId) {}

    /// A window was closed
    fn on_close(&mut self, _id: &WindowId) {}

    /// A window was minimized
    fn on_minimize(&mut self, _id: &WindowId) {}
}
