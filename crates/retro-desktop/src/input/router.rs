//! Document-level pointer routing

use tracing::trace;

use crate::math::Vec2;
use crate::window::WindowManager;
use super::InputResult;

/// Input router forwarding pointer moves and releases to the window manager
///
/// Models the single document subscription held for the application
/// lifetime. While detached every event is ignored.
#[derive(Debug, Default)]
pub struct InputRouter {
    attached: bool,
}

impl InputRouter {
    /// Create a detached input router
    pub fn new() -> Self {
        Self { attached: false }
    }

    /// Start routing events
    pub fn attach(&mut self) {
        if !self.attached {
            trace!("input router attached");
        }
        self.attached = true;
    }

    /// Stop routing events
    pub fn detach(&mut self) {
        if self.attached {
            trace!("input router detached");
        }
        self.attached = false;
    }

    /// Check if events are being routed
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Route a pointer move
    ///
    /// Only reaches the window manager while a gesture is in flight.
    pub fn pointer_move(&self, windows: &mut WindowManager, pointer: Vec2) -> InputResult {
        if !self.attached || !windows.is_interacting() {
            return InputResult::Unhandled;
        }
        windows.pointer_move(pointer).into()
    }

    /// Route a pointer release, ending any gesture in flight
    pub fn pointer_up(&self, windows: &mut WindowManager) -> InputResult {
        if !self.attached {
            return InputResult::Unhandled;
        }
        windows.end_interaction().into()
    }
}
