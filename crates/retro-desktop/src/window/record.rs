//! Per-window state record

use serde::{Deserialize, Serialize};
use crate::math::Rect;

/// Lifecycle flags, stacking order and geometry of one window slot
///
/// Records live for the whole session. Closing a window only clears its
/// flags, so `position` keeps the last manual geometry for the next open.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    /// Window is in the open set
    pub is_open: bool,
    /// Open but hidden; never the active window
    pub is_minimized: bool,
    /// Rendered over the whole workspace; drag and resize are disabled
    pub is_maximized: bool,
    /// Stacking order (higher = on top)
    pub z_index: u32,
    /// Geometry when not maximized
    pub position: Rect,
}

impl WindowRecord {
    /// Create a closed record at the given geometry
    pub fn closed(position: Rect, z_index: u32) -> Self {
        Self {
            is_open: false,
            is_minimized: false,
            is_maximized: false,
            z_index,
            position,
        }
    }

    /// Check if the window is rendered and interactive
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }

    /// Check if drag or resize gestures may start on this window
    #[inline]
    pub fn accepts_gestures(&self) -> bool {
        self.is_visible() && !self.is_maximized
    }

    /// Rectangle the window should be painted at
    ///
    /// Maximized windows cover `workspace`; `position` is left untouched so
    /// restoring returns to the previous geometry.
    pub fn display_rect(&self, workspace: Rect) -> Rect {
        if self.is_maximized {
            workspace
        } else {
            self.position
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> WindowRecord {
        WindowRecord::closed(Rect::new(100.0, 100.0, 360.0, 260.0), 10)
    }

    #[test]
    fn test_closed_record() {
        let r = create_test_record();
        assert!(!r.is_open);
        assert!(!r.is_visible());
        assert!(!r.accepts_gestures());
        assert_eq!(r.z_index, 10);
    }

    #[test]
    fn test_visibility_flags() {
        let mut r = create_test_record();
        r.is_open = true;
        assert!(r.is_visible());
        assert!(r.accepts_gestures());

        r.is_maximized = true;
        assert!(r.is_visible());
        assert!(!r.accepts_gestures());

        r.is_maximized = false;
        r.is_minimized = true;
        assert!(!r.is_visible());
        assert!(!r.accepts_gestures());
    }

    #[test]
    fn test_display_rect_maximized() {
        let workspace = Rect::new(0.0, 0.0, 1280.0, 690.0);
        let mut r = create_test_record();
        assert_eq!(r.display_rect(workspace), r.position);

        r.is_maximized = true;
        assert_eq!(r.display_rect(workspace), workspace);
        assert!((r.position.width - 360.0).abs() < 0.001);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let json = serde_json::to_value(create_test_record()).unwrap();
        assert_eq!(json["isOpen"], false);
        assert_eq!(json["zIndex"], 10);
        assert_eq!(json["position"]["width"], 360.0);
    }
}
