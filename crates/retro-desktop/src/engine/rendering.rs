//! Render snapshot for the presentation layer

use serde::Serialize;
use crate::math::Rect;
use crate::window::{RegistryEntry, WindowId, WindowKind, WindowRecord};
use super::DesktopEngine;

/// Everything the presentation layer needs to draw one window slot
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    pub id: WindowId,
    pub title: String,
    pub kind: WindowKind,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    /// Open and not minimized
    pub is_visible: bool,
    pub is_active: bool,
    pub z_index: u32,
    /// Restore geometry
    pub position: Rect,
    /// Where to paint the window (the workspace when maximized)
    pub display_rect: Rect,
    pub resizable: bool,
    pub hide_maximize: bool,
}

/// Read-only view of the whole desktop
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopSnapshot {
    /// One view per registry entry, in registry order
    pub windows: Vec<WindowView>,
    /// Taskbar order
    pub open_order: Vec<WindowId>,
    pub active_id: Option<WindowId>,
    /// A drag or resize is in flight
    pub interacting: bool,
    pub start_menu_open: bool,
}

impl DesktopSnapshot {
    /// Look up a window view
    pub fn window(&self, id: &str) -> Option<&WindowView> {
        self.windows.iter().find(|view| view.id == id)
    }
}

impl DesktopEngine {
    /// Build the render snapshot
    pub fn snapshot(&self) -> DesktopSnapshot {
        let workspace = self.workspace();

        DesktopSnapshot {
            windows: self
                .windows
                .iter()
                .map(|(entry, record)| self.window_view(entry, record, workspace))
                .collect(),
            open_order: self.windows.open_order().to_vec(),
            active_id: self.windows.active_id().cloned(),
            interacting: self.windows.is_interacting(),
            start_menu_open: self.start_menu_open,
        }
    }

    /// Render snapshot as JSON
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot())
    }

    fn window_view(&self, entry: &RegistryEntry, record: &WindowRecord, workspace: Rect) -> WindowView {
        WindowView {
            id: entry.id.clone(),
            title: entry.title.clone(),
            kind: entry.kind,
            is_open: record.is_open,
            is_minimized: record.is_minimized,
            is_maximized: record.is_maximized,
            is_visible: record.is_visible(),
            is_active: self.windows.is_active(entry.id.as_str()),
            z_index: record.z_index,
            position: record.position,
            display_rect: record.display_rect(workspace),
            resizable: entry.resizable,
            hide_maximize: entry.hide_maximize,
        }
    }
}
