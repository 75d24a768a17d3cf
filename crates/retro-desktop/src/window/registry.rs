//! Static window registry
//!
//! Maps every window id to its title, default geometry and chrome
//! behaviour. The registry is closed: ids outside it are rejected by the
//! window manager.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, Result};
use crate::math::Rect;
use super::WindowId;

/// Id of the Run dialog, opened from the start menu and `Ctrl+R`
pub const RUN_WINDOW: &str = "run";

/// What a window slot hosts, used by the presentation layer to pick content
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowKind {
    /// Static content page (About, Contact, Resume, ...)
    #[default]
    Document,
    /// Embedded application (Terminal, Paint, Minesweeper, ...)
    Application,
    /// Per-project viewer
    ProjectViewer,
    /// Small system dialog such as Run
    Dialog,
}

fn default_resizable() -> bool {
    true
}

/// Configuration for one window slot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    /// Window id
    pub id: WindowId,
    /// Title bar text
    pub title: String,
    /// Geometry used the first time the window opens
    pub default_geometry: Rect,
    /// Whether resize handles are offered
    #[serde(default = "default_resizable")]
    pub resizable: bool,
    /// Whether the maximize button is hidden
    #[serde(default)]
    pub hide_maximize: bool,
    /// Content kind
    #[serde(default)]
    pub kind: WindowKind,
}

impl RegistryEntry {
    /// Create a resizable document entry
    pub fn new(id: &str, title: &str, default_geometry: Rect) -> Self {
        Self {
            id: WindowId::new(id),
            title: title.to_string(),
            default_geometry,
            resizable: true,
            hide_maximize: false,
            kind: WindowKind::Document,
        }
    }

    /// Set the content kind
    pub fn kind(mut self, kind: WindowKind) -> Self {
        self.kind = kind;
        self
    }

    /// Disable resize handles
    pub fn fixed_size(mut self) -> Self {
        self.resizable = false;
        self
    }

    /// Hide the maximize button
    pub fn without_maximize(mut self) -> Self {
        self.hide_maximize = true;
        self
    }
}

/// Closed set of window slots, in presentation order
#[derive(Clone, Debug)]
pub struct WindowRegistry {
    entries: Vec<RegistryEntry>,
    index: HashMap<WindowId, usize>,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl WindowRegistry {
    /// Build a registry, rejecting duplicate ids
    pub fn new(entries: Vec<RegistryEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), i).is_some() {
                return Err(DesktopError::DuplicateWindow(entry.id.to_string()));
            }
        }
        Ok(Self { entries, index })
    }

    /// Parse a registry from a JSON array of entries
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<RegistryEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Look up an entry
    pub fn get(&self, id: &str) -> Option<&RegistryEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Check if an id is registered
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The portfolio desktop's window set
    pub fn portfolio() -> Self {
        use WindowKind::{Application, Dialog, ProjectViewer};

        let entries = vec![
            RegistryEntry::new("about", "About Me", Rect::new(100.0, 100.0, 360.0, 260.0)),
            RegistryEntry::new("projects", "Projects", Rect::new(140.0, 220.0, 420.0, 320.0)),
            RegistryEntry::new("contact", "Contact", Rect::new(120.0, 320.0, 360.0, 240.0)),
            RegistryEntry::new("mycomputer", "My Computer", Rect::new(200.0, 150.0, 420.0, 340.0)),
            RegistryEntry::new("resume", "Resume", Rect::new(170.0, 180.0, 760.0, 520.0)),
            RegistryEntry::new("fileexplorer", "File Explorer", Rect::new(80.0, 140.0, 600.0, 440.0))
                .kind(Application),
            RegistryEntry::new("settings", "Settings", Rect::new(130.0, 200.0, 400.0, 420.0))
                .kind(Application),
            RegistryEntry::new("terminal", "Command Prompt", Rect::new(100.0, 150.0, 680.0, 420.0))
                .kind(Application),
            RegistryEntry::new("notepad", "Notepad - Untitled", Rect::new(120.0, 180.0, 500.0, 400.0))
                .kind(Application),
            RegistryEntry::new("outlook", "Outlook Express", Rect::new(90.0, 160.0, 560.0, 440.0))
                .kind(Application),
            RegistryEntry::new("paint", "Paint", Rect::new(60.0, 100.0, 720.0, 540.0))
                .kind(Application),
            RegistryEntry::new("minesweeper", "Minesweeper", Rect::new(100.0, 100.0, 220.0, 320.0))
                .kind(Application)
                .fixed_size(),
            RegistryEntry::new("solitaire", "Solitaire", Rect::new(50.0, 50.0, 640.0, 480.0))
                .kind(Application),
            RegistryEntry::new(
                "pinball",
                "3D Pinball for Windows - Space Cadet",
                Rect::new(20.0, 20.0, 650.0, 520.0),
            )
            .kind(Application)
            .fixed_size(),
            RegistryEntry::new("project_dicegame", "Dice Game - Project", Rect::new(80.0, 120.0, 480.0, 450.0))
                .kind(ProjectViewer),
            RegistryEntry::new("project_carracer", "Car Racer - Project", Rect::new(90.0, 140.0, 480.0, 450.0))
                .kind(ProjectViewer),
            RegistryEntry::new(
                "project_passwordmaker",
                "Password Maker - Project",
                Rect::new(100.0, 160.0, 480.0, 450.0),
            )
            .kind(ProjectViewer),
            RegistryEntry::new(
                "project_commonfactors",
                "Common Factors - Project",
                Rect::new(110.0, 180.0, 480.0, 450.0),
            )
            .kind(ProjectViewer),
            RegistryEntry::new(
                "project_assemblycalculator",
                "Assembly Calculator - Project",
                Rect::new(120.0, 200.0, 500.0, 480.0),
            )
            .kind(ProjectViewer),
            RegistryEntry::new(RUN_WINDOW, "Run", Rect::new(220.0, 260.0, 420.0, 190.0))
                .kind(Dialog)
                .without_maximize(),
        ];

        // Ids above are distinct literals
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        Self { entries, index }
    }
}
