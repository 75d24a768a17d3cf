//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window operations and taskbar/title bar policies
//! - `input`: Pointer gestures and document event routing
//! - `shell`: Keyboard shortcuts, Run dialog and start menu
//! - `rendering`: Render snapshot for the presentation layer

mod input;
mod windows;
mod shell;
mod rendering;

use serde::{Deserialize, Serialize};
use crate::input::InputRouter;
use crate::math::{Rect, Size};
use crate::window::{WindowManager, WindowRegistry};

pub use rendering::{DesktopSnapshot, WindowView};
pub use shell::{
    DesktopMenuAction, KeyInput, KeyResult, RunOutcome, ShortcutMap, StartMenuAction, StartMenuOutcome,
    DEFAULT_RUN_ALIASES,
};

/// Screen layout the desktop is rendered into
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Browser viewport size
    pub screen_size: Size,
    /// Height of the taskbar along the bottom edge
    pub taskbar_height: f32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            screen_size: Size::new(1920.0, 1080.0),
            taskbar_height: 30.0,
        }
    }
}

impl DesktopConfig {
    /// Area above the taskbar that maximized windows cover
    pub fn workspace(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.screen_size.width,
            (self.screen_size.height - self.taskbar_height).max(0.0),
        )
    }
}

/// Desktop engine coordinating all desktop components
///
/// This is the single owned store for the desktop, managing:
/// - Window manager (lifecycle, focus, z-order, geometry)
/// - Input router (document pointer subscription)
/// - Start menu state, keyboard shortcuts and Run dialog aliases
pub struct DesktopEngine {
    /// Window manager
    pub windows: WindowManager,
    /// Input router
    pub input: InputRouter,
    /// Screen layout
    pub config: DesktopConfig,
    /// Start menu visibility
    pub(crate) start_menu_open: bool,
    /// `Ctrl+<digit>` bindings
    pub(crate) shortcuts: ShortcutMap,
    /// Run dialog commands that open a window of the same id
    pub(crate) run_aliases: Vec<String>,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create a desktop engine with the portfolio registry
    pub fn new() -> Self {
        Self::with_registry(WindowRegistry::default())
    }

    /// Create a desktop engine over a custom registry
    pub fn with_registry(registry: WindowRegistry) -> Self {
        Self {
            windows: WindowManager::new(registry),
            input: InputRouter::new(),
            config: DesktopConfig::default(),
            start_menu_open: false,
            shortcuts: ShortcutMap::default(),
            run_aliases: DEFAULT_RUN_ALIASES.iter().map(|alias| alias.to_string()).collect(),
        }
    }

    /// Initialize the desktop with screen dimensions and start routing input
    ///
    /// Safe to call more than once.
    pub fn init(&mut self, width: f32, height: f32) {
        self.resize(width, height);
        self.input.attach();
    }

    /// Track a viewport resize
    pub fn resize(&mut self, width: f32, height: f32) {
        self.config.screen_size = Size::new(width, height);
    }

    /// Area maximized windows cover
    #[inline]
    pub fn workspace(&self) -> Rect {
        self.config.workspace()
    }

    /// Replace the `Ctrl+<digit>` bindings
    pub fn set_shortcuts(&mut self, shortcuts: ShortcutMap) {
        self.shortcuts = shortcuts;
    }

    /// Get the `Ctrl+<digit>` bindings
    #[inline]
    pub fn shortcuts(&self) -> &ShortcutMap {
        &self.shortcuts
    }

    /// Replace the Run dialog aliases (matched lowercase)
    pub fn set_run_aliases<I, S>(&mut self, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.run_aliases = aliases
            .into_iter()
            .map(|alias| alias.into().to_lowercase())
            .collect();
    }
}
