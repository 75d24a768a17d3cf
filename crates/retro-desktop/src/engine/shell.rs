//! Shell policies: keyboard shortcuts, Run dialog, start menu and desktop
//! context menu

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::window::{WindowId, RUN_WINDOW};
use super::DesktopEngine;

/// Commands the Run dialog accepts as window ids
pub const DEFAULT_RUN_ALIASES: [&str; 7] =
    ["about", "projects", "contact", "mycomputer", "resume", "run", "settings"];

/// Window the desktop context menu's "Properties" entry opens
const DISPLAY_PROPERTIES_WINDOW: &str = "settings";

/// Windows opened by `Ctrl+1` through `Ctrl+6`
const DEFAULT_SHORTCUTS: [&str; 6] = ["about", "projects", "contact", "mycomputer", "resume", "settings"];

/// Windows bound to `Ctrl+<digit>`, starting at `1`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcutMap(Vec<WindowId>);

impl Default for ShortcutMap {
    fn default() -> Self {
        Self(DEFAULT_SHORTCUTS.iter().map(|&id| WindowId::new(id)).collect())
    }
}

impl ShortcutMap {
    /// Bind digits `1..` to `ids` in order (at most nine are reachable)
    pub fn new(ids: Vec<WindowId>) -> Self {
        Self(ids)
    }

    /// Window bound to a key, if the key is a bound digit
    pub fn get(&self, key: &str) -> Option<&WindowId> {
        let mut chars = key.chars();
        let digit = chars.next()?.to_digit(10)?;
        if chars.next().is_some() || digit == 0 {
            return None;
        }
        self.0.get(digit as usize - 1)
    }
}

/// A key press as seen by the desktop
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyInput {
    /// `KeyboardEvent.key` value (e.g. `"Escape"`, `"r"`, `"F4"`)
    pub key: String,
    /// Control modifier held
    #[serde(default)]
    pub ctrl: bool,
    /// Alt modifier held
    #[serde(default)]
    pub alt: bool,
    /// Focus is in an input or textarea
    #[serde(default)]
    pub in_text_field: bool,
}

impl KeyInput {
    /// Create a key press without modifiers
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string(), ..Default::default() }
    }

    /// Hold control
    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Hold alt
    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Mark the press as typed into a text field
    pub fn in_text_field(mut self) -> Self {
        self.in_text_field = true;
        self
    }
}

/// What the desktop did with a key press
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyResult {
    /// The press changed desktop state
    pub handled: bool,
    /// The browser default action must be suppressed
    pub prevent_default: bool,
}

impl KeyResult {
    /// Nothing happened
    pub const IGNORED: Self = Self { handled: false, prevent_default: false };

    fn acted(handled: bool) -> Self {
        Self { handled, prevent_default: false }
    }

    fn intercepted(handled: bool) -> Self {
        Self { handled, prevent_default: true }
    }
}

/// Result of submitting the Run dialog
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RunOutcome {
    /// Blank input; the dialog stays open
    Ignored,
    /// A window was opened and the dialog closed
    Opened { id: WindowId },
    /// The host should open `url` in a new tab; the dialog closed
    OpenUrl { url: String },
    /// Nothing matched; the host shows `message` in an error box
    NotFound { message: String },
}

/// Start menu entries
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "camelCase")]
pub enum StartMenuAction {
    /// Open a window
    Open(WindowId),
    /// Open the Run dialog
    Run,
    /// Begin shutting down
    ShutDown,
}

/// What the host must do after a start menu selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StartMenuOutcome {
    /// Nothing beyond re-rendering
    None,
    /// Play the shutdown sequence
    ShutDown,
}

/// Desktop right-click menu entries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DesktopMenuAction {
    /// Open the display settings window
    Properties,
}

impl DesktopEngine {
    // =========================================================================
    // Start menu
    // =========================================================================

    /// Check if the start menu is open
    #[inline]
    pub fn is_start_menu_open(&self) -> bool {
        self.start_menu_open
    }

    /// Open or close the start menu
    pub fn toggle_start_menu(&mut self) {
        self.start_menu_open = !self.start_menu_open;
    }

    /// Close the start menu
    pub fn close_start_menu(&mut self) {
        self.start_menu_open = false;
    }

    /// Apply a start menu selection; the menu always closes
    pub fn start_menu_select(&mut self, action: StartMenuAction) -> Result<StartMenuOutcome> {
        self.start_menu_open = false;
        match action {
            StartMenuAction::Open(id) => self.windows.open(id.as_str())?,
            StartMenuAction::Run => self.windows.open(RUN_WINDOW)?,
            StartMenuAction::ShutDown => return Ok(StartMenuOutcome::ShutDown),
        }
        Ok(StartMenuOutcome::None)
    }

    // =========================================================================
    // Desktop context menu
    // =========================================================================

    /// Apply a desktop context menu selection
    ///
    /// The click that picks the entry also dismisses the start menu.
    pub fn desktop_menu_select(&mut self, action: DesktopMenuAction) -> Result<()> {
        self.start_menu_open = false;
        match action {
            DesktopMenuAction::Properties => self.windows.open(DISPLAY_PROPERTIES_WINDOW),
        }
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Apply the desktop keyboard shortcuts to a key press
    pub fn handle_key(&mut self, input: &KeyInput) -> Result<KeyResult> {
        let key = input.key.as_str();

        if input.in_text_field {
            if key == "Escape" && self.run_visible() {
                self.windows.close(RUN_WINDOW)?;
                return Ok(KeyResult::acted(true));
            }
            return Ok(KeyResult::IGNORED);
        }

        if input.ctrl && key.eq_ignore_ascii_case("r") {
            self.windows.open(RUN_WINDOW)?;
            return Ok(KeyResult::intercepted(true));
        }

        if input.alt && key == "F4" {
            let active = self.windows.active_id().cloned();
            if let Some(id) = &active {
                self.windows.close(id.as_str())?;
            }
            return Ok(KeyResult::intercepted(active.is_some()));
        }

        if key == "Escape" {
            return self.handle_escape().map(KeyResult::acted);
        }

        if input.ctrl && key.eq_ignore_ascii_case("m") {
            let active = self.windows.active_id().cloned();
            if let Some(id) = &active {
                self.windows.minimize(id.as_str())?;
            }
            return Ok(KeyResult::intercepted(active.is_some()));
        }

        if input.ctrl {
            if let Some(id) = self.shortcuts.get(key).cloned() {
                self.windows.open(id.as_str())?;
                return Ok(KeyResult::intercepted(true));
            }
        }

        Ok(KeyResult::IGNORED)
    }

    /// Escape dismisses the start menu, then Run, then the active window
    fn handle_escape(&mut self) -> Result<bool> {
        if self.start_menu_open {
            self.start_menu_open = false;
            return Ok(true);
        }
        if self.run_visible() {
            self.windows.close(RUN_WINDOW)?;
            return Ok(true);
        }
        match self.windows.active_id().cloned() {
            Some(id) => {
                self.windows.minimize(id.as_str())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // =========================================================================
    // Run dialog
    // =========================================================================

    /// Execute a Run dialog command
    pub fn run_command(&mut self, text: &str) -> Result<RunOutcome> {
        let command = text.trim().to_lowercase();
        if command.is_empty() {
            return Ok(RunOutcome::Ignored);
        }

        if self.run_aliases.iter().any(|alias| *alias == command) {
            self.windows.open(&command)?;
            self.close_run()?;
            return Ok(RunOutcome::Opened { id: WindowId::new(command) });
        }

        if command.starts_with("http://") || command.starts_with("https://") {
            self.close_run()?;
            return Ok(RunOutcome::OpenUrl { url: command });
        }

        debug!(command = %command, "run command not found");
        Ok(RunOutcome::NotFound {
            message: format!(
                "Cannot find file '{command}' (or one of its components). Make sure the path and \
                 filename are correct and that all required libraries are available."
            ),
        })
    }

    fn run_visible(&self) -> bool {
        self.windows.get(RUN_WINDOW).is_some_and(|run| run.is_visible())
    }

    fn close_run(&mut self) -> Result<()> {
        if self.windows.registry().contains(RUN_WINDOW) {
            self.windows.close(RUN_WINDOW)?;
        }
        Ok(())
    }
}
