//! Window manager core for a retro desktop shell
//!
//! This crate provides the state behind a Windows-style desktop rendered in
//! the browser:
//! - Window lifecycle (open, close, minimize, maximize) over a fixed registry
//! - Focus and z-order
//! - Pointer-driven move and resize with minimum-size floors
//! - Taskbar, start menu, desktop context menu, Run dialog and keyboard
//!   shortcut policies
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`) and resize math
//! - [`window`]: Registry, window records and the window manager
//! - [`input`]: In-flight gestures and document event routing
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Example
//!
//! ```rust
//! use retro_desktop::DesktopEngine;
//!
//! let mut engine = DesktopEngine::new();
//! engine.init(1920.0, 1080.0);
//!
//! engine.open_window("about").unwrap();
//! engine.start_resize_drag("about", "se", 460.0, 360.0).unwrap();
//! engine.handle_pointer_move(560.0, 310.0);
//! engine.handle_pointer_up();
//!
//! let about = engine.windows.get("about").unwrap();
//! assert_eq!(about.position.width, 460.0);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Single Writer**: Only the window manager mutates window records
//! 3. **Closed Registry**: Window ids outside the registry are rejected, never created

pub mod error;
pub mod math;
pub mod window;
pub mod input;
pub mod logging;

mod engine;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use error::{DesktopError, Result};
pub use math::{Rect, ResizeDirection, Size, Vec2, MIN_HEIGHT, MIN_WIDTH};
pub use window::{
    RegistryEntry, WindowId, WindowKind, WindowManager, WindowObserver, WindowRecord, WindowRegistry,
    RUN_WINDOW,
};
pub use input::{InputResult, InputRouter, Interaction};

pub use engine::{
    DesktopConfig, DesktopEngine, DesktopMenuAction, DesktopSnapshot, KeyInput, KeyResult, RunOutcome,
    ShortcutMap, StartMenuAction, StartMenuOutcome, WindowView,
};
