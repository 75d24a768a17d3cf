//! Window management module
//!
//! Provides the window registry, per-window records, lifecycle, focus and
//! z-order management, and the invariant checks that guard them.

mod record;
mod registry;
mod manager;
mod observer;
pub mod invariants;

pub use record::WindowRecord;
pub use registry::{RegistryEntry, WindowKind, WindowRegistry, RUN_WINDOW};
pub use manager::{WindowManager, INITIAL_WINDOW_Z, INITIAL_Z_COUNTER};
pub use observer::WindowObserver;

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique window identifier (e.g. `"about"`, `"run"`, `"project_dicegame"`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Create a window id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for WindowId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<str> for WindowId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WindowId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
