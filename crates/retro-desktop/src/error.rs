//! Error types for the desktop core
//!
//! Every failure here is a contract violation by the caller (an id that is
//! not in the registry, a malformed resize handle, a broken registry file).
//! Operations that fail leave the desktop state untouched.

/// Errors reported by window manager and engine operations.
#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    /// The window id is not part of the registry.
    #[error("unknown window: {0}")]
    UnknownWindow(String),

    /// A resize handle string contained something other than the edge tags n, s, e, w.
    #[error("invalid resize direction: {0:?}")]
    InvalidResizeDirection(String),

    /// The same window id was registered twice.
    #[error("duplicate window id in registry: {0}")]
    DuplicateWindow(String),

    /// The registry JSON could not be parsed.
    #[error("invalid registry: {0}")]
    InvalidRegistry(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DesktopError>;
