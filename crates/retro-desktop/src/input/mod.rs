//! Input routing module
//!
//! Provides the in-flight gesture state and the router that forwards
//! document-level pointer events to the window manager.

mod router;
mod drag;
mod result;

pub use router::InputRouter;
pub use drag::Interaction;
pub use result::InputResult;
