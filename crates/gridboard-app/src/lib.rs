//! GridBoard application shell.
//!
//! Drives a [`gridboard_core::Canvas`] from a recorded event script so the
//! engine can be exercised without a window.

pub mod session;
pub mod shortcuts;

pub use session::{Session, SessionError, SessionEvent, SessionSummary};
pub use shortcuts::ShortcutRegistry;
