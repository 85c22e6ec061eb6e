//! Observability subsystem.
//!
//! Only structured logging lives here. Library code emits `tracing` events;
//! the binary decides whether a subscriber is installed.

pub mod logging;

pub use logging::init_logging;
