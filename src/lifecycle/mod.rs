//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → broadcast to subscribers → monitor loop exits after logging
//! ```
//!
//! # Design Decisions
//! - Shutdown is a message, not an error; the process exits with code 0
//! - The monitor checks for it between checks, never mid-check

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
