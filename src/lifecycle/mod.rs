//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse CLI → Load config → Read credential → Bind socket → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Let in-flight requests finish
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger shutdown
//! ```
//!
//! The socket file is not removed on the way out; the next startup clears it.

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::wait_for_signal;
