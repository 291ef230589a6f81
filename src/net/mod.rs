//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! configured socket path
//!     → listener.rs (stale file removal, bind)
//!     → UnixListener handed to the HTTP server
//! ```

pub mod listener;

pub use listener::{bind_socket, remove_stale_socket};
