//! Unix domain socket listener.
//!
//! # Responsibilities
//! - Clear a socket file left behind by a previous run
//! - Bind the listener at the configured path
//! - Report bind failures with the offending path
//!
//! The socket file is deliberately left on disk when the process exits. The
//! next startup removes it before binding, which also covers crashes.

use std::io;
use std::path::Path;

use tokio::net::UnixListener;

use crate::error::{GatewayError, Result};

/// Remove whatever is left at `path` from an earlier run.
///
/// A missing file is not an error. Other failures are logged and left for
/// the subsequent bind to report. Directories are never removed.
pub fn remove_stale_socket(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "Removed stale socket file"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(
            path = %path.display(),
            error = %e,
            "Could not remove stale socket file"
        ),
    }
}

/// Bind a listener at `path`, clearing any stale socket file first.
///
/// Must be called from within a Tokio runtime.
pub fn bind_socket(path: &Path) -> Result<UnixListener> {
    remove_stale_socket(path);

    let listener = UnixListener::bind(path).map_err(|source| GatewayError::Bind {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "Listener bound");
    Ok(listener)
}
