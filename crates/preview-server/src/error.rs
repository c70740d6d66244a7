//! Error types for the preview server.
//!
//! Startup errors (`ComponentNotFound`, `NotAFile`, `Bind`) are fatal and
//! reported before the server accepts connections. Per-request errors
//! (`Read`, `Write`) are turned into HTTP error responses by the handlers and
//! never take the process down.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while validating, starting or serving a preview.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The target component file does not exist
    #[error("Component file not found: {}", .0.display())]
    ComponentNotFound(PathBuf),

    /// The target path exists but is not a regular file
    #[error("Component path is not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    /// Reading the component or its metadata failed
    #[error("Error reading component {}: {source}", .path.display())]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing new component source failed
    #[error("Error writing component {}: {source}", .path.display())]
    Write {
        /// File being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The listener could not be bound
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        /// Requested socket address
        addr: SocketAddr,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The accept loop terminated with an error
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl ServerError {
    /// Map an I/O error on `path` to a read error, keeping "not found" distinct.
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ServerError::ComponentNotFound(path)
        } else {
            ServerError::Read { path, source }
        }
    }
}

/// Result alias for preview server operations.
pub type Result<T, E = ServerError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_maps_not_found() {
        let err = ServerError::read("src/App.jsx", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(matches!(err, ServerError::ComponentNotFound(_)));
        assert!(err.to_string().contains("src/App.jsx"));
    }

    #[test]
    fn test_read_keeps_other_errors() {
        let err = ServerError::read(
            "src/App.jsx",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(matches!(err, ServerError::Read { .. }));
        assert!(msg.contains("Error reading component"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_bind_error_message() {
        let err = ServerError::Bind {
            addr: "127.0.0.1:3010".parse().unwrap(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "in use"),
        };
        assert_eq!(err.to_string(), "Failed to bind to 127.0.0.1:3010: in use");
    }
}
