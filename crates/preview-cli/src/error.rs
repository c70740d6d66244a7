//! Error handling for the preview CLI.
//!
//! `CliError` is the top-level error returned by every command. Failures are
//! either fatal (reported once, exit code 1) or recovered where they happen:
//! a failing external tool during `serve` never reaches this type, the
//! command falls back to the local server instead.
//!
//! # Example
//!
//! ```rust,no_run
//! use preview_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn load_component(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod report;

pub use report::cli_error_to_miette;

use preview_server::ServerError;
use std::path::PathBuf;
use thiserror::Error;

/// Message printed when a command needs the external tool and it is absent.
pub const TOOL_UNAVAILABLE_MESSAGE: &str =
    "ReactStream not found. Only \"analyze\" and \"serve\" commands are supported in fallback mode.";

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (invalid values, unreadable config file)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Preview server failures (missing component, port in use)
    #[error("{0}")]
    Server(#[from] ServerError),

    /// Invalid or missing command-line arguments for a local command
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The analyze transform rejected the file
    #[error("Error analyzing component {}: {error}", .file.display())]
    Transform {
        /// File that failed to transform
        file: PathBuf,
        /// Collected diagnostics
        error: String,
    },

    /// The external tool could not be run
    #[error("Error starting reactstream: {0}")]
    Delegation(String),

    /// A pass-through command was given but no external tool exists
    #[error("{}", TOOL_UNAVAILABLE_MESSAGE)]
    ToolUnavailable,

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicitly requested config file doesn't exist
    #[error("Config file not found: {}\n\nHint: Create a preview.config.json file or omit --config", .0.display())]
    NotFound(PathBuf),

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn "not found" I/O errors into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}
