//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use miette::Report;
use preview_server::ServerError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Server(e) => server_error_to_miette(e),
        CliError::Config(ConfigError::InvalidValue { field, value, hint }) => miette::miette!(
            help = hint,
            "Invalid value for '{}': {}",
            field,
            value
        ),
        CliError::InvalidArgument(message) => miette::miette!(
            help = "Run `preview --help` for usage",
            "Invalid argument: {}",
            message
        ),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Check the path relative to the current directory",
            "File not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ServerError to miette Report
pub fn server_error_to_miette(err: ServerError) -> Report {
    match err {
        ServerError::Bind { addr, source } => miette::miette!(
            help = "Pick another port with --port or the PREVIEW_PORT environment variable",
            "Failed to bind to {}: {}",
            addr,
            source
        ),
        _ => miette::miette!("{}", err),
    }
}
