//! Fallback command implementation.
//!
//! Runs the local preview server without looking for reactstream.

use crate::cli::ServeArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the fallback command.
///
/// # Errors
///
/// Returns errors for invalid configuration, a missing component or a port
/// that cannot be bound.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = utils::load_serve_config(&args)?;

    ui::info(&format!(
        "Starting fallback preview server for {} on port {}...",
        args.component.display(),
        config.port
    ));

    utils::run_fallback_server(&config, &args).await
}
