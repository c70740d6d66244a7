//! Pass-through of unrecognized commands to reactstream.

use crate::commands::utils;
use crate::config::PreviewConfig;
use crate::delegate::{self, DelegationOutcome};
use crate::error::{CliError, Result};
use std::ffi::OsString;
use std::process::ExitCode;

/// Execute an unrecognized command by forwarding `args` verbatim.
///
/// The child's exit code becomes the CLI's exit code. Only the `tool` setting
/// is read from the configuration.
///
/// # Errors
///
/// Returns [`CliError::ToolUnavailable`] when reactstream cannot be found and
/// [`CliError::Delegation`] when it cannot be started.
pub async fn execute(args: Vec<OsString>) -> Result<ExitCode> {
    let explicit_tool = PreviewConfig::load_tool();
    let cwd = utils::get_cwd()?;

    let tool =
        delegate::discover(explicit_tool.as_deref(), &cwd).ok_or(CliError::ToolUnavailable)?;

    match delegate::delegate(&tool, &args).await {
        DelegationOutcome::SpawnFailed(message) => Err(CliError::Delegation(message)),
        outcome => Ok(outcome.exit_code()),
    }
}
