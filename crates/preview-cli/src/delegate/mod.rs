//! Running the external reactstream tool.
//!
//! Delegation is a single blocking child process with inherited stdio. The
//! outcome is reported as a [`DelegationOutcome`] rather than an error: the
//! caller decides whether a failure is fatal (pass-through commands) or a
//! reason to start the local server (`serve`).

mod discovery;

pub use discovery::{TOOL_NAME, discover};

use std::ffi::OsStr;
use std::path::Path;
use std::process::{ExitCode, Stdio};
use tokio::process::Command;

/// How a delegated reactstream run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelegationOutcome {
    /// The tool exited normally with this code
    Exited(i32),
    /// The tool was terminated by a signal
    Signalled,
    /// The tool could not be started at all
    SpawnFailed(String),
}

impl DelegationOutcome {
    /// Anything but a clean exit means the local server should take over.
    pub fn should_fall_back(&self) -> bool {
        !matches!(self, Self::Exited(0))
    }

    /// Process exit code to propagate for pass-through commands.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Exited(code) => u8::try_from(*code).map_or(ExitCode::FAILURE, ExitCode::from),
            Self::Signalled | Self::SpawnFailed(_) => ExitCode::FAILURE,
        }
    }
}

/// Run `tool` with `args`, forwarding stdin, stdout and stderr, and wait for it.
pub async fn delegate<I, S>(tool: &Path, args: I) -> DelegationOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    tracing::debug!("Running {}", tool.display());

    let status = Command::new(tool)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await;

    match status {
        Ok(status) => match status.code() {
            Some(code) => {
                tracing::debug!("{} exited with code {}", TOOL_NAME, code);
                DelegationOutcome::Exited(code)
            }
            None => {
                tracing::debug!("{} terminated by signal", TOOL_NAME);
                DelegationOutcome::Signalled
            }
        },
        Err(e) => DelegationOutcome::SpawnFailed(e.to_string()),
    }
}
