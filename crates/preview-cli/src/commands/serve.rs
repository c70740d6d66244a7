//! Serve command implementation.
//!
//! Delegation first, local server second: reactstream gets the first chance
//! to serve the component, and any outcome other than a clean exit hands the
//! component to the local preview server on the same port.

use crate::cli::ServeArgs;
use crate::commands::utils;
use crate::config::PreviewConfig;
use crate::delegate::{self, DelegationOutcome};
use crate::error::Result;
use crate::ui;
use std::ffi::OsString;

/// Execute the serve command.
///
/// # Steps
///
/// 1. Load configuration (CLI > `PREVIEW_*` > preview.config.json > defaults)
/// 2. Run `reactstream serve <component> --port=<port>` if it can be found
/// 3. Start the local preview server if reactstream is missing, fails to
///    start, or exits with anything but 0
///
/// # Errors
///
/// Only local server failures are returned; delegation failures are recovered
/// by falling back.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = utils::load_serve_config(&args)?;

    ui::info(&format!(
        "Starting development server for {} on port {}...",
        args.component.display(),
        config.port
    ));

    let cwd = utils::get_cwd()?;
    let Some(tool) = delegate::discover(config.tool.as_deref(), &cwd) else {
        ui::warning("ReactStream not found, using fallback preview server...");
        return utils::run_fallback_server(&config, &args).await;
    };

    let outcome = delegate::delegate(&tool, delegation_args(&args, &config)).await;
    report_outcome(&outcome);

    if !outcome.should_fall_back() {
        return Ok(());
    }

    ui::info("Falling back to simple preview server...");
    utils::run_fallback_server(&config, &args).await
}

/// Arguments forwarded to reactstream.
fn delegation_args(args: &ServeArgs, config: &PreviewConfig) -> Vec<OsString> {
    vec![
        OsString::from("serve"),
        args.component.clone().into_os_string(),
        OsString::from(format!("--port={}", config.port)),
    ]
}

fn report_outcome(outcome: &DelegationOutcome) {
    match outcome {
        DelegationOutcome::Exited(code) => {
            ui::info(&format!("Development server exited with code {}", code));
        }
        DelegationOutcome::Signalled => {
            ui::warning("Development server was terminated by a signal");
        }
        DelegationOutcome::SpawnFailed(message) => {
            ui::error(&format!("Error starting reactstream: {}", message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_delegation_args() {
        let args = ServeArgs {
            component: PathBuf::from("src/Counter.jsx"),
            port: None,
            allow_write: true,
            config: None,
        };
        let config = PreviewConfig {
            port: 4123,
            ..PreviewConfig::default()
        };

        assert_eq!(
            delegation_args(&args, &config),
            vec![
                OsString::from("serve"),
                OsString::from("src/Counter.jsx"),
                OsString::from("--port=4123"),
            ]
        );
    }
}
