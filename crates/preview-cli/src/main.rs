//! Preview CLI entry point.
//!
//! Parses arguments, initializes logging and colors, dispatches the command
//! and turns the outcome into a process exit code.

use miette::Result;
use preview_cli::{CliError, cli, commands, error, logger, ui};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = match cli::parse_from(std::env::args_os()) {
        Ok(cli::Parsed::Run(args)) => args,
        Ok(cli::Parsed::Print(output)) => {
            output
                .print()
                .map_err(|e| error::cli_error_to_miette(CliError::Io(e)))?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => return Err(error::cli_error_to_miette(e)),
    };

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        Some(cli::Command::Analyze(analyze_args)) => {
            commands::analyze_execute(analyze_args, args.verbose)
                .await
                .map(|()| ExitCode::SUCCESS)
        }
        Some(cli::Command::Serve(serve_args)) => commands::serve_execute(serve_args)
            .await
            .map(|()| ExitCode::SUCCESS),
        Some(cli::Command::Fallback(serve_args)) => commands::fallback_execute(serve_args)
            .await
            .map(|()| ExitCode::SUCCESS),
        Some(cli::Command::External(external_args)) => {
            commands::passthrough_execute(external_args).await
        }
        None => commands::passthrough_execute(Vec::new()).await,
    };

    result.map_err(error::cli_error_to_miette)
}
