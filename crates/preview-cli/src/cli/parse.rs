use crate::cli::{Cli, Command};
use crate::error::{CliError, Result};
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;

/// Subcommands handled locally; everything else belongs to reactstream.
const BUILTIN_COMMANDS: &[&str] = &["analyze", "serve", "fallback", "help"];

/// Result of parsing the command line.
#[derive(Debug)]
pub enum Parsed {
    /// Run the parsed command
    Run(Cli),
    /// Help or version output was requested; print it and exit successfully
    Print(clap::Error),
}

/// Parse `args` (including the program name).
///
/// Invalid arguments to the local commands become
/// [`CliError::InvalidArgument`] (exit code 1). Unknown flags that are not
/// aimed at a local command are forwarded to reactstream verbatim.
pub fn parse_from<I, T>(args: I) -> Result<Parsed>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    match Cli::try_parse_from(&args) {
        Ok(cli) => Ok(Parsed::Run(cli)),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(Parsed::Print(e)),
            ErrorKind::UnknownArgument if !targets_builtin(&args) => {
                Ok(Parsed::Run(Cli::pass_through(args.into_iter().skip(1).collect())))
            }
            _ => Err(CliError::InvalidArgument(clap_message(&e))),
        },
    }
}

impl Cli {
    /// Invocation that forwards `args` untouched.
    fn pass_through(args: Vec<OsString>) -> Self {
        Self {
            verbose: false,
            quiet: false,
            no_color: false,
            command: Some(Command::External(args)),
        }
    }
}

/// Whether the first positional argument names a local subcommand.
fn targets_builtin(args: &[OsString]) -> bool {
    args.iter()
        .skip(1)
        .filter_map(|arg| arg.to_str())
        .find(|arg| !arg.starts_with('-'))
        .is_some_and(|arg| BUILTIN_COMMANDS.contains(&arg))
}

/// clap's rendered message without its `error: ` prefix and usage footer.
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let message = rendered
        .split("\n\nUsage:")
        .next()
        .unwrap_or(&rendered)
        .trim();
    message
        .strip_prefix("error: ")
        .unwrap_or(message)
        .to_string()
}
