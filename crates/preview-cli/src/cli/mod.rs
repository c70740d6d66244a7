//! Command-line interface definition for the preview CLI.
//!
//! # Command Structure
//!
//! - `preview analyze <FILE>` - transpile a component to check that it is valid
//! - `preview serve <COMPONENT>` - run reactstream, falling back to the local server
//! - `preview fallback <COMPONENT>` - run the local preview server directly
//! - `preview <anything else>` - passed verbatim to reactstream, including a
//!   bare `preview` and unknown leading flags

mod commands;
mod parse;
mod validation;

use clap::Parser;

pub use commands::{AnalyzeArgs, Command, ServeArgs};
pub use parse::{Parsed, parse_from};
pub use validation::parse_port;

/// Preview - component preview wrapper with a local fallback server
#[derive(Parser, Debug)]
#[command(
    name = "preview",
    version,
    about = "Preview React components with reactstream, or a local fallback server",
    long_about = "Forwards commands to the reactstream preview tool when it is installed.\n\
                  When reactstream is missing or fails, `serve` starts a small local server\n\
                  that shows the component source and a demo widget instead."
)]
pub struct Cli {
    /// Enable verbose output
    ///
    /// Turns on debug logging and, for `analyze`, prints the beginning of the
    /// transpiled code.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute; none forwards an empty command to reactstream
    #[command(subcommand)]
    pub command: Option<Command>,
}
