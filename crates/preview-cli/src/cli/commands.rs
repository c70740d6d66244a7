use clap::{Args, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::cli::validation::parse_port;

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Transpile a component to check that it parses and transforms
    ///
    /// Runs the file through the JSX and ES2015 transforms. With --verbose,
    /// prints the first 500 characters of the result.
    Analyze(AnalyzeArgs),

    /// Start a development server for a component
    ///
    /// Delegates to reactstream when it is installed. If reactstream is
    /// missing, exits with a non-zero code, or cannot be started, the local
    /// fallback preview server is started instead.
    Serve(ServeArgs),

    /// Start the local fallback preview server directly
    ///
    /// Skips reactstream entirely.
    Fallback(ServeArgs),

    /// Any other command is passed verbatim to reactstream
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Component file to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for the serve and fallback commands
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Component file to preview
    #[arg(value_name = "COMPONENT")]
    pub component: PathBuf,

    /// Port for the preview server
    ///
    /// Defaults to PREVIEW_PORT, then to 3010.
    #[arg(short, long, value_parser = parse_port, value_name = "PORT")]
    pub port: Option<u16>,

    /// Enable the write endpoint (POST /api/component-source)
    #[arg(long)]
    pub allow_write: bool,

    /// Path to preview.config.json
    ///
    /// If not provided, preview.config.json in the current directory is used
    /// when present.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
