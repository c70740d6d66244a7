//! Preview CLI - component preview wrapper with a local fallback server.
//!
//! Commands are forwarded to the external `reactstream` tool when it is
//! installed. Two commands also work without it: `analyze` transpiles a
//! component locally, and `serve` falls back to the preview server from the
//! `preview-server` crate when reactstream is missing or fails.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing with clap
//! - [`commands`] - Individual CLI command implementations
//! - [`config`] - `preview.config.json` / `PREVIEW_*` / CLI layering
//! - [`delegate`] - Finding and running reactstream
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`transform`] - JSX and ES2015 transpilation for `analyze`
//! - [`ui`] - Terminal status messages
//!
//! # Example
//!
//! ```rust
//! use preview_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod delegate;
pub mod error;
pub mod logger;
pub mod transform;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
