//! Logging infrastructure for the preview CLI.
//!
//! Structured logging on top of `tracing`. The preview server crate logs its
//! startup banner and request failures through the same subscriber.
//!
//! # Example
//!
//! ```rust,no_run
//! use preview_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Starting preview");
//! debug!("Resolved component: {}", "src/Counter.jsx");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "preview=debug,preview_cli=debug,preview_server=debug";
const QUIET_FILTER: &str = "preview=error,preview_cli=error,preview_server=error";
const DEFAULT_FILTER: &str = "preview=info,preview_cli=info,preview_server=info";

/// Initialize the tracing subscriber.
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for preview crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for preview crates
///
/// Must be called once, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_ansi(!no_color && should_use_colors())
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Check if colored output should be enabled.
///
/// - `NO_COLOR`: if set, disables colors
/// - `FORCE_COLOR`: if set, forces colors even in non-TTY
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
