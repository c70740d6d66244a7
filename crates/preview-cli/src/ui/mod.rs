//! Terminal status messages.
//!
//! All status output goes to stderr so stdout stays free for command output
//! (such as the transpiled code printed by `analyze --verbose`).
//!
//! ```no_run
//! use preview_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Starting development server...");
//! ui::success("Analysis completed successfully!");
//! ```

mod messages;

pub use messages::{error, info, success, warning};

use std::sync::atomic::{AtomicBool, Ordering};

static COLORS_ENABLED: AtomicBool = AtomicBool::new(false);

/// Decide once whether status messages use color.
///
/// `--no-color` always wins; otherwise `NO_COLOR`, `FORCE_COLOR` and terminal
/// detection decide.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && crate::logger::should_use_colors();
    COLORS_ENABLED.store(enabled, Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS_ENABLED.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_flag_disables_colors() {
        init_colors(true);
        assert!(!colors_enabled());
    }
}
