//! Command implementations for the preview CLI.
//!
//! - [`analyze`] - Transpile a component to check that it is valid
//! - [`serve`] - Delegate to reactstream, falling back to the local server
//! - [`fallback`] - Run the local preview server directly
//! - [`passthrough`] - Forward any other command to reactstream
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod analyze;
pub mod fallback;
pub mod passthrough;
pub mod serve;
pub(crate) mod utils;

pub use analyze::execute as analyze_execute;
pub use fallback::execute as fallback_execute;
pub use passthrough::execute as passthrough_execute;
pub use serve::execute as serve_execute;
