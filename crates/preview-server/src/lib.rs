//! Fallback component preview server.
//!
//! Serves a single component file over HTTP when the full preview tool is not
//! available: a generated HTML page with the escaped source and a small demo
//! widget, the raw source, file metadata, and a polling endpoint for change
//! detection. An optional write endpoint lets an editor push new source.
//!
//! # Architecture
//!
//! - [`source`] - reads and writes the target file, never caching
//! - [`render`] - renders the preview page from an embedded template
//! - [`server`] - axum router and listener
//! - [`config`] - the immutable [`ServerConfig`]
//!
//! # Example
//!
//! ```rust,no_run
//! use preview_server::{PreviewServer, ServerConfig};
//!
//! # async fn run() -> preview_server::Result<()> {
//! let config = ServerConfig::builder()
//!     .component_path("src/Counter.jsx")
//!     .port(3010)
//!     .build();
//!
//! PreviewServer::new(config).start().await
//! # }
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod server;
pub mod source;

pub use config::{DEFAULT_PORT, ServerConfig};
pub use error::{Result, ServerError};
pub use server::PreviewServer;
pub use source::{FileSnapshot, FileStat};
