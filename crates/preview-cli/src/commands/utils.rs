//! Helpers shared by the commands.

use crate::cli::ServeArgs;
use crate::config::{CliOverrides, PreviewConfig};
use crate::error::Result;
use preview_server::PreviewServer;
use std::path::PathBuf;

/// Current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

/// Load the configuration for a `serve`/`fallback` invocation.
pub fn load_serve_config(args: &ServeArgs) -> Result<PreviewConfig> {
    PreviewConfig::load(&CliOverrides::from(args), args.config.as_deref())
}

/// Run the local preview server until the process is terminated.
pub async fn run_fallback_server(config: &PreviewConfig, args: &ServeArgs) -> Result<()> {
    let server = PreviewServer::new(config.to_server_config(&args.component));
    server.start().await?;
    Ok(())
}
