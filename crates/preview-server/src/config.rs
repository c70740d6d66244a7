//! Preview server configuration.
//!
//! One immutable value describes a server instance. The read-only and
//! read/write flavours differ only in `allow_write`.

use crate::error::Result;
use bon::Builder;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Port used when neither the command line nor the environment names one.
pub const DEFAULT_PORT: u16 = 3010;

/// Client polling period of the read-only server.
pub const READ_ONLY_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Client polling period when the write endpoint is enabled.
pub const READ_WRITE_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Preview server configuration.
///
/// ```
/// use preview_server::ServerConfig;
///
/// let config = ServerConfig::builder()
///     .component_path("src/Counter.jsx")
///     .port(4000)
///     .allow_write(true)
///     .build();
///
/// assert_eq!(config.server_url(), "http://127.0.0.1:4000");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ServerConfig {
    /// The file being previewed
    #[builder(into)]
    pub component_path: PathBuf,

    /// Interface to listen on
    #[builder(default = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[builder(default = DEFAULT_PORT)]
    pub port: u16,

    /// Enable `POST /api/component-source` and redirect unknown routes to `/`
    #[builder(default)]
    pub allow_write: bool,

    /// Static HTML page served verbatim at `/` when it exists
    #[builder(into)]
    pub fallback_html: Option<PathBuf>,

    /// Override for the client polling period
    pub poll_interval: Option<Duration>,
}

impl ServerConfig {
    /// Check that the component file exists and is a regular file.
    ///
    /// # Errors
    ///
    /// `ComponentNotFound` or `NotAFile`; both are fatal at startup.
    pub fn validate(&self) -> Result<()> {
        crate::source::ensure_component(&self.component_path)
    }

    /// Socket address the server binds to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Base URL of the running server.
    pub fn server_url(&self) -> String {
        format!("http://{}", self.addr())
    }

    /// Polling period embedded in the generated page.
    pub fn resolved_poll_interval(&self) -> Duration {
        self.poll_interval.unwrap_or(if self.allow_write {
            READ_WRITE_POLL_INTERVAL
        } else {
            READ_ONLY_POLL_INTERVAL
        })
    }

    /// The static fallback page, if configured and currently present on disk.
    pub fn existing_fallback_html(&self) -> Option<&Path> {
        self.fallback_html
            .as_deref()
            .filter(|path| path.is_file())
    }

    /// Whether the static fallback page currently exists.
    pub fn fallback_html_exists(&self) -> bool {
        self.existing_fallback_html().is_some()
    }
}
