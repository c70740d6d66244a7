//! Configuration for the preview CLI with multi-source loading.
//!
//! Merges settings from CLI args, environment variables and an optional
//! `preview.config.json`. Priority: CLI > Environment > File > Defaults.
//!
//! The loaded value is built once per invocation and converted into the
//! immutable [`ServerConfig`] handed to the preview server.

mod defaults;
mod loading;
mod tests;

use crate::error::{ConfigError, Result};
use preview_server::ServerConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

pub use defaults::*;
pub use loading::{CONFIG_FILE_NAME, CliOverrides, ENV_PREFIX};

/// Preview configuration - loaded from preview.config.json, `PREVIEW_*` or CLI args.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewConfig {
    /// Port for the preview server
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface for the preview server
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Enable the write endpoint
    #[serde(default)]
    pub allow_write: bool,

    /// Static HTML page served verbatim at `/` when it exists
    #[serde(default = "default_fallback_html")]
    pub fallback_html: PathBuf,

    /// Client polling period in milliseconds (default depends on allowWrite)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_interval_ms: Option<u64>,

    /// Explicit path to the reactstream executable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<PathBuf>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            allow_write: false,
            fallback_html: default_fallback_html(),
            poll_interval_ms: None,
            tool: None,
        }
    }
}

impl PreviewConfig {
    /// Validate values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port".to_string(),
                value: self.port.to_string(),
                hint: "Use a port between 1 and 65535".to_string(),
            }
            .into());
        }

        if self.poll_interval_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "pollIntervalMs".to_string(),
                value: "0".to_string(),
                hint: "Use a positive number of milliseconds or remove the field".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Build the immutable server configuration for `component_path`.
    pub fn to_server_config(&self, component_path: impl Into<PathBuf>) -> ServerConfig {
        ServerConfig::builder()
            .component_path(component_path)
            .host(self.host)
            .port(self.port)
            .allow_write(self.allow_write)
            .fallback_html(self.fallback_html.clone())
            .maybe_poll_interval(self.poll_interval_ms.map(Duration::from_millis))
            .build()
    }

    /// Generate JSON Schema for preview.config.json.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(PreviewConfig);
        serde_json::to_value(schema).unwrap_or_default()
    }
}
