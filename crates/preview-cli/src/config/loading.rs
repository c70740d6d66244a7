use crate::cli::ServeArgs;
use crate::config::PreviewConfig;
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when present.
pub const CONFIG_FILE_NAME: &str = "preview.config.json";

/// Prefix of environment variables that override config values (`PREVIEW_PORT`, ...).
pub const ENV_PREFIX: &str = "PREVIEW_";

const ENV_KEYS: &[&str] = &[
    "port",
    "host",
    "allow_write",
    "fallback_html",
    "poll_interval_ms",
    "tool",
];

/// Values given explicitly on the command line.
///
/// Only fields that were actually passed are serialized, so unset flags never
/// shadow the environment or the config file.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_write: Option<bool>,
}

impl From<&ServeArgs> for CliOverrides {
    fn from(args: &ServeArgs) -> Self {
        Self {
            port: args.port,
            allow_write: args.allow_write.then_some(true),
        }
    }
}

impl PreviewConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(overrides: &CliOverrides, config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        match config_path {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                figment = figment.merge(Json::file_exact(path));
            }
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    figment = figment.merge(Json::file_exact(default_path));
                }
            }
        }

        figment = figment.merge(env_provider());

        figment = figment.merge(Serialized::defaults(overrides));

        let config: Self = figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: if e.path.is_empty() {
                "configuration".to_string()
            } else {
                e.path.join(".")
            },
            value: e.to_string(),
            hint: format!(
                "Check {} syntax and {}* environment variables",
                CONFIG_FILE_NAME, ENV_PREFIX
            ),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Look up only the configured reactstream path.
    ///
    /// `PREVIEW_TOOL` wins over `tool` in preview.config.json. Unrelated bad
    /// values (a malformed file, a non-numeric `PREVIEW_PORT`) are ignored so
    /// forwarded commands never fail on settings they do not use.
    pub fn load_tool() -> Option<PathBuf> {
        if let Ok(tool) = Figment::from(env_provider()).extract_inner::<PathBuf>("tool") {
            return Some(tool);
        }

        let config_file = Path::new(CONFIG_FILE_NAME);
        if !config_file.is_file() {
            return None;
        }

        match Figment::from(Json::file_exact(config_file)).extract_inner::<PathBuf>("tool") {
            Ok(tool) => Some(tool),
            Err(e) if e.missing() => None,
            Err(e) => {
                tracing::debug!("Ignoring {}: {}", CONFIG_FILE_NAME, e);
                None
            }
        }
    }
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX)
        .lowercase(false)
        .only(ENV_KEYS)
        .map(|key| env_key_to_field(key.as_str()).into())
}

/// `ALLOW_WRITE` -> `allowWrite`
fn env_key_to_field(key: &str) -> String {
    let mut field = String::with_capacity(key.len());
    let mut upper_next = false;

    for c in key.chars() {
        if c == '_' {
            upper_next = !field.is_empty();
        } else if upper_next {
            field.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            field.push(c.to_ascii_lowercase());
        }
    }

    field
}
