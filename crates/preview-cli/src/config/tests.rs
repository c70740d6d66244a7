#[cfg(test)]
mod tests {
    use crate::config::loading::CliOverrides;
    use crate::config::*;
    use figment::Jail;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = PreviewConfig::load(&CliOverrides::default(), None)
                .map_err(|e| e.to_string())?;

            assert_eq!(config.port, 3010);
            assert_eq!(config.host.to_string(), "127.0.0.1");
            assert!(!config.allow_write);
            assert_eq!(
                config.fallback_html,
                PathBuf::from("public").join("preview-fallback.html")
            );
            assert!(config.tool.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_env_supplies_port() {
        Jail::expect_with(|jail| {
            jail.set_env("PREVIEW_PORT", "4321");
            jail.set_env("PREVIEW_ALLOW_WRITE", "true");

            let config = PreviewConfig::load(&CliOverrides::default(), None)
                .map_err(|e| e.to_string())?;
            assert_eq!(config.port, 4321);
            assert!(config.allow_write);
            Ok(())
        });
    }

    #[test]
    fn test_cli_overrides_env_and_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE_NAME, r#"{ "port": 5000, "pollIntervalMs": 2500 }"#)?;
            jail.set_env("PREVIEW_PORT", "4321");

            let overrides = CliOverrides {
                port: Some(3999),
                allow_write: None,
            };
            let config = PreviewConfig::load(&overrides, None).map_err(|e| e.to_string())?;
            assert_eq!(config.port, 3999);
            assert_eq!(config.poll_interval_ms, Some(2500));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE_NAME, r#"{ "port": 5000, "tool": "bin/rs" }"#)?;
            jail.set_env("PREVIEW_PORT", "4321");

            let config = PreviewConfig::load(&CliOverrides::default(), None)
                .map_err(|e| e.to_string())?;
            assert_eq!(config.port, 4321);
            assert_eq!(config.tool.as_deref(), Some(Path::new("bin/rs")));
            Ok(())
        });
    }

    #[test]
    fn test_unrelated_env_is_ignored() {
        Jail::expect_with(|jail| {
            jail.set_env("PREVIEW_SOMETHING_ELSE", "whatever");

            let config = PreviewConfig::load(&CliOverrides::default(), None)
                .map_err(|e| e.to_string())?;
            assert_eq!(config, PreviewConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_invalid_env_port() {
        Jail::expect_with(|jail| {
            jail.set_env("PREVIEW_PORT", "not-a-port");

            let err = PreviewConfig::load(&CliOverrides::default(), None).unwrap_err();
            assert!(err.to_string().contains("Invalid value"));
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_config_file() {
        Jail::expect_with(|_jail| {
            let err = PreviewConfig::load(
                &CliOverrides::default(),
                Some(Path::new("missing.config.json")),
            )
            .unwrap_err();
            assert!(err.to_string().contains("Config file not found"));
            Ok(())
        });
    }

    #[test]
    fn test_validation() {
        assert!(PreviewConfig::default().validate().is_ok());

        assert!(PreviewConfig {
            port: 0,
            ..PreviewConfig::default()
        }
        .validate()
        .is_err());

        assert!(PreviewConfig {
            poll_interval_ms: Some(0),
            ..PreviewConfig::default()
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_to_server_config() {
        let config = PreviewConfig {
            port: 4000,
            allow_write: true,
            poll_interval_ms: Some(750),
            ..PreviewConfig::default()
        };

        let server = config.to_server_config("src/Counter.jsx");
        assert_eq!(server.component_path, PathBuf::from("src/Counter.jsx"));
        assert_eq!(server.port, 4000);
        assert!(server.allow_write);
        assert_eq!(server.resolved_poll_interval(), Duration::from_millis(750));
        assert_eq!(
            server.fallback_html,
            Some(PathBuf::from("public").join("preview-fallback.html"))
        );
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let json = serde_json::to_value(PreviewConfig {
            poll_interval_ms: Some(1000),
            ..PreviewConfig::default()
        })
        .unwrap();

        assert!(json.get("allowWrite").is_some());
        assert!(json.get("pollIntervalMs").is_some());
        assert!(json.get("allow_write").is_none());
        assert!(json.get("tool").is_none());
    }

    #[test]
    fn test_json_schema_lists_fields() {
        let schema = PreviewConfig::json_schema();
        let properties = &schema["properties"];
        assert!(properties.get("port").is_some());
        assert!(properties.get("allowWrite").is_some());
        assert!(properties.get("fallbackHtml").is_some());
    }

    #[test]
    fn test_load_tool_from_env_ignores_unrelated_values() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE_NAME, "{ not json")?;
            jail.set_env("PREVIEW_PORT", "not-a-port");
            jail.set_env("PREVIEW_TOOL", "bin/reactstream");

            assert_eq!(
                PreviewConfig::load_tool(),
                Some(PathBuf::from("bin/reactstream"))
            );
            Ok(())
        });
    }

    #[test]
    fn test_load_tool_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE_NAME, r#"{ "port": 0, "tool": "bin/rs" }"#)?;

            assert_eq!(PreviewConfig::load_tool(), Some(PathBuf::from("bin/rs")));
            Ok(())
        });
    }

    #[test]
    fn test_load_tool_without_setting() {
        Jail::expect_with(|jail| {
            assert_eq!(PreviewConfig::load_tool(), None);

            jail.create_file(CONFIG_FILE_NAME, "{ not json")?;
            assert_eq!(PreviewConfig::load_tool(), None);
            Ok(())
        });
    }
}
