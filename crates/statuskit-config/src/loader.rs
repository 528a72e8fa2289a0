use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a placeholder cannot be
    /// expanded, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Load from `path` when it exists, otherwise fall back to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            return Self::load(path);
        }

        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        Ok(Self::default())
    }

    /// Parse configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if placeholder expansion, parsing, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the enabled health path is not an absolute static
    /// route, or if it collides with a built-in route
    pub fn validate(&self) -> anyhow::Result<()> {
        let health = &self.server.health;

        if !health.enabled {
            return Ok(());
        }

        if !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/', got '{}'", health.path);
        }

        if health.path.contains(['{', '}']) {
            anyhow::bail!("server.health.path must be a static route, got '{}'", health.path);
        }

        if let Some(prefix) = self.server.reserved_prefix_of(&health.path) {
            anyhow::bail!(
                "server.health.path '{}' collides with the built-in '{prefix}' routes",
                health.path
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::net::SocketAddr;

    use crate::LogFormat;

    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.listen_address(), SocketAddr::from(([0, 0, 0, 0], 3000)));
        assert!(config.server.health.enabled);
        assert_eq!(config.server.health.path, "/health");
        assert!(config.server.websocket.enabled);
        assert_eq!(config.telemetry.log_filter, "info");
        assert_eq!(config.telemetry.format, LogFormat::Text);
    }

    #[test]
    fn full_config() {
        let raw = r#"
            [server]
            listen_address = "127.0.0.1:8088"

            [server.health]
            path = "/livez"

            [server.websocket]
            enabled = false

            [telemetry]
            log_filter = "debug"
            format = "json"
        "#;

        let config = Config::parse(raw).unwrap();
        assert_eq!(config.server.listen_address(), SocketAddr::from(([127, 0, 0, 1], 8088)));
        assert_eq!(config.server.health.path, "/livez");
        assert!(!config.server.websocket.enabled);
        assert_eq!(config.telemetry.log_filter, "debug");
        assert_eq!(config.telemetry.format, LogFormat::Json);
    }

    #[test]
    fn env_placeholders_are_expanded() {
        temp_env::with_var("STATUSKIT_TEST_LISTEN", Some("127.0.0.1:9999"), || {
            let config = Config::parse("[server]\nlisten_address = \"{{ env.STATUSKIT_TEST_LISTEN }}\"").unwrap();
            assert_eq!(config.server.listen_address(), SocketAddr::from(([127, 0, 0, 1], 9999)));
        });
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Config::parse("[server]\nport = 80").unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn relative_health_path_is_rejected() {
        let err = Config::parse("[server.health]\npath = \"health\"").unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"server.health.path must start with '/', got 'health'");
    }

    #[test]
    fn relative_path_allowed_when_health_disabled() {
        assert!(Config::parse("[server.health]\nenabled = false\npath = \"health\"").is_ok());
    }

    #[test]
    fn health_path_on_builtin_route_is_rejected() {
        let err = Config::parse("[server.health]\npath = \"/catalog\"").unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"server.health.path '/catalog' collides with the built-in '/catalog' routes");

        let err = Config::parse("[server.health]\npath = \"/raise/health\"").unwrap_err();
        assert!(err.to_string().contains("'/raise'"));

        assert!(Config::parse("[server.health]\npath = \"/catalogue\"").is_ok());
    }

    #[test]
    fn websocket_prefix_is_free_when_websocket_disabled() {
        let raw = "[server.health]\npath = \"/ws/close\"";
        assert!(Config::parse(raw).is_err());
        assert!(Config::parse(&format!("{raw}\n[server.websocket]\nenabled = false")).is_ok());
    }

    #[test]
    fn templated_health_path_is_rejected() {
        let err = Config::parse("[server.health]\npath = \"/health/{id}\"").unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"server.health.path must be a static route, got '/health/{id}'");
    }

    #[test]
    fn example_config_parses() {
        temp_env::with_vars_unset(["STATUSKIT_LISTEN_ADDRESS", "RUST_LOG"], || {
            let config = Config::parse(include_str!("../../../statuskit.example.toml")).unwrap();
            assert_eq!(config.server.listen_address(), SocketAddr::from(([0, 0, 0, 0], 3000)));
            assert_eq!(config.telemetry.log_filter, "info,tower_http=debug");
        });
    }

    #[test]
    fn load_reads_file_and_missing_file_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[telemetry]\nlog_filter = \"warn\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.telemetry.log_filter, "warn");

        let missing = file.path().with_extension("does-not-exist");
        let config = Config::load_or_default(&missing).unwrap();
        assert_eq!(config.telemetry.log_filter, "info");
        assert!(Config::load(&missing).is_err());
    }
}
