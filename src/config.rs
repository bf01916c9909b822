//! Application configuration loaded from environment variables.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Reported Metadata ===
    /// Version string reported by every status query.
    #[serde(default = "default_version")]
    pub app_version: String,

    /// Optional mission line included in the info document.
    #[serde(default)]
    pub app_mission: Option<String>,

    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the pre-built dashboard bundle served at `/`.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_version: default_version(),
            app_mission: None,
            port: default_port(),
            static_dir: default_static_dir(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_version.trim().is_empty() {
            return Err(ConfigError::EmptyVersion);
        }

        if matches!(&self.app_mission, Some(m) if m.trim().is_empty()) {
            return Err(ConfigError::BlankMission);
        }

        if self.port == 0 {
            return Err(ConfigError::ZeroPort);
        }

        Ok(())
    }

    /// The dashboard directory, if it exists.
    pub fn dashboard_dir(&self) -> Option<&Path> {
        let dir = Path::new(&self.static_dir);
        dir.is_dir().then_some(dir)
    }

    /// Mission line with surrounding whitespace removed.
    pub fn mission(&self) -> Option<&str> {
        self.app_mission.as_deref().map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let config = Config::default();
        assert_eq!(config.app_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.rust_log, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn envy_reads_uppercase_keys() {
        let vars = vec![
            ("APP_VERSION".to_string(), "2.3.4".to_string()),
            ("APP_MISSION".to_string(), "  keep the lights on ".to_string()),
            ("PORT".to_string(), "9090".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.app_version, "2.3.4");
        assert_eq!(config.mission(), Some("keep the lights on"));
        assert_eq!(config.port, 9090);
        assert_eq!(config.static_dir, "static");
    }

    #[test]
    fn dashboard_dir_requires_existing_directory() {
        let missing = Config {
            static_dir: "/nonexistent/hello-status-ui".to_string(),
            ..Config::default()
        };
        assert!(missing.dashboard_dir().is_none());

        let present = Config {
            static_dir: std::env::temp_dir().to_string_lossy().into_owned(),
            ..Config::default()
        };
        assert_eq!(present.dashboard_dir(), Some(std::env::temp_dir().as_path()));
    }

    #[test]
    fn validate_rejects_empty_version() {
        let config = Config {
            app_version: "   ".to_string(),
            ..Config::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::EmptyVersion));
    }

    #[test]
    fn validate_rejects_blank_mission() {
        let config = Config {
            app_mission: Some(" ".to_string()),
            ..Config::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::BlankMission));
    }

    #[test]
    fn validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Config::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroPort));
    }
}
