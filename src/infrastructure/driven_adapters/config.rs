//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// How error outcomes are reflected in the HTTP status line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorStatusPolicy {
    /// Every response is 200; the error is only visible in the body
    #[default]
    Legacy,
    /// VALIDATION_ERROR -> 400, RIDES_NOT_FOUND_ERROR -> 404, SERVER_ERROR -> 500
    Strict,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub error_status: ErrorStatusPolicy,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_filter() -> String {
    "ride_booking=debug,tower_http=debug".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            format: LogFormat::default(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config/default` is missing or a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., APP__SERVER__PORT)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Build configuration from an inline TOML document
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document is not valid TOML or misses required keys.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[server]
host = "127.0.0.1"
port = 8010

[database]
url = "sqlite::memory:"
max_connections = 5
min_connections = 1
"#;

    #[test]
    fn test_defaults_to_legacy_status_and_pretty_logs() {
        let config = AppConfig::from_toml(MINIMAL).unwrap();

        assert_eq!(config.server.port, 8010);
        assert_eq!(config.server.error_status, ErrorStatusPolicy::Legacy);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.logging.filter, "ride_booking=debug,tower_http=debug");
    }

    #[test]
    fn test_parses_strict_status_and_json_logs() {
        let document = format!(
            "{MINIMAL}\n[logging]\nformat = \"json\"\nfilter = \"info\"\n"
        )
        .replace("port = 8010", "port = 9000\nerror_status = \"strict\"");
        let config = AppConfig::from_toml(&document).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.error_status, ErrorStatusPolicy::Strict);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_rejects_unknown_status_policy() {
        let document = MINIMAL.replace("port = 8010", "port = 8010\nerror_status = \"loose\"");
        assert!(AppConfig::from_toml(&document).is_err());
    }
}
