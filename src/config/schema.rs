//! Configuration schema types for `beauty.toml`
//!
//! Defines the structure and validation rules for the server configuration.

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::generator::ServerInfo;

/// Log levels accepted in `[logging] level`
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// HTTP listener and service identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to bind
    #[serde(default = "default_port")]
    pub port: u16,
    /// Display name reported by /health and in generated palettes
    #[serde(default = "default_name")]
    pub name: String,
    /// Public URL advertised on the landing page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), name: default_name(), public_url: None }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn info(&self) -> ServerInfo {
        ServerInfo {
            name: self.name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            url: self.public_url.clone(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_name() -> String {
    "Beauty Palette Server".to_string()
}

/// Logging output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Maximum level: error, warn, info, debug or trace
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

impl LoggingConfig {
    /// Parsed level, or `None` if `level` is not one of [`LOG_LEVELS`].
    pub fn max_level(&self) -> Option<Level> {
        match self.level.to_lowercase().as_str() {
            "error" => Some(Level::ERROR),
            "warn" => Some(Level::WARN),
            "info" => Some(Level::INFO),
            "debug" => Some(Level::DEBUG),
            "trace" => Some(Level::TRACE),
            _ => None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Root of `beauty.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeautyConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// A single validation problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "server.port")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "beauty.toml: '{}' {}", self.field, self.message)
    }
}

impl BeautyConfig {
    /// Validate the configuration and return every problem found
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.server.host.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "server.host".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        if self.server.port == 0 {
            errors.push(ConfigValidationError {
                field: "server.port".to_string(),
                message: "must be between 1 and 65535".to_string(),
            });
        }

        if self.server.name.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "server.name".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        if self.logging.max_level().is_none() {
            errors.push(ConfigValidationError {
                field: "logging.level".to_string(),
                message: format!("must be one of: {}", LOG_LEVELS.join(", ")),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: BeautyConfig = toml::from_str("").unwrap();
        assert_eq!(config, BeautyConfig::default());
        assert_eq!(config.server.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.logging.max_level(), Some(Level::INFO));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_partial_sections() {
        let config: BeautyConfig = toml::from_str(
            r#"
            [server]
            port = 9090
            public_url = "https://palettes.example.com"

            [logging]
            level = "DEBUG"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.info().url.as_deref(), Some("https://palettes.example.com"));
        assert_eq!(config.logging.max_level(), Some(Level::DEBUG));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = BeautyConfig::default();
        config.server.port = 0;
        config.server.host = " ".to_string();
        config.logging.level = "loud".to_string();

        let errors = config.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["server.host", "server.port", "logging.level"]);
        assert_eq!(
            errors[2].to_string(),
            "beauty.toml: 'logging.level' must be one of: error, warn, info, debug, trace"
        );
    }

    #[test]
    fn test_unknown_field_type_fails_to_parse() {
        let result: Result<BeautyConfig, _> = toml::from_str("[server]\nport = \"eighty\"");
        assert!(result.is_err());
    }
}
