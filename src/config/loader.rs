//! Configuration loading and discovery for `beauty.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::BeautyConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for during discovery
pub const CONFIG_FILE: &str = "beauty.toml";

/// Environment variable overriding `server.port`
pub const PORT_ENV: &str = "PORT";

/// Environment variable overriding `logging.level`
pub const LOG_ENV: &str = "BEAUTY_LOG";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse beauty.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// An environment override holds a value of the wrong type
    #[error("Invalid value for {var}: '{value}'")]
    Env { var: &'static str, value: String },
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override bind interface
    pub host: Option<String>,
    /// Override bind port
    pub port: Option<u16>,
    /// Override log level
    pub log_level: Option<String>,
}

/// Find beauty.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for beauty.toml
/// 2. Check XDG_CONFIG_HOME/beauty-palette/beauty.toml (or ~/.config/beauty-palette/beauty.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find beauty.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("beauty-palette").join(CONFIG_FILE);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find beauty.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a beauty.toml file.
///
/// If a path is provided, loads from that file and fails if it is missing.
/// Otherwise uses [`find_config`], falling back to [`default_config`] when
/// nothing is found.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("deploy/beauty.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<BeautyConfig, ConfigError> {
    let config = read_config(path)?;
    check(&config)?;
    Ok(config)
}

/// Parse the file (or defaults) without validating it.
fn read_config(path: Option<&Path>) -> Result<BeautyConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            let contents = fs::read_to_string(&p)?;
            Ok(toml::from_str(&contents)?)
        }
        None => Ok(default_config()),
    }
}

fn check(config: &BeautyConfig) -> Result<(), ConfigError> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(())
}

/// Configuration used when no beauty.toml is found.
pub fn default_config() -> BeautyConfig {
    BeautyConfig::default()
}

/// Apply `PORT` and `BEAUTY_LOG` from the process environment.
pub fn apply_env_overrides(config: &mut BeautyConfig) -> Result<(), ConfigError> {
    apply_env_from(config, |var| env::var(var).ok())
}

/// Apply environment overrides read through `lookup`.
///
/// Empty values are ignored.
pub fn apply_env_from<F>(config: &mut BeautyConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

    if let Some(port) = non_empty(PORT_ENV) {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::Env { var: PORT_ENV, value: port.clone() })?;
    }

    if let Some(level) = non_empty(LOG_ENV) {
        config.logging.level = level.trim().to_string();
    }

    Ok(())
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file and environment values.
pub fn merge_cli_overrides(config: &mut BeautyConfig, overrides: &CliOverrides) {
    if let Some(ref host) = overrides.host {
        config.server.host = host.clone();
    }

    if let Some(port) = overrides.port {
        config.server.port = port;
    }

    if let Some(ref level) = overrides.log_level {
        config.logging.level = level.clone();
    }
}

/// Resolve the effective configuration: file (or defaults), then environment,
/// then CLI overrides, validated once at the end.
///
/// A file value that is invalid on its own is accepted when an override
/// replaces it.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<BeautyConfig, ConfigError> {
    let mut config = read_config(path)?;
    apply_env_overrides(&mut config)?;
    merge_cli_overrides(&mut config, overrides);
    check(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(contents.as_bytes())
            .expect("should write config content");
        config_path
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[server]\nport = 9000");

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[server]\nport = 9000");

        let subdir = temp.path().join("deploy").join("staging");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp = TempDir::new().expect("should create temp dir");
        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(
            temp.path(),
            r#"
[server]
host = "127.0.0.1"
port = 9001
name = "Studio Palettes"

[logging]
level = "warn"
"#,
        );

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.server.bind_address(), "127.0.0.1:9001");
        assert_eq!(config.server.name, "Studio Palettes");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_config_missing_explicit_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("nonexistent.toml");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "this is not valid toml {{{");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[server]\nport = 0\n");

        let err = load_config(Some(&config_path)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("'server.port' must be between 1 and 65535"));
    }

    #[test]
    fn test_apply_env_from() {
        let mut config = default_config();
        apply_env_from(&mut config, |var| match var {
            "PORT" => Some(" 8123 ".to_string()),
            "BEAUTY_LOG" => Some("debug".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.server.port, 8123);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_apply_env_ignores_empty_values() {
        let mut config = default_config();
        apply_env_from(&mut config, |_| Some(String::new())).unwrap();
        assert_eq!(config, default_config());
    }

    #[test]
    fn test_apply_env_rejects_bad_port() {
        let mut config = default_config();
        let err = apply_env_from(&mut config, |var| {
            (var == "PORT").then(|| "eighty".to_string())
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PORT: 'eighty'");
    }

    #[test]
    fn test_merge_cli_overrides_port() {
        let mut config = default_config();
        let overrides = CliOverrides { port: Some(3000), ..Default::default() };

        merge_cli_overrides(&mut config, &overrides);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_merge_cli_overrides_multiple() {
        let mut config = default_config();
        let overrides = CliOverrides {
            host: Some("127.0.0.1".to_string()),
            port: Some(8080),
            log_level: Some("trace".to_string()),
        };

        merge_cli_overrides(&mut config, &overrides);
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    #[serial]
    fn test_resolve_config_precedence() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[server]\nport = 7000\nhost = \"localhost\"");

        env::set_var(PORT_ENV, "7100");
        env::remove_var(LOG_ENV);
        let from_env = resolve_config(Some(&config_path), &CliOverrides::default());
        let from_cli = resolve_config(
            Some(&config_path),
            &CliOverrides { port: Some(7200), ..Default::default() },
        );
        env::remove_var(PORT_ENV);

        let from_env = from_env.expect("should resolve");
        assert_eq!(from_env.server.port, 7100);
        assert_eq!(from_env.server.host, "localhost");
        assert_eq!(from_cli.expect("should resolve").server.port, 7200);
    }

    #[test]
    #[serial]
    fn test_resolve_config_rejects_bad_cli_level() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "");
        env::remove_var(PORT_ENV);
        env::remove_var(LOG_ENV);

        let overrides = CliOverrides { log_level: Some("chatty".to_string()), ..Default::default() };
        let result = resolve_config(Some(&config_path), &overrides);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    #[serial]
    fn test_resolve_config_override_replaces_invalid_file_value() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[server]\nport = 0\n");
        env::remove_var(PORT_ENV);
        env::remove_var(LOG_ENV);

        assert!(matches!(load_config(Some(&config_path)), Err(ConfigError::Validation(_))));

        let overrides = CliOverrides { port: Some(8080), ..Default::default() };
        let config = resolve_config(Some(&config_path), &overrides).expect("override should win");
        assert_eq!(config.server.port, 8080);

        env::set_var(PORT_ENV, "8181");
        let from_env = resolve_config(Some(&config_path), &CliOverrides::default());
        env::remove_var(PORT_ENV);
        assert_eq!(from_env.expect("env should win").server.port, 8181);
    }

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.name, "Beauty Palette Server");
        assert_eq!(config.logging.level, "info");
    }
}
