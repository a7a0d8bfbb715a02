//! Service configuration.
//!
//! Sources, lowest priority first:
//! 1. built-in defaults
//! 2. `todo.toml` / `todo.local.toml` in the working directory (optional)
//! 3. environment variables, prefix `TODO_`, nesting separator `__`
//!    (`TODO_SERVER__PORT=8080`, `TODO_LOG__LEVEL=debug`)
//! 4. the bare `PORT` variable, which overrides `server.port`

use std::path::{Path, PathBuf};

use ::config::{Config, ConfigError as ConfigCrateError, Environment, File};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

const CONFIG_FILE_NAMES: &[&str] = &["todo", "todo.local"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5078
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// OpenAPI document and Swagger UI page.
#[derive(Debug, Clone, Deserialize)]
pub struct DocsConfig {
    #[serde(default = "default_docs_enabled")]
    pub enabled: bool,
    #[serde(default = "default_docs_title")]
    pub title: String,
    #[serde(default = "default_docs_description")]
    pub description: String,
    #[serde(default = "default_docs_version")]
    pub version: String,
    #[serde(default)]
    pub terms_of_service: Option<String>,
    #[serde(default)]
    pub contact: ContactConfig,
}

/// `info.contact` of the OpenAPI document; omitted when every field is unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ContactConfig {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none() && self.email.is_none()
    }
}

fn default_docs_enabled() -> bool {
    true
}

fn default_docs_title() -> String {
    "note-swagger. ToDo API".to_string()
}

fn default_docs_description() -> String {
    "My notes about Swagger. This is training project".to_string()
}

fn default_docs_version() -> String {
    "v1".to_string()
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            enabled: default_docs_enabled(),
            title: default_docs_title(),
            description: default_docs_description(),
            version: default_docs_version(),
            terms_of_service: None,
            contact: ContactConfig::default(),
        }
    }
}

/// Fallback directory served for paths no route claims.
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("wwwroot")
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: default_static_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of the human-readable format.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// Loads configuration, reading `config_path` instead of the default file
/// names when given.
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let port_override = std::env::var("PORT").ok();
    build_config(config_path, port_override.as_deref())
}

fn build_config(
    config_path: Option<&Path>,
    port_override: Option<&str>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .set_default("server.host", default_host())?
        .set_default("server.port", i64::from(default_port()))?
        .set_default("docs.enabled", default_docs_enabled())?
        .set_default("docs.title", default_docs_title())?
        .set_default("docs.description", default_docs_description())?
        .set_default("docs.version", default_docs_version())?
        .set_default("static_files.enabled", false)?
        .set_default("static_files.dir", "wwwroot")?
        .set_default("log.level", default_log_level())?
        .set_default("log.json", false)?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("TODO")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    if let Some(port) = port_override {
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|e| ConfigError::ParseError(format!("PORT={port}: {e}")))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }

    let app_config: AppConfig = builder
        .build()?
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {e}")))?;

    validate_config(&app_config)?;
    Ok(app_config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.docs.enabled && config.docs.title.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Docs title cannot be empty when docs are enabled".to_string(),
        ));
    }

    Ok(())
}

pub fn print_config(config: &AppConfig) {
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("API docs enabled: {}", config.docs.enabled);
    if config.static_files.enabled {
        tracing::info!("Static files: {:?}", config.static_files.dir);
    }
    tracing::info!("Log level: {} (json: {})", config.log.level, config.log.json);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{name}-{}.toml", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr(), "127.0.0.1:5078");
        assert!(config.docs.enabled);
        assert!(!config.static_files.enabled);
        assert_eq!(config.log.level, "info");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn file_values_override_defaults() {
        let path = write_temp_config(
            "todo-config-file",
            "[server]\nport = 9090\n\n[docs]\ntitle = \"Notes\"\nterms_of_service = \"https://example.org/terms\"\n\n[docs.contact]\nname = \"Maintainer\"\nemail = \"maintainer@example.org\"\n\n[static_files]\nenabled = true\ndir = \"public\"\n",
        );
        let config = build_config(Some(&path), None).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.docs.title, "Notes");
        assert_eq!(
            config.docs.terms_of_service.as_deref(),
            Some("https://example.org/terms")
        );
        assert_eq!(config.docs.contact.name.as_deref(), Some("Maintainer"));
        assert_eq!(config.docs.contact.url, None);
        assert!(config.static_files.enabled);
        assert_eq!(config.static_files.dir, PathBuf::from("public"));
    }

    #[test]
    fn port_override_wins_over_file() {
        let path = write_temp_config("todo-config-port", "[server]\nport = 9090\n");
        let config = build_config(Some(&path), Some("3000")).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn invalid_port_override_is_a_parse_error() {
        let err = build_config(None, Some("http")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn missing_required_file_is_a_load_error() {
        let path = std::env::temp_dir().join("todo-config-does-not-exist.toml");
        let err = build_config(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn empty_title_only_matters_with_docs_enabled() {
        let mut config = AppConfig::default();
        config.docs.title = String::new();
        assert!(validate_config(&config).is_err());
        config.docs.enabled = false;
        assert!(validate_config(&config).is_ok());
    }
}
