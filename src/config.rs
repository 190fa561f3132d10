//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports a TOML config file, environment variable overrides and
//! command-line flags applied on top by the binary.

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "yearmaps.toml";

/// Image formats a provider can publish
pub const SUPPORTED_FILE_TYPES: &[&str] = &["png", "svg"];

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub providers: Vec<ProviderConfig>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built front-end, served for unmatched routes
    #[serde(default)]
    pub static_dir: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Gallery catalog configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryConfig {
    /// Directory containing the generated heat-map images
    #[serde(default = "default_image_dir")]
    pub image_dir: String,

    /// How often the catalog is rescanned, 0 disables the refresh task
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// strftime format of the published update time
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_image_dir() -> String {
    dirs::home_dir()
        .map(|p| p.join(".yearmaps").join("cache").to_string_lossy().to_string())
        .unwrap_or_else(|| "./yearmaps_cache".to_string())
}

fn default_refresh_interval() -> u64 {
    3600
}

fn default_time_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            image_dir: default_image_dir(),
            refresh_interval_secs: default_refresh_interval(),
            time_format: default_time_format(),
        }
    }
}

/// One published heat-map
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProviderConfig {
    /// Provider id, e.g. `github`
    pub id: String,

    /// Display name, defaults to the upper-cased id
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default = "default_file_type")]
    pub file_type: String,

    /// Image file name inside the image directory, defaults to `<id>.<file_type>`
    #[serde(default)]
    pub image: Option<String>,
}

fn default_file_type() -> String {
    "png".to_string()
}

impl ProviderConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            file_type: default_file_type(),
            image: None,
        }
    }

    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.to_uppercase())
    }

    pub fn image_file(&self) -> String {
        self.image
            .clone()
            .unwrap_or_else(|| format!("{}.{}", self.id, self.file_type))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })?;
        config.gallery.image_dir = expand_home(&config.gallery.image_dir);
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load `./yearmaps.toml` if present, otherwise defaults plus environment
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = PathBuf::from(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load_with_env(&path)
        } else {
            Ok(Self::from_env())
        }
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = lookup("YEARMAPS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("YEARMAPS_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(static_dir) = lookup("YEARMAPS_STATIC_DIR") {
            self.server.static_dir = Some(static_dir);
        }

        // Gallery overrides
        if let Some(image_dir) = lookup("YEARMAPS_IMAGE_DIR") {
            self.gallery.image_dir = expand_home(&image_dir);
        }

        // Logging overrides
        if let Some(level) = lookup("YEARMAPS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("YEARMAPS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Check provider entries and formats before the server starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for provider in &self.providers {
            if provider.id.trim().is_empty() {
                return Err(ConfigError::Invalid("provider id must not be empty".into()));
            }
            if !seen.insert(provider.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate provider id: {}",
                    provider.id
                )));
            }
            if !SUPPORTED_FILE_TYPES.contains(&provider.file_type.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "{} is not a supported file type (provider {})",
                    provider.file_type, provider.id
                )));
            }
            let image = provider.image_file();
            if !is_plain_file_name(&image) {
                return Err(ConfigError::Invalid(format!(
                    "image of provider {} must be a file name inside the image directory: {}",
                    provider.id, image
                )));
            }
        }

        if StrftimeItems::new(&self.gallery.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Invalid(format!(
                "invalid time format: {}",
                self.gallery.time_format
            )));
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::Invalid(format!(
                "log format must be pretty or json, got {}",
                self.logging.format
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            gallery: GalleryConfig::default(),
            providers: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

/// A single normal path component, i.e. a file directly inside the image directory
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains('\\')
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> String {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest).to_string_lossy().to_string(),
        _ => path.to_string(),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# YearMaps Configuration
#
# Environment variables override these settings:
# - YEARMAPS_HOST
# - YEARMAPS_PORT
# - YEARMAPS_STATIC_DIR
# - YEARMAPS_IMAGE_DIR
# - YEARMAPS_LOG_LEVEL
# - YEARMAPS_LOG_FORMAT

[server]
# Host to listen on
host = "0.0.0.0"

# Port to listen on
port = 5000

# Built front-end bundle served at the site root (optional)
# static_dir = "./yearmaps-ui/dist"

[gallery]
# Directory holding the generated heat-map images
image_dir = "~/.yearmaps/cache"

# Rescan the image directory every N seconds (0 disables)
refresh_interval_secs = 3600

# Format of the published update time
time_format = "%Y-%m-%d %H:%M"

# One entry per published heat-map, in display order
[[providers]]
id = "github"
# name = "GitHub"
# file_type = "png"
# image = "github.png"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
