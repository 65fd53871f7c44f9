//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::store::FallbackPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Trend database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Candidate relations, tried in order
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,

    #[serde(default)]
    pub fallback: FallbackPolicy,
}

fn default_db_path() -> String {
    "youtube.db".to_string()
}

fn default_sources() -> Vec<String> {
    vec!["video_viral_status".to_string(), "video_trends".to_string()]
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            sources: default_sources(),
            fallback: FallbackPolicy::default(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dashboard layout configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_grid_columns")]
    pub grid_columns: usize,

    #[serde(default = "default_detailed_columns")]
    pub detailed_columns: usize,

    #[serde(default = "default_cap")]
    pub default_cap: usize,

    #[serde(default = "default_cap")]
    pub viral_cap: usize,

    #[serde(default = "default_early_cap")]
    pub early_cap: usize,

    #[serde(default = "default_detailed_cap")]
    pub detailed_cap: usize,

    /// Upper age bound (inclusive) for the early trending view
    #[serde(default = "default_early_max_age")]
    pub early_max_age_hours: f64,
}

fn default_grid_columns() -> usize {
    4
}

fn default_detailed_columns() -> usize {
    3
}

fn default_cap() -> usize {
    24
}

fn default_early_cap() -> usize {
    32
}

fn default_detailed_cap() -> usize {
    60
}

fn default_early_max_age() -> f64 {
    24.0
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            grid_columns: default_grid_columns(),
            detailed_columns: default_detailed_columns(),
            default_cap: default_cap(),
            viral_cap: default_cap(),
            early_cap: default_early_cap(),
            detailed_cap: default_detailed_cap(),
            early_max_age_hours: default_early_max_age(),
        }
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

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

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

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("trendboard").join("config.toml")),
            Some(PathBuf::from("/etc/trendboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(db_path) = std::env::var("TRENDBOARD_DB_PATH") {
            self.storage.db_path = db_path;
        }

        if let Ok(host) = std::env::var("TRENDBOARD_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("TRENDBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        if let Ok(level) = std::env::var("TRENDBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("TRENDBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Trendboard Configuration
#
# Environment variables override these settings:
# - TRENDBOARD_DB_PATH
# - TRENDBOARD_HOST
# - TRENDBOARD_PORT
# - TRENDBOARD_LOG_LEVEL
# - TRENDBOARD_LOG_FORMAT

[storage]
# SQLite database written by the trend ingestion job (opened read-only)
db_path = "youtube.db"

# Relations to read, in order of preference
sources = ["video_viral_status", "video_trends"]

# When to move on to the next relation:
# any_error (every failure) or missing_relation (only "no such table")
fallback = "any_error"

[api]
# Dashboard server host
host = "0.0.0.0"

# Dashboard server port
port = 8501

[dashboard]
# Columns in the card grid and in the detailed review
grid_columns = 4
detailed_columns = 3

# Maximum cards per view
default_cap = 24
viral_cap = 24
early_cap = 32
detailed_cap = 60

# Videos at most this old (hours) count as early trending
early_max_age_hours = 24.0

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
