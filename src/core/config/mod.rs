//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. CLI flags (applied with [`Config::with_overrides`])
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$CHURNSCOPE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/churnscope/config.toml`
//! 3. `~/.churnscope/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use churnscope::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Source: {}", config.source_kind());
//! println!("Base path: {}", config.base_path());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, SourceConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::source::http::DEFAULT_BASE_PATH;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CHURNSCOPE_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config file '{0}' already exists")]
    AlreadyExists(PathBuf),

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Values given on the command line that override the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub kind: Option<String>,
    pub base_url: Option<String>,
    pub base_path: Option<String>,
}

/// Effective configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed.
    /// A missing config file is not an error (defaults are used).
    pub fn load() -> Result<Config, ConfigError> {
        let found = find_global_config(
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            dirs::home_dir(),
        );

        match found {
            Some(path) => Self::load_file(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        global.validate()?;

        Ok(Config {
            global,
            global_path: Some(path.to_path_buf()),
        })
    }

    /// Apply command-line overrides and re-validate.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Config, ConfigError> {
        let source = self.global.source.get_or_insert_with(SourceConfig::default);
        if overrides.kind.is_some() {
            source.kind = overrides.kind;
        }
        if overrides.base_url.is_some() {
            source.base_url = overrides.base_url;
        }
        if overrides.base_path.is_some() {
            source.base_path = overrides.base_path;
        }
        self.global.validate()?;
        Ok(self)
    }

    /// Get the canonical path for the config file.
    ///
    /// Returns `$CHURNSCOPE_CONFIG` when set, otherwise
    /// `~/.churnscope/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".churnscope/config.toml"))
    }

    /// Write a config file atomically.
    ///
    /// Creates parent directories if needed. Refuses to replace an existing
    /// file unless `force` is set.
    pub fn write_global(
        path: &Path,
        config: &GlobalConfig,
        force: bool,
    ) -> Result<(), ConfigError> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        write_config_atomic(path, config)
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the data source kind.
    ///
    /// Defaults to "mock" if not configured.
    pub fn source_kind(&self) -> &str {
        self.source()
            .and_then(|s| s.kind.as_deref())
            .unwrap_or("mock")
    }

    /// Get the backend URL, if configured.
    pub fn base_url(&self) -> Option<&str> {
        self.source().and_then(|s| s.base_url.as_deref())
    }

    /// Get the API path prefix.
    ///
    /// Defaults to "/api" if not configured.
    pub fn base_path(&self) -> &str {
        self.source()
            .and_then(|s| s.base_path.as_deref())
            .unwrap_or(DEFAULT_BASE_PATH)
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    fn source(&self) -> Option<&SourceConfig> {
        self.global.source.as_ref()
    }
}

/// Pick the first existing config file among the standard locations.
fn find_global_config(
    explicit: Option<PathBuf>,
    xdg_config_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    let candidates = [
        explicit,
        xdg_config_home.map(|p| p.join("churnscope/config.toml")),
        home.map(|p| p.join(".churnscope/config.toml")),
    ];
    candidates.into_iter().flatten().find(|p| p.exists())
}

/// Write a config file atomically (temp file, then rename).
fn write_config_atomic<T: serde::Serialize>(path: &Path, config: &T) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let contents =
        toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

    let temp_path = path.with_extension("toml.tmp");
    let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(contents.as_bytes())
        .map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

    file.sync_all().map_err(|e| ConfigError::WriteError {
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
