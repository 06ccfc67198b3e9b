//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: the source kind must be a
//! known one, an `http` source needs an absolute `http(s)` URL, and the base
//! path must be absolute.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// [source]
/// kind = "http"
/// base_url = "http://localhost:8080"
/// base_path = "/api"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Data source settings
    pub source: Option<SourceConfig>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(source) = &self.source {
            source.validate()?;
        }
        Ok(())
    }

    /// The configuration `config init` writes.
    pub fn starter() -> Self {
        Self {
            source: Some(SourceConfig {
                kind: Some("mock".to_string()),
                base_url: None,
                base_path: Some(crate::source::http::DEFAULT_BASE_PATH.to_string()),
            }),
        }
    }
}

/// Data source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Which data source to use ("mock" or "http")
    pub kind: Option<String>,

    /// Backend URL, required for the http source
    pub base_url: Option<String>,

    /// Path prefix of the backend API (default: "/api")
    pub base_path: Option<String>,
}

impl SourceConfig {
    /// Validate the source settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(kind) = &self.kind {
            let valid = crate::source::valid_source_names();
            if !valid.contains(&kind.to_lowercase().as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid source '{}', must be one of: {}",
                    kind,
                    valid.join(", ")
                )));
            }
        }

        if let Some(base_url) = &self.base_url {
            parse_base_url(base_url)?;
        }

        if let Some(base_path) = &self.base_path {
            if !base_path.starts_with('/') {
                return Err(ConfigError::InvalidValue(format!(
                    "base_path '{}' must start with '/'",
                    base_path
                )));
            }
        }

        let is_http = self
            .kind
            .as_deref()
            .is_some_and(|k| k.eq_ignore_ascii_case("http"));
        if is_http && self.base_url.is_none() {
            return Err(ConfigError::InvalidValue(
                "the http source requires base_url".to_string(),
            ));
        }

        Ok(())
    }
}

/// Parse and check a backend URL.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidValue(format!("invalid base_url '{}': {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue(format!(
            "base_url '{}' must use http or https",
            raw
        )));
    }

    Ok(url)
}
