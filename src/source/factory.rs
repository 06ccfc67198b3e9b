//! source::factory
//!
//! Data source selection and creation.
//!
//! # Design
//!
//! Commands use `create_source()` instead of constructing a specific
//! source, so the rest of the system depends only on the [`DataSource`]
//! trait. Which implementation is used is a configuration decision.
//!
//! # Example
//!
//! ```
//! use churnscope::core::config::Config;
//! use churnscope::source::create_source;
//!
//! let source = create_source(&Config::default()).unwrap();
//! assert_eq!(source.name(), "mock");
//! ```

use super::http::HttpSource;
use super::mock::MockSource;
use super::traits::DataSource;
use crate::core::config::schema::parse_base_url;
use crate::core::config::{Config, ConfigError};

/// Supported data sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// In-memory fake with fabricated data
    Mock,
    /// JSON API over HTTP
    Http,
}

impl SourceKind {
    /// Get all available kinds.
    pub fn all() -> &'static [SourceKind] {
        &[SourceKind::Mock, SourceKind::Http]
    }

    /// Get the kind name as used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::Mock => "mock",
            SourceKind::Http => "http",
        }
    }

    /// Parse a kind from a string (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use churnscope::source::SourceKind;
    ///
    /// assert_eq!(SourceKind::parse("HTTP"), Some(SourceKind::Http));
    /// assert_eq!(SourceKind::parse("grpc"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mock" => Some(SourceKind::Mock),
            "http" => Some(SourceKind::Http),
            _ => None,
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Create the data source the configuration asks for.
///
/// # Errors
///
/// - `ConfigError::InvalidValue` if the kind is unknown, or the http source
///   lacks a usable `base_url`
pub fn create_source(config: &Config) -> Result<Box<dyn DataSource>, ConfigError> {
    let kind = SourceKind::parse(config.source_kind()).ok_or_else(|| {
        ConfigError::InvalidValue(format!(
            "unknown source '{}', available sources: {}",
            config.source_kind(),
            valid_source_names().join(", ")
        ))
    })?;

    match kind {
        SourceKind::Mock => Ok(Box::new(MockSource::new())),
        SourceKind::Http => {
            let raw = config.base_url().ok_or_else(|| {
                ConfigError::InvalidValue("the http source requires base_url".to_string())
            })?;
            let base_url = parse_base_url(raw)?;
            Ok(Box::new(HttpSource::new(base_url, config.base_path())))
        }
    }
}

/// Get list of valid source names for configuration validation.
pub fn valid_source_names() -> &'static [&'static str] {
    &["mock", "http"]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Overrides;

    mod source_kind {
        use super::*;

        #[test]
        fn all_matches_valid_names() {
            let names: Vec<_> = SourceKind::all().iter().map(|k| k.name()).collect();
            assert_eq!(names, valid_source_names());
        }

        #[test]
        fn parse_is_case_insensitive() {
            assert_eq!(SourceKind::parse("mock"), Some(SourceKind::Mock));
            assert_eq!(SourceKind::parse("Mock"), Some(SourceKind::Mock));
            assert_eq!(SourceKind::parse("HTTP"), Some(SourceKind::Http));
        }

        #[test]
        fn parse_unknown() {
            assert_eq!(SourceKind::parse("unknown"), None);
            assert_eq!(SourceKind::parse(""), None);
        }

        #[test]
        fn display() {
            assert_eq!(format!("{}", SourceKind::Http), "http");
        }
    }

    mod create {
        use super::*;

        #[test]
        fn default_config_gives_mock() {
            let source = create_source(&Config::default()).unwrap();
            assert_eq!(source.name(), "mock");
        }

        #[test]
        fn http_config_gives_http() {
            let config = Config::default()
                .with_overrides(Overrides {
                    kind: Some("http".into()),
                    base_url: Some("http://localhost:8080".into()),
                    base_path: None,
                })
                .unwrap();

            let source = create_source(&config).unwrap();
            assert_eq!(source.name(), "http");
        }

        #[test]
        fn unknown_kind_errors() {
            let mut config = Config::default();
            config.global.source = Some(crate::core::config::SourceConfig {
                kind: Some("carrier-pigeon".into()),
                ..Default::default()
            });

            let err = create_source(&config).err().unwrap();
            assert!(err.to_string().contains("carrier-pigeon"));
            assert!(err.to_string().contains("mock, http"));
        }

        #[test]
        fn http_without_url_errors() {
            let mut config = Config::default();
            config.global.source = Some(crate::core::config::SourceConfig {
                kind: Some("http".into()),
                ..Default::default()
            });

            assert!(create_source(&config).is_err());
        }
    }
}
