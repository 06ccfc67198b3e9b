//! source::traits
//!
//! Data source trait definition and the records it returns.
//!
//! # Design
//!
//! The `DataSource` trait is async because a real backend involves network
//! I/O. The in-memory fake implements the same signatures so callers never
//! learn which one they hold.
//!
//! # Example
//!
//! ```ignore
//! use churnscope::source::{DataSource, TransportError};
//!
//! async fn churn_total(source: &dyn DataSource, id: &str) -> Result<u64, TransportError> {
//!     let commits = source.list_commits(id).await?;
//!     Ok(commits.iter().map(|c| c.churn()).sum())
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from data source operations.
///
/// Every variant is a transport failure: the data source could not be
/// reached, or its answer could not be used. There is no domain-specific
/// taxonomy on top of this.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message from the backend
        message: String,
    },

    /// The backend answered successfully but the body was unusable.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// A tracked source-code project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Opaque identifier, unique per backend.
    pub id: String,
    /// Host/path identifier such as `github.com/user/repo`.
    pub name: String,
}

impl Repository {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Request body for creating a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRepository {
    pub name: String,
}

/// One day's code-churn sample for a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Lines added on this day
    pub lines_added: u32,
    /// Lines deleted on this day
    pub lines_deleted: u32,
    /// Sample timestamp
    #[serde(with = "iso_millis")]
    pub created_date: DateTime<Utc>,
}

impl Commit {
    /// Total lines touched (added plus deleted).
    pub fn churn(&self) -> u64 {
        u64::from(self.lines_added) + u64::from(self.lines_deleted)
    }
}

/// Serde adapter for timestamps on the wire.
///
/// Writes `YYYY-MM-DDTHH:MM:SS.sssZ`; reads any RFC 3339 timestamp.
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// The data source capability behind the repository data access module.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, TransportError>`. Implementations do not
/// log or retry; that is left to the boundary in [`crate::api`].
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Get the source name (e.g., "mock", "http").
    fn name(&self) -> &'static str;

    /// List all known repositories, in source order.
    async fn list_repositories(&self) -> Result<Vec<Repository>, TransportError>;

    /// Create a repository with the given name.
    ///
    /// The name is passed through unvalidated. The returned record carries
    /// the identifier the source assigned.
    async fn create_repository(&self, name: &str) -> Result<Repository, TransportError>;

    /// List daily churn samples for a repository, oldest first.
    ///
    /// The identifier is not checked against [`DataSource::list_repositories`].
    async fn list_commits(&self, repository_id: &str) -> Result<Vec<Commit>, TransportError>;
}
