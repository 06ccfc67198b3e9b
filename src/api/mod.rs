//! api
//!
//! Repository data access module: the three operations the analytics
//! front end calls.
//!
//! # Error Policy
//!
//! Each operation is a boundary. A failure from the data source is logged
//! with enough context to tell which operation failed (and, for commit
//! listing, for which repository), then returned to the caller unchanged.
//! There are no retries, partial results, or error translation here.
//!
//! # Example
//!
//! ```
//! use churnscope::api::RepositoryApi;
//! use churnscope::source::mock::MockSource;
//!
//! # tokio_test::block_on(async {
//! let api = RepositoryApi::new(Box::new(MockSource::new()));
//! let repos = api.fetch_repositories().await.unwrap();
//! assert_eq!(repos.len(), 3);
//! # });
//! ```

use crate::source::{Commit, DataSource, Repository, TransportError};

/// Entry point for repository and commit data.
pub struct RepositoryApi {
    source: Box<dyn DataSource>,
}

impl std::fmt::Debug for RepositoryApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryApi")
            .field("source", &self.source.name())
            .finish()
    }
}

impl RepositoryApi {
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self { source }
    }

    /// Name of the underlying data source.
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Fetch all available repositories.
    pub async fn fetch_repositories(&self) -> Result<Vec<Repository>, TransportError> {
        self.source.list_repositories().await.inspect_err(|e| {
            tracing::error!(
                operation = "fetch_repositories",
                source = self.source.name(),
                error = %e,
                "Error fetching repositories"
            );
        })
    }

    /// Add a new repository.
    ///
    /// The name is passed through as given; validation belongs to the
    /// caller or the backend.
    pub async fn add_repository(&self, name: &str) -> Result<Repository, TransportError> {
        self.source.create_repository(name).await.inspect_err(|e| {
            tracing::error!(
                operation = "add_repository",
                source = self.source.name(),
                repository_name = name,
                error = %e,
                "Error adding repository"
            );
        })
    }

    /// Fetch the daily churn samples for a repository, oldest first.
    pub async fn fetch_commits(&self, repository_id: &str) -> Result<Vec<Commit>, TransportError> {
        self.source
            .list_commits(repository_id)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    operation = "fetch_commits",
                    source = self.source.name(),
                    repository_id,
                    error = %e,
                    "Error fetching commits for repository {}",
                    repository_id
                );
            })
    }
}
