//! source::mock
//!
//! In-memory data source that fabricates plausible data.
//!
//! # Design
//!
//! The mock source stands in for the backend until one exists. Repositories
//! come from a fixed seed list, created repositories get a random short id,
//! and commit history is a fresh random sample over the trailing 31 days.
//! Nothing is persisted between calls.
//!
//! The clock and random source are injectable so tests can pin both, and a
//! failure can be configured per operation to exercise error paths.
//!
//! # Example
//!
//! ```
//! use churnscope::source::mock::MockSource;
//! use churnscope::source::DataSource;
//!
//! # tokio_test::block_on(async {
//! let source = MockSource::new().with_seed(7);
//!
//! let repo = source.create_repository("github.com/acme/widget").await.unwrap();
//! assert_eq!(repo.name, "github.com/acme/widget");
//! assert!(!repo.id.is_empty());
//! # });
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::traits::{Commit, DataSource, Repository, TransportError};
use crate::core::clock::{Clock, SystemClock};
use crate::core::ids::random_id;

/// Simulated network latency for commit listing.
pub const LATENCY: Duration = Duration::from_millis(500);

/// Days before today covered by a commit listing (today is added on top).
pub const WINDOW_DAYS: i64 = 30;

/// Exclusive upper bound for fabricated `lines_added`.
pub const MAX_LINES_ADDED: u32 = 200;

/// Exclusive upper bound for fabricated `lines_deleted`.
pub const MAX_LINES_DELETED: u32 = 100;

/// The repositories every fresh mock source reports.
pub fn seed_repositories() -> Vec<Repository> {
    vec![
        Repository::new("1", "github.com/user/repo1"),
        Repository::new("2", "github.com/user/repo2"),
        Repository::new("3", "bitbucket.org/user/repo3"),
    ]
}

/// Fabricate one churn sample per calendar day, oldest first.
///
/// Produces `WINDOW_DAYS + 1` records dated `now - WINDOW_DAYS days`
/// through `now`, each keeping the time of day of `now`.
pub fn daily_samples<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> Vec<Commit> {
    (0..=WINDOW_DAYS)
        .rev()
        .map(|days_ago| Commit {
            lines_added: rng.random_range(0..MAX_LINES_ADDED),
            lines_deleted: rng.random_range(0..MAX_LINES_DELETED),
            created_date: now - chrono::Duration::days(days_ago),
        })
        .collect()
}

/// Mock data source.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone)]
pub struct MockSource {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockSourceInner>>,
    /// Time source for commit dates.
    clock: Arc<dyn Clock>,
}

/// Internal mutable state.
#[derive(Debug)]
struct MockSourceInner {
    /// Repositories reported by `list_repositories`.
    repositories: Vec<Repository>,
    /// Random source for ids and line counts.
    rng: StdRng,
    /// Operation to fail on (for testing error paths).
    fail_on: Option<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail list_repositories with the given error.
    ListRepositories(TransportError),
    /// Fail create_repository with the given error.
    CreateRepository(TransportError),
    /// Fail list_commits with the given error.
    ListCommits(TransportError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    ListRepositories,
    CreateRepository { name: String },
    ListCommits { repository_id: String },
}

impl MockSource {
    /// Create a mock source with the seed repositories, the system clock
    /// and an OS-seeded random source.
    pub fn new() -> Self {
        Self::from_parts(seed_repositories(), StdRng::from_os_rng())
    }

    fn from_parts(repositories: Vec<Repository>, rng: StdRng) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockSourceInner {
                repositories,
                rng,
                fail_on: None,
                operations: Vec::new(),
            })),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the random source with a deterministic one.
    pub fn with_seed(self, seed: u64) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.rng = StdRng::seed_from_u64(seed);
        }
        self
    }

    /// Replace the clock used to date commits.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use churnscope::core::clock::FixedClock;
    /// use churnscope::source::mock::MockSource;
    ///
    /// let source = MockSource::new()
    ///     .with_clock(FixedClock(Utc.with_ymd_and_hms(2024, 1, 31, 9, 0, 0).unwrap()));
    /// ```
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace the repositories reported by `list_repositories`.
    pub fn with_repositories(self, repositories: Vec<Repository>) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.repositories = repositories;
        }
        self
    }

    /// Configure the mock to fail on a specific operation.
    ///
    /// # Example
    ///
    /// ```
    /// use churnscope::source::mock::{FailOn, MockSource};
    /// use churnscope::source::TransportError;
    ///
    /// let source = MockSource::new()
    ///     .fail_on(FailOn::ListRepositories(TransportError::Network("down".into())));
    /// ```
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_on = Some(fail_on);
        }
        self
    }

    /// Clear the failure configuration.
    pub fn clear_fail_on(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_on = None;
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<MockOperation> {
        let inner = self.inner.lock().unwrap();
        inner.operations.clone()
    }

    /// Record an operation.
    fn record(&self, op: MockOperation) {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(op);
    }

    /// Return the configured error if `op` is the one set to fail.
    fn check_fail(&self, op: &MockOperation) -> Result<(), TransportError> {
        let inner = self.inner.lock().unwrap();
        match (&inner.fail_on, op) {
            (Some(FailOn::ListRepositories(e)), MockOperation::ListRepositories)
            | (Some(FailOn::CreateRepository(e)), MockOperation::CreateRepository { .. })
            | (Some(FailOn::ListCommits(e)), MockOperation::ListCommits { .. }) => Err(e.clone()),
            _ => Ok(()),
        }
    }

    /// Record `op`, then fail if configured to.
    fn begin(&self, op: MockOperation) -> Result<(), TransportError> {
        self.record(op.clone());
        self.check_fail(&op)
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for MockSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn list_repositories(&self) -> Result<Vec<Repository>, TransportError> {
        self.begin(MockOperation::ListRepositories)?;

        let inner = self.inner.lock().unwrap();
        Ok(inner.repositories.clone())
    }

    async fn create_repository(&self, name: &str) -> Result<Repository, TransportError> {
        self.begin(MockOperation::CreateRepository {
            name: name.to_string(),
        })?;

        let mut inner = self.inner.lock().unwrap();
        let id = random_id(&mut inner.rng);
        Ok(Repository::new(id, name))
    }

    async fn list_commits(&self, repository_id: &str) -> Result<Vec<Commit>, TransportError> {
        self.begin(MockOperation::ListCommits {
            repository_id: repository_id.to_string(),
        })?;

        let now = self.clock.now();
        let commits = {
            let mut inner = self.inner.lock().unwrap();
            daily_samples(now, &mut inner.rng)
        };

        tokio::time::sleep(LATENCY).await;
        Ok(commits)
    }
}
