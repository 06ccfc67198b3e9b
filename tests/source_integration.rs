//! Integration tests for the mock data source and the repository API.
//!
//! These tests exercise the public API end to end with a pinned clock and
//! seeded random source, so every assertion is deterministic.

use chrono::{DateTime, Duration, TimeZone, Utc};

use churnscope::api::RepositoryApi;
use churnscope::core::clock::FixedClock;
use churnscope::source::mock::{FailOn, MockOperation, MockSource};
use churnscope::source::{DataSource, TransportError};

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

// =============================================================================
// Repositories
// =============================================================================

mod repositories {
    use super::*;

    #[tokio::test]
    async fn every_repository_has_id_and_name() {
        let api = RepositoryApi::new(Box::new(MockSource::new()));

        let repos = api.fetch_repositories().await.unwrap();

        assert!(!repos.is_empty());
        for repo in &repos {
            assert!(!repo.id.is_empty());
            assert!(!repo.name.is_empty());
        }
    }

    #[tokio::test]
    async fn listing_is_stable_across_calls() {
        let api = RepositoryApi::new(Box::new(MockSource::new()));

        let first = api.fetch_repositories().await.unwrap();
        let second = api.fetch_repositories().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn add_widget_scenario() {
        let api = RepositoryApi::new(Box::new(MockSource::new()));

        let repo = api.add_repository("github.com/acme/widget").await.unwrap();

        assert_eq!(repo.name, "github.com/acme/widget");
        assert!(!repo.id.is_empty());
    }

    #[tokio::test]
    async fn added_ids_differ_between_calls() {
        let api = RepositoryApi::new(Box::new(MockSource::new()));

        let a = api.add_repository("github.com/a/one").await.unwrap();
        let b = api.add_repository("github.com/a/two").await.unwrap();

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn name_is_echoed_byte_for_byte() {
        let api = RepositoryApi::new(Box::new(MockSource::new()));

        for name in ["  padded  ", "ünïcødé.org/x/y", "no-slashes", ""] {
            let repo = api.add_repository(name).await.unwrap();
            assert_eq!(repo.name, name);
        }
    }
}

// =============================================================================
// Commits
// =============================================================================

mod commits {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn id_42_window_scenario() {
        let t = at(2024, 7, 15, 13);
        let api = RepositoryApi::new(Box::new(MockSource::new().with_clock(FixedClock(t))));

        let commits = api.fetch_commits("42").await.unwrap();

        assert_eq!(commits.len(), 31);
        assert_eq!(
            commits[0].created_date.date_naive(),
            (t - Duration::days(30)).date_naive()
        );
        assert_eq!(commits[30].created_date.date_naive(), t.date_naive());
    }

    #[tokio::test(start_paused = true)]
    async fn window_crosses_year_boundary() {
        let t = at(2024, 1, 10, 0);
        let source = MockSource::new().with_clock(FixedClock(t));

        let commits = source.list_commits("1").await.unwrap();

        assert_eq!(
            commits[0].created_date.date_naive(),
            chrono::NaiveDate::from_ymd_opt(2023, 12, 11).unwrap()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn dates_strictly_increase_by_one_day() {
        let source = MockSource::new().with_clock(FixedClock(at(2024, 3, 31, 23)));

        let commits = source.list_commits("1").await.unwrap();

        for pair in commits.windows(2) {
            assert_eq!(pair[1].created_date - pair[0].created_date, Duration::days(1));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_repository_id_still_gets_samples() {
        let source = MockSource::new();

        let commits = source.list_commits("does-not-exist").await.unwrap();

        assert_eq!(commits.len(), 31);
    }

    #[tokio::test(start_paused = true)]
    async fn line_counts_within_bounds() {
        let source = MockSource::new().with_seed(99);

        for _ in 0..20 {
            for commit in source.list_commits("1").await.unwrap() {
                assert!(commit.lines_added < 200);
                assert!(commit.lines_deleted < 100);
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn json_dates_are_iso_8601() {
        let source = MockSource::new().with_clock(FixedClock(at(2024, 7, 15, 13)));

        let commits = source.list_commits("1").await.unwrap();
        let json = serde_json::to_value(&commits).unwrap();

        assert_eq!(json[30]["created_date"], "2024-07-15T13:00:00.000Z");
        assert_eq!(json[0]["created_date"], "2024-06-15T13:00:00.000Z");
    }
}

// =============================================================================
// Failures
// =============================================================================

mod failures {
    use super::*;

    #[tokio::test]
    async fn list_failure_propagates_unchanged() {
        let source = MockSource::new().fail_on(FailOn::ListRepositories(
            TransportError::Network("connection refused".into()),
        ));
        let api = RepositoryApi::new(Box::new(source.clone()));

        let err = api.fetch_repositories().await.unwrap_err();

        assert!(matches!(err, TransportError::Network(ref m) if m == "connection refused"));
        assert_eq!(source.operations(), vec![MockOperation::ListRepositories]);
    }

    #[tokio::test]
    async fn add_failure_propagates_unchanged() {
        let source = MockSource::new().fail_on(FailOn::CreateRepository(
            TransportError::Status {
                status: 409,
                message: "exists".into(),
            },
        ));
        let api = RepositoryApi::new(Box::new(source));

        let err = api.add_repository("github.com/a/b").await.unwrap_err();

        assert_eq!(err.to_string(), "API error: 409 - exists");
    }

    #[tokio::test(start_paused = true)]
    async fn commits_failure_propagates_unchanged() {
        let source = MockSource::new().fail_on(FailOn::ListCommits(TransportError::Decode(
            "expected array".into(),
        )));
        let api = RepositoryApi::new(Box::new(source));

        let err = api.fetch_commits("42").await.unwrap_err();

        assert!(matches!(err, TransportError::Decode(_)));
    }
}
