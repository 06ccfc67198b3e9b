//! Property-based tests for fabricated commit history.
//!
//! These tests use proptest to check the commit window invariants hold for
//! any moment in time and any random seed.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use churnscope::core::ids::{random_id, ID_LEN};
use churnscope::source::mock::{daily_samples, MAX_LINES_ADDED, MAX_LINES_DELETED, WINDOW_DAYS};

/// Strategy for instants between 1970 and roughly 2100.
fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800, 0u32..1_000_000_000)
        .prop_map(|(secs, nanos)| Utc.timestamp_opt(secs, nanos).unwrap())
}

proptest! {
    #[test]
    fn window_has_one_sample_per_day(now in instant(), seed in any::<u64>()) {
        let commits = daily_samples(now, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(commits.len() as i64, WINDOW_DAYS + 1);
        prop_assert_eq!(commits.last().unwrap().created_date, now);
        prop_assert_eq!(
            commits[0].created_date.date_naive(),
            (now - Duration::days(WINDOW_DAYS)).date_naive()
        );
        for pair in commits.windows(2) {
            let step = pair[1].created_date.date_naive() - pair[0].created_date.date_naive();
            prop_assert_eq!(step.num_days(), 1);
        }
    }

    #[test]
    fn line_counts_stay_in_range(now in instant(), seed in any::<u64>()) {
        for commit in daily_samples(now, &mut StdRng::seed_from_u64(seed)) {
            prop_assert!(commit.lines_added < MAX_LINES_ADDED);
            prop_assert!(commit.lines_deleted < MAX_LINES_DELETED);
        }
    }

    #[test]
    fn json_timestamps_parse_back(now in instant(), seed in any::<u64>()) {
        let commits = daily_samples(now, &mut StdRng::seed_from_u64(seed));
        let json = serde_json::to_value(&commits).unwrap();

        for (commit, value) in commits.iter().zip(json.as_array().unwrap()) {
            let raw = value["created_date"].as_str().unwrap();
            prop_assert!(raw.ends_with('Z'));
            let parsed = DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc);
            // Wire format keeps millisecond precision
            prop_assert!((commit.created_date - parsed).num_milliseconds() == 0);
        }
    }

    #[test]
    fn ids_are_short_base36(seed in any::<u64>()) {
        let id = random_id(&mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(id.len(), ID_LEN);
        prop_assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
