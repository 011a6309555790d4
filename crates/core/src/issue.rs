//! Sequential issue numbering
//!
//! Issue numbers are derived from the canonical edition date relative to a
//! fixed epoch. The sequence advances one per week, loses one slot per
//! calendar year to the Christmas fold, and lost one slot to each of the
//! 2022 and 2023 summer double issues.

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::calendar::utc_date;

/// Issue number of the epoch edition.
pub const EPOCH_ISSUE: u32 = 9226;

/// Year of the epoch edition.
pub const EPOCH_YEAR: i32 = 2021;

/// Epoch edition date (2021-01-02).
pub fn epoch_date() -> NaiveDate {
    utc_date(EPOCH_YEAR, 1, 2)
}

/// Dates after which one issue slot has been consumed by a summer double issue.
pub fn compression_dates() -> [NaiveDate; 2] {
    [utc_date(2022, 8, 12), utc_date(2023, 8, 11)]
}

/// Issue number for a canonical edition date.
///
/// A date that is not a whole number of weeks away from the epoch is not
/// canonical; the week count is rounded to the nearest integer and the
/// inconsistency is logged.
pub fn issue_number(date: NaiveDate) -> u32 {
    let compressions = compression_dates()
        .iter()
        .filter(|threshold| date > **threshold)
        .count() as i64;

    let days = (date - epoch_date()).num_days();
    if days.rem_euclid(7) != 0 {
        warn!(
            %date,
            days_from_epoch = days,
            "non-integral week count; date is not a canonical edition date"
        );
    }
    // Round half up, like a JavaScript Math.round over days / 7.
    let weeks = (2 * days + 7).div_euclid(14);
    let christmas_folds = i64::from(date.year() - EPOCH_YEAR);

    let raw = i64::from(EPOCH_ISSUE) - compressions - christmas_folds + weeks;
    u32::try_from(raw).unwrap_or_else(|_| {
        warn!(%date, raw, "issue number out of range");
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::normalize;
    use chrono::Duration;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn canonical_dates(from: &str, to: &str) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut date = d(from);
        while date <= d(to) {
            let canonical = normalize(date);
            if dates.last() != Some(&canonical) {
                dates.push(canonical);
            }
            date += Duration::days(1);
        }
        dates.sort();
        dates.dedup();
        dates
    }

    #[test]
    fn test_issue_number_epoch() {
        assert_eq!(issue_number(d("2021-01-02")), 9226);
        assert_eq!(issue_number(normalize(d("2021-01-03"))), 9226);
    }

    #[test]
    fn test_issue_number_weekly_step() {
        assert_eq!(issue_number(d("2021-01-09")), 9227);
        assert_eq!(issue_number(d("2020-12-19")), 9225);
    }

    #[test]
    fn test_issue_number_era_thresholds() {
        assert_eq!(issue_number(d("2012-08-04")), 8796);
        assert_eq!(issue_number(d("2012-08-11")), 8797);
        assert_eq!(issue_number(d("2019-03-23")), 9135);
        assert_eq!(issue_number(d("2019-03-30")), 9136);
        assert_eq!(issue_number(d("2019-04-06")), 9137);
    }

    #[test]
    fn test_issue_number_summer_double_issues() {
        assert_eq!(issue_number(d("2022-07-30")), 9307);
        assert_eq!(issue_number(d("2022-08-13")), 9308);
        assert_eq!(issue_number(d("2023-07-29")), 9357);
        assert_eq!(issue_number(d("2023-08-12")), 9358);
    }

    #[test]
    fn test_compression_subtracts_exactly_one() {
        // Two calendar weeks apart, one issue apart.
        for (before, after) in [("2022-07-30", "2022-08-13"), ("2023-07-29", "2023-08-12")] {
            let weeks = (d(after) - d(before)).num_days() / 7;
            assert_eq!(weeks, 2);
            assert_eq!(issue_number(d(after)) - issue_number(d(before)), 1);
        }
    }

    #[test]
    fn test_issue_number_monotonic() {
        let dates = canonical_dates("2009-01-01", "2026-12-31");
        for pair in dates.windows(2) {
            assert!(
                issue_number(pair[0]) <= issue_number(pair[1]),
                "{} -> {} decreased",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_issue_number_consecutive_since_2012() {
        let dates = canonical_dates("2012-01-07", "2026-12-31");
        for pair in dates.windows(2) {
            assert_eq!(
                issue_number(pair[1]),
                issue_number(pair[0]) + 1,
                "gap between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_issue_number_non_canonical_rounds_to_nearest() {
        // Tuesday, 3 days after 2015-11-28 (8966): rounds down.
        assert_eq!(issue_number(d("2015-12-01")), 8966);
        // Thursday, 5 days after: rounds up.
        assert_eq!(issue_number(d("2015-12-03")), 8967);
    }
}
