//! Calendar normalization for weekly editions
//!
//! A weekly edition is identified by the Saturday that ends its coverage
//! week. Any date is first snapped back to that Saturday, then checked
//! against an ordered table of historical exceptions (year-end anomaly,
//! summer and Christmas double issues).

use chrono::{Datelike, Duration, NaiveDate};
use tracing::warn;

/// Day-of-week index (Sunday = 0) of the publication day.
pub const PUBLICATION_WEEKDAY: u32 = 6;

/// Upper bound on one-week rebases a single normalization may perform.
const MAX_REBASES: usize = 4;

/// Build a calendar date from hard-coded components.
pub(crate) fn utc_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("hard-coded calendar date is valid")
}

/// Outcome of an exception rule applied to a snapped date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The date is final
    Settle(NaiveDate),
    /// Fold the week into the previous edition and normalize again
    Rebase,
}

/// One historical exception: a predicate over the snapped date and the
/// adjustment it forces.
struct ExceptionRule {
    name: &'static str,
    applies: fn(NaiveDate) -> bool,
    step: fn(NaiveDate) -> Step,
}

/// Exceptions in priority order. The first matching rule wins.
const EXCEPTION_RULES: [ExceptionRule; 4] = [
    ExceptionRule {
        name: "2011 year-end anomaly",
        applies: |d| d.year() == 2011 && d.month() == 12 && d.day() >= 24,
        step: |_| Step::Settle(utc_date(2011, 12, 31)),
    },
    ExceptionRule {
        name: "2022 summer double issue",
        applies: |d| d.year() == 2022 && d.month() == 8 && d.day() < 13,
        step: |_| Step::Rebase,
    },
    ExceptionRule {
        name: "2023 summer double issue",
        applies: |d| d.year() == 2023 && d.month() == 8 && d.day() < 12,
        step: |_| Step::Rebase,
    },
    ExceptionRule {
        name: "Christmas double issue",
        applies: |d| d.month() == 12 && d.day() > 24,
        step: |_| Step::Rebase,
    },
];

/// Day of week with Sunday = 0 .. Saturday = 6
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Snap a date back to the most recent publication day (itself if it already is one).
///
/// Dates with no representable Saturday before them are returned unchanged.
pub fn snap_to_saturday(date: NaiveDate) -> NaiveDate {
    let dow = day_of_week(date);
    if dow >= PUBLICATION_WEEKDAY {
        return date;
    }

    date.checked_sub_signed(Duration::days(1 + i64::from(dow)))
        .unwrap_or_else(|| {
            warn!(%date, "no publication day before date; leaving it unsnapped");
            date
        })
}

fn apply_rules(snapped: NaiveDate) -> Step {
    EXCEPTION_RULES
        .iter()
        .find(|rule| (rule.applies)(snapped))
        .map(|rule| {
            let step = (rule.step)(snapped);
            tracing::debug!(rule = rule.name, date = %snapped, ?step, "exception rule applied");
            step
        })
        .unwrap_or(Step::Settle(snapped))
}

/// Map any date to its canonical weekly edition date.
///
/// Idempotent: normalizing a canonical date returns it unchanged.
pub fn normalize(date: NaiveDate) -> NaiveDate {
    let mut current = snap_to_saturday(date);

    for _ in 0..MAX_REBASES {
        match apply_rules(current) {
            Step::Settle(settled) => return settled,
            Step::Rebase => match current.checked_sub_signed(Duration::days(7)) {
                Some(earlier) => current = snap_to_saturday(earlier),
                None => return current,
            },
        }
    }

    warn!(input = %date, reached = %current, "rebase limit hit while normalizing edition date");
    current
}

/// True for Dec 25-30, the week no audio files were ever published.
pub fn is_blackout(date: NaiveDate) -> bool {
    date.month() == 12 && (25..=30).contains(&date.day())
}

/// First canonical edition of a year.
pub fn first_edition_of_year(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 7).map(normalize)
}

/// Weekly dates visited when enumerating a legacy year.
///
/// Steps by seven days from the year's first canonical Saturday while the
/// day of year stays below 360. In 2011 the last step jumps to day 365 so
/// the listing reaches the Dec 31 edition.
pub fn legacy_week_dates(year: i32) -> Vec<NaiveDate> {
    let (Some(first), Some(jan1)) = (
        first_edition_of_year(year),
        NaiveDate::from_ymd_opt(year, 1, 1),
    ) else {
        return Vec::new();
    };

    let mut dates = Vec::new();
    let mut day = first.ordinal();
    while day < 360 {
        if year == 2011 && day == 358 {
            day = 365;
        }
        dates.push(jan1 + Duration::days(i64::from(day) - 1));
        day += 7;
    }
    dates
}
