// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-day arithmetic.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Calendar date of a UTC instant as seen from `offset`.
pub fn calendar_date(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    instant.with_timezone(&offset).date_naive()
}

/// Whole calendar days from `earlier` to `later` (negative if `earlier` is after).
pub fn days_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_calendar_date_respects_offset() {
        // 2024-03-01 02:30 UTC is still Feb 29 in California.
        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 2, 30, 0).unwrap();
        let pacific = FixedOffset::west_opt(8 * 3600).unwrap();
        let utc = FixedOffset::east_opt(0).unwrap();

        assert_eq!(
            calendar_date(instant, pacific),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            calendar_date(instant, utc),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_days_between_ignores_time_of_day() {
        let a = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(days_between(a, b), 3);
        assert_eq!(days_between(b, a), -3);
        assert_eq!(days_between(a, a), 0);
    }
}
