//! Elapsed-age computation and display formatting.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Whole-unit decomposition of the span between an event and a
/// reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    /// Total whole hours elapsed.
    pub hours_total: i64,
    /// Whole days elapsed.
    pub days: i64,
    /// Hours past the last whole day boundary.
    pub hours: i64,
    /// Minutes past the last whole hour boundary, 0-59 for a
    /// nonnegative span.
    pub minute_remainder: i64,
}

/// Decomposes `reference - occurred_at` into whole days, hours, and a
/// sub-hour minute remainder.
///
/// Each unit is truncated independently from the full span rather than
/// derived from a smaller unit's result. For a fixed `occurred_at`,
/// `hours_total` is non-decreasing as `reference` increases.
#[must_use]
pub fn compute_age(occurred_at: DateTime<Utc>, reference: DateTime<Utc>) -> AgeBreakdown {
    let span = reference.signed_duration_since(occurred_at);
    let days = span.num_days();
    let hours_total = span.num_hours();
    AgeBreakdown {
        hours_total,
        days,
        hours: hours_total - days * 24,
        minute_remainder: span.num_minutes() - hours_total * 60,
    }
}

impl AgeBreakdown {
    /// Compact age display such as `"4h"` or `"1d1h"`.
    ///
    /// The day part appears only once a full day has elapsed.
    #[must_use]
    pub fn display(&self) -> String {
        if self.hours_total >= 24 {
            format!("{}d{}h", self.days, self.hours)
        } else {
            format!("{}h", self.hours)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use insta::assert_snapshot;

    use super::*;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
            .single()
            .expect("valid test timestamp")
    }

    #[test]
    fn decomposes_twenty_five_hours() {
        let age = compute_age(ts(), ts() + Duration::hours(25));
        assert_eq!(age.hours_total, 25);
        assert_eq!(age.days, 1);
        assert_eq!(age.hours, 1);
        assert_eq!(age.minute_remainder, 0);
    }

    #[test]
    fn sub_hour_minutes_land_in_remainder() {
        let age = compute_age(ts(), ts() + Duration::hours(25) + Duration::minutes(21));
        assert_eq!(age.hours_total, 25);
        assert_eq!(age.minute_remainder, 21);
    }

    #[test]
    fn sub_day_span_has_zero_days() {
        let age = compute_age(ts(), ts() + Duration::hours(23) + Duration::minutes(59));
        assert_eq!(age.hours_total, 23);
        assert_eq!(age.days, 0);
        assert_eq!(age.hours, 23);
        assert_eq!(age.minute_remainder, 59);
    }

    #[test]
    fn partial_hours_truncate() {
        let age = compute_age(ts(), ts() + Duration::minutes(119));
        assert_eq!(age.hours_total, 1);
        assert_eq!(age.minute_remainder, 59);
    }

    #[test]
    fn age_is_monotonic_in_reference_time() {
        let mut previous = 0;
        for minutes in (0..=3000).step_by(7) {
            let age = compute_age(ts(), ts() + Duration::minutes(minutes));
            assert!(age.hours_total >= previous);
            previous = age.hours_total;
        }
    }

    #[test]
    fn display_under_a_day_omits_days() {
        assert_snapshot!(compute_age(ts(), ts() + Duration::hours(4)).display(), @"4h");
    }

    #[test]
    fn display_over_a_day_includes_days() {
        assert_snapshot!(compute_age(ts(), ts() + Duration::hours(25)).display(), @"1d1h");
    }

    #[test]
    fn display_fresh_event_is_zero_hours() {
        assert_snapshot!(compute_age(ts(), ts()).display(), @"0h");
    }
}
