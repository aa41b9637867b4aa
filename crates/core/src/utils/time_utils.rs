use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::constants::MONTHS_PER_YEAR;

/// Default timezone for valuation dates.
/// This is the canonical timezone used to convert UTC instants to domain dates.
/// The engine is locale-neutral, so UTC is the default; callers with a
/// regional deployment can pass their own `Tz`.
pub const DEFAULT_VALUATION_TZ: Tz = chrono_tz::UTC;

/// Converts a UTC instant to a valuation date in the given timezone.
///
/// This is the single source of truth for converting instants to domain dates.
/// Use this whenever you need to derive a "business date" from a timestamp.
pub fn valuation_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Convenience function that uses the default valuation timezone.
/// Equivalent to `valuation_date_from_utc(Utc::now(), DEFAULT_VALUATION_TZ)`.
pub fn valuation_date_today() -> NaiveDate {
    valuation_date_from_utc(Utc::now(), DEFAULT_VALUATION_TZ)
}

/// Signed number of *whole* calendar months between two dates.
///
/// A month only counts once the day-of-month of `start` has been reached
/// again, so `2023-01-15 -> 2023-02-14` is 0 months and
/// `2023-01-15 -> 2023-02-15` is 1. The result is negative when `end`
/// precedes `start`; callers that need "elapsed" semantics clamp to zero.
pub fn whole_calendar_months(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut months =
        (end.year() - start.year()) * MONTHS_PER_YEAR + end.month() as i32 - start.month() as i32;
    if end >= start {
        if end.day() < start.day() {
            months -= 1;
        }
    } else if end.day() > start.day() {
        // Mirror the truncation when walking backwards so the partial
        // month at the boundary is dropped, not double-counted.
        months += 1;
    }
    months
}

/// Signed number of whole days between two instants (truncated toward zero).
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_days()
}
