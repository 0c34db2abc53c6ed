//! Differences between two dates.
//!
//! Every function accepts its two dates in either order and orders them
//! first, so results are never negative. If either date is unreadable the
//! result is `None`.
//!
//! - [`Calendar::milliseconds_diff`] is the only primitive; seconds, minutes,
//!   hours and days truncate it step by step, so they count total elapsed
//!   units.
//! - [`Calendar::months_diff`] and [`Calendar::years_diff`] count whole
//!   calendar months and years, the way ages are counted.
//! - [`Calendar::time_diff`] breaks the gap into years through seconds,
//!   borrowing between units with the real length of each month.

use std::fmt;

use chrono::{Datelike, Local, NaiveDateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;
use crate::fields::days_in_month;
use crate::input::DateInput;

const MS_PER_SECOND: i64 = 1000;
const SECONDS_PER_MINUTE: i64 = 60;
const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;
const MONTHS_PER_YEAR: i64 = 12;

/// A calendar breakdown of the gap between two dates.
///
/// Adding the fields to the earlier date, largest unit first, lands on the
/// later date's wall-clock reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeDiff {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeDiff {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Human-readable form, e.g. "1 year, 2 months, 3 days".
impl fmt::Display for TimeDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = [
            (self.years, "year"),
            (self.months, "month"),
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
            (self.seconds, "second"),
        ];
        let parts: Vec<String> = units
            .iter()
            .filter(|(n, _)| *n > 0)
            .map(|(n, unit)| format!("{} {}{}", n, unit, if *n == 1 { "" } else { "s" }))
            .collect();
        if parts.is_empty() {
            f.write_str("0 seconds")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

impl<Z: TimeZone> Calendar<Z> {
    /// Wall-clock readings of both dates, earlier reading first.
    ///
    /// Ordering is by instant; inside a DST fold the later instant can read
    /// earlier, in which case the readings are swapped.
    fn civil_pair(
        &self,
        a: impl Into<DateInput>,
        b: impl Into<DateInput>,
    ) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let (start, end) = self.ordered(a, b)?.into_parts();
        let (start, end) = (start.naive_local(), end.naive_local());
        if end < start {
            Some((end, start))
        } else {
            Some((start, end))
        }
    }

    pub fn milliseconds_diff(
        &self,
        a: impl Into<DateInput>,
        b: impl Into<DateInput>,
    ) -> Option<i64> {
        self.ordered(a, b).map(|pair| pair.span_millis())
    }

    pub fn seconds_diff(&self, a: impl Into<DateInput>, b: impl Into<DateInput>) -> Option<i64> {
        self.milliseconds_diff(a, b).map(|ms| ms / MS_PER_SECOND)
    }

    pub fn minutes_diff(&self, a: impl Into<DateInput>, b: impl Into<DateInput>) -> Option<i64> {
        self.seconds_diff(a, b).map(|s| s / SECONDS_PER_MINUTE)
    }

    pub fn hours_diff(&self, a: impl Into<DateInput>, b: impl Into<DateInput>) -> Option<i64> {
        self.minutes_diff(a, b).map(|m| m / MINUTES_PER_HOUR)
    }

    pub fn days_diff(&self, a: impl Into<DateInput>, b: impl Into<DateInput>) -> Option<i64> {
        self.hours_diff(a, b).map(|h| h / HOURS_PER_DAY)
    }

    /// Whole calendar months between two dates.
    ///
    /// A month only counts once the end's day of month has reached the
    /// start's: January 31 to February 28 is 0 months.
    pub fn months_diff(&self, a: impl Into<DateInput>, b: impl Into<DateInput>) -> Option<i64> {
        let (start, end) = self.civil_pair(a, b)?;
        let mut months = i64::from(end.year() - start.year()) * MONTHS_PER_YEAR
            + i64::from(end.month0())
            - i64::from(start.month0());
        if end.day() < start.day() {
            months -= 1;
        }
        Some(months)
    }

    /// Whole calendar years between two dates.
    pub fn years_diff(&self, a: impl Into<DateInput>, b: impl Into<DateInput>) -> Option<i64> {
        let (start, end) = self.civil_pair(a, b)?;
        let mut years = i64::from(end.year() - start.year());
        if (end.month(), end.day()) < (start.month(), start.day()) {
            years -= 1;
        }
        Some(years)
    }

    /// Age in completed years of someone born on `birth`, as of `at`.
    ///
    /// ```
    /// use chrono::Utc;
    /// use datecalc::Calendar;
    ///
    /// let cal = Calendar::new(Utc);
    /// assert_eq!(cal.age("2000-06-15", "2024-06-14"), Some(23));
    /// assert_eq!(cal.age("2000-06-15", "2024-06-15"), Some(24));
    /// ```
    pub fn age(&self, birth: impl Into<DateInput>, at: impl Into<DateInput>) -> Option<i64> {
        self.years_diff(birth, at)
    }

    /// Years, months, days, hours, minutes and seconds between two dates.
    ///
    /// Fields are subtracted pairwise, then negatives borrow from the next
    /// larger unit. A day borrow adds the length of the month before the
    /// end's month. Only when that still leaves the days negative (the
    /// start's day of month does not exist in the preceding month) does
    /// counting start from that month's last day.
    ///
    /// ```
    /// use chrono::Utc;
    /// use datecalc::{Calendar, TimeDiff};
    ///
    /// let cal = Calendar::new(Utc);
    /// let diff = cal.time_diff("2023-01-31", "2023-03-01").unwrap();
    /// assert_eq!(diff, TimeDiff { months: 1, days: 1, ..TimeDiff::default() });
    /// ```
    pub fn time_diff(&self, a: impl Into<DateInput>, b: impl Into<DateInput>) -> Option<TimeDiff> {
        let (start, end) = self.civil_pair(a, b)?;

        let mut years = i64::from(end.year() - start.year());
        let mut months = i64::from(end.month0()) - i64::from(start.month0());
        let mut days = i64::from(end.day()) - i64::from(start.day());
        let mut hours = i64::from(end.hour()) - i64::from(start.hour());
        let mut minutes = i64::from(end.minute()) - i64::from(start.minute());
        let mut seconds = i64::from(end.second()) - i64::from(start.second());

        if seconds < 0 {
            seconds += SECONDS_PER_MINUTE;
            minutes -= 1;
        }
        if minutes < 0 {
            minutes += MINUTES_PER_HOUR;
            hours -= 1;
        }
        if hours < 0 {
            hours += HOURS_PER_DAY;
            days -= 1;
        }
        if days < 0 {
            months -= 1;
            let preceding = i64::from(days_in_month(end.year(), end.month() as i32 - 1)?);
            days += preceding;
            if days < 0 {
                // Start day missing from the preceding month: count from its last day
                days += i64::from(start.day()) - preceding;
            }
        }
        if months < 0 {
            months += MONTHS_PER_YEAR;
            years -= 1;
        }

        Some(TimeDiff {
            years: u32::try_from(years).ok()?,
            months: u32::try_from(months).ok()?,
            days: u32::try_from(days).ok()?,
            hours: u32::try_from(hours).ok()?,
            minutes: u32::try_from(minutes).ok()?,
            seconds: u32::try_from(seconds).ok()?,
        })
    }
}

// ── Local-time shorthands ───────────────────────────────────────────────────

/// [`Calendar::milliseconds_diff`] in the host's local zone.
pub fn milliseconds_diff(a: impl Into<DateInput>, b: impl Into<DateInput>) -> Option<i64> {
    Calendar::<Local>::local().milliseconds_diff(a, b)
}

/// [`Calendar::seconds_diff`] in the host's local zone.
pub fn seconds_diff(a: impl Into<DateInput>, b: impl Into<DateInput>) -> Option<i64> {
    Calendar::<Local>::local().seconds_diff(a, b)
}

/// [`Calendar::minutes_diff`] in the host's local zone.
pub fn minutes_diff(a: impl Into<DateInput>, b: impl Into<DateInput>) -> Option<i64> {
    Calendar::<Local>::local().minutes_diff(a, b)
}

/// [`Calendar::hours_diff`] in the host's local zone.
pub fn hours_diff(a: impl Into<DateInput>, b: impl Into<DateInput>) -> Option<i64> {
    Calendar::<Local>::local().hours_diff(a, b)
}

/// [`Calendar::days_diff`] in the host's local zone.
pub fn days_diff(a: impl Into<DateInput>, b: impl Into<DateInput>) -> Option<i64> {
    Calendar::<Local>::local().days_diff(a, b)
}

/// [`Calendar::months_diff`] in the host's local zone.
pub fn months_diff(a: impl Into<DateInput>, b: impl Into<DateInput>) -> Option<i64> {
    Calendar::<Local>::local().months_diff(a, b)
}

/// [`Calendar::years_diff`] in the host's local zone.
pub fn years_diff(a: impl Into<DateInput>, b: impl Into<DateInput>) -> Option<i64> {
    Calendar::<Local>::local().years_diff(a, b)
}

/// [`Calendar::time_diff`] in the host's local zone.
pub fn time_diff(a: impl Into<DateInput>, b: impl Into<DateInput>) -> Option<TimeDiff> {
    Calendar::<Local>::local().time_diff(a, b)
}

/// [`Calendar::age`] in the host's local zone.
pub fn age(birth: impl Into<DateInput>, at: impl Into<DateInput>) -> Option<i64> {
    Calendar::<Local>::local().age(birth, at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn utc() -> Calendar<Utc> {
        Calendar::new(Utc)
    }

    fn diff(
        years: u32,
        months: u32,
        days: u32,
        hours: u32,
        minutes: u32,
        seconds: u32,
    ) -> TimeDiff {
        TimeDiff {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    // ── total-unit diffs ────────────────────────────────────────────────

    #[test]
    fn test_milliseconds_diff_is_order_independent() {
        let cal = utc();
        let forward = cal.milliseconds_diff("2024-01-01", "2024-01-02 00:00:01");
        let backward = cal.milliseconds_diff("2024-01-02 00:00:01", "2024-01-01");
        assert_eq!(forward, Some(86_401_000));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_truncating_chain() {
        let cal = utc();
        let (a, b) = ("2024-01-01 00:00:00", "2024-01-03 05:07:09");
        assert_eq!(cal.seconds_diff(a, b), Some(2 * 86_400 + 5 * 3600 + 7 * 60 + 9));
        assert_eq!(cal.minutes_diff(a, b), Some(2 * 1440 + 5 * 60 + 7));
        assert_eq!(cal.hours_diff(a, b), Some(53));
        assert_eq!(cal.days_diff(a, b), Some(2));
    }

    #[test]
    fn test_sub_second_gap_truncates_to_zero() {
        let cal = utc();
        assert_eq!(cal.milliseconds_diff(0_i64, 999_i64), Some(999));
        assert_eq!(cal.seconds_diff(0_i64, 999_i64), Some(0));
    }

    #[test]
    fn test_days_diff_counts_elapsed_time_across_dst() {
        // The spring-forward day in New York is only 23 hours long
        let cal = Calendar::new(chrono_tz::America::New_York);
        assert_eq!(cal.hours_diff("2024-03-10", "2024-03-11"), Some(23));
        assert_eq!(cal.days_diff("2024-03-10", "2024-03-11"), Some(0));
        assert_eq!(cal.days_diff("2024-03-10", "2024-03-11 01:00"), Some(1));
    }

    // ── months / years ──────────────────────────────────────────────────

    #[test]
    fn test_months_diff() {
        let cal = utc();
        assert_eq!(cal.months_diff("2024-01-15", "2024-03-15"), Some(2));
        assert_eq!(cal.months_diff("2024-01-15", "2024-03-14"), Some(1));
        assert_eq!(cal.months_diff("2023-11-30", "2024-02-29"), Some(2));
        assert_eq!(cal.months_diff("2024-01-31", "2024-02-29"), Some(0));
        assert_eq!(cal.months_diff("2024-03-14", "2024-01-15"), Some(1));
    }

    #[test]
    fn test_years_diff_anniversary_boundary() {
        let cal = utc();
        assert_eq!(cal.years_diff("2000-06-15", "2024-06-14"), Some(23));
        assert_eq!(cal.years_diff("2000-06-15", "2024-06-15"), Some(24));
        assert_eq!(cal.years_diff("2000-06-15", "2024-05-31"), Some(23));
        assert_eq!(cal.years_diff("2024-06-15", "2000-06-15"), Some(24));
    }

    #[test]
    fn test_age_leap_day_birthday() {
        let cal = utc();
        assert_eq!(cal.age("2004-02-29", "2023-02-28"), Some(18));
        assert_eq!(cal.age("2004-02-29", "2023-03-01"), Some(19));
        assert_eq!(cal.age("2004-02-29", "2024-02-29"), Some(20));
    }

    #[test]
    fn test_same_date_is_zero() {
        let cal = utc();
        assert_eq!(cal.years_diff("2024-06-15", "2024-06-15"), Some(0));
        assert_eq!(cal.months_diff("2024-06-15", "2024-06-15"), Some(0));
        assert_eq!(cal.time_diff("2024-06-15", "2024-06-15"), Some(TimeDiff::default()));
    }

    #[test]
    fn test_age_uses_anchor_for_now() {
        let anchor = Utc.with_ymd_and_hms(2026, 2, 18, 14, 30, 0).unwrap();
        let cal = utc().with_anchor(anchor);
        assert_eq!(cal.age("1990-02-19", DateInput::Now), Some(35));
        assert_eq!(cal.age("1990-02-18", DateInput::Now), Some(36));
    }

    // ── time_diff ───────────────────────────────────────────────────────

    #[test]
    fn test_time_diff_borrows_from_february() {
        let cal = utc();
        // Borrow counts February 2023 (28 days), not January (31)
        assert_eq!(cal.time_diff("2023-01-31", "2023-03-01"), Some(diff(0, 1, 1, 0, 0, 0)));
        assert_eq!(cal.time_diff("2023-01-28", "2023-03-01"), Some(diff(0, 1, 1, 0, 0, 0)));
        assert_eq!(cal.time_diff("2023-01-27", "2023-03-01"), Some(diff(0, 1, 2, 0, 0, 0)));
        assert_eq!(cal.time_diff("2024-01-31", "2024-03-01"), Some(diff(0, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn test_time_diff_borrows_from_long_preceding_month() {
        // End in April: the preceding month is March (31 days)
        let cal = utc();
        assert_eq!(cal.time_diff("2024-02-20", "2024-04-05"), Some(diff(0, 1, 16, 0, 0, 0)));
    }

    #[test]
    fn test_time_diff_borrows_plain_preceding_length() {
        // April has 30 days: 15 - 31 + 30 and 1 - 31 + 30
        let cal = utc();
        assert_eq!(cal.time_diff("2023-03-31", "2023-05-15"), Some(diff(0, 1, 14, 0, 0, 0)));
        assert_eq!(cal.time_diff("2023-05-31", "2023-07-01"), Some(diff(0, 1, 0, 0, 0, 0)));
    }

    #[test]
    fn test_time_diff_full_cascade() {
        let cal = utc();
        let result = cal.time_diff("2022-12-31 23:59:59", "2024-01-01 00:00:00");
        assert_eq!(result, Some(diff(1, 0, 0, 0, 0, 1)));
    }

    #[test]
    fn test_time_diff_mixed_fields() {
        let cal = utc();
        let result = cal.time_diff("2020-05-20 18:45:10", "2024-03-10 08:30:05");
        // 2020-05-20 18:45:10 + 3y 9m 18d 13h 44m 55s = 2024-03-10 08:30:05
        assert_eq!(result, Some(diff(3, 9, 18, 13, 44, 55)));
    }

    #[test]
    fn test_time_diff_is_order_independent() {
        let cal = utc();
        assert_eq!(
            cal.time_diff("2024-03-10 08:30:05", "2020-05-20 18:45:10"),
            cal.time_diff("2020-05-20 18:45:10", "2024-03-10 08:30:05"),
        );
    }

    #[test]
    fn test_time_diff_in_dst_fold_stays_non_negative() {
        // 01:50 EDT and 01:10 EST: the later instant reads earlier
        let cal = Calendar::new(chrono_tz::America::New_York);
        let result = cal.time_diff("2024-11-03T05:50:00Z", "2024-11-03T06:10:00Z");
        assert_eq!(result, Some(diff(0, 0, 0, 0, 40, 0)));
    }

    // ── invalid input ───────────────────────────────────────────────────

    #[test]
    fn test_invalid_input_propagates() {
        let cal = utc();
        assert_eq!(cal.milliseconds_diff("2024-01-01", "nope"), None);
        assert_eq!(cal.seconds_diff("nope", "2024-01-01"), None);
        assert_eq!(cal.days_diff(DateInput::Invalid, "2024-01-01"), None);
        assert_eq!(cal.months_diff("2024-01-01", f64::NAN), None);
        assert_eq!(cal.years_diff("2024-01-01", DateInput::Invalid), None);
        assert_eq!(cal.time_diff("2024-01-01", ""), None);
        assert_eq!(cal.age("", "2024-01-01"), None);
    }

    // ── TimeDiff ────────────────────────────────────────────────────────

    #[test]
    fn test_time_diff_display() {
        assert_eq!(diff(1, 2, 3, 0, 0, 0).to_string(), "1 year, 2 months, 3 days");
        assert_eq!(diff(0, 0, 0, 1, 1, 1).to_string(), "1 hour, 1 minute, 1 second");
        assert_eq!(TimeDiff::default().to_string(), "0 seconds");
        assert!(TimeDiff::default().is_zero());
    }

    #[test]
    fn test_time_diff_serializes_all_fields() {
        let json = serde_json::to_value(diff(1, 2, 3, 4, 5, 6)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "years": 1, "months": 2, "days": 3,
                "hours": 4, "minutes": 5, "seconds": 6
            })
        );
    }
}
