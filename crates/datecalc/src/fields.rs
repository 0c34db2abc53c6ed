//! Single-date calendar queries: day of year, day and month fields, and
//! month-level facts (first/last weekday, length).
//!
//! The month queries take a 1-based month and roll out-of-range months
//! into neighbouring years, so `(2024, 13)` is January 2025 and
//! `(2024, 0)` is December 2023.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::calendar::Calendar;
use crate::input::DateInput;

pub(crate) const MS_PER_DAY: i64 = 86_400_000;

impl<Z: TimeZone> Calendar<Z> {
    /// Day of the year, 1..=366.
    ///
    /// Whole local days elapsed since January 1 of the same year, plus one.
    /// The subtraction is done on wall-clock readings, so a DST change in
    /// between cannot shift the result.
    pub fn day_of_year(&self, date: impl Into<DateInput>) -> Option<u32> {
        let local = self.normalize(date).into_datetime()?.naive_local();
        let jan1 = NaiveDate::from_ymd_opt(local.year(), 1, 1)?.and_time(chrono::NaiveTime::MIN);
        let elapsed = (local - jan1).num_milliseconds();
        u32::try_from(elapsed.div_euclid(MS_PER_DAY) + 1).ok()
    }

    /// Day of the month, 1..=31.
    pub fn day_of_month(&self, date: impl Into<DateInput>) -> Option<u32> {
        self.normalize(date).day()
    }

    /// Zero-based month, 0 = January .. 11 = December.
    pub fn month_of_year(&self, date: impl Into<DateInput>) -> Option<u32> {
        self.normalize(date).month0()
    }

    /// The local wall-clock reading of a date, for the week calculators.
    pub(crate) fn civil(&self, date: impl Into<DateInput>) -> Option<NaiveDateTime> {
        self.normalize(date)
            .into_datetime()
            .map(|dt| dt.naive_local())
    }
}

/// Fold a possibly out-of-range 1-based month into `(year, 1..=12)`.
fn roll_month(year: i32, month: i32) -> Option<(i32, u32)> {
    let zero_based = month.checked_sub(1)?;
    let year = year.checked_add(zero_based.div_euclid(12))?;
    let month = u32::try_from(zero_based.rem_euclid(12) + 1).ok()?;
    Some((year, month))
}

fn first_of_month(year: i32, month: i32) -> Option<NaiveDate> {
    let (year, month) = roll_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Day 0 of the following month, i.e. the month's final day.
fn last_of_month(year: i32, month: i32) -> Option<NaiveDate> {
    first_of_month(year, month.checked_add(1)?)?.pred_opt()
}

/// Weekday (0 = Sunday .. 6 = Saturday) of the first day of `month` (1..=12).
///
/// ```
/// // March 1, 2024 was a Friday
/// assert_eq!(datecalc::first_weekday_of_month(2024, 3), Some(5));
/// ```
pub fn first_weekday_of_month(year: i32, month: i32) -> Option<u32> {
    first_of_month(year, month).map(|d| d.weekday().num_days_from_sunday())
}

/// Weekday (0 = Sunday .. 6 = Saturday) of the last day of `month` (1..=12).
pub fn last_weekday_of_month(year: i32, month: i32) -> Option<u32> {
    last_of_month(year, month).map(|d| d.weekday().num_days_from_sunday())
}

/// Number of days in `month` (1..=12): 28..=31.
///
/// ```
/// assert_eq!(datecalc::days_in_month(2024, 2), Some(29));
/// assert_eq!(datecalc::days_in_month(2023, 2), Some(28));
/// ```
pub fn days_in_month(year: i32, month: i32) -> Option<u32> {
    last_of_month(year, month).map(|d| d.day())
}

// ── Local-time shorthands ───────────────────────────────────────────────────

/// [`Calendar::day_of_year`] in the host's local zone.
pub fn day_of_year(date: impl Into<DateInput>) -> Option<u32> {
    Calendar::<Local>::local().day_of_year(date)
}

/// [`Calendar::day_of_month`] in the host's local zone.
pub fn day_of_month(date: impl Into<DateInput>) -> Option<u32> {
    Calendar::<Local>::local().day_of_month(date)
}

/// [`Calendar::month_of_year`] in the host's local zone.
pub fn month_of_year(date: impl Into<DateInput>) -> Option<u32> {
    Calendar::<Local>::local().month_of_year(date)
}
