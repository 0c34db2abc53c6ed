//! Week numbering: week of the year and week of the month.
//!
//! Weeks start on a configurable weekday. For the week of the year, week 1
//! is the week that contains January `first_week_contains_day`; with the
//! defaults (Monday, January 4th) that is exactly ISO 8601. A late-December
//! date can therefore fall into week 1 of the next year, and an
//! early-January date into the last week of the previous year.

use chrono::{Datelike, Days, Local, NaiveDate, TimeZone, Weekday};

use crate::calendar::Calendar;
use crate::error::CalcError;
use crate::input::DateInput;

const DAYS_PER_WEEK: u32 = 7;

/// Options for [`Calendar::week_of_year_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekOptions {
    first_day_of_week: Weekday,
    first_week_contains_day: u32,
}

impl Default for WeekOptions {
    /// ISO 8601: weeks start on Monday, week 1 contains January 4th.
    fn default() -> Self {
        Self {
            first_day_of_week: Weekday::Mon,
            first_week_contains_day: 4,
        }
    }
}

impl WeekOptions {
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidWeekOption`] unless
    /// `first_week_contains_day` is in 1..=7.
    pub fn new(
        first_day_of_week: Weekday,
        first_week_contains_day: u32,
    ) -> Result<Self, CalcError> {
        if !(1..=DAYS_PER_WEEK).contains(&first_week_contains_day) {
            return Err(CalcError::InvalidWeekOption(format!(
                "first week must contain a day in January 1-7, got {first_week_contains_day}"
            )));
        }
        Ok(Self {
            first_day_of_week,
            first_week_contains_day,
        })
    }

    /// Build from numeric indices: `first_day_of_week` 0 = Sunday .. 6 = Saturday,
    /// `first_week_contains_day` 1..=7.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidWeekOption`] if either value is out of range.
    pub fn from_indices(
        first_day_of_week: u32,
        first_week_contains_day: u32,
    ) -> Result<Self, CalcError> {
        let weekday = weekday_from_sunday(first_day_of_week).ok_or_else(|| {
            CalcError::InvalidWeekOption(format!(
                "first day of week must be 0 (Sunday) to 6 (Saturday), got {first_day_of_week}"
            ))
        })?;
        Self::new(weekday, first_week_contains_day)
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    pub fn first_week_contains_day(&self) -> u32 {
        self.first_week_contains_day
    }
}

/// Map 0 = Sunday .. 6 = Saturday onto [`Weekday`].
pub fn weekday_from_sunday(index: u32) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// How many days `weekday` is past the week-start day (0..=6).
fn days_from_week_start(weekday: Weekday, week_start: Weekday) -> u32 {
    (weekday.num_days_from_sunday() + DAYS_PER_WEEK - week_start.num_days_from_sunday())
        % DAYS_PER_WEEK
}

fn week_start_of(date: NaiveDate, week_start: Weekday) -> Option<NaiveDate> {
    let offset = days_from_week_start(date.weekday(), week_start);
    date.checked_sub_days(Days::new(u64::from(offset)))
}

/// Week of the year for a calendar date.
fn week_number(date: NaiveDate, options: &WeekOptions) -> Option<u32> {
    let week_start = week_start_of(date, options.first_day_of_week)?;

    // A week belongs to the year of its reference day: the day at offset
    // 7 - K, which lies in January 1..=7 exactly for the week holding January K.
    // At the ISO default K = 4 this is the usual offset 3 (K - 1).
    let reference_offset = DAYS_PER_WEEK - options.first_week_contains_day;
    let reference = week_start.checked_add_days(Days::new(u64::from(reference_offset)))?;

    let anchor = NaiveDate::from_ymd_opt(reference.year(), 1, options.first_week_contains_day)?;
    let first_week_start = week_start_of(anchor, options.first_day_of_week)?;

    let weeks = (week_start - first_week_start).num_days() / i64::from(DAYS_PER_WEEK);
    u32::try_from(weeks + 1).ok()
}

impl<Z: TimeZone> Calendar<Z> {
    /// ISO 8601 week of the year, 1..=53.
    ///
    /// ```
    /// use chrono::Utc;
    /// use datecalc::Calendar;
    ///
    /// let cal = Calendar::new(Utc);
    /// assert_eq!(cal.week_of_year("2024-01-01"), Some(1));
    /// assert_eq!(cal.week_of_year("2021-01-01"), Some(53));
    /// ```
    pub fn week_of_year(&self, date: impl Into<DateInput>) -> Option<u32> {
        self.week_of_year_with_options(date, &WeekOptions::default())
    }

    /// Week of the year, 1..=53, under a custom week convention.
    pub fn week_of_year_with_options(
        &self,
        date: impl Into<DateInput>,
        options: &WeekOptions,
    ) -> Option<u32> {
        week_number(self.civil(date)?.date(), options)
    }

    /// Week of the month, 1..=6, with weeks starting on Monday.
    pub fn week_of_month(&self, date: impl Into<DateInput>) -> Option<u32> {
        self.week_of_month_starting(date, Weekday::Mon)
    }

    /// Week of the month, 1..=6, with weeks starting on `first_day_of_week`.
    ///
    /// The partial week before the month's first week start counts as week 1.
    pub fn week_of_month_starting(
        &self,
        date: impl Into<DateInput>,
        first_day_of_week: Weekday,
    ) -> Option<u32> {
        let date = self.civil(date)?.date();
        let first = date.with_day(1)?;
        let offset = days_from_week_start(first.weekday(), first_day_of_week);
        Some((date.day() + offset - 1) / DAYS_PER_WEEK + 1)
    }
}

// ── Local-time shorthands ───────────────────────────────────────────────────

/// [`Calendar::week_of_year`] in the host's local zone.
pub fn week_of_year(date: impl Into<DateInput>) -> Option<u32> {
    Calendar::<Local>::local().week_of_year(date)
}

/// [`Calendar::week_of_year_with_options`] in the host's local zone.
pub fn week_of_year_with_options(
    date: impl Into<DateInput>,
    options: &WeekOptions,
) -> Option<u32> {
    Calendar::<Local>::local().week_of_year_with_options(date, options)
}

/// [`Calendar::week_of_month`] in the host's local zone.
pub fn week_of_month(date: impl Into<DateInput>) -> Option<u32> {
    Calendar::<Local>::local().week_of_month(date)
}

/// [`Calendar::week_of_month_starting`] in the host's local zone.
pub fn week_of_month_starting(
    date: impl Into<DateInput>,
    first_day_of_week: Weekday,
) -> Option<u32> {
    Calendar::<Local>::local().week_of_month_starting(date, first_day_of_week)
}
