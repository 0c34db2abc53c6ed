//! Normalized instants and ordered instant pairs.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::input::DateInput;

/// A normalized point in time, read through a calendar zone.
///
/// `Invalid` is the unrepresentable instant produced by malformed input.
/// Every field accessor returns `None` for it, so arithmetic built on the
/// accessors stays unrepresentable instead of collapsing to zero.
#[derive(Debug, Clone)]
pub enum Instant<Z: TimeZone> {
    Valid(DateTime<Z>),
    Invalid,
}

impl<Z: TimeZone> Instant<Z> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn datetime(&self) -> Option<&DateTime<Z>> {
        match self {
            Self::Valid(dt) => Some(dt),
            Self::Invalid => None,
        }
    }

    pub fn into_datetime(self) -> Option<DateTime<Z>> {
        match self {
            Self::Valid(dt) => Some(dt),
            Self::Invalid => None,
        }
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.datetime().map(DateTime::timestamp_millis)
    }

    /// Calendar year in the local zone.
    pub fn year(&self) -> Option<i32> {
        self.datetime().map(|dt| dt.year())
    }

    /// Zero-based month (0 = January .. 11 = December).
    pub fn month0(&self) -> Option<u32> {
        self.datetime().map(|dt| dt.month0())
    }

    /// Day of the month (1..=31).
    pub fn day(&self) -> Option<u32> {
        self.datetime().map(|dt| dt.day())
    }

    pub fn hour(&self) -> Option<u32> {
        self.datetime().map(|dt| dt.hour())
    }

    pub fn minute(&self) -> Option<u32> {
        self.datetime().map(|dt| dt.minute())
    }

    pub fn second(&self) -> Option<u32> {
        self.datetime().map(|dt| dt.second())
    }

    /// Day of the week, 0 = Sunday .. 6 = Saturday.
    pub fn weekday(&self) -> Option<u32> {
        self.datetime().map(|dt| dt.weekday().num_days_from_sunday())
    }
}

/// Two invalid instants compare equal, as two `None`s do.
impl<Z: TimeZone> PartialEq for Instant<Z> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Valid(a), Self::Valid(b)) => a == b,
            (Self::Invalid, Self::Invalid) => true,
            _ => false,
        }
    }
}

impl<Z: TimeZone> From<Instant<Z>> for DateInput {
    fn from(instant: Instant<Z>) -> Self {
        match instant {
            Instant::Valid(dt) => dt.into(),
            Instant::Invalid => DateInput::Invalid,
        }
    }
}

impl<Z: TimeZone> From<&Instant<Z>> for DateInput {
    fn from(instant: &Instant<Z>) -> Self {
        instant.clone().into()
    }
}

/// Two valid instants with `start <= end` by epoch milliseconds.
///
/// Only [`Calendar::ordered`](crate::Calendar::ordered) and
/// [`OrderedPair::new`] build one, so the ordering always holds.
#[derive(Debug, Clone)]
pub struct OrderedPair<Z: TimeZone> {
    start: DateTime<Z>,
    end: DateTime<Z>,
}

impl<Z: TimeZone> OrderedPair<Z> {
    /// Order two datetimes ascending. Equal instants keep their argument order.
    pub fn new(a: DateTime<Z>, b: DateTime<Z>) -> Self {
        if b.timestamp_millis() < a.timestamp_millis() {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    pub fn start(&self) -> &DateTime<Z> {
        &self.start
    }

    pub fn end(&self) -> &DateTime<Z> {
        &self.end
    }

    pub fn into_parts(self) -> (DateTime<Z>, DateTime<Z>) {
        (self.start, self.end)
    }

    /// `end - start` in milliseconds; never negative.
    pub fn span_millis(&self) -> i64 {
        self.end.timestamp_millis() - self.start.timestamp_millis()
    }
}
