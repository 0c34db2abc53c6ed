//! The calendar context: which zone supplies local fields, and what "now" is.
//!
//! Every datecalc operation reads calendar fields (year, month, day, hour)
//! through one [`Calendar`], so a single computation never mixes UTC and
//! local extraction. [`Calendar::local`] uses the host zone and clock; tests
//! and servers pin a zone with [`Calendar::new`] / [`Calendar::from_iana`] and
//! a fixed anchor with [`Calendar::with_anchor`].

use chrono::{
    DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc,
};
use tracing::debug;

use crate::error::CalcError;
use crate::input::DateInput;
use crate::instant::{Instant, OrderedPair};

/// Wall-clock formats tried after `-` has been rewritten to `/`.
const DATETIME_FORMATS: &[&str] = &[
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y/%m/%dT%H:%M:%S%.f",
    "%Y/%m/%dT%H:%M:%S",
    "%Y/%m/%dT%H:%M",
];

const DATE_FORMAT: &str = "%Y/%m/%d";

#[derive(Debug, Clone)]
pub struct Calendar<Z: TimeZone = Local> {
    tz: Z,
    anchor: Option<DateTime<Utc>>,
}

impl Calendar<Local> {
    /// The host's local zone and the system clock.
    pub fn local() -> Self {
        Self::new(Local)
    }
}

impl Default for Calendar<Local> {
    fn default() -> Self {
        Self::local()
    }
}

impl Calendar<chrono_tz::Tz> {
    /// A calendar in an IANA zone such as `"Asia/Shanghai"`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidTimezone`] if the name is not a known IANA zone.
    pub fn from_iana(name: &str) -> Result<Self, CalcError> {
        name.parse::<chrono_tz::Tz>()
            .map(Self::new)
            .map_err(|_| CalcError::InvalidTimezone(format!("'{name}'")))
    }
}

impl<Z: TimeZone> Calendar<Z> {
    pub fn new(tz: Z) -> Self {
        Self { tz, anchor: None }
    }

    /// Pin "now" to a fixed instant instead of reading the system clock.
    pub fn with_anchor(mut self, now: DateTime<Utc>) -> Self {
        self.anchor = Some(now);
        self
    }

    pub fn timezone(&self) -> &Z {
        &self.tz
    }

    pub fn now(&self) -> DateTime<Z> {
        self.anchor
            .unwrap_or_else(Utc::now)
            .with_timezone(&self.tz)
    }

    /// Turn a date-like input into an instant in this calendar's zone.
    ///
    /// Never fails: input that cannot be read yields [`Instant::Invalid`].
    ///
    /// ```
    /// use chrono::Utc;
    /// use datecalc::{Calendar, DateInput};
    ///
    /// let cal = Calendar::new(Utc);
    /// let a = cal.normalize("2024-06-15");
    /// let b = cal.normalize("2024/06/15 00:00");
    /// assert_eq!(a, b);
    /// assert!(!cal.normalize("not a date").is_valid());
    /// assert!(!cal.normalize(DateInput::Invalid).is_valid());
    /// ```
    pub fn normalize(&self, input: impl Into<DateInput>) -> Instant<Z> {
        let resolved = match input.into() {
            DateInput::Instant(dt) => Some(dt.with_timezone(&self.tz)),
            DateInput::Civil(naive) => self.resolve_civil(&naive),
            DateInput::Text(text) => self.parse_text(&text),
            DateInput::Millis(ms) => self.tz.timestamp_millis_opt(ms).single(),
            DateInput::Now => Some(self.now()),
            DateInput::Invalid => None,
        };
        resolved.map_or(Instant::Invalid, Instant::Valid)
    }

    /// Milliseconds since the Unix epoch, or `None` for unreadable input.
    pub fn to_timestamp(&self, input: impl Into<DateInput>) -> Option<i64> {
        self.normalize(input).timestamp_millis()
    }

    /// Normalize both inputs and put them in ascending order.
    ///
    /// Returns `None` if either input is invalid.
    pub fn ordered(
        &self,
        a: impl Into<DateInput>,
        b: impl Into<DateInput>,
    ) -> Option<OrderedPair<Z>> {
        let a = self.normalize(a).into_datetime()?;
        let b = self.normalize(b).into_datetime()?;
        Some(OrderedPair::new(a, b))
    }

    /// Resolve a wall-clock reading in this zone.
    ///
    /// A reading inside a DST fold takes the earlier instant; one inside a
    /// DST gap is moved forward by an hour.
    pub(crate) fn resolve_civil(&self, naive: &NaiveDateTime) -> Option<DateTime<Z>> {
        match self.tz.from_local_datetime(naive) {
            LocalResult::Single(dt) => Some(dt),
            LocalResult::Ambiguous(earliest, _) => Some(earliest),
            LocalResult::None => {
                debug!(civil = %naive, "wall-clock time falls in a DST gap, shifting forward");
                let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
                self.tz.from_local_datetime(&shifted).earliest()
            }
        }
    }

    fn parse_text(&self, text: &str) -> Option<DateTime<Z>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("empty date string");
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(dt.with_timezone(&self.tz));
        }

        let slashed = trimmed.replace('-', "/");
        let civil = parse_civil(&slashed);
        if civil.is_none() {
            debug!(input = %trimmed, "unparseable date string");
        }
        civil.and_then(|naive| self.resolve_civil(&naive))
    }
}

/// Parse a slash-separated wall-clock reading.
fn parse_civil(s: &str) -> Option<NaiveDateTime> {
    if let Some(naive) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(naive);
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Some(date.and_time(NaiveTime::MIN));
    }

    // Year and month only: the first of that month
    NaiveDate::parse_from_str(&format!("{s}/1"), DATE_FORMAT)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

// ── Local-time shorthands ───────────────────────────────────────────────────

/// [`Calendar::normalize`] in the host's local zone.
pub fn normalize(input: impl Into<DateInput>) -> Instant<Local> {
    Calendar::local().normalize(input)
}

/// [`Calendar::to_timestamp`] in the host's local zone.
pub fn to_timestamp(input: impl Into<DateInput>) -> Option<i64> {
    Calendar::local().to_timestamp(input)
}
