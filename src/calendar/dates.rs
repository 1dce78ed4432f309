//! Calendar date parsing and date ranges.
//!
//! Records arrive from the backend with dates as strings, either plain
//! `YYYY-MM-DD` dates or full ISO-8601 timestamps. Everything in the calendar
//! is keyed by the plain date, so timestamps are reduced to their UTC day.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// The format used for calendar date keys.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// The longest span, in days, that absence-fill will cover (about ten years).
pub const MAX_ABSENCE_RANGE_DAYS: i64 = 3_660;

/// Parses a record date into a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (reduced to the UTC date) and
/// timestamps without an offset (taken at face value). Returns `None` for
/// anything else.
///
/// # Example
///
/// ```
/// use attendance_engine::calendar::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 6, 1);
/// assert_eq!(parse_calendar_date("2024-06-01"), expected);
/// assert_eq!(parse_calendar_date("2024-06-01T09:15:00.000Z"), expected);
/// assert_eq!(parse_calendar_date("2024-06-01T23:30:00-02:00"), NaiveDate::from_ymd_opt(2024, 6, 2));
/// assert_eq!(parse_calendar_date("yesterday"), None);
/// ```
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_KEY_FORMAT) {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|timestamp| timestamp.date())
}

/// Formats a calendar date as a `YYYY-MM-DD` key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// An inclusive range of calendar dates.
///
/// A range whose start is after its end is empty.
///
/// # Example
///
/// ```
/// use attendance_engine::calendar::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
/// );
/// assert_eq!(range.days().count(), 3);
/// assert!(range.contains(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first date of the range (inclusive).
    pub start: NaiveDate,
    /// The last date of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new inclusive range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns the calendar year containing `date`.
    pub fn year_of(date: NaiveDate) -> Self {
        let year = date.year();
        Self {
            start: NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(date),
            end: NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(date),
        }
    }

    /// Returns true if the range holds no dates.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Checks if a date falls within the range (inclusive at both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of dates in the range, zero when empty.
    pub fn num_days(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }

    /// Returns the range with its start moved up to `floor` if it begins earlier.
    pub fn clamp_start(self, floor: NaiveDate) -> Self {
        Self {
            start: self.start.max(floor),
            end: self.end,
        }
    }

    /// Returns the range with its end pulled back to `limit` if it runs past it.
    pub fn clamp_end(self, limit: NaiveDate) -> Self {
        Self {
            start: self.start,
            end: self.end.min(limit),
        }
    }

    /// Iterates over every date in the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }

    /// Iterates over every date in the range falling on `weekday`.
    pub fn weekdays(&self, weekday: Weekday) -> impl Iterator<Item = NaiveDate> + use<> {
        let offset = (7 + weekday.num_days_from_monday() as i64
            - self.start.weekday().num_days_from_monday() as i64)
            % 7;
        let end = self.end;
        let first = self.start + Duration::days(offset);
        first
            .iter_weeks()
            .take_while(move |date| *date <= end)
    }
}
