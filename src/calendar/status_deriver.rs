//! Attendance status derivation.
//!
//! Turns punch records, the holiday list and the branch's weekly-holiday
//! rule into one [`DayStatus`] per calendar date. Rules are applied in a
//! fixed order and later rules overwrite earlier ones:
//!
//! 1. Punched in and out: [`DayStatus::Present`].
//! 2. Punched in only: [`DayStatus::InProgress`] today, [`DayStatus::Absent`]
//!    on any earlier day.
//! 3. No record at all inside the absence range: [`DayStatus::Absent`].
//! 4. Listed holidays: [`DayStatus::Holiday`], overwriting anything.
//! 5. The branch's weekly holiday in the current year: [`DayStatus::Holiday`],
//!    but only on dates that are still unclassified.
//!
//! Dates left out of the map are [`DayStatus::Unmarked`].

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::EngineError;
use crate::models::{BranchPolicy, DayStatus, HolidayEntry, PunchRecord};

use super::dates::{DateRange, MAX_ABSENCE_RANGE_DAYS};

/// Where an excluded record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    /// The punch-activities list.
    Punch,
    /// The holiday list.
    Holiday,
}

/// Why a record was left out of the derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// The record's date could not be parsed.
    UnparseableDate,
    /// The record has a punch-out but no punch-in.
    PunchOutWithoutPunchIn,
}

impl ExclusionReason {
    /// The record field at fault.
    pub fn field(&self) -> &'static str {
        match self {
            ExclusionReason::UnparseableDate => "date",
            ExclusionReason::PunchOutWithoutPunchIn => "punchInImagePresent",
        }
    }
}

/// A record that was skipped as a data-quality issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedRecord {
    /// Which input list the record came from.
    pub source: RecordSource,
    /// Position of the record in that list.
    pub index: usize,
    /// The record's raw date value.
    pub date: String,
    /// Why it was skipped.
    pub reason: ExclusionReason,
}

/// The outcome of a derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationResult {
    /// The status of every classified date.
    pub statuses: BTreeMap<NaiveDate, DayStatus>,
    /// The range over which missing days were marked absent, if any.
    pub absence_range: Option<DateRange>,
    /// Records skipped because of bad data.
    pub excluded: Vec<ExcludedRecord>,
}

impl DerivationResult {
    /// Returns the status for `date`, [`DayStatus::Unmarked`] if none was derived.
    pub fn status_on(&self, date: NaiveDate) -> DayStatus {
        self.statuses
            .get(&date)
            .copied()
            .unwrap_or(DayStatus::Unmarked)
    }

    /// Counts the dates carrying `status`.
    pub fn count(&self, status: DayStatus) -> usize {
        self.statuses.values().filter(|s| **s == status).count()
    }
}

/// Derives the attendance status of each calendar date.
///
/// # Arguments
///
/// * `punch_records` - The employee's punch records, in any order
/// * `holidays` - The holiday list
/// * `policy` - The employee's branch weekly-holiday rule
/// * `today` - The reference date separating past from future
/// * `range` - Explicit bounds for absence-fill. When `None`, the range runs
///   from the earliest punch date to `today`.
///
/// # Behavior
///
/// - Absence-fill covers at most [`MAX_ABSENCE_RANGE_DAYS`] days ending at
///   `today`.
/// - Absence-fill never runs past `today` and never runs at all when there
///   is no punch record with a parseable date, whatever range is given.
/// - Records with unparseable dates, and punch-outs without a punch-in, are
///   excluded and reported in [`DerivationResult::excluded`].
/// - A date with any parseable record, even an excluded one, is never
///   filled absent. Only records with a punch-in are classified.
/// - The weekly holiday covers the calendar year of `today`.
///
/// # Example
///
/// ```
/// use attendance_engine::calendar::{derive_day_statuses, DateRange};
/// use attendance_engine::models::{BranchPolicy, DayStatus, PunchRecord};
/// use chrono::NaiveDate;
///
/// let date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let records = vec![PunchRecord {
///     date: "2024-06-01".to_string(),
///     punch_in_present: true,
///     punch_out_present: true,
///     punch_in_time: Some("09:00".to_string()),
///     punch_out_time: Some("18:00".to_string()),
/// }];
///
/// let result = derive_day_statuses(
///     &records,
///     &[],
///     &BranchPolicy::without_weekly_holiday("Main Branch"),
///     date("2024-06-03"),
///     Some(DateRange::new(date("2024-06-01"), date("2024-06-03"))),
/// );
///
/// assert_eq!(result.status_on(date("2024-06-01")), DayStatus::Present);
/// assert_eq!(result.status_on(date("2024-06-02")), DayStatus::Absent);
/// assert_eq!(result.status_on(date("2024-06-03")), DayStatus::Absent);
/// ```
pub fn derive_day_statuses(
    punch_records: &[PunchRecord],
    holidays: &[HolidayEntry],
    policy: &BranchPolicy,
    today: NaiveDate,
    range: Option<DateRange>,
) -> DerivationResult {
    let mut excluded = Vec::new();
    let punches = parse_punches(punch_records, &mut excluded);
    let mut statuses = BTreeMap::new();

    for (date, record) in &punches.punched_in {
        if record.is_complete() {
            statuses.insert(*date, DayStatus::Present);
        }
    }

    for (date, record) in &punches.punched_in {
        if !record.is_open() {
            continue;
        }
        if *date == today {
            statuses.insert(*date, DayStatus::InProgress);
        } else if *date < today {
            statuses.insert(*date, DayStatus::Absent);
        }
    }

    let absence_range = absence_range(&punches.recorded, today, range);
    if let Some(fill) = absence_range {
        for date in fill.days().filter(|d| !punches.recorded.contains(d)) {
            statuses.insert(date, DayStatus::Absent);
        }
    }

    for (index, holiday) in holidays.iter().enumerate() {
        match holiday.calendar_date() {
            Some(date) => {
                statuses.insert(date, DayStatus::Holiday);
            }
            None => excluded.push(exclude(
                RecordSource::Holiday,
                index,
                &holiday.holiday_date,
                ExclusionReason::UnparseableDate,
            )),
        }
    }

    if let Some(weekday) = policy.weekly_holiday {
        for date in DateRange::year_of(today).weekdays(weekday) {
            statuses.entry(date).or_insert(DayStatus::Holiday);
        }
    }

    debug!(
        branch = %policy.branch_name,
        records = punch_records.len(),
        holidays = holidays.len(),
        classified = statuses.len(),
        excluded = excluded.len(),
        "Derived attendance statuses"
    );

    DerivationResult {
        statuses,
        absence_range,
        excluded,
    }
}

/// Punch records sorted by what the rules can do with them.
struct ParsedPunches<'a> {
    /// Every date carrying a record with a parseable date, excluded or not.
    recorded: BTreeSet<NaiveDate>,
    /// Records with a punch-in, which the attendance rules classify.
    punched_in: Vec<(NaiveDate, &'a PunchRecord)>,
}

fn parse_punches<'a>(
    punch_records: &'a [PunchRecord],
    excluded: &mut Vec<ExcludedRecord>,
) -> ParsedPunches<'a> {
    let mut recorded = BTreeSet::new();
    let mut punched_in = Vec::with_capacity(punch_records.len());

    for (index, record) in punch_records.iter().enumerate() {
        let Some(date) = record.calendar_date() else {
            excluded.push(exclude(
                RecordSource::Punch,
                index,
                &record.date,
                ExclusionReason::UnparseableDate,
            ));
            continue;
        };
        recorded.insert(date);

        if record.is_inconsistent() {
            excluded.push(exclude(
                RecordSource::Punch,
                index,
                &record.date,
                ExclusionReason::PunchOutWithoutPunchIn,
            ));
            continue;
        }

        if !record.punch_in_present {
            debug!(date = %date, "Punch record has no punches, leaving day unclassified");
            continue;
        }

        punched_in.push((date, record));
    }

    ParsedPunches {
        recorded,
        punched_in,
    }
}

/// Picks the range over which missing days count as absent.
fn absence_range(
    recorded: &BTreeSet<NaiveDate>,
    today: NaiveDate,
    explicit: Option<DateRange>,
) -> Option<DateRange> {
    let earliest = *recorded.first()?;
    let floor = today
        .checked_sub_signed(Duration::days(MAX_ABSENCE_RANGE_DAYS - 1))
        .unwrap_or(NaiveDate::MIN);
    let range = explicit.unwrap_or(DateRange::new(earliest, today));
    let clamped = range.clamp_end(today).clamp_start(floor);
    (!clamped.is_empty()).then_some(clamped)
}

fn exclude(
    source: RecordSource,
    index: usize,
    date: &str,
    reason: ExclusionReason,
) -> ExcludedRecord {
    let error = EngineError::InvalidRecord {
        field: reason.field().to_string(),
        value: date.to_string(),
    };
    warn!(
        source = ?source,
        index,
        reason = ?reason,
        error = %error,
        "Excluding record from attendance calendar"
    );
    ExcludedRecord {
        source,
        index,
        date: date.to_string(),
        reason,
    }
}
