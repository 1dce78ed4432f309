//! The attendance screen boundary.
//!
//! [`AttendanceScreen`] owns the per-screen state: the last fetched punch
//! records, the current calendar marking, an error banner and the
//! refreshing flag. Fetch failures never block the calendar; they only set
//! the banner while the previous marking stays on screen.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::calendar::{
    CalendarMarking, DaySummary, LegendEntry, MarkedDates, derive_day_statuses, describe_day,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{BranchPolicy, HolidayEntry, PunchRecord};
use crate::session::{SecureStore, Session, Token};

/// The remote data an attendance screen needs.
pub trait AttendanceSource {
    /// Fetches the employee's punch activity. Requires the bearer token.
    fn punch_activities(&self, token: &Token) -> EngineResult<Vec<PunchRecord>>;

    /// Fetches the holiday list. Needs no authentication.
    fn holidays(&self) -> EngineResult<Vec<HolidayEntry>>;
}

/// An [`AttendanceSource`] that serves fixed JSON payloads.
///
/// Payloads are parsed on every fetch, so a malformed body surfaces as
/// [`EngineError::FetchFailed`] just like a bad response would.
#[derive(Debug, Clone)]
pub struct JsonAttendanceSource {
    punch_activities: String,
    holidays: String,
}

impl JsonAttendanceSource {
    /// Creates a source from the two response bodies.
    pub fn new(punch_activities: impl Into<String>, holidays: impl Into<String>) -> Self {
        Self {
            punch_activities: punch_activities.into(),
            holidays: holidays.into(),
        }
    }
}

impl AttendanceSource for JsonAttendanceSource {
    fn punch_activities(&self, _token: &Token) -> EngineResult<Vec<PunchRecord>> {
        serde_json::from_str(&self.punch_activities).map_err(|e| EngineError::FetchFailed {
            endpoint: "punch-activities".to_string(),
            message: e.to_string(),
        })
    }

    fn holidays(&self) -> EngineResult<Vec<HolidayEntry>> {
        serde_json::from_str(&self.holidays).map_err(|e| EngineError::FetchFailed {
            endpoint: "holidays".to_string(),
            message: e.to_string(),
        })
    }
}

/// What happened when a refresh was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The marking was recomputed.
    Updated,
    /// The marking was recomputed without holidays because that fetch failed.
    UpdatedWithoutHolidays,
    /// Punch data could not be fetched; the previous marking was kept.
    Failed,
    /// A refresh was already running.
    Skipped,
}

/// State of one attendance calendar screen.
#[derive(Debug)]
pub struct AttendanceScreen<'a> {
    config: &'a ConfigLoader,
    punch_records: Vec<PunchRecord>,
    marking: CalendarMarking,
    error: Option<String>,
    refreshing: bool,
}

impl<'a> AttendanceScreen<'a> {
    /// Creates an empty screen.
    pub fn new(config: &'a ConfigLoader) -> Self {
        Self {
            config,
            punch_records: Vec::new(),
            marking: CalendarMarking::default(),
            error: None,
            refreshing: false,
        }
    }

    /// Marks a refresh as started. Returns false if one is already running.
    pub fn begin_refresh(&mut self) -> bool {
        if self.refreshing {
            return false;
        }
        self.refreshing = true;
        true
    }

    /// Returns true while a refresh is running.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Fetches fresh data and recomputes the calendar.
    ///
    /// Ignored while another refresh is in flight. Without a token the
    /// calendar is cleared and the banner set. When punch data cannot be
    /// fetched the banner is set and the current marking is kept. A failed
    /// holiday fetch still updates the calendar, just without listed holidays.
    pub fn refresh<S, A>(
        &mut self,
        session: &Session<S>,
        source: &A,
        today: NaiveDate,
    ) -> RefreshOutcome
    where
        S: SecureStore,
        A: AttendanceSource,
    {
        if !self.begin_refresh() {
            info!("Refresh already in progress, ignoring request");
            return RefreshOutcome::Skipped;
        }

        let outcome = self.load(session, source, today);
        self.refreshing = false;
        outcome
    }

    fn load<S, A>(&mut self, session: &Session<S>, source: &A, today: NaiveDate) -> RefreshOutcome
    where
        S: SecureStore,
        A: AttendanceSource,
    {
        let token = match session.require_token() {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "No session token, clearing attendance calendar");
                self.marking = CalendarMarking::default();
                self.punch_records.clear();
                self.error = Some(err.to_string());
                return RefreshOutcome::Failed;
            }
        };

        let punch_records = match source.punch_activities(&token) {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "Failed to load punch activities");
                self.error = Some(err.to_string());
                return RefreshOutcome::Failed;
            }
        };

        let (holidays, outcome) = match source.holidays() {
            Ok(holidays) => {
                self.error = None;
                (holidays, RefreshOutcome::Updated)
            }
            Err(err) => {
                warn!(error = %err, "Failed to load holidays");
                self.error = Some(err.to_string());
                (Vec::new(), RefreshOutcome::UpdatedWithoutHolidays)
            }
        };

        let policy = self.branch_policy(session);
        let result = derive_day_statuses(&punch_records, &holidays, &policy, today, None);
        info!(
            records = punch_records.len(),
            marked = result.statuses.len(),
            excluded = result.excluded.len(),
            "Attendance calendar refreshed"
        );

        self.marking = CalendarMarking::from_derivation(&result);
        self.punch_records = punch_records;
        outcome
    }

    fn branch_policy<S: SecureStore>(&self, session: &Session<S>) -> BranchPolicy {
        match session.branch_name() {
            Some(branch) => self.config.branch_policy(&branch),
            None => BranchPolicy::without_weekly_holiday(""),
        }
    }

    /// Returns the error banner text, if the last refresh had a problem.
    pub fn error_banner(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the current marking.
    pub fn marking(&self) -> &CalendarMarking {
        &self.marking
    }

    /// Returns the per-date styles for the calendar widget.
    pub fn marked_dates(&self) -> MarkedDates {
        self.marking.to_marked_dates(self.config.palette())
    }

    /// Returns the legend shown under the calendar.
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.config.palette().legend()
    }

    /// Handles a tap on a calendar day.
    pub fn select_day(&self, date: &str) -> DaySummary {
        describe_day(date, &self.punch_records)
    }
}
