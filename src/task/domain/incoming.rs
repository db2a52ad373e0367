//! Selection policy for tasks that are due soon.
//!
//! A task is *incoming* when any of the following holds, evaluated against a
//! single reference instant `now` (UTC):
//!
//! 1. its expiry falls on today's calendar day;
//! 2. its expiry falls on tomorrow's calendar day;
//! 3. its expiry lies in the closed interval `[now, now + lookahead]`.
//!
//! The clauses overlap. Only clause 1 admits a same-day expiry that is
//! already in the past.

use super::Task;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Time window used to select incoming tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomingWindow {
    now: DateTime<Utc>,
    lookahead: TimeDelta,
}

/// Half-open `[start, end)` range of instants covering one UTC day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    /// First instant of the day.
    pub start: DateTime<Utc>,
    /// First instant of the following day.
    pub end: DateTime<Utc>,
}

impl DayRange {
    fn of(day: NaiveDate) -> Self {
        let start = day.and_time(NaiveTime::MIN).and_utc();
        let end = day
            .succ_opt()
            .map_or(DateTime::<Utc>::MAX_UTC, |next| next.and_time(NaiveTime::MIN).and_utc());
        Self { start, end }
    }

    /// Returns `true` when `instant` falls inside the range.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}

impl IncomingWindow {
    /// Number of days covered by the rolling clause when not overridden.
    pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 7;

    /// Creates a window anchored at `now` with the default seven-day lookahead.
    #[must_use]
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            lookahead: TimeDelta::days(Self::DEFAULT_LOOKAHEAD_DAYS),
        }
    }

    /// Overrides the rolling lookahead.
    #[must_use]
    pub const fn with_lookahead(mut self, lookahead: TimeDelta) -> Self {
        self.lookahead = lookahead;
        self
    }

    /// Returns the reference instant.
    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Returns the rolling lookahead.
    #[must_use]
    pub const fn lookahead(&self) -> TimeDelta {
        self.lookahead
    }

    /// Returns the inclusive upper bound of the rolling clause.
    #[must_use]
    pub fn end(&self) -> DateTime<Utc> {
        self.now
            .checked_add_signed(self.lookahead)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Returns today's UTC calendar day as a range of instants.
    #[must_use]
    pub fn today(&self) -> DayRange {
        DayRange::of(self.now.date_naive())
    }

    /// Returns tomorrow's UTC calendar day as a range of instants.
    ///
    /// Returns `None` only at the very end of the representable calendar.
    #[must_use]
    pub fn tomorrow(&self) -> Option<DayRange> {
        self.now.date_naive().succ_opt().map(DayRange::of)
    }

    /// Returns `true` when an expiry instant is incoming.
    #[must_use]
    pub fn contains(&self, expiry: DateTime<Utc>) -> bool {
        let due_today = self.today().contains(expiry);
        let due_tomorrow = self.tomorrow().is_some_and(|day| day.contains(expiry));
        let due_within_lookahead = expiry >= self.now && expiry <= self.end();
        due_today || due_tomorrow || due_within_lookahead
    }
}

/// Selection criteria understood by task repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    /// Tasks that are due soon relative to the window's reference instant.
    Incoming(IncomingWindow),
}

impl TaskFilter {
    /// Evaluates the filter against a task in memory.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Incoming(window) => window.contains(task.expiry_date()),
        }
    }
}
