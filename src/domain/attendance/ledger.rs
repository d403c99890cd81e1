//! Attendance ledger: the set of days the user trained.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::foundation::{CalendarDate, DomainError, ErrorCode};

/// Set of unique training dates.
///
/// The persistent store enforces uniqueness on its own; this type answers the
/// counting queries over a loaded snapshot and applies the same set semantics
/// for the in-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceLedger {
    dates: BTreeSet<CalendarDate>,
}

/// Training counts relative to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    pub total: usize,
    pub this_month: usize,
    pub this_year: usize,
}

impl AttendanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a date, failing if it was already recorded.
    pub fn record(&mut self, date: CalendarDate) -> Result<(), DomainError> {
        if !self.dates.insert(date) {
            return Err(already_recorded(date));
        }
        Ok(())
    }

    /// Removes a date. Returns whether it was present.
    pub fn remove(&mut self, date: &CalendarDate) -> bool {
        self.dates.remove(date)
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.dates.contains(date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Dates in ascending order.
    pub fn dates(&self) -> Vec<CalendarDate> {
        self.dates.iter().copied().collect()
    }

    pub fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CalendarDate) -> bool,
    {
        self.dates.iter().filter(|d| predicate(d)).count()
    }

    pub fn count_in_month(&self, year: i32, month: u32) -> usize {
        self.count_where(|d| d.year() == year && d.month() == month)
    }

    pub fn count_in_year(&self, year: i32) -> usize {
        self.count_where(|d| d.year() == year)
    }

    /// Count of dates in `[from, to]`, both ends inclusive.
    pub fn count_between(&self, from: CalendarDate, to: CalendarDate) -> usize {
        if to < from {
            return 0;
        }
        self.dates.range(from..=to).count()
    }

    pub fn summary(&self, today: CalendarDate) -> AttendanceSummary {
        AttendanceSummary {
            total: self.len(),
            this_month: self.count_in_month(today.year(), today.month()),
            this_year: self.count_in_year(today.year()),
        }
    }
}

impl FromIterator<CalendarDate> for AttendanceLedger {
    fn from_iter<I: IntoIterator<Item = CalendarDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

/// Error raised when a date is logged twice.
pub fn already_recorded(date: CalendarDate) -> DomainError {
    DomainError::new(
        ErrorCode::AttendanceAlreadyRecorded,
        format!("Attendance already recorded for {}", date),
    )
    .with_detail("date", date.to_string())
}

/// Parses a client-supplied training day, strict `YYYY-MM-DD`.
pub fn parse_training_day(raw: &str) -> Result<CalendarDate, DomainError> {
    CalendarDate::parse(raw).map_err(|_| {
        DomainError::new(
            ErrorCode::InvalidDate,
            format!("'{}' is not a valid date (expected YYYY-MM-DD)", raw),
        )
        .with_detail("date", raw)
    })
}
