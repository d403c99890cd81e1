//! Calendar date value object (day granularity, no time component).

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Timestamp, ValidationError};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_LEN: usize = 10;

/// A day on the calendar, rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Wraps an existing chrono date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a date from its components.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "date",
                    format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
                )
            })
    }

    /// Parses a strict `YYYY-MM-DD` string: zero-padded, no surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::invalid_format("date", format!("'{}' is not YYYY-MM-DD", s));
        if s.len() != DATE_LEN {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Parses either `YYYY-MM-DD` or an RFC 3339 timestamp, keeping its UTC date.
    pub fn parse_flexible(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.len() > 10 {
            return Timestamp::parse_rfc3339(s)
                .map(|ts| ts.date())
                .map_err(|_| ValidationError::invalid_format("date", format!("'{}' is not a date", s)));
        }
        Self::parse(s)
    }

    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The following day, if representable.
    pub fn next_day(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Whole calendar months from `self` until `later`, partial months not counted.
    ///
    /// Month arithmetic clamps to the end of shorter months, so Jan 31 to Feb 28 is
    /// one whole month. Returns 0 when `later` is before `self`.
    pub fn whole_months_until(&self, later: CalendarDate) -> u32 {
        if later.0 <= self.0 {
            return 0;
        }
        let span = (later.year() - self.year()) * 12 + later.month() as i32 - self.month() as i32;
        let mut months = span.max(0) as u32;
        while months > 0 {
            match self.0.checked_add_months(Months::new(months)) {
                Some(anniversary) if anniversary <= later.0 => break,
                _ => months -= 1,
            }
        }
        months
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
