use chrono::{Datelike, Local, Months, NaiveDate};
use std::fmt::{self, Write};
use std::str::FromStr;
use thiserror::Error;

/// ISO date format used for parsing and display (`2024-03-05`)
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// A calendar date with no time-of-day component
///
/// Ordering is chronological and equality is by calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Day(NaiveDate);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DayParseError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    Malformed(String),
}

impl Day {
    /// Build a day from year, 0-based month and day-of-month
    ///
    /// Returns None for dates that do not exist (month 12, February 30, ...).
    pub fn from_ymd(year: i32, month0: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, day).map(Self)
    }

    /// The local wall-clock date
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, 0-based (January = 0)
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    /// Month, 1-based (January = 1)
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Identity key: `{year}-{month+1}-{day}` without zero padding
    pub fn key(&self) -> String {
        format!("{}-{}-{}", self.year(), self.month0() + 1, self.day())
    }

    /// Column in a Sunday-first week (Sunday = 0)
    pub fn weekday_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    pub fn is_first_of_month(&self) -> bool {
        self.day() == 1
    }

    /// First day of the month `offset` months away from this day's month
    pub fn month_start(&self, offset: i32) -> Option<Self> {
        let first = self.0.with_day(1)?;
        let months = Months::new(offset.unsigned_abs());
        let shifted = if offset >= 0 {
            first.checked_add_months(months)
        } else {
            first.checked_sub_months(months)
        };
        shifted.map(Self)
    }

    /// Last day of the month `offset` months away from this day's month
    pub fn month_end(&self, offset: i32) -> Option<Self> {
        self.month_start(offset.checked_add(1)?)?
            .0
            .pred_opt()
            .map(Self)
    }

    /// Format with a chrono format string
    ///
    /// Falls back to ISO when the format does not apply to a date
    /// (time fields, unknown specifiers).
    pub fn format(&self, fmt: &str) -> String {
        self.try_format(fmt).unwrap_or_else(|| self.to_string())
    }

    /// Format with a chrono format string, None if chrono cannot apply it
    pub fn try_format(&self, fmt: &str) -> Option<String> {
        let mut out = String::new();
        write!(out, "{}", self.0.format(fmt)).ok()?;
        Some(out)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl FromStr for Day {
    type Err = DayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), ISO_FORMAT)
            .map(Self)
            .map_err(|_| DayParseError::Malformed(s.to_string()))
    }
}

impl From<NaiveDate> for Day {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}
