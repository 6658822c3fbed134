use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_END_MONTH, DEFAULT_START_MONTH, MAX_RANGE_MONTHS};
use crate::error::AppError;

/// A calendar month. Orders chronologically; prints as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Returns `None` unless `month` is 1-12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// Months from `self` to `other`, counting both ends.
    fn months_through(self, other: Self) -> i64 {
        (i64::from(other.year) - i64::from(self.year)) * 12 + i64::from(other.month)
            - i64::from(self.month)
            + 1
    }

    pub fn succ(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || AppError::invalid("month", format!("'{s}' is not in YYYY-MM format"));

        let (year, month) = s.split_once('-').ok_or_else(err)?;
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;

        YearMonth::new(year, month)
            .ok_or_else(|| AppError::invalid("month", format!("month must be 01-12, got {month}")))
    }
}

/// Closed month range `[start, end]` bounding the zero-filled series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    start: YearMonth,
    end: YearMonth,
}

impl MonthRange {
    /// Rejects reversed ranges and ranges longer than `MAX_RANGE_MONTHS`.
    pub fn new(start: YearMonth, end: YearMonth) -> Result<Self, AppError> {
        if start > end {
            return Err(AppError::invalid(
                "range",
                format!("start {start} is after end {end}"),
            ));
        }
        if start.months_through(end) > MAX_RANGE_MONTHS {
            return Err(AppError::invalid(
                "range",
                format!("{start}..{end} spans more than {MAX_RANGE_MONTHS} months"),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> YearMonth {
        self.start
    }

    pub fn end(&self) -> YearMonth {
        self.end
    }

    pub fn contains(&self, month: YearMonth) -> bool {
        self.start <= month && month <= self.end
    }

    /// Every month of the range in ascending order.
    pub fn months(&self) -> impl Iterator<Item = YearMonth> {
        let end = self.end;
        std::iter::successors(Some(self.start), move |m| (*m < end).then(|| m.succ()))
    }

    pub fn len(&self) -> usize {
        self.months().count()
    }

    /// A closed range always holds at least one month.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for MonthRange {
    /// January 2023 through December 2025.
    fn default() -> Self {
        let (start_year, start_month) = DEFAULT_START_MONTH;
        let (end_year, end_month) = DEFAULT_END_MONTH;
        Self {
            start: YearMonth { year: start_year, month: start_month },
            end: YearMonth { year: end_year, month: end_month },
        }
    }
}

impl fmt::Display for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
