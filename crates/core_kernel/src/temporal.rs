//! Calendar-date arithmetic for payment scheduling
//!
//! This module provides the date toolkit the scheduler is built on:
//! inclusive date ranges with month-span arithmetic, and total (never
//! panicking) day-of-month clamping. All dates are plain calendar dates;
//! this domain has no time-of-day or timezone component.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date range: start {start} must not be after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

/// An inclusive calendar date range
///
/// Both endpoints are part of the range: a contract running from Jan 1 to
/// Dec 31 covers both of those days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start of the range (inclusive)
    pub start: NaiveDate,
    /// End of the range (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range, rejecting reversed endpoints
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns true if this range contains the given date
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, inclusive of both endpoints
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Number of calendar months touched by the range, inclusive of both
    /// endpoints' months
    ///
    /// A range from mid-January to early March spans three months: January,
    /// February, and March.
    pub fn month_span(&self) -> u32 {
        let months = (self.end.year() - self.start.year()) * 12
            + (self.end.month() as i32 - self.start.month() as i32)
            + 1;
        months.max(0) as u32
    }

    /// Number of calendar years touched by the range
    pub fn year_span(&self) -> u32 {
        ((self.end.year() - self.start.year()) + 1).max(0) as u32
    }
}

/// Returns the last valid day of the given month (leap-aware)
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    // The day before the first of the next month.
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

/// Builds a date in the given month, substituting the month's last real day
/// when `day` exceeds it
///
/// This is the clamping rule that keeps schedule arithmetic total: a payment
/// day of 31 lands on Feb 28 (or 29), Apr 30, and so on, never on a
/// nonexistent date.
pub fn clamped_date(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.max(1).min(last_day_of_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("clamped day {day} out of range for {year}-{month}"))
}

/// Advances a (year, month) cursor by `step` months
///
/// The scheduler steps a year/month cursor plus a nominal payment day rather
/// than adding months to a concrete date, so that clamping never compounds:
/// day 31 stays day 31 across a February boundary.
pub fn shift_months(year: i32, month: u32, step: u32) -> (i32, u32) {
    let zero_based = year as i64 * 12 + (month as i64 - 1) + step as i64;
    ((zero_based / 12) as i32, (zero_based % 12) as u32 + 1)
}
