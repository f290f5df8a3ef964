//! Month arithmetic for the displayed calendar month.
//!
//! Months are zero-based (`0` = January, `11` = December) throughout.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SportCalError, SportCalResult};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Shift `(year, month)` by `delta` months.
///
/// Stepping forward from December (`11`) lands on January (`0`) of the next
/// year; stepping back from January lands on December of the previous year.
/// Larger deltas wrap as many times as needed. Years past the `i32` range
/// saturate.
pub fn add_months(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = i64::from(year) * 12 + i64::from(month) + i64::from(delta);
    let year = i32::try_from(total.div_euclid(12))
        .unwrap_or(if total < 0 { i32::MIN } else { i32::MAX });
    (year, total.rem_euclid(12) as u32)
}

/// Number of days in the zero-based `month` of `year`, or `None` for a
/// month chrono cannot represent.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = first_of(year, month)?;
    let days = (28..=31)
        .take_while(|&day| first.with_day(day).is_some())
        .last()?;
    Some(days)
}

/// Weekday of the 1st of the month, `0` = Sunday.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    first_of(year, month).map_or(0, |d| d.weekday().num_days_from_sunday())
}

/// `YYYY-MM-DD` key for a day of the zero-based `month`.
pub fn date_key(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month + 1, day)
}

fn first_of(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month + 1, 1)
}

/// The month currently shown on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCursor {
    pub year: i32,
    /// Zero-based month index.
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Self {
        let (year, month) = add_months(year, month, 0);
        MonthCursor { year, month }
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        MonthCursor {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// Parse `YYYY-MM` (one-based month) or a full `YYYY-MM-DD` date.
    pub fn parse(s: &str) -> SportCalResult<Self> {
        let invalid = || SportCalError::InvalidMonth(s.to_string());

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::containing(date));
        }

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        let cursor = MonthCursor {
            year,
            month: month - 1,
        };
        if !cursor.is_representable() {
            return Err(invalid());
        }
        Ok(cursor)
    }

    /// Whether chrono can build every date of this month.
    pub fn is_representable(self) -> bool {
        self.month < 12 && days_in_month(self.year, self.month).is_some()
    }

    /// Move by `delta` months. A move past the dates chrono can represent
    /// leaves the cursor where it is.
    pub fn shifted(self, delta: i32) -> Self {
        let (year, month) = add_months(self.year, self.month, delta);
        let target = MonthCursor { year, month };
        if target.is_representable() { target } else { self }
    }

    pub fn next(self) -> Self {
        self.shifted(1)
    }

    pub fn prev(self) -> Self {
        self.shifted(-1)
    }

    pub fn days(self) -> u32 {
        days_in_month(self.year, self.month).unwrap_or(0)
    }

    pub fn first_weekday(self) -> u32 {
        first_weekday(self.year, self.month)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        self == Self::containing(date)
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}
