//! Calendar-month keys and month arithmetic.
//!
//! Both the deposit installment schedule and the dashboard aggregator walk
//! calendar months; the arithmetic lives here so the two cannot drift
//! apart.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// A calendar month, identified by year and month number.
///
/// Orders chronologically and displays as `YYYY-MM`, e.g. `2024-03`, the
/// key format the dashboard charts use.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthKey {
    /// The calendar year.
    pub year: i32,
    /// The month number, 1 (January) through 12 (December).
    pub month: u8,
}

impl MonthKey {
    /// The month `date` falls in.
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: u8::from(date.month()),
        }
    }

    /// The month immediately after this one.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The month immediately before this one.
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The number of calendar-month boundaries from `earlier` to `self`.
    ///
    /// Counts month steps, not elapsed days: March to April is 1 no matter
    /// which days are involved. Negative when `earlier` is actually later.
    pub fn months_since(self, earlier: Self) -> i32 {
        (self.year - earlier.year) * 12 + i32::from(self.month) - i32::from(earlier.month)
    }

    /// The first day of the month.
    pub fn first_day(self) -> Date {
        let month = Month::try_from(self.month).expect("month number is always 1-12");
        Date::from_calendar_date(self.year, month, 1).expect("day 1 is valid in every month")
    }

    /// The three-letter label used on chart axes, e.g. "Mar".
    pub fn label(self) -> &'static str {
        match Month::try_from(self.month).expect("month number is always 1-12") {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
