//! Calendar month value type
//!
//! Budgets and monthly aggregates are keyed by year + month. Ordering is
//! chronological and equality never depends on how a label was formatted.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
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

/// A calendar month (e.g., "2025-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a month, returning None if `month` is outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month of the local wall clock
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.next().start_date() - Duration::days(1)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Get the following month
    pub fn next(&self) -> Self {
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

    /// Get the preceding month
    pub fn prev(&self) -> Self {
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

    /// This month followed by the next `count - 1` months
    pub fn upcoming(&self, count: usize) -> Vec<Self> {
        std::iter::successors(Some(*self), |m| Some(m.next()))
            .take(count)
            .collect()
    }

    /// Short human label, e.g. "Jan 2025"
    pub fn short_label(&self) -> String {
        format!("{} {}", &self.month_name()[..3], self.year)
    }

    /// Long human label, e.g. "January 2025"
    pub fn long_label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Parse a month string
    ///
    /// Formats:
    /// - "2025-01"
    /// - "January 2025", "Jan 2025"
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();

        if let Some((year, month)) = s.split_once('-') {
            let year: i32 = year
                .parse()
                .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
            let month: u32 = month
                .parse()
                .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
            return Self::new(year, month).ok_or(MonthParseError::InvalidMonth(month));
        }

        if let Some((name, year)) = s.split_once(' ') {
            let month = month_from_name(name)
                .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;
            let year: i32 = year
                .trim()
                .parse()
                .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
            return Ok(Self { year, month });
        }

        Err(MonthParseError::InvalidFormat(s.to_string()))
    }
}

/// Resolve "jan", "January", "SEPT" and friends to a month number
fn month_from_name(name: &str) -> Option<u32> {
    let name = name.trim().to_lowercase();
    let stem = name.get(..3)?;
    MONTH_NAMES
        .iter()
        .position(|full| full.to_lowercase().starts_with(stem))
        .filter(|&i| MONTH_NAMES[i].to_lowercase().starts_with(&name))
        .map(|i| i as u32 + 1)
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}
