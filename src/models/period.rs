//! Reporting period representation
//!
//! A report always covers one calendar month of one year. Range checking of
//! the month belongs to whoever builds the period from user input; the
//! report core trusts what it is given.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

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

/// A (month, year) reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub year: i32,
    pub month: u32,
}

impl ReportPeriod {
    /// Create a monthly period
    pub fn new(month: u32, year: i32) -> Self {
        Self { year, month }
    }

    /// Create a period after checking the month is in 1..=12
    pub fn checked(month: u32, year: i32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        Ok(Self::new(month, year))
    }

    /// Get the current monthly period
    pub fn current_month() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::new(today.month(), today.year())
    }

    /// The English month name, e.g. "March"
    pub fn month_name(&self) -> &'static str {
        self.month
            .checked_sub(1)
            .and_then(|idx| MONTH_NAMES.get(idx as usize))
            .copied()
            .unwrap_or("Unknown")
    }

    /// Human-readable label, e.g. "March 2024"
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    /// Numeric label, e.g. "3/2024"
    pub fn numeric_label(&self) -> String {
        format!("{}/{}", self.month, self.year)
    }

    /// First day of the period, `None` for an out-of-range month
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Last day of the period (inclusive)
    pub fn end_date(&self) -> Option<NaiveDate> {
        let next = self.next();
        NaiveDate::from_ymd_opt(next.year, next.month, 1).map(|d| d - Duration::days(1))
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Get the next period
    pub fn next(&self) -> Self {
        if self.month >= 12 {
            Self::new(1, self.year + 1)
        } else {
            Self::new(self.month + 1, self.year)
        }
    }

    /// Get the previous period
    pub fn prev(&self) -> Self {
        if self.month <= 1 {
            Self::new(12, self.year - 1)
        } else {
            Self::new(self.month - 1, self.year)
        }
    }

    /// Parse a period string in `YYYY-MM` form
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::checked(month, year)
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            Self::InvalidMonth(m) => write!(f, "Invalid month: {} (must be 1-12)", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let period = ReportPeriod::new(3, 2024);
        assert_eq!(period.month_name(), "March");
        assert_eq!(period.label(), "March 2024");
        assert_eq!(period.numeric_label(), "3/2024");
        assert_eq!(period.to_string(), "2024-03");
    }

    #[test]
    fn test_out_of_range_month_name() {
        assert_eq!(ReportPeriod::new(0, 2024).month_name(), "Unknown");
        assert_eq!(ReportPeriod::new(13, 2024).month_name(), "Unknown");
    }

    #[test]
    fn test_date_bounds() {
        let feb = ReportPeriod::new(2, 2024);
        assert_eq!(feb.start_date(), NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(feb.end_date(), NaiveDate::from_ymd_opt(2024, 2, 29));

        let dec = ReportPeriod::new(12, 2024);
        assert_eq!(dec.end_date(), NaiveDate::from_ymd_opt(2024, 12, 31));
    }

    #[test]
    fn test_contains() {
        let period = ReportPeriod::new(3, 2024);
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()));
    }

    #[test]
    fn test_navigation() {
        assert_eq!(ReportPeriod::new(12, 2024).next(), ReportPeriod::new(1, 2025));
        assert_eq!(ReportPeriod::new(1, 2025).prev(), ReportPeriod::new(12, 2024));
    }

    #[test]
    fn test_parse() {
        assert_eq!(ReportPeriod::parse("2024-03").unwrap(), ReportPeriod::new(3, 2024));
        assert_eq!(
            ReportPeriod::parse("2024-13"),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert!(ReportPeriod::parse("March").is_err());
    }
}
