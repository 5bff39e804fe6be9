//! Calendar month representation
//!
//! A `YearMonth` is the unit every view and computation is scoped to. Month
//! lengths come from an explicit table so occurrence math never depends on
//! wall-clock time zones.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`; 0 for an invalid month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// A calendar month, displayed and persisted as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a month; `None` if `month` is outside 1-12 or the year is
    /// outside the supported calendar range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        // Both the first day and the first day of the next month must exist
        NaiveDate::from_ymd_opt(year, month, 1)?;
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?;
        Some(Self { year, month })
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// The date for `day` in this month, clamped to the month's last day
    pub fn clamped_day(&self, day: u32) -> Option<NaiveDate> {
        let day = day.clamp(1, self.days_in_month());
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// First day of the month (inclusive lower bound)
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// First day of the following month (exclusive upper bound)
    pub fn end_date_exclusive(&self) -> NaiveDate {
        self.next().start_date()
    }

    /// Check if a date falls within `[start, end)`
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date < self.end_date_exclusive()
    }

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

    /// Dutch month name with year, e.g. `februari 2024`
    pub fn long_name(&self) -> String {
        const NAMES: [&str; 12] = [
            "januari",
            "februari",
            "maart",
            "april",
            "mei",
            "juni",
            "juli",
            "augustus",
            "september",
            "oktober",
            "november",
            "december",
        ];
        let name = NAMES
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?");
        format!("{} {}", name, self.year)
    }

    /// Parse `YYYY-MM`
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        if month.len() != 2 {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }

        Self::new(year, month).ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))
    }
}

impl Default for YearMonth {
    fn default() -> Self {
        Self::current()
    }
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

impl TryFrom<String> for YearMonth {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
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
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format: '{}' (expected YYYY-MM)", s)
            }
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn test_table_matches_chrono() {
        for year in [1999, 2000, 2023, 2024, 2100] {
            for month in 1..=12 {
                let m = ym(year, month);
                let chrono_len = (m.end_date_exclusive() - m.start_date()).num_days();
                assert_eq!(i64::from(m.days_in_month()), chrono_len);
            }
        }
    }

    #[test]
    fn test_bounds_are_half_open() {
        let feb = ym(2024, 2);
        assert_eq!(feb.start_date(), date(2024, 2, 1));
        assert_eq!(feb.end_date_exclusive(), date(2024, 3, 1));
        assert!(feb.contains(date(2024, 2, 1)));
        assert!(feb.contains(date(2024, 2, 29)));
        assert!(!feb.contains(date(2024, 3, 1)));
        assert!(!feb.contains(date(2024, 1, 31)));
    }

    #[test]
    fn test_clamped_day() {
        assert_eq!(ym(2024, 4).clamped_day(31), Some(date(2024, 4, 30)));
        assert_eq!(ym(2025, 2).clamped_day(29), Some(date(2025, 2, 28)));
        assert_eq!(ym(2024, 1).clamped_day(15), Some(date(2024, 1, 15)));
    }

    #[test]
    fn test_navigation() {
        assert_eq!(ym(2024, 12).next(), ym(2025, 1));
        assert_eq!(ym(2025, 1).prev(), ym(2024, 12));
        assert_eq!(ym(2024, 6).next().prev(), ym(2024, 6));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(YearMonth::parse("2024-02").unwrap(), ym(2024, 2));
        assert_eq!(ym(2024, 2).to_string(), "2024-02");
        assert_eq!(
            YearMonth::parse("2024-13"),
            Err(MonthParseError::InvalidMonth(13))
        );
        assert!(YearMonth::parse("2024").is_err());
        assert!(YearMonth::parse("2024-2").is_err());
        assert!(YearMonth::parse("abcd-01").is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ym(2024, 2)).unwrap();
        assert_eq!(json, "\"2024-02\"");
        let back: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ym(2024, 2));
        assert!(serde_json::from_str::<YearMonth>("\"nope\"").is_err());
    }

    #[test]
    fn test_long_name() {
        assert_eq!(ym(2024, 2).long_name(), "februari 2024");
    }
}
