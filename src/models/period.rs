//! Monthly archive periods
//!
//! A rollover archives the budget under the calendar month that just ended.
//! Archive files are named `<month>_<year>.json` (`2_2025.json`), without zero
//! padding, which is the naming earlier archives already use.

use chrono::{Datelike, Month, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month identifying one archived budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArchivePeriod {
    pub year: i32,
    pub month: u32,
}

impl ArchivePeriod {
    /// Create a period, returning None if the month is not 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The period a date falls in
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// File name of the archive for this period
    pub fn file_name(&self) -> String {
        format!("{}_{}.json", self.month, self.year)
    }

    /// Parse an archive file name back into a period
    ///
    /// Returns None for anything that isn't `<month>_<year>.json`.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(".json")?;
        let (month, year) = stem.split_once('_')?;
        if month.is_empty() || !month.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    /// Full English month name
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or("Unknown", |m| m.name())
    }
}

impl fmt::Display for ArchivePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

/// Step a date back one calendar month.
///
/// The day is clamped to the length of the target month, so March 31 becomes
/// February 28 (or 29 in a leap year). Only fails for dates at the very start
/// of chrono's representable range.
pub fn previous_month(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_months(Months::new(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_validates_month() {
        assert!(ArchivePeriod::new(2025, 0).is_none());
        assert!(ArchivePeriod::new(2025, 13).is_none());
        assert_eq!(
            ArchivePeriod::new(2025, 2),
            Some(ArchivePeriod { year: 2025, month: 2 })
        );
    }

    #[test]
    fn test_previous_month_same_day() {
        assert_eq!(previous_month(date(2025, 3, 15)), Some(date(2025, 2, 15)));
    }

    #[test]
    fn test_previous_month_clamps_day() {
        assert_eq!(previous_month(date(2025, 3, 31)), Some(date(2025, 2, 28)));
        assert_eq!(previous_month(date(2024, 3, 31)), Some(date(2024, 2, 29)));
        assert_eq!(previous_month(date(2025, 5, 31)), Some(date(2025, 4, 30)));
        // century rules: 1900 is not a leap year, 2000 is
        assert_eq!(previous_month(date(1900, 3, 30)), Some(date(1900, 2, 28)));
        assert_eq!(previous_month(date(2000, 3, 30)), Some(date(2000, 2, 29)));
    }

    #[test]
    fn test_previous_month_crosses_year() {
        assert_eq!(previous_month(date(2025, 1, 10)), Some(date(2024, 12, 10)));
    }

    #[test]
    fn test_file_name_round_trip() {
        let period = ArchivePeriod::new(2025, 2).unwrap();
        assert_eq!(period.file_name(), "2_2025.json");
        assert_eq!(ArchivePeriod::from_file_name("2_2025.json"), Some(period));
        assert_eq!(
            ArchivePeriod::from_file_name("12_2024.json"),
            ArchivePeriod::new(2024, 12)
        );
    }

    #[test]
    fn test_from_file_name_ignores_other_files() {
        assert_eq!(ArchivePeriod::from_file_name("budget.json"), None);
        assert_eq!(ArchivePeriod::from_file_name("conf.json"), None);
        assert_eq!(ArchivePeriod::from_file_name("13_2024.json"), None);
        assert_eq!(ArchivePeriod::from_file_name("2_2025.json.tmp"), None);
        assert_eq!(ArchivePeriod::from_file_name("+2_2025.json"), None);
    }

    #[test]
    fn test_display() {
        let period = ArchivePeriod::new(2025, 2).unwrap();
        assert_eq!(period.to_string(), "February 2025");
    }

    #[test]
    fn test_ordering() {
        let mut periods = vec![
            ArchivePeriod::new(2025, 1).unwrap(),
            ArchivePeriod::new(2024, 12).unwrap(),
            ArchivePeriod::new(2024, 2).unwrap(),
        ];
        periods.sort();
        assert_eq!(periods[0], ArchivePeriod::new(2024, 2).unwrap());
        assert_eq!(periods[2], ArchivePeriod::new(2025, 1).unwrap());
    }
}
