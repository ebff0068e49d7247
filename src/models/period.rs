//! Budget month and period tab representation
//!
//! A budget is set up for one calendar month. The month is exchanged with the
//! server as a `YYYY-MM` query value.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BudgetError;

/// A calendar month a budget is set up for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BudgetMonth {
    pub year: i32,
    pub month: u32,
}

impl BudgetMonth {
    /// Create a month, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, BudgetError> {
        if !(1..=12).contains(&month) {
            return Err(BudgetError::Parse(format!("Invalid month number: {}", month)));
        }
        Ok(Self { year, month })
    }

    /// The current month in local time
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// First day of this month
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// The following month
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

    /// The preceding month
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

    /// Parse a `YYYY-MM` value
    pub fn parse(s: &str) -> Result<Self, BudgetError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| BudgetError::Parse(format!("Invalid month format: {}", s)))?;

        let year: i32 = year
            .parse()
            .map_err(|_| BudgetError::Parse(format!("Invalid year: {}", year)))?;
        let month: u32 = month
            .parse()
            .map_err(|_| BudgetError::Parse(format!("Invalid month: {}", month)))?;

        Self::new(year, month)
    }

    /// Human readable label, e.g. "March 2025"
    pub fn label(&self) -> String {
        match self.first_day() {
            Some(date) => date.format("%B %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for BudgetMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Period tab selected in the budget view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PeriodTab {
    #[default]
    Monthly,
    Weekly,
    Yearly,
}

impl PeriodTab {
    /// All tabs in display order
    pub fn all() -> &'static [Self] {
        &[Self::Monthly, Self::Weekly, Self::Yearly]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Weekly => "Weekly",
            Self::Yearly => "Yearly",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_parse_and_display() {
        let month = BudgetMonth::parse("2025-03").unwrap();
        assert_eq!(month, BudgetMonth { year: 2025, month: 3 });
        assert_eq!(month.to_string(), "2025-03");
        assert_eq!(month.label(), "March 2025");
    }

    #[test]
    fn test_month_parse_rejects_invalid() {
        assert!(BudgetMonth::parse("2025").is_err());
        assert!(BudgetMonth::parse("2025-13").is_err());
        assert!(BudgetMonth::parse("2025-00").is_err());
        assert!(BudgetMonth::parse("abcd-01").is_err());
    }

    #[test]
    fn test_month_navigation() {
        let dec = BudgetMonth::new(2024, 12).unwrap();
        assert_eq!(dec.next(), BudgetMonth::new(2025, 1).unwrap());
        assert_eq!(dec.next().prev(), dec);
        assert_eq!(BudgetMonth::new(2025, 6).unwrap().prev().month, 5);
    }

    #[test]
    fn test_period_tabs() {
        assert_eq!(PeriodTab::default(), PeriodTab::Monthly);
        assert_eq!(PeriodTab::all().len(), 3);
        assert_eq!(PeriodTab::Weekly.label(), "Weekly");
    }
}
