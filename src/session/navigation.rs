//! Month selector navigation
//!
//! Changing the month reloads the budget page for that month; the page is
//! addressed as `<path>?month=<YYYY-MM>`.

use std::fmt;

use crate::models::BudgetMonth;

/// Target of a month change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthNavigation {
    pub path: String,
    pub month: BudgetMonth,
}

impl MonthNavigation {
    pub fn new(path: impl Into<String>, month: BudgetMonth) -> Self {
        Self {
            path: path.into(),
            month,
        }
    }

    /// Full target, e.g. `/budget-setup?month=2025-03`
    pub fn target(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MonthNavigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Any query already on the path is replaced
        let path = self.path.split('?').next().unwrap_or_default();
        write!(f, "{}?month={}", path, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target() {
        let nav = MonthNavigation::new("/budget-setup", BudgetMonth::new(2025, 3).unwrap());
        assert_eq!(nav.target(), "/budget-setup?month=2025-03");
    }

    #[test]
    fn test_existing_query_is_replaced() {
        let nav = MonthNavigation::new("/budget?month=2024-01", BudgetMonth::new(2024, 2).unwrap());
        assert_eq!(nav.target(), "/budget?month=2024-02");
    }
}
