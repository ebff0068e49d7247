//! Total budget model
//!
//! The total budget is the ceiling that category allocations are reconciled
//! against. It may be locked once per session, after which it is fixed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// How category allocations are reconciled against the total budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReconcileMode {
    /// Allocations may not exceed the total; the remainder becomes `Extra`
    #[default]
    Strict,
    /// No ceiling and no derived category
    Lenient,
}

impl ReconcileMode {
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl fmt::Display for ReconcileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

impl std::str::FromStr for ReconcileMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("Unknown reconcile mode: {}", other)),
        }
    }
}

/// The total budget for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TotalBudget {
    /// Total amount; zero means not set yet
    pub amount: Money,

    /// Whether the amount has been locked for the rest of the session
    pub locked: bool,
}

impl TotalBudget {
    /// A budget of the given amount that can still be changed
    pub fn new(amount: Money) -> Self {
        Self {
            amount,
            locked: false,
        }
    }

    /// Whether a positive total has been set
    pub fn is_set(&self) -> bool {
        self.amount.is_positive()
    }
}

impl fmt::Display for TotalBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_set() {
            write!(f, "not set")
        } else if self.locked {
            write!(f, "{} (locked)", self.amount)
        } else {
            write!(f, "{}", self.amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget_is_unset() {
        let budget = TotalBudget::default();
        assert!(!budget.is_set());
        assert!(!budget.locked);
        assert_eq!(budget.to_string(), "not set");
    }

    #[test]
    fn test_budget_display() {
        let mut budget = TotalBudget::new(Money::from_units(500));
        assert_eq!(budget.to_string(), "$500.00");
        budget.locked = true;
        assert_eq!(budget.to_string(), "$500.00 (locked)");
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("strict".parse::<ReconcileMode>(), Ok(ReconcileMode::Strict));
        assert_eq!("Lenient".parse::<ReconcileMode>(), Ok(ReconcileMode::Lenient));
        assert!("loose".parse::<ReconcileMode>().is_err());
        assert_eq!(ReconcileMode::default(), ReconcileMode::Strict);
    }

    #[test]
    fn test_mode_serialization() {
        let json = serde_json::to_string(&ReconcileMode::Lenient).unwrap();
        assert_eq!(json, "\"lenient\"");
    }
}
