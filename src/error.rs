//! Custom error types for budget-setup
//!
//! Every failure in a budget-setup session is local and user-facing. The
//! variants below carry enough context to render the inline messages shown
//! next to the form controls.

use thiserror::Error;

use crate::models::Money;

/// The main error type for budget-setup operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// No category name was chosen or typed
    #[error("Please choose a category.")]
    CategoryRequired,

    /// Category amount missing, unparseable or not positive
    #[error("Please enter a valid amount.")]
    InvalidAmount,

    /// Total budget missing, unparseable or not positive
    #[error("Please enter a valid total monthly budget.")]
    InvalidTotal,

    /// Allocation would exceed the total budget
    #[error("Cannot add {amount}. Only {available} remaining.")]
    InsufficientBudget { amount: Money, available: Money },

    /// Total budget is smaller than what is already allocated
    #[error("Total budget {total} is less than the {allocated} already allocated to categories.")]
    BelowAllocated { total: Money, allocated: Money },

    /// Total budget was locked earlier in the session
    #[error("Total budget is locked and cannot be changed.")]
    BudgetLocked,

    /// The category name is reserved for the computed leftover bucket
    #[error("'{0}' is calculated automatically and cannot be changed directly.")]
    ReservedCategory(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Input parsing errors (month values, allocations)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl BudgetError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a user input validation error
    ///
    /// Validation errors are the ones shown inline next to the form controls;
    /// they never abort the session.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::CategoryRequired
                | Self::InvalidAmount
                | Self::InvalidTotal
                | Self::InsufficientBudget { .. }
                | Self::BelowAllocated { .. }
                | Self::BudgetLocked
                | Self::ReservedCategory(_)
        )
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for BudgetError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for budget-setup operations
pub type BudgetResult<T> = Result<T, BudgetError>;
