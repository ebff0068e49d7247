//! Core data models for budget-setup
//!
//! This module contains the data structures of a budget-setup session:
//! money amounts, categories, the total budget and the budget month.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;

pub use budget::{ReconcileMode, TotalBudget};
pub use category::{BudgetCategory, CategoryList, EXTRA_CATEGORY};
pub use ids::CategoryId;
pub use money::Money;
pub use period::{BudgetMonth, PeriodTab};
