//! Dialog modules for the TUI

pub mod alert;
pub mod budget_setup;

pub use budget_setup::{BudgetDialogState, DialogField};
