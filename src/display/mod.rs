//! Display formatting for terminal output
//!
//! Provides the category table projection shared by the CLI and the TUI.

pub mod table;

pub use table::{format_category_table, project, CategoryTable, RowAction, TableRow};
