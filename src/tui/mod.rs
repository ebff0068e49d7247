//! Terminal User Interface module
//!
//! An interactive budget setup screen built on ratatui: the category table,
//! period tabs and month selector, and the budget dialog for entering the
//! total and allocations.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
