//! budget-setup - Monthly budget setup with an automatic remainder category
//!
//! A user enters a total monthly budget and allocates parts of it to named
//! categories. In strict mode the allocations can never exceed the total and
//! whatever is left over is held by a computed `Extra` category; lenient mode
//! turns both rules off.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, categories, the total budget and months
//! - `services`: The reconciler and form submission
//! - `display`: Table projection and text rendering
//! - `session`: Form state, flash messages and month navigation
//! - `logging`: `tracing` subscriber setup
//! - `cli`: Non-interactive commands
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use budget_setup::models::{Money, ReconcileMode};
//! use budget_setup::services::Reconciler;
//!
//! let mut reconciler = Reconciler::new(ReconcileMode::Strict);
//! reconciler.set_total_budget(Money::from_units(500)).unwrap();
//! reconciler.add_or_update_category("Food", Money::from_units(200)).unwrap();
//!
//! let extra = reconciler.categories().extra().unwrap();
//! assert_eq!(extra.amount, Money::from_units(300));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
