//! Budget setup session
//!
//! The interactive layer between raw user input and the reconciler: form
//! state, flash messages and month navigation.

pub mod flash;
pub mod form;
pub mod navigation;

pub use flash::{FlashKind, FlashMessage, FlashPhase, FlashQueue};
pub use form::{BudgetForm, CategorySelector, NEW_CATEGORY_OPTION};
pub use navigation::MonthNavigation;
