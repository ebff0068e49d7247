//! Budget setup form
//!
//! Holds everything the budget dialog shows besides the reconciled state:
//! raw input text, the category selector, inline errors, the lock warning,
//! alerts and flash messages. Each `press_*` method is one user action; it
//! drives the reconciler and updates the visible feedback.
//!
//! The form never touches a terminal, so every interaction can be tested
//! directly.

use std::time::Instant;

use tracing::debug;

use crate::config::Settings;
use crate::display::table::CategoryTable;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetMonth, CategoryId, Money, PeriodTab};
use crate::services::{FormSubmitter, LockOutcome, Reconciler, Submission};

use super::flash::{FlashKind, FlashQueue};
use super::navigation::MonthNavigation;

/// Selector entry that reveals the free-text category input
pub const NEW_CATEGORY_OPTION: &str = "New";

/// Alert shown when locking without a usable total
pub const LOCK_ALERT: &str = "Please enter a total budget first.";

/// Category selector: preset names followed by [`NEW_CATEGORY_OPTION`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelector {
    options: Vec<String>,
    selected: Option<usize>,
}

impl CategorySelector {
    pub fn new(presets: &[String]) -> Self {
        let mut options: Vec<String> = presets
            .iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty() && p != NEW_CATEGORY_OPTION)
            .collect();
        options.push(NEW_CATEGORY_OPTION.to_string());
        Self {
            options,
            selected: None,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Selected option text; empty when nothing is selected
    pub fn value(&self) -> &str {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn is_new(&self) -> bool {
        self.value() == NEW_CATEGORY_OPTION
    }

    /// Select an option by its text; unknown values clear the selection
    pub fn select(&mut self, value: &str) -> bool {
        self.selected = self.options.iter().position(|o| o == value);
        self.selected.is_some()
    }

    pub fn select_next(&mut self) {
        let len = self.options.len();
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        let len = self.options.len();
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    pub fn reset(&mut self) {
        self.selected = None;
    }
}

/// State of the budget setup form
#[derive(Debug)]
pub struct BudgetForm {
    reconciler: Reconciler,
    modal_open: bool,
    selector: CategorySelector,
    new_category_visible: bool,
    new_category_input: String,
    amount_input: String,
    total_input: String,
    category_error: Option<String>,
    budget_error: Option<String>,
    alert: Option<String>,
    lock_warning_visible: bool,
    period: PeriodTab,
    month: BudgetMonth,
    submit_path: String,
    currency_symbol: String,
    flashes: FlashQueue,
}

impl BudgetForm {
    /// Create a form for a fresh session
    pub fn new(settings: &Settings, month: BudgetMonth) -> Self {
        Self::with_reconciler(settings, month, Reconciler::new(settings.mode))
    }

    /// Create a form around an existing (e.g. seeded) reconciler
    pub fn with_reconciler(settings: &Settings, month: BudgetMonth, reconciler: Reconciler) -> Self {
        Self {
            reconciler,
            modal_open: false,
            selector: CategorySelector::new(&settings.category_options),
            new_category_visible: false,
            new_category_input: String::new(),
            amount_input: String::new(),
            total_input: String::new(),
            category_error: None,
            budget_error: None,
            alert: None,
            lock_warning_visible: false,
            period: PeriodTab::default(),
            month,
            submit_path: settings.submit_path.clone(),
            currency_symbol: settings.currency_symbol.clone(),
            flashes: FlashQueue::new(settings.flash),
        }
    }

    // === Accessors ===

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    pub fn table(&self) -> CategoryTable {
        self.reconciler.render_table()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn selector(&self) -> &CategorySelector {
        &self.selector
    }

    pub fn is_new_category_visible(&self) -> bool {
        self.new_category_visible
    }

    pub fn new_category_input(&self) -> &str {
        &self.new_category_input
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn total_input(&self) -> &str {
        &self.total_input
    }

    /// The total input is disabled once the budget is locked
    pub fn is_total_enabled(&self) -> bool {
        !self.reconciler.budget().locked
    }

    pub fn lock_button_label(&self) -> &'static str {
        if self.reconciler.budget().locked {
            "LOCKED"
        } else {
            "Lock"
        }
    }

    pub fn category_error(&self) -> Option<&str> {
        self.category_error.as_deref()
    }

    pub fn budget_error(&self) -> Option<&str> {
        self.budget_error.as_deref()
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn is_lock_warning_visible(&self) -> bool {
        self.lock_warning_visible
    }

    pub fn period(&self) -> PeriodTab {
        self.period
    }

    pub fn month(&self) -> BudgetMonth {
        self.month
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn flashes(&self) -> &FlashQueue {
        &self.flashes
    }

    // === Modal ===

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Escape dismisses an alert first, then closes the modal
    pub fn press_escape(&mut self) {
        if self.alert.is_some() {
            self.alert = None;
        } else if self.modal_open {
            self.modal_open = false;
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    // === Inputs ===

    /// Change the selector; choosing "New" reveals the free-text input
    pub fn select_category(&mut self, value: &str) {
        self.selector.select(value);
        self.sync_new_category_visibility();
    }

    pub fn select_next_category(&mut self) {
        self.selector.select_next();
        self.sync_new_category_visibility();
    }

    pub fn select_prev_category(&mut self) {
        self.selector.select_prev();
        self.sync_new_category_visibility();
    }

    fn sync_new_category_visibility(&mut self) {
        self.new_category_visible = self.selector.is_new();
    }

    pub fn set_new_category_input(&mut self, text: impl Into<String>) {
        self.new_category_input = text.into();
    }

    /// Typing in the amount field clears the inline category error
    pub fn set_amount_input(&mut self, text: impl Into<String>) {
        self.amount_input = text.into();
        self.category_error = None;
    }

    /// Ignored once the budget is locked; returns whether the text changed
    pub fn set_total_input(&mut self, text: impl Into<String>) -> bool {
        if !self.is_total_enabled() {
            return false;
        }
        self.total_input = text.into();
        true
    }

    // === Actions ===

    /// Enter in the total field sets the total budget
    ///
    /// Unusable input is ignored; a total below the allocations shows the
    /// budget error instead.
    pub fn press_enter_in_total(&mut self) -> BudgetResult<()> {
        if !self.is_total_enabled() {
            return Err(BudgetError::BudgetLocked);
        }

        let amount = match Money::parse(&self.total_input) {
            Ok(amount) if amount.is_positive() => amount,
            _ => return Err(BudgetError::InvalidTotal),
        };

        match self.reconciler.set_total_budget(amount) {
            Ok(()) => {
                self.budget_error = None;
                Ok(())
            }
            Err(e) => {
                if matches!(e, BudgetError::BelowAllocated { .. }) {
                    self.budget_error = Some(e.to_string());
                }
                Err(e)
            }
        }
    }

    /// Lock the total budget from the total field
    pub fn press_lock(&mut self) -> BudgetResult<LockOutcome> {
        if self.reconciler.budget().locked {
            return Ok(LockOutcome::AlreadyLocked);
        }

        let amount = match Money::parse(&self.total_input) {
            Ok(amount) if amount.is_positive() => amount,
            _ => {
                self.alert = Some(LOCK_ALERT.to_string());
                return Err(BudgetError::InvalidTotal);
            }
        };

        match self.reconciler.lock_budget(amount) {
            Ok(outcome) => {
                self.budget_error = None;
                self.lock_warning_visible = true;
                self.total_input = format!("{:.2}", amount.as_decimal());
                self.flashes.push(
                    format!(
                        "Total budget locked at {}",
                        amount.format_with_symbol(&self.currency_symbol)
                    ),
                    FlashKind::Success,
                );
                Ok(outcome)
            }
            Err(e) => {
                match &e {
                    BudgetError::BelowAllocated { .. } => self.budget_error = Some(e.to_string()),
                    _ => self.alert = Some(LOCK_ALERT.to_string()),
                }
                Err(e)
            }
        }
    }

    /// Add or update the category described by the selector and amount field
    pub fn press_add(&mut self) -> BudgetResult<CategoryId> {
        self.category_error = None;

        let name = if self.selector.is_new() {
            self.new_category_input.trim().to_string()
        } else {
            self.selector.value().to_string()
        };

        let result = if name.is_empty() {
            Err(BudgetError::CategoryRequired)
        } else {
            match Money::parse(&self.amount_input) {
                Ok(amount) => self.reconciler.add_or_update_category(&name, amount),
                Err(_) => Err(BudgetError::InvalidAmount),
            }
        };

        match result {
            Ok(id) => {
                debug!(category = %name, "category saved from form");
                self.amount_input.clear();
                if self.selector.is_new() {
                    self.new_category_input.clear();
                    self.new_category_visible = false;
                    self.selector.reset();
                }
                Ok(id)
            }
            Err(e) => {
                self.category_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Delete action of a table row
    pub fn press_delete(&mut self, id: CategoryId) -> BudgetResult<()> {
        match self.reconciler.delete_category(id) {
            Ok(removed) => {
                self.flashes
                    .push(format!("Removed {}", removed.name), FlashKind::Info);
                Ok(())
            }
            Err(e) => {
                self.flashes.push(e.to_string(), FlashKind::Error);
                Err(e)
            }
        }
    }

    /// Validate and hand the form to a submitter
    pub fn submit(&mut self, submitter: &mut dyn FormSubmitter) -> BudgetResult<Submission> {
        let total_input = self.total_input.clone();
        match self.reconciler.submit(&total_input, submitter) {
            Ok(submission) => {
                self.budget_error = None;
                self.modal_open = false;
                self.flashes.push("Budget saved", FlashKind::Success);
                Ok(submission)
            }
            Err(e) => {
                match &e {
                    BudgetError::BelowAllocated { .. } => self.budget_error = Some(e.to_string()),
                    BudgetError::InvalidTotal => self.alert = Some(e.to_string()),
                    _ => self.flashes.push(e.to_string(), FlashKind::Error),
                }
                Err(e)
            }
        }
    }

    pub fn select_period(&mut self, tab: PeriodTab) {
        self.period = tab;
    }

    /// Switch month; returns where the page navigates to
    pub fn select_month(&mut self, month: BudgetMonth) -> MonthNavigation {
        self.month = month;
        MonthNavigation::new(self.submit_path.clone(), month)
    }

    /// Advance flash message timers
    pub fn tick(&mut self, now: Instant) {
        self.flashes.tick(now);
    }
}
