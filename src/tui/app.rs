//! Application state for the TUI
//!
//! Wraps the budget form with the terminal-only state: row selection, the
//! dialog's focus and cursors, and the status line.

use std::time::Instant;

use tracing::info;

use crate::config::Settings;
use crate::display::table::{RowAction, TableRow};
use crate::models::{CategoryId, PeriodTab};
use crate::services::{FormSubmitter, Submission};
use crate::session::{BudgetForm, MonthNavigation};

use super::dialogs::BudgetDialogState;

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The budget form for the current month
    pub form: BudgetForm,

    /// Budget dialog focus and cursors
    pub dialog: BudgetDialogState,

    /// Where submissions go
    pub submitter: Box<dyn FormSubmitter>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Selected table row
    pub selected_row: usize,

    /// Status bar message
    pub status_message: Option<String>,

    /// Most recent successful submission
    pub last_submission: Option<Submission>,

    /// Most recent month change
    pub last_navigation: Option<MonthNavigation>,
}

impl<'a> App<'a> {
    pub fn new(settings: &'a Settings, form: BudgetForm, submitter: Box<dyn FormSubmitter>) -> Self {
        let mut dialog = BudgetDialogState::new();
        dialog.sync_from(&form);

        Self {
            settings,
            form,
            dialog,
            submitter,
            should_quit: false,
            selected_row: 0,
            status_message: None,
            last_submission: None,
            last_navigation: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open the budget dialog
    pub fn open_dialog(&mut self) {
        self.form.open_modal();
        self.dialog.sync_from(&self.form);
    }

    /// Number of rows in the category table
    pub fn row_count(&self) -> usize {
        self.form.reconciler().categories().len()
    }

    pub fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_row + 1 < self.row_count() {
            self.selected_row += 1;
        }
    }

    /// Delete target of the selected row, if it has one
    pub fn selected_delete_target(&self) -> Option<CategoryId> {
        match self.form.table().rows.get(self.selected_row) {
            Some(TableRow::Category {
                action: RowAction::Delete(id),
                ..
            }) => Some(*id),
            _ => None,
        }
    }

    /// Delete the selected row's category
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_delete_target() else {
            self.set_status("This row cannot be deleted");
            return;
        };

        match self.form.press_delete(id) {
            Ok(()) => {
                self.clear_status();
                let rows = self.row_count();
                if self.selected_row >= rows {
                    self.selected_row = rows.saturating_sub(1);
                }
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Submit the form
    pub fn submit(&mut self) {
        match self.form.submit(self.submitter.as_mut()) {
            Ok(submission) => {
                self.set_status("Budget saved");
                self.last_submission = Some(submission);
            }
            Err(e) => self.set_status(e.to_string()),
        }
        self.dialog.sync_from(&self.form);
    }

    pub fn select_period(&mut self, tab: PeriodTab) {
        self.form.select_period(tab);
    }

    /// Move to the previous or next month
    ///
    /// Navigation loads a fresh page for the target month, so the current
    /// session is discarded.
    pub fn change_month(&mut self, forward: bool) {
        let current = self.form.month();
        let month = if forward { current.next() } else { current.prev() };
        let navigation = self.form.select_month(month);
        info!(target = %navigation, "navigating to month");

        self.form = BudgetForm::new(self.settings, month);
        self.dialog = BudgetDialogState::new();
        self.selected_row = 0;
        self.set_status(format!("Loaded {}", navigation));
        self.last_navigation = Some(navigation);
    }

    /// Advance timers
    pub fn tick(&mut self, now: Instant) {
        self.form.tick(now);
    }
}
