//! Event handler for the TUI
//!
//! Routes keyboard events to the alert, the budget dialog or the main
//! screen, depending on what is showing.

use std::time::Instant;

use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::PeriodTab;

use super::app::App;
use super::dialogs::budget_setup;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick(Instant::now());
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
        Event::Failed(message) => Err(anyhow!("Terminal input failed: {}", message)),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    // An alert blocks everything until acknowledged
    if app.form.alert().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.form.dismiss_alert();
        }
        return Ok(());
    }

    if app.form.is_modal_open() {
        budget_setup::handle_key(app, key);
        return Ok(());
    }

    handle_main_key(app, key);
    Ok(())
}

/// Handle keys on the main screen
fn handle_main_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        KeyCode::Char('b') | KeyCode::Enter => app.open_dialog(),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        KeyCode::Char('1') => app.select_period(PeriodTab::Monthly),
        KeyCode::Char('2') => app.select_period(PeriodTab::Weekly),
        KeyCode::Char('3') => app.select_period(PeriodTab::Yearly),

        KeyCode::Char('[') => app.change_month(false),
        KeyCode::Char(']') => app.change_month(true),

        KeyCode::Char('s') => app.submit(),

        KeyCode::Esc => app.clear_status(),

        _ => {}
    }
}
