//! Terminal setup and teardown
//!
//! Initializes and restores the terminal, including a panic hook that
//! restores it on crash, and runs the main event loop.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::{error, info};

use crate::config::Settings;
use crate::services::{FormSubmitter, Submission};
use crate::session::BudgetForm;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI until the user quits
///
/// Returns the last successful submission, if any.
pub fn run_tui(
    settings: &Settings,
    form: BudgetForm,
    submitter: Box<dyn FormSubmitter>,
) -> Result<Option<Submission>> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(settings, form, submitter);
    info!(month = %app.form.month(), mode = %app.form.reconciler().mode(), "TUI started");

    let result = event_loop(&mut terminal, &mut app);

    // Restore even when the loop failed
    restore_terminal()?;

    if let Err(ref e) = result {
        error!(error = %e, "TUI stopped with an error");
    }
    result.map(|()| app.last_submission.take())
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?)?;
    }

    Ok(())
}
