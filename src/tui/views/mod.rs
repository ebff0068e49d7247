//! TUI Views module
//!
//! The main screen: header, category table and status bar, with the budget
//! dialog, alerts and flash messages drawn on top.

pub mod category_table;
pub mod header;
pub mod status_bar;

use std::time::Instant;

use ratatui::Frame;

use super::app::App;
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::{flash_area, FlashWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    header::render_title(frame, app, layout.title);
    header::render_tabs(frame, app, layout.tabs);
    header::render_summary(frame, app, layout.summary);
    category_table::render(frame, app, layout.table);
    status_bar::render(frame, app, layout.status_bar);

    if app.form.is_modal_open() {
        dialogs::budget_setup::render(frame, app);
    }

    if let Some(message) = app.form.alert() {
        dialogs::alert::render(frame, message);
    }

    let flashes = app.form.flashes();
    if let Some(flash) = flashes.current() {
        let phase = flash.phase_at(Instant::now(), flashes.timing());
        frame.render_widget(FlashWidget::new(flash, phase), flash_area(frame.area()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::BudgetMonth;
    use crate::services::Submission;
    use crate::session::BudgetForm;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app(settings: &Settings) -> App<'_> {
        let form = BudgetForm::new(settings, BudgetMonth::new(2025, 3).unwrap());
        App::new(settings, form, Box::new(Vec::<Submission>::new()))
    }

    #[test]
    fn test_render_empty_table() {
        let settings = Settings::default();
        let mut app = app(&settings);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|frame| render(frame, &mut app)).unwrap();
        let text = screen(&terminal);

        assert!(text.contains("Budget Setup"));
        assert!(text.contains("March 2025"));
        assert!(text.contains("No categories added yet"));
        assert!(text.contains("Monthly"));
    }

    #[test]
    fn test_render_rows_and_dialog() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.form.set_total_input("500");
        app.form.press_enter_in_total().unwrap();
        app.form.select_category("Food");
        app.form.set_amount_input("200");
        app.form.press_add().unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("Food"));
        assert!(text.contains("$200.00"));
        assert!(text.contains("(Auto)"));
        assert!(text.contains("$300.00"));

        app.open_dialog();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("Total budget"));
        assert!(text.contains("[ Lock ]"));
    }
}
