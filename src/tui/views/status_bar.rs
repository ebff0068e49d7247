//! Status bar view
//!
//! Shows the remaining amount, the current month, the last status message
//! and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

const KEY_HINTS: &str = " b:Budget  d:Delete  s:Submit  [/]:Month  q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.form;
    let state = form.reconciler().state();
    let remaining = state.remaining();

    let remaining_color = if !state.budget.is_set() {
        Color::DarkGray
    } else if remaining.is_zero() {
        Color::Green
    } else {
        Color::Yellow
    };

    let mut spans = vec![
        Span::styled(" Remaining: ", Style::default().fg(Color::White)),
        Span::styled(
            remaining.format_with_symbol(form.currency_symbol()),
            Style::default()
                .fg(remaining_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(form.month().to_string(), Style::default().fg(Color::Cyan)),
        Span::raw(" │ "),
        Span::styled(
            state.mode.to_string(),
            Style::default().fg(Color::Magenta),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(KEY_HINTS.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(KEY_HINTS, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
