//! Header views: title, period tabs and budget summary

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::models::PeriodTab;
use crate::tui::app::App;

/// Render the title with the selected month
pub fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "Budget Setup",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("< ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.form.month().label(), Style::default().fg(Color::White)),
        Span::styled(" >", Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(title).block(block), area);
}

/// Render the Monthly / Weekly / Yearly tabs
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<&str> = PeriodTab::all().iter().map(|tab| tab.label()).collect();
    let selected = PeriodTab::all()
        .iter()
        .position(|tab| *tab == app.form.period())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(tabs, area);
}

/// Render total, allocated and remaining
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.form;
    let state = form.reconciler().state();
    let symbol = form.currency_symbol();

    let total = if state.budget.is_set() {
        state.budget.amount.format_with_symbol(symbol)
    } else {
        "not set".to_string()
    };

    let mut spans = vec![
        Span::styled("Total: ", Style::default().fg(Color::Yellow)),
        Span::styled(total, Style::default().fg(Color::White)),
    ];
    if state.budget.locked {
        spans.push(Span::styled(
            " (locked)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.extend([
        Span::raw("   "),
        Span::styled("Allocated: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            state.allocated().format_with_symbol(symbol),
            Style::default().fg(Color::White),
        ),
        Span::raw("   "),
        Span::styled("Remaining: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            state.remaining().format_with_symbol(symbol),
            Style::default().fg(Color::Green),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
