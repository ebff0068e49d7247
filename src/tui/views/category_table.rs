//! Category table view
//!
//! One row per category with its amount and action. The computed `Extra`
//! row is highlighted and marked `(Auto)` instead of offering a delete.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::table::{RowAction, TableRow};
use crate::tui::app::App;

/// Render the category table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let table = app.form.table();
    let symbol = app.form.currency_symbol();

    let block = Block::default()
        .title(" Categories ")
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if let [TableRow::Placeholder { message }] = table.rows.as_slice() {
        let placeholder = Paragraph::new(Line::from(*message))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Category"),
        Cell::from(Line::from("Amount").alignment(Alignment::Right)),
        Cell::from("Action"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = table
        .rows
        .iter()
        .filter_map(|row| match row {
            TableRow::Category {
                name,
                amount,
                highlighted,
                action,
                ..
            } => {
                let action_style = match action {
                    RowAction::Delete(_) => Style::default().fg(Color::Red),
                    RowAction::Auto => Style::default().fg(Color::DarkGray),
                };
                let row = Row::new(vec![
                    Cell::from(name.clone()),
                    Cell::from(
                        Line::from(amount.format_with_symbol(symbol)).alignment(Alignment::Right),
                    ),
                    Cell::from(action.label()).style(action_style),
                ]);
                Some(if *highlighted {
                    row.style(
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    row
                })
            }
            TableRow::Placeholder { .. } => None,
        })
        .collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(14),
        Constraint::Length(8),
    ];

    let table_widget = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected_row));
    frame.render_stateful_widget(table_widget, area, &mut state);
}
