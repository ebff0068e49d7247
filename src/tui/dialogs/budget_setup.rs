//! Budget setup dialog
//!
//! The modal where the total budget is entered and locked and categories are
//! allocated. Every edit is forwarded to the [`BudgetForm`]; the dialog only
//! tracks focus and cursor positions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::session::BudgetForm;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{InputKind, InputWidget, TextInput};

/// Focusable controls of the dialog, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogField {
    #[default]
    Total,
    Lock,
    Category,
    NewCategory,
    Amount,
    Add,
    Submit,
}

impl DialogField {
    /// Fields that can take focus given the form's current state
    pub fn available(form: &BudgetForm) -> Vec<DialogField> {
        let mut fields = Vec::with_capacity(7);
        if form.is_total_enabled() {
            fields.push(Self::Total);
            fields.push(Self::Lock);
        }
        fields.push(Self::Category);
        if form.is_new_category_visible() {
            fields.push(Self::NewCategory);
        }
        fields.push(Self::Amount);
        fields.push(Self::Add);
        fields.push(Self::Submit);
        fields
    }
}

/// State for the budget setup dialog
#[derive(Debug, Clone)]
pub struct BudgetDialogState {
    pub focus: DialogField,
    pub total: TextInput,
    pub new_category: TextInput,
    pub amount: TextInput,
}

impl Default for BudgetDialogState {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetDialogState {
    pub fn new() -> Self {
        Self {
            focus: DialogField::default(),
            total: TextInput::new(InputKind::Amount),
            new_category: TextInput::new(InputKind::Text),
            amount: TextInput::new(InputKind::Amount),
        }
    }

    /// Pick up text the form changed on its own (cleared or reformatted
    /// inputs) and move focus off fields that are no longer available
    pub fn sync_from(&mut self, form: &BudgetForm) {
        if self.total.value() != form.total_input() {
            self.total.set_value(form.total_input());
        }
        if self.new_category.value() != form.new_category_input() {
            self.new_category.set_value(form.new_category_input());
        }
        if self.amount.value() != form.amount_input() {
            self.amount.set_value(form.amount_input());
        }

        let fields = DialogField::available(form);
        if !fields.contains(&self.focus) {
            self.focus = DialogField::Category;
        }
    }

    pub fn focus_next(&mut self, form: &BudgetForm) {
        self.cycle_focus(form, 1);
    }

    pub fn focus_prev(&mut self, form: &BudgetForm) {
        self.cycle_focus(form, -1);
    }

    fn cycle_focus(&mut self, form: &BudgetForm, step: isize) {
        let fields = DialogField::available(form);
        let len = fields.len() as isize;
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len);
        self.focus = fields[next as usize];
    }

    /// Input behind the focused field, if it is a text field
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            DialogField::Total => Some(&mut self.total),
            DialogField::NewCategory => Some(&mut self.new_category),
            DialogField::Amount => Some(&mut self.amount),
            _ => None,
        }
    }
}

/// Send the focused field's text to the form
fn push_input(app: &mut App) {
    match app.dialog.focus {
        DialogField::Total => {
            let text = app.dialog.total.value().to_string();
            if !app.form.set_total_input(text) {
                app.dialog.sync_from(&app.form);
            }
        }
        DialogField::NewCategory => {
            let text = app.dialog.new_category.value().to_string();
            app.form.set_new_category_input(text);
        }
        DialogField::Amount => {
            let text = app.dialog.amount.value().to_string();
            app.form.set_amount_input(text);
        }
        _ => {}
    }
}

/// Activate the focused control
fn activate(app: &mut App) {
    match app.dialog.focus {
        DialogField::Total => {
            if let Err(e) = app.form.press_enter_in_total() {
                app.set_status(e.to_string());
            }
        }
        DialogField::Lock => {
            if app.form.press_lock().is_ok() {
                app.set_status("Total budget locked");
            }
        }
        DialogField::Add => match app.form.press_add() {
            Ok(_) => app.set_status("Category saved"),
            Err(e) => app.set_status(e.to_string()),
        },
        DialogField::Submit => app.submit(),
        // Enter never submits from the other inputs
        DialogField::Category | DialogField::NewCategory | DialogField::Amount => {}
    }
    app.dialog.sync_from(&app.form);
}

/// Handle key events for the budget setup dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.form.press_escape();
            true
        }

        KeyCode::Tab => {
            app.dialog.focus_next(&app.form);
            true
        }

        KeyCode::BackTab => {
            app.dialog.focus_prev(&app.form);
            true
        }

        KeyCode::Enter => {
            activate(app);
            true
        }

        KeyCode::Left if app.dialog.focus == DialogField::Category => {
            app.form.select_prev_category();
            app.dialog.sync_from(&app.form);
            true
        }

        KeyCode::Right if app.dialog.focus == DialogField::Category => {
            app.form.select_next_category();
            app.dialog.sync_from(&app.form);
            true
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = app.dialog.focused_input() {
                input.clear();
                push_input(app);
            }
            true
        }

        KeyCode::Char(c) => {
            if let Some(input) = app.dialog.focused_input() {
                if input.insert(c) {
                    push_input(app);
                }
            }
            true
        }

        KeyCode::Backspace => {
            if let Some(input) = app.dialog.focused_input() {
                if input.backspace() {
                    push_input(app);
                }
            }
            true
        }

        KeyCode::Delete => {
            if let Some(input) = app.dialog.focused_input() {
                if input.delete() {
                    push_input(app);
                }
            }
            true
        }

        KeyCode::Left => {
            if let Some(input) = app.dialog.focused_input() {
                input.move_left();
            }
            true
        }

        KeyCode::Right => {
            if let Some(input) = app.dialog.focused_input() {
                input.move_right();
            }
            true
        }

        KeyCode::Home => {
            if let Some(input) = app.dialog.focused_input() {
                input.move_start();
            }
            true
        }

        KeyCode::End => {
            if let Some(input) = app.dialog.focused_input() {
                input.move_end();
            }
            true
        }

        _ => false,
    }
}

fn button<'a>(label: &'a str, focused: bool, color: Color) -> Span<'a> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Span::styled(format!("[ {} ]", label), style)
}

fn error_line(message: Option<&str>) -> Paragraph<'_> {
    let text = message.unwrap_or_default();
    Paragraph::new(Line::from(Span::styled(text, Style::default().fg(Color::Red))))
}

/// Render the budget setup dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(64, 20, frame.area());
    frame.render_widget(Clear, area);

    let form = &app.form;
    let state = &app.dialog;

    let block = Block::default()
        .title(format!(" Budget Setup: {} ", form.month().label()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Total + lock
            Constraint::Length(1), // Lock warning
            Constraint::Length(1), // Budget error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Category selector
            Constraint::Length(1), // New category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Remaining
            Constraint::Min(0),
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    render_total_row(frame, app, chunks[1]);

    if form.is_lock_warning_visible() {
        let warning = Line::from(Span::styled(
            "Total budget is locked and can no longer be changed.",
            Style::default().fg(Color::Yellow),
        ));
        frame.render_widget(Paragraph::new(warning), chunks[2]);
    }
    frame.render_widget(error_line(form.budget_error()), chunks[3]);

    render_selector(frame, app, chunks[5]);

    if form.is_new_category_visible() {
        frame.render_widget(
            InputWidget::new(&state.new_category, "New category")
                .placeholder("Category name")
                .focused(state.focus == DialogField::NewCategory),
            chunks[6],
        );
    }

    frame.render_widget(
        InputWidget::new(&state.amount, "Amount")
            .placeholder("0.00")
            .focused(state.focus == DialogField::Amount),
        chunks[7],
    );
    frame.render_widget(error_line(form.category_error()), chunks[8]);

    let buttons = Line::from(vec![
        button("Add", state.focus == DialogField::Add, Color::Green),
        Span::raw("  "),
        button("Submit", state.focus == DialogField::Submit, Color::Cyan),
    ]);
    frame.render_widget(Paragraph::new(buttons), chunks[10]);

    let remaining = form.reconciler().state().remaining();
    let remaining_line = Line::from(vec![
        Span::styled("Remaining: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            remaining.format_with_symbol(form.currency_symbol()),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(remaining_line), chunks[12]);

    let instructions = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Activate  "),
        Span::styled("[←/→]", Style::default().fg(Color::Cyan)),
        Span::raw(" Category  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[14]);
}

fn render_total_row(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.form;
    let state = &app.dialog;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(12)])
        .split(area);

    frame.render_widget(
        InputWidget::new(&state.total, "Total budget")
            .placeholder("0.00")
            .focused(state.focus == DialogField::Total)
            .disabled(!form.is_total_enabled()),
        columns[0],
    );

    let lock_color = if form.is_total_enabled() {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let lock = Line::from(button(
        form.lock_button_label(),
        state.focus == DialogField::Lock,
        lock_color,
    ));
    frame.render_widget(Paragraph::new(lock), columns[1]);
}

fn render_selector(frame: &mut Frame, app: &App, area: Rect) {
    let selector = app.form.selector();
    let focused = app.dialog.focus == DialogField::Category;

    let value = match selector.value() {
        "" => "Select a category",
        value => value,
    };
    let value_style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let line = Line::from(vec![
        Span::styled("Category", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled("< ", Style::default().fg(Color::DarkGray)),
        Span::styled(value, value_style),
        Span::styled(" >", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
