//! Text input widget
//!
//! A single-line field with a cursor. The field owns its text while the
//! dialog is open; the form receives the full text after every edit.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Which characters a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    /// Digits, one decimal point, `$` and thousands separators
    Amount,
}

impl InputKind {
    fn accepts(&self, c: char, current: &str) -> bool {
        match self {
            Self::Text => !c.is_control(),
            Self::Amount => {
                c.is_ascii_digit() || c == ',' || c == '$' || (c == '.' && !current.contains('.'))
            }
        }
    }
}

/// Editable text field
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters
    cursor: usize,
    kind: InputKind,
}

impl TextInput {
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the content and move the cursor to the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.content = value.into();
        self.cursor = self.content.chars().count();
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor; returns whether it was accepted
    pub fn insert(&mut self, c: char) -> bool {
        if !self.kind.accepts(c, &self.content) {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.content.remove(at);
        true
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.content.chars().count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.content.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.content.chars().count());
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }
}

/// Renders a [`TextInput`] with a label
pub struct InputWidget<'a> {
    input: &'a TextInput,
    label: &'a str,
    placeholder: &'a str,
    focused: bool,
    disabled: bool,
}

impl<'a> InputWidget<'a> {
    pub fn new(input: &'a TextInput, label: &'a str) -> Self {
        Self {
            input,
            label,
            placeholder: "",
            focused: false,
            disabled: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let label_width = self.label.chars().count() as u16 + 2;
        let label_line = Line::from(vec![
            Span::styled(self.label, label_style),
            Span::raw(": "),
        ]);
        buf.set_line(area.x, area.y, &label_line, label_width.min(area.width));

        let input_start = area.x + label_width;
        if input_start >= area.x + area.width {
            return;
        }
        let value = self.input.value();

        let (text, style) = if self.disabled {
            (value, Style::default().fg(Color::DarkGray))
        } else if value.is_empty() && !self.focused {
            (self.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (value, Style::default().fg(Color::White))
        };
        buf.set_string(input_start, area.y, text, style);

        if self.focused && !self.disabled {
            let cursor_x = input_start + self.input.cursor() as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = value.chars().nth(self.input.cursor()).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new(InputKind::Text);
        for c in "Rent".chars() {
            assert!(input.insert(c));
        }
        assert_eq!(input.value(), "Rent");
        assert_eq!(input.cursor(), 4);

        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "Ret");
        assert_eq!(input.cursor(), 2);

        input.move_start();
        assert!(!input.backspace());
        assert!(input.delete());
        assert_eq!(input.value(), "et");
    }

    #[test]
    fn test_amount_filter() {
        let mut input = TextInput::new(InputKind::Amount);
        for c in "$1,2a0.5.0".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "$1,20.50");
    }

    #[test]
    fn test_multibyte_text() {
        let mut input = TextInput::new(InputKind::Text);
        input.set_value("Café");
        input.backspace();
        assert_eq!(input.value(), "Caf");
        input.insert('é');
        input.move_left();
        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "Caxfé");
    }

    fn first_row(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, 0u16)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_render_placeholder_and_value() {
        let area = Rect::new(0, 0, 30, 1);

        let empty = TextInput::new(InputKind::Amount);
        let mut buf = Buffer::empty(area);
        InputWidget::new(&empty, "Amount")
            .placeholder("0.00")
            .render(area, &mut buf);
        let line = first_row(&buf);
        assert!(line.starts_with("Amount: 0.00"));

        let mut filled = TextInput::new(InputKind::Amount);
        filled.set_value("125");
        let mut buf = Buffer::empty(area);
        InputWidget::new(&filled, "Amount").render(area, &mut buf);
        let line = first_row(&buf);
        assert!(line.starts_with("Amount: 125"));
    }
}
