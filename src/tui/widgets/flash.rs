//! Flash message widget
//!
//! Draws the oldest active flash message in the top-right corner. A message
//! in its fade phase is drawn dimmed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::session::{FlashKind, FlashMessage, FlashPhase};

/// Width of the flash box
const FLASH_WIDTH: u16 = 40;

/// Color for a flash kind
pub fn kind_color(kind: FlashKind) -> Color {
    match kind {
        FlashKind::Info => Color::Blue,
        FlashKind::Success => Color::Green,
        FlashKind::Warning => Color::Yellow,
        FlashKind::Error => Color::Red,
    }
}

/// Area of the flash box inside `area`
pub fn flash_area(area: Rect) -> Rect {
    let width = FLASH_WIDTH.min(area.width);
    Rect::new(
        area.x + area.width - width,
        area.y,
        width,
        3.min(area.height),
    )
}

/// Widget for rendering a flash message
pub struct FlashWidget<'a> {
    message: &'a FlashMessage,
    phase: FlashPhase,
}

impl<'a> FlashWidget<'a> {
    pub fn new(message: &'a FlashMessage, phase: FlashPhase) -> Self {
        Self { message, phase }
    }
}

impl Widget for FlashWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.phase == FlashPhase::Expired {
            return;
        }

        let color = kind_color(self.message.kind);
        let mut style = Style::default().fg(color);
        if self.phase == FlashPhase::Fading {
            style = style.add_modifier(Modifier::DIM);
        }

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(format!(
                " {} {} ",
                self.message.kind.icon(),
                self.message.kind.title()
            ))
            .title_style(style.add_modifier(Modifier::BOLD));

        Paragraph::new(self.message.message.as_str())
            .style(style)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
