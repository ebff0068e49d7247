//! Layout definitions for the TUI
//!
//! Header (title, period tabs, budget summary), category table and status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title and month
    pub title: Rect,
    /// Monthly / Weekly / Yearly tabs
    pub tabs: Rect,
    /// Total, allocated and remaining
    pub summary: Rect,
    /// Category table
    pub table: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Tabs
                Constraint::Length(3), // Summary
                Constraint::Min(5),    // Table
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            title: chunks[0],
            tabs: chunks[1],
            summary: chunks[2],
            table: chunks[3],
            status_bar: chunks[4],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
