//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, form body, banner, footer.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the banner box when a message is shown
const BANNER_HEIGHT: u16 = 4;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Step title and progress
    pub header: Rect,
    /// Form fields
    pub body: Rect,
    /// Submission banner (zero height when hidden)
    pub banner: Rect,
    /// Key hints at the bottom
    pub footer: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect, show_banner: bool) -> Self {
        let panel = centered_rect(80, 90, area);
        let banner_height = if show_banner { BANNER_HEIGHT } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // Header
                Constraint::Min(5),                // Body
                Constraint::Length(banner_height), // Banner
                Constraint::Length(1),             // Footer
            ])
            .split(panel);

        Self {
            header: chunks[0],
            body: chunks[1],
            banner: chunks[2],
            footer: chunks[3],
        }
    }
}

/// Create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
