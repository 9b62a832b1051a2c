//! Status bar view
//!
//! Shows key hints for the current step

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let step = app.form.step();
    let enter_label = if step.is_last() { " Concluir  " } else { " Próximo  " };
    let esc_label = if step.is_first() { " Sair" } else { " Voltar" };

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Próximo campo  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(enter_label),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(esc_label),
    ]);

    frame.render_widget(Paragraph::new(hints), area);
}
