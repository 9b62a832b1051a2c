//! Form body view
//!
//! Renders the fields of the current step, each followed by its inline
//! error line when validation failed.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use crate::models::ClientType;
use crate::tui::app::{App, FocusTarget};

/// Render the form fields of the active step
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let focused = app.focused();
    let targets = app.focus_targets();

    // Each target gets a value row plus an error/spacer row
    let constraints: Vec<Constraint> = targets
        .iter()
        .flat_map(|_| [Constraint::Length(1), Constraint::Length(1)])
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, target) in targets.iter().enumerate() {
        let (value_row, error_row) = (rows[i * 2], rows[i * 2 + 1]);
        let is_focused = *target == focused;

        match target {
            FocusTarget::ClientType => {
                render_client_type(frame, app.form.client_type(), is_focused, value_row);
            }
            FocusTarget::Field(field) => {
                if let Some(input) = app.inputs.get(field) {
                    input
                        .clone()
                        .focused(is_focused)
                        .render(value_row, frame.buffer_mut());
                }
                if let Some(message) = app.form.errors().get(*field) {
                    let error = Paragraph::new(Line::from(Span::styled(
                        format!("  {}", message),
                        Style::default().fg(Color::Red),
                    )));
                    frame.render_widget(error, error_row);
                }
            }
        }
    }
}

/// Render the individual/company radio selector
fn render_client_type(frame: &mut Frame, selected: ClientType, focused: bool, area: Rect) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut spans = vec![Span::styled("Tipo de Cliente: ", label_style)];
    for option in [ClientType::Individual, ClientType::Company] {
        let marker = if option == selected { "(•) " } else { "( ) " };
        let style = if option == selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("{}{}  ", marker, option.label()), style));
    }
    if focused {
        spans.push(Span::styled("(←/→ para alternar)", Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
