//! TUI Views module
//!
//! The signup screen: step header, form body, submission banner and the
//! status bar with key hints.

pub mod form;
pub mod status_bar;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::wizard::Step;

use super::app::App;
use super::layout::AppLayout;
use super::widgets::{Notification, NotificationWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let banner = Notification::for_submission(app.form.submission());
    let layout = AppLayout::new(frame.area(), banner.is_some());

    render_header(frame, app.form.step(), layout.header);
    form::render(frame, app, layout.body);

    if let Some(ref banner) = banner {
        frame.render_widget(NotificationWidget::new(banner), layout.banner);
    }

    status_bar::render(frame, app, layout.footer);
}

/// Render the step title with a progress marker per step
fn render_header(frame: &mut Frame, step: Step, area: ratatui::layout::Rect) {
    let progress: String = (1..=Step::COUNT)
        .map(|i| if i <= step.index() { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");

    let line = Line::from(vec![
        Span::styled(
            step.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(progress, Style::default().fg(Color::Yellow)),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .title(" Cadastro ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SignupClient;
    use crate::wizard::SignupForm;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_errors_inline() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let client = SignupClient::new("http://127.0.0.1:1/auth/signup");
        let mut app = App::new(SignupForm::new(), client, runtime.handle().clone());
        app.advance();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Etapa 1 de 3"));
        assert!(text.contains("O email é obrigatório."));
        assert!(text.contains("A senha é obrigatória."));
    }
}
