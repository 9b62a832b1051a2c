//! Event handler for the TUI
//!
//! Routes keyboard events to form navigation and text editing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, FocusTarget};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => {
            handle_key(app, key);
        }
        Event::Tick => {
            app.poll_submission();
        }
        Event::Resize(_, _) => {}
    }
}

/// Handle a key event, returning whether it was consumed
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return true;
    }

    let on_selector = app.focused() == FocusTarget::ClientType;

    match key.code {
        KeyCode::Esc => app.go_back(),
        KeyCode::Enter => app.advance(),

        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => app.prev_focus(),
        KeyCode::Tab | KeyCode::Down => app.next_focus(),
        KeyCode::BackTab | KeyCode::Up => app.prev_focus(),

        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if on_selector => {
            app.toggle_client_type();
        }

        KeyCode::Left => app.edit(|input| input.move_left()),
        KeyCode::Right => app.edit(|input| input.move_right()),
        KeyCode::Home => app.edit(|input| input.move_start()),
        KeyCode::End => app.edit(|input| input.move_end()),
        KeyCode::Backspace => app.edit(|input| input.backspace()),
        KeyCode::Delete => app.edit(|input| input.delete()),
        KeyCode::Char(c) => app.edit(|input| input.insert(c)),

        _ => return false,
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SignupClient;
    use crate::models::{ClientType, Field};
    use crate::wizard::{SignupForm, Step};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    fn test_app(runtime: &tokio::runtime::Runtime) -> App {
        let client = SignupClient::new("http://127.0.0.1:1/auth/signup");
        App::new(SignupForm::new(), client, runtime.handle().clone())
    }

    #[test]
    fn test_keyboard_walkthrough_to_step_two() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);

        type_str(&mut app, "ana@example.com");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "segredo1");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.form.step(), Step::ClientDetails);
        assert_eq!(app.form.value(Field::Password), "segredo1");
    }

    #[test]
    fn test_space_toggles_selector_but_types_in_fields() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);

        type_str(&mut app, "a b");
        assert_eq!(app.form.value(Field::Email), "a b");

        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Backspace));
        type_str(&mut app, "ana@example.com");
        handle_key(&mut app, key(KeyCode::Down));
        type_str(&mut app, "segredo1");
        handle_key(&mut app, key(KeyCode::Enter));

        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.form.client_type(), ClientType::Company);
        handle_key(&mut app, key(KeyCode::Right));
        assert_eq!(app.form.client_type(), ClientType::Individual);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);

        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_escape_on_first_step_quits() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);

        handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
