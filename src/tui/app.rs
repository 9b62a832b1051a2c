//! Application state for the TUI
//!
//! The App struct holds the signup form, one text input per field, the
//! focus position, and the channel the submission result comes back on.

use std::collections::BTreeMap;
use std::sync::mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::debug;

use crate::api::SignupClient;
use crate::error::{SignupError, SignupResult};
use crate::models::{Field, SignupOutcome};
use crate::wizard::{SignupForm, Step};

use super::widgets::TextInput;

/// Something on the current step that can hold focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The individual/company selector
    ClientType,
    /// A text field
    Field(Field),
}

/// Main application state
pub struct App {
    /// The form being filled in
    pub form: SignupForm,

    /// Editable buffer for every field
    pub inputs: BTreeMap<Field, TextInput>,

    /// Index into `focus_targets()`
    pub focus_index: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    client: Arc<SignupClient>,
    runtime: Handle,
    outcome_tx: mpsc::Sender<SignupResult<SignupOutcome>>,
    outcome_rx: mpsc::Receiver<SignupResult<SignupOutcome>>,
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Email => "voce@exemplo.com",
        Field::Password => "mínimo 6 caracteres",
        Field::SocialSecurityNumber => "000.000.000-00",
        Field::DateOfBirth => "AAAA-MM-DD",
        Field::TaxIdNumber => "00.000.000/0000-00",
        Field::AdditionalInfo => "opcional",
        Field::PostalCode => "00000-000",
        _ => "",
    }
}

impl App {
    /// Create a new App instance
    pub fn new(form: SignupForm, client: SignupClient, runtime: Handle) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        let mut app = Self {
            form,
            inputs: BTreeMap::new(),
            focus_index: 0,
            should_quit: false,
            client: Arc::new(client),
            runtime,
            outcome_tx,
            outcome_rx,
        };
        app.sync_inputs();
        app
    }

    /// Rebuild every input from the form's draft
    fn sync_inputs(&mut self) {
        self.inputs = Field::ALL
            .iter()
            .map(|&field| {
                let input = TextInput::new()
                    .label(field.label())
                    .placeholder(placeholder(field))
                    .masked(field.is_secret())
                    .content(self.form.value(field));
                (field, input)
            })
            .collect();
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Focusable items on the current step, in order
    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        let mut targets = Vec::new();
        if self.form.step() == Step::ClientDetails {
            targets.push(FocusTarget::ClientType);
        }
        targets.extend(self.form.current_fields().iter().map(|&f| FocusTarget::Field(f)));
        targets
    }

    /// Currently focused item
    pub fn focused(&self) -> FocusTarget {
        let targets = self.focus_targets();
        targets
            .get(self.focus_index)
            .or_else(|| targets.first())
            .copied()
            .unwrap_or(FocusTarget::ClientType)
    }

    /// Focused text field, if focus is on one
    pub fn focused_field(&self) -> Option<Field> {
        match self.focused() {
            FocusTarget::Field(field) => Some(field),
            FocusTarget::ClientType => None,
        }
    }

    /// Move focus to the next item (wraps)
    pub fn next_focus(&mut self) {
        let len = self.focus_targets().len();
        if len > 0 {
            self.focus_index = (self.focus_index + 1) % len;
        }
    }

    /// Move focus to the previous item (wraps)
    pub fn prev_focus(&mut self) {
        let len = self.focus_targets().len();
        if len > 0 {
            self.focus_index = (self.focus_index + len - 1) % len;
        }
    }

    /// Put focus on a specific field if it is on the current step
    pub fn focus_field(&mut self, field: Field) {
        if let Some(index) = self
            .focus_targets()
            .iter()
            .position(|t| *t == FocusTarget::Field(field))
        {
            self.focus_index = index;
        }
    }

    fn focus_first_error(&mut self) {
        if let Some(field) = self.form.errors().first_field() {
            self.focus_field(field);
        }
    }

    /// Apply an edit to the focused input and push the new value into the form
    pub fn edit(&mut self, op: impl FnOnce(&mut TextInput)) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let Some(input) = self.inputs.get_mut(&field) else {
            return;
        };

        let before = input.value().to_string();
        op(input);
        if input.value() != before {
            let value = input.value().to_string();
            self.form.set_field(field, value);
        }
    }

    /// Flip between individual and company
    pub fn toggle_client_type(&mut self) {
        let next = self.form.client_type().toggle();
        self.form.set_client_type(next);
    }

    /// Enter: validate and advance, or submit on the last step
    pub fn advance(&mut self) {
        if self.form.step().is_last() {
            self.submit();
            return;
        }

        if self.form.next_step() {
            self.focus_index = 0;
        } else {
            self.focus_first_error();
        }
    }

    /// Esc: go back one step, or quit from the first one
    pub fn go_back(&mut self) {
        if self.form.step().is_first() {
            self.quit();
        } else {
            self.form.prev_step();
            self.focus_index = 0;
        }
    }

    /// Start the network call without blocking the UI thread
    pub fn submit(&mut self) {
        let request = match self.form.begin_submission() {
            Ok(request) => request,
            Err(SignupError::Validation(_)) => {
                self.focus_first_error();
                return;
            }
            Err(err) => {
                debug!(error = %err, "Submit ignored");
                return;
            }
        };

        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        self.runtime.spawn(async move {
            let result = client.submit(&request).await;
            // Receiver is gone only if the app already exited
            let _ = tx.send(result);
        });
    }

    /// Pick up a finished submission, if any
    ///
    /// Returns true when a result was applied.
    pub fn poll_submission(&mut self) -> bool {
        match self.outcome_rx.try_recv() {
            Ok(result) => {
                let succeeded = result.is_ok();
                self.form.finish_submission(&result);
                if succeeded {
                    self.sync_inputs();
                    self.focus_index = 0;
                }
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CONNECTION_ERROR_MESSAGE;
    use crate::models::ClientType;
    use crate::wizard::SubmissionState;
    use std::time::{Duration, Instant};

    fn test_app(runtime: &tokio::runtime::Runtime) -> App {
        // Nothing listens on port 1, so connections are refused
        let client = SignupClient::new("http://127.0.0.1:1/auth/signup");
        App::new(SignupForm::new(), client, runtime.handle().clone())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.edit(|input| input.insert(c));
        }
    }

    fn fill_to_address(app: &mut App) {
        type_text(app, "ana@example.com");
        app.next_focus();
        type_text(app, "segredo1");
        app.advance();
        assert_eq!(app.form.step(), Step::ClientDetails);

        app.next_focus();
        type_text(app, "Ana Souza");
        app.next_focus();
        type_text(app, "123.456.789-00");
        app.next_focus();
        type_text(app, "1990-04-01");
        app.advance();
        assert_eq!(app.form.step(), Step::Address);

        for (field, value) in [
            (Field::Street, "Rua A"),
            (Field::Number, "1"),
            (Field::City, "Natal"),
            (Field::State, "RN"),
            (Field::Country, "Brasil"),
            (Field::PostalCode, "59000-000"),
        ] {
            app.focus_field(field);
            type_text(app, value);
        }
    }

    #[test]
    fn test_typing_updates_form() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);

        type_text(&mut app, "ana@example.com");
        assert_eq!(app.form.value(Field::Email), "ana@example.com");
    }

    #[test]
    fn test_failed_advance_focuses_first_error() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);

        type_text(&mut app, "ana@example.com");
        app.advance();
        assert_eq!(app.form.step(), Step::Credentials);
        assert_eq!(app.focused(), FocusTarget::Field(Field::Password));
    }

    #[test]
    fn test_client_type_selector_only_on_step_two() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);
        assert!(!app.focus_targets().contains(&FocusTarget::ClientType));

        type_text(&mut app, "ana@example.com");
        app.next_focus();
        type_text(&mut app, "segredo1");
        app.advance();

        assert_eq!(app.focused(), FocusTarget::ClientType);
        app.toggle_client_type();
        assert_eq!(app.form.client_type(), ClientType::Company);
        assert_eq!(
            app.focus_targets()[1],
            FocusTarget::Field(Field::CompanyName)
        );
    }

    #[test]
    fn test_focus_wraps() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);

        app.prev_focus();
        assert_eq!(app.focused(), FocusTarget::Field(Field::Password));
        app.next_focus();
        assert_eq!(app.focused(), FocusTarget::Field(Field::Email));
    }

    #[test]
    fn test_escape_goes_back_then_quits() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);
        fill_to_address(&mut app);

        app.go_back();
        assert_eq!(app.form.step(), Step::ClientDetails);
        assert_eq!(app.form.value(Field::Street), "Rua A");
        app.go_back();
        app.go_back();
        assert!(app.should_quit);
    }

    #[test]
    fn test_submit_reports_connection_failure() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);
        fill_to_address(&mut app);

        app.advance();
        assert!(app.form.submission().is_in_flight());

        // A second Enter while waiting does nothing
        app.advance();

        let deadline = Instant::now() + Duration::from_secs(10);
        while !app.poll_submission() {
            assert!(Instant::now() < deadline, "submission never finished");
            std::thread::sleep(Duration::from_millis(20));
        }

        assert_eq!(
            app.form.submission(),
            &SubmissionState::Failed(CONNECTION_ERROR_MESSAGE.to_string())
        );
        assert_eq!(app.form.value(Field::Email), "ana@example.com");
    }
}
