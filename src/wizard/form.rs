//! Step orchestration
//!
//! `SignupForm` owns the draft, the current step, the per-field errors and
//! the state of the one network submission. Front-ends feed it edits and
//! navigation requests; it never performs I/O itself.

use tracing::{debug, info, warn};

use crate::error::{SignupError, SignupResult};
use crate::models::{
    ClientType, DraftUpdate, Field, SignupDraft, SignupOutcome, SignupRequest,
    DEFAULT_ADDRESS_TYPE,
};
use crate::validation::{self, FieldErrors};

use super::step::Step;

/// Confirmation shown once the server accepts the signup
pub const SUCCESS_MESSAGE: &str = "Cadastro realizado com sucesso!";

/// Where the single submission currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Nothing sent yet, or the user edited the form since the last result
    #[default]
    Idle,
    /// Request sent, waiting for the server
    InFlight,
    /// Server accepted the signup
    Succeeded(String),
    /// Server rejected it or could not be reached
    Failed(String),
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Form-level message to display, if any
    pub fn banner(&self) -> Option<&str> {
        match self {
            Self::Succeeded(msg) | Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// The multi-step signup form
#[derive(Debug, Clone)]
pub struct SignupForm {
    step: Step,
    draft: SignupDraft,
    errors: FieldErrors,
    submission: SubmissionState,
    default_address_type: String,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupForm {
    /// Create an empty form on the first step
    pub fn new() -> Self {
        Self::with_default_address_type(DEFAULT_ADDRESS_TYPE)
    }

    /// Create an empty form that fills a blank address type with `address_type`
    pub fn with_default_address_type(address_type: impl Into<String>) -> Self {
        let default_address_type = address_type.into();
        let mut draft = SignupDraft::new();
        draft.set(Field::AddressType, default_address_type.clone());

        Self {
            step: Step::Credentials,
            draft,
            errors: FieldErrors::new(),
            submission: SubmissionState::Idle,
            default_address_type,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &SignupDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn client_type(&self) -> ClientType {
        self.draft.client_type
    }

    /// Current value of a field
    pub fn value(&self, field: Field) -> &str {
        self.draft.get(field)
    }

    /// Fields shown on the current step
    pub fn current_fields(&self) -> &'static [Field] {
        self.step.fields(self.draft.client_type)
    }

    /// Merge a step-local update into the draft
    ///
    /// Clears the errors of the touched fields and any previous banner.
    /// Switching the client type clears every identity-field error.
    pub fn update(&mut self, update: DraftUpdate) {
        if update.is_empty() {
            return;
        }

        for field in update.touched() {
            self.errors.remove(field);
        }
        if let Some(client_type) = update.client_type {
            if client_type != self.draft.client_type {
                for field in ClientType::Individual
                    .fields()
                    .iter()
                    .chain(ClientType::Company.fields())
                {
                    self.errors.remove(*field);
                }
            }
        }

        if !self.submission.is_in_flight() {
            self.submission = SubmissionState::Idle;
        }
        self.draft.apply(update);
    }

    /// Set a single field
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.update(DraftUpdate::new().field(field, value));
    }

    /// Select the client type
    pub fn set_client_type(&mut self, client_type: ClientType) {
        self.update(DraftUpdate::new().client_type(client_type));
    }

    /// Validate the current step and move forward when it passes
    ///
    /// Returns `false` and keeps the step when validation fails. On the last
    /// step a passing validation leaves the step where it is.
    pub fn next_step(&mut self) -> bool {
        let errors = validation::validate_step(self.step, &self.draft);
        if !errors.is_empty() {
            debug!(step = self.step.index(), failed = errors.len(), "Step validation failed");
            self.errors = errors;
            return false;
        }

        self.errors.clear();
        if let Some(next) = self.step.next() {
            info!(from = self.step.index(), to = next.index(), "Advancing signup step");
            self.step = next;
        }
        true
    }

    /// Go back one step without validating
    pub fn prev_step(&mut self) {
        if let Some(prev) = self.step.prev() {
            debug!(from = self.step.index(), to = prev.index(), "Returning to previous step");
            self.step = prev;
            self.errors.clear();
        }
    }

    /// Validate the address step and compose the request body
    ///
    /// Only allowed on the last step. Does not change the submission state.
    pub fn prepare_submission(&mut self) -> SignupResult<SignupRequest> {
        if !self.step.is_last() {
            return Err(SignupError::Incomplete(self.step));
        }

        let errors = validation::validate_step(self.step, &self.draft);
        if !errors.is_empty() {
            debug!(failed = errors.len(), "Address validation failed");
            self.errors = errors.clone();
            return Err(SignupError::Validation(errors));
        }

        self.errors.clear();
        Ok(self.compose())
    }

    /// Validate every step at once and compose the request body
    ///
    /// On failure the form jumps to the earliest step with an error.
    pub fn validate_all(&mut self) -> SignupResult<SignupRequest> {
        let mut errors = FieldErrors::new();
        for step in [Step::Credentials, Step::ClientDetails, Step::Address] {
            errors.extend(validation::validate_step(step, &self.draft));
        }

        if let Some(field) = errors.first_field() {
            self.step = field.step();
            self.errors = errors.clone();
            return Err(SignupError::Validation(errors));
        }

        self.step = Step::Address;
        self.errors.clear();
        Ok(self.compose())
    }

    /// Prepare the submission and mark it in flight
    ///
    /// Refuses a second submit while the first is still waiting.
    pub fn begin_submission(&mut self) -> SignupResult<SignupRequest> {
        if self.submission.is_in_flight() {
            warn!("Ignoring submit while a signup request is in flight");
            return Err(SignupError::SubmissionInFlight);
        }

        let request = self.prepare_submission()?;
        self.submission = SubmissionState::InFlight;
        info!(client_type = %request.client_type, "Submitting signup");
        Ok(request)
    }

    /// Record the result of the network call
    ///
    /// Success discards the draft and returns to the first step. Failure
    /// keeps everything so the user can retry.
    pub fn finish_submission(&mut self, result: &SignupResult<SignupOutcome>) {
        match result {
            Ok(outcome) => {
                info!(status = outcome.status, "Signup accepted");
                self.reset();
                self.submission = SubmissionState::Succeeded(SUCCESS_MESSAGE.to_string());
            }
            Err(err) => {
                warn!(error = %err, "Signup failed");
                self.submission = SubmissionState::Failed(err.user_message());
            }
        }
    }

    /// Discard the draft and start over
    pub fn reset(&mut self) {
        let default_address_type = std::mem::take(&mut self.default_address_type);
        *self = Self::with_default_address_type(default_address_type);
    }

    fn compose(&self) -> SignupRequest {
        SignupRequest::from_draft(&self.draft, &self.default_address_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{EMAIL_INVALID, PASSWORD_TOO_SHORT};

    fn fill_credentials(form: &mut SignupForm) {
        form.set_field(Field::Email, "ana@example.com");
        form.set_field(Field::Password, "segredo1");
    }

    fn fill_individual(form: &mut SignupForm) {
        form.set_field(Field::FullName, "Ana Souza");
        form.set_field(Field::SocialSecurityNumber, "123.456.789-00");
        form.set_field(Field::DateOfBirth, "1990-04-01");
    }

    fn fill_address(form: &mut SignupForm) {
        form.update(
            DraftUpdate::new()
                .field(Field::Street, "Rua das Flores")
                .field(Field::Number, "42")
                .field(Field::City, "Curitiba")
                .field(Field::State, "PR")
                .field(Field::Country, "Brasil")
                .field(Field::PostalCode, "80000-000"),
        );
    }

    fn form_on_address_step() -> SignupForm {
        let mut form = SignupForm::new();
        fill_credentials(&mut form);
        assert!(form.next_step());
        fill_individual(&mut form);
        assert!(form.next_step());
        fill_address(&mut form);
        form
    }

    #[test]
    fn test_starts_on_credentials() {
        let form = SignupForm::new();
        assert_eq!(form.step(), Step::Credentials);
        assert_eq!(form.value(Field::AddressType), "comercial");
        assert_eq!(form.submission(), &SubmissionState::Idle);
    }

    #[test]
    fn test_invalid_credentials_block_advance() {
        let mut form = SignupForm::new();
        form.set_field(Field::Email, "not-an-email");
        form.set_field(Field::Password, "12345");

        assert!(!form.next_step());
        assert_eq!(form.step(), Step::Credentials);
        assert_eq!(form.errors().get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(form.errors().get(Field::Password), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_editing_clears_only_that_field_error() {
        let mut form = SignupForm::new();
        assert!(!form.next_step());
        assert_eq!(form.errors().len(), 2);

        form.set_field(Field::Email, "a");
        assert!(!form.errors().contains(Field::Email));
        assert!(form.errors().contains(Field::Password));
    }

    #[test]
    fn test_prev_step_keeps_data() {
        let mut form = SignupForm::new();
        fill_credentials(&mut form);
        assert!(form.next_step());
        form.set_field(Field::FullName, "Ana");

        form.prev_step();
        assert_eq!(form.step(), Step::Credentials);
        assert_eq!(form.value(Field::Email), "ana@example.com");

        form.prev_step();
        assert_eq!(form.step(), Step::Credentials);

        assert!(form.next_step());
        assert_eq!(form.value(Field::FullName), "Ana");
    }

    #[test]
    fn test_company_branch_only_validates_company_fields() {
        let mut form = SignupForm::new();
        fill_credentials(&mut form);
        assert!(form.next_step());

        form.set_client_type(ClientType::Company);
        assert!(!form.next_step());
        assert!(form.errors().contains(Field::CompanyName));
        assert!(!form.errors().contains(Field::FullName));

        form.update(
            DraftUpdate::new()
                .field(Field::CompanyName, "Acme Ltda")
                .field(Field::TaxIdNumber, "12.345.678/0001-90")
                .field(Field::ContactPerson, "Bruno"),
        );
        assert!(form.next_step());
        assert_eq!(form.step(), Step::Address);
    }

    #[test]
    fn test_switching_client_type_clears_identity_errors() {
        let mut form = SignupForm::new();
        fill_credentials(&mut form);
        assert!(form.next_step());
        assert!(!form.next_step());
        assert_eq!(form.errors().len(), 3);

        form.set_client_type(ClientType::Company);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_prepare_submission_requires_last_step() {
        let mut form = SignupForm::new();
        let err = form.prepare_submission().unwrap_err();
        assert!(matches!(err, SignupError::Incomplete(Step::Credentials)));
    }

    #[test]
    fn test_prepare_submission_validates_address() {
        let mut form = SignupForm::new();
        fill_credentials(&mut form);
        assert!(form.next_step());
        fill_individual(&mut form);
        assert!(form.next_step());

        let err = form.prepare_submission().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(form.errors().len(), 6);
        assert!(!form.errors().contains(Field::AdditionalInfo));
    }

    #[test]
    fn test_request_contains_selected_branch() {
        let mut form = form_on_address_step();
        let request = form.prepare_submission().unwrap();
        assert_eq!(request.client_type, ClientType::Individual);
        assert!(request.individual.is_some());
        assert!(request.company.is_none());
        assert_eq!(request.address.address_type, "comercial");
    }

    #[test]
    fn test_duplicate_submit_is_refused() {
        let mut form = form_on_address_step();
        assert!(form.begin_submission().is_ok());
        assert!(form.submission().is_in_flight());

        let err = form.begin_submission().unwrap_err();
        assert!(matches!(err, SignupError::SubmissionInFlight));
    }

    #[test]
    fn test_success_discards_draft() {
        let mut form = form_on_address_step();
        form.begin_submission().unwrap();
        form.finish_submission(&Ok(SignupOutcome {
            status: 201,
            body: serde_json::json!({}),
        }));

        assert_eq!(form.step(), Step::Credentials);
        assert_eq!(form.value(Field::Email), "");
        assert_eq!(form.submission().banner(), Some(SUCCESS_MESSAGE));
    }

    #[test]
    fn test_failure_keeps_draft_and_shows_server_message() {
        let mut form = form_on_address_step();
        form.begin_submission().unwrap();
        form.finish_submission(&Err(SignupError::Rejected {
            status: 400,
            message: Some("Email já cadastrado.".into()),
        }));

        assert_eq!(form.step(), Step::Address);
        assert_eq!(form.value(Field::Email), "ana@example.com");
        assert_eq!(form.submission().banner(), Some("Email já cadastrado."));

        // Retry is allowed after a failure
        assert!(form.begin_submission().is_ok());
    }

    #[test]
    fn test_edit_clears_banner() {
        let mut form = form_on_address_step();
        form.begin_submission().unwrap();
        form.finish_submission(&Err(SignupError::Connection("refused".into())));
        assert!(form.submission().banner().is_some());

        form.set_field(Field::Street, "Rua Nova");
        assert_eq!(form.submission(), &SubmissionState::Idle);
    }

    #[test]
    fn test_validate_all_jumps_to_first_failing_step() {
        let mut form = SignupForm::new();
        fill_credentials(&mut form);
        fill_address(&mut form);

        let err = form.validate_all().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(form.step(), Step::ClientDetails);

        fill_individual(&mut form);
        let request = form.validate_all().unwrap();
        assert_eq!(request.email, "ana@example.com");
        assert_eq!(form.step(), Step::Address);
    }

    #[test]
    fn test_custom_default_address_type_survives_reset() {
        let mut form = SignupForm::with_default_address_type("residencial");
        form.set_field(Field::Email, "x@y.zz");
        form.reset();
        assert_eq!(form.value(Field::AddressType), "residencial");
        assert_eq!(form.value(Field::Email), "");
    }
}
