//! Prompt wizard command
//!
//! Runs the line-by-line wizard, submits the confirmed request and offers
//! a retry when the server refuses it or cannot be reached.

use crate::api::SignupClient;
use crate::error::SignupResult;
use crate::prompt::{PromptWizard, Prompter, WizardOutcome};
use crate::wizard::{SignupForm, SubmissionState};

/// Handle `signup prompt`
///
/// Returns `true` when the signup was accepted.
pub async fn handle_prompt_command<P: Prompter>(
    prompter: &mut P,
    form: &mut SignupForm,
    client: &SignupClient,
) -> SignupResult<bool> {
    PromptWizard::new(&mut *prompter).welcome()?;

    let mut edit = true;
    loop {
        if edit {
            match PromptWizard::new(&mut *prompter).run(form)? {
                WizardOutcome::Confirmed(_) => {}
                WizardOutcome::Cancelled => return Ok(false),
            }
        }

        let request = form.begin_submission()?;
        prompter.say("Enviando...")?;
        let result = client.submit(&request).await;
        form.finish_submission(&result);

        match form.submission() {
            SubmissionState::Succeeded(message) => {
                prompter.say(message)?;
                return Ok(true);
            }
            SubmissionState::Failed(message) => prompter.say(&format!("Erro: {}", message))?,
            SubmissionState::Idle | SubmissionState::InFlight => {}
        }

        let answer = prompter.ask("Tentar novamente? (s = reenviar, e = editar, n = sair) [s]: ")?;
        match answer.to_lowercase().as_str() {
            "" | "s" | "sim" | "y" | "yes" => edit = false,
            "e" | "editar" | "<" => edit = true,
            _ => return Ok(false),
        }
    }
}
