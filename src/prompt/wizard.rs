//! Prompt wizard orchestration
//!
//! Walks the same three steps as the TUI, one question per line. The form
//! does all of the validation; this only decides what to ask next.

use crate::error::{SignupError, SignupResult};
use crate::models::{Field, SignupRequest};
use crate::wizard::{SignupForm, Step};

use super::prompter::Prompter;
use super::steps::{
    address::AddressStep, client_details::ClientDetailsStep, credentials::CredentialsStep,
    StepOutcome, BACK_COMMAND,
};

/// How a wizard run ended
#[derive(Debug)]
pub enum WizardOutcome {
    /// Every step passed and the user confirmed
    Confirmed(SignupRequest),
    /// The user backed out of the first step or declined the summary
    Cancelled,
}

/// The line-by-line signup wizard
pub struct PromptWizard<'a, P: Prompter> {
    prompter: &'a mut P,
}

impl<'a, P: Prompter> PromptWizard<'a, P> {
    /// Create a new wizard writing to `prompter`
    pub fn new(prompter: &'a mut P) -> Self {
        Self { prompter }
    }

    /// Print the banner shown once per session
    pub fn welcome(&mut self) -> SignupResult<()> {
        self.prompter.say("")?;
        self.prompter.say("===========================================")?;
        self.prompter.say("  Cadastro")?;
        self.prompter.say("===========================================")?;
        self.prompter.say("")?;
        self.prompter.say(&format!(
            "Deixe em branco para manter o valor atual. Digite '{}' para voltar.",
            BACK_COMMAND
        ))?;
        Ok(())
    }

    /// Ask questions until the form is complete and confirmed
    ///
    /// Resumes from the form's current step, so a failed submission can be
    /// retried without re-entering anything.
    pub fn run(&mut self, form: &mut SignupForm) -> SignupResult<WizardOutcome> {
        loop {
            let step = form.step();
            self.prompter.say("")?;
            self.prompter.say(&step.to_string())?;
            self.prompter.say(&"-".repeat(step.to_string().chars().count()))?;

            let outcome = match step {
                Step::Credentials => CredentialsStep::run(&mut *self.prompter, form)?,
                Step::ClientDetails => ClientDetailsStep::run(&mut *self.prompter, form)?,
                Step::Address => AddressStep::run(&mut *self.prompter, form)?,
            };

            if outcome == StepOutcome::Back {
                if step.is_first() {
                    self.prompter.say("Cadastro cancelado.")?;
                    return Ok(WizardOutcome::Cancelled);
                }
                form.prev_step();
                continue;
            }

            if !step.is_last() {
                if !form.next_step() {
                    self.report_errors(form)?;
                }
                continue;
            }

            match form.prepare_submission() {
                Ok(request) => {
                    self.summary(form)?;
                    let answer = self.prompter.ask("Enviar cadastro? (s/n) [s]: ")?;
                    match answer.to_lowercase().as_str() {
                        "" | "s" | "sim" | "y" | "yes" => {
                            return Ok(WizardOutcome::Confirmed(request))
                        }
                        BACK_COMMAND => continue,
                        _ => {
                            self.prompter.say("Cadastro cancelado.")?;
                            return Ok(WizardOutcome::Cancelled);
                        }
                    }
                }
                Err(SignupError::Validation(_)) => self.report_errors(form)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn report_errors(&mut self, form: &SignupForm) -> SignupResult<()> {
        self.prompter.say("")?;
        self.prompter.say("Corrija os campos abaixo:")?;
        for (field, message) in form.errors().iter() {
            self.prompter.say(&format!("  {}: {}", field.label(), message))?;
        }
        Ok(())
    }

    fn summary(&mut self, form: &SignupForm) -> SignupResult<()> {
        self.prompter.say("")?;
        self.prompter.say("Resumo")?;
        self.prompter.say("------")?;
        self.prompter.say(&format!(
            "  Tipo de Cliente: {}",
            form.client_type().label()
        ))?;

        let fields = [Step::Credentials, Step::ClientDetails, Step::Address]
            .into_iter()
            .flat_map(|step| step.fields(form.client_type()).iter().copied());
        for field in fields {
            let value = form.value(field);
            if value.trim().is_empty() {
                continue;
            }
            let shown = if field == Field::Password {
                "*".repeat(value.chars().count())
            } else {
                value.to_string()
            };
            self.prompter.say(&format!("  {}: {}", field.label(), shown))?;
        }
        self.prompter.say("")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClientType;
    use crate::prompt::prompter::ScriptedPrompter;

    const ADDRESS: [&str; 8] = [
        "Rua das Flores",
        "100",
        "",
        "São Paulo",
        "SP",
        "Brasil",
        "01000-000",
        "",
    ];

    fn answers(parts: &[&[&str]]) -> Vec<String> {
        parts
            .iter()
            .flat_map(|p| p.iter().map(|s| s.to_string()))
            .collect()
    }

    #[test]
    fn test_full_individual_run() {
        let script = answers(&[
            &["ana@example.com", "segredo1"],
            &["1", "Ana Souza", "123.456.789-00", "1990-05-01"],
            &ADDRESS,
            &["s"],
        ]);
        let mut prompter = ScriptedPrompter::new(script);
        let mut form = SignupForm::new();

        let outcome = PromptWizard::new(&mut prompter).run(&mut form).unwrap();
        let request = match outcome {
            WizardOutcome::Confirmed(request) => request,
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert_eq!(request.client_type, ClientType::Individual);
        assert!(request.company.is_none());
        assert_eq!(request.address.address_type, "comercial");
        assert!(prompter.saw("Senha: ********"));
        assert!(!prompter.saw("segredo1"));
    }

    #[test]
    fn test_invalid_step_is_asked_again() {
        let script = answers(&[
            &["nao-e-email", "123"],
            &["ana@example.com", "segredo1"],
            &["<"],
            &["<"],
        ]);
        let mut prompter = ScriptedPrompter::new(script);
        let mut form = SignupForm::new();

        let outcome = PromptWizard::new(&mut prompter).run(&mut form).unwrap();
        assert!(matches!(outcome, WizardOutcome::Cancelled));
        assert!(prompter.saw("Insira um email válido."));
        assert!(prompter.saw("A senha deve ter pelo menos 6 caracteres."));
    }

    #[test]
    fn test_back_from_first_step_cancels() {
        let mut prompter = ScriptedPrompter::new(["<"]);
        let mut form = SignupForm::new();

        let outcome = PromptWizard::new(&mut prompter).run(&mut form).unwrap();
        assert!(matches!(outcome, WizardOutcome::Cancelled));
        assert_eq!(form.step(), Step::Credentials);
    }

    #[test]
    fn test_declining_summary_cancels() {
        let script = answers(&[
            &["ana@example.com", "segredo1"],
            &["2", "Acme", "12.345.678/0001-90", "Bruno"],
            &ADDRESS,
            &["n"],
        ]);
        let mut prompter = ScriptedPrompter::new(script);
        let mut form = SignupForm::new();

        let outcome = PromptWizard::new(&mut prompter).run(&mut form).unwrap();
        assert!(matches!(outcome, WizardOutcome::Cancelled));
        assert!(prompter.saw("Tipo de Cliente: Pessoa Jurídica"));
    }
}
