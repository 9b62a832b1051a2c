//! Credentials step
//!
//! Asks for the login email and password.

use crate::error::SignupResult;
use crate::models::Field;
use crate::prompt::prompter::Prompter;
use crate::wizard::SignupForm;

use super::{ask_fields, StepOutcome};

/// Credentials step
pub struct CredentialsStep;

impl CredentialsStep {
    /// Run the credentials step
    pub fn run<P: Prompter>(prompter: &mut P, form: &mut SignupForm) -> SignupResult<StepOutcome> {
        prompter.say("Informe o email e a senha que você usará para entrar.")?;
        prompter.say(&format!(
            "A senha precisa ter pelo menos {} caracteres.",
            crate::validation::MIN_PASSWORD_LEN
        ))?;
        prompter.say("")?;

        ask_fields(prompter, form, &[Field::Email, Field::Password])
    }
}
