//! Client details step
//!
//! Asks whether the client is a person or a company, then the identity
//! fields of that kind only.

use crate::error::SignupResult;
use crate::models::ClientType;
use crate::prompt::prompter::Prompter;
use crate::wizard::SignupForm;

use super::{ask_fields, StepOutcome, BACK_COMMAND};

/// Client details step
pub struct ClientDetailsStep;

impl ClientDetailsStep {
    /// Run the client details step
    pub fn run<P: Prompter>(prompter: &mut P, form: &mut SignupForm) -> SignupResult<StepOutcome> {
        prompter.say("Tipo de Cliente:")?;
        prompter.say(&format!("  1. {}", ClientType::Individual.label()))?;
        prompter.say(&format!("  2. {}", ClientType::Company.label()))?;

        let default_choice = match form.client_type() {
            ClientType::Individual => "1",
            ClientType::Company => "2",
        };

        loop {
            let choice = prompter.ask(&format!("Selecione o tipo [{}]: ", default_choice))?;
            let client_type = match choice.as_str() {
                BACK_COMMAND => return Ok(StepOutcome::Back),
                "" => form.client_type(),
                "1" => ClientType::Individual,
                "2" => ClientType::Company,
                other => match ClientType::parse(other) {
                    Some(client_type) => client_type,
                    None => {
                        prompter.say("  ! Opção inválida. Digite 1 ou 2.")?;
                        continue;
                    }
                },
            };
            form.set_client_type(client_type);
            break;
        }

        prompter.say("")?;
        let fields = form.client_type().fields();
        ask_fields(prompter, form, fields)
    }
}
