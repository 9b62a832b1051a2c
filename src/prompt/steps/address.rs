//! Address step

use crate::error::SignupResult;
use crate::models::AddressDetails;
use crate::prompt::prompter::Prompter;
use crate::wizard::SignupForm;

use super::{ask_fields, StepOutcome};

/// Address step
pub struct AddressStep;

impl AddressStep {
    /// Run the address step
    pub fn run<P: Prompter>(prompter: &mut P, form: &mut SignupForm) -> SignupResult<StepOutcome> {
        prompter.say(&format!(
            "Complemento e tipo de endereço são opcionais. Digite '{}' para limpá-los.",
            super::CLEAR_COMMAND
        ))?;
        prompter.say("")?;

        ask_fields(prompter, form, &AddressDetails::FIELDS)
    }
}
