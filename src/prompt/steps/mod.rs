//! Prompt wizard steps
//!
//! Individual steps in the prompt flow. Each one asks for its fields,
//! showing the current value as the default and any pending error above
//! the question.

pub mod address;
pub mod client_details;
pub mod credentials;

use crate::error::SignupResult;
use crate::models::Field;
use crate::wizard::SignupForm;

use super::prompter::Prompter;

/// Typed at any question to return to the previous step
pub const BACK_COMMAND: &str = "<";

/// Typed at an optional question to blank the field
pub const CLEAR_COMMAND: &str = "-";

/// How a step ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// All questions answered
    Completed,
    /// The user asked to go back
    Back,
}

/// Ask for one field; an empty answer keeps the current value
///
/// Optional fields also accept `CLEAR_COMMAND` to remove their value.
pub(crate) fn ask_field<P: Prompter>(
    prompter: &mut P,
    form: &mut SignupForm,
    field: Field,
) -> SignupResult<StepOutcome> {
    if let Some(message) = form.errors().get(field) {
        prompter.say(&format!("  ! {}", message))?;
    }

    let current = form.value(field);
    let question = if current.is_empty() {
        format!("{}: ", field.label())
    } else if field.is_secret() {
        format!("{} [mantida]: ", field.label())
    } else if field.is_optional() {
        format!("{} [{}] ('{}' limpa): ", field.label(), current, CLEAR_COMMAND)
    } else {
        format!("{} [{}]: ", field.label(), current)
    };

    let answer = if field.is_secret() {
        prompter.ask_secret(&question)?
    } else {
        prompter.ask(&question)?
    };

    if answer == BACK_COMMAND {
        return Ok(StepOutcome::Back);
    }
    if answer == CLEAR_COMMAND && field.is_optional() {
        form.set_field(field, "");
    } else if !answer.is_empty() {
        form.set_field(field, answer);
    }
    Ok(StepOutcome::Completed)
}

/// Ask for several fields in order, stopping early on a back request
pub(crate) fn ask_fields<P: Prompter>(
    prompter: &mut P,
    form: &mut SignupForm,
    fields: &[Field],
) -> SignupResult<StepOutcome> {
    for &field in fields {
        if ask_field(prompter, form, field)? == StepOutcome::Back {
            return Ok(StepOutcome::Back);
        }
    }
    Ok(StepOutcome::Completed)
}
