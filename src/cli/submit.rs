//! Non-interactive submit command
//!
//! Takes every form field as a flag, validates all steps at once and
//! posts the request. Meant for scripts and quick manual testing.

use clap::Args;
use serde_json::Value;

use crate::api::SignupClient;
use crate::error::{SignupError, SignupResult};
use crate::models::{ClientType, DraftUpdate, Field, SignupRequest};
use crate::wizard::{SignupForm, SUCCESS_MESSAGE};

/// Arguments for `signup submit`
#[derive(Args, Debug, Default)]
pub struct SubmitArgs {
    /// Login email
    #[arg(long)]
    pub email: Option<String>,
    /// Password (at least 6 characters)
    #[arg(long, env = "SIGNUP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    /// Client type: individual or company
    #[arg(long, default_value = "individual")]
    pub client_type: ClientType,

    /// Full name (individual)
    #[arg(long)]
    pub full_name: Option<String>,
    /// CPF (individual)
    #[arg(long)]
    pub social_security_number: Option<String>,
    /// Date of birth (individual)
    #[arg(long)]
    pub date_of_birth: Option<String>,

    /// Company name (company)
    #[arg(long)]
    pub company_name: Option<String>,
    /// CNPJ (company)
    #[arg(long)]
    pub tax_id_number: Option<String>,
    /// Contact person (company)
    #[arg(long)]
    pub contact_person: Option<String>,

    /// Street
    #[arg(long)]
    pub street: Option<String>,
    /// Street number
    #[arg(long)]
    pub number: Option<String>,
    /// Complement (optional)
    #[arg(long)]
    pub additional_info: Option<String>,
    /// City
    #[arg(long)]
    pub city: Option<String>,
    /// State
    #[arg(long)]
    pub state: Option<String>,
    /// Country
    #[arg(long)]
    pub country: Option<String>,
    /// Postal code
    #[arg(long)]
    pub postal_code: Option<String>,
    /// Address type (defaults to the configured one)
    #[arg(long)]
    pub address_type: Option<String>,

    /// Print the request body instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl SubmitArgs {
    /// The flags as a single draft update
    pub fn to_update(&self) -> DraftUpdate {
        let values = [
            (Field::Email, &self.email),
            (Field::Password, &self.password),
            (Field::FullName, &self.full_name),
            (Field::SocialSecurityNumber, &self.social_security_number),
            (Field::DateOfBirth, &self.date_of_birth),
            (Field::CompanyName, &self.company_name),
            (Field::TaxIdNumber, &self.tax_id_number),
            (Field::ContactPerson, &self.contact_person),
            (Field::Street, &self.street),
            (Field::Number, &self.number),
            (Field::AdditionalInfo, &self.additional_info),
            (Field::City, &self.city),
            (Field::State, &self.state),
            (Field::Country, &self.country),
            (Field::PostalCode, &self.postal_code),
            (Field::AddressType, &self.address_type),
        ];

        values
            .into_iter()
            .filter_map(|(field, value)| value.as_ref().map(|v| (field, v)))
            .fold(
                DraftUpdate::new().client_type(self.client_type),
                |update, (field, value)| update.field(field, value.as_str()),
            )
    }
}

/// Request body as printed by `--dry-run`, with the password masked
pub fn dry_run_payload(request: &SignupRequest) -> SignupResult<String> {
    let mut value = serde_json::to_value(request)?;
    if let Some(password) = value.get_mut("password") {
        *password = Value::String("*".repeat(request.password.chars().count()));
    }
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Handle `signup submit`
///
/// Field errors and server failures are printed here, one per line on
/// stderr, and reported as `Ok(false)`. Only unexpected errors are
/// returned.
pub async fn handle_submit_command(
    args: SubmitArgs,
    mut form: SignupForm,
    client: &SignupClient,
) -> SignupResult<bool> {
    form.update(args.to_update());

    let request = match form.validate_all() {
        Ok(request) => request,
        Err(SignupError::Validation(errors)) => {
            for (field, message) in errors.iter() {
                eprintln!("{}: {}", field.label(), message);
            }
            return Ok(false);
        }
        Err(err) => return Err(err),
    };

    if args.dry_run {
        println!("{}", dry_run_payload(&request)?);
        return Ok(true);
    }

    let request = form.begin_submission()?;
    let result = client.submit(&request).await;
    form.finish_submission(&result);

    match result {
        Ok(_) => {
            println!("{}", SUCCESS_MESSAGE);
            Ok(true)
        }
        Err(err) if err.is_remote() => {
            eprintln!("{}", err.user_message());
            Ok(false)
        }
        Err(err) => Err(err),
    }
}
