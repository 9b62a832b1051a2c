//! Field validation for the signup form
//!
//! Each step checks that its required fields are filled in. Two fields
//! also carry a format rule: the email must look like `local@domain.tld`
//! and the password must be at least six characters long.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::{AddressDetails, ClientType, Credentials, Field, SignupDraft};
use crate::wizard::Step;

/// Minimum number of characters in a password
///
/// Counted in Unicode scalar values, so `"😀😀😀"` is three characters. A
/// browser form counting UTF-16 code units would see six.
pub const MIN_PASSWORD_LEN: usize = 6;

pub const EMAIL_REQUIRED: &str = "O email é obrigatório.";
pub const EMAIL_INVALID: &str = "Insira um email válido.";
pub const PASSWORD_REQUIRED: &str = "A senha é obrigatória.";
pub const PASSWORD_TOO_SHORT: &str = "A senha deve ter pelo menos 6 caracteres.";

/// Per-field messages, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any previous one
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Drop the message for a single field
    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    /// Drop every message
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over (field, message) pairs in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// The first failing field in form order
    pub fn first_field(&self) -> Option<Field> {
        self.0.keys().next().copied()
    }

    /// Add every message from another error set
    pub fn extend(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    /// Turn into a `Result`, `Ok` when no field failed
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field.label(), message)?;
            first = false;
        }
        Ok(())
    }
}

/// Message shown when a required field is left blank
pub fn required_message(field: Field) -> &'static str {
    match field {
        Field::Email => EMAIL_REQUIRED,
        Field::Password => PASSWORD_REQUIRED,
        Field::FullName => "O nome completo é obrigatório.",
        Field::SocialSecurityNumber => "O CPF é obrigatório.",
        Field::DateOfBirth => "A data de nascimento é obrigatória.",
        Field::CompanyName => "O nome da empresa é obrigatório.",
        Field::TaxIdNumber => "O CNPJ é obrigatório.",
        Field::ContactPerson => "O nome do contato é obrigatório.",
        Field::Street => "A rua é obrigatória.",
        Field::Number => "O número é obrigatório.",
        Field::City => "A cidade é obrigatória.",
        Field::State => "O estado é obrigatório.",
        Field::Country => "O país é obrigatório.",
        Field::PostalCode => "O CEP é obrigatório.",
        Field::AdditionalInfo | Field::AddressType => "Campo obrigatório.",
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

/// Check an email against the `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn require(errors: &mut FieldErrors, field: Field, value: &str) {
    if is_blank(value) {
        errors.insert(field, required_message(field));
    }
}

/// Step 1: email and password
pub fn validate_credentials(credentials: &Credentials) -> FieldErrors {
    let mut errors = FieldErrors::new();

    // The pattern runs on the raw value, since that is what gets sent
    let email = &credentials.email;
    if is_blank(email) {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if credentials.password.is_empty() {
        errors.insert(Field::Password, PASSWORD_REQUIRED);
    } else if credentials.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(Field::Password, PASSWORD_TOO_SHORT);
    }

    errors
}

/// Step 2: identity fields of the selected client type only
pub fn validate_client_details(draft: &SignupDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    match draft.client_type {
        ClientType::Individual => {
            let individual = &draft.individual;
            require(&mut errors, Field::FullName, &individual.full_name);
            require(&mut errors, Field::SocialSecurityNumber, &individual.social_security_number);
            require(&mut errors, Field::DateOfBirth, &individual.date_of_birth);
        }
        ClientType::Company => {
            let company = &draft.company;
            require(&mut errors, Field::CompanyName, &company.company_name);
            require(&mut errors, Field::TaxIdNumber, &company.tax_id_number);
            require(&mut errors, Field::ContactPerson, &company.contact_person);
        }
    }
    errors
}

/// Step 3: address
///
/// `additionalInfo` and `address_type` are optional.
pub fn validate_address(address: &AddressDetails) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, Field::Street, &address.street);
    require(&mut errors, Field::Number, &address.number);
    require(&mut errors, Field::City, &address.city);
    require(&mut errors, Field::State, &address.state);
    require(&mut errors, Field::Country, &address.country);
    require(&mut errors, Field::PostalCode, &address.postal_code);
    errors
}

/// Validate whatever the given step collects
pub fn validate_step(step: Step, draft: &SignupDraft) -> FieldErrors {
    match step {
        Step::Credentials => validate_credentials(&draft.credentials),
        Step::ClientDetails => validate_client_details(draft),
        Step::Address => validate_address(&draft.address),
    }
}
