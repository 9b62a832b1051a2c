//! Signup draft
//!
//! The in-progress, unsaved state of the whole signup flow. A draft is
//! created empty, edited field by field, and dropped once the signup
//! succeeds. It is never written to disk.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::address::AddressDetails;
use super::client::{ClientType, CompanyDetails, IndividualDetails};
use super::field::Field;

/// Login credentials, wiped from memory when dropped
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The aggregate form state
///
/// Both identity branches are kept so that flipping the client type back
/// and forth does not lose what was typed. Only the branch matching
/// `client_type` is ever validated or sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupDraft {
    pub credentials: Credentials,
    pub client_type: ClientType,
    pub individual: IndividualDetails,
    pub company: CompanyDetails,
    pub address: AddressDetails,
}

impl SignupDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.credentials.email,
            Field::Password => &self.credentials.password,
            Field::FullName => &self.individual.full_name,
            Field::SocialSecurityNumber => &self.individual.social_security_number,
            Field::DateOfBirth => &self.individual.date_of_birth,
            Field::CompanyName => &self.company.company_name,
            Field::TaxIdNumber => &self.company.tax_id_number,
            Field::ContactPerson => &self.company.contact_person,
            Field::Street => &self.address.street,
            Field::Number => &self.address.number,
            Field::AdditionalInfo => &self.address.additional_info,
            Field::City => &self.address.city,
            Field::State => &self.address.state,
            Field::Country => &self.address.country,
            Field::PostalCode => &self.address.postal_code,
            Field::AddressType => &self.address.address_type,
        }
    }

    /// Overwrite a single field, leaving every other field untouched
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Email => &mut self.credentials.email,
            Field::Password => {
                self.credentials.password.zeroize();
                &mut self.credentials.password
            }
            Field::FullName => &mut self.individual.full_name,
            Field::SocialSecurityNumber => &mut self.individual.social_security_number,
            Field::DateOfBirth => &mut self.individual.date_of_birth,
            Field::CompanyName => &mut self.company.company_name,
            Field::TaxIdNumber => &mut self.company.tax_id_number,
            Field::ContactPerson => &mut self.company.contact_person,
            Field::Street => &mut self.address.street,
            Field::Number => &mut self.address.number,
            Field::AdditionalInfo => &mut self.address.additional_info,
            Field::City => &mut self.address.city,
            Field::State => &mut self.address.state,
            Field::Country => &mut self.address.country,
            Field::PostalCode => &mut self.address.postal_code,
            Field::AddressType => &mut self.address.address_type,
        };
        *slot = value.into();
    }

    /// Merge a partial update into the draft
    pub fn apply(&mut self, update: DraftUpdate) {
        if let Some(client_type) = update.client_type {
            self.client_type = client_type;
        }
        for (field, value) in update.values {
            self.set(field, value);
        }
    }
}

/// A partial change produced by one step of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftUpdate {
    pub client_type: Option<ClientType>,
    pub values: Vec<(Field, String)>,
}

impl DraftUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value
    pub fn field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.push((field, value.into()));
        self
    }

    /// Switch the client type
    pub fn client_type(mut self, client_type: ClientType) -> Self {
        self.client_type = Some(client_type);
        self
    }

    /// Fields whose value this update changes
    pub fn touched(&self) -> impl Iterator<Item = Field> + '_ {
        self.values.iter().map(|(field, _)| *field)
    }

    /// Check whether the update changes nothing
    pub fn is_empty(&self) -> bool {
        self.client_type.is_none() && self.values.is_empty()
    }
}
