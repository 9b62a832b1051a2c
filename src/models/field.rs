//! Form field identifiers
//!
//! Every input the signup form collects, with the key it is sent under and
//! the label shown next to it.

use std::fmt;

use crate::wizard::Step;

/// A single input of the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    FullName,
    SocialSecurityNumber,
    DateOfBirth,
    CompanyName,
    TaxIdNumber,
    ContactPerson,
    Street,
    Number,
    AdditionalInfo,
    City,
    State,
    Country,
    PostalCode,
    AddressType,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 16] = [
        Field::Email,
        Field::Password,
        Field::FullName,
        Field::SocialSecurityNumber,
        Field::DateOfBirth,
        Field::CompanyName,
        Field::TaxIdNumber,
        Field::ContactPerson,
        Field::Street,
        Field::Number,
        Field::AdditionalInfo,
        Field::City,
        Field::State,
        Field::Country,
        Field::PostalCode,
        Field::AddressType,
    ];

    /// Key used for this field in the request body
    pub fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::FullName => "full_name",
            Self::SocialSecurityNumber => "social_security_number",
            Self::DateOfBirth => "date_of_birth",
            Self::CompanyName => "company_name",
            Self::TaxIdNumber => "tax_id_number",
            Self::ContactPerson => "contact_person",
            Self::Street => "street",
            Self::Number => "number",
            Self::AdditionalInfo => "additionalInfo",
            Self::City => "city",
            Self::State => "state",
            Self::Country => "country",
            Self::PostalCode => "postalCode",
            Self::AddressType => "address_type",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Senha",
            Self::FullName => "Nome Completo",
            Self::SocialSecurityNumber => "CPF",
            Self::DateOfBirth => "Data de Nascimento",
            Self::CompanyName => "Nome da Empresa",
            Self::TaxIdNumber => "CNPJ",
            Self::ContactPerson => "Pessoa de Contato",
            Self::Street => "Rua",
            Self::Number => "Número",
            Self::AdditionalInfo => "Complemento",
            Self::City => "Cidade",
            Self::State => "Estado",
            Self::Country => "País",
            Self::PostalCode => "CEP",
            Self::AddressType => "Tipo de Endereço",
        }
    }

    /// The step that collects this field
    pub fn step(self) -> Step {
        match self {
            Self::Email | Self::Password => Step::Credentials,
            Self::FullName
            | Self::SocialSecurityNumber
            | Self::DateOfBirth
            | Self::CompanyName
            | Self::TaxIdNumber
            | Self::ContactPerson => Step::ClientDetails,
            _ => Step::Address,
        }
    }

    /// Whether the field may be left blank
    pub fn is_optional(self) -> bool {
        matches!(self, Self::AdditionalInfo | Self::AddressType)
    }

    /// Whether the field holds a secret that must not be echoed
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
