//! Client identity models
//!
//! A signup is either for a natural person or for a company; each kind
//! carries its own identity fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::field::Field;

/// Which kind of client is signing up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    /// Natural person (Pessoa Física)
    #[default]
    Individual,
    /// Legal entity (Pessoa Jurídica)
    Company,
}

impl ClientType {
    /// Parse client type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "individual" | "pf" | "person" => Some(Self::Individual),
            "company" | "pj" | "business" => Some(Self::Company),
            _ => None,
        }
    }

    /// Wire value sent as `client_type`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Company => "company",
        }
    }

    /// Label shown on the selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Individual => "Pessoa Física",
            Self::Company => "Pessoa Jurídica",
        }
    }

    /// The other client type
    pub fn toggle(self) -> Self {
        match self {
            Self::Individual => Self::Company,
            Self::Company => Self::Individual,
        }
    }

    /// Identity fields collected for this client type
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Self::Individual => &IndividualDetails::FIELDS,
            Self::Company => &CompanyDetails::FIELDS,
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown client type '{}' (expected individual or company)", s))
    }
}

/// Identity of a natural person
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualDetails {
    pub full_name: String,
    /// CPF
    pub social_security_number: String,
    pub date_of_birth: String,
}

impl IndividualDetails {
    pub const FIELDS: [Field; 3] = [
        Field::FullName,
        Field::SocialSecurityNumber,
        Field::DateOfBirth,
    ];
}

/// Identity of a company
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDetails {
    pub company_name: String,
    /// CNPJ
    pub tax_id_number: String,
    pub contact_person: String,
}

impl CompanyDetails {
    pub const FIELDS: [Field; 3] = [Field::CompanyName, Field::TaxIdNumber, Field::ContactPerson];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_client_type() {
        assert_eq!(ClientType::parse("individual"), Some(ClientType::Individual));
        assert_eq!(ClientType::parse(" Company "), Some(ClientType::Company));
        assert_eq!(ClientType::parse("pj"), Some(ClientType::Company));
        assert_eq!(ClientType::parse("alien"), None);
        assert!("alien".parse::<ClientType>().is_err());
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&ClientType::Company).unwrap();
        assert_eq!(json, "\"company\"");
    }

    #[test]
    fn test_toggle() {
        assert_eq!(ClientType::Individual.toggle(), ClientType::Company);
        assert_eq!(ClientType::Company.toggle(), ClientType::Individual);
    }
}
