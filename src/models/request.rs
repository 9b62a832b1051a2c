//! Signup request and response bodies

use serde::{Deserialize, Serialize};
use std::fmt;

use super::address::{AddressDetails, DEFAULT_ADDRESS_TYPE};
use super::client::{ClientType, CompanyDetails, IndividualDetails};
use super::draft::SignupDraft;

/// JSON body posted to the signup endpoint
///
/// Exactly one of `individual` / `company` is present, chosen by
/// `client_type`. The other is omitted from the JSON entirely.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub client_type: ClientType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual: Option<IndividualDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyDetails>,
    pub address: AddressDetails,
}

impl SignupRequest {
    /// Compose the request body from a draft
    ///
    /// A blank address type is replaced with `default_address_type`, or
    /// with "comercial" when that is blank too.
    pub fn from_draft(draft: &SignupDraft, default_address_type: &str) -> Self {
        let (individual, company) = match draft.client_type {
            ClientType::Individual => (Some(draft.individual.clone()), None),
            ClientType::Company => (None, Some(draft.company.clone())),
        };

        let mut address = draft.address.clone();
        if address.address_type.trim().is_empty() {
            address.address_type = if default_address_type.trim().is_empty() {
                DEFAULT_ADDRESS_TYPE.to_string()
            } else {
                default_address_type.trim().to_string()
            };
        }

        Self {
            email: draft.credentials.email.clone(),
            password: draft.credentials.password.clone(),
            client_type: draft.client_type,
            individual,
            company,
            address,
        }
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("client_type", &self.client_type)
            .field("individual", &self.individual)
            .field("company", &self.company)
            .field("address", &self.address)
            .finish()
    }
}

/// What came back from a successful signup
#[derive(Debug, Clone, PartialEq)]
pub struct SignupOutcome {
    /// HTTP status code (always 2xx)
    pub status: u16,
    /// Parsed response body
    pub body: serde_json::Value,
}
