//! Address model

use serde::{Deserialize, Serialize};

use super::field::Field;

/// Address type sent when the user leaves it blank
pub const DEFAULT_ADDRESS_TYPE: &str = "comercial";

/// Postal address of the new client
///
/// Serialized keys follow the signup endpoint exactly, which mixes
/// camelCase (`additionalInfo`, `postalCode`) with snake_case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDetails {
    pub street: String,
    pub number: String,
    #[serde(rename = "additionalInfo", default)]
    pub additional_info: String,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    #[serde(default = "default_address_type")]
    pub address_type: String,
}

fn default_address_type() -> String {
    DEFAULT_ADDRESS_TYPE.to_string()
}

impl Default for AddressDetails {
    fn default() -> Self {
        Self {
            street: String::new(),
            number: String::new(),
            additional_info: String::new(),
            city: String::new(),
            state: String::new(),
            country: String::new(),
            postal_code: String::new(),
            address_type: default_address_type(),
        }
    }
}

impl AddressDetails {
    /// Fields in display order
    pub const FIELDS: [Field; 8] = [
        Field::Street,
        Field::Number,
        Field::AdditionalInfo,
        Field::City,
        Field::State,
        Field::Country,
        Field::PostalCode,
        Field::AddressType,
    ];

    /// Fields that must be filled in
    pub const REQUIRED: [Field; 6] = [
        Field::Street,
        Field::Number,
        Field::City,
        Field::State,
        Field::Country,
        Field::PostalCode,
    ];
}
