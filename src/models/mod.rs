//! Core data models for signup-cli
//!
//! This module contains the data structures of the signup domain: the
//! in-progress draft, the client identity branches, the address, and the
//! request body sent to the server.

pub mod address;
pub mod client;
pub mod draft;
pub mod field;
pub mod request;

pub use address::{AddressDetails, DEFAULT_ADDRESS_TYPE};
pub use client::{ClientType, CompanyDetails, IndividualDetails};
pub use draft::{Credentials, DraftUpdate, SignupDraft};
pub use field::Field;
pub use request::{SignupOutcome, SignupRequest};
