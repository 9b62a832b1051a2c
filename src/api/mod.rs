//! Remote signup API

pub mod client;

pub use client::SignupClient;
