//! signup-cli - Terminal client for a multi-step signup form
//!
//! Collects login credentials, client details (natural person or company)
//! and an address over three validated steps, then posts the registration
//! to a remote signup endpoint.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Draft, client, address and request models
//! - `validation`: Per-step field validation
//! - `wizard`: Step model and the form orchestrator shared by every front-end
//! - `api`: HTTP client for the signup endpoint
//! - `logging`: File-backed tracing subscriber
//! - `tui`: Full-screen terminal interface
//! - `prompt`: Line-by-line wizard
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use signup_cli::models::Field;
//! use signup_cli::wizard::SignupForm;
//!
//! let mut form = SignupForm::new();
//! form.set_field(Field::Email, "ana@example.com");
//! form.set_field(Field::Password, "segredo1");
//! assert!(form.next_step());
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod prompt;
pub mod tui;
pub mod validation;
pub mod wizard;

pub use error::{SignupError, SignupResult};
