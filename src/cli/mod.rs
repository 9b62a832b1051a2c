//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the signup form and API client.

pub mod config;
pub mod prompt;
pub mod submit;

pub use config::handle_config_command;
pub use prompt::handle_prompt_command;
pub use submit::{handle_submit_command, SubmitArgs};
