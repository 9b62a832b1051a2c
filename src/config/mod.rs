//! Configuration module for signup-cli
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SignupPaths;
pub use settings::Settings;
