//! Custom error types for signup-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::validation::FieldErrors;
use crate::wizard::Step;

/// Shown when the server rejects a signup without a usable `message`
pub const FALLBACK_ERROR_MESSAGE: &str = "Erro ao realizar o cadastro.";

/// Shown when the signup endpoint cannot be reached at all
pub const CONNECTION_ERROR_MESSAGE: &str = "Ocorreu um erro ao conectar com o servidor.";

/// The main error type for signup-cli operations
#[derive(Error, Debug)]
pub enum SignupError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// One or more form fields failed local validation
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Submission was attempted before the final step was reached
    #[error("Form is incomplete: still on step {}", .0.index())]
    Incomplete(Step),

    /// A submission is already waiting for the server
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// The server answered with a non-2xx status
    #[error("Signup rejected by server ({status}): {}", .message.as_deref().unwrap_or(FALLBACK_ERROR_MESSAGE))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The request never got a response (refused, DNS, reset...)
    #[error("Connection error: {0}")]
    Connection(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl SignupError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the remote endpoint or the transport
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::Connection(_))
    }

    /// The message a user should see for this error
    ///
    /// Server rejections surface the server-provided reason when there is
    /// one; transport failures always map to the generic connectivity text.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message
                .clone()
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
            Self::Connection(_) => CONNECTION_ERROR_MESSAGE.to_string(),
            Self::Validation(errors) => errors.to_string(),
            other => other.to_string(),
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SignupError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SignupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<FieldErrors> for SignupError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Result type alias for signup-cli operations
pub type SignupResult<T> = Result<T, SignupError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    #[test]
    fn test_error_display() {
        let err = SignupError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_rejected_uses_server_message() {
        let err = SignupError::Rejected {
            status: 409,
            message: Some("Email já cadastrado.".into()),
        };
        assert_eq!(err.user_message(), "Email já cadastrado.");
        assert!(err.is_remote());
    }

    #[test]
    fn test_rejected_without_message_falls_back() {
        let err = SignupError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(
            err.to_string(),
            "Signup rejected by server (500): Erro ao realizar o cadastro."
        );
    }

    #[test]
    fn test_connection_error_hides_details() {
        let err = SignupError::Connection("tcp connect error: refused".into());
        assert_eq!(err.user_message(), CONNECTION_ERROR_MESSAGE);
    }

    #[test]
    fn test_incomplete_display() {
        let err = SignupError::Incomplete(Step::ClientDetails);
        assert_eq!(err.to_string(), "Form is incomplete: still on step 2");
    }

    #[test]
    fn test_from_field_errors() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, "O email é obrigatório.");
        let err: SignupError = errors.into();
        assert!(err.is_validation());
        assert!(!err.is_remote());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SignupError = io_err.into();
        assert!(matches!(err, SignupError::Io(_)));
    }
}
