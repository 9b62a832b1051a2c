//! HTTP client for the signup endpoint

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::{SignupError, SignupResult};
use crate::models::{SignupOutcome, SignupRequest};

/// Sends signup requests
///
/// One `POST` per call. No retry and no timeout.
#[derive(Debug, Clone)]
pub struct SignupClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SignupClient {
    /// Create a client posting to `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a client for the endpoint configured in `settings`
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.signup_url())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post the signup request
    ///
    /// - 2xx with a JSON body: `Ok`
    /// - other status with a JSON body: `SignupError::Rejected`, carrying
    ///   the body's `message` when it is a non-empty string
    /// - no response at all, or a body that is not JSON:
    ///   `SignupError::Connection`
    pub async fn submit(&self, request: &SignupRequest) -> SignupResult<SignupOutcome> {
        debug!(endpoint = %self.endpoint, "Sending signup request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "Signup request failed");
                SignupError::Connection(e.to_string())
            })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| SignupError::Connection(e.to_string()))?;

        let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
            warn!(status = status.as_u16(), error = %e, "Signup response is not JSON");
            SignupError::Connection(format!("invalid response body ({}): {}", status, e))
        })?;

        if status.is_success() {
            info!(status = status.as_u16(), "Signup endpoint accepted request");
            return Ok(SignupOutcome {
                status: status.as_u16(),
                body,
            });
        }

        let message = server_message(&body);
        warn!(
            status = status.as_u16(),
            has_message = message.is_some(),
            "Signup endpoint rejected request"
        );
        Err(rejected(status, message))
    }
}

fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}

fn rejected(status: StatusCode, message: Option<String>) -> SignupError {
    SignupError::Rejected {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_message_extraction() {
        assert_eq!(
            server_message(&json!({ "message": "Email em uso" })),
            Some("Email em uso".to_string())
        );
        assert_eq!(server_message(&json!({ "message": "" })), None);
        assert_eq!(server_message(&json!({ "message": 42 })), None);
        assert_eq!(server_message(&json!({ "error": "x" })), None);
        assert_eq!(server_message(&json!(["message"])), None);
    }

    #[test]
    fn test_from_settings() {
        let client = SignupClient::from_settings(&Settings::default());
        assert_eq!(client.endpoint(), "http://localhost:8000/auth/signup");
    }
}
