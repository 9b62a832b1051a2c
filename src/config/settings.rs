//! User settings for signup-cli
//!
//! Where the signup endpoint lives, how verbose the log is, and which
//! address type to send when the user leaves it blank.

use serde::{Deserialize, Serialize};

use super::paths::SignupPaths;
use crate::error::SignupError;
use crate::models::DEFAULT_ADDRESS_TYPE;

/// User settings for signup-cli
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Scheme, host and port of the API (no trailing path)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Path of the signup endpoint on the API
    #[serde(default = "default_signup_path")]
    pub signup_path: String,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Address type sent when the field is left blank
    #[serde(default = "default_address_type")]
    pub default_address_type: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_signup_path() -> String {
    "/auth/signup".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_address_type() -> String {
    DEFAULT_ADDRESS_TYPE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            signup_path: default_signup_path(),
            log_level: default_log_level(),
            default_address_type: default_address_type(),
        }
    }
}

impl Settings {
    /// Full URL of the signup endpoint
    pub fn signup_url(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        let path = self.signup_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Replace the API base URL (from a flag or environment variable)
    pub fn with_api_base_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        self
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SignupPaths) -> Result<Self, SignupError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SignupError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SignupError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SignupPaths) -> Result<(), SignupError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SignupError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            SignupError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.signup_url(), "http://localhost:8000/auth/signup");
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.default_address_type, "comercial");
    }

    #[test]
    fn test_signup_url_joins_slashes() {
        let settings = Settings {
            api_base_url: "https://api.example.com/".into(),
            signup_path: "auth/signup".into(),
            ..Settings::default()
        };
        assert_eq!(settings.signup_url(), "https://api.example.com/auth/signup");
    }

    #[test]
    fn test_api_url_override() {
        let settings = Settings::default().with_api_base_url(Some("http://10.0.0.5:9000".into()));
        assert_eq!(settings.signup_url(), "http://10.0.0.5:9000/auth/signup");

        let settings = Settings::default().with_api_base_url(Some("  ".into()));
        assert_eq!(settings.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignupPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            api_base_url: "http://staging:8000".into(),
            log_level: "debug".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignupPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"api_base_url":"http://x:1"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.api_base_url, "http://x:1");
        assert_eq!(loaded.signup_path, "/auth/signup");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignupPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SignupError::Config(_)));
    }
}
