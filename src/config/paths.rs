//! Path management for signup-cli
//!
//! ## Path Resolution Order
//!
//! 1. `SIGNUP_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/signup-cli` or `~/.config/signup-cli`
//! 3. Windows: `%APPDATA%\signup-cli`

use std::path::PathBuf;

use crate::error::SignupError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "SIGNUP_CLI_DATA_DIR";

/// Manages all paths used by signup-cli
#[derive(Debug, Clone)]
pub struct SignupPaths {
    /// Base directory for config and logs
    base_dir: PathBuf,
}

impl SignupPaths {
    /// Create a new SignupPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SignupError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SignupPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/signup-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("signup.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SignupError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SignupError::Io(format!("Failed to create base directory: {}", e)))
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SignupError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| SignupError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("signup-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SignupError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SignupError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("signup-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignupPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("signup.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        std::env::set_var(DATA_DIR_ENV, custom_path);
        let paths = SignupPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
        std::env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignupPaths::with_base_dir(temp_dir.path().join("nested").join("dir"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
