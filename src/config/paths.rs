//! Path management for HourlyBuys
//!
//! Resolves where configuration, data files and the audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. `HOURLYBUYS_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories::ProjectDirs`
//!    (`~/.config/hourlybuys` on Linux, `~/Library/Application Support/...`
//!    on macOS, `%APPDATA%\...` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::HourlyBuysError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "HOURLYBUYS_DATA_DIR";

/// Manages all paths used by HourlyBuys
#[derive(Debug, Clone)]
pub struct HourlyBuysPaths {
    /// Base directory for all HourlyBuys data
    base_dir: PathBuf,
}

impl HourlyBuysPaths {
    /// Create a new HourlyBuysPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, HourlyBuysError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create HourlyBuysPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to products.json
    pub fn products_file(&self) -> PathBuf {
        self.data_dir().join("products.json")
    }

    /// Get the path to session.json (wage and location)
    pub fn session_file(&self) -> PathBuf {
        self.data_dir().join("session.json")
    }

    /// Get the path to history.json
    pub fn history_file(&self) -> PathBuf {
        self.data_dir().join("history.json")
    }

    /// Get the path to profile.json
    pub fn profile_file(&self) -> PathBuf {
        self.data_dir().join("profile.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), HourlyBuysError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            HourlyBuysError::Io(format!("Failed to create base directory: {}", e))
        })?;

        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            HourlyBuysError::Io(format!("Failed to create data directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if HourlyBuys has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, HourlyBuysError> {
    ProjectDirs::from("", "", "hourlybuys")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| HourlyBuysError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HourlyBuysPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = HourlyBuysPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HourlyBuysPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HourlyBuysPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.history_file(),
            temp_dir.path().join("data").join("history.json")
        );
        assert_eq!(
            paths.products_file(),
            temp_dir.path().join("data").join("products.json")
        );
    }
}
