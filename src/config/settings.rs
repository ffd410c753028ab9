//! User settings for HourlyBuys
//!
//! Manages display preferences and the price-check service configuration.

use serde::{Deserialize, Serialize};

use super::paths::HourlyBuysPaths;
use crate::error::HourlyBuysError;

/// Configuration for the LLM-backed price check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceCheckSettings {
    /// Whether `calc` runs the price check before computing results
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// OpenAI-compatible chat completions endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name sent with each request
    #[serde(default = "default_model")]
    pub model: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Deviation from market price (percent) above which a price is anomalous
    #[serde(default = "default_threshold_percent")]
    pub threshold_percent: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_true() -> bool {
    true
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_key_env() -> String {
    "HOURLYBUYS_API_KEY".to_string()
}

fn default_threshold_percent() -> u32 {
    50
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for PriceCheckSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            threshold_percent: default_threshold_percent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PriceCheckSettings {
    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

/// User settings for HourlyBuys
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing wages and prices
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Timestamp format for history listings (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Price-check service configuration
    #[serde(default)]
    pub price_check: PriceCheckSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "¥".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            price_check: PriceCheckSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &HourlyBuysPaths) -> Result<Self, HourlyBuysError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                HourlyBuysError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                HourlyBuysError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - `init` decides when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HourlyBuysPaths) -> Result<(), HourlyBuysError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            HourlyBuysError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            HourlyBuysError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "¥");
        assert!(settings.price_check.enabled);
        assert_eq!(settings.price_check.threshold_percent, 50);
        assert_eq!(settings.price_check.api_key_env, "HOURLYBUYS_API_KEY");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HourlyBuysPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.price_check.enabled = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert!(!loaded.price_check.enabled);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HourlyBuysPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(
            paths.settings_file(),
            r#"{"price_check": {"enabled": false}}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.price_check.enabled);
        assert_eq!(loaded.price_check.model, "gpt-4o-mini");
        assert_eq!(loaded.date_format, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HourlyBuysPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, HourlyBuysError::Config(_)));
    }

    #[test]
    fn test_format_amount() {
        let settings = Settings::default();
        assert_eq!(settings.format_amount(50.0), "¥50.00");
    }
}
