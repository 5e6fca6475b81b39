//! User settings for iexpense
//!
//! Settings live in `config.json` next to the data directory. Every field has
//! a serde default so older or hand-written files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::storage::file_io::{read_json, write_json_atomic};
use crate::store::DEFAULT_SLOT_KEY;

/// User settings for iexpense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency code pre-filled in the add form
    #[serde(default = "default_currency_code")]
    pub default_currency_code: String,

    /// Whether mutations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Name of the persistence slot holding the expense list
    #[serde(default = "default_slot_key")]
    pub slot_key: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_code() -> String {
    "USD".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency_code: default_currency_code(),
            audit_enabled: default_audit_enabled(),
            slot_key: default_slot_key(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    ///
    /// Nothing is written; `init` calls [`Settings::save`] to persist them.
    pub fn load(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        read_json(paths.settings_file())
            .map_err(|e| ExpenseError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_currency_code, "USD");
        assert!(settings.audit_enabled);
        assert_eq!(settings.slot_key, "Items");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            default_currency_code: "EUR".into(),
            audit_enabled: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load(&paths).unwrap();
        assert_eq!(loaded.default_currency_code, "EUR");
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"default_currency_code": "GBP"}"#).unwrap();

        let loaded = Settings::load(&paths).unwrap();
        assert_eq!(loaded.default_currency_code, "GBP");
        assert!(loaded.audit_enabled);
        assert_eq!(loaded.slot_key, "Items");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ nope").unwrap();

        let err = Settings::load(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }
}
