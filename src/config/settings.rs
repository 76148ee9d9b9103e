//! User settings for expense-report
//!
//! Manages report preferences: currency symbol, how income/expense totals
//! are sourced, the ledger row cap, the sender address used for delivery and
//! the default document format.

use serde::{Deserialize, Serialize};

use super::paths::ReportPaths;
use crate::error::ReportError;
use crate::export::ReportFormat;
use crate::reports::TotalsMode;

/// Default cap on rows fetched for the transaction ledger
pub const DEFAULT_LEDGER_LIMIT: usize = 1000;

/// User settings for expense-report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in currency cell formats
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Where total income/expense figures come from
    #[serde(default)]
    pub totals_mode: TotalsMode,

    /// Maximum number of transactions fetched for the ledger
    #[serde(default = "default_ledger_limit")]
    pub ledger_limit: usize,

    /// From address on delivered reports
    #[serde(default = "default_sender")]
    pub sender_address: String,

    /// Document format used when none is requested
    #[serde(default)]
    pub default_format: ReportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_ledger_limit() -> usize {
    DEFAULT_LEDGER_LIMIT
}

fn default_sender() -> String {
    "reports@expense-tracker.local".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            totals_mode: TotalsMode::default(),
            ledger_limit: default_ledger_limit(),
            sender_address: default_sender(),
            default_format: ReportFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ReportPaths) -> Result<Self, ReportError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ReportError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ReportError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReportPaths) -> Result<(), ReportError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ReportError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    fn validate(&self) -> Result<(), ReportError> {
        if self.ledger_limit == 0 {
            return Err(ReportError::Config(
                "ledger_limit must be greater than zero".into(),
            ));
        }
        if self.ledger_limit > DEFAULT_LEDGER_LIMIT {
            return Err(ReportError::Config(format!(
                "ledger_limit must not exceed {}",
                DEFAULT_LEDGER_LIMIT
            )));
        }
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
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.totals_mode, TotalsMode::AggregateOnly);
        assert_eq!(settings.ledger_limit, 1000);
        assert_eq!(settings.default_format, ReportFormat::Xlsx);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.totals_mode = TotalsMode::BothSummed;
        settings.currency_symbol = "$".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.totals_mode, TotalsMode::BothSummed);
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"totals_mode": "per-category-only"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.totals_mode, TotalsMode::PerCategoryOnly);
        assert_eq!(loaded.ledger_limit, DEFAULT_LEDGER_LIMIT);
    }

    #[test]
    fn test_zero_ledger_limit_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"ledger_limit": 0}"#).unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(ReportError::Config(_))
        ));
    }

    #[test]
    fn test_ledger_limit_above_cap_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(paths.settings_file(), r#"{"ledger_limit": 5000}"#).unwrap();
        match Settings::load_or_create(&paths) {
            Err(ReportError::Config(msg)) => assert!(msg.contains("1000")),
            other => panic!("expected config error, got {:?}", other),
        }

        std::fs::write(paths.settings_file(), r#"{"ledger_limit": 1000}"#).unwrap();
        assert_eq!(Settings::load_or_create(&paths).unwrap().ledger_limit, 1000);
    }
}
