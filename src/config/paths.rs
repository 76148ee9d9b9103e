//! Path management for expense-report
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_REPORT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/expense-report` or `~/.config/expense-report`
//! 3. Windows: `%APPDATA%\expense-report`

use std::path::PathBuf;

use crate::error::ReportError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_REPORT_DATA_DIR";

/// Manages all paths used by expense-report
#[derive(Debug, Clone)]
pub struct ReportPaths {
    base_dir: PathBuf,
}

impl ReportPaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, ReportError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ReportPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Directory the outbox dispatcher writes messages into
    pub fn outbox_dir(&self) -> PathBuf {
        self.base_dir.join("outbox")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ReportError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ReportError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ReportError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the data directory has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
fn resolve_default_path() -> Result<PathBuf, ReportError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() && !cfg!(windows) {
            return Ok(PathBuf::from(xdg).join("expense-report"));
        }
    }

    directories::BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("expense-report"))
        .ok_or_else(|| ReportError::Config("Could not determine configuration directory".into()))
}
