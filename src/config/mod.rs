//! Configuration module for expense-report
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Report settings persistence

pub mod paths;
pub mod settings;

pub use paths::ReportPaths;
pub use settings::Settings;
