//! expense-report - Monthly expense report generation
//!
//! This library aggregates a user's recorded transactions for one month
//! into a four-section report (summary, transaction ledger, category
//! breakdown, budget vs actual), encodes it as a spreadsheet and delivers
//! it to the user.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (users, categories, transactions, budgets)
//! - `storage`: JSON file storage layer and report accessors
//! - `reports`: Aggregation engine, document model and assembler
//! - `export`: XLSX and CSV document encoders
//! - `delivery`: Outbound messages and the outbox transport
//! - `services`: Business logic layer
//! - `cli` / `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_report::config::{ReportPaths, Settings};
//! use expense_report::export::ReportFormat;
//! use expense_report::models::{ReportPeriod, UserRef};
//! use expense_report::services::ReportService;
//! use expense_report::storage::Storage;
//!
//! let paths = ReportPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//!
//! let service = ReportService::new(&storage, &settings);
//! let artifact = service.generate(
//!     &UserRef::email("ana@example.com"),
//!     ReportPeriod::new(3, 2024),
//!     ReportFormat::Xlsx,
//! )?;
//! ```

pub mod cli;
pub mod config;
pub mod delivery;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ReportError, ReportResult};
