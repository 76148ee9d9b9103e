//! Export module for expense-report
//!
//! Serializes a [`ReportDocument`] into a downloadable file:
//! - XLSX: one worksheet per section with currency, date and percentage formats
//! - CSV: sections written one after another in a single sheet

pub mod csv;
pub mod xlsx;

pub use self::csv::CsvEncoder;
pub use self::xlsx::XlsxEncoder;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ReportResult;
use crate::reports::ReportDocument;

/// Turns a report document into file bytes
pub trait DocumentEncoder {
    fn encode(&self, document: &ReportDocument) -> ReportResult<Vec<u8>>;

    /// File extension without the leading dot
    fn extension(&self) -> &'static str;

    /// MIME type used for attachments
    fn content_type(&self) -> &'static str;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ReportFormat {
    /// Build the encoder for this format
    pub fn encoder(&self, currency_symbol: &str) -> Box<dyn DocumentEncoder> {
        match self {
            Self::Xlsx => Box::new(XlsxEncoder::new(currency_symbol)),
            Self::Csv => Box::new(CsvEncoder::new(currency_symbol)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xlsx => write!(f, "xlsx"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(Self::Xlsx),
            "csv" => Ok(Self::Csv),
            other => Err(format!("Unknown report format: {}", other)),
        }
    }
}
