//! Reports module for expense-report
//!
//! Aggregates a user's transactions for one month and assembles the
//! result into a four-section report document.

pub mod accessors;
pub mod assembler;
pub mod document;
pub mod engine;
pub mod metrics;

pub use accessors::{BudgetLookup, CategoryCatalog, ReportSource, TransactionQuery, UserDirectory};
pub use assembler::{
    assemble, BREAKDOWN_TITLE, BUDGET_TITLE, LEDGER_TITLE, SECTION_TITLES, SUMMARY_TITLE,
};
pub use document::{Cell, ReportDocument, Row, RowKind, Section, PLACEHOLDER};
pub use engine::{AggregationEngine, EngineOptions, ReportData};
pub use metrics::{AggregateMetrics, CategoryTotal, Fetched, TotalsMode};
