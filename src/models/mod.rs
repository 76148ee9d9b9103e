//! Core data models for expense-report
//!
//! This module contains the records the report is built from: users,
//! categories, transactions and budget allocations, plus the money and
//! period value types.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;
pub mod user;

pub use budget::BudgetAllocation;
pub use category::{Category, TransactionKind};
pub use ids::{CategoryId, TransactionId, UserId};
pub use money::Money;
pub use period::ReportPeriod;
pub use transaction::Transaction;
pub use user::{User, UserRef};
