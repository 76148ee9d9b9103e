//! Service layer for expense-report
//!
//! The service layer provides business logic on top of the storage layer:
//! validation and cross-entity lookups for data entry, and the report
//! operations that drive the engine, encoders and delivery.

pub mod budget;
pub mod category;
pub mod report;
pub mod transaction;
pub mod user;

pub use budget::BudgetService;
pub use category::CategoryService;
pub use report::{OperationOutcome, ReportArtifact, ReportService};
pub use transaction::{CreateTransactionInput, TransactionService};
pub use user::UserService;
