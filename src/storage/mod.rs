//! Storage layer for expense-report
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The [`Storage`] coordinator also implements the report
//! accessors (see `queries`).

pub mod budget;
pub mod categories;
pub mod file_io;
pub mod init;
mod queries;
pub mod transactions;
pub mod users;

pub use budget::{AllocationKey, BudgetRepository};
pub use categories::CategoryRepository;
pub use file_io::{read_json, write_bytes_atomic, write_json_atomic};
pub use init::initialize_storage;
pub use transactions::TransactionRepository;
pub use users::UserRepository;

use crate::config::paths::ReportPaths;
use crate::error::ReportError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: ReportPaths,
    pub users: UserRepository,
    pub categories: CategoryRepository,
    pub transactions: TransactionRepository,
    pub budget: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ReportPaths) -> Result<Self, ReportError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            budget: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &ReportPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ReportError> {
        self.users.load()?;
        self.categories.load()?;
        self.transactions.load()?;
        self.budget.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), ReportError> {
        self.users.save()?;
        self.categories.save()?;
        self.transactions.save()?;
        self.budget.save()?;
        Ok(())
    }
}
