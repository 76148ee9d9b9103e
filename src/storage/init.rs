//! Storage initialization
//!
//! Handles first-run setup and the default category catalog

use crate::config::paths::ReportPaths;
use crate::error::ReportError;
use crate::models::{Category, CategoryId, TransactionKind};

use super::categories::CategoryData;
use super::file_io::write_json_atomic;

const DEFAULT_CATEGORIES: &[(&str, TransactionKind)] = &[
    ("Salary", TransactionKind::Income),
    ("Freelance", TransactionKind::Income),
    ("Groceries", TransactionKind::Expense),
    ("Rent", TransactionKind::Expense),
    ("Utilities", TransactionKind::Expense),
    ("Transportation", TransactionKind::Expense),
    ("Dining Out", TransactionKind::Expense),
    ("Entertainment", TransactionKind::Expense),
];

/// Initialize storage for a fresh installation
///
/// Returns `true` when the default catalog was written.
pub fn initialize_storage(paths: &ReportPaths) -> Result<bool, ReportError> {
    paths.ensure_directories()?;

    if paths.categories_file().exists() {
        return Ok(false);
    }

    let categories = DEFAULT_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, (name, kind))| Category::new(CategoryId::new(i as u32 + 1), *name, *kind))
        .collect();

    write_json_atomic(paths.categories_file(), &CategoryData { categories })?;
    Ok(true)
}

/// Names of the categories created by [`initialize_storage`]
pub fn default_category_names() -> impl Iterator<Item = &'static str> {
    DEFAULT_CATEGORIES.iter().map(|(name, _)| *name)
}
