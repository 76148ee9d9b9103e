//! Category service
//!
//! Manages the shared category catalog: adding categories and enabling or
//! disabling them for reports.

use crate::error::{ReportError, ReportResult};
use crate::models::{Category, CategoryId, TransactionKind};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a category at the end of the catalog
    pub fn create(&self, name: &str, kind: TransactionKind) -> ReportResult<Category> {
        let name = name.trim();

        if self.storage.categories.get_by_name(name)?.is_some() {
            return Err(ReportError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let category = Category::new(self.storage.categories.next_id()?, name, kind);
        category
            .validate()
            .map_err(|e| ReportError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        Ok(category)
    }

    /// Find a category by ID or name
    pub fn find(&self, identifier: &str) -> ReportResult<Category> {
        let identifier = identifier.trim();

        if let Ok(id) = identifier.parse::<CategoryId>() {
            if let Some(category) = self.storage.categories.get(id)? {
                return Ok(category);
            }
        }

        self.storage
            .categories
            .get_by_name(identifier)?
            .ok_or_else(|| ReportError::category_not_found(identifier))
    }

    /// All categories in catalog order
    pub fn list(&self) -> ReportResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Include or exclude a category from reports
    pub fn set_enabled(&self, identifier: &str, enabled: bool) -> ReportResult<Category> {
        let mut category = self.find(identifier)?;
        category.enabled = enabled;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        Ok(category)
    }
}
