//! Category repository for JSON storage
//!
//! Manages loading and saving the category catalog to categories.json.
//! Catalog order is ascending category id.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ReportError;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    pub categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<BTreeMap<CategoryId, Category>>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), ReportError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut categories = self
            .categories
            .write()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.clear();
        for category in file_data.categories {
            categories.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), ReportError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = CategoryData {
            categories: categories.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, ReportError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.get(&id).cloned())
    }

    /// Find a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, ReportError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories
            .values()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
            .cloned())
    }

    /// All categories in catalog order, enabled or not
    pub fn get_all(&self) -> Result<Vec<Category>, ReportError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.values().cloned().collect())
    }

    /// Enabled categories in catalog order
    pub fn get_enabled(&self) -> Result<Vec<Category>, ReportError> {
        Ok(self.get_all()?.into_iter().filter(|c| c.enabled).collect())
    }

    pub fn next_id(&self) -> Result<CategoryId, ReportError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories
            .keys()
            .next_back()
            .map(|id| id.next())
            .unwrap_or(CategoryId::new(1)))
    }

    /// Insert or update a category
    pub fn upsert(&self, category: Category) -> Result<(), ReportError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        categories.insert(category.id, category);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use tempfile::TempDir;

    #[test]
    fn test_enabled_in_catalog_order() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp_dir.path().join("categories.json"));

        repo.upsert(Category::new(CategoryId::new(3), "Rent", TransactionKind::Expense))
            .unwrap();
        repo.upsert(Category::new(CategoryId::new(1), "Salary", TransactionKind::Income))
            .unwrap();
        let mut hidden = Category::new(CategoryId::new(2), "Old", TransactionKind::Expense);
        hidden.enabled = false;
        repo.upsert(hidden).unwrap();

        let names: Vec<_> = repo
            .get_enabled()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Salary", "Rent"]);
        assert_eq!(repo.next_id().unwrap(), CategoryId::new(4));
    }

    #[test]
    fn test_find_by_name_and_persist() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");

        let repo = CategoryRepository::new(path.clone());
        repo.upsert(Category::new(CategoryId::new(1), "Groceries", TransactionKind::Expense))
            .unwrap();
        repo.save().unwrap();

        let reloaded = CategoryRepository::new(path);
        reloaded.load().unwrap();
        let found = reloaded.get_by_name("groceries").unwrap().unwrap();
        assert_eq!(found.id, CategoryId::new(1));
    }
}
