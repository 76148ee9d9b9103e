//! Budget allocation repository for JSON storage
//!
//! Manages loading and saving per-category budget figures to budgets.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ReportError;
use crate::models::{BudgetAllocation, CategoryId, ReportPeriod, UserId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    allocations: Vec<BudgetAllocation>,
}

/// Composite key for budget allocations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AllocationKey {
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub period: ReportPeriod,
}

impl AllocationKey {
    pub fn new(user_id: UserId, category_id: CategoryId, period: ReportPeriod) -> Self {
        Self {
            user_id,
            category_id,
            period,
        }
    }

    fn of(alloc: &BudgetAllocation) -> Self {
        Self::new(alloc.user_id, alloc.category_id, alloc.period)
    }
}

/// Repository for budget allocation persistence
pub struct BudgetRepository {
    path: PathBuf,
    allocations: RwLock<HashMap<AllocationKey, BudgetAllocation>>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            allocations: RwLock::new(HashMap::new()),
        }
    }

    /// Load allocations from disk
    pub fn load(&self) -> Result<(), ReportError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut allocations = self
            .allocations
            .write()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        allocations.clear();
        for alloc in file_data.allocations {
            allocations.insert(AllocationKey::of(&alloc), alloc);
        }

        Ok(())
    }

    /// Save allocations to disk
    pub fn save(&self) -> Result<(), ReportError> {
        let allocations = self
            .allocations
            .read()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut alloc_list: Vec<_> = allocations.values().cloned().collect();
        alloc_list.sort_by(|a, b| {
            a.period
                .cmp(&b.period)
                .then(a.user_id.cmp(&b.user_id))
                .then(a.category_id.cmp(&b.category_id))
        });

        write_json_atomic(
            &self.path,
            &BudgetData {
                allocations: alloc_list,
            },
        )
    }

    /// Get an allocation for a user, category and period
    pub fn get(&self, key: AllocationKey) -> Result<Option<BudgetAllocation>, ReportError> {
        let allocations = self
            .allocations
            .read()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(allocations.get(&key).cloned())
    }

    /// Insert or replace an allocation
    pub fn upsert(&self, alloc: BudgetAllocation) -> Result<(), ReportError> {
        let mut allocations = self
            .allocations
            .write()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        allocations.insert(AllocationKey::of(&alloc), alloc);
        Ok(())
    }
}
