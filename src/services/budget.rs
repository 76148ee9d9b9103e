//! Budget service
//!
//! Sets planned amounts per expense category and period. These feed the
//! Budget vs Actual report section.

use crate::error::{ReportError, ReportResult};
use crate::models::{BudgetAllocation, Money, ReportPeriod, UserRef};
use crate::storage::{AllocationKey, Storage};

use super::category::CategoryService;
use super::user::UserService;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set (or replace) the budget for one expense category and period
    pub fn set_budget(
        &self,
        user: &UserRef,
        category: &str,
        period: ReportPeriod,
        amount: Money,
    ) -> ReportResult<BudgetAllocation> {
        let user = UserService::new(self.storage).find(user)?;
        let category = CategoryService::new(self.storage).find(category)?;

        if !category.is_expense() {
            return Err(ReportError::Validation(format!(
                "Budgets can only be set for expense categories, '{}' is {}",
                category.name, category.kind
            )));
        }

        let key = AllocationKey::new(user.id, category.id, period);
        let alloc = match self.storage.budget.get(key)? {
            Some(mut existing) => {
                existing.set_budgeted(amount);
                existing
            }
            None => BudgetAllocation::new(user.id, category.id, period, amount),
        };

        alloc
            .validate()
            .map_err(|e| ReportError::Validation(e.to_string()))?;

        self.storage.budget.upsert(alloc.clone())?;
        self.storage.budget.save()?;

        Ok(alloc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportPaths;
    use crate::models::TransactionKind;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        UserService::new(&storage)
            .create("ana@example.com", None)
            .unwrap();
        let categories = CategoryService::new(&storage);
        categories.create("Rent", TransactionKind::Expense).unwrap();
        categories.create("Salary", TransactionKind::Income).unwrap();

        (temp_dir, storage)
    }

    #[test]
    fn test_set_budget_replaces_existing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let user = UserRef::email("ana@example.com");
        let period = ReportPeriod::new(3, 2024);

        service
            .set_budget(&user, "Rent", period, Money::from_units(1000))
            .unwrap();
        let updated = service
            .set_budget(&user, "Rent", period, Money::from_units(1500))
            .unwrap();
        assert_eq!(updated.budgeted, Money::from_units(1500));

        let stored = storage
            .budget
            .get(AllocationKey::new(updated.user_id, updated.category_id, period))
            .unwrap()
            .unwrap();
        assert_eq!(stored.budgeted, Money::from_units(1500));
    }

    #[test]
    fn test_set_budget_rejects_income_and_negative() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let user = UserRef::email("ana@example.com");
        let period = ReportPeriod::new(3, 2024);

        assert!(matches!(
            service.set_budget(&user, "Salary", period, Money::from_units(10)),
            Err(ReportError::Validation(_))
        ));
        assert!(matches!(
            service.set_budget(&user, "Rent", period, Money::from_units(-10)),
            Err(ReportError::Validation(_))
        ));
    }
}
