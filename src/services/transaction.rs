//! Transaction service
//!
//! Records transactions for a user and lists them by period.

use chrono::NaiveDate;

use crate::error::{ReportError, ReportResult};
use crate::models::{CategoryId, Money, ReportPeriod, Transaction, UserRef};
use crate::storage::Storage;

use super::category::CategoryService;
use super::user::UserService;

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub user: UserRef,
    pub date: NaiveDate,
    /// Category ID or name
    pub category: String,
    pub amount: Money,
    pub description: Option<String>,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> ReportResult<Transaction> {
        let user = UserService::new(self.storage).find(&input.user)?;
        let category = CategoryService::new(self.storage).find(&input.category)?;

        if input.amount.is_zero() {
            return Err(ReportError::Validation(
                "Transaction amount cannot be zero".into(),
            ));
        }

        let mut txn = Transaction::new(user.id, input.date, category.id, input.amount);
        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        Ok(txn)
    }

    /// A user's transactions in a period, newest first
    pub fn list_for_period(
        &self,
        user: &UserRef,
        period: ReportPeriod,
        category: Option<CategoryId>,
    ) -> ReportResult<Vec<Transaction>> {
        let user = UserService::new(self.storage).find(user)?;
        let transactions = self
            .storage
            .transactions
            .get_for_user_in_period(user.id, period)?;

        Ok(match category {
            Some(id) => transactions
                .into_iter()
                .filter(|t| t.category_id == id)
                .collect(),
            None => transactions,
        })
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
        CategoryService::new(&storage)
            .create("Rent", TransactionKind::Expense)
            .unwrap();

        (temp_dir, storage)
    }

    fn input(day: u32, amount: Money) -> CreateTransactionInput {
        CreateTransactionInput {
            user: UserRef::email("ana@example.com"),
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            category: "Rent".into(),
            amount,
            description: Some(" March rent ".into()),
        }
    }

    #[test]
    fn test_create_and_list() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service.create(input(1, Money::from_units(1200))).unwrap();
        let latest = service.create(input(15, Money::from_units(50))).unwrap();
        assert_eq!(latest.description, "March rent");

        let listed = service
            .list_for_period(&UserRef::email("ana@example.com"), ReportPeriod::new(3, 2024), None)
            .unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, latest.id);

        let april = service
            .list_for_period(&UserRef::email("ana@example.com"), ReportPeriod::new(4, 2024), None)
            .unwrap();
        assert!(april.is_empty());
    }

    #[test]
    fn test_create_validates_references() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut bad_category = input(1, Money::from_units(10));
        bad_category.category = "Travel".into();
        assert!(service.create(bad_category).unwrap_err().is_not_found());

        let mut bad_user = input(1, Money::from_units(10));
        bad_user.user = UserRef::email("bob@example.com");
        assert!(service.create(bad_user).unwrap_err().is_user_not_found());

        assert!(matches!(
            service.create(input(1, Money::zero())),
            Err(ReportError::Validation(_))
        ));
    }
}
