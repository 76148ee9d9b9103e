//! Report accessors backed by the JSON repositories

use std::collections::HashMap;

use crate::error::{ReportError, ReportResult};
use crate::models::{
    Category, CategoryId, Money, ReportPeriod, Transaction, TransactionKind, User, UserId, UserRef,
};
use crate::reports::accessors::{BudgetLookup, CategoryCatalog, TransactionQuery, UserDirectory};

use super::budget::AllocationKey;
use super::Storage;

impl UserDirectory for Storage {
    fn resolve_user(&self, user: &UserRef) -> ReportResult<User> {
        let found = match user {
            UserRef::Id(id) => self.users.get(*id)?,
            UserRef::Email(email) => self.users.get_by_email(email)?,
        };
        found.ok_or_else(|| ReportError::user_not_found(user.to_string()))
    }
}

impl CategoryCatalog for Storage {
    fn list_enabled_categories(&self) -> ReportResult<Vec<Category>> {
        self.categories.get_enabled()
    }

    fn list_all_categories(&self) -> ReportResult<Vec<Category>> {
        self.categories.get_all()
    }
}

impl TransactionQuery for Storage {
    fn list_transactions(
        &self,
        user: UserId,
        period: ReportPeriod,
        limit: usize,
    ) -> ReportResult<Vec<Transaction>> {
        let mut transactions = self.transactions.get_for_user_in_period(user, period)?;
        transactions.truncate(limit);
        Ok(transactions)
    }

    fn sum_by_type(
        &self,
        user: UserId,
        kind: TransactionKind,
        period: ReportPeriod,
    ) -> ReportResult<Money> {
        let kinds: HashMap<CategoryId, TransactionKind> = self
            .categories
            .get_all()?
            .into_iter()
            .map(|c| (c.id, c.kind))
            .collect();

        Ok(self
            .transactions
            .get_for_user_in_period(user, period)?
            .iter()
            .filter(|txn| kinds.get(&txn.category_id) == Some(&kind))
            .map(|txn| txn.amount)
            .sum())
    }

    fn sum_by_category(
        &self,
        user: UserId,
        category: CategoryId,
        period: ReportPeriod,
    ) -> ReportResult<Money> {
        self.transactions.sum_for_category(user, category, period)
    }

    fn count_transactions(&self, user: UserId, period: ReportPeriod) -> ReportResult<u64> {
        Ok(self.transactions.get_for_user_in_period(user, period)?.len() as u64)
    }
}

impl BudgetLookup for Storage {
    fn budget_for(
        &self,
        user: UserId,
        category: CategoryId,
        period: ReportPeriod,
    ) -> ReportResult<Option<Money>> {
        Ok(self
            .budget
            .get(AllocationKey::new(user, category, period))?
            .map(|alloc| alloc.budgeted))
    }
}
