//! Read-only collaborators the report engine pulls data from
//!
//! Each accessor call returns a concrete, typed result. The JSON storage
//! layer implements all of them; tests substitute in-memory fakes that can
//! fail on demand.

use crate::error::ReportResult;
use crate::models::{
    Category, CategoryId, Money, ReportPeriod, Transaction, TransactionKind, User, UserId, UserRef,
};

/// Resolves caller-supplied identities to registered users
pub trait UserDirectory {
    /// Fails with [`crate::error::ReportError::UserNotFound`] when the
    /// identity does not resolve.
    fn resolve_user(&self, user: &UserRef) -> ReportResult<User>;
}

/// The shared category catalog
pub trait CategoryCatalog {
    /// Enabled categories, in catalog order
    fn list_enabled_categories(&self) -> ReportResult<Vec<Category>>;

    /// Every category, including disabled ones
    fn list_all_categories(&self) -> ReportResult<Vec<Category>>;
}

/// Per-user transaction queries scoped to one period
pub trait TransactionQuery {
    /// At most `limit` transactions, ordered by date descending
    fn list_transactions(
        &self,
        user: UserId,
        period: ReportPeriod,
        limit: usize,
    ) -> ReportResult<Vec<Transaction>>;

    /// Total of all transactions whose category has the given type
    fn sum_by_type(
        &self,
        user: UserId,
        kind: TransactionKind,
        period: ReportPeriod,
    ) -> ReportResult<Money>;

    /// Total of all transactions filed under one category
    fn sum_by_category(
        &self,
        user: UserId,
        category: CategoryId,
        period: ReportPeriod,
    ) -> ReportResult<Money>;

    /// Number of transactions in the period, unbounded
    fn count_transactions(&self, user: UserId, period: ReportPeriod) -> ReportResult<u64>;
}

/// Planned amounts per category
pub trait BudgetLookup {
    /// `Ok(None)` when no budget was set for that category and period
    fn budget_for(
        &self,
        user: UserId,
        category: CategoryId,
        period: ReportPeriod,
    ) -> ReportResult<Option<Money>>;
}

/// Everything a full report needs, in one bound
pub trait ReportSource: UserDirectory + CategoryCatalog + TransactionQuery + BudgetLookup {}

impl<T> ReportSource for T where T: UserDirectory + CategoryCatalog + TransactionQuery + BudgetLookup
{}
