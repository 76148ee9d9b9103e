//! Aggregate metrics and the degrade-to-default result type
//!
//! Every figure the engine pulls from an accessor is wrapped in [`Fetched`],
//! so a report can be produced even when some queries fail while still
//! recording which figures were substituted.

use std::collections::HashMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ReportResult;
use crate::models::{CategoryId, Money, TransactionKind};

/// A value that was either computed or replaced by its default
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Computed(T),
    Defaulted { value: T, reason: String },
}

impl<T> Fetched<T> {
    pub fn value(&self) -> &T {
        match self {
            Self::Computed(value) | Self::Defaulted { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Computed(value) | Self::Defaulted { value, .. } => value,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted { .. })
    }

    /// Why the value was defaulted, if it was
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Computed(_) => None,
            Self::Defaulted { reason, .. } => Some(reason),
        }
    }
}

impl<T: Default> Fetched<T> {
    /// Keep a successful accessor result, or log the failure and fall back
    /// to `T::default()`
    pub fn or_default(result: ReportResult<T>, metric: &str) -> Self {
        match result {
            Ok(value) => Self::Computed(value),
            Err(err) => {
                tracing::warn!(metric, error = %err, "accessor failed, substituting default");
                Self::Defaulted {
                    value: T::default(),
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// Where total income and total expense figures are taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TotalsMode {
    /// Direct per-type aggregate queries
    #[default]
    AggregateOnly,
    /// Sum of the per-category totals of matching type
    PerCategoryOnly,
    /// Direct aggregate plus per-category totals (legacy double count)
    BothSummed,
}

/// One enabled category's signed total for the period
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category_id: CategoryId,
    pub name: String,
    pub kind: TransactionKind,
    pub total: Fetched<Money>,
}

/// Figures derived for one user and period
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateMetrics {
    pub total_income: Fetched<Money>,
    pub total_expense: Fetched<Money>,
    pub transaction_count: Fetched<u64>,
    /// Catalog order
    pub category_totals: Vec<CategoryTotal>,
    /// Counted from the fetched ledger, so bounded by the ledger cap
    pub category_counts: HashMap<CategoryId, u64>,
    /// The ledger holds fewer rows than the period has transactions
    pub ledger_truncated: bool,
}

impl AggregateMetrics {
    /// Total income minus total expense
    pub fn net_savings(&self) -> Money {
        *self.total_income.value() - *self.total_expense.value()
    }

    pub fn category_total(&self, id: CategoryId) -> Money {
        self.category_totals
            .iter()
            .find(|c| c.category_id == id)
            .map(|c| *c.total.value())
            .unwrap_or_default()
    }

    pub fn category_total_by_name(&self, name: &str) -> Option<Money> {
        self.category_totals
            .iter()
            .find(|c| c.name == name)
            .map(|c| *c.total.value())
    }

    pub fn category_count(&self, id: CategoryId) -> u64 {
        self.category_counts.get(&id).copied().unwrap_or(0)
    }

    /// Categories with a non-zero total, in catalog order
    pub fn non_zero_categories(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.category_totals
            .iter()
            .filter(|c| !c.total.value().is_zero())
    }

    /// Names of the metrics that fell back to a default
    pub fn degraded(&self) -> Vec<String> {
        let mut degraded = Vec::new();
        if self.total_income.is_defaulted() {
            degraded.push("total income".to_string());
        }
        if self.total_expense.is_defaulted() {
            degraded.push("total expense".to_string());
        }
        if self.transaction_count.is_defaulted() {
            degraded.push("transaction count".to_string());
        }
        degraded.extend(
            self.category_totals
                .iter()
                .filter(|c| c.total.is_defaulted())
                .map(|c| format!("category total: {}", c.name)),
        );
        degraded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;

    fn total(id: u32, name: &str, kind: TransactionKind, units: i64) -> CategoryTotal {
        CategoryTotal {
            category_id: CategoryId::new(id),
            name: name.to_string(),
            kind,
            total: Fetched::Computed(Money::from_units(units)),
        }
    }

    #[test]
    fn test_or_default() {
        let ok: Fetched<Money> = Fetched::or_default(Ok(Money::from_units(5)), "x");
        assert_eq!(ok, Fetched::Computed(Money::from_units(5)));

        let failed: Fetched<Money> =
            Fetched::or_default(Err(ReportError::Storage("offline".into())), "x");
        assert!(failed.is_defaulted());
        assert_eq!(*failed.value(), Money::zero());
        assert_eq!(failed.reason(), Some("Storage error: offline"));
    }

    #[test]
    fn test_net_savings_and_lookups() {
        let metrics = AggregateMetrics {
            total_income: Fetched::Computed(Money::from_units(5000)),
            total_expense: Fetched::Computed(Money::from_units(1200)),
            transaction_count: Fetched::Computed(2),
            category_totals: vec![
                total(1, "Salary", TransactionKind::Income, 5000),
                total(2, "Gym", TransactionKind::Expense, 0),
                total(3, "Rent", TransactionKind::Expense, 1200),
            ],
            category_counts: HashMap::from([(CategoryId::new(1), 1)]),
            ledger_truncated: false,
        };

        assert_eq!(metrics.net_savings(), Money::from_units(3800));
        assert_eq!(metrics.category_total(CategoryId::new(3)), Money::from_units(1200));
        assert_eq!(metrics.category_total(CategoryId::new(99)), Money::zero());
        assert_eq!(metrics.category_total_by_name("Gym"), Some(Money::zero()));
        assert_eq!(metrics.category_count(CategoryId::new(1)), 1);
        assert_eq!(metrics.category_count(CategoryId::new(3)), 0);

        let names: Vec<_> = metrics.non_zero_categories().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Salary", "Rent"]);
        assert!(metrics.degraded().is_empty());
    }

    #[test]
    fn test_totals_mode_serde() {
        let json = serde_json::to_string(&TotalsMode::BothSummed).unwrap();
        assert_eq!(json, "\"both-summed\"");
        let mode: TotalsMode = serde_json::from_str("\"aggregate-only\"").unwrap();
        assert_eq!(mode, TotalsMode::AggregateOnly);
    }
}
