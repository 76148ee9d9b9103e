//! Aggregation engine
//!
//! Pulls categories, transactions and totals for one user and period from
//! the accessors and derives the report metrics. Only an unresolvable user
//! aborts; every other accessor failure degrades the affected figure to its
//! default and is logged.

use std::collections::HashMap;

use crate::config::settings::{Settings, DEFAULT_LEDGER_LIMIT};
use crate::error::ReportResult;
use crate::models::{
    Category, CategoryId, Money, ReportPeriod, Transaction, TransactionKind, User, UserRef,
};

use super::accessors::ReportSource;
use super::metrics::{AggregateMetrics, CategoryTotal, Fetched, TotalsMode};

/// Tunables for one engine instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub totals_mode: TotalsMode,
    pub ledger_limit: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            totals_mode: TotalsMode::default(),
            ledger_limit: DEFAULT_LEDGER_LIMIT,
        }
    }
}

impl From<&Settings> for EngineOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            totals_mode: settings.totals_mode,
            ledger_limit: settings.ledger_limit,
        }
    }
}

/// Everything the assembler needs for one report
#[derive(Debug, Clone)]
pub struct ReportData {
    pub user: User,
    pub period: ReportPeriod,
    /// Enabled categories in catalog order
    pub categories: Fetched<Vec<Category>>,
    /// Every category, enabled or not; only used to label ledger rows
    pub all_categories: Fetched<Vec<Category>>,
    /// Date descending, capped at the ledger limit
    pub ledger: Fetched<Vec<Transaction>>,
    pub metrics: AggregateMetrics,
    /// Budget lookups for the enabled expense categories
    pub budgets: HashMap<CategoryId, Fetched<Option<Money>>>,
}

impl ReportData {
    /// Name and type source for a ledger row
    ///
    /// Looks in the full catalog first so disabled categories keep their
    /// labels, then in the enabled list when the full catalog is missing.
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.all_categories
            .value()
            .iter()
            .chain(self.categories.value())
            .find(|c| c.id == id)
    }

    pub fn budget(&self, id: CategoryId) -> Option<&Fetched<Option<Money>>> {
        self.budgets.get(&id)
    }

    /// Every figure or list that fell back to a default
    pub fn degraded(&self) -> Vec<String> {
        let mut degraded = Vec::new();
        if self.categories.is_defaulted() {
            degraded.push("category catalog".to_string());
        }
        if self.all_categories.is_defaulted() {
            degraded.push("category labels".to_string());
        }
        if self.ledger.is_defaulted() {
            degraded.push("transaction ledger".to_string());
        }
        degraded.extend(self.metrics.degraded());
        for category in self.categories.value() {
            if self.budgets.get(&category.id).is_some_and(Fetched::is_defaulted) {
                degraded.push(format!("budget: {}", category.name));
            }
        }
        degraded
    }
}

/// Computes report metrics from a [`ReportSource`]
pub struct AggregationEngine<'a, S: ?Sized> {
    source: &'a S,
    options: EngineOptions,
}

impl<'a, S: ReportSource + ?Sized> AggregationEngine<'a, S> {
    pub fn new(source: &'a S, options: EngineOptions) -> Self {
        Self { source, options }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Configured ledger cap, never above [`DEFAULT_LEDGER_LIMIT`]
    pub fn ledger_limit(&self) -> usize {
        self.options.ledger_limit.min(DEFAULT_LEDGER_LIMIT)
    }

    /// Metrics only, without budget lookups
    pub fn compute_metrics(
        &self,
        user_ref: &UserRef,
        period: ReportPeriod,
    ) -> ReportResult<AggregateMetrics> {
        let user = self.source.resolve_user(user_ref)?;
        let categories = self.fetch_categories();
        let ledger = self.fetch_ledger(&user, period);
        Ok(self.metrics_for(&user, period, categories.value(), ledger.value()))
    }

    /// Metrics plus the raw rows and budgets the assembler needs
    pub fn collect(&self, user_ref: &UserRef, period: ReportPeriod) -> ReportResult<ReportData> {
        let user = self.source.resolve_user(user_ref)?;
        tracing::debug!(user = %user.id, %period, "collecting report data");

        let categories = self.fetch_categories();
        let all_categories = Fetched::or_default(
            self.source.list_all_categories(),
            "category labels",
        );
        let ledger = self.fetch_ledger(&user, period);
        let metrics = self.metrics_for(&user, period, categories.value(), ledger.value());
        let budgets = self.fetch_budgets(&user, period, categories.value());

        Ok(ReportData {
            user,
            period,
            categories,
            all_categories,
            ledger,
            metrics,
            budgets,
        })
    }

    fn fetch_categories(&self) -> Fetched<Vec<Category>> {
        Fetched::or_default(self.source.list_enabled_categories(), "category catalog")
    }

    fn fetch_ledger(&self, user: &User, period: ReportPeriod) -> Fetched<Vec<Transaction>> {
        let limit = self.ledger_limit();
        let mut ledger = Fetched::or_default(
            self.source.list_transactions(user.id, period, limit),
            "transaction ledger",
        );
        // The accessor is trusted for ordering, not for the cap
        match &mut ledger {
            Fetched::Computed(rows) | Fetched::Defaulted { value: rows, .. } => {
                rows.truncate(limit)
            }
        }
        ledger
    }

    fn fetch_budgets(
        &self,
        user: &User,
        period: ReportPeriod,
        categories: &[Category],
    ) -> HashMap<CategoryId, Fetched<Option<Money>>> {
        categories
            .iter()
            .filter(|c| c.is_expense())
            .map(|c| {
                let budget = Fetched::or_default(
                    self.source.budget_for(user.id, c.id, period),
                    &format!("budget: {}", c.name),
                );
                (c.id, budget)
            })
            .collect()
    }

    fn metrics_for(
        &self,
        user: &User,
        period: ReportPeriod,
        categories: &[Category],
        ledger: &[Transaction],
    ) -> AggregateMetrics {
        let category_totals: Vec<CategoryTotal> = categories
            .iter()
            .map(|c| CategoryTotal {
                category_id: c.id,
                name: c.name.clone(),
                kind: c.kind,
                total: Fetched::or_default(
                    self.source.sum_by_category(user.id, c.id, period),
                    &format!("category total: {}", c.name),
                ),
            })
            .collect();

        let total_income = self.resolve_total(user, period, TransactionKind::Income, &category_totals);
        let total_expense =
            self.resolve_total(user, period, TransactionKind::Expense, &category_totals);
        let transaction_count = Fetched::or_default(
            self.source.count_transactions(user.id, period),
            "transaction count",
        );

        let mut category_counts: HashMap<CategoryId, u64> = HashMap::new();
        for txn in ledger {
            *category_counts.entry(txn.category_id).or_insert(0) += 1;
        }

        let ledger_truncated = *transaction_count.value() > ledger.len() as u64
            && ledger.len() >= self.ledger_limit();
        if ledger_truncated {
            tracing::info!(
                user = %user.id,
                %period,
                limit = self.ledger_limit(),
                total = *transaction_count.value(),
                "transaction ledger truncated"
            );
        }

        AggregateMetrics {
            total_income,
            total_expense,
            transaction_count,
            category_totals,
            category_counts,
            ledger_truncated,
        }
    }

    fn resolve_total(
        &self,
        user: &User,
        period: ReportPeriod,
        kind: TransactionKind,
        category_totals: &[CategoryTotal],
    ) -> Fetched<Money> {
        let direct = || {
            Fetched::or_default(
                self.source.sum_by_type(user.id, kind, period),
                &format!("total {}", kind.label().to_lowercase()),
            )
        };

        match self.options.totals_mode {
            TotalsMode::AggregateOnly => direct(),
            TotalsMode::PerCategoryOnly => sum_of_categories(kind, category_totals),
            TotalsMode::BothSummed => {
                combine(direct(), sum_of_categories(kind, category_totals))
            }
        }
    }
}

/// Sum of per-category totals of one type, defaulted if any part was
fn sum_of_categories(kind: TransactionKind, totals: &[CategoryTotal]) -> Fetched<Money> {
    let matching: Vec<&CategoryTotal> = totals.iter().filter(|c| c.kind == kind).collect();
    let sum: Money = matching.iter().map(|c| *c.total.value()).sum();
    let failed: Vec<&str> = matching
        .iter()
        .filter(|c| c.total.is_defaulted())
        .map(|c| c.name.as_str())
        .collect();

    if failed.is_empty() {
        Fetched::Computed(sum)
    } else {
        Fetched::Defaulted {
            value: sum,
            reason: format!("per-category totals unavailable for {}", failed.join(", ")),
        }
    }
}

fn combine(a: Fetched<Money>, b: Fetched<Money>) -> Fetched<Money> {
    let value = *a.value() + *b.value();
    let reasons: Vec<&str> = [a.reason(), b.reason()].into_iter().flatten().collect();
    if reasons.is_empty() {
        Fetched::Computed(value)
    } else {
        Fetched::Defaulted {
            value,
            reason: reasons.join("; "),
        }
    }
}
