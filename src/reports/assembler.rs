//! Report Assembler
//!
//! Lays collected report data out as the four fixed report sections.

use crate::models::{Category, ReportPeriod, TransactionKind};

use super::document::{Cell, ReportDocument, Row, Section};
use super::engine::ReportData;
use super::metrics::{AggregateMetrics, Fetched};

pub const SUMMARY_TITLE: &str = "Monthly Summary";
pub const LEDGER_TITLE: &str = "Transactions";
pub const BREAKDOWN_TITLE: &str = "Category Breakdown";
pub const BUDGET_TITLE: &str = "Budget vs Actual";

/// Section titles in document order
pub const SECTION_TITLES: [&str; 4] = [SUMMARY_TITLE, LEDGER_TITLE, BREAKDOWN_TITLE, BUDGET_TITLE];

/// Shown for ledger rows whose category is not in the catalog
pub const UNKNOWN_CATEGORY: &str = "Uncategorized";

/// Build the report document for collected data
pub fn assemble(data: &ReportData) -> ReportDocument {
    let categories = data.categories.value();

    let sections = vec![
        summary_section(data.period, &data.metrics),
        ledger_section(data),
        breakdown_section(categories, &data.metrics),
        budget_section(data, categories),
    ];

    tracing::debug!(
        user = %data.user.id,
        period = %data.period,
        ledger_rows = data.ledger.value().len(),
        "assembled report document"
    );

    ReportDocument {
        user_email: data.user.email.clone(),
        period: data.period,
        sections,
    }
}

/// Headline figures, then the non-zero categories
pub fn summary_section(period: ReportPeriod, metrics: &AggregateMetrics) -> Section {
    let mut section = Section::new(SUMMARY_TITLE, &["Metric", "Value"]);

    section.push(vec![
        Cell::text("Total Income"),
        Cell::Currency(*metrics.total_income.value()),
    ]);
    section.push(vec![
        Cell::text("Total Expenses"),
        Cell::Currency(*metrics.total_expense.value()),
    ]);
    section.push(vec![
        Cell::text("Net Savings"),
        Cell::Currency(metrics.net_savings()),
    ]);
    section.push(vec![
        Cell::text("Total Transactions"),
        Cell::count(*metrics.transaction_count.value()),
    ]);
    section.push(vec![Cell::text("Month"), Cell::text(period.label())]);

    section.rows.push(Row::separator());
    section.rows.push(Row::sub_header(&["Category", "Amount"]));

    for category in metrics.non_zero_categories() {
        section.push(vec![
            Cell::text(category.name.clone()),
            Cell::Currency(*category.total.value()),
        ]);
    }

    section
}

/// One row per fetched transaction, in accessor order
pub fn ledger_section(data: &ReportData) -> Section {
    let mut section = Section::new(
        LEDGER_TITLE,
        &["Date", "Category", "Type", "Description", "Amount"],
    );

    for txn in data.ledger.value() {
        let (name, kind) = match data.category(txn.category_id) {
            Some(category) => (
                Cell::text(category.name.clone()),
                Cell::text(category.kind.label()),
            ),
            None => (Cell::text(UNKNOWN_CATEGORY), Cell::placeholder()),
        };

        section.push(vec![
            Cell::Date(txn.date),
            name,
            kind,
            Cell::text(txn.description.clone()),
            Cell::Currency(txn.amount),
        ]);
    }

    section
}

/// Every enabled category, including zero totals
pub fn breakdown_section(categories: &[Category], metrics: &AggregateMetrics) -> Section {
    let mut section = Section::new(
        BREAKDOWN_TITLE,
        &["Category", "Type", "Total Amount", "Transaction Count"],
    );

    for category in categories {
        section.push(vec![
            Cell::text(category.name.clone()),
            Cell::text(category.kind.label()),
            Cell::Currency(metrics.category_total(category.id)),
            Cell::count(metrics.category_count(category.id)),
        ]);
    }

    section
}

/// Planned against actual spending per enabled expense category
///
/// Categories without a budget (or whose lookup failed) show the actual
/// total with `N/A` in the budget, difference and utilization columns.
pub fn budget_section(data: &ReportData, categories: &[Category]) -> Section {
    let mut section = Section::new(
        BUDGET_TITLE,
        &["Category", "Budget", "Actual", "Difference", "Utilization %"],
    );

    for category in categories
        .iter()
        .filter(|c| c.kind == TransactionKind::Expense)
    {
        let actual = data.metrics.category_total(category.id);
        let budget = data
            .budget(category.id)
            .and_then(|b| match b {
                Fetched::Computed(value) => *value,
                Fetched::Defaulted { .. } => None,
            });

        let cells = match budget {
            Some(budget) => vec![
                Cell::text(category.name.clone()),
                Cell::Currency(budget),
                Cell::Currency(actual),
                Cell::Currency(budget - actual),
                actual
                    .ratio_of(budget)
                    .map(Cell::Percentage)
                    .unwrap_or_else(Cell::placeholder),
            ],
            None => vec![
                Cell::text(category.name.clone()),
                Cell::placeholder(),
                Cell::Currency(actual),
                Cell::placeholder(),
                Cell::placeholder(),
            ],
        };
        section.push(cells);
    }

    section
}
