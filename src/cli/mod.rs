//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod category;
pub mod report;
pub mod transaction;
pub mod user;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use user::{handle_user_command, UserCommands};

use clap::Args;

use crate::models::ReportPeriod;

/// `--month` / `--year` selection, defaulting to the current month
#[derive(Args, Debug, Clone, Default)]
pub struct PeriodArgs {
    /// Month number (1-12)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Four-digit year
    #[arg(short, long)]
    pub year: Option<i32>,
}

impl PeriodArgs {
    pub fn period(&self) -> ReportPeriod {
        let current = ReportPeriod::current_month();
        ReportPeriod::new(
            self.month.unwrap_or(current.month),
            self.year.unwrap_or(current.year),
        )
    }
}
