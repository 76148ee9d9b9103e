//! Budget CLI commands
//!
//! Sets the planned amounts shown in the Budget vs Actual report section.

use clap::Subcommand;

use crate::error::{ReportError, ReportResult};
use crate::models::{Money, UserRef};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::PeriodArgs;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget for an expense category
    Set {
        /// User email or ID
        user: UserRef,
        /// Category name or ID
        category: String,
        /// Amount (e.g., "500" or "500.00")
        amount: String,
        #[command(flatten)]
        period: PeriodArgs,
    },
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> ReportResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Set {
            user,
            category,
            amount,
            period,
        } => {
            let amount = Money::parse(&amount).map_err(|e| ReportError::Validation(e.to_string()))?;
            let period = period.period();
            let alloc = service.set_budget(&user, &category, period, amount)?;
            println!(
                "Budget for '{}' in {} set to {}",
                category,
                period.label(),
                alloc.budgeted.format_plain()
            );
        }
    }

    Ok(())
}
