//! Transaction CLI commands

use std::collections::HashMap;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::format_transaction_register;
use crate::error::{ReportError, ReportResult};
use crate::models::{Money, UserRef};
use crate::services::{CategoryService, CreateTransactionInput, TransactionService};
use crate::storage::Storage;

use super::PeriodArgs;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// User email or ID
        user: UserRef,
        /// Category name or ID
        category: String,
        /// Amount (e.g., "1200" or "1,200.50")
        amount: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'D', long)]
        description: Option<String>,
    },

    /// List a user's transactions for a month
    List {
        /// User email or ID
        user: UserRef,
        #[command(flatten)]
        period: PeriodArgs,
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(storage: &Storage, cmd: TransactionCommands) -> ReportResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            user,
            category,
            amount,
            date,
            description,
        } => {
            let amount = Money::parse(&amount).map_err(|e| ReportError::Validation(e.to_string()))?;
            let date = match date {
                Some(d) => NaiveDate::parse_from_str(&d, "%Y-%m-%d").map_err(|_| {
                    ReportError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", d))
                })?,
                None => chrono::Local::now().date_naive(),
            };

            let txn = service.create(CreateTransactionInput {
                user,
                date,
                category,
                amount,
                description,
            })?;
            println!("Recorded transaction: {}", txn.id);
            println!("  {} {}", txn.date.format("%Y-%m-%d"), txn.amount.format_plain());
        }

        TransactionCommands::List {
            user,
            period,
            category,
        } => {
            let categories = CategoryService::new(storage);
            let category_id = match category {
                Some(c) => Some(categories.find(&c)?.id),
                None => None,
            };

            let period = period.period();
            let transactions = service.list_for_period(&user, period, category_id)?;
            let names: HashMap<_, _> = categories
                .list()?
                .into_iter()
                .map(|c| (c.id, c.name))
                .collect();

            println!("Transactions for {}:", period.label());
            print!("{}", format_transaction_register(&transactions, &names));
        }
    }

    Ok(())
}
