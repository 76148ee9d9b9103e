//! Transaction display formatting
//!
//! Register view of a user's transactions for a period.

use std::collections::HashMap;

use crate::models::{CategoryId, Transaction};

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[Transaction],
    category_names: &HashMap<CategoryId, String>,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:16} {:24} {:>12}\n",
        "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(65));
    output.push('\n');

    for txn in transactions {
        let category = category_names
            .get(&txn.category_id)
            .map(String::as_str)
            .unwrap_or("Unknown");
        output.push_str(&format!(
            "{} {} {} {:>12}\n",
            txn.date.format("%Y-%m-%d"),
            truncate(category, 16),
            truncate(&txn.description, 24),
            txn.amount.format_plain()
        ));
    }

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
