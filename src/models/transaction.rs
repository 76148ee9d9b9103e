//! Transaction model
//!
//! A recorded money movement. Whether it is income or expense follows from
//! its category; the amount itself is stored as entered.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId, UserId};
use super::money::Money;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Owner of the transaction
    pub user_id: UserId,

    /// Transaction date
    pub date: NaiveDate,

    /// Category this transaction is filed under
    pub category_id: CategoryId,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Amount, in the category's direction
    pub amount: Money,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(user_id: UserId, date: NaiveDate, category_id: CategoryId, amount: Money) -> Self {
        Self {
            id: TransactionId::new(),
            user_id,
            date,
            category_id,
            description: String::new(),
            amount,
            created_at: Utc::now(),
        }
    }

    /// Builder-style description setter
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.amount, self.description)
    }
}
