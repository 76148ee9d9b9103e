//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json and answers
//! the per-user, per-period queries the report needs.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ReportError;
use crate::models::{CategoryId, Money, ReportPeriod, Transaction, TransactionId, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence with a per-user index
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
    /// Index: user_id -> transaction_ids
    by_user: RwLock<HashMap<UserId, Vec<TransactionId>>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_user: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk and build indexes
    pub fn load(&self) -> Result<(), ReportError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_user = self
            .by_user
            .write()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_user.clear();

        for txn in file_data.transactions {
            by_user.entry(txn.user_id).or_default().push(txn.id);
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk, newest first
    pub fn save(&self) -> Result<(), ReportError> {
        let data = self
            .data
            .read()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut transactions);

        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    /// Insert or update a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), ReportError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_user = self
            .by_user
            .write()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(old) = data.get(&txn.id) {
            if let Some(ids) = by_user.get_mut(&old.user_id) {
                ids.retain(|id| *id != txn.id);
            }
        }

        by_user.entry(txn.user_id).or_default().push(txn.id);
        data.insert(txn.id, txn);
        Ok(())
    }

    /// All of a user's transactions in a period, newest first
    pub fn get_for_user_in_period(
        &self,
        user_id: UserId,
        period: ReportPeriod,
    ) -> Result<Vec<Transaction>, ReportError> {
        let data = self
            .data
            .read()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_user = self
            .by_user
            .read()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_user.get(&user_id).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut transactions: Vec<_> = ids
            .iter()
            .filter_map(|id| data.get(id))
            .filter(|txn| period.contains(txn.date))
            .cloned()
            .collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Sum of a user's amounts in one category for a period
    pub fn sum_for_category(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        period: ReportPeriod,
    ) -> Result<Money, ReportError> {
        Ok(self
            .get_for_user_in_period(user_id, period)?
            .iter()
            .filter(|txn| txn.category_id == category_id)
            .map(|txn| txn.amount)
            .sum())
    }

    /// Number of stored transactions
    pub fn count(&self) -> Result<usize, ReportError> {
        let data = self
            .data
            .read()
            .map_err(|e| ReportError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
}
