//! Budget allocation model
//!
//! Tracks how much a user plans to spend in a category for one period.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, UserId};
use super::money::Money;
use super::period::ReportPeriod;

/// A planned amount for one category in one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub period: ReportPeriod,
    pub budgeted: Money,
    pub updated_at: DateTime<Utc>,
}

impl BudgetAllocation {
    pub fn new(
        user_id: UserId,
        category_id: CategoryId,
        period: ReportPeriod,
        budgeted: Money,
    ) -> Self {
        Self {
            user_id,
            category_id,
            period,
            budgeted,
            updated_at: Utc::now(),
        }
    }

    /// Set the budgeted amount
    pub fn set_budgeted(&mut self, amount: Money) {
        self.budgeted = amount;
        self.updated_at = Utc::now();
    }

    /// Validate the allocation
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.budgeted.is_negative() {
            return Err(BudgetValidationError::NegativeBudget);
        }
        Ok(())
    }
}

impl fmt::Display for BudgetAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} budgeted: {}", self.period, self.budgeted)
    }
}

/// Validation errors for budget allocations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeBudget,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBudget => write!(f, "Budget amount cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
