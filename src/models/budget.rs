//! Budget model
//!
//! A spending ceiling for one category in one calendar month.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use super::month::YearMonth;

/// A monthly budget for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    pub category: String,

    /// Spending ceiling for the month
    pub amount: Money,

    pub month: YearMonth,

    /// When this budget was created
    pub created_at: DateTime<Utc>,

    /// When this budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget with a fresh ID and timestamps
    pub fn new(category: impl Into<String>, amount: Money, month: YearMonth) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            category: category.into(),
            amount,
            month,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this budget occupies the given (category, month) slot
    pub fn same_slot(&self, category: &str, month: YearMonth) -> bool {
        self.category == category && self.month == month
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply(&mut self, patch: BudgetPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(month) = patch.month {
            self.month = month;
        }
        self.updated_at = Utc::now();
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        check_fields(self.amount, &self.category)
    }
}

fn check_fields(amount: Money, category: &str) -> Result<(), BudgetValidationError> {
    if !amount.is_positive() {
        return Err(BudgetValidationError::NonPositiveAmount(amount));
    }
    if amount > Money::MAX_AMOUNT {
        return Err(BudgetValidationError::AmountTooLarge(amount));
    }
    if category.trim().is_empty() {
        return Err(BudgetValidationError::MissingCategory);
    }
    Ok(())
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.month, self.category, self.amount)
    }
}

/// Fields supplied when setting a budget
#[derive(Debug, Clone)]
pub struct NewBudget {
    pub category: String,
    pub amount: Money,
    pub month: YearMonth,
}

impl NewBudget {
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        check_fields(self.amount, &self.category)
    }

    pub fn into_budget(self) -> Budget {
        Budget::new(self.category, self.amount, self.month)
    }
}

/// Partial update for a budget; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct BudgetPatch {
    pub category: Option<String>,
    pub amount: Option<Money>,
    pub month: Option<YearMonth>,
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    MissingCategory,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Budget amount must be greater than 0 (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(
                    f,
                    "Budget amount may not exceed {} (got {})",
                    Money::MAX_AMOUNT,
                    amount
                )
            }
            Self::MissingCategory => write!(f, "Category is required"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
