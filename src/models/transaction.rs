//! Transaction model
//!
//! A single dated money movement, either income or an expense, filed under
//! a free-text category.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use super::month::YearMonth;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    /// Parse "income" / "expense" (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Some(Self::Income),
            "expense" | "out" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Always positive; direction comes from `kind`
    pub amount: Money,

    /// Transaction date
    pub date: NaiveDate,

    pub description: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub category: String,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with a fresh ID and timestamps
    pub fn new(
        kind: TransactionType,
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            amount,
            date,
            description: description.into(),
            kind,
            category: category.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Shorthand for an expense
    pub fn expense(
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::new(TransactionType::Expense, amount, date, description, category)
    }

    /// Shorthand for income
    pub fn income(
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::new(TransactionType::Income, amount, date, description, category)
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// The calendar month this transaction falls in
    pub fn month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply(&mut self, patch: TransactionPatch) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        self.updated_at = Utc::now();
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        check_fields(self.amount, &self.description, &self.category)
    }
}

fn check_fields(
    amount: Money,
    description: &str,
    category: &str,
) -> Result<(), TransactionValidationError> {
    if !amount.is_positive() {
        return Err(TransactionValidationError::NonPositiveAmount(amount));
    }

    if amount > Money::MAX_AMOUNT {
        return Err(TransactionValidationError::AmountTooLarge(amount));
    }

    if description.trim().is_empty() {
        return Err(TransactionValidationError::MissingDescription);
    }

    if category.trim().is_empty() {
        return Err(TransactionValidationError::MissingCategory);
    }

    Ok(())
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_income() { "+" } else { "-" };
        write!(
            f,
            "{} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.description,
            sign,
            self.amount
        )
    }
}

/// Fields supplied when recording a transaction
///
/// The ID and timestamps are assigned when it is inserted.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub amount: Money,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
}

impl NewTransaction {
    /// Check the fields before an ID is assigned
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        check_fields(self.amount, &self.description, &self.category)
    }

    pub fn into_transaction(self) -> Transaction {
        Transaction::new(
            self.kind,
            self.amount,
            self.date,
            self.description,
            self.category,
        )
    }
}

/// Partial update for a transaction; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.kind.is_none()
            && self.category.is_none()
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    MissingDescription,
    MissingCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than 0 (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount may not exceed {} (got {})", Money::MAX_AMOUNT, amount)
            }
            Self::MissingDescription => write!(f, "Description is required"),
            Self::MissingCategory => write!(f, "Category is required"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
