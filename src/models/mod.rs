//! Core data models for fintrack
//!
//! This module contains the persisted records (transactions and budgets)
//! and the value types they are built from.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::{Budget, BudgetPatch, BudgetValidationError, NewBudget};
pub use category::{canonical_category, categories_for, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use ids::{BudgetId, TransactionId};
pub use money::Money;
pub use month::{MonthParseError, YearMonth};
pub use transaction::{
    NewTransaction, Transaction, TransactionPatch, TransactionType, TransactionValidationError,
};
