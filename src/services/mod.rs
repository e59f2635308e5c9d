//! Service layer for fintrack
//!
//! The service layer provides business rules on top of the storage layer:
//! input cleanup, validation and lookups by user-supplied identifiers.

pub mod budget;
pub mod transaction;

pub use budget::{month_options, BudgetService, MONTH_OPTION_COUNT};
pub use transaction::{TransactionFilter, TransactionService};
