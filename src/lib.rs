//! fintrack - personal finance tracking and spending analytics
//!
//! Records income and expense transactions and monthly category budgets in
//! JSON files, and derives reports from them: monthly totals, category
//! breakdowns, budget vs. actual comparisons and rule-based insights.
//!
//! # Architecture
//!
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//! - `models`: Transactions, budgets, money and months
//! - `storage`: JSON file repositories
//! - `reports`: Pure aggregations over records
//! - `services`: Validation and lookups on top of storage
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::FinancePaths;
//! use finance_tracker::reports::spending_insights;
//! use finance_tracker::storage::Storage;
//!
//! let mut storage = Storage::new(FinancePaths::new()?)?;
//! storage.load_all()?;
//! let insights = spending_insights(
//!     &storage.transactions.get_all()?,
//!     &storage.budgets.get_all()?,
//!     YearMonth::current(),
//! );
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
