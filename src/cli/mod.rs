//! CLI command implementations
//!
//! Each submodule defines a clap subcommand enum and a handler that runs it
//! against [`Storage`](crate::storage::Storage). Argument parsing helpers
//! shared between them live here.

pub mod budget;
pub mod export;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportFormat};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;
use clap::ValueEnum;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, TransactionType, YearMonth};

/// Transaction direction as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionType::Income,
            KindArg::Expense => TransactionType::Expense,
        }
    }
}

/// Parse a positive or negative amount such as "12.50" or "$12.50"
pub fn parse_amount(input: &str) -> FinanceResult<Money> {
    Money::parse(input).map_err(|e| {
        FinanceError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '12.50'. ({})",
            input, e
        ))
    })
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(input: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        FinanceError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", input))
    })
}

/// Parse a month such as "2025-03" or "Mar 2025"; `None` means this month
pub fn parse_month(input: Option<&str>) -> FinanceResult<YearMonth> {
    match input {
        Some(s) => YearMonth::parse(s).map_err(|e| FinanceError::Validation(e.to_string())),
        None => Ok(YearMonth::current()),
    }
}
