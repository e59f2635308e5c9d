//! CSV export of transactions
//!
//! One row per transaction with a header row. Amounts are written as plain
//! decimals without a currency symbol so spreadsheets read them as numbers.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;

/// Column names, in order
pub const CSV_HEADER: [&str; 6] = ["id", "date", "type", "description", "category", "amount"];

fn export_error(e: impl std::fmt::Display) -> FinanceError {
    FinanceError::Export(e.to_string())
}

/// Write transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> FinanceResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer.write_record(CSV_HEADER).map_err(export_error)?;

    for txn in transactions {
        csv_writer
            .write_record([
                txn.id.as_uuid().to_string(),
                txn.date.format("%Y-%m-%d").to_string(),
                txn.kind.to_string(),
                txn.description.clone(),
                txn.category.clone(),
                txn.amount.format_with_symbol(""),
            ])
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}
