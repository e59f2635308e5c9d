//! Transaction display formatting
//!
//! Register-style listings and a detail view.

use crate::config::Settings;
use crate::models::Transaction;

use super::{date, money, truncate};

const DESCRIPTION_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 18;

/// Signed amount: income positive, expenses negative
fn signed_amount(txn: &Transaction, settings: &Settings) -> String {
    if txn.is_income() {
        format!("+{}", money(txn.amount, settings))
    } else {
        format!("-{}", money(txn.amount, settings))
    }
}

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{:<12} {:<10} {:<desc$} {:<cat$} {:>13}",
        txn.id.to_string(),
        date(txn.date, settings),
        truncate(&txn.description, DESCRIPTION_WIDTH),
        truncate(&txn.category, CATEGORY_WIDTH),
        signed_amount(txn, settings),
        desc = DESCRIPTION_WIDTH,
        cat = CATEGORY_WIDTH,
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_list(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<10} {:<desc$} {:<cat$} {:>13}\n",
        "ID",
        "Date",
        "Description",
        "Category",
        "Amount",
        desc = DESCRIPTION_WIDTH,
        cat = CATEGORY_WIDTH,
    ));
    output.push_str(&"-".repeat(12 + 10 + DESCRIPTION_WIDTH + CATEGORY_WIDTH + 13 + 4));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Date:        {}\n", date(txn.date, settings)));
    output.push_str(&format!("Amount:      {}\n", money(txn.amount, settings)));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!(
        "Recorded:    {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    if txn.updated_at != txn.created_at {
        output.push_str(&format!(
            "Updated:     {}\n",
            txn.updated_at.format("%Y-%m-%d %H:%M UTC")
        ));
    }

    output
}
