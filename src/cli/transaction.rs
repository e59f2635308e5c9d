//! Transaction CLI commands

use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_list};
use crate::display::money;
use crate::error::FinanceResult;
use crate::models::{NewTransaction, TransactionPatch, TransactionType};
use crate::services::{TransactionFilter, TransactionService};
use crate::storage::Storage;

use super::{parse_amount, parse_date, KindArg};

/// Type filter for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeFilter {
    All,
    Income,
    Expense,
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction
    Add {
        /// Amount, e.g. "12.50"
        amount: String,
        /// What the money was for
        description: String,
        /// Category (see `fintrack categories`)
        #[arg(short, long)]
        category: String,
        /// Income or expense
        #[arg(short = 't', long = "type", value_enum, default_value = "expense")]
        kind: KindArg,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Only descriptions containing this text
        #[arg(short, long)]
        search: Option<String>,
        /// Only income or only expenses
        #[arg(short = 't', long = "type", value_enum, default_value = "all")]
        kind: TypeFilter,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (a unique prefix is enough)
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<KindArg>,
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Delete every transaction
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            category,
            kind,
            date,
        } => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };

            let txn = service.create(NewTransaction {
                kind: kind.into(),
                amount: parse_amount(&amount)?,
                date,
                description,
                category,
            })?;

            println!("Recorded {}: {}", txn.kind, txn.id);
            print!("{}", format_transaction_details(&txn, settings));
        }

        TransactionCommands::List {
            search,
            kind,
            limit,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(text) = search {
                filter = filter.search(text);
            }
            match kind {
                TypeFilter::All => {}
                TypeFilter::Income => filter = filter.kind(TransactionType::Income),
                TypeFilter::Expense => filter = filter.kind(TransactionType::Expense),
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let transactions = service.list(filter)?;
            print!("{}", format_transaction_list(&transactions, settings));
            println!("\nShowing {} transactions", transactions.len());
        }

        TransactionCommands::Show { id } => {
            let txn = service.resolve(&id)?;
            print!("{}", format_transaction_details(&txn, settings));
        }

        TransactionCommands::Edit {
            id,
            amount,
            description,
            category,
            kind,
            date,
        } => {
            let txn = service.resolve(&id)?;

            let patch = TransactionPatch {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
                description,
                kind: kind.map(Into::into),
                category,
            };

            let updated = service.update(txn.id, patch)?;
            println!("Updated transaction: {}", updated.id);
            print!("{}", format_transaction_details(&updated, settings));
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service.resolve(&id)?;

            if !force {
                println!("About to delete transaction:");
                print!("{}", format_transaction_details(&txn, settings));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(txn.id)?;
            println!(
                "Deleted transaction: {} ({} {})",
                deleted.id,
                deleted.description,
                money(deleted.amount, settings)
            );
        }

        TransactionCommands::Clear { force } => {
            let count = service.count()?;
            if !force {
                println!("About to delete all {} transactions.", count);
                println!("Use --force to confirm");
                return Ok(());
            }

            let cleared = service.clear()?;
            println!("Deleted {} transactions", cleared);
        }
    }

    Ok(())
}
