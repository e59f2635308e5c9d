//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::budget::{format_budget_details, format_budget_list, format_month_options};
use crate::error::FinanceResult;
use crate::models::{BudgetPatch, NewBudget, YearMonth};
use crate::services::{month_options, BudgetService};
use crate::storage::Storage;

use super::{parse_amount, parse_month};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget for a category in a month, replacing any existing one
    Set {
        /// Category name
        category: String,
        /// Monthly limit, e.g. "400"
        amount: String,
        /// Month (YYYY-MM), defaults to this month
        #[arg(short, long)]
        month: Option<String>,
    },
    /// List budgets
    List {
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Edit a budget
    Edit {
        /// Category name within --month, or budget ID
        id: String,
        /// Month used to find the budget by category
        #[arg(short, long)]
        month: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        /// Move the budget to another month
        #[arg(long)]
        to_month: Option<String>,
    },
    /// Delete a budget
    Delete {
        /// Category name within --month, or budget ID
        id: String,
        #[arg(short, long)]
        month: Option<String>,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Delete every budget
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Show the months a budget can be set for
    Months,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Set {
            category,
            amount,
            month,
        } => {
            let budget = service.set(NewBudget {
                category,
                amount: parse_amount(&amount)?,
                month: parse_month(month.as_deref())?,
            })?;

            println!("Budget set:");
            print!("{}", format_budget_details(&budget, settings));
        }

        BudgetCommands::List { month } => {
            let budgets = match month {
                Some(m) => service.for_month(parse_month(Some(m.as_str()))?)?,
                None => service.list()?,
            };
            print!("{}", format_budget_list(&budgets, settings));
        }

        BudgetCommands::Edit {
            id,
            month,
            amount,
            category,
            to_month,
        } => {
            let budget = service.resolve(&id, parse_month(month.as_deref())?)?;

            let patch = BudgetPatch {
                category,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                month: to_month
                    .as_deref()
                    .map(|m| parse_month(Some(m)))
                    .transpose()?,
            };

            let updated = service.update(budget.id, patch)?;
            println!("Updated budget:");
            print!("{}", format_budget_details(&updated, settings));
        }

        BudgetCommands::Delete { id, month, force } => {
            let budget = service.resolve(&id, parse_month(month.as_deref())?)?;

            if !force {
                println!("About to delete budget:");
                print!("{}", format_budget_details(&budget, settings));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(budget.id)?;
            println!(
                "Deleted budget: {} ({} {})",
                deleted.id, deleted.category, deleted.month
            );
        }

        BudgetCommands::Clear { force } => {
            if !force {
                println!("About to delete all {} budgets.", service.all()?.len());
                println!("Use --force to confirm");
                return Ok(());
            }

            let cleared = service.clear()?;
            println!("Deleted {} budgets", cleared);
        }

        BudgetCommands::Months => {
            print!("{}", format_month_options(&month_options(YearMonth::current())));
        }
    }

    Ok(())
}
