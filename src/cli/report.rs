//! Report CLI commands
//!
//! Every report prints a terminal table by default, or the underlying data
//! as JSON with `--json`.

use clap::Subcommand;
use serde::Serialize;

use crate::config::Settings;
use crate::display::report::{
    format_budget_comparisons, format_categories, format_insights, format_monthly, format_summary,
};
use crate::error::FinanceResult;
use crate::models::Transaction;
use crate::reports::{
    budget_comparisons, category_expenses, monthly_expenses, recent_transactions,
    spending_insights, top_categories, CategoryExpense, FinancialSummary,
};
use crate::storage::Storage;

use super::parse_month;

/// Categories shown on the summary
const TOP_CATEGORY_COUNT: usize = 3;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expenses, net, top categories and recent transactions
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// Income and expenses per month
    Monthly {
        #[arg(long)]
        json: bool,
    },
    /// Spending by category
    Categories {
        /// Only transactions from this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Budget vs. actual spending
    Budgets {
        /// Month to evaluate (YYYY-MM), defaults to this month
        #[arg(short, long)]
        month: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Spending insights
    Insights {
        /// Month whose budgets are evaluated (YYYY-MM), defaults to this month
        #[arg(short, long)]
        month: Option<String>,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    #[serde(flatten)]
    summary: FinancialSummary,
    savings_rate: Option<f64>,
    top_categories: Vec<CategoryExpense>,
    recent_transactions: &'a [Transaction],
}

fn print_json<T: Serialize>(value: &T) -> FinanceResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinanceResult<()> {
    let transactions = storage.transactions.get_all()?;

    match cmd {
        ReportCommands::Summary { json } => handle_summary_report(&transactions, settings, json),
        ReportCommands::Monthly { json } => {
            let months = monthly_expenses(&transactions);
            if json {
                print_json(&months)
            } else {
                print!("{}", format_monthly(&months, settings));
                Ok(())
            }
        }
        ReportCommands::Categories { month, json } => {
            let scoped: Vec<Transaction> = match month {
                Some(m) => {
                    let month = parse_month(Some(m.as_str()))?;
                    transactions
                        .into_iter()
                        .filter(|t| t.month() == month)
                        .collect()
                }
                None => transactions,
            };
            let categories = category_expenses(&scoped);
            if json {
                print_json(&categories)
            } else {
                print!("{}", format_categories(&categories, settings));
                Ok(())
            }
        }
        ReportCommands::Budgets { month, json } => {
            let month = parse_month(month.as_deref())?;
            let budgets = storage.budgets.get_all()?;
            let comparisons = budget_comparisons(&budgets, &transactions, month);
            if json {
                print_json(&comparisons)
            } else {
                print!(
                    "{}",
                    format_budget_comparisons(&comparisons, &month.long_label(), settings)
                );
                Ok(())
            }
        }
        ReportCommands::Insights { month, json } => {
            let month = parse_month(month.as_deref())?;
            let budgets = storage.budgets.get_all()?;
            let insights = spending_insights(&transactions, &budgets, month);
            if json {
                print_json(&insights)
            } else {
                print!("{}", format_insights(&insights));
                Ok(())
            }
        }
    }
}

fn handle_summary_report(
    transactions: &[Transaction],
    settings: &Settings,
    json: bool,
) -> FinanceResult<()> {
    let summary = FinancialSummary::from_transactions(transactions);
    let recent = recent_transactions(transactions, settings.recent_count);
    let top = top_categories(transactions, TOP_CATEGORY_COUNT);

    if json {
        return print_json(&SummaryReport {
            summary,
            savings_rate: summary.savings_rate(),
            top_categories: top,
            recent_transactions: &recent,
        });
    }

    print!("{}", format_summary(&summary, &recent, &top, settings));
    Ok(())
}
