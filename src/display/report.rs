//! Report formatting for terminal output

use crate::config::Settings;
use crate::models::{Money, Transaction};
use crate::reports::{
    BudgetComparison, BudgetStatus, CategoryExpense, FinancialSummary, InsightKind,
    MonthlyExpense, SpendingInsight,
};

use super::{column_width, date, money, truncate};

const BAR_WIDTH: usize = 20;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Summary cards plus the recent activity list
pub fn format_summary(
    summary: &FinancialSummary,
    recent: &[Transaction],
    top: &[CategoryExpense],
    settings: &Settings,
) -> String {
    let mut output = String::new();

    output.push_str("Financial Summary\n");
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!(
        "Total income:    {:>16}\n",
        money(summary.total_income, settings)
    ));
    output.push_str(&format!(
        "Total expenses:  {:>16}\n",
        money(summary.total_expenses, settings)
    ));
    output.push_str(&format!(
        "Net income:      {:>16}\n",
        money(summary.net_income, settings)
    ));
    output.push_str(&format!(
        "Transactions:    {:>16}\n",
        summary.transaction_count
    ));
    if let Some(rate) = summary.savings_rate() {
        output.push_str(&format!("Savings rate:    {:>16}\n", format!("{:.1}%", rate)));
    }

    if !top.is_empty() {
        output.push_str("\nTop categories\n");
        for category in top {
            output.push_str(&format!(
                "  {:<20} {:>12}  {}\n",
                truncate(&category.category, 20),
                money(category.amount, settings),
                format_percentage(category.percentage)
            ));
        }
    }

    output.push_str("\nRecent transactions\n");
    if recent.is_empty() {
        output.push_str("  (none yet)\n");
    }
    for txn in recent {
        let sign = if txn.is_income() { "+" } else { "-" };
        output.push_str(&format!(
            "  {}  {:<24} {:>13}\n",
            date(txn.date, settings),
            truncate(&txn.description, 24),
            format!("{}{}", sign, money(txn.amount, settings))
        ));
    }

    output
}

/// Month-by-month income and expenses with an expense bar
pub fn format_monthly(months: &[MonthlyExpense], settings: &Settings) -> String {
    if months.is_empty() {
        return "No transactions to report.\n".to_string();
    }

    let max_expense = months
        .iter()
        .map(|m| m.total_expenses.as_f64())
        .fold(0.0, f64::max);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<9} {:>13} {:>13} {:>13}  {}\n",
        "Month", "Income", "Expenses", "Net", "Spending"
    ));
    output.push_str(&separator(52 + BAR_WIDTH));
    output.push('\n');

    for month in months {
        output.push_str(&format!(
            "{:<9} {:>13} {:>13} {:>13}  {}\n",
            month.month.short_label(),
            money(month.total_income, settings),
            money(month.total_expenses, settings),
            money(month.net(), settings),
            format_bar(month.total_expenses.as_f64(), max_expense, BAR_WIDTH)
        ));
    }

    output
}

/// Category breakdown with share of spending
pub fn format_categories(categories: &[CategoryExpense], settings: &Settings) -> String {
    if categories.is_empty() {
        return "No expenses to report.\n".to_string();
    }

    let name_width = column_width(categories.iter().map(|c| c.category.as_str()), 8);
    let total: Money = categories.iter().map(|c| c.amount).sum();

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>6}  {:<7}  {}\n",
        "Category",
        "Amount",
        "Share",
        "Color",
        "",
        name_width = name_width,
    ));
    output.push_str(&separator(name_width + 33 + BAR_WIDTH));
    output.push('\n');

    for category in categories {
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>6}  {:<7}  {}\n",
            category.category,
            money(category.amount, settings),
            format_percentage(category.percentage),
            category.color,
            format_bar(category.percentage, 100.0, BAR_WIDTH),
            name_width = name_width,
        ));
    }

    output.push_str(&separator(name_width + 33 + BAR_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<name_width$}  {:>12}\n",
        "Total",
        money(total, settings),
        name_width = name_width,
    ));

    output
}

fn status_label(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Under => "Under",
        BudgetStatus::OnTrack => "On track",
        BudgetStatus::Over => "OVER",
    }
}

/// Budget vs. actual table for one month
pub fn format_budget_comparisons(
    comparisons: &[BudgetComparison],
    month_label: &str,
    settings: &Settings,
) -> String {
    if comparisons.is_empty() {
        return format!("No budgets set for {}.\n", month_label);
    }

    let name_width = column_width(comparisons.iter().map(|c| c.category.as_str()), 8);

    let mut output = String::new();
    output.push_str(&format!("Budgets for {}\n\n", month_label));
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}  {:>12}  {:>6}  {}\n",
        "Category",
        "Budget",
        "Spent",
        "Remaining",
        "Used",
        "Status",
        name_width = name_width,
    ));
    output.push_str(&separator(name_width + 62));
    output.push('\n');

    for c in comparisons {
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>12}  {:>12}  {:>6}  {}\n",
            c.category,
            money(c.budgeted, settings),
            money(c.actual, settings),
            money(c.remaining(), settings),
            format_percentage(c.percentage),
            status_label(c.status),
            name_width = name_width,
        ));
    }

    output
}

/// Insights as a short bulleted list
pub fn format_insights(insights: &[SpendingInsight]) -> String {
    if insights.is_empty() {
        return "No insights right now. Add more transactions and budgets.\n".to_string();
    }

    let mut output = String::new();
    for insight in insights {
        let marker = match insight.kind {
            InsightKind::Warning => "!",
            InsightKind::Success => "+",
            InsightKind::Info => "i",
        };
        output.push_str(&format!("[{}] {}\n", marker, insight.title));
        output.push_str(&format!("    {}\n", insight.description));
    }
    output
}
