//! Budget display formatting

use crate::config::Settings;
use crate::models::{Budget, YearMonth};

use super::{column_width, money};

/// Format budgets as a table
pub fn format_budget_list(budgets: &[Budget], settings: &Settings) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let cat_width = column_width(budgets.iter().map(|b| b.category.as_str()), 8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<8}  {:<cat_width$}  {:>12}\n",
        "ID",
        "Month",
        "Category",
        "Budget",
        cat_width = cat_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<8}  {:-<cat_width$}  {:->12}\n",
        "",
        "",
        "",
        "",
        cat_width = cat_width,
    ));

    for budget in budgets {
        output.push_str(&format!(
            "{:<12}  {:<8}  {:<cat_width$}  {:>12}\n",
            budget.id.to_string(),
            budget.month.to_string(),
            budget.category,
            money(budget.amount, settings),
            cat_width = cat_width,
        ));
    }

    output
}

/// Format a single budget
pub fn format_budget_details(budget: &Budget, settings: &Settings) -> String {
    format!(
        "Budget:   {}\nMonth:    {}\nCategory: {}\nAmount:   {}\n",
        budget.id,
        budget.month.long_label(),
        budget.category,
        money(budget.amount, settings)
    )
}

/// Format the months a budget can be set for
pub fn format_month_options(months: &[YearMonth]) -> String {
    months
        .iter()
        .map(|m| format!("{}  {}\n", m, m.long_label()))
        .collect()
}
