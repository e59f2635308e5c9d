//! Expense breakdown by category
//!
//! Each expense category with its share of total spending and a chart
//! color. Colors follow rank, so the same data always gets the same colors.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Money, Transaction};

/// Chart colors, assigned by descending-amount rank
pub const CATEGORY_COLORS: &[&str] = &[
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#14b8a6", "#3b82f6", "#6366f1", "#a855f7",
    "#ec4899", "#64748b",
];

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryExpense {
    pub category: String,
    pub amount: Money,
    /// Share of all expenses, 0 to 100
    pub percentage: f64,
    pub color: &'static str,
}

/// Color for the category at `rank` (0 = largest)
pub fn color_for_rank(rank: usize) -> &'static str {
    CATEGORY_COLORS[rank % CATEGORY_COLORS.len()]
}

/// Sum expenses per category, largest first
///
/// Income is ignored. Equal amounts are ordered by category name.
pub fn category_expenses(transactions: &[Transaction]) -> Vec<CategoryExpense> {
    let mut by_category: BTreeMap<&str, Money> = BTreeMap::new();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        *by_category.entry(txn.category.as_str()).or_default() += txn.amount;
    }

    let total: Money = by_category.values().copied().sum();

    let mut ranked: Vec<(&str, Money)> = by_category.into_iter().collect();
    // Stable sort keeps the name order from the BTreeMap for ties
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .enumerate()
        .map(|(rank, (category, amount))| CategoryExpense {
            category: category.to_string(),
            amount,
            percentage: amount.percent_of(total),
            color: color_for_rank(rank),
        })
        .collect()
}

/// The largest `count` categories
pub fn top_categories(transactions: &[Transaction], count: usize) -> Vec<CategoryExpense> {
    let mut categories = category_expenses(transactions);
    categories.truncate(count);
    categories
}
