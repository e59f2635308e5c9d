//! Rule-based spending insights
//!
//! Rules run in a fixed priority order and every match is kept until the
//! list is cut to [`MAX_INSIGHTS`]. The cut follows rule order, not
//! severity, so a long run of exceeded budgets can crowd out the rest.

use std::fmt;

use serde::Serialize;

use crate::models::{Budget, Money, Transaction, YearMonth};

use super::budget::{budget_comparisons, BudgetComparison, BudgetStatus};
use super::category::{category_expenses, CategoryExpense};
use super::summary::FinancialSummary;

/// Upper bound on the number of insights returned
pub const MAX_INSIGHTS: usize = 5;

/// An on-track budget at or above this usage (percent) gets a warning
pub const NEAR_LIMIT_PERCENT: f64 = 90.0;

/// A top category above this share (percent) of expenses gets flagged
pub const CONCENTRATION_PERCENT: f64 = 40.0;

/// A savings rate above this (percent) is called out as good
pub const HEALTHY_SAVINGS_PERCENT: f64 = 20.0;

/// Tone of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Success,
    Info,
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Success => write!(f, "success"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A short observation about spending behavior
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingInsight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

/// Insights for the record set, evaluated against `current`
///
/// Budget rules look at `current` only. The concentration and savings rules
/// use every transaction given, so pre-filter to narrow the period.
pub fn spending_insights(
    transactions: &[Transaction],
    budgets: &[Budget],
    current: YearMonth,
) -> Vec<SpendingInsight> {
    let comparisons = budget_comparisons(budgets, transactions, current);
    let categories = category_expenses(transactions);
    let summary = FinancialSummary::from_transactions(transactions);
    insights_from(&comparisons, &categories, &summary)
}

/// Apply the insight rules to already-computed aggregates
pub fn insights_from(
    comparisons: &[BudgetComparison],
    categories: &[CategoryExpense],
    summary: &FinancialSummary,
) -> Vec<SpendingInsight> {
    let mut insights = Vec::new();

    for c in comparisons.iter().filter(|c| c.status == BudgetStatus::Over) {
        let overspend = c.actual - c.budgeted;
        insights.push(SpendingInsight {
            kind: InsightKind::Warning,
            title: "Budget Exceeded".into(),
            description: format!(
                "You've exceeded your {} budget by {}",
                c.category, overspend
            ),
            category: Some(c.category.clone()),
            amount: Some(overspend),
        });
    }

    for c in comparisons
        .iter()
        .filter(|c| c.status == BudgetStatus::OnTrack && c.percentage >= NEAR_LIMIT_PERCENT)
    {
        insights.push(SpendingInsight {
            kind: InsightKind::Warning,
            title: "Approaching Budget Limit".into(),
            description: format!(
                "You've used {:.0}% of your {} budget",
                c.percentage, c.category
            ),
            category: Some(c.category.clone()),
            amount: None,
        });
    }

    if let Some(top) = categories
        .first()
        .filter(|top| top.percentage > CONCENTRATION_PERCENT)
    {
        insights.push(SpendingInsight {
            kind: InsightKind::Info,
            title: "High Spending Category".into(),
            description: format!(
                "{} accounts for {:.1}% of your total expenses",
                top.category, top.percentage
            ),
            category: Some(top.category.clone()),
            amount: Some(top.amount),
        });
    }

    if let Some(rate) = summary
        .savings_rate()
        .filter(|rate| *rate > HEALTHY_SAVINGS_PERCENT)
    {
        insights.push(SpendingInsight {
            kind: InsightKind::Success,
            title: "Great Savings Rate".into(),
            description: format!("You're saving {:.1}% of your income. Keep it up!", rate),
            category: None,
            amount: None,
        });
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn april() -> YearMonth {
        YearMonth::new(2025, 4).unwrap()
    }

    fn in_april() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 10).unwrap()
    }

    fn expense(cents: i64, category: &str) -> Transaction {
        Transaction::expense(Money::from_cents(cents), in_april(), "test", category)
    }

    fn income(cents: i64) -> Transaction {
        Transaction::income(Money::from_cents(cents), in_april(), "Salary", "Salary")
    }

    fn budget(category: &str, cents: i64) -> Budget {
        Budget::new(category, Money::from_cents(cents), april())
    }

    #[test]
    fn test_no_data_no_insights() {
        assert!(spending_insights(&[], &[], april()).is_empty());
    }

    #[test]
    fn test_budget_exceeded() {
        let transactions = vec![expense(10000, "Food & Dining")];
        let budgets = vec![budget("Food & Dining", 8000)];

        let insights = spending_insights(&transactions, &budgets, april());

        let exceeded: Vec<_> = insights
            .iter()
            .filter(|i| i.title == "Budget Exceeded")
            .collect();
        assert_eq!(exceeded.len(), 1);
        assert_eq!(exceeded[0].kind, InsightKind::Warning);
        assert_eq!(exceeded[0].category.as_deref(), Some("Food & Dining"));
        assert_eq!(exceeded[0].amount, Some(Money::from_cents(2000)));
        assert_eq!(insights[0], *exceeded[0]);
    }

    #[test]
    fn test_approaching_limit_needs_90_percent() {
        let transactions = vec![
            expense(9000, "Shopping"),
            expense(8900, "Travel"),
            income(1_000_000),
        ];
        let budgets = vec![budget("Shopping", 10000), budget("Travel", 10000)];

        let insights = spending_insights(&transactions, &budgets, april());
        let near: Vec<_> = insights
            .iter()
            .filter(|i| i.title == "Approaching Budget Limit")
            .collect();

        assert_eq!(near.len(), 1);
        assert_eq!(near[0].category.as_deref(), Some("Shopping"));
        assert_eq!(near[0].amount, None);
        assert_eq!(near[0].description, "You've used 90% of your Shopping budget");
    }

    #[test]
    fn test_concentration_rule() {
        let concentrated = vec![expense(4000, "A"), expense(5900, "B"), expense(100, "C")];
        let insights = spending_insights(&concentrated, &[], april());
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Info);
        assert_eq!(insights[0].category.as_deref(), Some("B"));
        assert_eq!(insights[0].amount, Some(Money::from_cents(5900)));

        let spread = vec![expense(4000, "A"), expense(3000, "B"), expense(3000, "C")];
        assert!(spending_insights(&spread, &[], april()).is_empty());
    }

    #[test]
    fn test_savings_rate_rule() {
        let healthy = vec![income(100000), expense(70000, "Bills & Utilities")];
        let insights = spending_insights(&healthy, &[], april());
        let success: Vec<_> = insights
            .iter()
            .filter(|i| i.kind == InsightKind::Success)
            .collect();
        assert_eq!(success.len(), 1);
        assert_eq!(
            success[0].description,
            "You're saving 30.0% of your income. Keep it up!"
        );

        let thin = vec![income(100000), expense(90000, "Bills & Utilities")];
        let insights = spending_insights(&thin, &[], april());
        assert!(insights.iter().all(|i| i.kind != InsightKind::Success));
    }

    #[test]
    fn test_savings_rule_guards_zero_income() {
        let transactions = vec![expense(1000, "A"), expense(1000, "B"), expense(1000, "C")];
        let insights = spending_insights(&transactions, &[], april());
        assert!(insights.is_empty());
    }

    #[test]
    fn test_capped_at_five_in_rule_order() {
        let mut transactions = vec![income(10_000_000)];
        let mut budgets = Vec::new();
        for name in ["A", "B", "C", "D", "E", "F"] {
            transactions.push(expense(2000, name));
            budgets.push(budget(name, 1000));
        }

        let insights = spending_insights(&transactions, &budgets, april());

        assert_eq!(insights.len(), MAX_INSIGHTS);
        assert!(insights.iter().all(|i| i.title == "Budget Exceeded"));
    }

    #[test]
    fn test_rule_priority_order() {
        let transactions = vec![
            income(100000),
            expense(12000, "Food & Dining"),
            expense(9500, "Shopping"),
            expense(500, "Travel"),
        ];
        let budgets = vec![budget("Food & Dining", 10000), budget("Shopping", 10000)];

        let insights = spending_insights(&transactions, &budgets, april());
        let titles: Vec<_> = insights.iter().map(|i| i.title.as_str()).collect();

        assert_eq!(
            titles,
            vec![
                "Budget Exceeded",
                "Approaching Budget Limit",
                "High Spending Category",
                "Great Savings Rate",
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let transactions = vec![income(5000), expense(4500, "A")];
        let budgets = vec![budget("A", 4000)];
        assert_eq!(
            spending_insights(&transactions, &budgets, april()),
            spending_insights(&transactions, &budgets, april())
        );
    }
}
