//! Budget vs. actual for the current month
//!
//! Compares each budget set for the evaluation month against that month's
//! expenses in the same category.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::models::{Budget, Money, Transaction, YearMonth};

/// Share of a budget (in percent) at which spending counts as on track
pub const ON_TRACK_THRESHOLD: f64 = 80.0;

/// How spending compares to a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    /// Below 80% of the budget
    Under,
    /// 80% to 100% of the budget, inclusive
    OnTrack,
    /// Above 100% of the budget
    Over,
}

impl BudgetStatus {
    /// Classify a usage percentage
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 100.0 {
            Self::Over
        } else if percentage >= ON_TRACK_THRESHOLD {
            Self::OnTrack
        } else {
            Self::Under
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Under => write!(f, "under"),
            Self::OnTrack => write!(f, "on-track"),
            Self::Over => write!(f, "over"),
        }
    }
}

/// One budget measured against actual spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetComparison {
    pub category: String,
    pub budgeted: Money,
    pub actual: Money,
    /// Actual as a percentage of budgeted
    pub percentage: f64,
    pub status: BudgetStatus,
}

impl BudgetComparison {
    /// Budget left to spend; negative when over
    pub fn remaining(&self) -> Money {
        self.budgeted - self.actual
    }
}

/// Compare the budgets of `current` with that month's expenses
///
/// Budgets for other months are skipped. The result is ordered by
/// percentage used, highest first.
pub fn budget_comparisons(
    budgets: &[Budget],
    transactions: &[Transaction],
    current: YearMonth,
) -> Vec<BudgetComparison> {
    let mut actual_by_category: HashMap<&str, Money> = HashMap::new();
    for txn in transactions
        .iter()
        .filter(|t| t.is_expense() && t.month() == current)
    {
        *actual_by_category.entry(txn.category.as_str()).or_default() += txn.amount;
    }

    let mut comparisons: Vec<BudgetComparison> = budgets
        .iter()
        .filter(|b| b.month == current)
        .map(|budget| {
            let actual = actual_by_category
                .get(budget.category.as_str())
                .copied()
                .unwrap_or_default();
            let percentage = actual.percent_of(budget.amount);
            BudgetComparison {
                category: budget.category.clone(),
                budgeted: budget.amount,
                actual,
                percentage,
                status: BudgetStatus::from_percentage(percentage),
            }
        })
        .collect();

    comparisons.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    comparisons
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn march() -> YearMonth {
        YearMonth::new(2025, 3).unwrap()
    }

    fn expense(cents: i64, category: &str, date: NaiveDate) -> Transaction {
        Transaction::expense(Money::from_cents(cents), date, "test", category)
    }

    fn in_march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn budget(category: &str, cents: i64, month: YearMonth) -> Budget {
        Budget::new(category, Money::from_cents(cents), month)
    }

    #[test]
    fn test_status_boundaries() {
        assert_eq!(BudgetStatus::from_percentage(0.0), BudgetStatus::Under);
        assert_eq!(BudgetStatus::from_percentage(79.99), BudgetStatus::Under);
        assert_eq!(BudgetStatus::from_percentage(80.0), BudgetStatus::OnTrack);
        assert_eq!(BudgetStatus::from_percentage(100.0), BudgetStatus::OnTrack);
        assert_eq!(BudgetStatus::from_percentage(100.01), BudgetStatus::Over);
    }

    #[test]
    fn test_over_budget_scenario() {
        let transactions = vec![expense(10000, "Food & Dining", in_march(4))];
        let budgets = vec![budget("Food & Dining", 8000, march())];

        let comparisons = budget_comparisons(&budgets, &transactions, march());

        assert_eq!(
            comparisons,
            vec![BudgetComparison {
                category: "Food & Dining".into(),
                budgeted: Money::from_cents(8000),
                actual: Money::from_cents(10000),
                percentage: 125.0,
                status: BudgetStatus::Over,
            }]
        );
        assert_eq!(comparisons[0].remaining(), Money::from_cents(-2000));
    }

    #[test]
    fn test_exact_boundaries_from_money() {
        let transactions = vec![
            expense(8000, "Shopping", in_march(1)),
            expense(10000, "Travel", in_march(1)),
        ];
        let budgets = vec![
            budget("Shopping", 10000, march()),
            budget("Travel", 10000, march()),
        ];

        let comparisons = budget_comparisons(&budgets, &transactions, march());
        assert!(comparisons.iter().all(|c| c.status == BudgetStatus::OnTrack));
    }

    #[test]
    fn test_only_current_month_counts() {
        let transactions = vec![
            expense(5000, "Shopping", in_march(31)),
            expense(9000, "Shopping", NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()),
            expense(9000, "Shopping", NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()),
            Transaction::income(Money::from_cents(9000), in_march(2), "Refund", "Shopping"),
        ];
        let budgets = vec![
            budget("Shopping", 10000, march()),
            budget("Shopping", 1000, march().prev()),
            budget("Travel", 1000, march().next()),
        ];

        let comparisons = budget_comparisons(&budgets, &transactions, march());

        assert_eq!(comparisons.len(), 1);
        assert_eq!(comparisons[0].actual.cents(), 5000);
        assert_eq!(comparisons[0].percentage, 50.0);
        assert_eq!(comparisons[0].status, BudgetStatus::Under);
    }

    #[test]
    fn test_budget_without_spending() {
        let comparisons = budget_comparisons(&[budget("Travel", 5000, march())], &[], march());
        assert_eq!(comparisons[0].actual, Money::zero());
        assert_eq!(comparisons[0].percentage, 0.0);
        assert_eq!(comparisons[0].status, BudgetStatus::Under);
    }

    #[test]
    fn test_sorted_by_percentage_descending() {
        let transactions = vec![
            expense(1000, "A", in_march(1)),
            expense(9500, "B", in_march(1)),
            expense(5000, "C", in_march(1)),
        ];
        let budgets = vec![
            budget("A", 10000, march()),
            budget("B", 10000, march()),
            budget("C", 2500, march()),
        ];

        let comparisons = budget_comparisons(&budgets, &transactions, march());
        let order: Vec<_> = comparisons.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(order, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_no_budgets() {
        let transactions = vec![expense(1000, "A", in_march(1))];
        assert!(budget_comparisons(&[], &transactions, march()).is_empty());
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&BudgetStatus::OnTrack).unwrap(),
            "\"on-track\""
        );
    }
}
