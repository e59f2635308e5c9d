//! Headline totals and recent activity

use serde::Serialize;

use crate::models::{Money, Transaction, TransactionType};

/// Totals across a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FinancialSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub net_income: Money,
    pub transaction_count: usize,
}

impl FinancialSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let total_income = total_for(transactions, TransactionType::Income);
        let total_expenses = total_for(transactions, TransactionType::Expense);
        Self {
            total_income,
            total_expenses,
            net_income: total_income - total_expenses,
            transaction_count: transactions.len(),
        }
    }

    /// Share of income not spent, in percent
    ///
    /// `None` when there is no income to measure against.
    pub fn savings_rate(&self) -> Option<f64> {
        if self.total_income.is_zero() {
            None
        } else {
            Some(self.net_income.percent_of(self.total_income))
        }
    }
}

/// Sum of all transactions of one type
pub fn total_for(transactions: &[Transaction], kind: TransactionType) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// The `count` most recently recorded transactions, newest first
pub fn recent_transactions(transactions: &[Transaction], count: usize) -> Vec<Transaction> {
    let mut recent = transactions.to_vec();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(count);
    recent
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    #[test]
    fn test_summary_totals() {
        let transactions = vec![
            Transaction::income(Money::from_cents(100000), date(), "Salary", "Salary"),
            Transaction::expense(Money::from_cents(70000), date(), "Rent", "Bills & Utilities"),
        ];

        let summary = FinancialSummary::from_transactions(&transactions);
        assert_eq!(summary.total_income.cents(), 100000);
        assert_eq!(summary.total_expenses.cents(), 70000);
        assert_eq!(summary.net_income.cents(), 30000);
        assert_eq!(summary.transaction_count, 2);
        assert_eq!(summary.savings_rate(), Some(30.0));
    }

    #[test]
    fn test_savings_rate_without_income() {
        let transactions = vec![Transaction::expense(
            Money::from_cents(500),
            date(),
            "Snack",
            "Food & Dining",
        )];
        let summary = FinancialSummary::from_transactions(&transactions);
        assert_eq!(summary.savings_rate(), None);
        assert_eq!(summary.net_income.cents(), -500);

        assert_eq!(FinancialSummary::from_transactions(&[]), FinancialSummary::default());
    }

    #[test]
    fn test_recent_transactions() {
        let mut transactions: Vec<_> = (0..7)
            .map(|i| {
                Transaction::expense(Money::from_cents(100 + i), date(), format!("T{}", i), "Other")
            })
            .collect();
        for (i, txn) in transactions.iter_mut().enumerate() {
            txn.created_at = txn.created_at + Duration::seconds(i as i64);
        }

        let recent = recent_transactions(&transactions, 5);
        let names: Vec<_> = recent.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["T6", "T5", "T4", "T3", "T2"]);
        assert_eq!(transactions[0].description, "T0");
    }
}
