//! Monthly totals
//!
//! Income and expense totals per calendar month, oldest month first. This
//! is the data behind the monthly bar chart.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Money, Transaction, TransactionType, YearMonth};

/// Income and expenses for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyExpense {
    pub month: YearMonth,
    pub total_expenses: Money,
    pub total_income: Money,
}

impl MonthlyExpense {
    /// Income minus expenses for the month
    pub fn net(&self) -> Money {
        self.total_income - self.total_expenses
    }
}

/// Sum transactions per month, ordered chronologically
///
/// Months with no transactions are not filled in.
pub fn monthly_expenses(transactions: &[Transaction]) -> Vec<MonthlyExpense> {
    let mut by_month: BTreeMap<YearMonth, (Money, Money)> = BTreeMap::new();

    for txn in transactions {
        let entry = by_month.entry(txn.month()).or_default();
        match txn.kind {
            TransactionType::Expense => entry.0 += txn.amount,
            TransactionType::Income => entry.1 += txn.amount,
        }
    }

    by_month
        .into_iter()
        .map(|(month, (total_expenses, total_income))| MonthlyExpense {
            month,
            total_expenses,
            total_income,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cents(c: i64) -> Money {
        Money::from_cents(c)
    }

    #[test]
    fn test_empty_input() {
        assert!(monthly_expenses(&[]).is_empty());
    }

    #[test]
    fn test_huge_amounts_saturate_instead_of_overflowing() {
        let huge = Money::parse("50000000000000000").unwrap();
        let transactions = vec![
            Transaction::expense(huge, date(2025, 2, 1), "Castle", "Home & Garden"),
            Transaction::expense(huge, date(2025, 2, 2), "Moat", "Home & Garden"),
        ];

        let months = monthly_expenses(&transactions);
        assert_eq!(months.len(), 1);
        assert_eq!(months[0].total_expenses, cents(i64::MAX));
    }

    #[test]
    fn test_groups_by_month_in_chronological_order() {
        let transactions = vec![
            Transaction::expense(cents(3000), date(2025, 1, 20), "Dinner", "Food & Dining"),
            Transaction::income(cents(500000), date(2024, 12, 31), "Salary", "Salary"),
            Transaction::expense(cents(1200), date(2025, 1, 2), "Bus pass", "Transportation"),
            Transaction::expense(cents(800), date(2024, 12, 1), "Coffee", "Food & Dining"),
            Transaction::income(cents(20000), date(2025, 1, 5), "Refund", "Refunds"),
        ];

        let months = monthly_expenses(&transactions);

        assert_eq!(
            months,
            vec![
                MonthlyExpense {
                    month: YearMonth::new(2024, 12).unwrap(),
                    total_expenses: cents(800),
                    total_income: cents(500000),
                },
                MonthlyExpense {
                    month: YearMonth::new(2025, 1).unwrap(),
                    total_expenses: cents(4200),
                    total_income: cents(20000),
                },
            ]
        );
        assert_eq!(months[1].net(), cents(15800));
    }

    #[test]
    fn test_same_month_different_years_stay_apart() {
        let transactions = vec![
            Transaction::expense(cents(100), date(2024, 3, 1), "A", "Other"),
            Transaction::expense(cents(200), date(2025, 3, 1), "B", "Other"),
        ];

        let months = monthly_expenses(&transactions);
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].month, YearMonth::new(2024, 3).unwrap());
    }

    #[test]
    fn test_totals_match_input_sums() {
        let transactions = vec![
            Transaction::expense(cents(1999), date(2025, 2, 3), "A", "Shopping"),
            Transaction::expense(cents(1), date(2025, 4, 3), "B", "Shopping"),
            Transaction::income(cents(12345), date(2025, 2, 9), "C", "Salary"),
            Transaction::income(cents(55), date(2025, 6, 9), "D", "Gifts"),
        ];

        let months = monthly_expenses(&transactions);
        let expenses: Money = months.iter().map(|m| m.total_expenses).sum();
        let income: Money = months.iter().map(|m| m.total_income).sum();

        assert_eq!(expenses, cents(2000));
        assert_eq!(income, cents(12400));
    }
}
