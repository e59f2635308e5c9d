//! Reports for fintrack
//!
//! Pure aggregations over transactions and budgets. Nothing here touches
//! storage, so every report can be run over any slice of records.

pub mod budget;
pub mod category;
pub mod insights;
pub mod monthly;
pub mod summary;

pub use budget::{budget_comparisons, BudgetComparison, BudgetStatus, ON_TRACK_THRESHOLD};
pub use category::{
    category_expenses, color_for_rank, top_categories, CategoryExpense, CATEGORY_COLORS,
};
pub use insights::{
    insights_from, spending_insights, InsightKind, SpendingInsight, MAX_INSIGHTS,
};
pub use monthly::{monthly_expenses, MonthlyExpense};
pub use summary::{recent_transactions, total_for, FinancialSummary};
