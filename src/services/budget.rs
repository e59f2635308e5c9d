//! Budget service
//!
//! Setting, editing and listing monthly category budgets. There is at most
//! one budget per (category, month); setting another replaces it.

use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    canonical_category, Budget, BudgetId, BudgetPatch, NewBudget, TransactionType, YearMonth,
};
use crate::storage::Storage;

/// How many months the month picker offers, starting with the current one
pub const MONTH_OPTION_COUNT: usize = 12;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the budget for a category in a month
    pub fn set(&self, mut input: NewBudget) -> FinanceResult<Budget> {
        input.category = normalize_category(&input.category);
        input
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.budgets.add(input)
    }

    /// Get a budget by ID
    pub fn get(&self, id: BudgetId) -> FinanceResult<Option<Budget>> {
        self.storage.budgets.get(id)
    }

    /// Find a budget by ID (full, displayed or unique prefix)
    pub fn find(&self, identifier: &str) -> FinanceResult<Option<Budget>> {
        if let Ok(id) = identifier.trim().parse::<BudgetId>() {
            return self.storage.budgets.get(id);
        }

        let mut matches: Vec<_> = self
            .storage
            .budgets
            .get_all()?
            .into_iter()
            .filter(|b| b.id.matches_short(identifier))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(FinanceError::Validation(format!(
                "'{}' matches {} budgets; use more characters of the ID",
                identifier, n
            ))),
        }
    }

    /// Find a budget by category within `month`, falling back to its ID
    ///
    /// The category slot wins, so a category such as "Cafe" is never
    /// mistaken for a short ID that happens to start with those letters.
    pub fn resolve(&self, identifier: &str, month: YearMonth) -> FinanceResult<Budget> {
        if let Some(budget) = self
            .storage
            .budgets
            .get_for_slot(&normalize_category(identifier), month)?
        {
            return Ok(budget);
        }
        self.find(identifier)?
            .ok_or_else(|| FinanceError::budget_not_found(identifier))
    }

    /// All budgets, newest month first, then by category
    pub fn list(&self) -> FinanceResult<Vec<Budget>> {
        let mut budgets = self.storage.budgets.get_all()?;
        budgets.sort_by(|a, b| {
            b.month
                .cmp(&a.month)
                .then_with(|| a.category.cmp(&b.category))
        });
        Ok(budgets)
    }

    /// Every stored budget, in insertion order
    pub fn all(&self) -> FinanceResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    /// Budgets for one month, by category
    pub fn for_month(&self, month: YearMonth) -> FinanceResult<Vec<Budget>> {
        let mut budgets = self.storage.budgets.get_for_month(month)?;
        budgets.sort_by(|a, b| a.category.cmp(&b.category));
        Ok(budgets)
    }

    /// Apply a partial update
    ///
    /// Moving a budget onto a (category, month) that already has one
    /// replaces the other budget.
    pub fn update(&self, id: BudgetId, mut patch: BudgetPatch) -> FinanceResult<Budget> {
        let existing = self
            .storage
            .budgets
            .get(id)?
            .ok_or_else(|| FinanceError::budget_not_found(id.to_string()))?;

        if patch.category.is_none() && patch.amount.is_none() && patch.month.is_none() {
            return Err(FinanceError::Validation("Nothing to update".into()));
        }

        if let Some(category) = patch.category.as_mut() {
            *category = normalize_category(category);
        }

        let mut preview = existing;
        preview.apply(patch.clone());
        preview
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage
            .budgets
            .update(id, patch)?
            .ok_or_else(|| FinanceError::budget_not_found(id.to_string()))
    }

    /// Delete a budget, returning what was removed
    pub fn delete(&self, id: BudgetId) -> FinanceResult<Budget> {
        let budget = self
            .storage
            .budgets
            .get(id)?
            .ok_or_else(|| FinanceError::budget_not_found(id.to_string()))?;

        self.storage.budgets.delete(id)?;
        Ok(budget)
    }

    /// Remove every budget; returns how many there were
    pub fn clear(&self) -> FinanceResult<usize> {
        let count = self.storage.budgets.count()?;
        self.storage.budgets.clear()?;
        Ok(count)
    }
}

/// Months offered when picking a budget month: `from` and the 11 after it
pub fn month_options(from: YearMonth) -> Vec<YearMonth> {
    from.upcoming(MONTH_OPTION_COUNT)
}

fn normalize_category(category: &str) -> String {
    canonical_category(TransactionType::Expense, category)
        .map(str::to_string)
        .unwrap_or_else(|| category.trim().to_string())
}
