//! Budget repository for JSON storage
//!
//! Manages loading and saving monthly budgets to budgets.json. A
//! (category, month) pair holds at most one budget.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, BudgetId, BudgetPatch, NewBudget, YearMonth};

use super::file_io::{quarantine, read_json_or_default, remove_file_if_exists, write_json_atomic};
use super::SCHEMA_VERSION;

/// Serializable budget data structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    schema_version: u32,
    #[serde(default)]
    budgets: Vec<Budget>,
}

impl Default for BudgetData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            budgets: Vec::new(),
        }
    }
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> FinanceResult<RwLockReadGuard<'_, Vec<Budget>>> {
        self.budgets
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> FinanceResult<RwLockWriteGuard<'_, Vec<Budget>>> {
        self.budgets
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load budgets from disk, degrading to empty on unreadable data
    pub fn load(&self) -> FinanceResult<()> {
        let mut file_data: BudgetData = read_json_or_default(&self.path);

        if file_data.schema_version > SCHEMA_VERSION {
            quarantine(
                &self.path,
                &format!("unsupported schema version {}", file_data.schema_version),
            );
            file_data = BudgetData::default();
        }

        debug!(
            path = %self.path.display(),
            count = file_data.budgets.len(),
            "loaded budgets"
        );

        *self.write()? = file_data.budgets;
        Ok(())
    }

    fn persist(&self, budgets: &[Budget]) -> FinanceResult<()> {
        let file_data = BudgetData {
            schema_version: SCHEMA_VERSION,
            budgets: budgets.to_vec(),
        };
        if let Err(e) = write_json_atomic(&self.path, &file_data) {
            warn!(path = %self.path.display(), error = %e, "failed to save budgets");
            return Err(e);
        }
        debug!(path = %self.path.display(), count = budgets.len(), "saved budgets");
        Ok(())
    }

    /// Save the current collection to disk
    pub fn save(&self) -> FinanceResult<()> {
        let budgets = self.read()?;
        self.persist(&budgets)
    }

    /// Get all budgets in insertion order
    pub fn get_all(&self) -> FinanceResult<Vec<Budget>> {
        Ok(self.read()?.clone())
    }

    /// Get a budget by ID
    pub fn get(&self, id: BudgetId) -> FinanceResult<Option<Budget>> {
        Ok(self.read()?.iter().find(|b| b.id == id).cloned())
    }

    /// Get the budget for a category in a month
    pub fn get_for_slot(&self, category: &str, month: YearMonth) -> FinanceResult<Option<Budget>> {
        Ok(self
            .read()?
            .iter()
            .find(|b| b.same_slot(category, month))
            .cloned())
    }

    /// Get all budgets for a month
    pub fn get_for_month(&self, month: YearMonth) -> FinanceResult<Vec<Budget>> {
        Ok(self
            .read()?
            .iter()
            .filter(|b| b.month == month)
            .cloned()
            .collect())
    }

    /// Insert a new budget, replacing any budget for the same (category, month)
    pub fn add(&self, fields: NewBudget) -> FinanceResult<Budget> {
        let budget = fields.into_budget();

        let mut budgets = self.write()?;
        let mut next: Vec<_> = budgets
            .iter()
            .filter(|b| !b.same_slot(&budget.category, budget.month))
            .cloned()
            .collect();
        let replaced = budgets.len() - next.len();
        next.push(budget.clone());
        self.persist(&next)?;
        *budgets = next;

        info!(
            id = %budget.id,
            category = %budget.category,
            month = %budget.month,
            replaced,
            "set budget"
        );
        Ok(budget)
    }

    /// Apply a partial update; `None` when no budget has this ID
    ///
    /// If the update moves the budget into a (category, month) slot that is
    /// already taken, the other budget is dropped.
    pub fn update(&self, id: BudgetId, patch: BudgetPatch) -> FinanceResult<Option<Budget>> {
        let mut budgets = self.write()?;
        let Some(existing) = budgets.iter().find(|b| b.id == id) else {
            return Ok(None);
        };

        let mut updated = existing.clone();
        updated.apply(patch);

        let next: Vec<_> = budgets
            .iter()
            .filter(|b| b.id == id || !b.same_slot(&updated.category, updated.month))
            .map(|b| if b.id == id { updated.clone() } else { b.clone() })
            .collect();
        self.persist(&next)?;
        *budgets = next;

        info!(id = %id, "updated budget");
        Ok(Some(updated))
    }

    /// Delete a budget; `false` when no budget has this ID
    pub fn delete(&self, id: BudgetId) -> FinanceResult<bool> {
        let mut budgets = self.write()?;
        let next: Vec<_> = budgets.iter().filter(|b| b.id != id).cloned().collect();
        if next.len() == budgets.len() {
            return Ok(false);
        }

        self.persist(&next)?;
        *budgets = next;

        info!(id = %id, "deleted budget");
        Ok(true)
    }

    /// Remove every budget and the backing file
    pub fn clear(&self) -> FinanceResult<()> {
        let mut budgets = self.write()?;
        remove_file_if_exists(&self.path)?;
        budgets.clear();

        info!("cleared all budgets");
        Ok(())
    }

    /// Count budgets
    pub fn count(&self) -> FinanceResult<usize> {
        Ok(self.read()?.len())
    }
}
