//! Storage layer for fintrack
//!
//! Provides JSON file storage with atomic writes. Each collection lives in
//! its own file and is loaded and saved as one unit.

pub mod budgets;
pub mod file_io;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, read_json_or_default, write_json_atomic};
pub use transactions::TransactionRepository;

use crate::config::paths::FinancePaths;
use crate::error::FinanceError;

/// Version written into every collection file
pub const SCHEMA_VERSION: u32 = 1;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinancePaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinancePaths) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FinanceError> {
        self.transactions.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinanceError> {
        self.transactions.save()?;
        self.budgets.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert_eq!(storage.budgets.count().unwrap(), 0);
    }

    #[test]
    fn test_save_all_writes_versioned_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        storage.save_all().unwrap();

        let raw: serde_json::Value = read_json(paths.budgets_file()).unwrap();
        assert_eq!(raw["schema_version"], SCHEMA_VERSION);
        assert_eq!(raw["budgets"], serde_json::json!([]));
    }
}
