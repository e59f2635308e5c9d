//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. Every
//! mutation writes the whole collection first and only then replaces the
//! in-memory copy, so a failed write leaves memory matching disk.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{NewTransaction, Transaction, TransactionId, TransactionPatch};

use super::file_io::{quarantine, read_json_or_default, remove_file_if_exists, write_json_atomic};
use super::SCHEMA_VERSION;

/// Serializable transaction data structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    schema_version: u32,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl Default for TransactionData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            transactions: Vec::new(),
        }
    }
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> FinanceResult<RwLockReadGuard<'_, Vec<Transaction>>> {
        self.data
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> FinanceResult<RwLockWriteGuard<'_, Vec<Transaction>>> {
        self.data
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load transactions from disk
    ///
    /// Unreadable files and files from a newer schema degrade to an empty
    /// collection; see [`read_json_or_default`].
    pub fn load(&self) -> FinanceResult<()> {
        let mut file_data: TransactionData = read_json_or_default(&self.path);

        if file_data.schema_version > SCHEMA_VERSION {
            quarantine(
                &self.path,
                &format!("unsupported schema version {}", file_data.schema_version),
            );
            file_data = TransactionData::default();
        }

        debug!(
            path = %self.path.display(),
            count = file_data.transactions.len(),
            "loaded transactions"
        );

        *self.write()? = file_data.transactions;
        Ok(())
    }

    fn persist(&self, transactions: &[Transaction]) -> FinanceResult<()> {
        let file_data = TransactionData {
            schema_version: SCHEMA_VERSION,
            transactions: transactions.to_vec(),
        };
        if let Err(e) = write_json_atomic(&self.path, &file_data) {
            warn!(path = %self.path.display(), error = %e, "failed to save transactions");
            return Err(e);
        }
        debug!(path = %self.path.display(), count = transactions.len(), "saved transactions");
        Ok(())
    }

    /// Save the current collection to disk
    pub fn save(&self) -> FinanceResult<()> {
        let data = self.read()?;
        self.persist(&data)
    }

    /// Get all transactions in insertion order
    pub fn get_all(&self) -> FinanceResult<Vec<Transaction>> {
        Ok(self.read()?.clone())
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> FinanceResult<Option<Transaction>> {
        Ok(self.read()?.iter().find(|t| t.id == id).cloned())
    }

    /// Insert a new transaction, assigning its ID and timestamps
    pub fn add(&self, fields: NewTransaction) -> FinanceResult<Transaction> {
        let txn = fields.into_transaction();

        let mut data = self.write()?;
        let mut next = data.clone();
        next.push(txn.clone());
        self.persist(&next)?;
        *data = next;

        info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "added transaction");
        Ok(txn)
    }

    /// Apply a partial update; `None` when no transaction has this ID
    pub fn update(
        &self,
        id: TransactionId,
        patch: TransactionPatch,
    ) -> FinanceResult<Option<Transaction>> {
        let mut data = self.write()?;
        let Some(index) = data.iter().position(|t| t.id == id) else {
            return Ok(None);
        };

        let mut next = data.clone();
        next[index].apply(patch);
        let updated = next[index].clone();
        self.persist(&next)?;
        *data = next;

        info!(id = %id, "updated transaction");
        Ok(Some(updated))
    }

    /// Delete a transaction; `false` when no transaction has this ID
    pub fn delete(&self, id: TransactionId) -> FinanceResult<bool> {
        let mut data = self.write()?;
        let next: Vec<_> = data.iter().filter(|t| t.id != id).cloned().collect();
        if next.len() == data.len() {
            return Ok(false);
        }

        self.persist(&next)?;
        *data = next;

        info!(id = %id, "deleted transaction");
        Ok(true)
    }

    /// Remove every transaction and the backing file
    pub fn clear(&self) -> FinanceResult<()> {
        let mut data = self.write()?;
        remove_file_if_exists(&self.path)?;
        data.clear();

        info!("cleared all transactions");
        Ok(())
    }

    /// Count transactions
    pub fn count(&self) -> FinanceResult<usize> {
        Ok(self.read()?.len())
    }
}
