//! Transaction service
//!
//! Business rules on top of the transaction repository: input cleanup and
//! validation, lookup by full or shortened ID, and filtered listings.

use tracing::debug;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    canonical_category, NewTransaction, Transaction, TransactionId, TransactionPatch,
    TransactionType,
};
use crate::reports::recent_transactions;
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the description
    pub search: Option<String>,
    /// Only income or only expenses
    pub kind: Option<TransactionType>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Match descriptions containing `text`
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Filter by direction
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        match &self.search {
            Some(text) if !text.trim().is_empty() => txn
                .description
                .to_lowercase()
                .contains(&text.trim().to_lowercase()),
            _ => true,
        }
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    ///
    /// Text fields are trimmed and catalog categories take their catalog
    /// spelling. Other categories are kept as typed.
    pub fn create(&self, mut input: NewTransaction) -> FinanceResult<Transaction> {
        input.description = input.description.trim().to_string();
        input.category = normalize_category(input.kind, &input.category);

        input
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.transactions.add(input)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> FinanceResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by full UUID, displayed ID ("txn-1a2b3c4d") or a
    /// unique prefix of either
    pub fn find(&self, identifier: &str) -> FinanceResult<Option<Transaction>> {
        if let Ok(id) = identifier.trim().parse::<TransactionId>() {
            return self.storage.transactions.get(id);
        }

        let mut matches: Vec<_> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| t.id.matches_short(identifier))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(FinanceError::Validation(format!(
                "'{}' matches {} transactions; use more characters of the ID",
                identifier, n
            ))),
        }
    }

    /// Like [`find`](Self::find), but a missing transaction is an error
    pub fn resolve(&self, identifier: &str) -> FinanceResult<Transaction> {
        self.find(identifier)?
            .ok_or_else(|| FinanceError::transaction_not_found(identifier))
    }

    /// List transactions newest date first
    pub fn list(&self, filter: TransactionFilter) -> FinanceResult<Vec<Transaction>> {
        let mut transactions: Vec<_> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();

        // Stable sort: same-day entries keep insertion order
        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        debug!(count = transactions.len(), "listed transactions");
        Ok(transactions)
    }

    /// Every stored transaction, in insertion order
    pub fn all(&self) -> FinanceResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// The most recently recorded transactions
    pub fn recent(&self, count: usize) -> FinanceResult<Vec<Transaction>> {
        Ok(recent_transactions(&self.storage.transactions.get_all()?, count))
    }

    /// Apply a partial update
    pub fn update(
        &self,
        id: TransactionId,
        mut patch: TransactionPatch,
    ) -> FinanceResult<Transaction> {
        let existing = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;

        if patch.is_empty() {
            return Err(FinanceError::Validation("Nothing to update".into()));
        }

        if let Some(description) = patch.description.as_mut() {
            *description = description.trim().to_string();
        }
        if let Some(category) = patch.category.as_mut() {
            *category = normalize_category(patch.kind.unwrap_or(existing.kind), category);
        }

        let mut preview = existing;
        preview.apply(patch.clone());
        preview
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage
            .transactions
            .update(id, patch)?
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))
    }

    /// Delete a transaction, returning what was removed
    pub fn delete(&self, id: TransactionId) -> FinanceResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.delete(id)?;
        Ok(txn)
    }

    /// Remove every transaction; returns how many there were
    pub fn clear(&self) -> FinanceResult<usize> {
        let count = self.storage.transactions.count()?;
        self.storage.transactions.clear()?;
        Ok(count)
    }

    /// Count transactions
    pub fn count(&self) -> FinanceResult<usize> {
        self.storage.transactions.count()
    }
}

fn normalize_category(kind: TransactionType, category: &str) -> String {
    canonical_category(kind, category)
        .map(str::to_string)
        .unwrap_or_else(|| category.trim().to_string())
}
