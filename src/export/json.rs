//! JSON export of the full data set

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, Transaction};
use crate::storage::{Storage, SCHEMA_VERSION};

/// Everything fintrack stores, stamped with version and time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Collection schema version of the records below
    pub schema_version: u32,

    pub exported_at: DateTime<Utc>,

    /// Version of fintrack that wrote the export
    pub app_version: String,

    pub transactions: Vec<Transaction>,

    pub budgets: Vec<Budget>,
}

impl FullExport {
    /// Snapshot the current contents of storage
    pub fn from_storage(storage: &Storage) -> FinanceResult<Self> {
        Ok(Self::new(
            storage.transactions.get_all()?,
            storage.budgets.get_all()?,
        ))
    }

    pub fn new(transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            budgets,
        }
    }
}

/// Write the full data set as JSON
pub fn export_full_json<W: Write>(
    export: &FullExport,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    };
    result.map_err(|e| FinanceError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}
