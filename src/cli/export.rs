//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv, FullExport};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Transactions only, spreadsheet-friendly
    Csv,
    /// Transactions and budgets, machine-readable
    Json,
    /// Transactions and budgets, human-readable
    Yaml,
}

/// Export to `output`, or to stdout when no path is given
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
    pretty: bool,
) -> FinanceResult<()> {
    match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FinanceError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, format, &mut writer, pretty)?;
            writer
                .flush()
                .map_err(|e| FinanceError::Export(e.to_string()))?;

            let what = match format {
                ExportFormat::Csv => "Transactions",
                ExportFormat::Json | ExportFormat::Yaml => "All data",
            };
            println!("{} exported to: {}", what, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, format, &mut writer, pretty)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    storage: &Storage,
    format: ExportFormat,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    match format {
        ExportFormat::Csv => {
            let transactions = storage.transactions.get_all()?;
            export_transactions_csv(&transactions, writer)
        }
        ExportFormat::Json => export_full_json(&FullExport::from_storage(storage)?, writer, pretty),
        ExportFormat::Yaml => export_full_yaml(&FullExport::from_storage(storage)?, writer),
    }
}
