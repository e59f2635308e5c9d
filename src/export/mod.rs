//! Export module for fintrack
//!
//! - CSV: transactions only, for spreadsheets
//! - JSON: full data set, machine-readable
//! - YAML: full data set, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_transactions_csv, CSV_HEADER};
pub use self::json::{export_full_json, FullExport};
pub use self::yaml::export_full_yaml;
