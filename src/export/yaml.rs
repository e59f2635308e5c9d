//! YAML export of the full data set
//!
//! Same content as the JSON export, in a form that is easier to read.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};

use super::json::FullExport;

/// Write the full data set as YAML with a short comment header
pub fn export_full_yaml<W: Write>(export: &FullExport, writer: &mut W) -> FinanceResult<()> {
    let header = format!(
        "# fintrack export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at.to_rfc3339(),
        export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Money, YearMonth};

    #[test]
    fn test_yaml_export() {
        let export = FullExport::new(
            Vec::new(),
            vec![Budget::new(
                "Travel",
                Money::from_cents(20000),
                YearMonth::new(2025, 7).unwrap(),
            )],
        );

        let mut buffer = Vec::new();
        export_full_yaml(&export, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("# fintrack export"));
        assert!(output.contains("schema_version: 1"));
        assert!(output.contains("category: Travel"));
        assert!(output.contains("2025-07"));

        let parsed: FullExport = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed.budgets.len(), 1);
    }
}
