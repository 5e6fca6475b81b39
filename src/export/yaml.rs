//! YAML export

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;
use crate::models::ExpenseRecord;

/// Write the export document as YAML, preceded by a comment header
pub fn export_expenses_yaml<W: Write>(records: &[ExpenseRecord], mut writer: W) -> ExpenseResult<()> {
    let export = ExpenseExport::from_records(records);

    write_header(&mut writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))
}

fn write_header<W: Write>(writer: &mut W, export: &ExpenseExport) -> std::io::Result<()> {
    writeln!(writer, "# iExpense export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_yaml_export_parses_back() {
        let records = vec![
            ExpenseRecord::new("Coffee", Category::Personal, 4.5, "USD"),
            ExpenseRecord::new("Hosting", Category::Business, 12.0, "USD"),
        ];

        let mut output = Vec::new();
        export_expenses_yaml(&records, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# iExpense export\n"));
        let parsed: ExpenseExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.expenses, records);
        assert_eq!(parsed.metadata.expense_count, 2);
    }
}
