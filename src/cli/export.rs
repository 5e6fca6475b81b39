//! CLI command for data export

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_expenses_json, export_expenses_yaml};
use crate::models::ExpenseRecord;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per expense
    Csv,
    /// JSON document with export metadata
    Json,
    /// YAML document with export metadata
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle `export`
pub fn handle_export_command(records: &[ExpenseRecord], args: ExportArgs) -> ExpenseResult<()> {
    let file = File::create(&args.output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => export_expenses_csv(records, writer)?,
        ExportFormat::Json => export_expenses_json(records, writer, args.pretty)?,
        ExportFormat::Yaml => export_expenses_yaml(records, writer)?,
    }

    println!(
        "Exported {} expense(s) to: {}",
        records.len(),
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::TempDir;

    #[test]
    fn test_export_each_format_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let records = vec![ExpenseRecord::new("Coffee", Category::Personal, 4.5, "USD")];

        for (format, name) in [
            (ExportFormat::Csv, "out.csv"),
            (ExportFormat::Json, "out.json"),
            (ExportFormat::Yaml, "out.yaml"),
        ] {
            let output = temp_dir.path().join(name);
            let args = ExportArgs {
                output: output.clone(),
                format,
                pretty: false,
            };
            handle_export_command(&records, args).unwrap();

            let contents = std::fs::read_to_string(&output).unwrap();
            assert!(contents.contains("Coffee"), "{:?} export missing record", format);
        }
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let args = ExportArgs {
            output: temp_dir.path().join("missing").join("out.csv"),
            format: ExportFormat::Csv,
            pretty: false,
        };

        let err = handle_export_command(&[], args).unwrap_err();
        assert!(matches!(err, ExpenseError::Export(_)));
    }
}
