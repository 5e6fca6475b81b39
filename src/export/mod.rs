//! Export of the expense list
//!
//! - CSV: one row per record (spreadsheet-compatible)
//! - JSON: the records wrapped with export metadata
//! - YAML: the same document as JSON, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_expenses_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_expenses_yaml;
