//! JSON export
//!
//! The export document carries a schema version and some metadata around the
//! records. Records keep their stored wire format.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseRecord};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub metadata: ExportMetadata,
    pub expenses: Vec<ExpenseRecord>,
}

/// Per-section counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub personal_count: usize,
    pub business_count: usize,
}

impl ExpenseExport {
    /// Build an export of `records`, stamped with the current time
    pub fn from_records(records: &[ExpenseRecord]) -> Self {
        let count = |category: &Category| {
            records
                .iter()
                .filter(|record| record.in_category(category.as_str()))
                .count()
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata: ExportMetadata {
                expense_count: records.len(),
                personal_count: count(&Category::Personal),
                business_count: count(&Category::Business),
            },
            expenses: records.to_vec(),
        }
    }
}

/// Write the export document as JSON
pub fn export_expenses_json<W: Write>(
    records: &[ExpenseRecord],
    writer: W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = ExpenseExport::from_records(records);

    let result = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };
    result.map_err(|e| ExpenseError::Export(e.to_string()))
}
