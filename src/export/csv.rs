//! CSV export

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;

/// Column headers, in the order each row is written
pub const CSV_HEADERS: [&str; 5] = ["ID", "Name", "Type", "Amount", "Currency"];

/// Write every record as a CSV row, in list order
pub fn export_expenses_csv<W: Write>(records: &[ExpenseRecord], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for record in records {
        let id = record.id.as_uuid().to_string();
        let amount = format!("{:.2}", record.amount);
        csv_writer
            .write_record([
                id.as_str(),
                record.name.as_str(),
                record.category.as_str(),
                amount.as_str(),
                record.currency_code.as_str(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}
