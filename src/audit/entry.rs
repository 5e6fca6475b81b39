//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ExpenseRecord;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Record was appended
    Create,
    /// Record was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Position of the record in the list when the operation happened
    pub position: usize,

    /// The record as it was added or as it was before removal
    pub record: ExpenseRecord,
}

impl AuditEntry {
    /// Entry for a record appended at `position`
    pub fn create(position: usize, record: &ExpenseRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            position,
            record: record.clone(),
        }
    }

    /// Entry for a record removed from `position`
    pub fn delete(position: usize, record: &ExpenseRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            position,
            record: record.clone(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {:6} #{:<3} {} {} ({}, {:.2} {})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.position,
            self.record.id,
            self.record.name,
            self.record.category,
            self.record.amount,
            self.record.currency_code
        )
    }
}
