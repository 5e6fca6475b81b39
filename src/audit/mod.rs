//! Audit logging for iexpense
//!
//! Every record added to or removed from the expense store is appended to a
//! line-delimited JSON log (`audit.log`) with a timestamp and a snapshot of
//! the record. The log is write-only from the store's point of view; the
//! `history` command reads it back.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
