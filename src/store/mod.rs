//! The expense store
//!
//! [`ExpenseStore`] owns the canonical, insertion-ordered list of expense
//! records. It loads the list from a persistence slot when opened and, after
//! every mutation, updates memory, notifies subscribers, then writes the whole
//! list back to the slot.
//!
//! Load and write failures degrade silently: an unreadable or malformed slot
//! opens as an empty list, and a failed write leaves the in-memory list as the
//! source of truth for the rest of the session. Both are logged with
//! `tracing`.
//!
//! # Example
//!
//! ```
//! use iexpense::models::{Category, ExpenseRecord};
//! use iexpense::storage::MemorySlots;
//! use iexpense::store::{ExpenseStore, DEFAULT_SLOT_KEY};
//!
//! let mut store = ExpenseStore::open(MemorySlots::new(), DEFAULT_SLOT_KEY);
//! store.add(ExpenseRecord::new("Coffee", Category::Personal, 4.50, "USD")).unwrap();
//!
//! assert_eq!(store.personal().len(), 1);
//! assert!(store.business().is_empty());
//! ```

mod observers;

pub use observers::{Observer, StoreEvent, SubscriptionId};

use std::collections::BTreeSet;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseRecord};
use crate::storage::SlotStorage;

use observers::Observers;

/// Slot name the expense list is stored under
pub const DEFAULT_SLOT_KEY: &str = "Items";

/// Observable, auto-persisting list of expense records
#[derive(Debug)]
pub struct ExpenseStore<S: SlotStorage> {
    slots: S,
    slot_key: String,
    records: Vec<ExpenseRecord>,
    observers: Observers,
    audit: Option<AuditLogger>,
}

impl<S: SlotStorage> ExpenseStore<S> {
    /// Open the store, loading the list from `slot_key`
    ///
    /// Never fails: a missing slot, a read error, or data that doesn't match
    /// the record schema all yield an empty list.
    pub fn open(slots: S, slot_key: impl Into<String>) -> Self {
        let slot_key = slot_key.into();
        let records = load_records(&slots, &slot_key);

        Self {
            slots,
            slot_key,
            records,
            observers: Observers::default(),
            audit: None,
        }
    }

    /// Append an audit entry for every record added or removed
    pub fn with_audit(mut self, audit: AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    /// The full list in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `position`, if any
    pub fn get(&self, position: usize) -> Option<&ExpenseRecord> {
        self.records.get(position)
    }

    /// The underlying slot storage
    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Name of the slot the list is persisted under
    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    /// Records whose stored category equals `category` exactly, in list order
    pub fn by_category(&self, category: &str) -> Vec<ExpenseRecord> {
        self.records
            .iter()
            .filter(|record| record.in_category(category))
            .cloned()
            .collect()
    }

    /// Records in the Personal section
    pub fn personal(&self) -> Vec<ExpenseRecord> {
        self.by_category(Category::Personal.as_str())
    }

    /// Records in the Business section
    pub fn business(&self) -> Vec<ExpenseRecord> {
        self.by_category(Category::Business.as_str())
    }

    /// Translate row indices within a category section into list positions
    ///
    /// Rows past the end of the section are rejected with `InvalidPosition`
    /// measured against the section length.
    pub fn section_positions<I>(&self, category: &str, rows: I) -> ExpenseResult<BTreeSet<usize>>
    where
        I: IntoIterator<Item = usize>,
    {
        let section: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.in_category(category))
            .map(|(position, _)| position)
            .collect();

        rows.into_iter()
            .map(|row| {
                section
                    .get(row)
                    .copied()
                    .ok_or(ExpenseError::InvalidPosition {
                        position: row,
                        len: section.len(),
                    })
            })
            .collect()
    }

    /// Append a record
    ///
    /// Records with a non-finite amount are rejected: JSON has no encoding for
    /// them, and one such record would make the whole saved list unreadable.
    pub fn add(&mut self, record: ExpenseRecord) -> ExpenseResult<()> {
        if !record.amount.is_finite() {
            tracing::warn!(id = %record.id, amount = record.amount, "rejecting non-finite amount");
            return Err(ExpenseError::Validation(format!(
                "'{}' has a non-finite amount",
                record.name
            )));
        }

        let position = self.records.len();
        tracing::debug!(id = %record.id, position, "adding expense");

        self.records.push(record.clone());

        let audit = AuditEntry::create(position, &record);
        self.observers
            .notify(&StoreEvent::Added { position, record }, &self.records);
        self.persist();
        self.write_audit(&[audit]);
        Ok(())
    }

    /// Remove the records at `positions`, all relative to the current list
    ///
    /// Duplicate positions collapse. If any position is out of range the
    /// whole batch is rejected and nothing changes. An empty batch is a no-op
    /// that neither notifies nor persists. Returns the removed records in
    /// ascending position order.
    pub fn remove_at<I>(&mut self, positions: I) -> ExpenseResult<Vec<ExpenseRecord>>
    where
        I: IntoIterator<Item = usize>,
    {
        let positions: BTreeSet<usize> = positions.into_iter().collect();
        if positions.is_empty() {
            return Ok(Vec::new());
        }

        let len = self.records.len();
        if let Some(&position) = positions.range(len..).next() {
            tracing::debug!(position, len, "rejecting out-of-range removal");
            return Err(ExpenseError::InvalidPosition { position, len });
        }

        let mut removed = Vec::with_capacity(positions.len());
        let mut kept = Vec::with_capacity(len - positions.len());
        for (position, record) in std::mem::take(&mut self.records).into_iter().enumerate() {
            if positions.contains(&position) {
                removed.push((position, record));
            } else {
                kept.push(record);
            }
        }
        self.records = kept;
        tracing::debug!(count = removed.len(), "removed expenses");

        let audit: Vec<_> = removed
            .iter()
            .map(|(position, record)| AuditEntry::delete(*position, record))
            .collect();
        let records: Vec<_> = removed.iter().map(|(_, record)| record.clone()).collect();

        self.observers
            .notify(&StoreEvent::Removed { removed }, &self.records);
        self.persist();
        self.write_audit(&audit);

        Ok(records)
    }

    /// Register a callback run after every mutation, before persistence
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &[ExpenseRecord]) + 'static,
    {
        self.observers.subscribe(Box::new(observer))
    }

    /// Remove a callback; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Write the full list to the slot; failures are logged and swallowed
    fn persist(&self) {
        let bytes = match serde_json::to_vec(&self.records) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize expenses; keeping in-memory state");
                return;
            }
        };

        if let Err(e) = self.slots.write_slot(&self.slot_key, &bytes) {
            tracing::warn!(
                slot = %self.slot_key,
                error = %e,
                "failed to persist expenses; keeping in-memory state"
            );
        }
    }

    fn write_audit(&self, entries: &[AuditEntry]) {
        if let Some(audit) = &self.audit {
            if let Err(e) = audit.log_batch(entries) {
                tracing::warn!(error = %e, "failed to write audit log");
            }
        }
    }
}

fn load_records<S: SlotStorage>(slots: &S, key: &str) -> Vec<ExpenseRecord> {
    let bytes = match slots.read_slot(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            tracing::debug!(slot = key, "no saved expenses; starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(slot = key, error = %e, "failed to read saved expenses; starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_slice::<Vec<ExpenseRecord>>(&bytes) {
        Ok(records) => {
            tracing::debug!(slot = key, count = records.len(), "loaded expenses");
            records
        }
        Err(e) => {
            tracing::warn!(slot = key, error = %e, "saved expenses are unreadable; starting empty");
            Vec::new()
        }
    }
}
