//! Named key/value persistence slots
//!
//! A slot holds one opaque blob under a name. The expense list lives in a
//! single slot; what the blob means is up to the caller.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};

use super::file_io::{read_bytes, write_bytes_atomic};

/// A local key/value persistence facility
pub trait SlotStorage {
    /// Read the blob stored under `key`, or `None` if the slot is empty
    fn read_slot(&self, key: &str) -> ExpenseResult<Option<Vec<u8>>>;

    /// Store `bytes` under `key`, replacing any previous value
    fn write_slot(&self, key: &str, bytes: &[u8]) -> ExpenseResult<()>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for &S {
    fn read_slot(&self, key: &str) -> ExpenseResult<Option<Vec<u8>>> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, bytes: &[u8]) -> ExpenseResult<()> {
        (**self).write_slot(key, bytes)
    }
}

/// Slots stored as `<dir>/<key>.json` files
#[derive(Debug, Clone)]
pub struct FileSlots {
    dir: PathBuf,
}

impl FileSlots {
    /// Create slots rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File backing the slot `key`
    pub fn slot_path(&self, key: &str) -> ExpenseResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl SlotStorage for FileSlots {
    fn read_slot(&self, key: &str) -> ExpenseResult<Option<Vec<u8>>> {
        read_bytes(self.slot_path(key)?)
    }

    fn write_slot(&self, key: &str, bytes: &[u8]) -> ExpenseResult<()> {
        let path = self.slot_path(key)?;
        tracing::debug!(slot = key, bytes = bytes.len(), "writing slot");
        write_bytes_atomic(path, bytes)
    }
}

/// Slot names become file names, so path separators are rejected
fn validate_key(key: &str) -> ExpenseResult<()> {
    let invalid = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\'])
        || key.contains('\0');
    if invalid {
        return Err(ExpenseError::Storage(format!("Invalid slot name: {:?}", key)));
    }
    Ok(())
}

/// Slots held in memory for the lifetime of the value
#[derive(Debug, Default)]
pub struct MemorySlots {
    slots: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemorySlots {
    /// Create an empty set of slots
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot
    pub fn with_slot(self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.slots.borrow_mut().insert(key.into(), bytes.into());
        self
    }

    /// Snapshot of a slot's current contents
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.slots.borrow().get(key).cloned()
    }
}

impl SlotStorage for MemorySlots {
    fn read_slot(&self, key: &str) -> ExpenseResult<Option<Vec<u8>>> {
        Ok(self.get(key))
    }

    fn write_slot(&self, key: &str, bytes: &[u8]) -> ExpenseResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
