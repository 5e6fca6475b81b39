//! Storage layer for iexpense
//!
//! Provides the named persistence slots the expense store writes to, backed by
//! JSON files with atomic writes or by memory.

pub mod file_io;
pub mod slots;

pub use file_io::{read_json, write_json_atomic};
pub use slots::{FileSlots, MemorySlots, SlotStorage};
