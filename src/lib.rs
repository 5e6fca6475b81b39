//! iExpense - personal and business expense tracker
//!
//! This library provides the core of the iExpense application: an observable,
//! auto-persisting list of expense records grouped into Personal and Business
//! sections, with a command line and a terminal UI on top.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records and categories
//! - `storage`: Key/value persistence slots and atomic file writes
//! - `store`: The expense store and its change notifications
//! - `audit`: Audit logging system
//! - `display`: Amount tiers and terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//! - `tui`: Terminal user interface
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use iexpense::config::{ExpensePaths, Settings};
//! use iexpense::storage::FileSlots;
//! use iexpense::store::ExpenseStore;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load(&paths)?;
//! let store = ExpenseStore::open(FileSlots::new(paths.data_dir()), &settings.slot_key);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod storage;
pub mod store;
pub mod tui;

pub use error::ExpenseError;
