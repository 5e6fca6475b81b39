//! CLI command handlers
//!
//! Bridges clap argument parsing with the expense store. Handlers print their
//! results to stdout and return errors for `main` to report.

pub mod expense;
pub mod export;
pub mod history;

pub use expense::{
    handle_add_command, handle_delete_command, handle_list_command, AddArgs, DeleteArgs, ListArgs,
};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use history::{handle_history_command, HistoryArgs};
