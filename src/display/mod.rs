//! Display formatting for terminal output
//!
//! Shared by the command line and the TUI: amount tiers and currency
//! formatting, plus the plain-text section listing used by `list`.

pub mod amount;
pub mod expense;

pub use amount::{format_currency, AmountTier};
pub use expense::{format_expense_row, format_section, format_sections};
