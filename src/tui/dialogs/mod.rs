//! Modal dialogs

pub mod add_expense;
pub mod confirm;
pub mod help;
