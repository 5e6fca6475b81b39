//! Core data models for iexpense
//!
//! An expense list is a flat sequence of [`ExpenseRecord`] values grouped for
//! display by their [`Category`].

pub mod category;
pub mod expense;
pub mod ids;

pub use category::{Category, CategoryParseError};
pub use expense::{parse_amount, ExpenseRecord};
pub use ids::ExpenseId;
