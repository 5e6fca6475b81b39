//! Expense record model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use crate::error::{ExpenseError, ExpenseResult};

/// A single expense line item
///
/// The wire format uses `type` for the category and `currencyCode` for the
/// currency, and is shared with lists written by earlier versions of the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    /// Unique identifier, fixed at creation
    pub id: ExpenseId,

    /// Free-text label
    pub name: String,

    /// Grouping tag
    #[serde(rename = "type")]
    pub category: Category,

    /// Signed amount; zero and negative values are accepted
    pub amount: f64,

    /// Currency code used for display formatting only
    pub currency_code: String,
}

impl ExpenseRecord {
    /// Create a record with a fresh id
    pub fn new(
        name: impl Into<String>,
        category: Category,
        amount: f64,
        currency_code: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            category,
            amount,
            currency_code: currency_code.into(),
        }
    }

    /// Whether this record belongs to the section with the given stored name
    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_str() == category
    }
}

/// Parse a user-entered amount
///
/// Any finite number is accepted, including zero and negative values.
pub fn parse_amount(input: &str) -> ExpenseResult<f64> {
    let trimmed = input.trim();
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| ExpenseError::Validation(format!("'{}' is not a number", trimmed)))?;

    if !amount.is_finite() {
        return Err(ExpenseError::Validation(format!(
            "'{}' is not a finite amount",
            trimmed
        )));
    }
    Ok(amount)
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {:.2} {})",
            self.name, self.category, self.amount, self.currency_code
        )
    }
}
