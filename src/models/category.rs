//! Expense categories
//!
//! Only `Personal` and `Business` are ever displayed, but the stored field is
//! free text: anything else loads as [`Category::Other`] and is written back
//! unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grouping tag of an expense record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Personal,
    Business,
    /// A tag not produced by this application
    Other(String),
}

impl Category {
    /// The displayed sections, in display order
    pub const SECTIONS: [Category; 2] = [Category::Personal, Category::Business];

    /// The stored string for this category
    pub fn as_str(&self) -> &str {
        match self {
            Self::Personal => "Personal",
            Self::Business => "Business",
            Self::Other(tag) => tag,
        }
    }

    /// Whether records with this category appear in a section
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// The other known category (used by the add form toggle)
    pub fn toggled(&self) -> Self {
        match self {
            Self::Personal => Self::Business,
            Self::Business | Self::Other(_) => Self::Personal,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Personal
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Personal" => Self::Personal,
            "Business" => Self::Business,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses user input into one of the two known categories (case-insensitive)
impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "personal" | "p" => Ok(Self::Personal),
            "business" | "b" => Ok(Self::Business),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

/// Error for input that names neither known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}' (expected Personal or Business)",
            self.0
        )
    }
}

impl std::error::Error for CategoryParseError {}
