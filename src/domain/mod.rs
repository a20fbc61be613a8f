//! Domain models and business logic for pattern matching.
//!
//! This module contains the three pattern classes the redaction engine
//! detects in contract text: email addresses, dates, and organizational
//! entities carrying a legal suffix.

pub mod date;
pub mod email;
pub mod entity;

pub use date::DateMatcher;
pub use email::EmailMatcher;
pub use entity::EntityMatcher;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Category of identifying text, in the order the engine processes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Email,
    Date,
    Entity,
}

impl Category {
    /// All categories in processing order.
    pub const ALL: [Category; 3] = [Category::Email, Category::Date, Category::Entity];

    /// Tag used inside placeholder tokens (`EMAIL` in `[EMAIL_1]`).
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Email => "EMAIL",
            Category::Date => "DATE",
            Category::Entity => "ENTITY",
        }
    }

    /// Parses a placeholder tag back into a category.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "EMAIL" => Some(Category::Email),
            "DATE" => Some(Category::Date),
            "ENTITY" => Some(Category::Entity),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Trait for pattern matching strategies.
///
/// A matcher owns one compiled pattern and knows which [`Category`] its
/// matches belong to. Matching never fails: every method is total over
/// arbitrary text.
pub trait PatternMatcher: Send + Sync {
    /// Category assigned to every match of this pattern.
    fn category(&self) -> Category;

    fn pattern(&self) -> &Regex;

    /// All non-overlapping matches, left to right.
    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern().find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Distinct matches by exact (case-sensitive) equality, in first-seen order.
    fn extract_distinct<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.extract_all(text)
            .into_iter()
            .filter(|m| seen.insert(*m))
            .collect()
    }
}
