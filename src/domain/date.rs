//! Date domain logic.
//!
//! Two shapes are recognized:
//! - numeric dates: `3/14/2024`, `14-03-24`, `1/2-2024`
//! - month-name dates: `March 14, 2024`, `january 5 2025`
//!
//! Month names match ASCII case-insensitively and word boundaries are ASCII
//! boundaries, so a date directly after a non-ASCII letter is still found.
//!
//! Separators are not cross-checked and the values are never validated as
//! calendar dates.

use super::{Category, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// English month names accepted in long-form dates.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Date pattern matcher covering numeric and month-name dates.
#[derive(Debug, Clone)]
pub struct DateMatcher;

impl DateMatcher {
    /// Creates a new date matcher.
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            // Both alternatives share one pattern so matches keep their
            // left-to-right order across the two shapes.
            let numeric = r"(?-u:\b)[0-9]{1,2}[/-][0-9]{1,2}[/-][0-9]{2,4}(?-u:\b)";
            let long_form = format!(
                r"(?-u:\b)(?i-u:{})\s+[0-9]{{1,2}},?\s+[0-9]{{4}}(?-u:\b)",
                MONTH_NAMES.join("|")
            );
            Regex::new(&format!("(?:{numeric})|(?:{long_form})")).expect("Valid date regex")
        });
        &PATTERN
    }
}

impl Default for DateMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for DateMatcher {
    fn category(&self) -> Category {
        Category::Date
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }
}
