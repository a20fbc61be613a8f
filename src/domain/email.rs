//! Email address domain logic.

use super::{Category, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Email address pattern matcher.
///
/// Matches a local part of letters, digits and `._%+-`, an `@`, a domain of
/// letters, digits, `.` and `-`, and a top-level domain of at least two
/// letters. No validation beyond the shape is attempted.
#[derive(Debug, Clone)]
pub struct EmailMatcher;

impl EmailMatcher {
    /// Creates a new email matcher.
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
                .expect("Valid email regex")
        });
        &PATTERN
    }
}

impl Default for EmailMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for EmailMatcher {
    fn category(&self) -> Category {
        Category::Email
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }
}
