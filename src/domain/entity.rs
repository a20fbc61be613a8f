//! Organizational entity domain logic.
//!
//! An entity is a run of capitalized words (`Acme`, `Blue Harbor`)
//! immediately followed by a legal suffix from [`LEGAL_SUFFIXES`]. Personal
//! names and organizations without a suffix are not detected. Word
//! boundaries are ASCII boundaries.

use super::{Category, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Organizational suffixes that mark a capitalized run as an entity name.
/// Matched with exact case.
pub const LEGAL_SUFFIXES: [&str; 7] = [
    "LLC",
    "Inc",
    "Corp",
    "Ltd",
    "LLP",
    "Company",
    "Organization",
];

/// Suffixed organization name matcher.
#[derive(Debug, Clone)]
pub struct EntityMatcher;

impl EntityMatcher {
    /// Creates a new entity matcher.
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(&format!(
                r"(?-u:\b)[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?:{})(?-u:\b)",
                LEGAL_SUFFIXES.join("|")
            ))
            .expect("Valid entity regex")
        });
        &PATTERN
    }
}

impl Default for EntityMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for EntityMatcher {
    fn category(&self) -> Category {
        Category::Entity
    }

    fn pattern(&self) -> &Regex {
        Self::regex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_extraction() {
        let matcher = EntityMatcher::new();
        let text = "between Acme Corp and Blue Harbor Logistics LLC.";
        assert_eq!(
            matcher.extract_all(text),
            vec!["Acme Corp", "Blue Harbor Logistics LLC"]
        );
    }

    #[test]
    fn test_every_suffix_recognized() {
        let matcher = EntityMatcher::new();
        for suffix in LEGAL_SUFFIXES {
            let text = format!("Northwind {suffix} agrees");
            assert_eq!(
                matcher.extract_all(&text),
                vec![format!("Northwind {suffix}")],
                "suffix {suffix}"
            );
        }
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        let matcher = EntityMatcher::new();
        assert!(matcher.extract_all("Acme corp").is_empty());
        assert!(matcher.extract_all("Acme LLc").is_empty());
    }

    #[test]
    fn test_suffix_needs_word_boundary() {
        let matcher = EntityMatcher::new();
        assert!(matcher.extract_all("Acme Corporation").is_empty());
        assert!(matcher.extract_all("Acme Incorporated").is_empty());
    }

    #[test]
    fn test_boundaries_are_ascii() {
        let matcher = EntityMatcher::new();
        assert_eq!(matcher.extract_all("SociétéAcme Corp signe"), vec!["Acme Corp"]);
        assert_eq!(matcher.extract_all("Acme Corpé"), vec!["Acme Corp"]);
    }

    #[test]
    fn test_names_without_suffix_not_detected() {
        let matcher = EntityMatcher::new();
        assert!(matcher.extract_all("Jane Smith signed").is_empty());
    }

    #[test]
    fn test_uppercase_words_do_not_start_a_run() {
        let matcher = EntityMatcher::new();
        assert!(matcher.extract_all("ACME Corp").is_empty());
        assert!(matcher.extract_all("[EMAIL_1] Inc").is_empty());
    }
}
