//! Custom assertions for redaction testing.
//!
//! Provides domain-specific assertions that make tests more readable
//! and provide better error messages.

use contract_redactor::{Placeholder, RedactionResult};
use std::collections::HashSet;

/// Asserts that a value no longer appears in the redacted text.
///
/// # Panics
/// Panics if the value is still found in the redacted text.
pub fn assert_redacted(result: &RedactionResult, value: &str) {
    assert!(
        !result.redacted_text().contains(value),
        "Value '{}' should be redacted but was found in output:\n{}",
        value,
        result.redacted_text()
    );
}

/// Asserts that a value has been preserved (not redacted).
///
/// # Panics
/// Panics if the value is not found in the redacted text.
pub fn assert_preserved(result: &RedactionResult, value: &str) {
    assert!(
        result.redacted_text().contains(value),
        "Value '{}' should be preserved but was not found in output:\n{}",
        value,
        result.redacted_text()
    );
}

/// Asserts that multiple values are all redacted.
///
/// # Panics
/// Panics if any value is found in the redacted text.
pub fn assert_all_redacted(result: &RedactionResult, values: &[&str]) {
    let found: Vec<_> = values
        .iter()
        .filter(|v| result.redacted_text().contains(**v))
        .collect();

    assert!(
        found.is_empty(),
        "The following values should be redacted but were found: {:?}",
        found
    );
}

/// Asserts the structural invariants every result must satisfy:
/// placeholder tokens are well formed, indices are distinct, every mapped
/// value came from the original text and is gone from the redacted text.
///
/// # Panics
/// Panics on the first violated invariant.
pub fn assert_well_formed(result: &RedactionResult) {
    let mut indices = HashSet::new();

    for (placeholder, original) in result.mapping().iter() {
        let token = placeholder.to_string();
        assert_eq!(
            token.parse::<Placeholder>().ok(),
            Some(*placeholder),
            "placeholder {} does not round-trip",
            token
        );
        assert!(placeholder.index() > 0, "placeholder {} has zero index", token);
        assert!(
            indices.insert(placeholder.index()),
            "index {} assigned twice",
            placeholder.index()
        );
        assert!(
            result.original_text().contains(original),
            "mapped value for {} is not in the original text",
            token
        );
        assert!(
            !result.redacted_text().contains(original),
            "mapped value for {} is still in the redacted text",
            token
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contract_redactor::redact;

    #[test]
    #[should_panic(expected = "should be redacted")]
    fn test_assert_redacted_fails_when_value_present() {
        let result = redact("no sensitive values here");
        assert_redacted(&result, "sensitive");
    }

    #[test]
    fn test_assert_all_redacted_empty_values() {
        assert_all_redacted(&redact("anything"), &[]);
    }
}
