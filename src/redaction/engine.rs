//! The redaction pipeline.
//!
//! Pattern classes run as an ordered list of passes over one working copy of
//! the document. Each pass matches against the text the previous passes
//! produced, so a span already replaced by an earlier category can never be
//! matched again.
//!
//! Substitution is by value: each distinct matched string is replaced
//! everywhere it occurs, and repeated occurrences share one placeholder. A
//! date written inside an entity name is taken by the date pass before the
//! entity pass sees it.

use super::placeholder::{Mapping, PlaceholderCounter};
use super::result::RedactionResult;
use crate::domain::{Category, DateMatcher, EmailMatcher, EntityMatcher, PatternMatcher};

/// Ordered redaction pipeline of (category, matcher) passes.
pub struct RedactionEngine {
    passes: Vec<Box<dyn PatternMatcher>>,
}

impl RedactionEngine {
    /// Creates the standard pipeline: email, then date, then entity.
    pub fn new() -> Self {
        Self {
            passes: vec![
                Box::new(EmailMatcher::new()),
                Box::new(DateMatcher::new()),
                Box::new(EntityMatcher::new()),
            ],
        }
    }

    /// Categories in the order their passes run.
    pub fn categories(&self) -> Vec<Category> {
        self.passes.iter().map(|pass| pass.category()).collect()
    }

    /// Redacts `text`. Never fails; empty input gives an empty result.
    pub fn redact(&self, text: impl Into<String>) -> RedactionResult {
        let original = text.into();
        let mut working = original.clone();
        let mut mapping = Mapping::new();
        let mut counter = PlaceholderCounter::new();

        for pass in &self.passes {
            working = run_pass(pass.as_ref(), working, &mut mapping, &mut counter);
        }

        RedactionResult::new(original, working, mapping)
    }

    /// Distinct values redacted from `text`, grouped by pass in run order.
    pub fn scan(&self, text: &str) -> Vec<(Category, Vec<String>)> {
        let (_, _, mapping) = self.redact(text).into_parts();
        self.passes
            .iter()
            .map(|pass| {
                let category = pass.category();
                let values = mapping
                    .iter()
                    .filter(|(p, _)| p.category() == category)
                    .map(|(_, original)| original.to_string())
                    .collect();
                (category, values)
            })
            .collect()
    }
}

impl Default for RedactionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one pass: match on the working text, then replace every literal
/// occurrence of each distinct match with its placeholder.
fn run_pass(
    matcher: &dyn PatternMatcher,
    working: String,
    mapping: &mut Mapping,
    counter: &mut PlaceholderCounter,
) -> String {
    // Matches are collected up front so later substitutions in this pass do
    // not change what was found.
    let distinct: Vec<String> = matcher
        .extract_distinct(&working)
        .into_iter()
        .map(str::to_owned)
        .collect();

    distinct.into_iter().fold(working, |text, value| {
        let placeholder = counter.issue(matcher.category());
        let replaced = text.replace(&value, &placeholder.to_string());
        mapping.insert(placeholder, value);
        replaced
    })
}

/// Redacts `text` with the standard pipeline.
///
/// # Examples
///
/// ```
/// let result = contract_redactor::redact("Notify ops@acme.com by May 1, 2025.");
/// assert_eq!(result.redacted_text(), "Notify [EMAIL_1] by [DATE_2].");
/// assert_eq!(result.mapping().get_token("[DATE_2]"), Some("May 1, 2025"));
/// ```
pub fn redact(text: impl Into<String>) -> RedactionResult {
    RedactionEngine::new().redact(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_scenario() {
        let result = redact(
            "Contact john@acme.com or john@acme.com on 03/14/2024. Acme Corp handles billing.",
        );

        assert_eq!(
            result.redacted_text(),
            "Contact [EMAIL_1] or [EMAIL_1] on [DATE_2]. [ENTITY_3] handles billing."
        );
        let entries: Vec<_> = result
            .mapping()
            .iter()
            .map(|(p, v)| (p.to_string(), v))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("[EMAIL_1]".to_string(), "john@acme.com"),
                ("[DATE_2]".to_string(), "03/14/2024"),
                ("[ENTITY_3]".to_string(), "Acme Corp"),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let result = redact("");
        assert_eq!(result.original_text(), "");
        assert_eq!(result.redacted_text(), "");
        assert!(result.mapping().is_empty());
    }

    #[test]
    fn test_clean_text_unchanged() {
        let text = "The parties agree to the terms set out in Schedule 2.";
        let result = redact(text);
        assert_eq!(result.redacted_text(), text);
        assert!(!result.has_redactions());
    }

    #[test]
    fn test_pass_order() {
        assert_eq!(
            RedactionEngine::new().categories(),
            vec![Category::Email, Category::Date, Category::Entity]
        );
    }

    #[test]
    fn test_email_wins_over_date() {
        // The local part contains a date shape that would match on its own.
        let result = redact("Reply to ops.03-14-2024@acme.com today.");
        assert_eq!(result.redacted_text(), "Reply to [EMAIL_1] today.");
        assert_eq!(result.mapping().len(), 1);
    }

    #[test]
    fn test_date_pass_runs_before_entity_pass() {
        let result = redact("Payment to March 3, 2024 Holdings Ltd");
        assert_eq!(result.redacted_text(), "Payment to [DATE_1] [ENTITY_2]");
        assert_eq!(result.summary().entities, 1);
        assert_eq!(result.mapping().get_token("[ENTITY_2]"), Some("Holdings Ltd"));
    }

    #[test]
    fn test_counter_continues_across_categories() {
        let result = redact("Beta Inc, a@b.com, Alpha LLC, 1/1/2020, c@d.org");
        assert_eq!(
            result.redacted_text(),
            "[ENTITY_4], [EMAIL_1], [ENTITY_5], [DATE_3], [EMAIL_2]"
        );
    }

    #[test]
    fn test_scan_groups_by_category() {
        let scan = RedactionEngine::new().scan("a@b.com on 1/1/2020 with Acme Corp and a@b.com");
        assert_eq!(
            scan,
            vec![
                (Category::Email, vec!["a@b.com".to_string()]),
                (Category::Date, vec!["1/1/2020".to_string()]),
                (Category::Entity, vec!["Acme Corp".to_string()]),
            ]
        );
    }
}
