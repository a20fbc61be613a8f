//! Placeholder tokens and the reversible placeholder mapping.

use crate::domain::Category;
use crate::error::RedactorError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Synthetic token inserted in place of a redacted span, e.g. `[DATE_2]`.
///
/// The index is 1-based and shared across all categories within one
/// redaction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Placeholder {
    category: Category,
    index: usize,
}

impl Placeholder {
    /// Creates a placeholder. Returns `None` for a zero index.
    pub fn new(category: Category, index: usize) -> Option<Self> {
        (index > 0).then_some(Self { category, index })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Unanchored pattern for placeholder-shaped tokens inside text.
    ///
    /// Matches any index, including ones that do not parse (`[DATE_0]`);
    /// callers parse and look up each hit.
    pub fn token_pattern() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\[(?:EMAIL|DATE|ENTITY)_[0-9]+\]").expect("Valid placeholder regex")
        });
        &PATTERN
    }

    fn exact_pattern() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^\[(EMAIL|DATE|ENTITY)_([1-9][0-9]*)\]$").expect("Valid placeholder regex")
        });
        &PATTERN
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}_{}]", self.category.tag(), self.index)
    }
}

impl FromStr for Placeholder {
    type Err = RedactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| RedactorError::PatternError {
            pattern: s.to_string(),
            reason: reason.to_string(),
        };

        let caps = Self::exact_pattern()
            .captures(s)
            .ok_or_else(|| invalid("expected a token like [EMAIL_1], [DATE_2] or [ENTITY_3]"))?;
        let category = Category::from_tag(&caps[1]).ok_or_else(|| invalid("unknown category"))?;
        let index = caps[2]
            .parse::<usize>()
            .map_err(|_| invalid("index out of range"))?;

        Ok(Self { category, index })
    }
}

impl TryFrom<String> for Placeholder {
    type Error = RedactorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Placeholder> for String {
    fn from(placeholder: Placeholder) -> Self {
        placeholder.to_string()
    }
}

/// Hands out placeholders for one redaction run.
///
/// Lives for a single invocation; there is no process-wide counter.
#[derive(Debug)]
pub(crate) struct PlaceholderCounter {
    next: usize,
}

impl PlaceholderCounter {
    pub(crate) fn new() -> Self {
        Self { next: 1 }
    }

    pub(crate) fn issue(&mut self, category: Category) -> Placeholder {
        let placeholder = Placeholder {
            category,
            index: self.next,
        };
        self.next += 1;
        placeholder
    }
}

/// Table from placeholder to the original substring it replaced.
///
/// Entries keep assignment order, including through JSON, where the mapping
/// is an object keyed by the placeholder token.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(Placeholder, String)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an entry. Returns `false` and leaves the mapping unchanged if
    /// the placeholder is already present.
    pub fn insert(&mut self, placeholder: Placeholder, original: impl Into<String>) -> bool {
        if self.get(&placeholder).is_some() {
            return false;
        }
        self.entries.push((placeholder, original.into()));
        true
    }

    pub fn get(&self, placeholder: &Placeholder) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == placeholder)
            .map(|(_, original)| original.as_str())
    }

    /// Looks up a placeholder by its token text.
    pub fn get_token(&self, token: &str) -> Option<&str> {
        token.parse::<Placeholder>().ok().and_then(|p| self.get(&p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&Placeholder, &str)> {
        self.entries.iter().map(|(p, original)| (p, original.as_str()))
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.entries.iter().map(|(p, _)| p)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, original)| original.as_str())
    }

    /// Number of entries in a category.
    pub fn count(&self, category: Category) -> usize {
        self.placeholders()
            .filter(|p| p.category() == category)
            .count()
    }

    /// Replaces every known placeholder token in `text` with its original
    /// value.
    ///
    /// The scan is a single left-to-right pass, so restored values are never
    /// themselves rescanned. Placeholder-shaped tokens missing from the
    /// mapping are left as they are.
    pub fn restore(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }

        Placeholder::token_pattern()
            .replace_all(text, |caps: &Captures| {
                let token = &caps[0];
                self.get_token(token).unwrap_or(token).to_string()
            })
            .into_owned()
    }
}

// Values are the sensitive half of the table; keep them out of debug output.
impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.entries.iter().map(|(p, original)| {
                    (p.to_string(), format!("<{} chars>", original.chars().count()))
                }),
            )
            .finish()
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (placeholder, original) in &self.entries {
            map.serialize_entry(&placeholder.to_string(), original)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MappingVisitor;

        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = Mapping;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from placeholder tokens to original text")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Mapping, A::Error> {
                let mut mapping = Mapping::new();
                while let Some((placeholder, original)) =
                    access.next_entry::<Placeholder, String>()?
                {
                    if !mapping.insert(placeholder, original) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate placeholder {placeholder}"
                        )));
                    }
                }
                Ok(mapping)
            }
        }

        deserializer.deserialize_map(MappingVisitor)
    }
}
