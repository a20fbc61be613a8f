//! Redaction results and the views consumers take of them.
//!
//! A [`RedactionResult`] holds everything one run produced. Consumers on
//! either side of the privacy boundary take different views:
//! - the remote-analysis invoker gets an [`OutboundDocument`], which carries
//!   only the redacted text
//! - the local comparison view uses [`RedactionResult::segments`] to
//!   highlight placeholder tokens and [`RedactionResult::restore`] to
//!   re-identify text that mentions them

use super::placeholder::{Mapping, Placeholder};
use crate::domain::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output of one redaction run.
///
/// Serializes with the field names `originalText`, `redactedText` and
/// `mappings`. The JSON form contains the original document and must stay
/// local.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactionResult {
    original_text: String,
    redacted_text: String,
    #[serde(rename = "mappings")]
    mapping: Mapping,
}

impl RedactionResult {
    pub(crate) fn new(original_text: String, redacted_text: String, mapping: Mapping) -> Self {
        Self {
            original_text,
            redacted_text,
            mapping,
        }
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn redacted_text(&self) -> &str {
        &self.redacted_text
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// Returns true if any span was redacted.
    pub fn has_redactions(&self) -> bool {
        !self.mapping.is_empty()
    }

    /// The only view of this result that may cross the privacy boundary.
    pub fn outbound(&self) -> OutboundDocument<'_> {
        OutboundDocument {
            text: &self.redacted_text,
        }
    }

    /// Restores original values for every placeholder from this run that
    /// appears in `text`.
    pub fn restore(&self, text: &str) -> String {
        self.mapping.restore(text)
    }

    /// Splits the redacted text into plain runs and placeholder tokens.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        segments(&self.redacted_text, &self.mapping)
    }

    /// Per-category counts of the placeholders assigned in this run.
    pub fn summary(&self) -> RedactionSummary {
        RedactionSummary {
            emails: self.mapping.count(Category::Email),
            dates: self.mapping.count(Category::Date),
            entities: self.mapping.count(Category::Entity),
        }
    }

    pub fn into_parts(self) -> (String, String, Mapping) {
        (self.original_text, self.redacted_text, self.mapping)
    }
}

impl fmt::Debug for RedactionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactionResult")
            .field("original_len", &self.original_text.len())
            .field("redacted_text", &self.redacted_text)
            .field("mapping", &self.mapping)
            .finish()
    }
}

/// Redacted text as handed to the remote analysis step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutboundDocument<'a> {
    text: &'a str,
}

impl<'a> OutboundDocument<'a> {
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for OutboundDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// A piece of redacted text, for highlighting in a comparison view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text left as it was.
    Text(&'a str),

    /// A placeholder token known to the mapping.
    Placeholder {
        placeholder: Placeholder,
        token: &'a str,
        original: &'a str,
    },
}

impl<'a> Segment<'a> {
    /// The segment's text as it appears in the redacted document.
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text(text) => text,
            Segment::Placeholder { token, .. } => token,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Segment::Placeholder { .. })
    }
}

/// Splits `text` around the placeholder tokens that `mapping` knows.
///
/// Tokens absent from the mapping stay inside the surrounding text segment.
/// Concatenating every segment's [`Segment::as_str`] gives back `text`.
pub fn segments<'a>(text: &'a str, mapping: &'a Mapping) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in Placeholder::token_pattern().find_iter(text) {
        let Ok(placeholder) = m.as_str().parse::<Placeholder>() else {
            continue;
        };
        let Some(original) = mapping.get(&placeholder) else {
            continue;
        };

        if m.start() > last {
            segments.push(Segment::Text(&text[last..m.start()]));
        }
        segments.push(Segment::Placeholder {
            placeholder,
            token: m.as_str(),
            original,
        });
        last = m.end();
    }

    if last < text.len() {
        segments.push(Segment::Text(&text[last..]));
    }

    segments
}

/// Counts of redacted values per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionSummary {
    pub emails: usize,
    pub dates: usize,
    pub entities: usize,
}

impl RedactionSummary {
    pub fn total(&self) -> usize {
        self.emails + self.dates + self.entities
    }
}

impl fmt::Display for RedactionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} placeholder(s): {} email(s), {} date(s), {} entit{}",
            self.total(),
            self.emails,
            self.dates,
            self.entities,
            if self.entities == 1 { "y" } else { "ies" }
        )
    }
}
