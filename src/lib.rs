//! Deterministic, reversible redaction of contract text.
//!
//! This library anonymizes a contract before it leaves the local machine for
//! remote analysis. Identifying spans are replaced with bracketed placeholder
//! tokens (`[EMAIL_1]`, `[DATE_2]`, `[ENTITY_3]`) and a mapping is returned so
//! the original values can be restored locally.
//!
//! # Features
//!
//! - **Three pattern classes**: email addresses, numeric and month-name
//!   dates, and organization names ending in a legal suffix (`LLC`, `Inc`,
//!   `Corp`, `Ltd`, `LLP`, `Company`, `Organization`)
//! - **Dedup by value**: every occurrence of the same string shares one
//!   placeholder
//! - **Reversible**: [`Mapping::restore`] re-identifies redacted text or model
//!   output that quotes placeholders
//! - **Total**: redaction never fails, including on empty input
//!
//! # Limitations
//!
//! Redaction is best-effort. Phone numbers, street addresses, national IDs,
//! personal names without a legal suffix, and non-English naming conventions
//! are **not** detected. Capitalized phrases followed by a suffix word are
//! redacted even when they are not real organizations.
//!
//! # Architecture
//!
//! - [`domain`]: Pattern matchers for each category
//! - [`redaction`]: Redaction pipeline, placeholder mapping, and file boundary
//! - [`error`]: Error handling for the I/O boundary
//!
//! # Quick Start
//!
//! ```
//! use contract_redactor::redact;
//!
//! let result = redact("Contact john@acme.com on 03/14/2024. Acme Corp handles billing.");
//!
//! assert_eq!(
//!     result.redacted_text(),
//!     "Contact [EMAIL_1] on [DATE_2]. [ENTITY_3] handles billing."
//! );
//!
//! // Only the outbound view is sent for analysis.
//! let outbound = result.outbound();
//! assert!(!outbound.as_str().contains("john@acme.com"));
//!
//! // Model output that mentions placeholders can be restored locally.
//! let answer = "[ENTITY_3] may terminate after [DATE_2].";
//! assert_eq!(
//!     result.restore(answer),
//!     "Acme Corp may terminate after 03/14/2024."
//! );
//! ```
//!
//! # Examples
//!
//! ## Redact a file
//!
//! ```no_run
//! use contract_redactor::RedactionService;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = RedactionService::with_default_engine();
//!
//! service.redact_file(
//!     Path::new("contract.txt"),
//!     Path::new("contract.redacted.txt"),
//!     Some(Path::new("contract.mapping.json")),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Pattern Matching
//!
//! ```
//! use contract_redactor::domain::{EntityMatcher, PatternMatcher};
//!
//! let matcher = EntityMatcher::new();
//! let text = "signed between Blue Harbor LLC and Northwind Inc";
//! assert_eq!(matcher.extract_all(text), vec!["Blue Harbor LLC", "Northwind Inc"]);
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod redaction;

// Re-exports for convenient access
pub use domain::{Category, DateMatcher, EmailMatcher, EntityMatcher, PatternMatcher};
pub use error::{RedactorError, RedactorResult};
pub use redaction::{
    redact, Mapping, OutboundDocument, Placeholder, RedactionEngine, RedactionResult,
    RedactionService, RedactionSummary, Segment,
};
