//! Test fixtures and contract text builders.
//!
//! Provides builders for creating contract documents with specific content,
//! following the Builder pattern for clean test setup.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Builder for creating test contract text with custom content.
///
/// # Example
///
/// ```no_run
/// let text = TestContractBuilder::new()
///     .with_title("Services Agreement")
///     .with_party("Acme Corp", "legal@acme.com")
///     .with_effective_date("March 14, 2024")
///     .with_content("Payment is due within 30 days.")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct TestContractBuilder {
    title: String,
    parties: Vec<(String, String)>,
    dates: Vec<String>,
    custom_content: Vec<String>,
}

impl TestContractBuilder {
    /// Creates a new test contract builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Master Services Agreement".to_string(),
            parties: Vec::new(),
            dates: Vec::new(),
            custom_content: Vec::new(),
        }
    }

    /// Sets the document title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Adds a contracting party with its notice email address.
    pub fn with_party(mut self, name: &str, email: &str) -> Self {
        self.parties.push((name.to_string(), email.to_string()));
        self
    }

    /// Adds an effective or milestone date.
    pub fn with_effective_date(mut self, date: &str) -> Self {
        self.dates.push(date.to_string());
        self
    }

    /// Adds custom text content to the document.
    pub fn with_content(mut self, content: &str) -> Self {
        self.custom_content.push(content.to_string());
        self
    }

    /// Builds the contract text.
    pub fn build(&self) -> String {
        let mut content = String::new();
        content.push_str(&format!("{}\n\n", self.title));

        if !self.parties.is_empty() {
            content.push_str("Parties:\n");
            for (i, (name, email)) in self.parties.iter().enumerate() {
                content.push_str(&format!("  Party {}: {} (notices: {})\n", i + 1, name, email));
            }
            content.push('\n');
        }

        for date in &self.dates {
            content.push_str(&format!("This agreement is effective as of {}.\n", date));
        }

        for custom in &self.custom_content {
            content.push_str(custom);
            content.push('\n');
        }

        content
    }

    /// Builds the contract text and writes it to the specified path.
    pub fn build_file(&self, output_path: &Path) -> Result<PathBuf> {
        fs::write(output_path, self.build())?;
        Ok(output_path.to_path_buf())
    }
}

impl Default for TestContractBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A two-party services agreement touching every pattern class.
pub fn sample_contract() -> String {
    TestContractBuilder::new()
        .with_title("Consulting Services Agreement")
        .with_party("Acme Corp", "legal@acme.com")
        .with_party("Blue Harbor Logistics LLC", "contracts@blueharbor.io")
        .with_effective_date("March 14, 2024")
        .with_content("Invoices are payable within 30 days of receipt.")
        .with_content("Either party may terminate on 90 days written notice.")
        .with_content("This agreement expires on 03/14/2026 unless renewed.")
        .with_content("Questions about billing go to legal@acme.com.")
        .build()
}

/// Text with no email-, date-, or entity-shaped content.
pub fn clean_contract() -> String {
    TestContractBuilder::new()
        .with_title("Confidentiality terms")
        .with_content("The receiving party shall keep all information confidential.")
        .with_content("Section 4.2 applies to disclosures made under clause 12.")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let builder = TestContractBuilder::new()
            .with_title("Test")
            .with_party("Acme Corp", "a@acme.com")
            .with_effective_date("1/1/2024");

        assert_eq!(builder.title, "Test");
        assert_eq!(builder.parties.len(), 1);
        assert_eq!(builder.dates.len(), 1);
    }
}
