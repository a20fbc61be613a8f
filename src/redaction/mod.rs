//! Redaction engine, placeholder mapping, and the document boundary.
//!
//! [`RedactionService`] is the boundary between local files and the engine:
//! it reads already-extracted plain text, writes the redacted (outbound)
//! text, and keeps the mapping report in a separate local file.

pub mod engine;
pub mod placeholder;
pub mod result;

pub use engine::{redact, RedactionEngine};
pub use placeholder::{Mapping, Placeholder};
pub use result::{segments, OutboundDocument, RedactionResult, RedactionSummary, Segment};

use crate::error::{RedactorError, RedactorResult};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Redaction service coordinating document I/O around the engine.
pub struct RedactionService {
    engine: RedactionEngine,
}

impl RedactionService {
    /// Creates a new redaction service with the specified engine.
    pub fn new(engine: RedactionEngine) -> Self {
        Self { engine }
    }

    /// Creates a service running the standard email, date, entity pipeline.
    pub fn with_default_engine() -> Self {
        Self::new(RedactionEngine::new())
    }

    pub fn engine(&self) -> &RedactionEngine {
        &self.engine
    }

    /// Redacts in-memory text. Logs counts, never values.
    pub fn redact_text(&self, text: impl Into<String>) -> RedactionResult {
        let result = self.engine.redact(text);
        let summary = result.summary();
        debug!(
            chars = result.original_text().chars().count(),
            emails = summary.emails,
            dates = summary.dates,
            entities = summary.entities,
            "document redacted"
        );
        result
    }

    /// Redacts a plain-text document.
    ///
    /// # Arguments
    /// * `input` - Path to the extracted document text (UTF-8)
    /// * `output` - Path for the redacted text; safe to send for analysis
    /// * `report` - Optional path for the local mapping report
    ///
    /// # Returns
    /// The full redaction result
    pub fn redact_file(
        &self,
        input: &Path,
        output: &Path,
        report: Option<&Path>,
    ) -> RedactorResult<RedactionResult> {
        let text = read_document(input)?;
        self.redact_document(text, Some(output), report)
    }

    /// Redacts already-read text, writing the outbound text and the mapping
    /// report to whichever destinations are given.
    pub fn redact_document(
        &self,
        text: impl Into<String>,
        output: Option<&Path>,
        report: Option<&Path>,
    ) -> RedactorResult<RedactionResult> {
        check_report_destination(output, report)?;
        let result = self.redact_text(text);

        if let Some(output) = output {
            write_text(output, result.redacted_text())?;
            info!(output = %output.display(), "outbound text written");
        }

        if let Some(report) = report {
            write_report(&result, report)?;
            info!(report = %report.display(), "mapping report written");
        }

        Ok(result)
    }

    /// Restores original values in a text file using a mapping report.
    ///
    /// Returns the restored text, which is also written to `output`.
    pub fn restore_file(
        &self,
        input: &Path,
        output: &Path,
        report: &Path,
    ) -> RedactorResult<String> {
        let text = read_document(input)?;
        self.restore_document(&text, Some(output), report)
    }

    /// Restores placeholders in already-read text, writing to `output` if given.
    pub fn restore_document(
        &self,
        text: &str,
        output: Option<&Path>,
        report: &Path,
    ) -> RedactorResult<String> {
        let mapping = load_mapping(report)?;
        let restored = mapping.restore(text);

        if let Some(output) = output {
            write_text(output, &restored)?;
            info!(
                output = %output.display(),
                placeholders = mapping.len(),
                "restored text written"
            );
        }

        Ok(restored)
    }
}

impl Default for RedactionService {
    fn default() -> Self {
        Self::with_default_engine()
    }
}

/// Returns true when two paths name the same file, including aliases such
/// as `out.txt` and `./out.txt`. Neither file needs to exist yet.
pub fn same_destination(a: &Path, b: &Path) -> bool {
    a == b || resolve_destination(a) == resolve_destination(b)
}

fn resolve_destination(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (fs::canonicalize(parent), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

/// The mapping report must never land in the outbound text file.
fn check_report_destination(output: Option<&Path>, report: Option<&Path>) -> RedactorResult<()> {
    match (output, report) {
        (Some(output), Some(report)) if same_destination(output, report) => {
            Err(RedactorError::invalid_input(
                "mapping",
                "mapping report must not be written to the outbound text file",
            ))
        }
        _ => Ok(()),
    }
}

/// Reads an extracted document from disk.
pub fn read_document(path: &Path) -> RedactorResult<String> {
    if !path.exists() {
        return Err(RedactorError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "Input file does not exist"),
        ));
    }

    let bytes = fs::read(path).map_err(|e| RedactorError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "document read");
    decode_document(bytes, &path.display().to_string())
}

/// Reads an extracted document from any reader, e.g. stdin.
pub fn read_document_from(mut reader: impl Read, label: &str) -> RedactorResult<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| RedactorError::io(label, e))?;
    decode_document(bytes, label)
}

fn decode_document(bytes: Vec<u8>, label: &str) -> RedactorResult<String> {
    String::from_utf8(bytes).map_err(|e| {
        RedactorError::invalid_input(
            "input",
            format!(
                "{} is not valid UTF-8 text (byte {}); extract the document to plain text first",
                label,
                e.utf8_error().valid_up_to()
            ),
        )
    })
}

fn write_text(path: &Path, text: &str) -> RedactorResult<()> {
    fs::write(path, text).map_err(|e| RedactorError::io(path, e))
}

/// Writes the local mapping report (original text, redacted text, mapping).
pub fn write_report(result: &RedactionResult, path: &Path) -> RedactorResult<()> {
    let json = serde_json::to_string_pretty(result)?;
    write_text(path, &json)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MappingFile {
    Report(RedactionResult),
    Bare(Mapping),
}

/// Loads a mapping from either a full report or a bare placeholder object.
pub fn load_mapping(path: &Path) -> RedactorResult<Mapping> {
    let text = read_document(path)?;
    let file: MappingFile = serde_json::from_str(&text).map_err(|e| {
        RedactorError::invalid_input(
            "mapping",
            format!("{} is not a mapping report: {}", path.display(), e),
        )
    })?;

    Ok(match file {
        MappingFile::Report(result) => result.into_parts().2,
        MappingFile::Bare(mapping) => mapping,
    })
}
