//! Aggregated outcome of checking both workflow documents.
//!
//! Each document is checked independently; a failure in one never stops the other. The report
//! keeps every failure so they can be shown together, either as the human-readable banner
//! format or as JSON for tooling.

use crate::error::DocError;
use crate::input::load_and_validate;
use crate::schema::DocType;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Line printed when both documents pass.
pub const PASSED_BANNER: &str = "VALIDATION PASSED";
/// Line printed before the failure blocks.
pub const FAILED_BANNER: &str = "VALIDATION FAILED";

#[derive(Debug)]
/// One document that did not pass.
pub struct Failure {
    /// Schema the document was checked against.
    pub doc_type: DocType,
    /// Path as given on the command line.
    pub path: PathBuf,
    /// Why it failed.
    pub error: DocError,
}

impl Failure {
    /// The block of text describing this failure, without separators.
    #[must_use]
    pub fn describe(&self) -> String {
        let label = self.doc_type.label();
        let path = self.path.display();
        match &self.error {
            DocError::FileNotFound(_) => format!("{label} file not found: {path}"),
            error @ (DocError::MissingSections(_) | DocError::EmptySections(_)) => {
                format!("{label} validation failed for {path}:\n{error}")
            }
            error => format!("{label} validation error for {path}: {error}"),
        }
    }
}

#[derive(Debug, Default)]
/// Every failure collected across a run.
pub struct Report {
    /// Failures in the order the documents were checked.
    pub failures: Vec<Failure>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    failures: Vec<JsonFailure<'a>>,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    doc_type: DocType,
    path: &'a Path,
    kind: &'static str,
    message: String,
    sections: &'a [String],
}

impl Report {
    /// Records the outcome of one document check.
    pub fn record(&mut self, doc_type: DocType, path: &Path, outcome: Result<(), DocError>) {
        if let Err(error) = outcome {
            tracing::warn!(%doc_type, path = %path.display(), kind = error.kind(), "document failed");
            self.failures.push(Failure {
                doc_type,
                path: path.to_path_buf(),
                error,
            });
        }
    }

    /// Whether every document passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Process exit status: 0 when everything passed, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.passed())
    }

    /// Banner-and-blocks text, each block preceded by `separator_width` dashes.
    #[must_use]
    pub fn render_text(&self, separator_width: usize) -> String {
        if self.passed() {
            return format!("{PASSED_BANNER}\n");
        }
        let separator = "-".repeat(separator_width);
        let mut out = format!("{FAILED_BANNER}\n");
        for failure in &self.failures {
            out.push_str(&separator);
            out.push('\n');
            out.push_str(&failure.describe());
            out.push('\n');
        }
        out
    }

    /// Pretty-printed JSON form of the report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn render_json(&self) -> serde_json::Result<String> {
        let report = JsonReport {
            passed: self.passed(),
            failures: self
                .failures
                .iter()
                .map(|failure| JsonFailure {
                    doc_type: failure.doc_type,
                    path: &failure.path,
                    kind: failure.error.kind(),
                    message: failure.error.to_string(),
                    sections: failure.error.sections(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&report)
    }
}

/// Validates the ideation and plan documents, in that order, collecting every failure.
#[must_use]
pub fn run_validation(ideation: &Path, plan: &Path) -> Report {
    let mut report = Report::default();
    for (doc_type, path) in [(DocType::Ideation, ideation), (DocType::Plan, plan)] {
        let outcome = load_and_validate(path, doc_type).map(|document| {
            tracing::debug!(
                %doc_type,
                sections = document.sections.len(),
                "document passed"
            );
        });
        report.record(doc_type, path, outcome);
    }
    report
}

#[cfg(test)]
#[path = "tests/report.rs"]
mod tests;
