//! Error type shared by every stage of the gate.
//!
//! Per-document variants are collected into the report rather than propagated to `main`; only
//! [`DocError::DependencyUnavailable`] stops the process.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
/// Everything that can go wrong while loading or validating a document.
pub enum DocError {
    /// The document path does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// The document exists but could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O or decoding failure.
        #[source]
        source: std::io::Error,
    },
    /// Required sections absent from the outline, in required-list order.
    #[error("Missing required sections: {}", .0.join(", "))]
    MissingSections(Vec<String>),
    /// Required sections present but blank, in required-list order.
    #[error("Empty required sections: {}", .0.join(", "))]
    EmptySections(Vec<String>),
    /// The document type label is neither `ideation` nor `plan`.
    #[error("Unknown doc type: {0}")]
    UnknownDocType(String),
    /// The built-in section registry failed its start-up self check.
    #[error("section schema registry is unavailable: {0}")]
    DependencyUnavailable(String),
}

impl DocError {
    /// Stable snake-case identifier used in the JSON report.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) => "file_not_found",
            Self::FileRead { .. } => "file_read",
            Self::MissingSections(_) => "missing_sections",
            Self::EmptySections(_) => "empty_sections",
            Self::UnknownDocType(_) => "unknown_doc_type",
            Self::DependencyUnavailable(_) => "dependency_unavailable",
        }
    }

    /// Section names carried by the missing/empty variants, otherwise empty.
    #[must_use]
    pub fn sections(&self) -> &[String] {
        match self {
            Self::MissingSections(names) | Self::EmptySections(names) => names,
            _ => &[],
        }
    }
}

/// Result alias used throughout the crate.
pub type DocResult<T> = std::result::Result<T, DocError>;
