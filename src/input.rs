//! Reading documents from disk into outlines.

use crate::error::{DocError, DocResult};
use crate::formats::markdown::MarkdownFormat;
use crate::outline::{extract_outline, Outline};
use crate::schema::{apply_compat_aliases, validate, DocType, ValidatedDocument};
use std::fs;
use std::path::Path;

/// Reads `path` and extracts its outline.
///
/// # Errors
///
/// Returns [`DocError::FileNotFound`] if the path does not exist and [`DocError::FileRead`] if it
/// cannot be read as UTF-8 text.
pub fn load_outline(path: &Path) -> DocResult<Outline> {
    if !path.exists() {
        return Err(DocError::FileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| DocError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read document");
    Ok(extract_outline(&content, &MarkdownFormat))
}

/// Reads `path` and validates it as a `doc_type` document.
///
/// The legacy "at a glance" alias is applied between extraction and validation.
///
/// # Errors
///
/// Returns the errors of [`load_outline`], then [`DocError::MissingSections`] or
/// [`DocError::EmptySections`] if the outline does not satisfy the schema.
pub fn load_and_validate(path: &Path, doc_type: DocType) -> DocResult<ValidatedDocument> {
    let outline = apply_compat_aliases(load_outline(path)?);
    validate(&outline, doc_type)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
