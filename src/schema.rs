//! Required-section schemas for ideation and plan documents.
//!
//! Each document type is a static list of normalised section names. One checker, parameterised
//! by [`DocType`], reports which required names are absent from an outline and which are present
//! but blank.

use crate::error::{DocError, DocResult};
use crate::outline::Outline;
use crate::section::normalize_heading;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Sections every ideation document must fill in.
pub const IDEATION_SECTIONS: &[&str] = &[
    "purpose intent",
    "how it works",
    "review of related literature",
    "list of connected ideas",
    "dependencies",
    "program flow scenario expected outcome",
    "at a glance bullet list of outcomes",
    "review of results from tests",
    "list of rejected ideas with reasons",
    "list of waitlisted ideas",
];

/// Sections every implementation plan must fill in.
pub const PLAN_SECTIONS: &[&str] = &[
    "scope",
    "success metrics",
    "dependencies",
    "risks and mitigations",
    "milestones",
    "task checklist",
    "verification steps",
    "implementation notes",
    "handoff",
];

/// Key produced by older templates that wrote the heading as "At-a-Glance".
pub const LEGACY_AT_A_GLANCE: &str = "ataglance bullet list of outcomes";
/// Canonical key the legacy heading stands in for.
pub const AT_A_GLANCE: &str = "at a glance bullet list of outcomes";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// The two kinds of workflow document the gate understands.
pub enum DocType {
    /// Exploratory write-up of an idea before planning.
    Ideation,
    /// Implementation plan derived from an accepted idea.
    Plan,
}

impl DocType {
    /// Every document type, in the order documents are checked.
    pub const ALL: [Self; 2] = [Self::Ideation, Self::Plan];

    /// Label used on the command line and in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ideation => "ideation",
            Self::Plan => "plan",
        }
    }

    /// Normalised section names this document type requires, in reporting order.
    #[must_use]
    pub fn required_sections(self) -> &'static [&'static str] {
        match self {
            Self::Ideation => IDEATION_SECTIONS,
            Self::Plan => PLAN_SECTIONS,
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocType {
    type Err = DocError;

    fn from_str(label: &str) -> DocResult<Self> {
        match label {
            "ideation" => Ok(Self::Ideation),
            "plan" => Ok(Self::Plan),
            other => Err(DocError::UnknownDocType(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A document whose outline satisfied its schema.
pub struct ValidatedDocument {
    /// Schema the document was checked against.
    pub doc_type: DocType,
    /// Every section of the document, not only the required ones.
    pub sections: Outline,
}

/// Fills the canonical "at a glance" key from its legacy spelling.
///
/// Compatibility shim for documents written from a template whose heading read "At-a-Glance",
/// which normalises to [`LEGACY_AT_A_GLANCE`]. The legacy key is kept; an existing canonical key
/// is never overwritten.
#[must_use]
pub fn apply_compat_aliases(outline: Outline) -> Outline {
    if outline.contains(AT_A_GLANCE) {
        return outline;
    }
    let Some(body) = outline.get(LEGACY_AT_A_GLANCE).map(str::to_string) else {
        return outline;
    };
    tracing::debug!(from = LEGACY_AT_A_GLANCE, to = AT_A_GLANCE, "applying legacy alias");
    let mut sections = outline.into_sections();
    sections.insert(AT_A_GLANCE.to_string(), body);
    Outline::from(sections)
}

/// Checks `sections` against the required list for `doc_type`.
///
/// # Errors
///
/// Returns [`DocError::MissingSections`] if any required key is absent, otherwise
/// [`DocError::EmptySections`] if any required key has a blank body.
pub fn validate(sections: &Outline, doc_type: DocType) -> DocResult<ValidatedDocument> {
    let required = doc_type.required_sections();

    let missing: Vec<String> = required
        .iter()
        .filter(|name| !sections.contains(name))
        .map(ToString::to_string)
        .collect();
    let empty: Vec<String> = required
        .iter()
        .filter(|name| sections.get(name).is_some_and(|body| body.trim().is_empty()))
        .map(ToString::to_string)
        .collect();

    if !missing.is_empty() {
        tracing::debug!(%doc_type, ?missing, "required sections missing");
        return Err(DocError::MissingSections(missing));
    }
    if !empty.is_empty() {
        tracing::debug!(%doc_type, ?empty, "required sections empty");
        return Err(DocError::EmptySections(empty));
    }

    Ok(ValidatedDocument {
        doc_type,
        sections: sections.clone(),
    })
}

/// Like [`validate`], selecting the schema by its label.
///
/// # Errors
///
/// Returns [`DocError::UnknownDocType`] for a label other than `ideation` or `plan`, before
/// looking at any section; otherwise the errors of [`validate`].
pub fn validate_label(sections: &Outline, label: &str) -> DocResult<ValidatedDocument> {
    validate(sections, label.parse()?)
}

/// Start-up self check of the built-in schemas.
///
/// Every list must be non-empty, already normalised, and free of duplicates; otherwise no
/// document could be judged reliably.
///
/// # Errors
///
/// Returns [`DocError::DependencyUnavailable`] describing the first defect found.
pub fn check_registry() -> DocResult<()> {
    for doc_type in DocType::ALL {
        let required = doc_type.required_sections();
        if required.is_empty() {
            return Err(DocError::DependencyUnavailable(format!(
                "no required sections registered for {doc_type}"
            )));
        }

        let mut seen = HashSet::new();
        for name in required {
            if normalize_heading(name) != *name {
                return Err(DocError::DependencyUnavailable(format!(
                    "{doc_type} section {name:?} is not in normalised form"
                )));
            }
            if !seen.insert(*name) {
                return Err(DocError::DependencyUnavailable(format!(
                    "{doc_type} section {name:?} is registered twice"
                )));
            }
        }
    }
    tracing::debug!("section registry passed self check");
    Ok(())
}

#[cfg(test)]
#[path = "tests/schema.rs"]
mod tests;
