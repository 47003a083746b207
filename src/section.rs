//! Heading representation and key normalisation.
//!
//! A heading is only ever held on the outline parser's stack: its level decides which open
//! headings it closes, and its key names the section that body lines accumulate into. Keys are
//! normalised so that `## 3. Risks & Mitigations` and `# risks and mitigations` name the same
//! section.

use regex::Regex;
use std::sync::LazyLock;

static ORDINAL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]*\s+").expect("ordinal pattern compiles"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("character class compiles"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

#[derive(Clone, Debug, PartialEq, Eq)]
/// An open heading on the outline parser's stack.
pub struct Heading {
    /// Nesting depth from the number of leading `#` (1 for top-level).
    pub level: usize,
    /// Normalised heading text used as the outline key.
    pub key: String,
}

impl Heading {
    /// Builds a heading from its level and raw text, normalising the text into a key.
    #[must_use]
    pub fn new(level: usize, text: &str) -> Self {
        Self {
            level,
            key: normalize_heading(text),
        }
    }

    /// Whether this heading is closed when a heading at `level` opens.
    ///
    /// A heading closes its siblings and descendants but never its ancestors.
    #[must_use]
    pub fn closed_by(&self, level: usize) -> bool {
        self.level >= level
    }
}

/// Normalises heading text into a stable lookup key.
///
/// Trims and lowercases, strips one leading ordinal such as `1.` or `2)` followed by whitespace,
/// drops every character that is not ASCII alphanumeric or whitespace, then collapses whitespace
/// runs to a single space. The result may be empty (`1.` alone) and may end in a space when
/// trailing punctuation was removed; both are kept as usable keys.
#[must_use]
pub fn normalize_heading(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let unnumbered = ORDINAL_PREFIX.replace(&lowered, "");
    let stripped = DISALLOWED.replace_all(&unnumbered, "");
    WHITESPACE_RUN.replace_all(&stripped, " ").into_owned()
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
