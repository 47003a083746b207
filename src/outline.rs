//! Heading-keyed outline extraction.
//!
//! The extractor walks a document line by line, keeping the currently open heading path on an
//! explicit stack. Every body line is credited to every heading on that stack, so a line under an
//! H3 also counts towards its enclosing H2 and H1. Headings that normalise to the same key share
//! one entry, with their bodies concatenated in document order.

use crate::formats::Format;
use crate::section::Heading;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
/// Normalised heading key to trimmed body text, in order of first appearance.
pub struct Outline {
    sections: IndexMap<String, String>,
}

impl Outline {
    /// Body text for `key`, if the heading appeared in the document.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.sections.get(key).map(String::as_str)
    }

    /// Whether a heading with this normalised key appeared.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.sections.contains_key(key)
    }

    /// Normalised keys in order of first appearance.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the document had no headings at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Consumes the outline, yielding the underlying mapping.
    #[must_use]
    pub fn into_sections(self) -> IndexMap<String, String> {
        self.sections
    }
}

impl From<IndexMap<String, String>> for Outline {
    fn from(sections: IndexMap<String, String>) -> Self {
        Self { sections }
    }
}

/// Extracts the outline of `content` using `format` to recognise headings.
///
/// Lines before the first heading belong to no section and are dropped. Heading lines are never
/// body text. Each body is joined with `\n` and trimmed only once all lines are read.
#[must_use]
pub fn extract_outline<F: Format>(content: &str, format: &F) -> Outline {
    let mut bodies: IndexMap<String, Vec<&str>> = IndexMap::new();
    let mut stack: Vec<Heading> = Vec::new();

    for line in split_lines(content) {
        if let Some((level, text)) = format.heading(line) {
            let heading = Heading::new(level, text);
            while stack.last().is_some_and(|open| open.closed_by(level)) {
                stack.pop();
            }
            bodies.entry(heading.key.clone()).or_default();
            stack.push(heading);
            continue;
        }

        for open in &stack {
            if let Some(lines) = bodies.get_mut(&open.key) {
                lines.push(line);
            }
        }
    }

    let sections: IndexMap<String, String> = bodies
        .into_iter()
        .map(|(key, lines)| (key, lines.join("\n").trim().to_string()))
        .collect();
    tracing::debug!(sections = sections.len(), "extracted outline");
    Outline { sections }
}

/// Whether `c` ends a line: `\n`, `\r`, vertical tab, form feed, the ASCII file/group/record
/// separators, NEL, and the Unicode line and paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{b}' | '\u{c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Splits `content` into lines without their terminators.
///
/// `\r\n` counts as one break, and a terminator at the very end does not start an empty line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&content[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
