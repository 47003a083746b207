//! Markdown format implementation for ATX-style headings (# syntax).
//!
//! Recognition is purely line based: fenced code, setext headings and inline markup are not
//! understood, so a `# comment` inside a code block still opens a section.

use crate::formats::Format;
use regex::Regex;
use std::sync::LazyLock;

/// One to six `#`, at least one whitespace character, then the heading text.
static ATX_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})\s+(.*)$").expect("ATX heading pattern compiles")
});

/// ATX heading recognition (`#` through `######`).
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn heading<'a>(&self, line: &'a str) -> Option<(usize, &'a str)> {
        let captures = ATX_HEADING.captures(line)?;
        let level = captures.get(1)?.as_str().len();
        let text = captures.get(2).map_or("", |m| m.as_str());
        Some((level, text.trim()))
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
