//! Format trait and implementations for different document types.
//!
//! A format decides which lines open a section and at what depth. The outline extractor is
//! written against this trait, so only the heading syntax lives here.

pub mod markdown;

/// Line-level heading recognition for a document syntax.
pub trait Format {
    /// Returns the heading level and raw heading text if `line` is a heading.
    fn heading<'a>(&self, line: &'a str) -> Option<(usize, &'a str)>;
}
