//! docgate: required-section checks for ideation and plan markdown documents.
//!
//! Documents are reduced to an [`outline::Outline`] mapping normalised heading keys to the text
//! nested beneath them, then checked against the static section list for their
//! [`schema::DocType`].
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod formats;
pub mod input;
pub mod outline;
pub mod report;
pub mod schema;
pub mod section;

pub use error::{DocError, DocResult};
