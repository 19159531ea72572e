//! Crate error type.
//!
//! Per-element problems during traversal (missing annotation types, malformed
//! values, absent doc comments) are recovered locally and logged; only
//! conditions that make the environment itself unusable surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocletError {
    /// The tree-sitter grammar could not be loaded into the parser.
    #[error("failed to configure the Java grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// tree-sitter returned no tree for a compilation unit.
    #[error("failed to parse compilation unit {unit}")]
    ParseFailed { unit: usize },

    /// XML rendering failed.
    #[error("failed to render XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Writing serialized output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
