//! Java tree-sitter parser construction.
//!
//! The single place the grammar is configured; the frontend and tests go
//! through here so the language setup is never duplicated.

use crate::error::DocletError;

/// Build a tree-sitter parser configured for Java.
pub fn java_parser() -> Result<tree_sitter::Parser, DocletError> {
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(&tree_sitter_java::LANGUAGE.into())?;
    Ok(parser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_compilation_unit() {
        let mut parser = java_parser().unwrap();
        let tree = parser.parse("package p; public class C {}", None).unwrap();
        assert_eq!(tree.root_node().kind(), "program");
        assert!(!tree.root_node().has_error());
    }
}
