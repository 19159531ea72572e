// Java frontend: builds the compiler-style element model from source text.
//
// This module is organized into focused sub-modules:
// - helpers: shared node utilities (text, modifiers, doc-comment discovery)
// - classes: class, interface, enum, annotation-type declarations
// - methods: method, constructor, annotation-type element extraction
// - fields: field and enum-constant extraction, compile-time constants
// - annotations: annotation uses and recursive element values
// - types: type expression nodes to type mirrors, type parameters
// - imports: package/import handling and simple-name resolution
// - doc_comments: javadoc body and block-tag parsing
// - environment: the assembled per-invocation environment

mod annotations;
mod classes;
mod doc_comments;
mod fields;
mod helpers;
mod imports;
mod methods;
mod types;

pub mod environment;

use tree_sitter::{Node, Tree};

use crate::model::{DocCommentTree, TypeElement};
use imports::Resolver;
use types::Scope;

/// One extracted compilation unit.
pub(crate) struct CompilationUnit {
    pub package: String,
    /// Doc comment attached to the package declaration (package-info.java).
    pub package_doc: Option<DocCommentTree>,
    pub types: Vec<TypeElement>,
}

/// First pass: the qualified names of every type a compilation unit declares,
/// nested types included. Resolution in the second pass needs the full set.
pub(crate) fn scan_declared_types(content: &str, tree: &Tree) -> Vec<String> {
    let root = tree.root_node();
    let package = find_package(content, root)
        .map(|(name, _)| name)
        .unwrap_or_default();

    let mut names = Vec::new();
    for child in root.named_children(&mut root.walk()) {
        scan_declaration(content, child, &package, None, &mut names);
    }
    names
}

fn scan_declaration(
    content: &str,
    node: Node,
    package: &str,
    enclosing: Option<&str>,
    names: &mut Vec<String>,
) {
    if !matches!(
        node.kind(),
        "class_declaration"
            | "interface_declaration"
            | "enum_declaration"
            | "annotation_type_declaration"
    ) {
        return;
    }
    let Some(name_node) = node.child_by_field_name("name") else {
        return;
    };
    let simple = helpers::node_text(content, &name_node);
    let qualified = match (enclosing, package.is_empty()) {
        (Some(outer), _) => format!("{outer}.{simple}"),
        (None, false) => format!("{package}.{simple}"),
        (None, true) => simple,
    };
    names.push(qualified.clone());

    if let Some(body) = node.child_by_field_name("body") {
        for child in body.named_children(&mut body.walk()) {
            if child.kind() == "enum_body_declarations" {
                for inner in child.named_children(&mut child.walk()) {
                    scan_declaration(content, inner, package, Some(&qualified), names);
                }
            } else {
                scan_declaration(content, child, package, Some(&qualified), names);
            }
        }
    }
}

/// Second pass: extract a compilation unit against the full set of known
/// type names.
pub(crate) fn extract_unit(
    content: &str,
    tree: &Tree,
    known: std::collections::HashSet<String>,
) -> CompilationUnit {
    let root = tree.root_node();
    let (package, package_doc) = find_package(content, root).unwrap_or_default();

    let mut resolver = Resolver::new(package.clone(), known);
    for child in root.named_children(&mut root.walk()) {
        if child.kind() == "import_declaration" {
            resolver.add_import(content, child);
        }
    }

    let mut extracted = Vec::new();
    for child in root.named_children(&mut root.walk()) {
        classes::extract_type_declaration(
            content,
            child,
            &package,
            None,
            &resolver,
            &Scope::default(),
            &mut extracted,
        );
    }

    CompilationUnit {
        package,
        package_doc,
        types: extracted,
    }
}

fn find_package(content: &str, root: Node) -> Option<(String, Option<DocCommentTree>)> {
    let package_node = root
        .named_children(&mut root.walk())
        .find(|c| c.kind() == "package_declaration")?;
    let name = imports::package_name(content, package_node);
    let doc = helpers::find_doc_comment(content, &package_node)
        .map(|raw| doc_comments::parse_javadoc(&raw));
    Some((name, doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::java_parser;

    #[test]
    fn scan_collects_nested_declarations() {
        let source = "package p; class Outer { enum E { A; interface Deep {} } }";
        let tree = java_parser().unwrap().parse(source, None).unwrap();
        let names = scan_declared_types(source, &tree);
        assert_eq!(names, vec!["p.Outer", "p.Outer.E", "p.Outer.E.Deep"]);
    }

    #[test]
    fn default_package_uses_bare_names() {
        let source = "class C {}";
        let tree = java_parser().unwrap().parse(source, None).unwrap();
        assert_eq!(scan_declared_types(source, &tree), vec!["C"]);
    }
}
