//! Shared node utilities: text slicing, modifier sets, doc-comment discovery.

use tree_sitter::Node;

use crate::model::Modifier;

/// Get text from a tree-sitter node, handling UTF-8 boundaries.
pub(super) fn node_text(content: &str, node: &Node) -> String {
    let bytes = content.as_bytes();
    let start = node.start_byte();
    let end = node.end_byte();
    if start < bytes.len() && end <= bytes.len() {
        String::from_utf8_lossy(&bytes[start..end]).to_string()
    } else {
        String::new()
    }
}

/// Find the first child with the given kind.
pub(super) fn child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    node.children(&mut node.walk()).find(|c| c.kind() == kind)
}

/// The `modifiers` child of a declaration node, when present.
pub(super) fn modifiers_node(node: Node<'_>) -> Option<Node<'_>> {
    child_of_kind(node, "modifiers")
}

/// Extract the modifier keywords from a declaration node. Annotations living
/// in the same `modifiers` node are handled by the annotation extractor.
pub(super) fn extract_modifiers(content: &str, node: Node) -> Vec<Modifier> {
    modifiers_node(node)
        .map(|modifiers| {
            modifiers
                .children(&mut modifiers.walk())
                .filter_map(|c| Modifier::from_keyword(&node_text(content, &c)))
                .collect()
        })
        .unwrap_or_default()
}

/// Find the javadoc comment for a declaration node: the nearest preceding
/// sibling block comment opening with `/**`.
pub(super) fn find_doc_comment(content: &str, node: &Node) -> Option<String> {
    let mut current = node.prev_named_sibling();
    while let Some(sibling) = current {
        if !sibling.kind().contains("comment") {
            return None;
        }
        let text = node_text(content, &sibling);
        if sibling.kind() == "block_comment" && text.trim_start().starts_with("/**") {
            return Some(text);
        }
        current = sibling.prev_named_sibling();
    }
    None
}
