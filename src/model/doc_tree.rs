//! Doc comment trees: the flattened narrative body plus block tags.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocCommentTree {
    /// Narrative text before the first block tag, comment markers stripped.
    pub full_body: String,
    /// Block tags in source order.
    pub block_tags: Vec<BlockTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockTag {
    /// Canonical tag name without the `@` prefix ("param", "return", ...).
    pub name: String,
    /// Full source form of the tag, including the `@name` prefix.
    pub text: String,
}

/// Seam between elements and the doc-tree service: anything carrying a doc
/// comment exposes it through here so the comment extractor is uniform.
pub trait Documented {
    fn doc(&self) -> Option<&DocCommentTree>;
}
