//! Javadoc comment parsing: narrative body plus block tags.

use crate::model::{BlockTag, DocCommentTree};

/// Parse a raw `/** ... */` comment into a doc comment tree. Returns a tree
/// even when the body is empty, so "documented but blank" is distinguishable
/// from "undocumented".
pub(super) fn parse_javadoc(raw: &str) -> DocCommentTree {
    let mut body_lines: Vec<String> = Vec::new();
    let mut block_tags: Vec<BlockTag> = Vec::new();
    let mut current_tag: Option<Vec<String>> = None;

    for line in clean_lines(raw) {
        if is_tag_start(&line) {
            if let Some(lines) = current_tag.take() {
                push_tag(&mut block_tags, lines);
            }
            current_tag = Some(vec![line]);
        } else if let Some(lines) = current_tag.as_mut() {
            if !line.is_empty() {
                lines.push(line);
            }
        } else {
            body_lines.push(line);
        }
    }
    if let Some(lines) = current_tag.take() {
        push_tag(&mut block_tags, lines);
    }

    let full_body = body_lines.join("\n").trim().to_string();
    DocCommentTree {
        full_body,
        block_tags,
    }
}

/// Strip the comment delimiters and the decorative leading `*` per line.
fn clean_lines(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let inner = trimmed.strip_prefix("/**").unwrap_or(trimmed);
    let inner = inner.strip_suffix("*/").unwrap_or(inner);

    inner
        .lines()
        .map(|line| {
            let line = line.trim_start();
            let line = line.strip_prefix('*').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line).trim_end().to_string()
        })
        .collect()
}

fn is_tag_start(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('@') && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
}

fn push_tag(block_tags: &mut Vec<BlockTag>, lines: Vec<String>) {
    let text = lines.join(" ").trim().to_string();
    let name = text
        .split_whitespace()
        .next()
        .unwrap_or("@")
        .trim_start_matches('@')
        .to_string();
    block_tags.push(BlockTag { name, text });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_and_tags_are_split() {
        let doc = parse_javadoc(
            "/**\n * Adds two numbers.\n *\n * @param a the first\n * @param b the second\n * @return the sum\n */",
        );
        assert_eq!(doc.full_body, "Adds two numbers.");
        assert_eq!(doc.block_tags.len(), 3);
        assert_eq!(doc.block_tags[0].name, "param");
        assert_eq!(doc.block_tags[0].text, "@param a the first");
        assert_eq!(doc.block_tags[2].name, "return");
        assert_eq!(doc.block_tags[2].text, "@return the sum");
    }

    #[test]
    fn tag_continuation_lines_fold_into_the_tag() {
        let doc = parse_javadoc("/**\n * @param a a rather long\n *        description\n */");
        assert_eq!(doc.block_tags.len(), 1);
        assert_eq!(doc.block_tags[0].text, "@param a a rather long description");
    }

    #[test]
    fn single_line_comment() {
        let doc = parse_javadoc("/** Terse. */");
        assert_eq!(doc.full_body, "Terse.");
        assert!(doc.block_tags.is_empty());
    }

    #[test]
    fn empty_comment_keeps_empty_body() {
        let doc = parse_javadoc("/** */");
        assert_eq!(doc.full_body, "");
        assert!(doc.block_tags.is_empty());
    }
}
