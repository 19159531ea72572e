//! Field and enum-constant extraction, including compile-time constants.

use tree_sitter::Node;

use crate::model::{ElementKind, Modifier, TypeMirror, VariableElement};

use super::annotations::extract_annotations;
use super::doc_comments::parse_javadoc;
use super::helpers;
use super::imports::Resolver;
use super::types::{parse_type, Scope};

/// Extract every declarator of a `field_declaration` as its own variable
/// element; `int a, b;` yields two fields.
pub(super) fn extract_fields(
    content: &str,
    node: Node,
    resolver: &Resolver,
    scope: &Scope,
) -> Vec<VariableElement> {
    let modifiers = helpers::extract_modifiers(content, node);
    let annotations = extract_annotations(content, node, resolver, scope);
    let base_type = node
        .child_by_field_name("type")
        .map(|t| parse_type(content, t, resolver, scope))
        .unwrap_or_else(TypeMirror::object);
    let doc = helpers::find_doc_comment(content, &node).map(|raw| parse_javadoc(&raw));

    let mut fields = Vec::new();
    let mut cursor = node.walk();
    for declarator in node.children_by_field_name("declarator", &mut cursor) {
        let name = declarator
            .child_by_field_name("name")
            .map(|n| helpers::node_text(content, &n))
            .unwrap_or_default();

        // C-style trailing brackets add dimensions on top of the base type.
        let extra_dimensions = declarator
            .child_by_field_name("dimensions")
            .map(|d| helpers::node_text(content, &d).matches('[').count())
            .unwrap_or(0);
        let mut type_mirror = base_type.clone();
        for _ in 0..extra_dimensions {
            type_mirror = TypeMirror::Array {
                component: Box::new(type_mirror),
            };
        }

        let constant_value = if modifiers.contains(&Modifier::Final) {
            declarator
                .child_by_field_name("value")
                .and_then(|value| constant_text(content, value))
        } else {
            None
        };

        fields.push(VariableElement {
            simple_name: name,
            kind: ElementKind::Field,
            modifiers: modifiers.clone(),
            annotations: annotations.clone(),
            type_mirror,
            constant_value,
            doc: doc.clone(),
        });
    }
    fields
}

/// Extract one `enum_constant` node. The constant's type is the declaring
/// enum itself.
pub(super) fn extract_enum_constant(
    content: &str,
    node: Node,
    enum_type: &TypeMirror,
    resolver: &Resolver,
    scope: &Scope,
) -> VariableElement {
    let name = node
        .child_by_field_name("name")
        .map(|n| helpers::node_text(content, &n))
        .unwrap_or_default();
    let doc = helpers::find_doc_comment(content, &node).map(|raw| parse_javadoc(&raw));

    VariableElement {
        simple_name: name,
        kind: ElementKind::EnumConstant,
        modifiers: vec![Modifier::Public, Modifier::Static, Modifier::Final],
        annotations: extract_annotations(content, node, resolver, scope),
        type_mirror: enum_type.clone(),
        constant_value: None,
        doc,
    }
}

/// Render a compile-time constant initializer the way the language's
/// `String.valueOf` would: strings and characters unquoted, numeric suffix
/// letters dropped. Non-literal initializers are not constants.
fn constant_text(content: &str, node: Node) -> Option<String> {
    let text = helpers::node_text(content, &node);
    match node.kind() {
        "string_literal" => Some(
            text.strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(&text)
                .to_string(),
        ),
        "character_literal" => Some(
            text.strip_prefix('\'')
                .and_then(|s| s.strip_suffix('\''))
                .unwrap_or(&text)
                .to_string(),
        ),
        "decimal_integer_literal" | "hex_integer_literal" | "octal_integer_literal"
        | "binary_integer_literal" => Some(integer_text(&text, node.kind())),
        "decimal_floating_point_literal" | "hex_floating_point_literal" => {
            Some(text.trim_end_matches(['f', 'F', 'd', 'D']).to_string())
        }
        "true" | "false" => Some(text),
        "unary_expression" => {
            let operand = node.child_by_field_name("operand")?;
            let rendered = constant_text(content, operand)?;
            let operator = node
                .child_by_field_name("operator")
                .map(|op| helpers::node_text(content, &op))
                .unwrap_or_default();
            Some(format!("{operator}{rendered}"))
        }
        _ => None,
    }
}

/// Render an integer literal as the decimal string of its value, the way the
/// language's `String.valueOf` prints the folded constant. Non-decimal
/// literals wrap through the declared width first, so `0xFFFFFFFF` is `-1`.
fn integer_text(text: &str, kind: &str) -> String {
    let mut digits: String = text.chars().filter(|c| *c != '_').collect();
    let is_long = digits.ends_with(['l', 'L']);
    if is_long {
        digits.pop();
    }
    let (radix, body) = match kind {
        "hex_integer_literal" => (16, &digits[2..]),
        "binary_integer_literal" => (2, &digits[2..]),
        "octal_integer_literal" => (8, digits.as_str()),
        _ => return digits,
    };
    match u128::from_str_radix(body, radix) {
        Ok(value) if is_long => (value as i64).to_string(),
        Ok(value) => (value as i32).to_string(),
        Err(_) => digits,
    }
}
