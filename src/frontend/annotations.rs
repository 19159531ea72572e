//! Annotation uses: mirrors and their recursively structured element values.

use tree_sitter::Node;

use crate::model::{AnnotationMirror, AnnotationValue, TypeMirror};

use super::helpers;
use super::imports::Resolver;
use super::types::Scope;

/// Extract annotation mirrors from a declaration's `modifiers` node.
pub(super) fn extract_annotations(
    content: &str,
    node: Node,
    resolver: &Resolver,
    scope: &Scope,
) -> Vec<AnnotationMirror> {
    helpers::modifiers_node(node)
        .map(|modifiers| {
            modifiers
                .children(&mut modifiers.walk())
                .filter(|c| matches!(c.kind(), "marker_annotation" | "annotation"))
                .map(|c| parse_annotation(content, c, resolver, scope))
                .collect()
        })
        .unwrap_or_default()
}

/// Parse one annotation use. An annotation type missing from the known set
/// yields an error type mirror; the core decoder logs it and keeps going.
pub(super) fn parse_annotation(
    content: &str,
    node: Node,
    resolver: &Resolver,
    scope: &Scope,
) -> AnnotationMirror {
    let name = node
        .child_by_field_name("name")
        .map(|n| helpers::node_text(content, &n))
        .unwrap_or_default();

    let type_mirror = match resolver.try_resolve(&name, scope) {
        Some(qualified) => TypeMirror::declared(qualified),
        None => TypeMirror::Error(name),
    };

    let element_values = node
        .child_by_field_name("arguments")
        .map(|arguments| parse_argument_list(content, arguments, resolver, scope))
        .unwrap_or_default();

    AnnotationMirror {
        type_mirror,
        element_values,
    }
}

fn parse_argument_list(
    content: &str,
    node: Node,
    resolver: &Resolver,
    scope: &Scope,
) -> Vec<(String, AnnotationValue)> {
    let mut values = Vec::new();
    for child in node.named_children(&mut node.walk()) {
        if child.kind() == "element_value_pair" {
            let key = child
                .child_by_field_name("key")
                .map(|k| helpers::node_text(content, &k))
                .unwrap_or_default();
            if let Some(value) = child.child_by_field_name("value") {
                values.push((key, parse_element_value(content, value, resolver, scope)));
            }
        } else if !child.kind().contains("comment") {
            // Single-element shorthand: `@A("x")` sets the `value` element.
            values.push((
                "value".to_string(),
                parse_element_value(content, child, resolver, scope),
            ));
        }
    }
    values
}

/// Parse an element value node into the tagged annotation-value union.
pub(super) fn parse_element_value(
    content: &str,
    node: Node,
    resolver: &Resolver,
    scope: &Scope,
) -> AnnotationValue {
    match node.kind() {
        "string_literal" => AnnotationValue::Text(unquote(&helpers::node_text(content, &node))),
        "character_literal"
        | "decimal_integer_literal"
        | "hex_integer_literal"
        | "octal_integer_literal"
        | "binary_integer_literal"
        | "decimal_floating_point_literal"
        | "hex_floating_point_literal"
        | "true"
        | "false" => AnnotationValue::Primitive(helpers::node_text(content, &node)),
        "unary_expression" | "binary_expression" => {
            AnnotationValue::Primitive(helpers::node_text(content, &node))
        }
        "class_literal" => {
            let text = helpers::node_text(content, &node);
            let name = text.strip_suffix(".class").unwrap_or(&text);
            AnnotationValue::TypeRef(resolver.resolve(name, scope))
        }
        "field_access" => {
            let object = node
                .child_by_field_name("object")
                .map(|o| helpers::node_text(content, &o))
                .unwrap_or_default();
            let constant = node
                .child_by_field_name("field")
                .map(|f| helpers::node_text(content, &f))
                .unwrap_or_default();
            AnnotationValue::EnumRef {
                type_qualified: resolver.resolve(&object, scope),
                constant,
            }
        }
        "identifier" => AnnotationValue::EnumRef {
            type_qualified: String::new(),
            constant: helpers::node_text(content, &node),
        },
        "element_value_array_initializer" => {
            let elements = node
                .named_children(&mut node.walk())
                .filter(|c| !c.kind().contains("comment"))
                .map(|c| parse_element_value(content, c, resolver, scope))
                .collect();
            AnnotationValue::Array(elements)
        }
        "annotation" | "marker_annotation" => {
            AnnotationValue::Annotation(parse_annotation(content, node, resolver, scope))
        }
        // Constant expressions we do not fold keep their textual form.
        _ => AnnotationValue::Primitive(helpers::node_text(content, &node)),
    }
}

fn unquote(literal: &str) -> String {
    literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::java_parser;
    use std::collections::HashSet;

    fn parse_first_annotation(source: &str) -> AnnotationMirror {
        let tree = java_parser().unwrap().parse(source, None).unwrap();
        let class_node = tree.root_node().named_child(0).unwrap();
        let resolver = Resolver::new(String::new(), HashSet::new());
        let scope = Scope::default();
        let annotations = extract_annotations(source, class_node, &resolver, &scope);
        annotations.into_iter().next().expect("an annotation")
    }

    #[test]
    fn marker_annotation_resolves_java_lang() {
        let mirror = parse_first_annotation("@Deprecated class C {}");
        assert_eq!(
            mirror.type_mirror,
            TypeMirror::declared("java.lang.Deprecated")
        );
        assert!(mirror.element_values.is_empty());
    }

    #[test]
    fn shorthand_value_argument() {
        let mirror = parse_first_annotation("@SuppressWarnings(\"unchecked\") class C {}");
        assert_eq!(mirror.element_values.len(), 1);
        assert_eq!(mirror.element_values[0].0, "value");
        assert_eq!(
            mirror.element_values[0].1,
            AnnotationValue::Text("unchecked".to_string())
        );
    }

    #[test]
    fn array_argument_keeps_element_order() {
        let mirror = parse_first_annotation("@A(ids = {1, 2}) class C {}");
        let (name, value) = &mirror.element_values[0];
        assert_eq!(name, "ids");
        assert_eq!(
            *value,
            AnnotationValue::Array(vec![
                AnnotationValue::Primitive("1".to_string()),
                AnnotationValue::Primitive("2".to_string()),
            ])
        );
    }

    #[test]
    fn unresolvable_annotation_type_becomes_error_mirror() {
        let mirror = parse_first_annotation("@Missing class C {}");
        assert_eq!(mirror.type_mirror, TypeMirror::Error("Missing".to_string()));
    }

    #[test]
    fn class_literal_and_enum_constant_values() {
        let mirror =
            parse_first_annotation("@A(type = String.class, color = p.Color.RED) class C {}");
        assert_eq!(
            mirror.element_values[0].1,
            AnnotationValue::TypeRef("java.lang.String".to_string())
        );
        assert_eq!(
            mirror.element_values[1].1,
            AnnotationValue::EnumRef {
                type_qualified: "p.Color".to_string(),
                constant: "RED".to_string(),
            }
        );
    }
}
