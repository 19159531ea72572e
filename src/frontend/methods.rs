//! Method, constructor, and annotation-type element extraction.

use tree_sitter::Node;

use crate::model::{ElementKind, ExecutableElement, TypeMirror, VariableElement};

use super::annotations::{extract_annotations, parse_element_value};
use super::doc_comments::parse_javadoc;
use super::helpers;
use super::imports::Resolver;
use super::types::{parse_type, parse_type_parameters, Scope};

/// Extract a `method_declaration` node.
pub(super) fn extract_method(
    content: &str,
    node: Node,
    resolver: &Resolver,
    scope: &Scope,
) -> ExecutableElement {
    // Type parameters declared on the method widen the scope for the return
    // type, parameters, and thrown types.
    let mut local_scope = scope.clone();
    if let Some(type_params) = helpers::child_of_kind(node, "type_parameters") {
        local_scope
            .type_vars
            .extend(parse_type_parameters(content, type_params, resolver, scope));
    }

    let name = node
        .child_by_field_name("name")
        .map(|n| helpers::node_text(content, &n))
        .unwrap_or_default();
    let return_type = node
        .child_by_field_name("type")
        .map(|t| parse_type(content, t, resolver, &local_scope))
        .unwrap_or(TypeMirror::Void);
    let (parameters, is_varargs) = extract_parameters(content, node, resolver, &local_scope);

    ExecutableElement {
        simple_name: name,
        kind: ElementKind::Method,
        modifiers: helpers::extract_modifiers(content, node),
        annotations: extract_annotations(content, node, resolver, scope),
        parameters,
        thrown_types: extract_throws(content, node, resolver, &local_scope),
        return_type,
        is_varargs,
        default_value: None,
        doc: helpers::find_doc_comment(content, &node).map(|raw| parse_javadoc(&raw)),
    }
}

/// Extract a `constructor_declaration` node. The element's return type is
/// the declaring class's own type, so the normalized signature reads
/// `pkg.C (params)`.
pub(super) fn extract_constructor(
    content: &str,
    node: Node,
    declaring_type: &TypeMirror,
    resolver: &Resolver,
    scope: &Scope,
) -> ExecutableElement {
    let (parameters, is_varargs) = extract_parameters(content, node, resolver, scope);

    ExecutableElement {
        simple_name: "<init>".to_string(),
        kind: ElementKind::Constructor,
        modifiers: helpers::extract_modifiers(content, node),
        annotations: extract_annotations(content, node, resolver, scope),
        parameters,
        thrown_types: extract_throws(content, node, resolver, scope),
        return_type: declaring_type.clone(),
        is_varargs,
        default_value: None,
        doc: helpers::find_doc_comment(content, &node).map(|raw| parse_javadoc(&raw)),
    }
}

/// Extract an `annotation_type_element_declaration` node (`int ids() default 0;`).
pub(super) fn extract_annotation_type_element(
    content: &str,
    node: Node,
    resolver: &Resolver,
    scope: &Scope,
) -> ExecutableElement {
    let name = node
        .child_by_field_name("name")
        .map(|n| helpers::node_text(content, &n))
        .unwrap_or_default();
    let return_type = node
        .child_by_field_name("type")
        .map(|t| parse_type(content, t, resolver, scope))
        .unwrap_or(TypeMirror::Void);
    let default_value = node
        .child_by_field_name("value")
        .map(|value| parse_element_value(content, value, resolver, scope));

    ExecutableElement {
        simple_name: name,
        kind: ElementKind::Method,
        modifiers: helpers::extract_modifiers(content, node),
        annotations: extract_annotations(content, node, resolver, scope),
        parameters: Vec::new(),
        thrown_types: Vec::new(),
        return_type,
        is_varargs: false,
        default_value,
        doc: helpers::find_doc_comment(content, &node).map(|raw| parse_javadoc(&raw)),
    }
}

fn extract_parameters(
    content: &str,
    node: Node,
    resolver: &Resolver,
    scope: &Scope,
) -> (Vec<VariableElement>, bool) {
    let Some(list) = node.child_by_field_name("parameters") else {
        return (Vec::new(), false);
    };

    let mut parameters = Vec::new();
    let mut is_varargs = false;
    for child in list.named_children(&mut list.walk()) {
        match child.kind() {
            "formal_parameter" => {
                parameters.push(extract_formal_parameter(content, child, resolver, scope));
            }
            "spread_parameter" => {
                is_varargs = true;
                parameters.push(extract_spread_parameter(content, child, resolver, scope));
            }
            _ => {}
        }
    }
    (parameters, is_varargs)
}

fn extract_formal_parameter(
    content: &str,
    node: Node,
    resolver: &Resolver,
    scope: &Scope,
) -> VariableElement {
    let name = node
        .child_by_field_name("name")
        .map(|n| helpers::node_text(content, &n))
        .unwrap_or_default();
    let mut type_mirror = node
        .child_by_field_name("type")
        .map(|t| parse_type(content, t, resolver, scope))
        .unwrap_or_else(TypeMirror::object);
    // `String args[]` puts the brackets on the declarator.
    if let Some(dimensions) = node.child_by_field_name("dimensions") {
        for _ in 0..helpers::node_text(content, &dimensions).matches('[').count() {
            type_mirror = TypeMirror::Array {
                component: Box::new(type_mirror),
            };
        }
    }

    parameter_element(content, node, name, type_mirror, resolver, scope)
}

/// A varargs declaration `Object... xs` is an array-typed parameter.
fn extract_spread_parameter(
    content: &str,
    node: Node,
    resolver: &Resolver,
    scope: &Scope,
) -> VariableElement {
    let component = node
        .named_children(&mut node.walk())
        .find(|c| {
            !matches!(c.kind(), "modifiers" | "variable_declarator") && !c.kind().contains("comment")
        })
        .map(|t| parse_type(content, t, resolver, scope))
        .unwrap_or_else(TypeMirror::object);
    let name = helpers::child_of_kind(node, "variable_declarator")
        .and_then(|d| d.child_by_field_name("name"))
        .map(|n| helpers::node_text(content, &n))
        .unwrap_or_default();

    let type_mirror = TypeMirror::Array {
        component: Box::new(component),
    };
    parameter_element(content, node, name, type_mirror, resolver, scope)
}

fn parameter_element(
    content: &str,
    node: Node,
    simple_name: String,
    type_mirror: TypeMirror,
    resolver: &Resolver,
    scope: &Scope,
) -> VariableElement {
    VariableElement {
        simple_name,
        kind: ElementKind::Parameter,
        modifiers: helpers::extract_modifiers(content, node),
        annotations: extract_annotations(content, node, resolver, scope),
        type_mirror,
        constant_value: None,
        doc: None,
    }
}

fn extract_throws(
    content: &str,
    node: Node,
    resolver: &Resolver,
    scope: &Scope,
) -> Vec<TypeMirror> {
    helpers::child_of_kind(node, "throws")
        .map(|throws| {
            throws
                .named_children(&mut throws.walk())
                .map(|t| parse_type(content, t, resolver, scope))
                .collect()
        })
        .unwrap_or_default()
}
