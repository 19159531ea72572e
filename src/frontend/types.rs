//! Type expression nodes to type mirrors, and type parameter declarations.

use tree_sitter::Node;

use crate::model::TypeMirror;

use super::helpers;
use super::imports::Resolver;

/// Resolution scope at a point in the tree: the qualified names of enclosing
/// type declarations (innermost first) and the type variables in scope.
#[derive(Debug, Clone, Default)]
pub(crate) struct Scope {
    pub enclosing: Vec<String>,
    pub type_vars: Vec<TypeMirror>,
}

impl Scope {
    /// Look up a type variable by name, innermost declaration first.
    pub fn type_var(&self, name: &str) -> Option<&TypeMirror> {
        self.type_vars.iter().rev().find(
            |tv| matches!(tv, TypeMirror::TypeVariable { name: var, .. } if var == name),
        )
    }
}

/// Parse a type expression node into a type mirror.
pub(super) fn parse_type(
    content: &str,
    node: Node,
    resolver: &Resolver,
    scope: &Scope,
) -> TypeMirror {
    match node.kind() {
        "void_type" => TypeMirror::Void,
        "integral_type" | "floating_point_type" | "boolean_type" => {
            TypeMirror::Primitive(helpers::node_text(content, &node))
        }
        "type_identifier" => {
            let name = helpers::node_text(content, &node);
            if let Some(var) = scope.type_var(&name) {
                return var.clone();
            }
            TypeMirror::declared(resolver.resolve(&name, scope))
        }
        "scoped_type_identifier" => {
            let name = helpers::node_text(content, &node);
            TypeMirror::declared(resolver.resolve(&name, scope))
        }
        "generic_type" => parse_generic_type(content, node, resolver, scope),
        "array_type" => {
            let component = node
                .child_by_field_name("element")
                .map(|element| parse_type(content, element, resolver, scope))
                .unwrap_or_else(TypeMirror::object);
            let dimension = node
                .child_by_field_name("dimensions")
                .map(|d| helpers::node_text(content, &d).matches('[').count())
                .unwrap_or(1)
                .max(1);
            wrap_array(component, dimension)
        }
        "wildcard" => parse_wildcard(content, node, resolver, scope),
        "annotated_type" => {
            let inner: Vec<Node> = node
                .named_children(&mut node.walk())
                .filter(|c| !c.kind().contains("annotation"))
                .collect();
            inner
                .last()
                .map(|inner| parse_type(content, *inner, resolver, scope))
                .unwrap_or_else(TypeMirror::object)
        }
        // Best effort for anything the grammar surfaces that we do not model.
        _ => TypeMirror::declared(helpers::node_text(content, &node)),
    }
}

fn parse_generic_type(
    content: &str,
    node: Node,
    resolver: &Resolver,
    scope: &Scope,
) -> TypeMirror {
    let base = node
        .named_children(&mut node.walk())
        .find(|c| matches!(c.kind(), "type_identifier" | "scoped_type_identifier"))
        .map(|c| helpers::node_text(content, &c))
        .unwrap_or_default();
    let qualified = resolver.resolve(&base, scope);

    let type_args = helpers::child_of_kind(node, "type_arguments")
        .map(|args| {
            args.named_children(&mut args.walk())
                .map(|arg| parse_type(content, arg, resolver, scope))
                .collect()
        })
        .unwrap_or_default();

    TypeMirror::Declared {
        qualified,
        type_args,
    }
}

fn parse_wildcard(content: &str, node: Node, resolver: &Resolver, scope: &Scope) -> TypeMirror {
    // wildcard: `?` (`extends` type | `super` type)?
    let mut extends_bound = None;
    let mut super_bound = None;
    let mut pending: Option<&str> = None;
    for child in node.children(&mut node.walk()) {
        match child.kind() {
            "extends" => pending = Some("extends"),
            "super" => pending = Some("super"),
            kind if child.is_named() && !kind.contains("annotation") => {
                let bound = Box::new(parse_type(content, child, resolver, scope));
                match pending {
                    Some("super") => super_bound = Some(bound),
                    Some(_) => extends_bound = Some(bound),
                    None => {}
                }
            }
            _ => {}
        }
    }
    TypeMirror::Wildcard {
        extends_bound,
        super_bound,
    }
}

fn wrap_array(component: TypeMirror, dimension: usize) -> TypeMirror {
    (0..dimension).fold(component, |inner, _| TypeMirror::Array {
        component: Box::new(inner),
    })
}

/// Parse a `type_parameters` node into type variable mirrors. Names are
/// registered before bounds are parsed so self-referential declarations like
/// `<T extends Comparable<T>>` resolve.
pub(super) fn parse_type_parameters(
    content: &str,
    node: Node,
    resolver: &Resolver,
    outer: &Scope,
) -> Vec<TypeMirror> {
    let parameter_nodes: Vec<Node> = node
        .named_children(&mut node.walk())
        .filter(|c| c.kind() == "type_parameter")
        .collect();

    let names: Vec<String> = parameter_nodes
        .iter()
        .filter_map(|tp| {
            helpers::child_of_kind(*tp, "type_identifier")
                .or_else(|| helpers::child_of_kind(*tp, "identifier"))
        })
        .map(|id| helpers::node_text(content, &id))
        .collect();

    let mut scope = outer.clone();
    for name in &names {
        scope.type_vars.push(type_variable(name, TypeMirror::object()));
    }

    parameter_nodes
        .iter()
        .zip(names.iter())
        .map(|(tp, name)| {
            let upper = helpers::child_of_kind(*tp, "type_bound")
                .map(|bound| {
                    let mut parts: Vec<TypeMirror> = bound
                        .named_children(&mut bound.walk())
                        .map(|t| parse_type(content, t, resolver, &scope))
                        .collect();
                    match parts.len() {
                        0 => TypeMirror::object(),
                        1 => parts.remove(0),
                        _ => TypeMirror::Intersection(parts),
                    }
                })
                .unwrap_or_else(TypeMirror::object);
            type_variable(name, upper)
        })
        .collect()
}

fn type_variable(name: &str, upper: TypeMirror) -> TypeMirror {
    TypeMirror::TypeVariable {
        name: name.to_string(),
        lower: Box::new(TypeMirror::Null),
        upper: Box::new(upper),
    }
}
