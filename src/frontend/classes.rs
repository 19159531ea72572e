//! Class, interface, enum, and annotation-type declaration extraction.

use tree_sitter::Node;

use crate::model::{
    ElementKind, ExecutableElement, Modifier, TypeElement, TypeMirror, VariableElement,
};

use super::annotations::extract_annotations;
use super::doc_comments::parse_javadoc;
use super::fields;
use super::helpers;
use super::imports::Resolver;
use super::methods;
use super::types::{parse_type, parse_type_parameters, Scope};

/// Extract a type declaration and, recursively, its nested declarations.
/// Elements land in `out` outer-first, preserving source order.
pub(super) fn extract_type_declaration(
    content: &str,
    node: Node,
    package: &str,
    enclosing: Option<&str>,
    resolver: &Resolver,
    scope: &Scope,
    out: &mut Vec<TypeElement>,
) {
    let kind = match node.kind() {
        "class_declaration" => ElementKind::Class,
        "interface_declaration" => ElementKind::Interface,
        "enum_declaration" => ElementKind::Enum,
        "annotation_type_declaration" => ElementKind::AnnotationType,
        _ => return,
    };

    let simple_name = node
        .child_by_field_name("name")
        .map(|n| helpers::node_text(content, &n))
        .unwrap_or_default();
    let qualified_name = match (enclosing, package.is_empty()) {
        (Some(outer), _) => format!("{outer}.{simple_name}"),
        (None, false) => format!("{package}.{simple_name}"),
        (None, true) => simple_name.clone(),
    };

    let mut local_scope = scope.clone();
    local_scope.enclosing.insert(0, qualified_name.clone());
    let type_parameters = helpers::child_of_kind(node, "type_parameters")
        .map(|tp| parse_type_parameters(content, tp, resolver, &local_scope))
        .unwrap_or_default();
    local_scope.type_vars.extend(type_parameters.clone());

    let declared_type = TypeMirror::Declared {
        qualified: qualified_name.clone(),
        type_args: type_parameters.clone(),
    };

    let superclass = match kind {
        ElementKind::Class => Some(
            helpers::child_of_kind(node, "superclass")
                .and_then(|sc| {
                    sc.named_children(&mut sc.walk())
                        .next()
                        .map(|t| parse_type(content, t, resolver, &local_scope))
                })
                .unwrap_or_else(TypeMirror::object),
        ),
        // The implicit java.lang.Enum<E> supertype.
        ElementKind::Enum => Some(TypeMirror::Declared {
            qualified: "java.lang.Enum".to_string(),
            type_args: vec![declared_type.clone()],
        }),
        _ => None,
    };

    let interfaces_clause = match kind {
        ElementKind::Interface => helpers::child_of_kind(node, "extends_interfaces"),
        _ => helpers::child_of_kind(node, "super_interfaces"),
    };
    let interfaces = interfaces_clause
        .and_then(|clause| helpers::child_of_kind(clause, "type_list"))
        .map(|list| {
            list.named_children(&mut list.walk())
                .map(|t| parse_type(content, t, resolver, &local_scope))
                .collect()
        })
        .unwrap_or_default();

    let modifiers = helpers::extract_modifiers(content, node);

    let mut members = Members::default();
    let mut nested: Vec<Node> = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        collect_members(
            content,
            body,
            &declared_type,
            resolver,
            &local_scope,
            &mut members,
            &mut nested,
        );
    }
    // A class without an explicit constructor still has the compiler-provided
    // default one, with the class's own access level (JLS 8.8.9).
    if kind == ElementKind::Class && members.constructors.is_empty() {
        members
            .constructors
            .push(default_constructor(&modifiers, &declared_type));
    }

    out.push(TypeElement {
        simple_name,
        qualified_name: qualified_name.clone(),
        kind,
        package_name: package.to_string(),
        enclosing_type: enclosing.map(|e| e.to_string()),
        modifiers,
        annotations: extract_annotations(content, node, resolver, scope),
        type_parameters,
        superclass,
        interfaces,
        fields: members.fields,
        constructors: members.constructors,
        methods: members.methods,
        doc: helpers::find_doc_comment(content, &node).map(|raw| parse_javadoc(&raw)),
    });

    for nested_node in nested {
        extract_type_declaration(
            content,
            nested_node,
            package,
            Some(&qualified_name),
            resolver,
            &local_scope,
            out,
        );
    }
}

fn default_constructor(class_modifiers: &[Modifier], declared_type: &TypeMirror) -> ExecutableElement {
    let access = class_modifiers
        .iter()
        .copied()
        .filter(|m| matches!(m, Modifier::Public | Modifier::Protected | Modifier::Private))
        .collect();
    ExecutableElement {
        simple_name: "<init>".to_string(),
        kind: ElementKind::Constructor,
        modifiers: access,
        annotations: Vec::new(),
        parameters: Vec::new(),
        thrown_types: Vec::new(),
        return_type: declared_type.clone(),
        is_varargs: false,
        default_value: None,
        doc: None,
    }
}

#[derive(Default)]
struct Members {
    fields: Vec<VariableElement>,
    constructors: Vec<ExecutableElement>,
    methods: Vec<ExecutableElement>,
}

/// Walk a type body, collecting members in source order and deferring nested
/// type declarations. Enum bodies nest their non-constant members inside an
/// `enum_body_declarations` node, which is flattened here.
fn collect_members<'t>(
    content: &str,
    body: Node<'t>,
    declared_type: &TypeMirror,
    resolver: &Resolver,
    scope: &Scope,
    members: &mut Members,
    nested: &mut Vec<Node<'t>>,
) {
    for child in body.named_children(&mut body.walk()) {
        match child.kind() {
            "field_declaration" | "constant_declaration" => {
                members
                    .fields
                    .extend(fields::extract_fields(content, child, resolver, scope));
            }
            "enum_constant" => {
                members.fields.push(fields::extract_enum_constant(
                    content,
                    child,
                    declared_type,
                    resolver,
                    scope,
                ));
            }
            "method_declaration" => {
                members
                    .methods
                    .push(methods::extract_method(content, child, resolver, scope));
            }
            "constructor_declaration" => {
                members.constructors.push(methods::extract_constructor(
                    content,
                    child,
                    declared_type,
                    resolver,
                    scope,
                ));
            }
            "annotation_type_element_declaration" => {
                members.methods.push(methods::extract_annotation_type_element(
                    content, child, resolver, scope,
                ));
            }
            "enum_body_declarations" => {
                collect_members(
                    content,
                    child,
                    declared_type,
                    resolver,
                    scope,
                    members,
                    nested,
                );
            }
            "class_declaration" | "interface_declaration" | "enum_declaration"
            | "annotation_type_declaration" => {
                nested.push(child);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::java_parser;
    use crate::model::Modifier;

    fn extract(source: &str, package: &str, known: &[&str]) -> Vec<TypeElement> {
        let tree = java_parser().unwrap().parse(source, None).unwrap();
        let resolver = Resolver::new(
            package.to_string(),
            known.iter().map(|s| s.to_string()).collect(),
        );
        let mut out = Vec::new();
        let root = tree.root_node();
        for child in root.named_children(&mut root.walk()) {
            extract_type_declaration(
                source,
                child,
                package,
                None,
                &resolver,
                &Scope::default(),
                &mut out,
            );
        }
        out
    }

    #[test]
    fn class_defaults_to_object_superclass() {
        let types = extract("public class C {}", "p", &["p.C"]);
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].qualified_name, "p.C");
        assert_eq!(types[0].superclass, Some(TypeMirror::object()));
        assert!(types[0].modifiers.contains(&Modifier::Public));
    }

    #[test]
    fn empty_class_gets_a_default_constructor() {
        let types = extract("public class C {}", "p", &["p.C"]);
        assert_eq!(types[0].constructors.len(), 1);
        let ctor = &types[0].constructors[0];
        assert_eq!(ctor.simple_name, "<init>");
        assert_eq!(ctor.kind, ElementKind::Constructor);
        assert_eq!(ctor.modifiers, vec![Modifier::Public]);
        assert!(ctor.parameters.is_empty());
        assert_eq!(ctor.return_type.to_string(), "p.C");

        // An explicit constructor suppresses the synthesized one, and
        // interfaces never get one.
        let types = extract("public class C { private C() {} }", "p", &["p.C"]);
        assert_eq!(types[0].constructors.len(), 1);
        assert_eq!(types[0].constructors[0].modifiers, vec![Modifier::Private]);
        let types = extract("public interface I {}", "p", &["p.I"]);
        assert!(types[0].constructors.is_empty());
    }

    #[test]
    fn nested_types_are_flattened_after_the_outer() {
        let types = extract(
            "public class Outer { public class Inner {} }",
            "p",
            &["p.Outer", "p.Outer.Inner"],
        );
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].qualified_name, "p.Outer");
        assert_eq!(types[1].qualified_name, "p.Outer.Inner");
        assert_eq!(types[1].enclosing_type.as_deref(), Some("p.Outer"));
    }

    #[test]
    fn enum_gets_implicit_enum_supertype_and_constants() {
        let types = extract("public enum Color { RED, GREEN; int f; }", "p", &["p.Color"]);
        let color = &types[0];
        assert_eq!(color.kind, ElementKind::Enum);
        let superclass = color.superclass.as_ref().unwrap();
        assert_eq!(superclass.to_string(), "java.lang.Enum<p.Color>");
        let constants: Vec<&str> = color
            .fields
            .iter()
            .filter(|f| f.kind == ElementKind::EnumConstant)
            .map(|f| f.simple_name.as_str())
            .collect();
        assert_eq!(constants, vec!["RED", "GREEN"]);
        assert!(color
            .fields
            .iter()
            .any(|f| f.kind == ElementKind::Field && f.simple_name == "f"));
    }

    #[test]
    fn annotation_type_elements_become_methods() {
        let types = extract(
            "public @interface A { int[] ids() default {}; }",
            "p",
            &["p.A"],
        );
        let annotation = &types[0];
        assert_eq!(annotation.kind, ElementKind::AnnotationType);
        assert_eq!(annotation.methods.len(), 1);
        assert_eq!(annotation.methods[0].simple_name, "ids");
        assert_eq!(annotation.methods[0].return_type.to_string(), "int[]");
        assert!(annotation.methods[0].default_value.is_some());
    }

    #[test]
    fn generic_class_bounds() {
        let types = extract(
            "public class C<T extends Number & Runnable> {}",
            "p",
            &["p.C"],
        );
        let tv = &types[0].type_parameters[0];
        match tv {
            TypeMirror::TypeVariable { name, lower, upper } => {
                assert_eq!(name, "T");
                assert_eq!(**lower, TypeMirror::Null);
                assert_eq!(
                    upper.to_string(),
                    "java.lang.Number&java.lang.Runnable"
                );
            }
            other => panic!("expected a type variable, got {other:?}"),
        }
    }
}
