//! The traversal that turns the element model into a documentation tree.
//!
//! One pass over the included type declarations, dispatching on declaration
//! kind. Every node is bucketed into its package, looked up through the
//! top-level enclosing type. All failures during the walk are recovered
//! locally; the traversal always returns a [`Root`].

mod annotation_parser;
mod type_utils;

pub use annotation_parser::AnnotationParser;
pub use type_utils::TypeUtils;

use std::collections::BTreeMap;

use tracing::debug;

use crate::doc::{
    AnnotationElementDoc, AnnotationInstance, AnnotationTypeDoc, ClassDoc, ConstructorDoc,
    EnumConstantDoc, EnumDoc, FieldDoc, InterfaceDoc, MethodDoc, MethodParameter, Package, Root,
    TagInfo, TypeParameter,
};
use crate::frontend::environment::Environment;
use crate::model::{
    Documented, ElementKind, ExecutableElement, Modifier, TypeElement, TypeMirror, VariableElement,
};

pub struct Parser<'e> {
    env: &'e Environment,
    utils: TypeUtils<'e>,
    annotations: AnnotationParser<'e>,
}

impl<'e> Parser<'e> {
    pub fn new(env: &'e Environment) -> Parser<'e> {
        Parser {
            env,
            utils: TypeUtils::new(env),
            annotations: AnnotationParser::new(env),
        }
    }

    /// The entry point into the traversal.
    pub fn parse_root_doc(&self) -> Root {
        // Sorted by package name, so two runs over the same input always
        // materialize packages in the same order.
        let mut packages: BTreeMap<String, Package> = BTreeMap::new();

        for class_doc in self.env.included_types() {
            let package = self.get_package(&mut packages, class_doc);
            match class_doc.kind {
                ElementKind::AnnotationType => {
                    let node = self.parse_annotation_type_doc(class_doc);
                    package.annotations.push(node);
                }
                ElementKind::Enum => {
                    let node = self.parse_enum(class_doc);
                    package.enums.push(node);
                }
                ElementKind::Interface => {
                    let node = self.parse_interface(class_doc);
                    package.interfaces.push(node);
                }
                _ => {
                    let node = self.parse_class(class_doc);
                    package.classes.push(node);
                }
            }
        }

        debug!(packages = packages.len(), "traversal complete");
        Root {
            packages: packages.into_values().collect(),
        }
    }

    /// The package node for a declaration, creating it on first sight. The
    /// package is found by walking outward to the top-level enclosing type.
    fn get_package<'m>(
        &self,
        packages: &'m mut BTreeMap<String, Package>,
        class_doc: &TypeElement,
    ) -> &'m mut Package {
        let mut top_level = class_doc;
        while let Some(enclosing) = top_level
            .enclosing_type
            .as_deref()
            .and_then(|qualified| self.env.get_type_element(qualified))
        {
            top_level = enclosing;
        }

        let name = top_level.package_name.clone();
        packages
            .entry(name)
            .or_insert_with_key(|name| self.parse_package(name))
    }

    fn parse_package(&self, name: &str) -> Package {
        let mut package_node = Package {
            name: name.to_string(),
            ..Package::default()
        };
        if let Some(package_doc) = self.env.package_element(name) {
            package_node.comment = self.get_comment(package_doc);
            package_node.tags = self.get_tags(package_doc);
        }
        package_node
    }

    fn parse_class(&self, class_doc: &TypeElement) -> ClassDoc {
        let class_type = class_doc.as_type();
        ClassDoc {
            name: class_doc.simple_name.clone(),
            qualified: class_doc.qualified_name.clone(),
            comment: self.get_comment(class_doc),
            scope: self.parse_scope(&class_doc.modifiers),
            is_abstract: self.utils.has_modifier(&class_doc.modifiers, Modifier::Abstract),
            is_error: self.utils.is_error(&class_type),
            is_exception: self.utils.is_exception(&class_type),
            is_externalizable: self.utils.is_externalizable(&class_type),
            is_serializable: self.utils.is_serializable(&class_type),
            superclass: class_doc
                .superclass
                .as_ref()
                .map(|s| self.utils.classify(s)),
            interfaces: self.parse_interfaces(class_doc),
            generics: self.parse_type_parameters(class_doc),
            fields: self.parse_fields(class_doc),
            constructors: class_doc
                .constructors
                .iter()
                .map(|c| self.parse_constructor(class_doc, c))
                .collect(),
            methods: class_doc
                .methods
                .iter()
                .map(|m| self.parse_method(m))
                .collect(),
            annotations: self.parse_annotations(&class_doc.qualified_name, &class_doc.annotations),
            tags: self.get_tags(class_doc),
        }
    }

    fn parse_interface(&self, class_doc: &TypeElement) -> InterfaceDoc {
        InterfaceDoc {
            name: class_doc.simple_name.clone(),
            qualified: class_doc.qualified_name.clone(),
            comment: self.get_comment(class_doc),
            scope: self.parse_scope(&class_doc.modifiers),
            interfaces: self.parse_interfaces(class_doc),
            generics: self.parse_type_parameters(class_doc),
            fields: self.parse_fields(class_doc),
            methods: class_doc
                .methods
                .iter()
                .map(|m| self.parse_method(m))
                .collect(),
            annotations: self.parse_annotations(&class_doc.qualified_name, &class_doc.annotations),
            tags: self.get_tags(class_doc),
        }
    }

    fn parse_enum(&self, class_doc: &TypeElement) -> EnumDoc {
        EnumDoc {
            name: class_doc.simple_name.clone(),
            qualified: class_doc.qualified_name.clone(),
            comment: self.get_comment(class_doc),
            scope: self.parse_scope(&class_doc.modifiers),
            superclass: class_doc
                .superclass
                .as_ref()
                .map(|s| self.utils.classify(s)),
            interfaces: self.parse_interfaces(class_doc),
            constants: self
                .utils
                .enum_constants_in(class_doc)
                .into_iter()
                .map(|c| self.parse_enum_constant(c))
                .collect(),
            annotations: self.parse_annotations(&class_doc.qualified_name, &class_doc.annotations),
            tags: self.get_tags(class_doc),
        }
    }

    fn parse_enum_constant(&self, field_doc: &VariableElement) -> EnumConstantDoc {
        EnumConstantDoc {
            name: field_doc.simple_name.clone(),
            comment: self.get_comment(field_doc),
            annotations: self.parse_annotations(&field_doc.simple_name, &field_doc.annotations),
            tags: self.get_tags(field_doc),
        }
    }

    fn parse_annotation_type_doc(&self, class_doc: &TypeElement) -> AnnotationTypeDoc {
        AnnotationTypeDoc {
            name: class_doc.simple_name.clone(),
            qualified: class_doc.qualified_name.clone(),
            comment: self.get_comment(class_doc),
            scope: self.parse_scope(&class_doc.modifiers),
            elements: class_doc
                .methods
                .iter()
                .map(|e| self.parse_annotation_type_element_doc(e))
                .collect(),
            annotations: self.parse_annotations(&class_doc.qualified_name, &class_doc.annotations),
            tags: self.get_tags(class_doc),
        }
    }

    fn parse_annotation_type_element_doc(
        &self,
        element_doc: &ExecutableElement,
    ) -> AnnotationElementDoc {
        AnnotationElementDoc {
            name: element_doc.simple_name.clone(),
            // The normalized executable form, e.g. `int ()`.
            qualified: self.utils.qualified_name(&element_doc.as_type()),
            type_info: self.utils.classify(&element_doc.return_type),
            default: element_doc.default_value.as_ref().map(|v| v.to_string()),
        }
    }

    fn parse_constructor(
        &self,
        class_doc: &TypeElement,
        constructor_doc: &ExecutableElement,
    ) -> ConstructorDoc {
        ConstructorDoc {
            name: class_doc.simple_name.clone(),
            qualified: constructor_doc.simple_name.clone(),
            comment: self.get_comment(constructor_doc),
            scope: self.parse_scope(&constructor_doc.modifiers),
            is_final: self.utils.has_modifier(&constructor_doc.modifiers, Modifier::Final),
            is_native: self.utils.has_modifier(&constructor_doc.modifiers, Modifier::Native),
            is_static: self.utils.has_modifier(&constructor_doc.modifiers, Modifier::Static),
            is_synchronized: self
                .utils
                .has_modifier(&constructor_doc.modifiers, Modifier::Synchronized),
            is_var_args: constructor_doc.is_varargs,
            signature: self.utils.method_signature(constructor_doc),
            parameters: constructor_doc
                .parameters
                .iter()
                .map(|p| self.parse_method_parameter(p))
                .collect(),
            exceptions: constructor_doc
                .thrown_types
                .iter()
                .map(|t| self.utils.classify(t))
                .collect(),
            annotations: self
                .parse_annotations(&constructor_doc.simple_name, &constructor_doc.annotations),
            tags: self.get_tags(constructor_doc),
        }
    }

    fn parse_method(&self, method_doc: &ExecutableElement) -> MethodDoc {
        MethodDoc {
            name: method_doc.simple_name.clone(),
            qualified: method_doc.simple_name.clone(),
            comment: self.get_comment(method_doc),
            scope: self.parse_scope(&method_doc.modifiers),
            is_abstract: self.utils.has_modifier(&method_doc.modifiers, Modifier::Abstract),
            is_final: self.utils.has_modifier(&method_doc.modifiers, Modifier::Final),
            is_native: self.utils.has_modifier(&method_doc.modifiers, Modifier::Native),
            is_static: self.utils.has_modifier(&method_doc.modifiers, Modifier::Static),
            is_synchronized: self
                .utils
                .has_modifier(&method_doc.modifiers, Modifier::Synchronized),
            is_var_args: method_doc.is_varargs,
            signature: self.utils.method_signature(method_doc),
            return_type: self.utils.classify(&method_doc.return_type),
            parameters: method_doc
                .parameters
                .iter()
                .map(|p| self.parse_method_parameter(p))
                .collect(),
            exceptions: method_doc
                .thrown_types
                .iter()
                .map(|t| self.utils.classify(t))
                .collect(),
            annotations: self.parse_annotations(&method_doc.simple_name, &method_doc.annotations),
            tags: self.get_tags(method_doc),
        }
    }

    fn parse_method_parameter(&self, parameter: &VariableElement) -> MethodParameter {
        MethodParameter {
            name: parameter.simple_name.clone(),
            type_info: self.utils.classify(&parameter.type_mirror),
            annotations: self.parse_annotations(&parameter.simple_name, &parameter.annotations),
        }
    }

    fn parse_field(&self, field_doc: &VariableElement) -> FieldDoc {
        FieldDoc {
            name: field_doc.simple_name.clone(),
            qualified: field_doc.simple_name.clone(),
            comment: self.get_comment(field_doc),
            scope: self.parse_scope(&field_doc.modifiers),
            type_info: self.utils.classify(&field_doc.type_mirror),
            is_static: self.utils.has_modifier(&field_doc.modifiers, Modifier::Static),
            is_final: self.utils.has_modifier(&field_doc.modifiers, Modifier::Final),
            is_volatile: self.utils.has_modifier(&field_doc.modifiers, Modifier::Volatile),
            is_transient: self
                .utils
                .has_modifier(&field_doc.modifiers, Modifier::Transient),
            constant: field_doc
                .constant_value
                .as_ref()
                .filter(|value| !value.is_empty())
                .cloned(),
            annotations: self.parse_annotations(&field_doc.simple_name, &field_doc.annotations),
            tags: self.get_tags(field_doc),
        }
    }

    /// One [`TypeParameter`] per declared type variable. Sentinel bounds are
    /// omitted: the null type stands for "no lower bound" and
    /// `java.lang.Object` for "no upper bound". An intersection upper bound
    /// contributes one entry per component, in source order.
    fn parse_type_parameter(&self, type_variable: &TypeMirror) -> TypeParameter {
        let TypeMirror::TypeVariable { name, lower, upper } = type_variable else {
            return TypeParameter {
                name: type_variable.to_string(),
                bounds: Vec::new(),
            };
        };

        let mut bounds = Vec::new();
        if !matches!(lower.as_ref(), TypeMirror::Null) {
            bounds.extend(bound_components(lower));
        }
        if !upper.is_object() {
            bounds.extend(bound_components(upper));
        }

        TypeParameter {
            name: name.clone(),
            bounds,
        }
    }

    fn parse_type_parameters(&self, class_doc: &TypeElement) -> Vec<TypeParameter> {
        class_doc
            .type_parameters
            .iter()
            .map(|v| self.parse_type_parameter(v))
            .collect()
    }

    fn parse_interfaces(&self, class_doc: &TypeElement) -> Vec<crate::doc::TypeInfo> {
        class_doc
            .interfaces
            .iter()
            .map(|i| self.utils.classify(i))
            .collect()
    }

    fn parse_fields(&self, class_doc: &TypeElement) -> Vec<FieldDoc> {
        self.utils
            .fields_in(class_doc)
            .into_iter()
            .map(|f| self.parse_field(f))
            .collect()
    }

    fn parse_annotations(
        &self,
        program_element: &str,
        mirrors: &[crate::model::AnnotationMirror],
    ) -> Vec<AnnotationInstance> {
        mirrors
            .iter()
            .map(|mirror| self.annotations.parse(program_element, mirror))
            .collect()
    }

    fn parse_scope(&self, modifiers: &[Modifier]) -> String {
        if self.utils.has_modifier(modifiers, Modifier::Private) {
            "private".to_string()
        } else if self.utils.has_modifier(modifiers, Modifier::Protected) {
            "protected".to_string()
        } else if self.utils.has_modifier(modifiers, Modifier::Public) {
            "public".to_string()
        } else {
            String::new()
        }
    }

    /// Flattened full body of the element's doc comment; absent rather than
    /// empty when there is nothing to say.
    fn get_comment(&self, element: &dyn Documented) -> Option<String> {
        element
            .doc()
            .map(|tree| tree.full_body.clone())
            .filter(|body| !body.is_empty())
    }

    fn get_tags(&self, element: &dyn Documented) -> Vec<TagInfo> {
        element
            .doc()
            .map(|tree| {
                tree.block_tags
                    .iter()
                    .map(|tag| TagInfo {
                        name: tag.name.clone(),
                        text: tag.text.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Intersection bounds split into their components; plain bounds pass
/// through as a single textual entry.
fn bound_components(bound: &TypeMirror) -> Vec<String> {
    match bound {
        TypeMirror::Intersection(parts) => parts.iter().map(|p| p.to_string()).collect(),
        other => {
            let text = other.to_string();
            if text.contains('&') {
                text.split('&').map(str::to_string).collect()
            } else {
                vec![text]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::TypeInfo;

    fn parse(sources: &[&str]) -> Root {
        let env = Environment::from_sources(sources).unwrap();
        Parser::new(&env).parse_root_doc()
    }

    fn only_class(root: &Root) -> &ClassDoc {
        assert_eq!(root.packages.len(), 1);
        &root.packages[0].classes[0]
    }

    #[test]
    fn empty_class() {
        let root = parse(&["package p; public class C {}"]);
        assert_eq!(root.packages[0].name, "p");
        let class = only_class(&root);
        assert_eq!(class.name, "C");
        assert_eq!(class.qualified, "p.C");
        assert_eq!(class.scope, "public");
        assert_eq!(
            class.superclass.as_ref().unwrap().qualified,
            "java.lang.Object"
        );
        // The compiler-provided default constructor shows up like any other.
        assert_eq!(class.constructors.len(), 1);
        let constructor = &class.constructors[0];
        assert_eq!(constructor.name, "C");
        assert_eq!(constructor.qualified, "<init>");
        assert_eq!(constructor.scope, "public");
        assert_eq!(constructor.signature, "p.C ()");
        assert!(constructor.parameters.is_empty());
    }

    #[test]
    fn default_constructor_tracks_class_access() {
        let root = parse(&["package p; class Quiet {}"]);
        let class = only_class(&root);
        assert_eq!(class.constructors.len(), 1);
        assert_eq!(class.constructors[0].scope, "");

        let root = parse(&["package p; public class Loud { Loud(int n) {} }"]);
        let class = only_class(&root);
        // An explicit constructor suppresses the default one.
        assert_eq!(class.constructors.len(), 1);
        assert_eq!(class.constructors[0].signature, "p.Loud (int)");
    }

    #[test]
    fn parameterized_field() {
        let root = parse(&[
            "package p; public class C { public java.util.HashMap<java.lang.String,java.lang.Integer> m; }",
        ]);
        let field = &only_class(&root).fields[0];
        assert_eq!(field.type_info.qualified, "java.util.HashMap");
        assert_eq!(
            field.type_info.generics,
            vec![
                TypeInfo::named("java.lang.String"),
                TypeInfo::named("java.lang.Integer"),
            ]
        );
        assert!(field.type_info.wildcard.is_none());
    }

    #[test]
    fn varargs_method() {
        let root = parse(&["package p; public class C { public void m(Object... xs) {} }"]);
        let method = &only_class(&root).methods[0];
        assert!(method.is_var_args);
        let parameter = &method.parameters[0];
        assert_eq!(parameter.type_info.qualified, "java.lang.Object");
        assert_eq!(parameter.type_info.dimension.as_deref(), Some("1"));
        assert_eq!(method.signature, "void (java.lang.Object[])");
    }

    #[test]
    fn annotation_with_int_array_argument() {
        let root = parse(&[
            "package p; public @interface A { int[] ids(); }",
            "package p; @A(ids = {1, 2}) public class C {}",
        ]);
        let class = &root.packages[0].classes[0];
        let argument = &class.annotations[0].arguments[0];
        assert_eq!(argument.type_info.qualified, "int");
        assert!(argument.array);
        assert!(!argument.primitive);
        assert_eq!(argument.values, vec!["1", "2"]);
    }

    #[test]
    fn exception_subtype_flags() {
        let root = parse(&["package p; public class E extends Exception {}"]);
        let class = only_class(&root);
        assert!(class.is_exception);
        assert!(class.is_serializable);
        assert!(!class.is_error);
        assert!(!class.is_externalizable);
        assert_eq!(
            class.superclass.as_ref().unwrap().qualified,
            "java.lang.Exception"
        );
    }

    #[test]
    fn plain_class_has_no_semantic_flags() {
        let class_doc = parse(&["package p; public class C {}"]);
        let class = only_class(&class_doc);
        assert!(!class.is_exception && !class.is_error);
        assert!(!class.is_serializable && !class.is_externalizable);
    }

    #[test]
    fn generic_intersection_bound() {
        let root = parse(&["package p; public class C<T extends Number & Runnable> {}"]);
        let class = only_class(&root);
        assert_eq!(class.generics.len(), 1);
        let parameter = &class.generics[0];
        assert_eq!(parameter.name, "T");
        assert_eq!(
            parameter.bounds,
            vec!["java.lang.Number", "java.lang.Runnable"]
        );
    }

    #[test]
    fn unbounded_type_variable_has_no_bounds() {
        let root = parse(&["package p; public class C<T> {}"]);
        let parameter = &only_class(&root).generics[0];
        assert_eq!(parameter.name, "T");
        assert!(parameter.bounds.is_empty());
    }

    #[test]
    fn nested_types_bucket_into_the_top_level_package() {
        let root = parse(&["package p; public class Outer { public static class Inner {} }"]);
        assert_eq!(root.packages.len(), 1);
        let package = &root.packages[0];
        assert_eq!(package.name, "p");
        let names: Vec<&str> = package.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Outer", "Inner"]);
        assert_eq!(package.classes[1].qualified, "p.Outer.Inner");
    }

    #[test]
    fn packages_come_out_sorted() {
        let root = parse(&[
            "package zebra; public class Z {}",
            "package alpha; public class A {}",
            "package midway; public class M {}",
        ]);
        let names: Vec<&str> = root.packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "midway", "zebra"]);
    }

    #[test]
    fn signature_parameter_counts_line_up() {
        let root = parse(&[
            "package p; public class C { \
             public void a() {} \
             public int b(int x) { return x; } \
             public String c(String s, int n, Object o) { return s; } }",
        ]);
        let pattern = regex::Regex::new(r"^[^ ]+ \(.*\)$").unwrap();
        for method in &only_class(&root).methods {
            assert!(pattern.is_match(&method.signature), "{}", method.signature);
            let open = method.signature.find('(').unwrap();
            let inner = &method.signature[open + 1..method.signature.len() - 1];
            let count = if inner.is_empty() {
                0
            } else {
                inner.split(',').count()
            };
            assert_eq!(count, method.parameters.len(), "{}", method.signature);
        }
    }

    #[test]
    fn array_field_dimension() {
        let root = parse(&["package p; public class C { public int[][][] grid; }"]);
        let field = &only_class(&root).fields[0];
        assert_eq!(field.type_info.dimension.as_deref(), Some("3"));
        assert!(!field.type_info.qualified.contains("[]"));
        assert_eq!(field.type_info.qualified, "int");
    }

    #[test]
    fn scope_is_one_of_the_four_forms() {
        let root = parse(&[
            "package p; public class C { \
             private int a; protected int b; public int c; int d; }",
        ]);
        let scopes: Vec<&str> = only_class(&root)
            .fields
            .iter()
            .map(|f| f.scope.as_str())
            .collect();
        assert_eq!(scopes, vec!["private", "protected", "public", ""]);
    }

    #[test]
    fn field_constant_rendering() {
        let root = parse(&[
            "package p; public class C { \
             public static final String GREETING = \"hi\"; \
             public static final int LIMIT = 42; \
             public static int counter = 0; }",
        ]);
        let fields = &only_class(&root).fields;
        assert_eq!(fields[0].constant.as_deref(), Some("hi"));
        assert_eq!(fields[1].constant.as_deref(), Some("42"));
        assert!(fields[2].constant.is_none());
    }

    #[test]
    fn enum_constants_and_superclass() {
        let root = parse(&["package p; public enum Color { RED, GREEN, BLUE }"]);
        let enum_doc = &root.packages[0].enums[0];
        assert_eq!(enum_doc.name, "Color");
        let names: Vec<&str> = enum_doc.constants.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["RED", "GREEN", "BLUE"]);
        let superclass = enum_doc.superclass.as_ref().unwrap();
        assert_eq!(superclass.qualified, "java.lang.Enum");
        assert_eq!(superclass.generics, vec![TypeInfo::named("p.Color")]);
    }

    #[test]
    fn annotation_type_elements_and_defaults() {
        let root = parse(&[
            "package p; public @interface Timeout { int seconds() default 30; }",
        ]);
        let annotation = &root.packages[0].annotations[0];
        assert_eq!(annotation.name, "Timeout");
        assert_eq!(annotation.qualified, "p.Timeout");
        let element = &annotation.elements[0];
        assert_eq!(element.name, "seconds");
        assert_eq!(element.qualified, "int ()");
        assert_eq!(element.type_info.qualified, "int");
        assert_eq!(element.default.as_deref(), Some("30"));
    }

    #[test]
    fn comments_and_tags() {
        let root = parse(&[
            "package p;\n\
             /**\n\
              * Widens a value.\n\
              *\n\
              * @param x the value\n\
              * @return the widened value\n\
              */\n\
             public class C { \n\
             /** Count of things. */\n\
             public int count; }",
        ]);
        let class = only_class(&root);
        assert_eq!(class.comment.as_deref(), Some("Widens a value."));
        assert_eq!(class.tags.len(), 2);
        assert_eq!(class.tags[0].name, "param");
        assert_eq!(class.tags[0].text, "@param x the value");
        assert_eq!(class.tags[1].name, "return");
        let field = &class.fields[0];
        assert_eq!(field.comment.as_deref(), Some("Count of things."));
    }

    #[test]
    fn empty_comment_is_absent_not_blank() {
        let root = parse(&["package p; public class C {}"]);
        assert!(only_class(&root).comment.is_none());
    }

    #[test]
    fn wildcard_bounds_are_exclusive() {
        let root = parse(&[
            "package p; import java.util.List; public class C { \
             public List<? extends Number> a; \
             public List<? super Integer> b; \
             public List<?> c; }",
        ]);
        for field in &only_class(&root).fields {
            let argument = &field.type_info.generics[0];
            assert_eq!(argument.qualified, "?");
            let wildcard = argument.wildcard.as_ref().unwrap();
            assert!(
                !(wildcard.extends_bound.is_some() && wildcard.super_bound.is_some()),
                "both bounds set on {}",
                field.name
            );
        }
    }

    #[test]
    fn method_exceptions_are_classified() {
        let root = parse(&[
            "package p; import java.io.IOException; public class C { \
             public void go() throws IOException, IllegalStateException {} }",
        ]);
        let method = &only_class(&root).methods[0];
        let thrown: Vec<&str> = method
            .exceptions
            .iter()
            .map(|e| e.qualified.as_str())
            .collect();
        assert_eq!(
            thrown,
            vec!["java.io.IOException", "java.lang.IllegalStateException"]
        );
    }

    #[test]
    fn unresolvable_annotation_does_not_stop_the_walk() {
        let root = parse(&[
            "package p; @Bogus public class C { public void m() {} }",
            "package p; public class D {}",
        ]);
        let package = &root.packages[0];
        assert_eq!(package.classes.len(), 2);
        let class = &package.classes[0];
        assert_eq!(class.annotations[0].qualified, "Bogus");
        assert_eq!(class.methods.len(), 1);
    }

    #[test]
    fn two_runs_produce_equal_trees() {
        let sources = [
            "package b; public class B { public int f(int x) { return x; } }",
            "package a; public enum E { ONE, TWO }",
            "package a; public @interface Mark {}",
        ];
        assert_eq!(parse(&sources), parse(&sources));
    }

    #[test]
    fn interface_carries_members_but_no_superclass_slot() {
        let root = parse(&[
            "package p; public interface Shape extends Comparable<Shape> { \
             int SIDES = 4; double area(); }",
        ]);
        let interface_doc = &root.packages[0].interfaces[0];
        assert_eq!(interface_doc.name, "Shape");
        assert_eq!(interface_doc.interfaces[0].qualified, "java.lang.Comparable");
        assert_eq!(interface_doc.fields[0].name, "SIDES");
        assert_eq!(interface_doc.methods[0].name, "area");
        assert_eq!(interface_doc.methods[0].signature, "double ()");
    }
}
