//! The operating environment of a single extractor invocation.
//!
//! Assembled from a set of Java sources, it exposes the capabilities the
//! parser consumes: the included type declarations, element lookup by
//! qualified name, subtype queries, and package elements. Subtype edges come
//! from the parsed sources plus a built-in table of well-known JDK facts,
//! since no classpath exists.

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

use crate::error::DocletError;
use crate::language;
use crate::model::{ElementKind, PackageElement, TypeElement, TypeMirror};

/// Direct supertype edges for well-known JDK types.
static JDK_SUPERTYPES: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let edges: &[(&str, &[&str])] = &[
        ("java.lang.Throwable", &["java.lang.Object", "java.io.Serializable"]),
        ("java.lang.Exception", &["java.lang.Throwable"]),
        ("java.lang.RuntimeException", &["java.lang.Exception"]),
        ("java.lang.IllegalArgumentException", &["java.lang.RuntimeException"]),
        ("java.lang.IllegalStateException", &["java.lang.RuntimeException"]),
        ("java.lang.NullPointerException", &["java.lang.RuntimeException"]),
        ("java.lang.ClassCastException", &["java.lang.RuntimeException"]),
        ("java.lang.IndexOutOfBoundsException", &["java.lang.RuntimeException"]),
        (
            "java.lang.ArrayIndexOutOfBoundsException",
            &["java.lang.IndexOutOfBoundsException"],
        ),
        (
            "java.lang.UnsupportedOperationException",
            &["java.lang.RuntimeException"],
        ),
        ("java.lang.ArithmeticException", &["java.lang.RuntimeException"]),
        ("java.lang.NumberFormatException", &["java.lang.IllegalArgumentException"]),
        ("java.lang.InterruptedException", &["java.lang.Exception"]),
        ("java.lang.CloneNotSupportedException", &["java.lang.Exception"]),
        ("java.io.IOException", &["java.lang.Exception"]),
        ("java.io.FileNotFoundException", &["java.io.IOException"]),
        ("java.lang.Error", &["java.lang.Throwable"]),
        ("java.lang.AssertionError", &["java.lang.Error"]),
        ("java.lang.VirtualMachineError", &["java.lang.Error"]),
        ("java.lang.OutOfMemoryError", &["java.lang.VirtualMachineError"]),
        ("java.lang.StackOverflowError", &["java.lang.VirtualMachineError"]),
        ("java.lang.LinkageError", &["java.lang.Error"]),
        ("java.io.Externalizable", &["java.io.Serializable"]),
        (
            "java.lang.Enum",
            &["java.lang.Object", "java.lang.Comparable", "java.io.Serializable"],
        ),
        (
            "java.lang.String",
            &[
                "java.lang.Object",
                "java.io.Serializable",
                "java.lang.Comparable",
                "java.lang.CharSequence",
            ],
        ),
        ("java.lang.Number", &["java.lang.Object", "java.io.Serializable"]),
        ("java.lang.Integer", &["java.lang.Number", "java.lang.Comparable"]),
        ("java.lang.Long", &["java.lang.Number", "java.lang.Comparable"]),
        ("java.lang.Short", &["java.lang.Number", "java.lang.Comparable"]),
        ("java.lang.Byte", &["java.lang.Number", "java.lang.Comparable"]),
        ("java.lang.Double", &["java.lang.Number", "java.lang.Comparable"]),
        ("java.lang.Float", &["java.lang.Number", "java.lang.Comparable"]),
        (
            "java.lang.Boolean",
            &["java.lang.Object", "java.io.Serializable", "java.lang.Comparable"],
        ),
        (
            "java.lang.Character",
            &["java.lang.Object", "java.io.Serializable", "java.lang.Comparable"],
        ),
    ];
    edges
        .iter()
        .map(|(name, supers)| (*name, supers.to_vec()))
        .collect()
});

/// Well-known JDK interface names, for the kind of synthesized elements.
const JDK_INTERFACES: &[&str] = &[
    "java.io.Serializable",
    "java.io.Externalizable",
    "java.lang.Comparable",
    "java.lang.CharSequence",
    "java.lang.Cloneable",
    "java.lang.Runnable",
    "java.lang.Iterable",
];

pub struct Environment {
    /// Included declarations, in file order then source order.
    types: Vec<TypeElement>,
    by_name: HashMap<String, usize>,
    /// Synthesized elements for well-known JDK types (no classpath exists).
    well_known: HashMap<String, TypeElement>,
    /// Sorted so package iteration is stable across runs.
    packages: BTreeMap<String, PackageElement>,
    /// Direct supertype edges by erasure name.
    supertypes: HashMap<String, Vec<String>>,
}

impl Environment {
    /// Build an environment from Java source texts. Fails only when a unit
    /// cannot be parsed at all; everything element-level is best effort.
    pub fn from_sources<S: AsRef<str>>(sources: &[S]) -> Result<Environment, DocletError> {
        let mut parser = language::java_parser()?;

        let mut trees = Vec::with_capacity(sources.len());
        for (unit, source) in sources.iter().enumerate() {
            let tree = parser
                .parse(source.as_ref(), None)
                .ok_or(DocletError::ParseFailed { unit })?;
            trees.push(tree);
        }

        // Pass 1: every declared type name, so cross-unit references resolve.
        let mut known: HashSet<String> = HashSet::new();
        for (source, tree) in sources.iter().zip(&trees) {
            known.extend(super::scan_declared_types(source.as_ref(), tree));
        }

        // Pass 2: full extraction.
        let mut types: Vec<TypeElement> = Vec::new();
        let mut packages: BTreeMap<String, PackageElement> = BTreeMap::new();
        for (source, tree) in sources.iter().zip(&trees) {
            let unit = super::extract_unit(source.as_ref(), tree, known.clone());
            let entry = packages
                .entry(unit.package.clone())
                .or_insert_with(|| PackageElement {
                    qualified_name: unit.package.clone(),
                    doc: None,
                });
            if entry.doc.is_none() {
                entry.doc = unit.package_doc;
            }
            types.extend(unit.types);
        }

        let mut by_name = HashMap::new();
        for (index, element) in types.iter().enumerate() {
            by_name.insert(element.qualified_name.clone(), index);
        }

        let supertypes = build_supertypes(&types);
        debug!(
            units = sources.len(),
            types = types.len(),
            packages = packages.len(),
            "environment assembled"
        );

        Ok(Environment {
            types,
            by_name,
            well_known: synthesize_well_known(),
            packages,
            supertypes,
        })
    }

    /// The set of included declarations.
    pub fn included_types(&self) -> &[TypeElement] {
        &self.types
    }

    /// Look up a type declaration by qualified name; parsed types shadow the
    /// synthesized well-known ones.
    pub fn get_type_element(&self, qualified: &str) -> Option<&TypeElement> {
        self.by_name
            .get(qualified)
            .map(|&index| &self.types[index])
            .or_else(|| self.well_known.get(qualified))
    }

    pub fn package_element(&self, name: &str) -> Option<&PackageElement> {
        self.packages.get(name)
    }

    /// Reflexive-transitive subtype query over declared supertype edges.
    pub fn is_subtype(&self, candidate: &TypeMirror, supertype: &TypeMirror) -> bool {
        let (Some(from), Some(to)) = (candidate.erasure_name(), supertype.erasure_name()) else {
            return false;
        };
        if from == to {
            return true;
        }

        let mut queue = vec![from.to_string()];
        let mut seen: HashSet<String> = queue.iter().cloned().collect();
        while let Some(current) = queue.pop() {
            let Some(direct) = self.supertypes.get(current.as_str()) else {
                continue;
            };
            for parent in direct {
                if parent == to {
                    return true;
                }
                if seen.insert(parent.clone()) {
                    queue.push(parent.clone());
                }
            }
        }
        false
    }
}

fn build_supertypes(types: &[TypeElement]) -> HashMap<String, Vec<String>> {
    let mut edges: HashMap<String, Vec<String>> = HashMap::new();
    for element in types {
        let mut direct: Vec<String> = Vec::new();
        if let Some(superclass) = &element.superclass {
            if let Some(name) = superclass.erasure_name() {
                direct.push(name.to_string());
            }
        }
        for interface in &element.interfaces {
            if let Some(name) = interface.erasure_name() {
                direct.push(name.to_string());
            }
        }
        if direct.is_empty() {
            direct.push("java.lang.Object".to_string());
        }
        edges.insert(element.qualified_name.clone(), direct);
    }
    for (&name, supers) in JDK_SUPERTYPES.iter() {
        edges
            .entry(name.to_string())
            .or_insert_with(|| supers.iter().map(|s| s.to_string()).collect());
    }
    edges
}

fn synthesize_well_known() -> HashMap<String, TypeElement> {
    let mut names: HashSet<&str> = HashSet::new();
    for (&name, supers) in JDK_SUPERTYPES.iter() {
        names.insert(name);
        names.extend(supers.iter().copied());
    }
    names.insert("java.lang.Object");

    names
        .into_iter()
        .map(|qualified| {
            let kind = if JDK_INTERFACES.contains(&qualified) {
                ElementKind::Interface
            } else {
                ElementKind::Class
            };
            let (package_name, simple_name) =
                qualified.rsplit_once('.').unwrap_or(("", qualified));
            let element = TypeElement {
                simple_name: simple_name.to_string(),
                qualified_name: qualified.to_string(),
                kind,
                package_name: package_name.to_string(),
                enclosing_type: None,
                modifiers: Vec::new(),
                annotations: Vec::new(),
                type_parameters: Vec::new(),
                superclass: None,
                interfaces: Vec::new(),
                fields: Vec::new(),
                constructors: Vec::new(),
                methods: Vec::new(),
                doc: None,
            };
            (qualified.to_string(), element)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtype_closure_reaches_jdk_roots() {
        let env =
            Environment::from_sources(&["package p; public class E extends Exception {}"]).unwrap();
        let e = env.get_type_element("p.E").unwrap().as_type();
        assert!(env.is_subtype(&e, &TypeMirror::declared("java.lang.Exception")));
        assert!(env.is_subtype(&e, &TypeMirror::declared("java.lang.Throwable")));
        assert!(env.is_subtype(&e, &TypeMirror::declared("java.io.Serializable")));
        assert!(!env.is_subtype(&e, &TypeMirror::declared("java.lang.Error")));
    }

    #[test]
    fn subtype_is_reflexive() {
        let env = Environment::from_sources(&["package p; public class C {}"]).unwrap();
        let c = env.get_type_element("p.C").unwrap().as_type();
        assert!(env.is_subtype(&c, &c));
    }

    #[test]
    fn cross_unit_resolution() {
        let env = Environment::from_sources(&[
            "package p; public class Base {}",
            "package p; public class Derived extends Base {}",
        ])
        .unwrap();
        let derived = env.get_type_element("p.Derived").unwrap();
        assert_eq!(
            derived.superclass.as_ref().unwrap().to_string(),
            "p.Base"
        );
    }

    #[test]
    fn packages_iterate_sorted() {
        let env = Environment::from_sources(&[
            "package z; public class Z {}",
            "package a; public class A {}",
        ])
        .unwrap();
        assert!(env.package_element("a").is_some());
        assert!(env.package_element("z").is_some());
    }
}
