//! Package and import handling, and simple-name resolution.
//!
//! Resolution order for a simple name: type variables (handled by the type
//! parser), types declared in the parsed set reachable from the enclosing
//! scopes, single-type imports, same-package types, the implicit `java.lang`
//! names, on-demand imports against the parsed set, and finally a table of
//! common JDK names. A name that survives all of that is kept as written.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use tree_sitter::Node;

use super::helpers;
use super::types::Scope;

/// Implicitly imported `java.lang` names.
static JAVA_LANG: Lazy<HashMap<&'static str, String>> = Lazy::new(|| {
    let names = [
        "Object",
        "String",
        "CharSequence",
        "StringBuilder",
        "StringBuffer",
        "Integer",
        "Long",
        "Short",
        "Byte",
        "Character",
        "Boolean",
        "Double",
        "Float",
        "Number",
        "Math",
        "Void",
        "Class",
        "Enum",
        "Record",
        "Iterable",
        "Comparable",
        "Cloneable",
        "Runnable",
        "Thread",
        "System",
        "Throwable",
        "Exception",
        "RuntimeException",
        "IllegalArgumentException",
        "IllegalStateException",
        "NullPointerException",
        "ClassCastException",
        "IndexOutOfBoundsException",
        "ArrayIndexOutOfBoundsException",
        "UnsupportedOperationException",
        "ArithmeticException",
        "NumberFormatException",
        "InterruptedException",
        "CloneNotSupportedException",
        "Error",
        "AssertionError",
        "VirtualMachineError",
        "OutOfMemoryError",
        "StackOverflowError",
        "LinkageError",
        "Override",
        "Deprecated",
        "SuppressWarnings",
        "SafeVarargs",
        "FunctionalInterface",
    ];
    names
        .iter()
        .map(|&simple| (simple, format!("java.lang.{simple}")))
        .collect()
});

/// Common JDK names outside `java.lang`, consulted as a last resort so that
/// sources missing their imports still resolve well-known types.
static COMMON_JDK: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("Serializable", "java.io.Serializable"),
        ("Externalizable", "java.io.Externalizable"),
        ("IOException", "java.io.IOException"),
        ("FileNotFoundException", "java.io.FileNotFoundException"),
        ("ObjectInput", "java.io.ObjectInput"),
        ("ObjectOutput", "java.io.ObjectOutput"),
        ("File", "java.io.File"),
        ("List", "java.util.List"),
        ("ArrayList", "java.util.ArrayList"),
        ("LinkedList", "java.util.LinkedList"),
        ("Map", "java.util.Map"),
        ("HashMap", "java.util.HashMap"),
        ("TreeMap", "java.util.TreeMap"),
        ("Set", "java.util.Set"),
        ("HashSet", "java.util.HashSet"),
        ("TreeSet", "java.util.TreeSet"),
        ("Collection", "java.util.Collection"),
        ("Iterator", "java.util.Iterator"),
        ("Optional", "java.util.Optional"),
        ("Date", "java.util.Date"),
        ("UUID", "java.util.UUID"),
    ]
    .into_iter()
    .collect()
});

/// Per-compilation-unit name resolver.
#[derive(Debug, Clone)]
pub(crate) struct Resolver {
    pub package: String,
    single_imports: HashMap<String, String>,
    on_demand: Vec<String>,
    /// Qualified names of every type declared across the parsed set.
    known: HashSet<String>,
}

impl Resolver {
    pub fn new(package: String, known: HashSet<String>) -> Self {
        Self {
            package,
            single_imports: HashMap::new(),
            on_demand: Vec::new(),
            known,
        }
    }

    /// Record one `import_declaration` node.
    pub fn add_import(&mut self, content: &str, node: Node) {
        let Some(name_node) = node
            .named_children(&mut node.walk())
            .find(|c| matches!(c.kind(), "identifier" | "scoped_identifier"))
        else {
            return;
        };
        let name = helpers::node_text(content, &name_node);
        let on_demand = node
            .named_children(&mut node.walk())
            .any(|c| c.kind() == "asterisk");
        if on_demand {
            self.on_demand.push(name);
        } else if let Some(simple) = name.rsplit('.').next() {
            self.single_imports.insert(simple.to_string(), name.clone());
        }
    }

    /// Resolve a type name to a qualified name, keeping it as written when
    /// nothing matches.
    pub fn resolve(&self, name: &str, scope: &Scope) -> String {
        self.try_resolve(name, scope)
            .unwrap_or_else(|| name.to_string())
    }

    /// Resolve a type name, reporting failure instead of passing the name
    /// through. Used for annotation types, where an unresolvable name becomes
    /// an error type mirror.
    pub fn try_resolve(&self, name: &str, scope: &Scope) -> Option<String> {
        if let Some((head, rest)) = name.split_once('.') {
            // Already qualified, or an Outer.Inner reference; if the leading
            // segment resolves to a known type, qualify through it.
            if let Some(enclosing) = self.try_resolve(head, scope) {
                let nested = format!("{enclosing}.{rest}");
                if self.known.contains(&nested) {
                    return Some(nested);
                }
            }
            return Some(name.to_string());
        }

        // Nested types visible from the enclosing scopes, innermost first.
        for enclosing in &scope.enclosing {
            let candidate = format!("{enclosing}.{name}");
            if self.known.contains(&candidate) {
                return Some(candidate);
            }
            if enclosing.rsplit('.').next() == Some(name) {
                return Some(enclosing.clone());
            }
        }

        if let Some(qualified) = self.single_imports.get(name) {
            return Some(qualified.clone());
        }

        let same_package = if self.package.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.package, name)
        };
        if self.known.contains(&same_package) {
            return Some(same_package);
        }

        if let Some(qualified) = JAVA_LANG.get(name) {
            return Some(qualified.clone());
        }

        for prefix in &self.on_demand {
            let candidate = format!("{prefix}.{name}");
            if self.known.contains(&candidate) {
                return Some(candidate);
            }
        }

        if let Some(&qualified) = COMMON_JDK.get(name) {
            return Some(qualified.to_string());
        }

        None
    }
}

/// Extract the package name from a `package_declaration` node.
pub(super) fn package_name(content: &str, node: Node) -> String {
    node.named_children(&mut node.walk())
        .find(|c| matches!(c.kind(), "identifier" | "scoped_identifier"))
        .map(|c| helpers::node_text(content, &c))
        .unwrap_or_default()
}
