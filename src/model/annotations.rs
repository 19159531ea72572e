//! Annotation uses and their argument values.
//!
//! The value space is a tagged union over primitives, strings, enum
//! constants, class literals, nested annotations, and arrays of the above.
//! The decoder in `parser::annotation_parser` is the one place that pattern
//! matches on it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::TypeMirror;

/// One annotation use, e.g. `@A(ids = {1, 2})`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationMirror {
    /// `Declared` when the annotation type resolved, `Error` when it is
    /// absent from the set of known types.
    pub type_mirror: TypeMirror,
    /// Explicit arguments in source order: element name to value.
    pub element_values: Vec<(String, AnnotationValue)>,
}

impl AnnotationMirror {
    pub fn simple_name(&self) -> String {
        let qualified = match &self.type_mirror {
            TypeMirror::Declared { qualified, .. } => qualified,
            TypeMirror::Error(name) => name,
            other => return other.to_string(),
        };
        qualified
            .rsplit('.')
            .next()
            .unwrap_or(qualified)
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationValue {
    /// A primitive literal in its textual form: `1`, `2.5`, `true`, `'c'`.
    Primitive(String),
    /// The contents of a string literal, unquoted.
    Text(String),
    /// A reference to an enum constant (or other constant variable).
    EnumRef {
        /// Qualified name of the declaring type; empty when the reference
        /// could not be resolved (e.g. a static import).
        type_qualified: String,
        constant: String,
    },
    /// A class literal, by the referenced type's qualified name.
    TypeRef(String),
    Annotation(AnnotationMirror),
    Array(Vec<AnnotationValue>),
}

impl AnnotationValue {
    /// The unwrapped textual form a decoded argument value contributes: the
    /// enum constant's simple name, the class literal's qualified name, the
    /// string contents, or the literal text.
    pub fn unwrapped(&self) -> String {
        match self {
            AnnotationValue::Primitive(text) => text.clone(),
            AnnotationValue::Text(contents) => contents.clone(),
            AnnotationValue::EnumRef { constant, .. } => constant.clone(),
            AnnotationValue::TypeRef(qualified) => qualified.clone(),
            AnnotationValue::Annotation(mirror) => render_annotation(mirror),
            AnnotationValue::Array(_) => self.to_string(),
        }
    }
}

/// Source-style rendering, mirroring the compiler's `AnnotationValue`
/// `toString`: strings re-quoted, class literals suffixed `.class`, enum
/// constants fully qualified, arrays in braces. Used for annotation-element
/// defaults.
impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationValue::Primitive(text) => write!(f, "{}", text),
            AnnotationValue::Text(contents) => write!(f, "\"{}\"", contents),
            AnnotationValue::EnumRef {
                type_qualified,
                constant,
            } => {
                if type_qualified.is_empty() {
                    write!(f, "{}", constant)
                } else {
                    write!(f, "{}.{}", type_qualified, constant)
                }
            }
            AnnotationValue::TypeRef(qualified) => write!(f, "{}.class", qualified),
            AnnotationValue::Annotation(mirror) => write!(f, "{}", render_annotation(mirror)),
            AnnotationValue::Array(values) => {
                let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
        }
    }
}

fn render_annotation(mirror: &AnnotationMirror) -> String {
    let name = match mirror.type_mirror.erasure_name() {
        Some(name) => name.to_string(),
        None => mirror.type_mirror.to_string(),
    };
    if mirror.element_values.is_empty() {
        return format!("@{}", name);
    }
    let args: Vec<String> = mirror
        .element_values
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    format!("@{}({})", name, args.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrapped_forms() {
        assert_eq!(AnnotationValue::Primitive("1".into()).unwrapped(), "1");
        assert_eq!(AnnotationValue::Text("A".into()).unwrapped(), "A");
        let constant = AnnotationValue::EnumRef {
            type_qualified: "p.Color".into(),
            constant: "RED".into(),
        };
        assert_eq!(constant.unwrapped(), "RED");
        let class_literal = AnnotationValue::TypeRef("java.lang.String".into());
        assert_eq!(class_literal.unwrapped(), "java.lang.String");
    }

    #[test]
    fn source_rendering_requotes_and_braces() {
        let array = AnnotationValue::Array(vec![
            AnnotationValue::Text("A".into()),
            AnnotationValue::Text("B".into()),
        ]);
        assert_eq!(array.to_string(), "{\"A\", \"B\"}");
        assert_eq!(
            AnnotationValue::TypeRef("p.C".into()).to_string(),
            "p.C.class"
        );
    }

    #[test]
    fn nested_annotation_rendering() {
        let inner = AnnotationMirror {
            type_mirror: TypeMirror::declared("p.A"),
            element_values: vec![("id".to_string(), AnnotationValue::Primitive("3".into()))],
        };
        assert_eq!(
            AnnotationValue::Annotation(inner).to_string(),
            "@p.A(id=3)"
        );
    }
}
