//! Type mirrors: the type view of the program.
//!
//! A `TypeMirror` carries the structural shape of a type expression. Its
//! `Display` form is the canonical textual representation the normalizer
//! consumes: declared types print `q<a1,a2>`, arrays append `[]` per
//! dimension, executable types print `(params)return` (the convention the
//! signature normalizer rewrites), and the null type prints the `<nulltype>`
//! sentinel used for absent lower bounds.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const OBJECT: &str = "java.lang.Object";

/// Kind of a type mirror, mirroring the structural accessors the parser
/// dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Primitive,
    Void,
    Null,
    Declared,
    Array,
    Wildcard,
    TypeVariable,
    Intersection,
    Executable,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeMirror {
    /// boolean, byte, short, int, long, char, float, double
    Primitive(String),
    Void,
    /// The null type; stands in for "no lower bound" on a type variable.
    Null,
    /// A class or interface type. `qualified` is the erasure's canonical
    /// name; raw uses of a generic type have an empty `type_args`.
    Declared {
        qualified: String,
        type_args: Vec<TypeMirror>,
    },
    Array {
        component: Box<TypeMirror>,
    },
    Wildcard {
        extends_bound: Option<Box<TypeMirror>>,
        super_bound: Option<Box<TypeMirror>>,
    },
    /// A declared type variable. `lower` is `Null` when no lower bound
    /// exists; `upper` is `java.lang.Object` when no upper bound exists.
    TypeVariable {
        name: String,
        lower: Box<TypeMirror>,
        upper: Box<TypeMirror>,
    },
    /// An intersection upper bound such as `Number & Runnable`.
    Intersection(Vec<TypeMirror>),
    /// The type of a method or constructor.
    Executable {
        params: Vec<TypeMirror>,
        ret: Box<TypeMirror>,
    },
    /// A type that could not be resolved (missing from the classpath).
    Error(String),
}

impl TypeMirror {
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeMirror::Primitive(_) => TypeKind::Primitive,
            TypeMirror::Void => TypeKind::Void,
            TypeMirror::Null => TypeKind::Null,
            TypeMirror::Declared { .. } => TypeKind::Declared,
            TypeMirror::Array { .. } => TypeKind::Array,
            TypeMirror::Wildcard { .. } => TypeKind::Wildcard,
            TypeMirror::TypeVariable { .. } => TypeKind::TypeVariable,
            TypeMirror::Intersection(_) => TypeKind::Intersection,
            TypeMirror::Executable { .. } => TypeKind::Executable,
            TypeMirror::Error(_) => TypeKind::Error,
        }
    }

    /// A declared type without type arguments.
    pub fn declared(qualified: impl Into<String>) -> TypeMirror {
        TypeMirror::Declared {
            qualified: qualified.into(),
            type_args: Vec::new(),
        }
    }

    /// The root object type, used as the "no upper bound" sentinel.
    pub fn object() -> TypeMirror {
        TypeMirror::declared(OBJECT)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, TypeMirror::Declared { qualified, type_args }
            if qualified == OBJECT && type_args.is_empty())
    }

    /// The erasure's canonical name for declared and error types, the
    /// variable name for type variables. Used by subtype queries, which only
    /// relate declared types.
    pub fn erasure_name(&self) -> Option<&str> {
        match self {
            TypeMirror::Declared { qualified, .. } => Some(qualified),
            TypeMirror::Error(name) => Some(name),
            TypeMirror::TypeVariable { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for TypeMirror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeMirror::Primitive(name) | TypeMirror::Error(name) => write!(f, "{}", name),
            TypeMirror::Void => write!(f, "void"),
            TypeMirror::Null => write!(f, "<nulltype>"),
            TypeMirror::Declared {
                qualified,
                type_args,
            } => {
                if type_args.is_empty() {
                    write!(f, "{}", qualified)
                } else {
                    let args: Vec<String> = type_args.iter().map(|a| a.to_string()).collect();
                    write!(f, "{}<{}>", qualified, args.join(","))
                }
            }
            TypeMirror::Array { component } => write!(f, "{}[]", component),
            TypeMirror::Wildcard {
                extends_bound,
                super_bound,
            } => match (extends_bound, super_bound) {
                (Some(bound), _) => write!(f, "? extends {}", bound),
                (None, Some(bound)) => write!(f, "? super {}", bound),
                (None, None) => write!(f, "?"),
            },
            TypeMirror::TypeVariable { name, .. } => write!(f, "{}", name),
            TypeMirror::Intersection(parts) => {
                let names: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
                write!(f, "{}", names.join("&"))
            }
            TypeMirror::Executable { params, ret } => {
                let names: Vec<String> = params.iter().map(|p| p.to_string()).collect();
                write!(f, "({}){}", names.join(","), ret)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_type_textual_forms() {
        let raw = TypeMirror::declared("java.util.List");
        assert_eq!(raw.to_string(), "java.util.List");

        let parameterized = TypeMirror::Declared {
            qualified: "java.util.Map".to_string(),
            type_args: vec![
                TypeMirror::declared("java.lang.String"),
                TypeMirror::declared("java.lang.Integer"),
            ],
        };
        assert_eq!(
            parameterized.to_string(),
            "java.util.Map<java.lang.String,java.lang.Integer>"
        );
    }

    #[test]
    fn array_appends_brackets_per_dimension() {
        let matrix = TypeMirror::Array {
            component: Box::new(TypeMirror::Array {
                component: Box::new(TypeMirror::Primitive("int".to_string())),
            }),
        };
        assert_eq!(matrix.to_string(), "int[][]");
    }

    #[test]
    fn executable_prints_parameters_before_return() {
        let method_type = TypeMirror::Executable {
            params: vec![TypeMirror::Primitive("int".to_string())],
            ret: Box::new(TypeMirror::Void),
        };
        assert_eq!(method_type.to_string(), "(int)void");
    }

    #[test]
    fn sentinel_forms() {
        assert_eq!(TypeMirror::Null.to_string(), "<nulltype>");
        assert_eq!(TypeMirror::object().to_string(), "java.lang.Object");
        let wildcard = TypeMirror::Wildcard {
            extends_bound: Some(Box::new(TypeMirror::declared("java.lang.Number"))),
            super_bound: None,
        };
        assert_eq!(wildcard.to_string(), "? extends java.lang.Number");
    }
}
