//! Elements: the declaration view of the program.

use serde::{Deserialize, Serialize};

use super::annotations::{AnnotationMirror, AnnotationValue};
use super::doc_tree::{DocCommentTree, Documented};
use super::types::TypeMirror;

/// Declaration kind, set by the frontend and dispatched on by the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Class,
    Interface,
    Enum,
    AnnotationType,
    Field,
    EnumConstant,
    Parameter,
    Method,
    Constructor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Native,
    Synchronized,
    Transient,
    Volatile,
    Strictfp,
    Default,
    Sealed,
}

impl Modifier {
    pub fn from_keyword(keyword: &str) -> Option<Modifier> {
        Some(match keyword {
            "public" => Modifier::Public,
            "protected" => Modifier::Protected,
            "private" => Modifier::Private,
            "abstract" => Modifier::Abstract,
            "static" => Modifier::Static,
            "final" => Modifier::Final,
            "native" => Modifier::Native,
            "synchronized" => Modifier::Synchronized,
            "transient" => Modifier::Transient,
            "volatile" => Modifier::Volatile,
            "strictfp" => Modifier::Strictfp,
            "default" => Modifier::Default,
            "sealed" => Modifier::Sealed,
            _ => return None,
        })
    }
}

/// A class, interface, enum, or annotation-type declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeElement {
    pub simple_name: String,
    /// Canonical dotted form; nested types read `pkg.Outer.Inner`.
    pub qualified_name: String,
    pub kind: ElementKind,
    pub package_name: String,
    /// Qualified name of the enclosing type for nested declarations.
    pub enclosing_type: Option<String>,
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<AnnotationMirror>,
    /// Declared type variables, as `TypeMirror::TypeVariable` mirrors.
    pub type_parameters: Vec<TypeMirror>,
    pub superclass: Option<TypeMirror>,
    pub interfaces: Vec<TypeMirror>,
    /// Fields and enum constants, in source order.
    pub fields: Vec<VariableElement>,
    pub constructors: Vec<ExecutableElement>,
    pub methods: Vec<ExecutableElement>,
    pub doc: Option<DocCommentTree>,
}

impl TypeElement {
    /// The declaration as a type mirror: its type variables become the type
    /// arguments, matching the compiler's element-to-type bridge.
    pub fn as_type(&self) -> TypeMirror {
        TypeMirror::Declared {
            qualified: self.qualified_name.clone(),
            type_args: self.type_parameters.clone(),
        }
    }
}

/// A method, constructor, or annotation-type element declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutableElement {
    /// `"<init>"` for constructors.
    pub simple_name: String,
    pub kind: ElementKind,
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<AnnotationMirror>,
    pub parameters: Vec<VariableElement>,
    pub thrown_types: Vec<TypeMirror>,
    /// For constructors this is the declaring class's type, so the
    /// normalized signature reads `pkg.C (params)`.
    pub return_type: TypeMirror,
    pub is_varargs: bool,
    /// Default value of an annotation-type element.
    pub default_value: Option<AnnotationValue>,
    pub doc: Option<DocCommentTree>,
}

impl ExecutableElement {
    pub fn as_type(&self) -> TypeMirror {
        TypeMirror::Executable {
            params: self.parameters.iter().map(|p| p.type_mirror.clone()).collect(),
            ret: Box::new(self.return_type.clone()),
        }
    }
}

/// A field, enum constant, or parameter declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableElement {
    pub simple_name: String,
    pub kind: ElementKind,
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<AnnotationMirror>,
    pub type_mirror: TypeMirror,
    /// Compile-time constant value, already rendered in `toString` form
    /// (strings unquoted, numerics in decimal).
    pub constant_value: Option<String>,
    pub doc: Option<DocCommentTree>,
}

/// A package, synthesized once per distinct package name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageElement {
    pub qualified_name: String,
    /// Doc comment from `package-info.java`, when present.
    pub doc: Option<DocCommentTree>,
}

impl Documented for TypeElement {
    fn doc(&self) -> Option<&DocCommentTree> {
        self.doc.as_ref()
    }
}

impl Documented for ExecutableElement {
    fn doc(&self) -> Option<&DocCommentTree> {
        self.doc.as_ref()
    }
}

impl Documented for VariableElement {
    fn doc(&self) -> Option<&DocCommentTree> {
        self.doc.as_ref()
    }
}

impl Documented for PackageElement {
    fn doc(&self) -> Option<&DocCommentTree> {
        self.doc.as_ref()
    }
}
