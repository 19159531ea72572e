//! Language-neutral documentation tree.
//!
//! These records are what a traversal of the element model produces. They
//! carry no references back into the model; every type reference is a
//! [`TypeInfo`] with a textual qualified name, so the tree can be serialized
//! or compared structurally.

use serde::Serialize;

/// Root of the documentation tree, one per extractor run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Root {
    pub packages: Vec<Package>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Package {
    pub name: String,
    pub comment: Option<String>,
    pub tags: Vec<TagInfo>,
    pub annotations: Vec<AnnotationTypeDoc>,
    pub enums: Vec<EnumDoc>,
    pub interfaces: Vec<InterfaceDoc>,
    pub classes: Vec<ClassDoc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassDoc {
    pub name: String,
    pub qualified: String,
    pub comment: Option<String>,
    pub scope: String,
    pub is_abstract: bool,
    pub is_error: bool,
    pub is_exception: bool,
    pub is_externalizable: bool,
    pub is_serializable: bool,
    pub superclass: Option<TypeInfo>,
    pub interfaces: Vec<TypeInfo>,
    pub generics: Vec<TypeParameter>,
    pub fields: Vec<FieldDoc>,
    pub constructors: Vec<ConstructorDoc>,
    pub methods: Vec<MethodDoc>,
    pub annotations: Vec<AnnotationInstance>,
    pub tags: Vec<TagInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InterfaceDoc {
    pub name: String,
    pub qualified: String,
    pub comment: Option<String>,
    pub scope: String,
    pub interfaces: Vec<TypeInfo>,
    pub generics: Vec<TypeParameter>,
    pub fields: Vec<FieldDoc>,
    pub methods: Vec<MethodDoc>,
    pub annotations: Vec<AnnotationInstance>,
    pub tags: Vec<TagInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnumDoc {
    pub name: String,
    pub qualified: String,
    pub comment: Option<String>,
    pub scope: String,
    pub superclass: Option<TypeInfo>,
    pub interfaces: Vec<TypeInfo>,
    pub constants: Vec<EnumConstantDoc>,
    pub annotations: Vec<AnnotationInstance>,
    pub tags: Vec<TagInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnumConstantDoc {
    pub name: String,
    pub comment: Option<String>,
    pub annotations: Vec<AnnotationInstance>,
    pub tags: Vec<TagInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnnotationTypeDoc {
    pub name: String,
    pub qualified: String,
    pub comment: Option<String>,
    pub scope: String,
    pub elements: Vec<AnnotationElementDoc>,
    pub annotations: Vec<AnnotationInstance>,
    pub tags: Vec<TagInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnnotationElementDoc {
    pub name: String,
    pub qualified: String,
    pub type_info: TypeInfo,
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldDoc {
    pub name: String,
    pub qualified: String,
    pub comment: Option<String>,
    pub scope: String,
    pub type_info: TypeInfo,
    pub is_static: bool,
    pub is_final: bool,
    pub is_volatile: bool,
    pub is_transient: bool,
    pub constant: Option<String>,
    pub annotations: Vec<AnnotationInstance>,
    pub tags: Vec<TagInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConstructorDoc {
    pub name: String,
    pub qualified: String,
    pub comment: Option<String>,
    pub scope: String,
    pub is_final: bool,
    pub is_native: bool,
    pub is_static: bool,
    pub is_synchronized: bool,
    pub is_var_args: bool,
    pub signature: String,
    pub parameters: Vec<MethodParameter>,
    pub exceptions: Vec<TypeInfo>,
    pub annotations: Vec<AnnotationInstance>,
    pub tags: Vec<TagInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MethodDoc {
    pub name: String,
    pub qualified: String,
    pub comment: Option<String>,
    pub scope: String,
    pub is_abstract: bool,
    pub is_final: bool,
    pub is_native: bool,
    pub is_static: bool,
    pub is_synchronized: bool,
    pub is_var_args: bool,
    pub signature: String,
    pub return_type: TypeInfo,
    pub parameters: Vec<MethodParameter>,
    pub exceptions: Vec<TypeInfo>,
    pub annotations: Vec<AnnotationInstance>,
    pub tags: Vec<TagInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MethodParameter {
    pub name: String,
    pub type_info: TypeInfo,
    pub annotations: Vec<AnnotationInstance>,
}

/// Textual classification of a type occurrence. Recursive through type
/// arguments and wildcard bounds; arrays are flattened to the innermost
/// component plus a decimal `dimension`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypeInfo {
    pub qualified: String,
    /// Bracket-pair count for arrays; absent for non-arrays, never `"0"`.
    pub dimension: Option<String>,
    pub wildcard: Option<Box<Wildcard>>,
    pub generics: Vec<TypeInfo>,
}

impl TypeInfo {
    pub fn named(qualified: impl Into<String>) -> TypeInfo {
        TypeInfo {
            qualified: qualified.into(),
            ..TypeInfo::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Wildcard {
    pub extends_bound: Option<TypeInfo>,
    pub super_bound: Option<TypeInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypeParameter {
    pub name: String,
    /// One entry per intersection component, in source order.
    pub bounds: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnnotationInstance {
    pub name: String,
    pub qualified: String,
    pub arguments: Vec<AnnotationArgument>,
}

/// One named argument of an annotation use. Exactly one of `values` and
/// `annotations` carries the payload; both stay empty for an empty array.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnnotationArgument {
    pub name: String,
    pub type_info: TypeInfo,
    pub primitive: bool,
    pub array: bool,
    pub values: Vec<String>,
    pub annotations: Vec<AnnotationInstance>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TagInfo {
    /// Tag kind without the leading `@`.
    pub name: String,
    /// Source form of the full tag, leading `@` included.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_serializes_to_json() {
        let root = Root {
            packages: vec![Package {
                name: "p".to_string(),
                classes: vec![ClassDoc {
                    name: "C".to_string(),
                    qualified: "p.C".to_string(),
                    scope: "public".to_string(),
                    superclass: Some(TypeInfo::named("java.lang.Object")),
                    ..ClassDoc::default()
                }],
                ..Package::default()
            }],
        };
        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["packages"][0]["name"], "p");
        assert_eq!(json["packages"][0]["classes"][0]["qualified"], "p.C");
        assert_eq!(
            json["packages"][0]["classes"][0]["superclass"]["qualified"],
            "java.lang.Object"
        );
    }

    #[test]
    fn dimension_is_absent_by_default() {
        let info = TypeInfo::named("int");
        assert!(info.dimension.is_none());
        assert!(info.wildcard.is_none());
        assert!(info.generics.is_empty());
    }
}
