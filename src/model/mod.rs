// Host element/type model
//
// This module is the compiler-style view of the parsed sources that the parser
// traverses. It reconciles two representations:
// - elements.rs: the declaration view (type/executable/variable elements)
// - types.rs: the type view (fully substituted type mirrors)
// plus annotation uses (annotations.rs) and doc comment trees (doc_tree.rs).

pub mod annotations;
pub mod doc_tree;
pub mod elements;
pub mod types;

pub use annotations::{AnnotationMirror, AnnotationValue};
pub use doc_tree::{BlockTag, DocCommentTree, Documented};
pub use elements::{
    ElementKind, ExecutableElement, Modifier, PackageElement, TypeElement, VariableElement,
};
pub use types::{TypeKind, TypeMirror};
