//! Name, signature, and semantic-flag helpers over the type model.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::doc::{TypeInfo, Wildcard};
use crate::frontend::environment::Environment;
use crate::model::{
    ElementKind, ExecutableElement, Modifier, TypeElement, TypeMirror, VariableElement,
};

/// Matches the raw textual form of an executable type, `(params)return`.
static EXECUTABLE_FORM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\(.*\))(.*)$").unwrap());

pub struct TypeUtils<'e> {
    env: &'e Environment,
}

impl<'e> TypeUtils<'e> {
    pub fn new(env: &'e Environment) -> TypeUtils<'e> {
        TypeUtils { env }
    }

    /// The stable textual qualified name of a type mirror. Executable types
    /// print `(params)return` natively; rewrite those to `return (params)`,
    /// everything else passes through verbatim.
    pub fn qualified_name(&self, mirror: &TypeMirror) -> String {
        let text = mirror.to_string();
        match EXECUTABLE_FORM.captures(&text) {
            Some(captures) => format!("{} {}", &captures[2], &captures[1]),
            None => text,
        }
    }

    /// Normalized signature of a method or constructor,
    /// `return (p1,p2,...)`. For constructors the return portion is the
    /// declaring class's canonical name with its type parameters.
    pub fn method_signature(&self, executable: &ExecutableElement) -> String {
        self.qualified_name(&executable.as_type())
    }

    /// Number of `[]` pairs as decimal text; absent for non-arrays, which is
    /// distinct from `"0"`.
    pub fn array_dimension(&self, mirror: &TypeMirror) -> Option<String> {
        let mut count = 0usize;
        let mut current = mirror;
        while let TypeMirror::Array { component } = current {
            count += 1;
            current = component;
        }
        (count > 0).then(|| count.to_string())
    }

    /// The innermost non-array component of an array type, or the mirror
    /// itself when it is not an array.
    pub fn array_component<'m>(&self, mirror: &'m TypeMirror) -> &'m TypeMirror {
        let mut current = mirror;
        while let TypeMirror::Array { component } = current {
            current = component;
        }
        current
    }

    /// Classify a type mirror into a [`TypeInfo`]. Arrays flatten to the
    /// innermost component with a decimal `dimension`; wildcards report
    /// `"?"` plus their bounds; parameterized types carry their arguments
    /// under `generics` with the erasure name as `qualified`.
    pub fn classify(&self, mirror: &TypeMirror) -> TypeInfo {
        let dimension = self.array_dimension(mirror);
        let component = self.array_component(mirror);

        let mut info = match component {
            TypeMirror::Wildcard {
                extends_bound,
                super_bound,
            } => TypeInfo {
                qualified: "?".to_string(),
                wildcard: Some(Box::new(Wildcard {
                    extends_bound: extends_bound.as_deref().map(|b| self.classify(b)),
                    super_bound: super_bound.as_deref().map(|b| self.classify(b)),
                })),
                ..TypeInfo::default()
            },
            TypeMirror::Declared {
                qualified,
                type_args,
            } => TypeInfo {
                qualified: qualified.clone(),
                generics: type_args.iter().map(|arg| self.classify(arg)).collect(),
                ..TypeInfo::default()
            },
            other => TypeInfo::named(self.qualified_name(other)),
        };
        info.dimension = dimension;
        info
    }

    pub fn has_modifier(&self, modifiers: &[Modifier], wanted: Modifier) -> bool {
        modifiers.contains(&wanted)
    }

    pub fn fields_in<'a>(&self, element: &'a TypeElement) -> Vec<&'a VariableElement> {
        element
            .fields
            .iter()
            .filter(|f| f.kind == ElementKind::Field)
            .collect()
    }

    pub fn enum_constants_in<'a>(&self, element: &'a TypeElement) -> Vec<&'a VariableElement> {
        element
            .fields
            .iter()
            .filter(|f| f.kind == ElementKind::EnumConstant)
            .collect()
    }

    pub fn is_exception(&self, mirror: &TypeMirror) -> bool {
        self.is_subtype_of(mirror, "java.lang.Exception")
    }

    pub fn is_error(&self, mirror: &TypeMirror) -> bool {
        self.is_subtype_of(mirror, "java.lang.Error")
    }

    pub fn is_serializable(&self, mirror: &TypeMirror) -> bool {
        self.is_subtype_of(mirror, "java.io.Serializable")
    }

    pub fn is_externalizable(&self, mirror: &TypeMirror) -> bool {
        self.is_subtype_of(mirror, "java.io.Externalizable")
    }

    fn is_subtype_of(&self, mirror: &TypeMirror, root: &str) -> bool {
        match self.env.get_type_element(root) {
            Some(element) => self.env.is_subtype(mirror, &element.as_type()),
            None => {
                warn!(root, "well-known type is unavailable, flag defaults to false");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executable_form_is_rewritten() {
        let env = Environment::from_sources::<&str>(&[]).unwrap();
        let utils = TypeUtils::new(&env);
        let method_type = TypeMirror::Executable {
            params: vec![
                TypeMirror::Primitive("int".to_string()),
                TypeMirror::declared("java.lang.String"),
            ],
            ret: Box::new(TypeMirror::Void),
        };
        assert_eq!(
            utils.qualified_name(&method_type),
            "void (int,java.lang.String)"
        );
    }

    #[test]
    fn non_executable_passes_through() {
        let env = Environment::from_sources::<&str>(&[]).unwrap();
        let utils = TypeUtils::new(&env);
        let list = TypeMirror::Declared {
            qualified: "java.util.List".to_string(),
            type_args: vec![TypeMirror::declared("java.lang.String")],
        };
        assert_eq!(utils.qualified_name(&list), "java.util.List<java.lang.String>");
    }

    #[test]
    fn array_dimension_counts_brackets() {
        let env = Environment::from_sources::<&str>(&[]).unwrap();
        let utils = TypeUtils::new(&env);
        let matrix = TypeMirror::Array {
            component: Box::new(TypeMirror::Array {
                component: Box::new(TypeMirror::Primitive("int".to_string())),
            }),
        };
        assert_eq!(utils.array_dimension(&matrix), Some("2".to_string()));
        assert_eq!(utils.array_dimension(&TypeMirror::Void), None);
        assert_eq!(
            utils.array_component(&matrix).to_string(),
            "int"
        );
    }

    #[test]
    fn classify_flattens_arrays_to_component_plus_dimension() {
        let env = Environment::from_sources::<&str>(&[]).unwrap();
        let utils = TypeUtils::new(&env);
        let grid = TypeMirror::Array {
            component: Box::new(TypeMirror::Array {
                component: Box::new(TypeMirror::declared("java.lang.String")),
            }),
        };
        let info = utils.classify(&grid);
        assert_eq!(info.qualified, "java.lang.String");
        assert_eq!(info.dimension.as_deref(), Some("2"));
        assert!(info.qualified.find("[]").is_none());
    }

    #[test]
    fn classify_parameterized_and_wildcard() {
        let env = Environment::from_sources::<&str>(&[]).unwrap();
        let utils = TypeUtils::new(&env);
        let list = TypeMirror::Declared {
            qualified: "java.util.List".to_string(),
            type_args: vec![TypeMirror::Wildcard {
                extends_bound: Some(Box::new(TypeMirror::declared("java.lang.Number"))),
                super_bound: None,
            }],
        };
        let info = utils.classify(&list);
        assert_eq!(info.qualified, "java.util.List");
        assert_eq!(info.generics.len(), 1);
        let arg = &info.generics[0];
        assert_eq!(arg.qualified, "?");
        let wildcard = arg.wildcard.as_ref().unwrap();
        assert_eq!(
            wildcard.extends_bound.as_ref().unwrap().qualified,
            "java.lang.Number"
        );
        assert!(wildcard.super_bound.is_none());
    }

    #[test]
    fn exception_and_error_flags() {
        let env = Environment::from_sources(&[
            "package p; public class Oops extends RuntimeException {}",
            "package p; public class Fatal extends Error {}",
        ])
        .unwrap();
        let utils = TypeUtils::new(&env);
        let oops = env.get_type_element("p.Oops").unwrap().as_type();
        let fatal = env.get_type_element("p.Fatal").unwrap().as_type();
        assert!(utils.is_exception(&oops));
        assert!(!utils.is_error(&oops));
        assert!(utils.is_error(&fatal));
        assert!(!utils.is_exception(&fatal));
        // Throwable is serializable, so both inherit the flag.
        assert!(utils.is_serializable(&oops));
    }
}
