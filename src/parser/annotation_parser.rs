//! Decodes annotation uses into documentation records.
//!
//! A decode never aborts the traversal: an annotation type that is absent
//! from the set of known types is reported at error severity, and whatever
//! portion of the use did resolve is still emitted.

use tracing::error;

use crate::doc::{AnnotationArgument, AnnotationInstance, TypeInfo};
use crate::frontend::environment::Environment;
use crate::model::{AnnotationMirror, AnnotationValue, ExecutableElement, TypeKind, TypeMirror};

use super::type_utils::TypeUtils;

pub struct AnnotationParser<'e> {
    env: &'e Environment,
    utils: TypeUtils<'e>,
}

impl<'e> AnnotationParser<'e> {
    pub fn new(env: &'e Environment) -> AnnotationParser<'e> {
        AnnotationParser {
            env,
            utils: TypeUtils::new(env),
        }
    }

    /// Decode one annotation use found on `program_element`.
    pub fn parse(&self, program_element: &str, mirror: &AnnotationMirror) -> AnnotationInstance {
        let qualified = match &mirror.type_mirror {
            TypeMirror::Error(name) => {
                error!(
                    element = program_element,
                    annotation = name.as_str(),
                    "unable to obtain type data about an annotation, its type is not on the known set"
                );
                name.clone()
            }
            other => other
                .erasure_name()
                .map(str::to_string)
                .unwrap_or_else(|| other.to_string()),
        };

        let declaration = self.env.get_type_element(&qualified);
        let arguments = mirror
            .element_values
            .iter()
            .map(|(name, value)| {
                let setter =
                    declaration.and_then(|d| d.methods.iter().find(|m| &m.simple_name == name));
                self.parse_argument(program_element, name, setter, value)
            })
            .collect();

        AnnotationInstance {
            name: mirror.simple_name(),
            qualified,
            arguments,
        }
    }

    fn parse_argument(
        &self,
        program_element: &str,
        name: &str,
        setter: Option<&ExecutableElement>,
        value: &AnnotationValue,
    ) -> AnnotationArgument {
        // The setter is the element declared in the annotation interface; its
        // return type is the argument's declared type. Without the declaration
        // the type stays blank and both flags default to false.
        let (type_info, primitive, array) = match setter {
            Some(setter) => (
                self.utils.classify(&setter.return_type),
                setter.return_type.kind() == TypeKind::Primitive,
                setter.return_type.kind() == TypeKind::Array,
            ),
            None => (TypeInfo::default(), false, false),
        };

        let mut argument = AnnotationArgument {
            name: name.to_string(),
            type_info,
            primitive,
            array,
            values: Vec::new(),
            annotations: Vec::new(),
        };
        self.parse_value(program_element, &mut argument, value);
        argument
    }

    fn parse_value(
        &self,
        program_element: &str,
        argument: &mut AnnotationArgument,
        value: &AnnotationValue,
    ) {
        match value {
            AnnotationValue::Array(elements) => {
                for element in elements {
                    match element {
                        AnnotationValue::Annotation(inner) => {
                            let decoded = self.parse(program_element, inner);
                            argument.annotations.push(decoded);
                        }
                        other => argument.values.push(other.unwrapped()),
                    }
                }
            }
            scalar => argument.values.push(scalar.unwrapped()),
        }
    }
}
