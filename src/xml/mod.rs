//! XML rendering of the documentation tree.
//!
//! One element per record, scalar facts as attributes, nested records as
//! child elements. Boolean attributes render as `true`/`false`; absent
//! options are omitted entirely rather than written blank.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::doc::{
    AnnotationElementDoc, AnnotationInstance, AnnotationTypeDoc, ClassDoc, ConstructorDoc,
    EnumConstantDoc, EnumDoc, FieldDoc, InterfaceDoc, MethodDoc, MethodParameter, Package, Root,
    TagInfo, TypeInfo, TypeParameter,
};
use crate::error::DocletError;

type XmlWriter<'w> = Writer<&'w mut Cursor<Vec<u8>>>;

/// Render the whole tree as an indented UTF-8 XML document.
pub fn render_root(root: &Root) -> Result<String, DocletError> {
    let mut buffer = Cursor::new(Vec::new());
    let mut writer = Writer::new_with_indent(&mut buffer, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("root")))?;
    for package in &root.packages {
        write_package(&mut writer, package)?;
    }
    writer.write_event(Event::End(BytesEnd::new("root")))?;
    drop(writer);

    let bytes = buffer.into_inner();
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_package(writer: &mut XmlWriter<'_>, package: &Package) -> Result<(), DocletError> {
    let mut start = BytesStart::new("package");
    start.push_attribute(("name", package.name.as_str()));
    push_optional(&mut start, "comment", package.comment.as_deref());

    writer.write_event(Event::Start(start))?;
    write_tags(writer, &package.tags)?;
    for annotation in &package.annotations {
        write_annotation_type(writer, annotation)?;
    }
    for enum_doc in &package.enums {
        write_enum(writer, enum_doc)?;
    }
    for interface in &package.interfaces {
        write_interface(writer, interface)?;
    }
    for class in &package.classes {
        write_class(writer, class)?;
    }
    writer.write_event(Event::End(BytesEnd::new("package")))?;
    Ok(())
}

fn write_class(writer: &mut XmlWriter<'_>, class: &ClassDoc) -> Result<(), DocletError> {
    let mut start = BytesStart::new("class");
    start.push_attribute(("name", class.name.as_str()));
    start.push_attribute(("qualified", class.qualified.as_str()));
    push_optional(&mut start, "comment", class.comment.as_deref());
    start.push_attribute(("scope", class.scope.as_str()));
    push_flag(&mut start, "abstract", class.is_abstract);
    push_flag(&mut start, "error", class.is_error);
    push_flag(&mut start, "exception", class.is_exception);
    push_flag(&mut start, "externalizable", class.is_externalizable);
    push_flag(&mut start, "serializable", class.is_serializable);

    writer.write_event(Event::Start(start))?;
    for generic in &class.generics {
        write_type_parameter(writer, generic)?;
    }
    if let Some(superclass) = &class.superclass {
        write_type_info(writer, "class", superclass)?;
    }
    for interface in &class.interfaces {
        write_type_info(writer, "interface", interface)?;
    }
    for method in &class.methods {
        write_method(writer, method)?;
    }
    write_annotations(writer, &class.annotations)?;
    for constructor in &class.constructors {
        write_constructor(writer, constructor)?;
    }
    for field in &class.fields {
        write_field(writer, field)?;
    }
    write_tags(writer, &class.tags)?;
    writer.write_event(Event::End(BytesEnd::new("class")))?;
    Ok(())
}

fn write_interface(writer: &mut XmlWriter<'_>, interface: &InterfaceDoc) -> Result<(), DocletError> {
    let mut start = BytesStart::new("interface");
    start.push_attribute(("name", interface.name.as_str()));
    start.push_attribute(("qualified", interface.qualified.as_str()));
    push_optional(&mut start, "comment", interface.comment.as_deref());
    start.push_attribute(("scope", interface.scope.as_str()));

    writer.write_event(Event::Start(start))?;
    for generic in &interface.generics {
        write_type_parameter(writer, generic)?;
    }
    for extended in &interface.interfaces {
        write_type_info(writer, "interface", extended)?;
    }
    for method in &interface.methods {
        write_method(writer, method)?;
    }
    write_annotations(writer, &interface.annotations)?;
    write_tags(writer, &interface.tags)?;
    for field in &interface.fields {
        write_field(writer, field)?;
    }
    writer.write_event(Event::End(BytesEnd::new("interface")))?;
    Ok(())
}

fn write_enum(writer: &mut XmlWriter<'_>, enum_doc: &EnumDoc) -> Result<(), DocletError> {
    let mut start = BytesStart::new("enum");
    start.push_attribute(("name", enum_doc.name.as_str()));
    start.push_attribute(("qualified", enum_doc.qualified.as_str()));
    push_optional(&mut start, "comment", enum_doc.comment.as_deref());
    start.push_attribute(("scope", enum_doc.scope.as_str()));

    writer.write_event(Event::Start(start))?;
    if let Some(superclass) = &enum_doc.superclass {
        write_type_info(writer, "class", superclass)?;
    }
    for interface in &enum_doc.interfaces {
        write_type_info(writer, "interface", interface)?;
    }
    for constant in &enum_doc.constants {
        write_enum_constant(writer, constant)?;
    }
    write_annotations(writer, &enum_doc.annotations)?;
    write_tags(writer, &enum_doc.tags)?;
    writer.write_event(Event::End(BytesEnd::new("enum")))?;
    Ok(())
}

fn write_enum_constant(
    writer: &mut XmlWriter<'_>,
    constant: &EnumConstantDoc,
) -> Result<(), DocletError> {
    let mut start = BytesStart::new("constant");
    start.push_attribute(("name", constant.name.as_str()));
    push_optional(&mut start, "comment", constant.comment.as_deref());

    if constant.annotations.is_empty() && constant.tags.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }
    writer.write_event(Event::Start(start))?;
    write_annotations(writer, &constant.annotations)?;
    write_tags(writer, &constant.tags)?;
    writer.write_event(Event::End(BytesEnd::new("constant")))?;
    Ok(())
}

fn write_annotation_type(
    writer: &mut XmlWriter<'_>,
    annotation: &AnnotationTypeDoc,
) -> Result<(), DocletError> {
    let mut start = BytesStart::new("annotation");
    start.push_attribute(("name", annotation.name.as_str()));
    start.push_attribute(("qualified", annotation.qualified.as_str()));
    push_optional(&mut start, "comment", annotation.comment.as_deref());
    start.push_attribute(("scope", annotation.scope.as_str()));

    writer.write_event(Event::Start(start))?;
    for element in &annotation.elements {
        write_annotation_element(writer, element)?;
    }
    write_annotations(writer, &annotation.annotations)?;
    write_tags(writer, &annotation.tags)?;
    writer.write_event(Event::End(BytesEnd::new("annotation")))?;
    Ok(())
}

fn write_annotation_element(
    writer: &mut XmlWriter<'_>,
    element: &AnnotationElementDoc,
) -> Result<(), DocletError> {
    let mut start = BytesStart::new("element");
    start.push_attribute(("name", element.name.as_str()));
    start.push_attribute(("qualified", element.qualified.as_str()));
    push_optional(&mut start, "default", element.default.as_deref());

    writer.write_event(Event::Start(start))?;
    write_type_info(writer, "type", &element.type_info)?;
    writer.write_event(Event::End(BytesEnd::new("element")))?;
    Ok(())
}

fn write_method(writer: &mut XmlWriter<'_>, method: &MethodDoc) -> Result<(), DocletError> {
    let mut start = BytesStart::new("method");
    start.push_attribute(("name", method.name.as_str()));
    start.push_attribute(("qualified", method.qualified.as_str()));
    push_optional(&mut start, "comment", method.comment.as_deref());
    start.push_attribute(("scope", method.scope.as_str()));
    push_flag(&mut start, "abstract", method.is_abstract);
    push_flag(&mut start, "final", method.is_final);
    push_flag(&mut start, "native", method.is_native);
    push_flag(&mut start, "static", method.is_static);
    push_flag(&mut start, "synchronized", method.is_synchronized);
    push_flag(&mut start, "varArgs", method.is_var_args);
    start.push_attribute(("signature", method.signature.as_str()));

    writer.write_event(Event::Start(start))?;
    write_type_info(writer, "return", &method.return_type)?;
    for parameter in &method.parameters {
        write_parameter(writer, parameter)?;
    }
    for exception in &method.exceptions {
        write_type_info(writer, "exception", exception)?;
    }
    write_annotations(writer, &method.annotations)?;
    write_tags(writer, &method.tags)?;
    writer.write_event(Event::End(BytesEnd::new("method")))?;
    Ok(())
}

fn write_constructor(
    writer: &mut XmlWriter<'_>,
    constructor: &ConstructorDoc,
) -> Result<(), DocletError> {
    let mut start = BytesStart::new("constructor");
    start.push_attribute(("name", constructor.name.as_str()));
    start.push_attribute(("qualified", constructor.qualified.as_str()));
    push_optional(&mut start, "comment", constructor.comment.as_deref());
    start.push_attribute(("scope", constructor.scope.as_str()));
    push_flag(&mut start, "final", constructor.is_final);
    push_flag(&mut start, "native", constructor.is_native);
    push_flag(&mut start, "static", constructor.is_static);
    push_flag(&mut start, "synchronized", constructor.is_synchronized);
    push_flag(&mut start, "varArgs", constructor.is_var_args);
    start.push_attribute(("signature", constructor.signature.as_str()));

    writer.write_event(Event::Start(start))?;
    for parameter in &constructor.parameters {
        write_parameter(writer, parameter)?;
    }
    for exception in &constructor.exceptions {
        write_type_info(writer, "exception", exception)?;
    }
    write_annotations(writer, &constructor.annotations)?;
    write_tags(writer, &constructor.tags)?;
    writer.write_event(Event::End(BytesEnd::new("constructor")))?;
    Ok(())
}

fn write_parameter(
    writer: &mut XmlWriter<'_>,
    parameter: &MethodParameter,
) -> Result<(), DocletError> {
    let mut start = BytesStart::new("parameter");
    start.push_attribute(("name", parameter.name.as_str()));

    writer.write_event(Event::Start(start))?;
    write_type_info(writer, "type", &parameter.type_info)?;
    write_annotations(writer, &parameter.annotations)?;
    writer.write_event(Event::End(BytesEnd::new("parameter")))?;
    Ok(())
}

fn write_field(writer: &mut XmlWriter<'_>, field: &FieldDoc) -> Result<(), DocletError> {
    let mut start = BytesStart::new("field");
    start.push_attribute(("name", field.name.as_str()));
    start.push_attribute(("qualified", field.qualified.as_str()));
    push_optional(&mut start, "comment", field.comment.as_deref());
    start.push_attribute(("scope", field.scope.as_str()));
    push_flag(&mut start, "volatile", field.is_volatile);
    push_flag(&mut start, "transient", field.is_transient);
    push_flag(&mut start, "static", field.is_static);
    push_flag(&mut start, "final", field.is_final);
    push_optional(&mut start, "constant", field.constant.as_deref());

    writer.write_event(Event::Start(start))?;
    write_type_info(writer, "type", &field.type_info)?;
    write_annotations(writer, &field.annotations)?;
    write_tags(writer, &field.tags)?;
    writer.write_event(Event::End(BytesEnd::new("field")))?;
    Ok(())
}

/// A [`TypeInfo`] under a caller-chosen element name: `type`, `return`,
/// `class` (superclass), `interface`, `exception`, `generic`, or a wildcard
/// bound.
fn write_type_info(
    writer: &mut XmlWriter<'_>,
    element_name: &str,
    info: &TypeInfo,
) -> Result<(), DocletError> {
    let mut start = BytesStart::new(element_name);
    start.push_attribute(("qualified", info.qualified.as_str()));
    push_optional(&mut start, "dimension", info.dimension.as_deref());

    if info.wildcard.is_none() && info.generics.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(wildcard) = &info.wildcard {
        writer.write_event(Event::Start(BytesStart::new("wildcard")))?;
        if let Some(bound) = &wildcard.extends_bound {
            write_type_info(writer, "extendsBound", bound)?;
        }
        if let Some(bound) = &wildcard.super_bound {
            write_type_info(writer, "superBound", bound)?;
        }
        writer.write_event(Event::End(BytesEnd::new("wildcard")))?;
    }
    for argument in &info.generics {
        write_type_info(writer, "generic", argument)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element_name)))?;
    Ok(())
}

fn write_type_parameter(
    writer: &mut XmlWriter<'_>,
    parameter: &TypeParameter,
) -> Result<(), DocletError> {
    let mut start = BytesStart::new("generic");
    start.push_attribute(("name", parameter.name.as_str()));

    if parameter.bounds.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }
    writer.write_event(Event::Start(start))?;
    for bound in &parameter.bounds {
        let mut bound_start = BytesStart::new("bound");
        bound_start.push_attribute(("type", bound.as_str()));
        writer.write_event(Event::Empty(bound_start))?;
    }
    writer.write_event(Event::End(BytesEnd::new("generic")))?;
    Ok(())
}

fn write_annotations(
    writer: &mut XmlWriter<'_>,
    annotations: &[AnnotationInstance],
) -> Result<(), DocletError> {
    for annotation in annotations {
        write_annotation_instance(writer, annotation)?;
    }
    Ok(())
}

fn write_annotation_instance(
    writer: &mut XmlWriter<'_>,
    annotation: &AnnotationInstance,
) -> Result<(), DocletError> {
    let mut start = BytesStart::new("annotation");
    start.push_attribute(("name", annotation.name.as_str()));
    start.push_attribute(("qualified", annotation.qualified.as_str()));

    if annotation.arguments.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }
    writer.write_event(Event::Start(start))?;
    for argument in &annotation.arguments {
        let mut argument_start = BytesStart::new("argument");
        argument_start.push_attribute(("name", argument.name.as_str()));
        push_flag(&mut argument_start, "primitive", argument.primitive);
        push_flag(&mut argument_start, "array", argument.array);

        writer.write_event(Event::Start(argument_start))?;
        write_type_info(writer, "type", &argument.type_info)?;
        for value in &argument.values {
            let mut value_start = BytesStart::new("value");
            value_start.push_attribute(("text", value.as_str()));
            writer.write_event(Event::Empty(value_start))?;
        }
        write_annotations(writer, &argument.annotations)?;
        writer.write_event(Event::End(BytesEnd::new("argument")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("annotation")))?;
    Ok(())
}

fn write_tags(writer: &mut XmlWriter<'_>, tags: &[TagInfo]) -> Result<(), DocletError> {
    for tag in tags {
        let mut start = BytesStart::new("tag");
        start.push_attribute(("name", tag.name.as_str()));
        start.push_attribute(("text", tag.text.as_str()));
        writer.write_event(Event::Empty(start))?;
    }
    Ok(())
}

fn push_flag(start: &mut BytesStart<'_>, name: &str, value: bool) {
    start.push_attribute((name, if value { "true" } else { "false" }));
}

fn push_optional(start: &mut BytesStart<'_>, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        start.push_attribute((name, value));
    }
}
