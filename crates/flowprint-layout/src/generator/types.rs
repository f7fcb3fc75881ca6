//! Flow type annotation emission.
//!
//! Types carry no expressions, so emission here cannot fail.

use flowprint_ast::{
    FunctionType, FunctionTypeParam, GenericTypeId, Identifier, InterfaceExtends, ObjectType,
    ObjectTypeKey, ObjectTypeProperty, Type, TypeKind, TypeParameterDeclaration,
    TypeParameterInstantiation,
};

use crate::layout::{
    Layout, SequenceConfig, atom, fuse, identifier, if_break, pretty_space, sequence,
    source_location, space,
};

use super::{comma_list, comma_list_config, emit_literal, fuse_list, wrap_in_parens};

pub(crate) fn emit_type(ty: &Type) -> Layout {
    let layout = match &ty.kind {
        TypeKind::Any => atom("any"),
        TypeKind::Mixed => atom("mixed"),
        TypeKind::Empty => atom("empty"),
        TypeKind::Void => atom("void"),
        TypeKind::Null => atom("null"),
        TypeKind::Number => atom("number"),
        TypeKind::String => atom("string"),
        TypeKind::Boolean => atom("boolean"),
        TypeKind::Exists => atom("*"),
        TypeKind::Nullable(inner) => fuse(vec![
            atom("?"),
            wrap_if(
                matches!(
                    inner.kind,
                    TypeKind::Union(_) | TypeKind::Intersection(_) | TypeKind::Function(_)
                ),
                emit_type(inner),
            ),
        ]),
        TypeKind::Function(func) => emit_function_type(func, false),
        TypeKind::Object(object) => emit_object_type(object),
        TypeKind::Array(element) => fuse(vec![
            wrap_if(
                matches!(
                    element.kind,
                    TypeKind::Union(_)
                        | TypeKind::Intersection(_)
                        | TypeKind::Function(_)
                        | TypeKind::Nullable(_)
                ),
                emit_type(element),
            ),
            atom("[]"),
        ]),
        TypeKind::Generic(generic) => {
            let mut parts = vec![emit_generic_id(&generic.id)];
            if let Some(type_args) = &generic.type_args {
                parts.push(emit_type_args(type_args));
            }
            fuse(parts)
        }
        TypeKind::Union(members) => emit_joined_members(members, "|"),
        TypeKind::Intersection(members) => emit_joined_members(members, "&"),
        TypeKind::Typeof(inner) => fuse(vec![atom("typeof"), space(), emit_type(inner)]),
        TypeKind::Tuple(members) => fuse(vec![
            atom("["),
            comma_list(members.iter().map(emit_type).collect()),
            atom("]"),
        ]),
        TypeKind::StringLiteral { raw, .. } | TypeKind::NumberLiteral { raw, .. } => {
            atom(raw.clone())
        }
        TypeKind::BooleanLiteral(true) => atom("true"),
        TypeKind::BooleanLiteral(false) => atom("false"),
    };
    source_location(ty.loc.clone(), layout)
}

fn wrap_if(cond: bool, layout: Layout) -> Layout {
    if cond { wrap_in_parens(layout) } else { layout }
}

/// Union and intersection members, `sep`-joined. When the sequence breaks,
/// every member takes a leading separator; the first member's separator is
/// hidden in flat position.
fn emit_joined_members(members: &[Type], sep: &str) -> Layout {
    let children = members
        .iter()
        .enumerate()
        .map(|(i, member)| {
            let member_layout = wrap_if(
                member_needs_parens(member, sep),
                emit_type(member),
            );
            let lead = if i == 0 {
                if_break(fuse(vec![atom(sep), space()]), Layout::Empty)
            } else {
                if_break(
                    fuse(vec![atom(sep), space()]),
                    fuse(vec![pretty_space(), atom(sep), pretty_space()]),
                )
            };
            fuse(vec![lead, member_layout])
        })
        .collect();
    sequence(SequenceConfig::default().inline(false, true), children)
}

fn member_needs_parens(member: &Type, sep: &str) -> bool {
    match &member.kind {
        // A function's return type would swallow the rest of the union.
        TypeKind::Function(_) => true,
        // Intersections bind tighter, so a union inside one keeps parens.
        TypeKind::Union(_) => sep == "&",
        _ => false,
    }
}

/// `(a: T, b?: U) => R` in arrow style, `(a: T): R` in method style.
pub(crate) fn emit_function_type(func: &FunctionType, method_style: bool) -> Layout {
    let mut parts = Vec::new();
    if let Some(type_params) = &func.type_params {
        parts.push(emit_type_params(type_params));
    }
    let mut items: Vec<Layout> = func.params.iter().map(emit_function_type_param).collect();
    if let Some(rest) = &func.rest {
        items.push(fuse(vec![atom("..."), emit_function_type_param(rest)]));
    }
    let trailing = func.rest.is_none();
    parts.push(atom("("));
    parts.push(comma_list_config(SequenceConfig::default(), items, trailing));
    parts.push(atom(")"));
    if method_style {
        parts.push(atom(":"));
        parts.push(pretty_space());
    } else {
        parts.push(pretty_space());
        parts.push(atom("=>"));
        parts.push(pretty_space());
    }
    parts.push(emit_type(&func.return_type));
    fuse(parts)
}

fn emit_function_type_param(param: &FunctionTypeParam) -> Layout {
    let mut parts = Vec::new();
    if let Some(name) = &param.name {
        parts.push(identifier(name.loc.clone(), &name.name));
        if param.optional {
            parts.push(atom("?"));
        }
        parts.push(atom(":"));
        parts.push(pretty_space());
    }
    parts.push(emit_type(&param.annotation));
    source_location(param.loc.clone(), fuse(parts))
}

/// `{ … }`, or `{| … |}` for exact object types.
pub(crate) fn emit_object_type(object: &ObjectType) -> Layout {
    let (open, close) = if object.exact { ("{|", "|}") } else { ("{", "}") };
    if object.properties.is_empty() {
        return atom(format!("{open}{close}"));
    }
    let items = object
        .properties
        .iter()
        .map(emit_object_type_property)
        .collect();
    fuse(vec![atom(open), comma_list(items), atom(close)])
}

fn emit_object_type_property(property: &ObjectTypeProperty) -> Layout {
    match property {
        ObjectTypeProperty::Prop(prop) => {
            let mut parts = Vec::new();
            if prop.is_static {
                parts.push(atom("static"));
                parts.push(space());
            }
            if let Some(variance) = prop.variance {
                parts.push(atom(variance.as_str()));
            }
            parts.push(emit_object_type_key(&prop.key));
            if prop.method
                && let TypeKind::Function(func) = &prop.value.kind
            {
                if prop.optional {
                    parts.push(atom("?"));
                }
                parts.push(emit_function_type(func, true));
            } else {
                if prop.optional {
                    parts.push(atom("?"));
                }
                parts.push(atom(":"));
                parts.push(pretty_space());
                parts.push(emit_type(&prop.value));
            }
            source_location(prop.loc.clone(), fuse(parts))
        }
        ObjectTypeProperty::Spread { loc, argument } => {
            source_location(loc.clone(), fuse(vec![atom("..."), emit_type(argument)]))
        }
        ObjectTypeProperty::Indexer(indexer) => {
            let mut parts = Vec::new();
            if indexer.is_static {
                parts.push(atom("static"));
                parts.push(space());
            }
            if let Some(variance) = indexer.variance {
                parts.push(atom(variance.as_str()));
            }
            parts.push(atom("["));
            if let Some(id) = &indexer.id {
                parts.push(identifier(id.loc.clone(), &id.name));
                parts.push(atom(":"));
                parts.push(pretty_space());
            }
            parts.push(emit_type(&indexer.key));
            parts.push(atom("]"));
            parts.push(atom(":"));
            parts.push(pretty_space());
            parts.push(emit_type(&indexer.value));
            source_location(indexer.loc.clone(), fuse(parts))
        }
        ObjectTypeProperty::Call(call) => {
            let mut parts = Vec::new();
            if call.is_static {
                parts.push(atom("static"));
                parts.push(space());
            }
            parts.push(emit_function_type(&call.value, true));
            source_location(call.loc.clone(), fuse(parts))
        }
    }
}

fn emit_object_type_key(key: &ObjectTypeKey) -> Layout {
    match key {
        ObjectTypeKey::Identifier(id) => identifier(id.loc.clone(), &id.name),
        ObjectTypeKey::Literal(lit) => emit_literal(lit),
    }
}

fn emit_generic_id(id: &GenericTypeId) -> Layout {
    match id {
        GenericTypeId::Unqualified(name) => identifier(name.loc.clone(), &name.name),
        GenericTypeId::Qualified {
            loc,
            qualification,
            id,
        } => source_location(
            loc.clone(),
            fuse(vec![
                emit_generic_id(qualification),
                atom("."),
                identifier(id.loc.clone(), &id.name),
            ]),
        ),
    }
}

/// `: T` — the annotation suffix on identifiers, parameters, and members.
pub(crate) fn emit_type_annotation(ty: &Type) -> Layout {
    fuse(vec![atom(":"), pretty_space(), emit_type(ty)])
}

/// `<T: Bound = Default, +U>` in declaration position.
pub(crate) fn emit_type_params(params: &TypeParameterDeclaration) -> Layout {
    let items = params
        .params
        .iter()
        .map(|param| {
            let mut parts = Vec::new();
            if let Some(variance) = param.variance {
                parts.push(atom(variance.as_str()));
            }
            parts.push(atom(param.name.clone()));
            if let Some(bound) = &param.bound {
                parts.push(atom(":"));
                parts.push(pretty_space());
                parts.push(emit_type(bound));
            }
            if let Some(default) = &param.default {
                parts.push(pretty_space());
                parts.push(atom("="));
                parts.push(pretty_space());
                parts.push(emit_type(default));
            }
            source_location(param.loc.clone(), fuse(parts))
        })
        .collect();
    source_location(
        params.loc.clone(),
        fuse(vec![atom("<"), comma_list(items), atom(">")]),
    )
}

/// `<T, U>` in use position.
pub(crate) fn emit_type_args(args: &TypeParameterInstantiation) -> Layout {
    source_location(
        args.loc.clone(),
        fuse(vec![
            atom("<"),
            comma_list(args.params.iter().map(emit_type).collect()),
            atom(">"),
        ]),
    )
}

/// The shared shape of `interface`, `declare interface`, and
/// `declare class`: name, type parameters, extends list, object-type body.
pub(crate) fn emit_interface_like(
    id: &Identifier,
    type_params: Option<&TypeParameterDeclaration>,
    extends: &[InterfaceExtends],
    body: &ObjectType,
) -> Layout {
    let mut parts = vec![identifier(id.loc.clone(), &id.name)];
    if let Some(type_params) = type_params {
        parts.push(emit_type_params(type_params));
    }
    if !extends.is_empty() {
        parts.push(space());
        parts.push(atom("extends"));
        parts.push(space());
        let items = extends
            .iter()
            .map(|extend| {
                let mut extend_parts = vec![emit_generic_id(&extend.id)];
                if let Some(type_args) = &extend.type_args {
                    extend_parts.push(emit_type_args(type_args));
                }
                source_location(extend.loc.clone(), fuse(extend_parts))
            })
            .collect();
        parts.push(fuse_list(items, fuse(vec![atom(","), pretty_space()])));
    }
    parts.push(pretty_space());
    parts.push(emit_object_type(body));
    fuse(parts)
}
