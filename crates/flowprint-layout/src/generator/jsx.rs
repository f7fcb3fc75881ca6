//! JSX emission: elements, fragments, attributes, children.

use flowprint_ast::{
    JsxAttribute, JsxAttributeItem, JsxAttributeName, JsxAttributeValue, JsxChild, JsxChildKind,
    JsxElement, JsxFragment, JsxMemberExpression, JsxMemberObject, JsxName, trim_jsx_text,
};

use crate::error::Result;
use crate::layout::{
    Layout, SequenceConfig, atom, fuse, identifier, if_break, pretty_space, sequence,
    source_location, space,
};
use crate::precedence::{ExpressionContext, PREC_MIN};

use super::emit_expression_with_parens;

pub(crate) fn emit_jsx_element(element: &JsxElement) -> Result<Layout> {
    let mut parts = vec![emit_opening_element(&element.opening)?];
    if !element.opening.self_closing {
        parts.push(emit_children(&element.children)?);
        if let Some(closing) = &element.closing {
            parts.push(source_location(
                closing.loc.clone(),
                fuse(vec![atom("</"), emit_name(&closing.name), atom(">")]),
            ));
        }
    }
    Ok(fuse(parts))
}

pub(crate) fn emit_jsx_fragment(fragment: &JsxFragment) -> Result<Layout> {
    Ok(fuse(vec![
        atom("<>"),
        emit_children(&fragment.children)?,
        atom("</>"),
    ]))
}

fn emit_opening_element(opening: &flowprint_ast::JsxOpeningElement) -> Result<Layout> {
    let mut parts = vec![atom("<"), emit_name(&opening.name)];
    if !opening.attributes.is_empty() {
        let children = opening
            .attributes
            .iter()
            .map(|attribute| {
                Ok(fuse(vec![
                    if_break(Layout::Empty, space()),
                    emit_attribute_item(attribute)?,
                ]))
            })
            .collect::<Result<Vec<_>>>()?;
        parts.push(sequence(
            SequenceConfig::default().inline(false, true),
            children,
        ));
    }
    if opening.self_closing {
        parts.push(pretty_space());
        parts.push(atom("/>"));
    } else {
        parts.push(atom(">"));
    }
    Ok(source_location(opening.loc.clone(), fuse(parts)))
}

fn emit_attribute_item(item: &JsxAttributeItem) -> Result<Layout> {
    match item {
        JsxAttributeItem::Attribute(attribute) => emit_attribute(attribute),
        JsxAttributeItem::Spread { loc, argument } => Ok(source_location(
            loc.clone(),
            fuse(vec![
                atom("{..."),
                emit_expression_with_parens(PREC_MIN, ExpressionContext::normal(), argument)?,
                atom("}"),
            ]),
        )),
    }
}

fn emit_attribute(attribute: &JsxAttribute) -> Result<Layout> {
    let name = match &attribute.name {
        JsxAttributeName::Identifier(id) => identifier(id.loc.clone(), &id.name),
        JsxAttributeName::Namespaced {
            loc,
            namespace,
            name,
        } => source_location(
            loc.clone(),
            atom(format!("{}:{}", namespace.name, name.name)),
        ),
    };
    let mut parts = vec![name];
    if let Some(value) = &attribute.value {
        parts.push(atom("="));
        parts.push(match value {
            // Attribute strings print as written; JSX text has no escapes
            // to renormalize.
            JsxAttributeValue::StringLiteral(lit) => atom(lit.raw.clone()),
            JsxAttributeValue::Container(container) => match &container.expression {
                Some(expr) => fuse(vec![
                    atom("{"),
                    emit_expression_with_parens(PREC_MIN, ExpressionContext::normal(), expr)?,
                    atom("}"),
                ]),
                None => atom("{}"),
            },
        });
    }
    Ok(source_location(attribute.loc.clone(), fuse(parts)))
}

fn emit_name(name: &JsxName) -> Layout {
    match name {
        JsxName::Identifier(id) => identifier(id.loc.clone(), &id.name),
        JsxName::Namespaced {
            loc,
            namespace,
            name,
        } => source_location(
            loc.clone(),
            atom(format!("{}:{}", namespace.name, name.name)),
        ),
        JsxName::Member(member) => emit_member_name(member),
    }
}

fn emit_member_name(member: &JsxMemberExpression) -> Layout {
    let object = match member.object.as_ref() {
        JsxMemberObject::Identifier(id) => identifier(id.loc.clone(), &id.name),
        JsxMemberObject::Member(inner) => emit_member_name(inner),
    };
    source_location(
        member.loc.clone(),
        fuse(vec![
            object,
            atom("."),
            identifier(member.property.loc.clone(), &member.property.name),
        ]),
    )
}

fn emit_children(children: &[JsxChild]) -> Result<Layout> {
    let mut items = Vec::with_capacity(children.len());
    for child in children {
        match &child.kind {
            JsxChildKind::Element(element) => {
                items.push(source_location(child.loc.clone(), emit_jsx_element(element)?));
            }
            JsxChildKind::Fragment(fragment) => {
                items.push(source_location(child.loc.clone(), emit_jsx_fragment(fragment)?));
            }
            JsxChildKind::ExpressionContainer(container) => match &container.expression {
                Some(expr) => items.push(source_location(
                    child.loc.clone(),
                    fuse(vec![
                        atom("{"),
                        emit_expression_with_parens(PREC_MIN, ExpressionContext::normal(), expr)?,
                        atom("}"),
                    ]),
                )),
                // Empty containers only hold comments; they drop.
                None => {}
            },
            JsxChildKind::SpreadChild(expr) => items.push(source_location(
                child.loc.clone(),
                fuse(vec![
                    atom("{..."),
                    emit_expression_with_parens(PREC_MIN, ExpressionContext::normal(), expr)?,
                    atom("}"),
                ]),
            )),
            JsxChildKind::Text { value, .. } => {
                if let Some((loc, trimmed)) = trim_jsx_text(&child.loc, value) {
                    items.push(source_location(loc, atom(trimmed)));
                }
            }
        }
    }
    if items.is_empty() {
        return Ok(Layout::Empty);
    }
    Ok(sequence(SequenceConfig::default(), items))
}
