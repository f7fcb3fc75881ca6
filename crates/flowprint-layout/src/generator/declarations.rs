//! Patterns, variable declarations, function headers, and classes.

use flowprint_ast::{
    ArrayPatternElement, Class, ClassMember, Function, FunctionBody, FunctionParams, MethodKind,
    ObjectKey, ObjectPatternProperty, Pattern, PatternKind, Predicate, PredicateKind, Type,
    TypeKind, VariableDeclaration,
};

use crate::error::{LayoutError, Result};
use crate::layout::{
    BreakMode, Layout, SequenceConfig, atom, fuse, hardline, identifier, if_break, if_pretty,
    pretty_space, sequence, source_location, space,
};
use crate::precedence::{ContextLeft, ExpressionContext, PREC_CALL, PREC_MIN};

use super::types::{emit_type_args, emit_type_params};
use super::{
    comma_list_config, emit_block, emit_expression_with_parens, emit_object_key,
    emit_type_annotation, fuse_list, wrap_in_parens,
};

// =============================================================================
// Patterns
// =============================================================================

pub(crate) fn emit_pattern(pattern: &Pattern, ctxt: ExpressionContext) -> Result<Layout> {
    let layout = match &pattern.kind {
        PatternKind::Identifier {
            name,
            annotation,
            optional,
        } => {
            let mut parts = vec![identifier(pattern.loc.clone(), name)];
            if *optional {
                parts.push(atom("?"));
            }
            if let Some(annotation) = annotation {
                parts.push(emit_type_annotation(annotation));
            }
            fuse(parts)
        }
        PatternKind::Object {
            properties,
            annotation,
        } => {
            let has_rest = properties
                .iter()
                .any(|p| matches!(p, ObjectPatternProperty::Rest { .. }));
            let mut items = Vec::with_capacity(properties.len());
            for property in properties {
                items.push(match property {
                    ObjectPatternProperty::Property {
                        loc,
                        key,
                        pattern,
                        shorthand,
                    } => {
                        let layout = if *shorthand {
                            emit_pattern(pattern, ExpressionContext::normal())?
                        } else {
                            fuse(vec![
                                emit_object_key(key, false)?,
                                atom(":"),
                                pretty_space(),
                                emit_pattern(pattern, ExpressionContext::normal())?,
                            ])
                        };
                        source_location(loc.clone(), layout)
                    }
                    ObjectPatternProperty::Rest { loc, argument } => source_location(
                        loc.clone(),
                        fuse(vec![
                            atom("..."),
                            emit_pattern(argument, ExpressionContext::normal())?,
                        ]),
                    ),
                });
            }
            let mut parts = vec![
                atom("{"),
                comma_list_config(SequenceConfig::default(), items, !has_rest),
                atom("}"),
            ];
            if let Some(annotation) = annotation {
                parts.push(emit_type_annotation(annotation));
            }
            fuse(parts)
        }
        PatternKind::Array {
            elements,
            annotation,
        } => {
            let len = elements.len();
            let mut children = Vec::with_capacity(len);
            for (i, element) in elements.iter().enumerate() {
                let (item, is_rest) = match element {
                    Some(ArrayPatternElement::Pattern(p)) => {
                        (emit_pattern(p, ExpressionContext::normal())?, false)
                    }
                    Some(ArrayPatternElement::Rest { loc, argument }) => (
                        source_location(
                            loc.clone(),
                            fuse(vec![
                                atom("..."),
                                emit_pattern(argument, ExpressionContext::normal())?,
                            ]),
                        ),
                        true,
                    ),
                    None => (Layout::Empty, false),
                };
                let is_last = i + 1 == len;
                children.push(if !is_last {
                    fuse(vec![item, atom(","), if_break(Layout::Empty, pretty_space())])
                } else if element.is_none() {
                    fuse(vec![item, atom(",")])
                } else if is_rest {
                    item
                } else {
                    fuse(vec![item, if_break(atom(","), Layout::Empty)])
                });
            }
            let mut parts = vec![
                atom("["),
                sequence(SequenceConfig::default(), children),
                atom("]"),
            ];
            if let Some(annotation) = annotation {
                parts.push(emit_type_annotation(annotation));
            }
            fuse(parts)
        }
        PatternKind::Assignment { left, right } => {
            // `x: * = 1` keeps a real space before `=`: collapsing would lex
            // `*=` as an operator.
            let before_eq = if pattern_ends_in_exists(left) {
                space()
            } else {
                pretty_space()
            };
            fuse(vec![
                emit_pattern(left, ExpressionContext::normal())?,
                before_eq,
                atom("="),
                pretty_space(),
                emit_expression_with_parens(PREC_MIN, ExpressionContext::normal(), right)?,
            ])
        }
        PatternKind::Expression(expr) => {
            return emit_expression_with_parens(PREC_MIN, ctxt, expr);
        }
    };
    Ok(source_location(pattern.loc.clone(), layout))
}

fn pattern_ends_in_exists(pattern: &Pattern) -> bool {
    let annotation = match &pattern.kind {
        PatternKind::Identifier { annotation, .. }
        | PatternKind::Object { annotation, .. }
        | PatternKind::Array { annotation, .. } => annotation,
        _ => &None,
    };
    matches!(
        annotation,
        Some(Type {
            kind: TypeKind::Exists,
            ..
        })
    )
}

// =============================================================================
// Variable declarations
// =============================================================================

/// `var a = 1, b` — without a terminator; the statement (or `for` head)
/// supplies it. The group context threads into initializers so a bare `in`
/// inside a `for` init still gets its parens.
pub(crate) fn emit_variable_declaration(
    declaration: &VariableDeclaration,
    ctxt: ExpressionContext,
) -> Result<Layout> {
    let init_ctxt = ExpressionContext {
        left: ContextLeft::Normal,
        group: ctxt.group,
    };
    let mut declarators = Vec::with_capacity(declaration.declarations.len());
    for declarator in &declaration.declarations {
        let mut parts = vec![emit_pattern(&declarator.id, ExpressionContext::normal())?];
        if let Some(init) = &declarator.init {
            parts.push(pretty_space());
            parts.push(atom("="));
            parts.push(pretty_space());
            parts.push(emit_expression_with_parens(PREC_MIN, init_ctxt, init)?);
        }
        declarators.push(source_location(declarator.loc.clone(), fuse(parts)));
    }
    Ok(source_location(
        declaration.loc.clone(),
        fuse(vec![
            atom(declaration.kind.as_str()),
            space(),
            fuse_list(declarators, fuse(vec![atom(","), pretty_space()])),
        ]),
    ))
}

// =============================================================================
// Functions
// =============================================================================

/// A `function` expression or declaration header plus block body.
pub(crate) fn emit_function(func: &Function) -> Result<Layout> {
    let mut parts = Vec::new();
    if func.is_async {
        parts.push(atom("async"));
        parts.push(space());
    }
    parts.push(atom("function"));
    if func.is_generator {
        parts.push(atom("*"));
    }
    if let Some(id) = &func.id {
        parts.push(if func.is_generator { pretty_space() } else { space() });
        parts.push(identifier(id.loc.clone(), &id.name));
    }
    parts.push(emit_function_rest(func)?);
    Ok(source_location(func.loc.clone(), fuse(parts)))
}

/// Type parameters, parameter list, return annotation, predicate, and block
/// body; the part of a function shared by declarations, methods, getters,
/// and setters.
fn emit_function_rest(func: &Function) -> Result<Layout> {
    let mut parts = Vec::new();
    if let Some(type_params) = &func.type_params {
        parts.push(emit_type_params(type_params));
    }
    parts.push(emit_function_params(&func.params)?);
    if let Some(return_type) = &func.return_type {
        parts.push(emit_return_annotation(return_type));
    }
    if let Some(predicate) = &func.predicate {
        parts.push(space());
        parts.push(emit_predicate(predicate)?);
    }
    parts.push(pretty_space());
    match &func.body {
        FunctionBody::Block(block) => parts.push(emit_block(block)?),
        FunctionBody::Expression(_) => {
            return Err(LayoutError::invalid(
                "function body must be a block outside arrow functions",
            ));
        }
    }
    Ok(fuse(parts))
}

pub(crate) fn emit_function_params(params: &FunctionParams) -> Result<Layout> {
    let mut items = Vec::with_capacity(params.params.len() + 1);
    for param in &params.params {
        items.push(emit_pattern(param, ExpressionContext::normal())?);
    }
    if let Some(rest) = &params.rest {
        items.push(fuse(vec![
            atom("..."),
            emit_pattern(rest, ExpressionContext::normal())?,
        ]));
    }
    // No trailing comma after a rest parameter.
    let trailing = params.rest.is_none();
    Ok(fuse(vec![
        atom("("),
        comma_list_config(SequenceConfig::default(), items, trailing),
        atom(")"),
    ]))
}

/// `: T` in return position. An existential `*` keeps a real space after
/// the colon so `*` cannot fuse with a following `=>` into `*=`.
pub(crate) fn emit_return_annotation(return_type: &Type) -> Layout {
    let sep = if matches!(return_type.kind, TypeKind::Exists) {
        space()
    } else {
        pretty_space()
    };
    fuse(vec![atom(":"), sep, super::emit_type(return_type)])
}

pub(crate) fn emit_predicate(predicate: &Predicate) -> Result<Layout> {
    let layout = match &predicate.kind {
        PredicateKind::Inferred => atom("%checks"),
        PredicateKind::Declared(expr) => fuse(vec![
            atom("%checks"),
            wrap_in_parens(emit_expression_with_parens(
                0,
                ExpressionContext::normal(),
                expr,
            )?),
        ]),
    };
    Ok(source_location(predicate.loc.clone(), layout))
}

/// A method-shaped function: key, header, body — no `function` keyword.
/// `async` and `*` prefixes come first, the way class and object method
/// shorthand reads.
pub(crate) fn emit_method(key: &ObjectKey, func: &Function) -> Result<Layout> {
    let mut parts = Vec::new();
    if func.is_async {
        parts.push(atom("async"));
        parts.push(space());
    }
    if func.is_generator {
        parts.push(atom("*"));
    }
    parts.push(emit_object_key(key, true)?);
    parts.push(emit_function_rest(func)?);
    Ok(fuse(parts))
}

// =============================================================================
// Classes
// =============================================================================

pub(crate) fn emit_class(class: &Class) -> Result<Layout> {
    let mut parts = Vec::new();
    for decorator in &class.decorators {
        parts.push(emit_decorator(decorator)?);
    }
    parts.push(atom("class"));
    if let Some(id) = &class.id {
        parts.push(space());
        parts.push(identifier(id.loc.clone(), &id.name));
    }
    if let Some(type_params) = &class.type_params {
        parts.push(emit_type_params(type_params));
    }
    if let Some(superclass) = &class.superclass {
        parts.push(space());
        parts.push(atom("extends"));
        parts.push(space());
        parts.push(emit_expression_with_parens(
            PREC_CALL,
            ExpressionContext::normal(),
            superclass,
        )?);
        if let Some(super_type_args) = &class.super_type_args {
            parts.push(emit_type_args(super_type_args));
        }
    }
    if !class.implements.is_empty() {
        parts.push(space());
        parts.push(atom("implements"));
        parts.push(space());
        let mut items = Vec::with_capacity(class.implements.len());
        for implements in &class.implements {
            let mut impl_parts = vec![identifier(implements.id.loc.clone(), &implements.id.name)];
            if let Some(type_args) = &implements.type_args {
                impl_parts.push(emit_type_args(type_args));
            }
            items.push(source_location(implements.loc.clone(), fuse(impl_parts)));
        }
        parts.push(fuse_list(items, fuse(vec![atom(","), pretty_space()])));
    }
    parts.push(pretty_space());
    parts.push(emit_class_body(class)?);
    Ok(source_location(class.loc.clone(), fuse(parts)))
}

fn emit_class_body(class: &Class) -> Result<Layout> {
    if class.body.body.is_empty() {
        return Ok(atom("{}"));
    }
    let mut members = Vec::with_capacity(class.body.body.len());
    for member in &class.body.body {
        members.push(emit_class_member(member)?);
    }
    Ok(fuse(vec![
        atom("{"),
        sequence(
            SequenceConfig::with_break(BreakMode::IfPretty).inline(false, false),
            members,
        ),
        atom("}"),
    ]))
}

fn emit_class_member(member: &ClassMember) -> Result<Layout> {
    match member {
        ClassMember::Method(method) => {
            let mut parts = Vec::new();
            for decorator in &method.decorators {
                parts.push(emit_decorator(decorator)?);
            }
            if method.is_static {
                parts.push(atom("static"));
                parts.push(space());
            }
            match method.kind {
                MethodKind::Get => {
                    parts.push(atom("get"));
                    parts.push(space());
                }
                MethodKind::Set => {
                    parts.push(atom("set"));
                    parts.push(space());
                }
                MethodKind::Constructor | MethodKind::Method => {}
            }
            parts.push(emit_method(&method.key, &method.value)?);
            Ok(source_location(method.loc.clone(), fuse(parts)))
        }
        ClassMember::Property(property) => {
            let mut parts = Vec::new();
            if property.is_static {
                parts.push(atom("static"));
                parts.push(space());
            }
            if let Some(variance) = property.variance {
                parts.push(atom(variance.as_str()));
            }
            parts.push(emit_object_key(&property.key, true)?);
            if let Some(annotation) = &property.annotation {
                parts.push(emit_type_annotation(annotation));
            }
            if let Some(value) = &property.value {
                parts.push(pretty_space());
                parts.push(atom("="));
                parts.push(pretty_space());
                parts.push(emit_expression_with_parens(
                    PREC_MIN,
                    ExpressionContext::normal(),
                    value,
                )?);
            }
            parts.push(atom(";"));
            Ok(source_location(property.loc.clone(), fuse(parts)))
        }
    }
}

fn emit_decorator(decorator: &flowprint_ast::Expression) -> Result<Layout> {
    Ok(fuse(vec![
        atom("@"),
        emit_expression_with_parens(PREC_CALL, ExpressionContext::normal(), decorator)?,
        if_pretty(hardline(), space()),
    ]))
}
