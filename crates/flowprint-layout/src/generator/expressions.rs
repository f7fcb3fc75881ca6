//! Expression emission.
//!
//! Every function threads an `ExpressionContext` describing the lexical
//! neighborhood and emits children at the minimum precedence their position
//! requires. Parentheses are inserted in exactly two cases: the child's
//! precedence is below the minimum, or `definitely_needs_parens` reports a
//! grammar ambiguity for the current context.

use flowprint_ast::{
    ArrayElement, BinaryOp, CallArgument, Expression, ExpressionKind, Function, FunctionBody,
    Literal, LiteralValue, LogicalOp, MemberProperty, ObjectKey, ObjectProperty,
    ObjectPropertyKind, TemplateLiteral, UnaryOp,
};

use crate::error::{LayoutError, Result};
use crate::layout::{
    Layout, SequenceConfig, atom, fuse, identifier, if_break, if_pretty, pretty_space, sequence,
    source_location, space,
};
use crate::literals::{format_number, quote_string};
use crate::precedence::{
    ContextGroup, ContextLeft, ExpressionContext, PREC_CALL, PREC_MIN, PREC_NEW, PREC_UNARY,
    definitely_needs_parens, precedence_of,
};

use super::{
    comma_list, emit_class, emit_function, emit_pattern, emit_type_annotation, fuse_list,
    wrap_in_parens,
};

/// Emit `expr`, parenthesizing when its precedence falls below `min_prec`
/// or the context demands it. A parenthesized child is emitted in the
/// normal context: the wrapper clears the lexical neighborhood.
pub(crate) fn emit_expression_with_parens(
    min_prec: u32,
    ctxt: ExpressionContext,
    expr: &Expression,
) -> Result<Layout> {
    if definitely_needs_parens(ctxt, expr) || precedence_of(expr) < min_prec {
        Ok(wrap_in_parens(emit_expression(
            expr,
            ExpressionContext::normal(),
        )?))
    } else {
        emit_expression(expr, ctxt)
    }
}

/// Emit `expr` with no outer parenthesization decision.
pub(crate) fn emit_expression(expr: &Expression, ctxt: ExpressionContext) -> Result<Layout> {
    let p = precedence_of(expr);
    let layout = match &expr.kind {
        ExpressionKind::This => atom("this"),
        ExpressionKind::Super => atom("super"),
        ExpressionKind::Identifier(id) => return Ok(identifier(id.loc.clone(), &id.name)),
        ExpressionKind::Literal(lit) => emit_literal(lit),
        ExpressionKind::Sequence { expressions } => {
            // The right side of `,` parenthesizes nested sequences.
            let mut items = Vec::with_capacity(expressions.len());
            for (i, item) in expressions.iter().enumerate() {
                let item_ctxt = if i == 0 { ctxt } else { ctxt.reset_left() };
                items.push(emit_expression_with_parens(p + 1, item_ctxt, item)?);
            }
            comma_list_flat(items)
        }
        ExpressionKind::Array { elements } => emit_array(elements)?,
        ExpressionKind::Object { properties } => emit_object(properties)?,
        ExpressionKind::TemplateLiteral(template) => emit_template_literal(template)?,
        ExpressionKind::TaggedTemplate { tag, quasi } => {
            let tag_ctxt = ExpressionContext {
                left: ContextLeft::InTaggedTemplate,
                group: ctxt.group,
            };
            fuse(vec![
                emit_expression_with_parens(PREC_CALL, tag_ctxt, tag)?,
                emit_template_literal(quasi)?,
            ])
        }
        ExpressionKind::Function(func) => emit_function(func)?,
        ExpressionKind::ArrowFunction(func) => emit_arrow_function(func)?,
        ExpressionKind::Assignment {
            operator,
            left,
            right,
        } => fuse(vec![
            emit_pattern(left, ctxt)?,
            pretty_space(),
            atom(operator.as_str()),
            pretty_space(),
            emit_expression_with_parens(PREC_MIN, ctxt.reset_left(), right)?,
        ]),
        ExpressionKind::Binary {
            operator,
            left,
            right,
        } => emit_binary(p, ctxt, *operator, left, right)?,
        ExpressionKind::Logical {
            operator,
            left,
            right,
        } => emit_logical(p, ctxt, *operator, left, right)?,
        ExpressionKind::Conditional {
            test,
            consequent,
            alternate,
        } => {
            let branch_ctxt = ctxt.reset_left();
            fuse(vec![
                emit_expression_with_parens(p + 1, ctxt, test)?,
                pretty_space(),
                atom("?"),
                pretty_space(),
                emit_expression_with_parens(PREC_MIN, branch_ctxt, consequent)?,
                pretty_space(),
                atom(":"),
                pretty_space(),
                emit_expression_with_parens(PREC_MIN, branch_ctxt, alternate)?,
            ])
        }
        ExpressionKind::Call { callee, arguments } => fuse(vec![
            emit_expression_with_parens(PREC_CALL, ctxt, callee)?,
            emit_arguments(arguments)?,
        ]),
        ExpressionKind::New { callee, arguments } => {
            // The argument list of any call inside the callee would capture
            // the `new` arguments, so a callee containing a call is always
            // wrapped.
            let callee_layout = if contains_call_expression(callee) {
                wrap_in_parens(emit_expression(callee, ExpressionContext::normal())?)
            } else {
                emit_expression_with_parens(PREC_NEW, ExpressionContext::normal(), callee)?
            };
            fuse(vec![
                atom("new"),
                space(),
                callee_layout,
                emit_arguments(arguments)?,
            ])
        }
        ExpressionKind::Member { object, property } => emit_member(ctxt, object, property)?,
        ExpressionKind::Unary { operator, argument } => emit_unary(ctxt, *operator, argument)?,
        ExpressionKind::Update {
            operator,
            prefix,
            argument,
        } => {
            if *prefix {
                fuse(vec![
                    atom(operator.as_str()),
                    emit_expression_with_parens(PREC_UNARY, ctxt.reset_left(), argument)?,
                ])
            } else {
                // The operand is the leftmost token of a postfix update.
                fuse(vec![
                    emit_expression_with_parens(PREC_UNARY, ctxt, argument)?,
                    atom(operator.as_str()),
                ])
            }
        }
        ExpressionKind::Yield { argument, delegate } => {
            let mut parts = vec![atom("yield")];
            if *delegate {
                parts.push(atom("*"));
            }
            if let Some(argument) = argument {
                parts.push(if *delegate { pretty_space() } else { space() });
                parts.push(emit_expression_with_parens(
                    PREC_MIN,
                    ctxt.reset_left(),
                    argument,
                )?);
            }
            fuse(parts)
        }
        ExpressionKind::JsxElement(element) => super::jsx::emit_jsx_element(element)?,
        ExpressionKind::JsxFragment(fragment) => super::jsx::emit_jsx_fragment(fragment)?,
        ExpressionKind::TypeCast {
            expression,
            annotation,
        } => wrap_in_parens(fuse(vec![
            emit_expression_with_parens(PREC_MIN, ExpressionContext::normal(), expression)?,
            emit_type_annotation(annotation),
        ])),
        ExpressionKind::Import { argument } => fuse(vec![
            atom("import("),
            emit_expression_with_parens(PREC_MIN, ExpressionContext::normal(), argument)?,
            atom(")"),
        ]),
        ExpressionKind::MetaProperty { meta, property } => {
            fuse(vec![atom(meta.name.clone()), atom("."), atom(property.name.clone())])
        }
        ExpressionKind::Class(class) => emit_class(class)?,
        ExpressionKind::Comprehension => {
            return Err(LayoutError::unsupported(&expr.loc, "comprehension"));
        }
        ExpressionKind::Generator => {
            return Err(LayoutError::unsupported(&expr.loc, "generator expression"));
        }
    };
    Ok(source_location(expr.loc.clone(), layout))
}

/// Literal token for a literal node. Numbers render as source `raw` in
/// pretty mode and the shortest round-tripping decimal in ugly mode;
/// strings re-quote with whichever quote needs fewer escapes.
pub(crate) fn emit_literal(lit: &Literal) -> Layout {
    match &lit.value {
        LiteralValue::String(value) => atom(quote_string(value)),
        LiteralValue::Number(value) => if_pretty(atom(lit.raw.clone()), atom(format_number(*value))),
        LiteralValue::Boolean(true) => atom("true"),
        LiteralValue::Boolean(false) => atom("false"),
        LiteralValue::Null => atom("null"),
        LiteralValue::RegExp { .. } => atom(lit.raw.clone()),
    }
}

fn emit_array(elements: &[Option<ArrayElement>]) -> Result<Layout> {
    let len = elements.len();
    let mut children = Vec::with_capacity(len);
    for (i, element) in elements.iter().enumerate() {
        let item = match element {
            Some(ArrayElement::Expression(expr)) => {
                emit_expression_with_parens(PREC_MIN, ExpressionContext::normal(), expr)?
            }
            Some(ArrayElement::Spread { loc, argument }) => source_location(
                loc.clone(),
                fuse(vec![
                    atom("..."),
                    emit_expression_with_parens(PREC_MIN, ExpressionContext::normal(), argument)?,
                ]),
            ),
            None => Layout::Empty,
        };
        let is_last = i + 1 == len;
        children.push(if !is_last {
            fuse(vec![item, atom(","), if_break(Layout::Empty, pretty_space())])
        } else if element.is_none() {
            // A trailing hole only survives reparsing with its comma.
            fuse(vec![item, atom(",")])
        } else {
            fuse(vec![item, if_break(atom(","), Layout::Empty)])
        });
    }
    Ok(fuse(vec![
        atom("["),
        sequence(SequenceConfig::default(), children),
        atom("]"),
    ]))
}

fn emit_object(properties: &[ObjectProperty]) -> Result<Layout> {
    let mut items: Vec<(bool, Layout)> = Vec::with_capacity(properties.len());
    for property in properties {
        items.push((
            property_contains_function(property),
            emit_object_property(property)?,
        ));
    }

    // Blank line between properties when either side holds a function.
    let len = items.len();
    let mut children = Vec::with_capacity(len);
    let mut prev_has_function = false;
    for (i, (has_function, item)) in items.into_iter().enumerate() {
        if i > 0 && (has_function || prev_has_function) {
            children.push(atom(""));
        }
        prev_has_function = has_function;
        let is_last = i + 1 == len;
        children.push(if !is_last {
            fuse(vec![item, atom(","), if_break(Layout::Empty, pretty_space())])
        } else {
            fuse(vec![item, if_break(atom(","), Layout::Empty)])
        });
    }

    Ok(fuse(vec![
        atom("{"),
        sequence(SequenceConfig::default(), children),
        atom("}"),
    ]))
}

fn emit_object_property(property: &ObjectProperty) -> Result<Layout> {
    match property {
        ObjectProperty::Spread { loc, argument } => Ok(source_location(
            loc.clone(),
            fuse(vec![
                atom("..."),
                emit_expression_with_parens(PREC_MIN, ExpressionContext::normal(), argument)?,
            ]),
        )),
        ObjectProperty::Property {
            loc,
            kind,
            key,
            value,
            shorthand,
            method,
        } => {
            if let ObjectKey::PrivateName(name) = key {
                return Err(LayoutError::invalid(format!(
                    "private name #{} as object property key",
                    name.name
                )));
            }
            let layout = match kind {
                ObjectPropertyKind::Get | ObjectPropertyKind::Set => {
                    let ExpressionKind::Function(func) = &value.kind else {
                        return Err(LayoutError::invalid(
                            "getter or setter property without function value",
                        ));
                    };
                    let prefix = if *kind == ObjectPropertyKind::Get { "get" } else { "set" };
                    fuse(vec![
                        atom(prefix),
                        space(),
                        super::declarations::emit_method(key, func)?,
                    ])
                }
                ObjectPropertyKind::Init if *shorthand => {
                    emit_expression_with_parens(PREC_MIN, ExpressionContext::normal(), value)?
                }
                ObjectPropertyKind::Init if *method => {
                    let ExpressionKind::Function(func) = &value.kind else {
                        return Err(LayoutError::invalid("method property without function value"));
                    };
                    super::declarations::emit_method(key, func)?
                }
                ObjectPropertyKind::Init => fuse(vec![
                    emit_object_key(key, false)?,
                    atom(":"),
                    pretty_space(),
                    emit_expression_with_parens(PREC_MIN, ExpressionContext::normal(), value)?,
                ]),
            };
            Ok(source_location(loc.clone(), layout))
        }
    }
}

/// Whether a property's value holds a function: a function or arrow value,
/// a getter or setter, or an object whose own properties do, recursively.
fn property_contains_function(property: &ObjectProperty) -> bool {
    match property {
        ObjectProperty::Spread { .. } => false,
        ObjectProperty::Property { kind, value, .. } => {
            if matches!(kind, ObjectPropertyKind::Get | ObjectPropertyKind::Set) {
                return true;
            }
            match &value.kind {
                ExpressionKind::Function(_) | ExpressionKind::ArrowFunction(_) => true,
                ExpressionKind::Object { properties } => {
                    properties.iter().any(property_contains_function)
                }
                _ => false,
            }
        }
    }
}

pub(crate) fn emit_object_key(key: &ObjectKey, allow_private: bool) -> Result<Layout> {
    match key {
        ObjectKey::Identifier(id) => Ok(identifier(id.loc.clone(), &id.name)),
        ObjectKey::Literal(lit) => Ok(emit_literal(lit)),
        ObjectKey::PrivateName(name) if allow_private => Ok(source_location(
            name.loc.clone(),
            atom(format!("#{}", name.name)),
        )),
        ObjectKey::PrivateName(name) => Err(LayoutError::invalid(format!(
            "private name #{} outside a class body",
            name.name
        ))),
        ObjectKey::Computed(expr) => Ok(fuse(vec![
            atom("["),
            emit_expression(expr, ExpressionContext::normal())?,
            atom("]"),
        ])),
    }
}

pub(crate) fn emit_template_literal(template: &TemplateLiteral) -> Result<Layout> {
    let mut parts = vec![atom("`")];
    let mut expressions = template.expressions.iter();
    for quasi in &template.quasis {
        // The quasi carries its literal form; no re-escaping.
        parts.push(atom(quasi.raw.clone()));
        if !quasi.tail
            && let Some(expr) = expressions.next()
        {
            parts.push(atom("${"));
            parts.push(emit_expression(expr, ExpressionContext::normal())?);
            parts.push(atom("}"));
        }
    }
    parts.push(atom("`"));
    Ok(source_location(template.loc.clone(), fuse(parts)))
}

fn emit_arguments(arguments: &[CallArgument]) -> Result<Layout> {
    let mut items = Vec::with_capacity(arguments.len());
    for argument in arguments {
        items.push(match argument {
            CallArgument::Expression(expr) => {
                emit_expression_with_parens(PREC_MIN, ExpressionContext::normal(), expr)?
            }
            CallArgument::Spread { loc, argument } => source_location(
                loc.clone(),
                fuse(vec![
                    atom("..."),
                    emit_expression_with_parens(PREC_MIN, ExpressionContext::normal(), argument)?,
                ]),
            ),
        });
    }
    Ok(fuse(vec![atom("("), comma_list(items), atom(")")]))
}

fn emit_binary(
    p: u32,
    ctxt: ExpressionContext,
    operator: BinaryOp,
    left: &Expression,
    right: &Expression,
) -> Result<Layout> {
    // `**` is right-associative; every other binary operator associates
    // left, so the right operand requires one level more than the node.
    let (left_prec, right_prec) = if operator == BinaryOp::Exp {
        (p + 1, p)
    } else {
        (p, p + 1)
    };

    let left_layout = emit_expression_with_parens(left_prec, ctxt, left)?;

    let keyword = matches!(operator, BinaryOp::In | BinaryOp::Instanceof);
    let before_op = if keyword { space() } else { pretty_space() };

    // `x + +y` and `x - --y` keep a real space so the signs cannot fuse
    // into an update operator. Anything else threads the sign context so a
    // deeper leftmost sign still forces parens.
    let (after_op, right_ctxt) = if abutting_sign(operator, right) {
        (space(), ctxt.reset_left())
    } else {
        let left_ctxt = match operator {
            BinaryOp::Plus => ContextLeft::InPlusOp,
            BinaryOp::Minus => ContextLeft::InMinusOp,
            _ => ContextLeft::Normal,
        };
        (
            if keyword { space() } else { pretty_space() },
            ExpressionContext {
                left: left_ctxt,
                group: ctxt.group,
            },
        )
    };

    Ok(fuse(vec![
        left_layout,
        before_op,
        atom(operator.as_str()),
        after_op,
        emit_expression_with_parens(right_prec, right_ctxt, right)?,
    ]))
}

/// The right operand starts with a sign that would fuse with a binary `+`
/// or `-` into `++`/`--`.
fn abutting_sign(operator: BinaryOp, right: &Expression) -> bool {
    match operator {
        BinaryOp::Plus => match &right.kind {
            ExpressionKind::Unary { operator, .. } => *operator == UnaryOp::Plus,
            ExpressionKind::Update { prefix, .. } => *prefix,
            _ => false,
        },
        BinaryOp::Minus => match &right.kind {
            ExpressionKind::Unary { operator, .. } => *operator == UnaryOp::Minus,
            ExpressionKind::Update { prefix, .. } => *prefix,
            _ => false,
        },
        _ => false,
    }
}

fn emit_logical(
    p: u32,
    ctxt: ExpressionContext,
    operator: LogicalOp,
    left: &Expression,
    right: &Expression,
) -> Result<Layout> {
    Ok(fuse(vec![
        emit_expression_with_parens(p, ctxt, left)?,
        pretty_space(),
        atom(operator.as_str()),
        pretty_space(),
        emit_expression_with_parens(p + 1, ctxt.reset_left(), right)?,
    ]))
}

fn emit_member(
    ctxt: ExpressionContext,
    object: &Expression,
    property: &MemberProperty,
) -> Result<Layout> {
    let computed = matches!(property, MemberProperty::Computed(_));

    let object_layout = match &object.kind {
        // `1.foo` would lex the dot into the number, so the object gets a
        // second dot in ugly mode and parens around the raw in pretty mode.
        ExpressionKind::Literal(Literal {
            value: LiteralValue::Number(value),
            raw,
            ..
        }) if !computed => {
            source_location(object.loc.clone(), number_literal_member(raw, *value))
        }
        _ => emit_expression_with_parens(PREC_CALL, ctxt, object)?,
    };

    let property_layout = match property {
        MemberProperty::Identifier(id) => {
            fuse(vec![atom("."), identifier(id.loc.clone(), &id.name)])
        }
        MemberProperty::PrivateName(name) => fuse(vec![
            atom("."),
            source_location(name.loc.clone(), atom(format!("#{}", name.name))),
        ]),
        MemberProperty::Computed(expr) => fuse(vec![
            atom("["),
            emit_expression(expr, ExpressionContext::normal())?,
            atom("]"),
        ]),
    };

    Ok(fuse(vec![object_layout, property_layout]))
}

/// A numeric literal in non-computed member object position.
fn number_literal_member(raw: &str, value: f64) -> Layout {
    let shortest = format_number(value);
    let ugly = if !shortest.contains('.') && !shortest.contains('e') {
        atom(format!("{shortest}."))
    } else {
        atom(shortest)
    };
    let pretty = if !raw.contains('.') && !raw.contains(['e', 'E']) {
        wrap_in_parens(atom(raw.to_string()))
    } else {
        atom(raw.to_string())
    };
    if_pretty(pretty, ugly)
}

fn emit_unary(
    ctxt: ExpressionContext,
    operator: UnaryOp,
    argument: &Expression,
) -> Result<Layout> {
    let argument_ctxt = ExpressionContext {
        left: match operator {
            UnaryOp::Minus => ContextLeft::InMinusOp,
            UnaryOp::Plus => ContextLeft::InPlusOp,
            _ => ContextLeft::Normal,
        },
        group: ctxt.group,
    };

    let mut parts = vec![atom(operator.as_str())];
    if operator.is_keyword() && precedence_of(argument) >= PREC_UNARY {
        // `typeof x` needs the space; `typeof(a, b)` gets parens instead.
        parts.push(space());
    }
    parts.push(emit_expression_with_parens(
        PREC_UNARY,
        argument_ctxt,
        argument,
    )?);
    Ok(fuse(parts))
}

fn emit_arrow_function(func: &Function) -> Result<Layout> {
    let mut parts = Vec::new();
    if func.is_async {
        parts.push(atom("async"));
        parts.push(space());
    }

    // A single bare identifier parameter prints without parens, unless the
    // header carries type machinery.
    let bare_param = func.type_params.is_none()
        && func.return_type.is_none()
        && func.predicate.is_none()
        && func.params.rest.is_none()
        && func.params.params.len() == 1
        && func.params.params[0].is_bare_identifier();

    if bare_param {
        parts.push(emit_pattern(
            &func.params.params[0],
            ExpressionContext::normal(),
        )?);
    } else {
        if let Some(type_params) = &func.type_params {
            parts.push(super::types::emit_type_params(type_params));
        }
        parts.push(super::declarations::emit_function_params(&func.params)?);
        if let Some(return_type) = &func.return_type {
            parts.push(super::declarations::emit_return_annotation(return_type));
        }
        if let Some(predicate) = &func.predicate {
            parts.push(space());
            parts.push(super::declarations::emit_predicate(predicate)?);
        }
    }

    parts.push(pretty_space());
    parts.push(atom("=>"));
    parts.push(pretty_space());

    match &func.body {
        FunctionBody::Block(block) => parts.push(super::emit_block(block)?),
        FunctionBody::Expression(expr) => {
            let body_ctxt = ExpressionContext {
                left: ContextLeft::Normal,
                group: ContextGroup::InArrowFuncBody,
            };
            parts.push(emit_expression_with_parens(PREC_MIN, body_ctxt, expr)?);
        }
    }
    Ok(fuse(parts))
}

/// One-shot scan for a call expression anywhere in a `new` callee chain.
/// Only wrappers that do not already parenthesize are walked.
pub(crate) fn contains_call_expression(expr: &Expression) -> bool {
    match &expr.kind {
        ExpressionKind::Call { .. } | ExpressionKind::Import { .. } => true,
        ExpressionKind::Member { object, .. } => contains_call_expression(object),
        ExpressionKind::TaggedTemplate { tag, .. } => contains_call_expression(tag),
        _ => false,
    }
}

/// A comma-joined sequence with no trailing separator.
fn comma_list_flat(items: Vec<Layout>) -> Layout {
    fuse_list(items, fuse(vec![atom(","), pretty_space()]))
}
