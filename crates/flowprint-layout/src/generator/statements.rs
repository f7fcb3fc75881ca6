//! Statement emission.
//!
//! Statements own terminator policy: most end with `;`, and the last
//! statement of a block carries a pretty-only semicolon that ugly mode
//! drops where automatic semicolon insertion makes it redundant.

use flowprint_ast::{
    Block, DeclareClass, DeclareExportDeclaration, DeclareFunction, DeclareModuleId,
    DeclareVariable, ExportDefaultDeclaration, ExportNamedSpecifier, Expression, ExpressionKind,
    ForInLeft, ForInit, ImportKind, ImportSpecifiers, Interface, NamedImport, OpaqueType,
    Statement, StatementKind, SwitchCase, TypeAlias,
};

use crate::error::{LayoutError, Result};
use crate::layout::{
    BreakMode, Layout, SequenceConfig, atom, fuse, identifier, if_pretty, pretty_space, sequence,
    source_location, space,
};
use crate::precedence::{ContextGroup, ContextLeft, ExpressionContext, PREC_MIN};

use super::types::{emit_function_type, emit_interface_like, emit_type_params};
use super::{
    comma_list, emit_expression, emit_expression_with_parens, emit_literal, emit_pattern,
    emit_type, emit_type_annotation, emit_variable_declaration, list_with_newlines, semicolon,
    wrap_in_parens_on_break,
};

pub(crate) fn emit_statement(stmt: &Statement, pretty_semicolon: bool) -> Result<Layout> {
    let layout = match &stmt.kind {
        StatementKind::Block(block) => emit_block(block)?,
        StatementKind::Empty => atom(";"),
        StatementKind::Expression { expression } => {
            let ctxt = ExpressionContext::with_left(ContextLeft::InExpressionStatement);
            fuse(vec![
                emit_expression_with_parens(0, ctxt, expression)?,
                semicolon(pretty_semicolon),
            ])
        }
        StatementKind::If {
            test,
            consequent,
            alternate,
        } => {
            let mut parts = vec![
                atom("if"),
                pretty_space(),
                atom("("),
                emit_expression(test, ExpressionContext::normal())?,
                atom(")"),
            ];
            match alternate {
                None => parts.push(emit_statement_body(consequent, pretty_semicolon)?),
                Some(alternate) => {
                    parts.push(emit_statement_body(consequent, false)?);
                    parts.push(pretty_space());
                    parts.push(atom("else"));
                    if matches!(alternate.kind, StatementKind::Block(_)) {
                        parts.push(emit_statement_body(alternate, pretty_semicolon)?);
                    } else {
                        parts.push(space());
                        parts.push(emit_statement(alternate, pretty_semicolon)?);
                    }
                }
            }
            fuse(parts)
        }
        StatementKind::Labeled { label, body } => fuse(vec![
            identifier(label.loc.clone(), &label.name),
            atom(":"),
            pretty_space(),
            emit_statement(body, pretty_semicolon)?,
        ]),
        StatementKind::Break { label } => {
            let mut parts = vec![atom("break")];
            if let Some(label) = label {
                parts.push(space());
                parts.push(identifier(label.loc.clone(), &label.name));
            }
            parts.push(semicolon(pretty_semicolon));
            fuse(parts)
        }
        StatementKind::Continue { label } => {
            let mut parts = vec![atom("continue")];
            if let Some(label) = label {
                parts.push(space());
                parts.push(identifier(label.loc.clone(), &label.name));
            }
            parts.push(semicolon(pretty_semicolon));
            fuse(parts)
        }
        StatementKind::With { object, body } => fuse(vec![
            atom("with"),
            pretty_space(),
            atom("("),
            emit_expression(object, ExpressionContext::normal())?,
            atom(")"),
            emit_statement_body(body, pretty_semicolon)?,
        ]),
        StatementKind::Switch {
            discriminant,
            cases,
        } => emit_switch(discriminant, cases)?,
        StatementKind::Return { argument } => {
            let mut parts = vec![atom("return")];
            if let Some(argument) = argument {
                parts.push(space());
                parts.push(emit_return_argument(argument)?);
            }
            parts.push(semicolon(pretty_semicolon));
            fuse(parts)
        }
        StatementKind::Throw { argument } => fuse(vec![
            atom("throw"),
            space(),
            wrap_in_parens_on_break(emit_expression(argument, ExpressionContext::normal())?),
            semicolon(pretty_semicolon),
        ]),
        StatementKind::Try {
            block,
            handler,
            finalizer,
        } => {
            let mut parts = vec![atom("try"), pretty_space(), emit_block(block)?];
            if let Some(handler) = handler {
                parts.push(pretty_space());
                parts.push(atom("catch"));
                if let Some(param) = &handler.param {
                    parts.push(pretty_space());
                    parts.push(atom("("));
                    parts.push(emit_pattern(param, ExpressionContext::normal())?);
                    parts.push(atom(")"));
                }
                parts.push(pretty_space());
                let body = emit_block(&handler.body)?;
                parts.push(source_location(handler.loc.clone(), body));
            }
            if let Some(finalizer) = finalizer {
                parts.push(pretty_space());
                parts.push(atom("finally"));
                parts.push(pretty_space());
                parts.push(emit_block(finalizer)?);
            }
            fuse(parts)
        }
        StatementKind::While { test, body } => fuse(vec![
            atom("while"),
            pretty_space(),
            atom("("),
            emit_expression(test, ExpressionContext::normal())?,
            atom(")"),
            emit_statement_body(body, pretty_semicolon)?,
        ]),
        StatementKind::DoWhile { body, test } => {
            let body_layout = if matches!(body.kind, StatementKind::Block(_)) {
                fuse(vec![
                    pretty_space(),
                    emit_statement(body, false)?,
                    pretty_space(),
                ])
            } else {
                fuse(vec![space(), emit_statement(body, false)?, pretty_space()])
            };
            fuse(vec![
                atom("do"),
                body_layout,
                atom("while"),
                pretty_space(),
                atom("("),
                emit_expression(test, ExpressionContext::normal())?,
                atom(")"),
                // `do … while` always terminates.
                atom(";"),
            ])
        }
        StatementKind::For {
            init,
            test,
            update,
            body,
        } => {
            let mut parts = vec![atom("for"), pretty_space(), atom("(")];
            if let Some(init) = init {
                let ctxt = ExpressionContext {
                    left: ContextLeft::Normal,
                    group: ContextGroup::InForInit,
                };
                parts.push(match init {
                    ForInit::Declaration(declaration) => {
                        emit_variable_declaration(declaration, ctxt)?
                    }
                    ForInit::Expression(expr) => emit_expression_with_parens(0, ctxt, expr)?,
                });
            }
            parts.push(atom(";"));
            if let Some(test) = test {
                parts.push(pretty_space());
                parts.push(emit_expression(test, ExpressionContext::normal())?);
            }
            parts.push(atom(";"));
            if let Some(update) = update {
                parts.push(pretty_space());
                parts.push(emit_expression(update, ExpressionContext::normal())?);
            }
            parts.push(atom(")"));
            parts.push(emit_statement_body(body, pretty_semicolon)?);
            fuse(parts)
        }
        StatementKind::ForIn { left, right, body } => fuse(vec![
            atom("for"),
            pretty_space(),
            atom("("),
            emit_for_left(left)?,
            space(),
            atom("in"),
            space(),
            emit_expression_with_parens(PREC_MIN, ExpressionContext::normal(), right)?,
            atom(")"),
            emit_statement_body(body, pretty_semicolon)?,
        ]),
        StatementKind::ForOf {
            left,
            right,
            body,
            is_await,
        } => {
            let mut parts = vec![atom("for")];
            if *is_await {
                parts.push(space());
                parts.push(atom("await"));
            }
            parts.push(pretty_space());
            parts.push(atom("("));
            parts.push(emit_for_left(left)?);
            parts.push(space());
            parts.push(atom("of"));
            parts.push(space());
            parts.push(emit_expression_with_parens(
                PREC_MIN,
                ExpressionContext::normal(),
                right,
            )?);
            parts.push(atom(")"));
            parts.push(emit_statement_body(body, pretty_semicolon)?);
            fuse(parts)
        }
        StatementKind::Debugger => fuse(vec![atom("debugger"), semicolon(pretty_semicolon)]),
        StatementKind::FunctionDeclaration(func) => super::emit_function(func)?,
        StatementKind::VariableDeclaration(declaration) => fuse(vec![
            emit_variable_declaration(declaration, ExpressionContext::normal())?,
            semicolon(pretty_semicolon),
        ]),
        StatementKind::ClassDeclaration(class) => super::emit_class(class)?,
        StatementKind::TypeAlias(alias) => {
            fuse(vec![type_alias_layout(alias), semicolon(pretty_semicolon)])
        }
        StatementKind::OpaqueType(opaque) => {
            fuse(vec![opaque_type_layout(opaque), semicolon(pretty_semicolon)])
        }
        StatementKind::Interface(interface) => fuse(vec![
            atom("interface"),
            space(),
            interface_layout(interface),
        ]),
        StatementKind::DeclareVariable(declare) => fuse(vec![
            atom("declare"),
            space(),
            declare_variable_layout(declare),
            semicolon(pretty_semicolon),
        ]),
        StatementKind::DeclareFunction(declare) => fuse(vec![
            atom("declare"),
            space(),
            declare_function_layout(declare)?,
            semicolon(pretty_semicolon),
        ]),
        StatementKind::DeclareClass(declare) => fuse(vec![
            atom("declare"),
            space(),
            declare_class_layout(declare),
        ]),
        StatementKind::DeclareModule { id, body } => {
            let id_layout = match id {
                DeclareModuleId::Identifier(id) => identifier(id.loc.clone(), &id.name),
                DeclareModuleId::StringLiteral(lit) => emit_literal(lit),
            };
            fuse(vec![
                atom("declare module"),
                space(),
                id_layout,
                pretty_space(),
                emit_block(body)?,
            ])
        }
        StatementKind::DeclareModuleExports { annotation } => fuse(vec![
            atom("declare module.exports"),
            emit_type_annotation(annotation),
            semicolon(pretty_semicolon),
        ]),
        StatementKind::DeclareTypeAlias(alias) => fuse(vec![
            atom("declare"),
            space(),
            type_alias_layout(alias),
            semicolon(pretty_semicolon),
        ]),
        StatementKind::DeclareOpaqueType(opaque) => fuse(vec![
            atom("declare"),
            space(),
            opaque_type_layout(opaque),
            semicolon(pretty_semicolon),
        ]),
        StatementKind::DeclareInterface(interface) => fuse(vec![
            atom("declare interface"),
            space(),
            interface_layout(interface),
        ]),
        StatementKind::DeclareExport {
            default,
            declaration,
            specifiers,
            source,
        } => emit_declare_export(*default, declaration, specifiers, source, pretty_semicolon)?,
        StatementKind::ImportDeclaration {
            import_kind,
            default,
            specifiers,
            source,
        } => emit_import(*import_kind, default, specifiers, source, pretty_semicolon),
        StatementKind::ExportNamed {
            export_kind,
            declaration,
            specifiers,
            source,
        } => {
            if let Some(declaration) = declaration {
                fuse(vec![
                    atom("export"),
                    space(),
                    emit_statement(declaration, false)?,
                ])
            } else {
                let mut parts = vec![atom("export")];
                if *export_kind == ImportKind::Type {
                    parts.push(space());
                    parts.push(atom("type"));
                }
                parts.push(pretty_space());
                parts.push(export_specifier_braces(specifiers));
                if let Some(source) = source {
                    parts.push(space());
                    parts.push(atom("from"));
                    parts.push(pretty_space());
                    parts.push(emit_literal(source));
                }
                parts.push(semicolon(pretty_semicolon));
                fuse(parts)
            }
        }
        StatementKind::ExportDefault { declaration } => {
            let mut parts = vec![atom("export default"), space()];
            match declaration {
                ExportDefaultDeclaration::Declaration(declaration) => {
                    parts.push(emit_statement(declaration, false)?);
                }
                ExportDefaultDeclaration::Expression(expr) => {
                    parts.push(emit_expression_with_parens(
                        PREC_MIN,
                        ExpressionContext::normal(),
                        expr,
                    )?);
                    parts.push(semicolon(pretty_semicolon));
                }
            }
            fuse(parts)
        }
        StatementKind::ExportAll { exported, source } => {
            let mut parts = vec![atom("export"), pretty_space(), atom("*")];
            if let Some(exported) = exported {
                parts.push(space());
                parts.push(atom("as"));
                parts.push(space());
                parts.push(identifier(exported.loc.clone(), &exported.name));
            }
            parts.push(space());
            parts.push(atom("from"));
            parts.push(pretty_space());
            parts.push(emit_literal(source));
            parts.push(semicolon(pretty_semicolon));
            fuse(parts)
        }
    };
    Ok(source_location(stmt.loc.clone(), layout))
}

/// `{ … }` with the trailing statement on a pretty-only semicolon.
pub(crate) fn emit_block(block: &Block) -> Result<Layout> {
    if block.body.is_empty() {
        return Ok(atom("{}"));
    }
    let mut items = Vec::with_capacity(block.body.len());
    for (i, stmt) in block.body.iter().enumerate() {
        let pretty_semicolon = i + 1 == block.body.len();
        items.push((stmt.loc.clone(), emit_statement(stmt, pretty_semicolon)?));
    }
    Ok(fuse(vec![
        atom("{"),
        sequence(
            SequenceConfig::with_break(BreakMode::IfPretty).inline(false, false),
            list_with_newlines(items),
        ),
        atom("}"),
    ]))
}

/// The body of a control-flow statement. Blocks attach with a pretty
/// space; an empty body renders `{}` in pretty mode and a bare `;` in
/// ugly mode; anything else is a nested statement.
fn emit_statement_body(stmt: &Statement, pretty_semicolon: bool) -> Result<Layout> {
    match &stmt.kind {
        StatementKind::Block(block) => Ok(fuse(vec![
            pretty_space(),
            source_location(stmt.loc.clone(), emit_block(block)?),
        ])),
        StatementKind::Empty => Ok(if_pretty(
            fuse(vec![space(), atom("{}")]),
            atom(";"),
        )),
        _ => Ok(fuse(vec![
            pretty_space(),
            emit_statement(stmt, pretty_semicolon)?,
        ])),
    }
}

/// A broken `return` or `throw` argument pulls parentheses in with the
/// break so ASI cannot cut the statement short.
fn emit_return_argument(argument: &Expression) -> Result<Layout> {
    match &argument.kind {
        ExpressionKind::Logical { .. }
        | ExpressionKind::Binary { .. }
        | ExpressionKind::Sequence { .. }
        | ExpressionKind::JsxElement(_) => Ok(wrap_in_parens_on_break(emit_expression(
            argument,
            ExpressionContext::normal(),
        )?)),
        _ => emit_expression_with_parens(PREC_MIN, ExpressionContext::normal(), argument),
    }
}

fn emit_for_left(left: &ForInLeft) -> Result<Layout> {
    match left {
        ForInLeft::Declaration(declaration) => {
            emit_variable_declaration(declaration, ExpressionContext::normal())
        }
        ForInLeft::Pattern(pattern) => emit_pattern(pattern, ExpressionContext::normal()),
    }
}

fn emit_switch(discriminant: &Expression, cases: &[SwitchCase]) -> Result<Layout> {
    let mut case_layouts = Vec::with_capacity(cases.len());
    for (i, case) in cases.iter().enumerate() {
        let is_last_case = i + 1 == cases.len();
        let mut parts = match &case.test {
            Some(test) => vec![
                atom("case"),
                space(),
                emit_expression(test, ExpressionContext::normal())?,
                atom(":"),
            ],
            None => vec![atom("default:")],
        };
        if !case.consequent.is_empty() {
            let mut items = Vec::with_capacity(case.consequent.len());
            for (j, stmt) in case.consequent.iter().enumerate() {
                let pretty_semicolon = is_last_case && j + 1 == case.consequent.len();
                items.push((stmt.loc.clone(), emit_statement(stmt, pretty_semicolon)?));
            }
            parts.push(sequence(
                SequenceConfig::with_break(BreakMode::IfPretty).inline(false, true),
                list_with_newlines(items),
            ));
        }
        case_layouts.push(source_location(case.loc.clone(), fuse(parts)));
    }

    let body = if case_layouts.is_empty() {
        atom("{}")
    } else {
        fuse(vec![
            atom("{"),
            sequence(
                SequenceConfig::with_break(BreakMode::IfPretty).inline(false, false),
                case_layouts,
            ),
            atom("}"),
        ])
    };
    Ok(fuse(vec![
        atom("switch"),
        pretty_space(),
        atom("("),
        emit_expression(discriminant, ExpressionContext::normal())?,
        atom(")"),
        pretty_space(),
        body,
    ]))
}

// =============================================================================
// Flow declarations
// =============================================================================

fn type_alias_layout(alias: &TypeAlias) -> Layout {
    let mut parts = vec![
        atom("type"),
        space(),
        identifier(alias.id.loc.clone(), &alias.id.name),
    ];
    if let Some(type_params) = &alias.type_params {
        parts.push(emit_type_params(type_params));
    }
    parts.push(pretty_space());
    parts.push(atom("="));
    parts.push(pretty_space());
    parts.push(emit_type(&alias.right));
    fuse(parts)
}

fn opaque_type_layout(opaque: &OpaqueType) -> Layout {
    let mut parts = vec![
        atom("opaque type"),
        space(),
        identifier(opaque.id.loc.clone(), &opaque.id.name),
    ];
    if let Some(type_params) = &opaque.type_params {
        parts.push(emit_type_params(type_params));
    }
    if let Some(supertype) = &opaque.supertype {
        parts.push(emit_type_annotation(supertype));
    }
    if let Some(impltype) = &opaque.impltype {
        parts.push(pretty_space());
        parts.push(atom("="));
        parts.push(pretty_space());
        parts.push(emit_type(impltype));
    }
    fuse(parts)
}

fn interface_layout(interface: &Interface) -> Layout {
    emit_interface_like(
        &interface.id,
        interface.type_params.as_ref(),
        &interface.extends,
        &interface.body,
    )
}

fn declare_variable_layout(declare: &DeclareVariable) -> Layout {
    let mut parts = vec![
        atom("var"),
        space(),
        identifier(declare.id.loc.clone(), &declare.id.name),
    ];
    if let Some(annotation) = &declare.annotation {
        parts.push(emit_type_annotation(annotation));
    }
    fuse(parts)
}

fn declare_function_layout(declare: &DeclareFunction) -> Result<Layout> {
    let Some(func) = declare.function_type() else {
        return Err(LayoutError::invalid(format!(
            "declare function {} without a function type annotation",
            declare.id.name
        )));
    };
    let mut parts = vec![
        atom("function"),
        space(),
        identifier(declare.id.loc.clone(), &declare.id.name),
        emit_function_type(func, true),
    ];
    if let Some(predicate) = &declare.predicate {
        parts.push(space());
        parts.push(super::declarations::emit_predicate(predicate)?);
    }
    Ok(fuse(parts))
}

fn declare_class_layout(declare: &DeclareClass) -> Layout {
    fuse(vec![
        atom("class"),
        space(),
        emit_interface_like(
            &declare.id,
            declare.type_params.as_ref(),
            &declare.extends,
            &declare.body,
        ),
    ])
}

fn emit_declare_export(
    default: bool,
    declaration: &Option<DeclareExportDeclaration>,
    specifiers: &[ExportNamedSpecifier],
    source: &Option<flowprint_ast::Literal>,
    pretty_semicolon: bool,
) -> Result<Layout> {
    let mut parts = vec![atom("declare export")];
    if default {
        parts.push(space());
        parts.push(atom("default"));
    }
    match declaration {
        Some(DeclareExportDeclaration::Variable(declare)) => {
            parts.push(space());
            parts.push(declare_variable_layout(declare));
            parts.push(semicolon(pretty_semicolon));
        }
        Some(DeclareExportDeclaration::Function(declare)) => {
            parts.push(space());
            parts.push(declare_function_layout(declare)?);
            parts.push(semicolon(pretty_semicolon));
        }
        Some(DeclareExportDeclaration::Class(declare)) => {
            parts.push(space());
            parts.push(declare_class_layout(declare));
        }
        Some(DeclareExportDeclaration::DefaultType(ty)) => {
            parts.push(space());
            parts.push(emit_type(ty));
            parts.push(semicolon(pretty_semicolon));
        }
        None => {
            if specifiers.is_empty() && source.is_none() {
                return Err(LayoutError::invalid(
                    "declare export with no declaration or specifiers",
                ));
            }
            parts.push(pretty_space());
            parts.push(export_specifier_braces(specifiers));
            if let Some(source) = source {
                parts.push(space());
                parts.push(atom("from"));
                parts.push(pretty_space());
                parts.push(emit_literal(source));
            }
            parts.push(semicolon(pretty_semicolon));
        }
    }
    Ok(fuse(parts))
}

fn export_specifier_braces(specifiers: &[ExportNamedSpecifier]) -> Layout {
    let items = specifiers
        .iter()
        .map(|specifier| {
            let mut parts = vec![identifier(
                specifier.local.loc.clone(),
                &specifier.local.name,
            )];
            if let Some(exported) = &specifier.exported {
                parts.push(space());
                parts.push(atom("as"));
                parts.push(space());
                parts.push(identifier(exported.loc.clone(), &exported.name));
            }
            source_location(specifier.loc.clone(), fuse(parts))
        })
        .collect();
    fuse(vec![atom("{"), comma_list(items), atom("}")])
}

// =============================================================================
// Modules
// =============================================================================

fn emit_import(
    import_kind: ImportKind,
    default: &Option<flowprint_ast::Identifier>,
    specifiers: &Option<ImportSpecifiers>,
    source: &flowprint_ast::Literal,
    pretty_semicolon: bool,
) -> Layout {
    let mut parts = vec![atom("import")];
    if import_kind != ImportKind::Value {
        parts.push(space());
        parts.push(atom(import_kind.as_str()));
    }

    let mut has_bindings = false;
    if let Some(default) = default {
        parts.push(space());
        parts.push(identifier(default.loc.clone(), &default.name));
        has_bindings = true;
    }
    match specifiers {
        Some(ImportSpecifiers::Namespace(id)) => {
            if has_bindings {
                parts.push(atom(","));
                parts.push(pretty_space());
            } else {
                parts.push(space());
            }
            parts.push(atom("*"));
            parts.push(space());
            parts.push(atom("as"));
            parts.push(space());
            parts.push(identifier(id.loc.clone(), &id.name));
            has_bindings = true;
        }
        Some(ImportSpecifiers::Named(named)) => {
            if has_bindings {
                parts.push(atom(","));
                parts.push(pretty_space());
            } else {
                parts.push(pretty_space());
            }
            let items = named.iter().map(emit_named_import).collect();
            parts.push(fuse(vec![atom("{"), comma_list(items), atom("}")]));
            has_bindings = true;
        }
        None => {}
    }

    if has_bindings {
        parts.push(space());
        parts.push(atom("from"));
        parts.push(pretty_space());
    } else {
        parts.push(space());
    }
    parts.push(emit_literal(source));
    parts.push(semicolon(pretty_semicolon));
    fuse(parts)
}

fn emit_named_import(specifier: &NamedImport) -> Layout {
    let mut parts = Vec::new();
    if let Some(kind) = specifier.kind
        && kind != ImportKind::Value
    {
        parts.push(atom(kind.as_str()));
        parts.push(space());
    }
    parts.push(identifier(
        specifier.remote.loc.clone(),
        &specifier.remote.name,
    ));
    if let Some(local) = &specifier.local {
        parts.push(space());
        parts.push(atom("as"));
        parts.push(space());
        parts.push(identifier(local.loc.clone(), &local.name));
    }
    fuse(parts)
}
