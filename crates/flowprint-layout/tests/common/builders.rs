//! Shorthand constructors for AST nodes under test.
//!
//! Locations default to the synthetic `Loc::none()`; tests that exercise
//! blank-line logic build real line numbers with `stmt_at`.

use flowprint_ast::*;
use flowprint_common::{Loc, Position};

pub fn loc_at(start_line: u32, end_line: u32) -> Loc {
    Loc::new(
        None,
        Position::new(start_line, 0, start_line * 100),
        Position::new(end_line, 80, end_line * 100 + 80),
    )
}

// =============================================================================
// Expressions
// =============================================================================

pub fn expr(kind: ExpressionKind) -> Expression {
    Expression {
        loc: Loc::none(),
        kind,
    }
}

pub fn ident_id(name: &str) -> Identifier {
    Identifier::new(Loc::none(), name)
}

pub fn ident(name: &str) -> Expression {
    expr(ExpressionKind::Identifier(ident_id(name)))
}

pub fn number(raw: &str, value: f64) -> Expression {
    expr(ExpressionKind::Literal(Literal {
        loc: Loc::none(),
        value: LiteralValue::Number(value),
        raw: raw.to_string(),
    }))
}

pub fn string(value: &str) -> Expression {
    expr(ExpressionKind::Literal(Literal {
        loc: Loc::none(),
        value: LiteralValue::String(value.to_string()),
        raw: format!("\"{value}\""),
    }))
}

pub fn binary(operator: BinaryOp, left: Expression, right: Expression) -> Expression {
    expr(ExpressionKind::Binary {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn logical(operator: LogicalOp, left: Expression, right: Expression) -> Expression {
    expr(ExpressionKind::Logical {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn unary(operator: UnaryOp, argument: Expression) -> Expression {
    expr(ExpressionKind::Unary {
        operator,
        argument: Box::new(argument),
    })
}

pub fn update(operator: UpdateOp, prefix: bool, argument: Expression) -> Expression {
    expr(ExpressionKind::Update {
        operator,
        prefix,
        argument: Box::new(argument),
    })
}

pub fn call(callee: Expression, arguments: Vec<Expression>) -> Expression {
    expr(ExpressionKind::Call {
        callee: Box::new(callee),
        arguments: arguments.into_iter().map(CallArgument::Expression).collect(),
    })
}

pub fn new_expr(callee: Expression, arguments: Vec<Expression>) -> Expression {
    expr(ExpressionKind::New {
        callee: Box::new(callee),
        arguments: arguments.into_iter().map(CallArgument::Expression).collect(),
    })
}

pub fn member(object: Expression, property: &str) -> Expression {
    expr(ExpressionKind::Member {
        object: Box::new(object),
        property: MemberProperty::Identifier(ident_id(property)),
    })
}

pub fn sequence_expr(expressions: Vec<Expression>) -> Expression {
    expr(ExpressionKind::Sequence { expressions })
}

pub fn conditional(test: Expression, consequent: Expression, alternate: Expression) -> Expression {
    expr(ExpressionKind::Conditional {
        test: Box::new(test),
        consequent: Box::new(consequent),
        alternate: Box::new(alternate),
    })
}

pub fn assign(left: Pattern, right: Expression) -> Expression {
    expr(ExpressionKind::Assignment {
        operator: AssignmentOp::Assign,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn object(properties: Vec<ObjectProperty>) -> Expression {
    expr(ExpressionKind::Object { properties })
}

pub fn init_prop(key: &str, value: Expression) -> ObjectProperty {
    ObjectProperty::Property {
        loc: Loc::none(),
        kind: ObjectPropertyKind::Init,
        key: ObjectKey::Identifier(ident_id(key)),
        value: Box::new(value),
        shorthand: false,
        method: false,
    }
}

pub fn array(elements: Vec<Option<Expression>>) -> Expression {
    expr(ExpressionKind::Array {
        elements: elements
            .into_iter()
            .map(|element| element.map(ArrayElement::Expression))
            .collect(),
    })
}

// =============================================================================
// Functions
// =============================================================================

pub fn function(id: Option<&str>, params: Vec<Pattern>, body: Vec<Statement>) -> Function {
    Function {
        loc: Loc::none(),
        id: id.map(ident_id),
        params: FunctionParams {
            loc: Loc::none(),
            params,
            rest: None,
        },
        body: FunctionBody::Block(Block {
            loc: Loc::none(),
            body,
        }),
        is_async: false,
        is_generator: false,
        predicate: None,
        return_type: None,
        type_params: None,
    }
}

pub fn arrow(params: Vec<Pattern>, body: Expression) -> Expression {
    let mut func = function(None, params, vec![]);
    func.body = FunctionBody::Expression(Box::new(body));
    expr(ExpressionKind::ArrowFunction(func))
}

// =============================================================================
// Patterns
// =============================================================================

pub fn pat(kind: PatternKind) -> Pattern {
    Pattern {
        loc: Loc::none(),
        kind,
    }
}

pub fn pat_ident(name: &str) -> Pattern {
    pat(PatternKind::Identifier {
        name: name.to_string(),
        annotation: None,
        optional: false,
    })
}

pub fn pat_expr(expression: Expression) -> Pattern {
    pat(PatternKind::Expression(Box::new(expression)))
}

pub fn object_pattern(names: &[&str]) -> Pattern {
    pat(PatternKind::Object {
        properties: names
            .iter()
            .map(|name| ObjectPatternProperty::Property {
                loc: Loc::none(),
                key: ObjectKey::Identifier(ident_id(name)),
                pattern: Box::new(pat_ident(name)),
                shorthand: true,
            })
            .collect(),
        annotation: None,
    })
}

// =============================================================================
// Statements
// =============================================================================

pub fn stmt(kind: StatementKind) -> Statement {
    Statement {
        loc: Loc::none(),
        kind,
    }
}

pub fn stmt_at(start_line: u32, end_line: u32, kind: StatementKind) -> Statement {
    Statement {
        loc: loc_at(start_line, end_line),
        kind,
    }
}

pub fn expr_stmt(expression: Expression) -> Statement {
    stmt(StatementKind::Expression {
        expression: Box::new(expression),
    })
}

pub fn block(body: Vec<Statement>) -> Block {
    Block {
        loc: Loc::none(),
        body,
    }
}

pub fn var_decl(kind: VariableKind, name: &str, init: Option<Expression>) -> Statement {
    stmt(StatementKind::VariableDeclaration(VariableDeclaration {
        loc: Loc::none(),
        kind,
        declarations: vec![VariableDeclarator {
            loc: Loc::none(),
            id: pat_ident(name),
            init,
        }],
    }))
}

pub fn return_stmt(argument: Option<Expression>) -> Statement {
    stmt(StatementKind::Return {
        argument: argument.map(Box::new),
    })
}

// =============================================================================
// Types
// =============================================================================

pub fn ty(kind: TypeKind) -> Type {
    Type {
        loc: Loc::none(),
        kind,
    }
}

pub fn generic(name: &str) -> Type {
    ty(TypeKind::Generic(GenericType {
        id: GenericTypeId::Unqualified(ident_id(name)),
        type_args: None,
    }))
}

// =============================================================================
// Programs
// =============================================================================

pub fn program(body: Vec<Statement>) -> Program {
    let end = body
        .last()
        .map(|stmt| stmt.loc.end)
        .unwrap_or(Position::new(1, 0, 0));
    Program {
        loc: Loc::new(None, Position::new(1, 0, 0), end),
        body,
        comments: vec![],
    }
}

pub fn line_comment(text: &str, loc: Loc) -> Comment {
    Comment {
        loc,
        kind: CommentKind::Line,
        text: text.to_string(),
    }
}

pub fn block_comment(text: &str, loc: Loc) -> Comment {
    Comment {
        loc,
        kind: CommentKind::Block,
        text: text.to_string(),
    }
}
